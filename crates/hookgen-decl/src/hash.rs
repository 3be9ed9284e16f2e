//! Content hashing.
//!
//! Generated artifacts are content-addressed with BLAKE3 so that two runs
//! over identical declaration trees can be checked for byte-identical
//! output by comparing hashes.

/// Computes a BLAKE3 hash of arbitrary data.
///
/// # Returns
/// * A 64-character lowercase hexadecimal string
pub fn blake3_hash(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Computes a BLAKE3 hash of a string.
pub fn blake3_hash_str(s: &str) -> String {
    blake3_hash(s.as_bytes())
}
