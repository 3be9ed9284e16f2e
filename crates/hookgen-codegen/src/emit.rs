//! Artifact emission.
//!
//! Sinks accept `(package, name, content, dependency)` and return a
//! committed handle carrying the byte length and BLAKE3 content hash.
//! Artifact identity is package plus generated name; each identity is
//! written exactly once per batch, and the dependency records which source
//! unit must trigger regeneration on change.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use hookgen_decl::{blake3_hash, is_valid_identifier, is_valid_package};
use thiserror::Error;

/// Emission failure for one artifact.
#[derive(Debug, Error)]
pub enum EmitError {
    /// The same artifact identity was written twice in one batch.
    #[error("artifact '{0}' already written")]
    Duplicate(String),

    /// Package or name would escape the output root or is not a valid
    /// source path.
    #[error("unsafe artifact identity: '{0}'")]
    UnsafeIdentity(String),

    /// I/O error from the underlying writer.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A committed, closed artifact handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommittedArtifact {
    /// Package of the artifact; empty for the default package.
    pub package: String,
    /// Generated type name.
    pub name: String,
    /// Content length in bytes.
    pub bytes: u64,
    /// Hex-encoded BLAKE3 hash of the content.
    pub content_hash: String,
    /// Source unit the artifact depends on for incremental rebuilds.
    pub dependency: String,
}

impl CommittedArtifact {
    /// The artifact identity, `package.Name` (or `Name` in the default
    /// package).
    pub fn identity(&self) -> String {
        artifact_identity(&self.package, &self.name)
    }
}

fn artifact_identity(package: &str, name: &str) -> String {
    if package.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", package, name)
    }
}

/// A sink accepting generated artifacts.
pub trait ArtifactSink {
    /// Writes one artifact and returns its committed handle. Exactly one
    /// write per identity; the handle is closed on return.
    fn write(
        &mut self,
        package: &str,
        name: &str,
        content: &[u8],
        dependency: &str,
    ) -> Result<CommittedArtifact, EmitError>;
}

fn commit(
    package: &str,
    name: &str,
    content: &[u8],
    dependency: &str,
) -> CommittedArtifact {
    CommittedArtifact {
        package: package.to_string(),
        name: name.to_string(),
        bytes: content.len() as u64,
        content_hash: blake3_hash(content),
        dependency: dependency.to_string(),
    }
}

/// An in-memory sink for tests and embedders that post-process artifacts.
#[derive(Debug, Default)]
pub struct MemoryArtifactSink {
    artifacts: Vec<(CommittedArtifact, Vec<u8>)>,
    written: HashSet<String>,
}

impl MemoryArtifactSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of committed artifacts.
    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    /// Whether nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    /// Content of an artifact by identity, if written.
    pub fn content(&self, package: &str, name: &str) -> Option<&[u8]> {
        let identity = artifact_identity(package, name);
        self.artifacts
            .iter()
            .find(|(a, _)| a.identity() == identity)
            .map(|(_, c)| c.as_slice())
    }

    /// Committed handles, in write order.
    pub fn committed(&self) -> Vec<&CommittedArtifact> {
        self.artifacts.iter().map(|(a, _)| a).collect()
    }
}

impl ArtifactSink for MemoryArtifactSink {
    fn write(
        &mut self,
        package: &str,
        name: &str,
        content: &[u8],
        dependency: &str,
    ) -> Result<CommittedArtifact, EmitError> {
        let identity = artifact_identity(package, name);
        if !self.written.insert(identity.clone()) {
            return Err(EmitError::Duplicate(identity));
        }
        let committed = commit(package, name, content, dependency);
        self.artifacts.push((committed.clone(), content.to_vec()));
        Ok(committed)
    }
}

/// A sink writing artifacts under an output root.
///
/// Package segments become directories, the generated name becomes the
/// file stem. Identities are checked against the identifier and package
/// grammar before any path is built, so a hostile tree cannot escape the
/// root.
#[derive(Debug)]
pub struct FsArtifactSink {
    root: PathBuf,
    extension: String,
    written: HashSet<String>,
}

impl FsArtifactSink {
    /// Creates a sink rooted at the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extension: "kt".to_string(),
            written: HashSet::new(),
        }
    }

    /// Overrides the generated file extension (default `kt`).
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// The output root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The path an artifact identity maps to.
    pub fn artifact_path(&self, package: &str, name: &str) -> PathBuf {
        let mut path = self.root.clone();
        for segment in package.split('.').filter(|s| !s.is_empty()) {
            path.push(segment);
        }
        path.push(format!("{}.{}", name, self.extension));
        path
    }
}

impl ArtifactSink for FsArtifactSink {
    fn write(
        &mut self,
        package: &str,
        name: &str,
        content: &[u8],
        dependency: &str,
    ) -> Result<CommittedArtifact, EmitError> {
        let identity = artifact_identity(package, name);
        if !is_valid_package(package) || !is_valid_identifier(name) {
            return Err(EmitError::UnsafeIdentity(identity));
        }
        if !self.written.insert(identity.clone()) {
            return Err(EmitError::Duplicate(identity));
        }

        let path = self.artifact_path(package, name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)?;
        log::debug!("wrote artifact {} -> {}", identity, path.display());

        Ok(commit(package, name, content, dependency))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_memory_sink_commits() {
        let mut sink = MemoryArtifactSink::new();
        let committed = sink
            .write("com.example", "FooBarImpl", b"class FooBarImpl\n", "src/Foo.kt")
            .unwrap();

        assert_eq!(committed.identity(), "com.example.FooBarImpl");
        assert_eq!(committed.bytes, 17);
        assert_eq!(committed.dependency, "src/Foo.kt");
        assert_eq!(committed.content_hash.len(), 64);
        assert_eq!(
            sink.content("com.example", "FooBarImpl"),
            Some(&b"class FooBarImpl\n"[..])
        );
    }

    #[test]
    fn test_duplicate_identity_rejected() {
        let mut sink = MemoryArtifactSink::new();
        sink.write("p", "AImpl", b"a", "src/A.kt").unwrap();
        let err = sink.write("p", "AImpl", b"b", "src/A.kt").unwrap_err();
        assert!(matches!(err, EmitError::Duplicate(id) if id == "p.AImpl"));
    }

    #[test]
    fn test_distinct_identities_do_not_collide() {
        let mut sink = MemoryArtifactSink::new();
        sink.write("p", "AImpl", b"a", "src/A.kt").unwrap();
        sink.write("q", "AImpl", b"a", "src/A.kt").unwrap();
        sink.write("p", "BImpl", b"b", "src/B.kt").unwrap();
        assert_eq!(sink.len(), 3);
    }

    #[test]
    fn test_fs_sink_writes_package_directories() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = FsArtifactSink::new(dir.path());

        let committed = sink
            .write("com.example", "FooBarImpl", b"class FooBarImpl\n", "src/Foo.kt")
            .unwrap();

        let path = dir.path().join("com/example/FooBarImpl.kt");
        assert_eq!(fs::read(&path).unwrap(), b"class FooBarImpl\n");
        assert_eq!(committed.content_hash, blake3_hash(b"class FooBarImpl\n"));
    }

    #[test]
    fn test_fs_sink_default_package() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = FsArtifactSink::new(dir.path()).with_extension("gen");
        sink.write("", "TopImpl", b"x", "src/Top.kt").unwrap();
        assert!(dir.path().join("TopImpl.gen").exists());
    }

    #[test]
    fn test_fs_sink_rejects_unsafe_identity() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = FsArtifactSink::new(dir.path());

        let err = sink.write("..", "Evil", b"x", "src/E.kt").unwrap_err();
        assert!(matches!(err, EmitError::UnsafeIdentity(_)));

        let err = sink.write("ok", "../Evil", b"x", "src/E.kt").unwrap_err();
        assert!(matches!(err, EmitError::UnsafeIdentity(_)));
    }
}
