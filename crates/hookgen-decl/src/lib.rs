//! hookgen declaration model and validation primitives.
//!
//! This crate holds everything the code-generation pipeline consumes but
//! does not itself compute: the host-supplied declaration tree, the marker
//! vocabulary that makes a property a hook candidate, the violation and
//! diagnostics types, the applicative validation combinator, and content
//! hashing for deterministic artifacts.
//!
//! # Overview
//!
//! A host front end parses source units and hands over a read-only
//! [`DeclarationIndex`]. Declarations whose supertype names match the
//! [`MarkerVocabulary`]'s container bases are hook containers; their
//! properties carrying a recognized marker annotation are hook candidates.
//! Candidate validation accumulates *all* violations per container via
//! [`Validated`] rather than stopping at the first.
//!
//! # Example
//!
//! ```
//! use hookgen_decl::{Declaration, DeclKind, MarkerVocabulary, Property};
//!
//! let vocab = MarkerVocabulary::default();
//! let bar = Declaration::builder("Bar", DeclKind::Class)
//!     .supertype("HooksDsl")
//!     .property(Property::new("onTick", "Hook<TickEvent>").annotated("Hook"))
//!     .build();
//!
//! assert!(bar.is_hook_container(&vocab));
//! assert_eq!(bar.marked_properties(&vocab).count(), 1);
//! ```
//!
//! # Modules
//!
//! - [`decl`]: declaration and property model
//! - [`index`]: source units and the batch index
//! - [`markers`]: marker vocabulary configuration
//! - [`error`]: violation and error types
//! - [`validated`]: the applicative validation combinator
//! - [`validation`]: declaration tree well-formedness checks
//! - [`diag`]: diagnostics sinks
//! - [`hash`]: BLAKE3 content hashing

pub mod decl;
pub mod diag;
pub mod error;
pub mod hash;
pub mod index;
pub mod markers;
pub mod validated;
pub mod validation;

// Re-export commonly used types at the crate root
pub use decl::{DeclKind, Declaration, DeclarationBuilder, Property, Visibility};
pub use diag::{CollectingDiagnostics, Diagnostics, LogDiagnostics};
pub use error::{HookGenError, SourceLoc, Violation, ViolationCode};
pub use hash::{blake3_hash, blake3_hash_str};
pub use index::{DeclarationIndex, SourceUnit};
pub use markers::MarkerVocabulary;
pub use validated::Validated;
pub use validation::{is_valid_identifier, is_valid_package, validate_declaration};
