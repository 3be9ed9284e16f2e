//! hookgen code-generation pipeline.
//!
//! Given a read-only declaration index from `hookgen-decl`, this crate
//! discovers hook containers, validates their marker-annotated properties
//! against an injected shape rule, synthesizes one `...Impl` subclass per
//! cleanly validated container, formats it deterministically, and emits it
//! through an artifact sink with a build-dependency edge back to the
//! originating source unit.
//!
//! Generation is all-or-nothing per container: a single violation abandons
//! that container's artifact while every violation is still reported, and
//! neighboring containers are unaffected. Two runs over the same index
//! produce byte-identical artifacts.
//!
//! # Modules
//!
//! - [`discover`]: hook container discovery
//! - [`validate`]: per-container applicative validation and the [`HookRule`] seam
//! - [`synth`]: subclass synthesis and assembly
//! - [`format`]: idempotent canonical formatting
//! - [`emit`]: artifact sinks
//! - [`pipeline`]: batch orchestration and reporting

pub mod discover;
pub mod emit;
pub mod format;
pub mod pipeline;
pub mod synth;
pub mod validate;

// Re-export commonly used types at the crate root
pub use discover::{discover_containers, DiscoveredContainer};
pub use emit::{ArtifactSink, CommittedArtifact, EmitError, FsArtifactSink, MemoryArtifactSink};
pub use format::{CanonicalFormatter, FormatError, Formatter};
pub use pipeline::{BatchReport, Pipeline};
pub use synth::{synthesize, GeneratedUnit};
pub use validate::{validate_container, HookRule, ValidatedHook};
