//! Marker vocabulary configuration.
//!
//! The vocabulary names the annotations that mark a property as a hook, the
//! supertype names that mark a declaration as a hook container, and the
//! runtime-support import every generated file needs. It is supplied by the
//! embedder and is serde-loadable like every other configuration document.

use serde::{Deserialize, Serialize};

/// Externally configured marker names driving discovery and candidate
/// filtering.
///
/// Container matching is name-based: a declaration whose written supertype
/// name equals one of [`container_bases`](Self::container_bases) is a hook
/// container. An aliased import of a base cannot be recognized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerVocabulary {
    /// Recognized marker annotation short names.
    pub markers: Vec<String>,
    /// Recognized hook-container base type names.
    pub container_bases: Vec<String>,
    /// Import string for the hook runtime support library, emitted first in
    /// every generated import block.
    pub runtime_import: String,
}

impl MarkerVocabulary {
    /// Creates a vocabulary from explicit name sets.
    pub fn new(
        markers: Vec<String>,
        container_bases: Vec<String>,
        runtime_import: impl Into<String>,
    ) -> Self {
        Self {
            markers,
            container_bases,
            runtime_import: runtime_import.into(),
        }
    }

    /// Whether the annotation short name is a recognized marker.
    pub fn is_marker(&self, name: &str) -> bool {
        self.markers.iter().any(|m| m == name)
    }

    /// Whether the supertype name is a recognized hook-container base.
    pub fn is_container_base(&self, name: &str) -> bool {
        self.container_bases.iter().any(|b| b == name)
    }

    /// Parses a vocabulary from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for MarkerVocabulary {
    /// The canonical vocabulary: `@Hook` properties inside `HooksDsl`
    /// subtypes, importing the hooks runtime.
    fn default() -> Self {
        Self {
            markers: vec!["Hook".to_string()],
            container_bases: vec!["HooksDsl".to_string()],
            runtime_import: "hooks.runtime.HookRegistry".to_string(),
        }
    }
}
