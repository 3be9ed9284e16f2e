//! Declaration index: the read-only batch input.
//!
//! A source unit is one parsed file: an id (the host's path-like handle,
//! also used for build-dependency edges) plus its top-level declarations.
//! The index is the collection of units for one processing batch, loadable
//! from the JSON interchange format or assembled programmatically.

use serde::{Deserialize, Serialize};

use crate::decl::Declaration;
use crate::error::HookGenError;
use crate::validation::validate_declaration;

/// One source unit and its top-level declarations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceUnit {
    /// Host-assigned unit id, e.g. `src/Foo.kt`. Generated artifacts for
    /// containers in this unit declare a build dependency on it.
    pub id: String,
    /// Top-level declarations, in declaration order.
    #[serde(default)]
    pub declarations: Vec<Declaration>,
}

impl SourceUnit {
    /// Creates a source unit.
    pub fn new(id: impl Into<String>, declarations: Vec<Declaration>) -> Self {
        Self {
            id: id.into(),
            declarations,
        }
    }
}

/// The read-only declaration tree for one batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeclarationIndex {
    /// Source units in batch order.
    #[serde(default)]
    pub units: Vec<SourceUnit>,
}

impl DeclarationIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an index from source units.
    pub fn from_units(units: Vec<SourceUnit>) -> Self {
        Self { units }
    }

    /// Parses an index from JSON, rejecting malformed declaration trees.
    ///
    /// All well-formedness problems across the whole index are collected
    /// into the error message, not just the first.
    pub fn from_json(json: &str) -> Result<Self, HookGenError> {
        let index: DeclarationIndex = serde_json::from_str(json)?;

        let mut problems = Vec::new();
        for unit in &index.units {
            for decl in &unit.declarations {
                for problem in validate_declaration(decl) {
                    problems.push(format!("{}: {}", unit.id, problem));
                }
            }
        }
        if !problems.is_empty() {
            return Err(HookGenError::InvalidDeclaration(problems.join("; ")));
        }

        Ok(index)
    }

    /// Serializes the index to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Adds a source unit.
    pub fn push_unit(&mut self, unit: SourceUnit) {
        self.units.push(unit);
    }

    /// Looks up a unit by id.
    pub fn unit(&self, id: &str) -> Option<&SourceUnit> {
        self.units.iter().find(|u| u.id == id)
    }
}
