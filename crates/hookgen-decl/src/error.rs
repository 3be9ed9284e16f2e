//! Violation and error types.

use thiserror::Error;

/// Violation codes for hook candidate and synthesis failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationCode {
    // Structural violations (H001-H004)
    /// H001: Property shape does not satisfy the hook contract
    PropertyShape,
    /// H002: Property type is not a recognized hook type
    UnsupportedType,
    /// H003: Marker annotation is missing a required argument
    MissingAnnotationArgument,
    /// H004: Property is not overridable in a generated subclass
    NotOverridable,

    // Synthesis failures (G001-G002)
    /// G001: Assembled source is not syntactically well formed
    MalformedAssembly,
    /// G002: Artifact could not be written
    ArtifactWrite,
}

impl ViolationCode {
    /// Returns the violation code string (e.g., "H001").
    pub fn code(&self) -> &'static str {
        match self {
            ViolationCode::PropertyShape => "H001",
            ViolationCode::UnsupportedType => "H002",
            ViolationCode::MissingAnnotationArgument => "H003",
            ViolationCode::NotOverridable => "H004",
            ViolationCode::MalformedAssembly => "G001",
            ViolationCode::ArtifactWrite => "G002",
        }
    }
}

impl std::fmt::Display for ViolationCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A source location for diagnostic attribution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SourceLoc {
    /// Originating source unit id.
    pub unit: String,
    /// 1-based line; 0 when unknown.
    pub line: u32,
}

impl SourceLoc {
    /// Creates a source location.
    pub fn new(unit: impl Into<String>, line: u32) -> Self {
        Self {
            unit: unit.into(),
            line,
        }
    }
}

impl std::fmt::Display for SourceLoc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.line == 0 {
            write!(f, "{}", self.unit)
        } else {
            write!(f, "{}:{}", self.unit, self.line)
        }
    }
}

/// A structured validation failure tied to one property.
///
/// Violations for a container are collected as a non-empty ordered sequence;
/// a container with any violation produces no artifact.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// The violation code.
    pub code: ViolationCode,
    /// Human-readable message.
    pub message: String,
    /// Name of the offending property; empty for container-level failures.
    pub property: String,
    /// Source location of the offending declaration.
    pub loc: SourceLoc,
}

impl Violation {
    /// Creates a violation attributed to a property.
    pub fn new(
        code: ViolationCode,
        message: impl Into<String>,
        property: impl Into<String>,
        loc: SourceLoc,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            property: property.into(),
            loc,
        }
    }

    /// Creates a container-level violation with no property attribution.
    pub fn container(code: ViolationCode, message: impl Into<String>, loc: SourceLoc) -> Self {
        Self {
            code,
            message: message.into(),
            property: String::new(),
            loc,
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.property.is_empty() {
            write!(f, "{}: {} (at {})", self.code, self.message, self.loc)
        } else {
            write!(
                f,
                "{}: {} (property '{}' at {})",
                self.code, self.message, self.property, self.loc
            )
        }
    }
}

impl std::error::Error for Violation {}

/// Top-level error type for loading and processing declaration trees.
#[derive(Debug, Error)]
pub enum HookGenError {
    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// A loaded declaration tree failed well-formedness checks.
    #[error("invalid declaration tree: {0}")]
    InvalidDeclaration(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_violation_codes() {
        assert_eq!(ViolationCode::PropertyShape.code(), "H001");
        assert_eq!(ViolationCode::NotOverridable.code(), "H004");
        assert_eq!(ViolationCode::MalformedAssembly.code(), "G001");
    }

    #[test]
    fn test_violation_display() {
        let v = Violation::new(
            ViolationCode::PropertyShape,
            "hook property must be abstract",
            "onTick",
            SourceLoc::new("src/Foo.kt", 12),
        );
        assert_eq!(
            v.to_string(),
            "H001: hook property must be abstract (property 'onTick' at src/Foo.kt:12)"
        );

        let c = Violation::container(
            ViolationCode::MalformedAssembly,
            "unbalanced '{' delimiter",
            SourceLoc::new("src/Foo.kt", 0),
        );
        assert_eq!(
            c.to_string(),
            "G001: unbalanced '{' delimiter (at src/Foo.kt)"
        );
    }

    #[test]
    fn test_source_loc_display() {
        assert_eq!(SourceLoc::new("src/A.kt", 3).to_string(), "src/A.kt:3");
        assert_eq!(SourceLoc::new("src/A.kt", 0).to_string(), "src/A.kt");
    }
}
