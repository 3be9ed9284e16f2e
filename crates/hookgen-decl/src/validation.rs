//! Declaration tree well-formedness checks.
//!
//! The host front end is assumed to have type-checked its own input; these
//! checks only guard the loader against trees that could not have come from
//! a working front end (empty or malformed names). All problems in a tree
//! are collected, not just the first.

use std::sync::OnceLock;

use regex::Regex;

use crate::decl::Declaration;

/// Regex pattern for valid type and property names.
const IDENTIFIER_PATTERN: &str = r"^[A-Za-z_][A-Za-z0-9_]*$";

/// Regex pattern for valid package names (dot-separated identifiers).
const PACKAGE_PATTERN: &str = r"^[A-Za-z_][A-Za-z0-9_]*(\.[A-Za-z_][A-Za-z0-9_]*)*$";

static IDENTIFIER_REGEX: OnceLock<Regex> = OnceLock::new();
static PACKAGE_REGEX: OnceLock<Regex> = OnceLock::new();

fn identifier_regex() -> &'static Regex {
    IDENTIFIER_REGEX
        .get_or_init(|| Regex::new(IDENTIFIER_PATTERN).expect("invalid regex pattern"))
}

fn package_regex() -> &'static Regex {
    PACKAGE_REGEX.get_or_init(|| Regex::new(PACKAGE_PATTERN).expect("invalid regex pattern"))
}

/// Checks if a type or property name is a valid identifier.
pub fn is_valid_identifier(name: &str) -> bool {
    identifier_regex().is_match(name)
}

/// Checks if a package name is valid. The empty string is the default
/// package and is valid.
pub fn is_valid_package(package: &str) -> bool {
    package.is_empty() || package_regex().is_match(package)
}

/// Validates a declaration tree, returning every problem found.
///
/// An empty result means the tree is well formed. Problems are reported in
/// preorder: the declaration itself, its properties, then its nested
/// declarations.
pub fn validate_declaration(decl: &Declaration) -> Vec<String> {
    let mut problems = Vec::new();
    check_declaration(decl, &mut problems);
    problems
}

fn check_declaration(decl: &Declaration, problems: &mut Vec<String>) {
    if !is_valid_identifier(&decl.name) {
        problems.push(format!("invalid declaration name: '{}'", decl.name));
    }
    if !is_valid_package(&decl.package) {
        problems.push(format!(
            "invalid package name on '{}': '{}'",
            decl.name, decl.package
        ));
    }
    for property in &decl.properties {
        if !is_valid_identifier(&property.name) {
            problems.push(format!(
                "invalid property name on '{}': '{}'",
                decl.name, property.name
            ));
        }
    }
    for nested in &decl.nested {
        check_declaration(nested, problems);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decl::{DeclKind, Property};

    #[test]
    fn test_valid_identifiers() {
        for name in ["Foo", "bar_baz", "_private", "A1"] {
            assert!(is_valid_identifier(name), "expected valid: {}", name);
        }
    }

    #[test]
    fn test_invalid_identifiers() {
        for name in ["", "1abc", "with space", "with-dash", "a.b"] {
            assert!(!is_valid_identifier(name), "expected invalid: {}", name);
        }
    }

    #[test]
    fn test_package_names() {
        assert!(is_valid_package(""));
        assert!(is_valid_package("com.example"));
        assert!(is_valid_package("single"));
        assert!(!is_valid_package("com..example"));
        assert!(!is_valid_package(".leading"));
        assert!(!is_valid_package("trailing."));
    }

    #[test]
    fn test_validate_declaration_accumulates() {
        let decl = Declaration::builder("bad name", DeclKind::Class)
            .package("also..bad")
            .property(Property::new("1prop", "String"))
            .nested(Declaration::builder("nested name", DeclKind::Class).build())
            .build();

        let problems = validate_declaration(&decl);
        assert_eq!(problems.len(), 4, "problems: {:?}", problems);
    }

    #[test]
    fn test_validate_clean_declaration() {
        let decl = Declaration::builder("Foo", DeclKind::Class)
            .package("com.example")
            .property(Property::new("onTick", "Hook<TickEvent>"))
            .build();
        assert!(validate_declaration(&decl).is_empty());
    }
}
