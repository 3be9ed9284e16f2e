//! Per-container hook validation.
//!
//! The shape contract for a single hook is supplied by the embedder as a
//! [`HookRule`]. This module only fixes how per-property results combine:
//! every marker-annotated property is checked unconditionally, and the
//! container result is valid iff all of them are, otherwise it carries
//! every violation in property declaration order.

use hookgen_decl::{MarkerVocabulary, Property, SourceLoc, Validated, Violation};

use crate::discover::DiscoveredContainer;

/// A hook candidate that passed its shape contract, carrying everything the
/// synthesizer needs without re-exposing the original property.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedHook {
    /// Hook name, usually the property name.
    pub name: String,
    /// Generated class-body member for this hook, verbatim.
    pub class_fragment: String,
    /// Generated property accessor for this hook, verbatim.
    pub accessor_fragment: String,
    /// Import strings this hook's fragments rely on.
    pub imports: Vec<String>,
}

/// The externally supplied extension-point shape contract.
///
/// Implementations turn one marker-annotated property into either a
/// [`ValidatedHook`] or a [`Violation`]; the pipeline never inspects how
/// the decision is made.
pub trait HookRule {
    /// Validates one hook candidate.
    fn validate(&self, property: &Property, loc: &SourceLoc) -> Result<ValidatedHook, Violation>;
}

impl<F> HookRule for F
where
    F: Fn(&Property, &SourceLoc) -> Result<ValidatedHook, Violation>,
{
    fn validate(&self, property: &Property, loc: &SourceLoc) -> Result<ValidatedHook, Violation> {
        self(property, loc)
    }
}

/// Validates every marker-annotated property of a discovered container.
///
/// Properties are checked in declaration order with no short-circuiting;
/// the result is all-successes or all-failures, never a mixture. A
/// container with zero candidates yields an empty valid sequence, which
/// the synthesizer treats as "nothing to generate".
pub fn validate_container(
    discovered: &DiscoveredContainer<'_>,
    unit: &str,
    vocab: &MarkerVocabulary,
    rule: &dyn HookRule,
) -> Validated<ValidatedHook, Violation> {
    discovered
        .container
        .marked_properties(vocab)
        .map(|property| {
            let loc = SourceLoc::new(unit, property.line);
            rule.validate(property, &loc)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discover::discover_containers;
    use hookgen_decl::{DeclKind, Declaration, MarkerVocabulary, Property, ViolationCode};
    use pretty_assertions::assert_eq;
    use std::cell::Cell;

    fn accept_all(property: &Property, _loc: &SourceLoc) -> Result<ValidatedHook, Violation> {
        Ok(ValidatedHook {
            name: property.name.clone(),
            class_fragment: format!("inner class {}Hook", property.name),
            accessor_fragment: format!("override val {} = {}Hook()", property.name, property.name),
            imports: vec![format!("hooks.{}", property.name)],
        })
    }

    fn reject(property: &Property, loc: &SourceLoc) -> Result<ValidatedHook, Violation> {
        Err(Violation::new(
            ViolationCode::PropertyShape,
            "rejected",
            property.name.clone(),
            loc.clone(),
        ))
    }

    fn dsl(properties: Vec<Property>) -> Declaration {
        let mut builder = Declaration::builder("Bar", DeclKind::Class)
            .package("com.example")
            .supertype("HooksDsl");
        for p in properties {
            builder = builder.property(p);
        }
        builder.build()
    }

    #[test]
    fn test_all_valid_in_declaration_order() {
        let vocab = MarkerVocabulary::default();
        let root = dsl(vec![
            Property::new("onTick", "Hook<TickEvent>").annotated("Hook"),
            Property::new("onStop", "Hook<StopEvent>").annotated("Hook"),
        ]);
        let found = discover_containers(&root, &vocab);

        let result = validate_container(&found[0], "src/Bar.kt", &vocab, &accept_all);
        let hooks = result.into_result().unwrap();
        let names: Vec<&str> = hooks.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["onTick", "onStop"]);
    }

    #[test]
    fn test_failures_collected_in_order_without_successes() {
        let vocab = MarkerVocabulary::default();
        let root = dsl(vec![
            Property::new("good", "Hook<A>").annotated("Hook").at_line(1),
            Property::new("bad1", "String").annotated("Hook").at_line(2),
            Property::new("bad2", "Int").annotated("Hook").at_line(3),
        ]);
        let found = discover_containers(&root, &vocab);

        let rule = |property: &Property, loc: &SourceLoc| {
            if property.name.starts_with("bad") {
                reject(property, loc)
            } else {
                accept_all(property, loc)
            }
        };

        let violations = validate_container(&found[0], "src/Bar.kt", &vocab, &rule)
            .into_result()
            .unwrap_err();
        let names: Vec<&str> = violations.iter().map(|v| v.property.as_str()).collect();
        assert_eq!(names, vec!["bad1", "bad2"]);
        assert_eq!(violations[0].loc.line, 2);
    }

    #[test]
    fn test_every_property_checked_after_failure() {
        let vocab = MarkerVocabulary::default();
        let root = dsl(vec![
            Property::new("a", "String").annotated("Hook"),
            Property::new("b", "String").annotated("Hook"),
            Property::new("c", "String").annotated("Hook"),
        ]);
        let found = discover_containers(&root, &vocab);

        let calls = Cell::new(0usize);
        let rule = |property: &Property, loc: &SourceLoc| {
            calls.set(calls.get() + 1);
            reject(property, loc)
        };

        let result = validate_container(&found[0], "src/Bar.kt", &vocab, &rule);
        assert_eq!(calls.get(), 3);
        assert_eq!(result.errors().unwrap().len(), 3);
    }

    #[test]
    fn test_unmarked_properties_ignored() {
        let vocab = MarkerVocabulary::default();
        let root = dsl(vec![
            Property::new("plain", "String"),
            Property::new("onTick", "Hook<TickEvent>").annotated("Hook"),
        ]);
        let found = discover_containers(&root, &vocab);

        let hooks = validate_container(&found[0], "src/Bar.kt", &vocab, &accept_all)
            .into_result()
            .unwrap();
        assert_eq!(hooks.len(), 1);
        assert_eq!(hooks[0].name, "onTick");
    }

    #[test]
    fn test_zero_candidates_is_empty_valid() {
        let vocab = MarkerVocabulary::default();
        let root = dsl(vec![Property::new("plain", "String")]);
        let found = discover_containers(&root, &vocab);

        let result = validate_container(&found[0], "src/Bar.kt", &vocab, &accept_all);
        assert!(result.is_valid());
        assert_eq!(result.into_result().unwrap().len(), 0);
    }
}
