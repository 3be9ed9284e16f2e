//! Subclass synthesis.
//!
//! Builds one [`GeneratedUnit`] from a discovered container and its
//! validated hooks: the subclass header mirrors the original's visibility,
//! kind and type parameters; the import block is the deduplicated
//! first-seen-order union of the runtime-support import and each hook's
//! imports. Pre-existing imports of the original file are not rediscovered;
//! generated fragments must only reference names resolvable through their
//! own declared imports.

use hookgen_decl::{DeclKind, MarkerVocabulary, Visibility};

use crate::discover::DiscoveredContainer;
use crate::validate::ValidatedHook;

/// The complete synthesized source artifact for one container.
///
/// Created once per cleanly validated container, written exactly once,
/// never mutated after formatting.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedUnit {
    /// Package of the generated file; empty for the default package.
    pub package: String,
    /// Synthesized subclass name, `<enclosingSimpleName><simpleName>Impl`.
    pub name: String,
    /// Visibility copied from the original container.
    pub visibility: Visibility,
    /// Declaration kind copied from the original container.
    pub kind: DeclKind,
    /// Type parameter list copied verbatim from the original.
    pub type_params: Vec<String>,
    /// Fully qualified supertype reference, the original container itself.
    pub supertype: String,
    /// Deduplicated import block, in first-seen order.
    pub imports: Vec<String>,
    /// Generated class body: accessor fragments first, class fragments after.
    pub body: String,
    /// Originating source unit id, for the build-dependency edge.
    pub source_unit: String,
}

impl GeneratedUnit {
    /// Assembles the full source text: optional package clause, blank line,
    /// import block, blank line, class header, body, closing brace.
    pub fn assemble(&self) -> String {
        let mut out = String::new();

        if !self.package.is_empty() {
            out.push_str(&format!("package {}\n\n", self.package));
        }
        for import in &self.imports {
            out.push_str(&format!("import {}\n", import));
        }
        if !self.imports.is_empty() {
            out.push('\n');
        }

        out.push_str(&self.header());
        out.push_str(" {\n");
        for line in self.body.lines() {
            if line.is_empty() {
                out.push('\n');
            } else {
                out.push_str(&format!("    {}\n", line));
            }
        }
        out.push_str("}\n");
        out
    }

    fn header(&self) -> String {
        let mut header = String::new();
        if let Some(modifier) = self.visibility.modifier() {
            header.push_str(modifier);
            header.push(' ');
        }
        header.push_str(self.kind.keyword());
        header.push(' ');
        header.push_str(&self.name);
        header.push_str(&self.type_param_list());
        header.push_str(" : ");
        header.push_str(&self.supertype);
        header.push_str(&self.type_param_list());
        header.push_str("()");
        header
    }

    fn type_param_list(&self) -> String {
        if self.type_params.is_empty() {
            String::new()
        } else {
            format!("<{}>", self.type_params.join(", "))
        }
    }
}

/// Synthesizes the generated unit for a container from its validated hooks.
///
/// Callers must not pass an empty hook sequence; a container with nothing
/// to generate produces no artifact at all.
pub fn synthesize(
    discovered: &DiscoveredContainer<'_>,
    hooks: &[ValidatedHook],
    vocab: &MarkerVocabulary,
    source_unit: &str,
) -> GeneratedUnit {
    debug_assert!(!hooks.is_empty(), "synthesize called with no hooks");

    let mut imports: Vec<String> = vec![vocab.runtime_import.clone()];
    for hook in hooks {
        for import in &hook.imports {
            if !imports.contains(import) {
                imports.push(import.clone());
            }
        }
    }

    let mut body = String::new();
    for hook in hooks {
        body.push_str(&hook.accessor_fragment);
        body.push('\n');
    }
    for hook in hooks {
        body.push('\n');
        body.push_str(&hook.class_fragment);
        body.push('\n');
    }

    GeneratedUnit {
        package: discovered.package.to_string(),
        name: discovered.impl_name(),
        visibility: discovered.container.visibility,
        kind: discovered.container.kind,
        type_params: discovered.container.type_params.clone(),
        supertype: discovered.qualified_name(),
        imports,
        body,
        source_unit: source_unit.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discover::discover_containers;
    use hookgen_decl::{Declaration, Property};
    use pretty_assertions::assert_eq;

    fn hook(name: &str, imports: &[&str]) -> ValidatedHook {
        ValidatedHook {
            name: name.to_string(),
            class_fragment: format!("inner class {}Hook : HookImpl()", name),
            accessor_fragment: format!("override val {} = {}Hook()", name, name),
            imports: imports.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn discover_bar(root: &Declaration) -> DiscoveredContainer<'_> {
        let vocab = MarkerVocabulary::default();
        discover_containers(root, &vocab).remove(0)
    }

    fn nested_bar() -> Declaration {
        Declaration::builder("Foo", DeclKind::Class)
            .package("com.example")
            .nested(
                Declaration::builder("Bar", DeclKind::Class)
                    .visibility(Visibility::Internal)
                    .type_param("T")
                    .supertype("HooksDsl")
                    .property(Property::new("onTick", "Hook<TickEvent>").annotated("Hook"))
                    .build(),
            )
            .build()
    }

    #[test]
    fn test_header_mirrors_original() {
        let root = nested_bar();
        let vocab = MarkerVocabulary::default();
        let discovered = discover_bar(&root);
        let unit = synthesize(&discovered, &[hook("onTick", &[])], &vocab, "src/Foo.kt");

        assert_eq!(unit.name, "FooBarImpl");
        assert_eq!(unit.supertype, "com.example.Foo.Bar");
        assert_eq!(
            unit.header(),
            "internal class FooBarImpl<T> : com.example.Foo.Bar<T>()"
        );
    }

    #[test]
    fn test_import_dedup_first_seen_order() {
        let root = nested_bar();
        let vocab = MarkerVocabulary::default();
        let discovered = discover_bar(&root);
        let hooks = vec![
            hook("a", &["pkg.Shared", "pkg.A"]),
            hook("b", &["pkg.B", "pkg.Shared"]),
        ];
        let unit = synthesize(&discovered, &hooks, &vocab, "src/Foo.kt");

        assert_eq!(
            unit.imports,
            vec![
                "hooks.runtime.HookRegistry".to_string(),
                "pkg.Shared".to_string(),
                "pkg.A".to_string(),
                "pkg.B".to_string(),
            ]
        );
    }

    #[test]
    fn test_runtime_import_always_first() {
        let root = nested_bar();
        let vocab = MarkerVocabulary::default();
        let discovered = discover_bar(&root);
        let unit = synthesize(
            &discovered,
            &[hook("onTick", &["hooks.runtime.HookRegistry"])],
            &vocab,
            "src/Foo.kt",
        );
        assert_eq!(unit.imports, vec!["hooks.runtime.HookRegistry".to_string()]);
    }

    #[test]
    fn test_assembled_layout() {
        let root = nested_bar();
        let vocab = MarkerVocabulary::default();
        let discovered = discover_bar(&root);
        let unit = synthesize(&discovered, &[hook("onTick", &["pkg.Tick"])], &vocab, "src/Foo.kt");

        let text = unit.assemble();
        let expected = "\
package com.example

import hooks.runtime.HookRegistry
import pkg.Tick

internal class FooBarImpl<T> : com.example.Foo.Bar<T>() {
    override val onTick = onTickHook()

    inner class onTickHook : HookImpl()
}
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_default_package_omits_clause() {
        let vocab = MarkerVocabulary::default();
        let root = Declaration::builder("Bar", DeclKind::Class)
            .supertype("HooksDsl")
            .build();
        let discovered = discover_bar(&root);
        let unit = synthesize(&discovered, &[hook("onTick", &[])], &vocab, "src/Bar.kt");

        let text = unit.assemble();
        assert!(!text.contains("package"));
        assert!(text.starts_with("import hooks.runtime.HookRegistry"));
        assert_eq!(unit.header(), "class BarImpl : Bar()");
    }

    #[test]
    fn test_fragment_order_matches_hook_order() {
        let root = nested_bar();
        let vocab = MarkerVocabulary::default();
        let discovered = discover_bar(&root);
        let unit = synthesize(
            &discovered,
            &[hook("first", &[]), hook("second", &[])],
            &vocab,
            "src/Foo.kt",
        );

        let text = unit.assemble();
        let first_accessor = text.find("override val first").unwrap();
        let second_accessor = text.find("override val second").unwrap();
        let first_class = text.find("inner class firstHook").unwrap();
        let second_class = text.find("inner class secondHook").unwrap();
        assert!(first_accessor < second_accessor);
        assert!(second_accessor < first_class);
        assert!(first_class < second_class);
    }
}
