//! Hook container discovery.
//!
//! Walks a root declaration and its nested declarations, collecting every
//! hook container reachable through "is nested inside" edges. A container
//! match stops the walk for that subtree: everything inside a container
//! belongs to its generated scope and is never scanned separately.

use hookgen_decl::{Declaration, MarkerVocabulary};

/// A hook container found by discovery, with enough of its ancestry to
/// derive generated names.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoveredContainer<'a> {
    /// The container declaration.
    pub container: &'a Declaration,
    /// Package of the root declaration this container was found under.
    pub package: &'a str,
    /// Simple names of the enclosing declarations, outermost first. Empty
    /// for a top-level container.
    pub path: Vec<&'a str>,
}

impl<'a> DiscoveredContainer<'a> {
    /// Simple name of the immediately enclosing declaration, if any.
    pub fn enclosing_simple_name(&self) -> Option<&'a str> {
        self.path.last().copied()
    }

    /// Name of the synthesized subclass:
    /// `<enclosingSimpleName><simpleName>Impl`.
    pub fn impl_name(&self) -> String {
        format!(
            "{}{}Impl",
            self.enclosing_simple_name().unwrap_or(""),
            self.container.name
        )
    }

    /// Fully qualified name of the container, used as the generated
    /// subclass's supertype reference.
    pub fn qualified_name(&self) -> String {
        let mut segments: Vec<&str> = Vec::new();
        if !self.package.is_empty() {
            segments.push(self.package);
        }
        segments.extend(self.path.iter().copied());
        segments.push(&self.container.name);
        segments.join(".")
    }
}

/// Discovers every hook container reachable from a root declaration.
///
/// Marker-positive declarations are collected and not descended into.
/// Marker-negative declarations are descended into through their class-like
/// nested declarations; nested declarations the host could not resolve
/// cleanly are skipped without failing the walk. Every reachable class-like
/// declaration is visited exactly once.
pub fn discover_containers<'a>(
    root: &'a Declaration,
    vocab: &MarkerVocabulary,
) -> Vec<DiscoveredContainer<'a>> {
    let mut found = Vec::new();
    walk(root, root.package.as_str(), Vec::new(), vocab, &mut found);
    found
}

fn walk<'a>(
    decl: &'a Declaration,
    package: &'a str,
    path: Vec<&'a str>,
    vocab: &MarkerVocabulary,
    found: &mut Vec<DiscoveredContainer<'a>>,
) {
    if decl.is_hook_container(vocab) {
        found.push(DiscoveredContainer {
            container: decl,
            package,
            path,
        });
        return;
    }

    for nested in &decl.nested {
        if !nested.kind.is_class_like() {
            continue;
        }
        if !nested.valid {
            log::debug!(
                "skipping unresolved nested declaration '{}' inside '{}'",
                nested.name,
                decl.name
            );
            continue;
        }
        let mut nested_path = path.clone();
        nested_path.push(decl.name.as_str());
        walk(nested, package, nested_path, vocab, found);
    }
}
