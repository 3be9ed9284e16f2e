//! Declaration and property model.
//!
//! Declarations form the read-only tree handed over by the host front end:
//! named types with a kind, a visibility, type parameters, supertype
//! reference names, nested declarations, and properties carrying annotation
//! names. The tree is immutable for the duration of one processing pass.

use serde::{Deserialize, Serialize};

use crate::markers::MarkerVocabulary;

/// The kind of a declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclKind {
    /// An ordinary class.
    Class,
    /// An interface.
    Interface,
    /// An object-like singleton declaration.
    Object,
    /// An enumeration.
    Enum,
}

impl DeclKind {
    /// Returns the kind as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclKind::Class => "class",
            DeclKind::Interface => "interface",
            DeclKind::Object => "object",
            DeclKind::Enum => "enum",
        }
    }

    /// Returns the keyword used when rendering a declaration header.
    pub fn keyword(&self) -> &'static str {
        match self {
            DeclKind::Class => "class",
            DeclKind::Interface => "interface",
            DeclKind::Object => "object",
            DeclKind::Enum => "enum class",
        }
    }

    /// Whether discovery may recurse into declarations of this kind.
    ///
    /// Enums never act as hook containers and are not descended into.
    pub fn is_class_like(&self) -> bool {
        !matches!(self, DeclKind::Enum)
    }
}

impl std::fmt::Display for DeclKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DeclKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "class" => Ok(DeclKind::Class),
            "interface" => Ok(DeclKind::Interface),
            "object" => Ok(DeclKind::Object),
            "enum" => Ok(DeclKind::Enum),
            _ => Err(format!("unknown declaration kind: {}", s)),
        }
    }
}

/// Declared visibility of a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Visible everywhere. Rendered without a modifier keyword.
    #[default]
    Public,
    /// Visible within the declaring module.
    Internal,
    /// Visible within the declaring file.
    Private,
}

impl Visibility {
    /// Returns the modifier keyword for header rendering, if any.
    ///
    /// Public visibility is the default in the target language and renders
    /// as no keyword at all.
    pub fn modifier(&self) -> Option<&'static str> {
        match self {
            Visibility::Public => None,
            Visibility::Internal => Some("internal"),
            Visibility::Private => Some("private"),
        }
    }
}

/// A property declared on a type.
///
/// Properties carry their annotation short names; a property whose annotation
/// set intersects the configured marker vocabulary is a hook candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    /// Property name.
    pub name: String,
    /// Declared type, verbatim.
    #[serde(rename = "type")]
    pub ty: String,
    /// Attached annotation short names, in declaration order.
    #[serde(default)]
    pub annotations: Vec<String>,
    /// 1-based source line of the declaration; 0 when unknown.
    #[serde(default)]
    pub line: u32,
}

impl Property {
    /// Creates a property with no annotations.
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            annotations: Vec::new(),
            line: 0,
        }
    }

    /// Adds an annotation short name.
    pub fn annotated(mut self, annotation: impl Into<String>) -> Self {
        self.annotations.push(annotation.into());
        self
    }

    /// Sets the source line.
    pub fn at_line(mut self, line: u32) -> Self {
        self.line = line;
        self
    }

    /// Whether the property carries the given annotation.
    pub fn has_annotation(&self, name: &str) -> bool {
        self.annotations.iter().any(|a| a == name)
    }

    /// Whether any attached annotation is a recognized marker.
    pub fn is_marked(&self, vocab: &MarkerVocabulary) -> bool {
        self.annotations.iter().any(|a| vocab.is_marker(a))
    }
}

/// A declared type in the host's declaration tree.
///
/// Owned by the declaration index; immutable for one pass. Nested
/// declarations form a finite, non-cyclic forest, so recursion over them is
/// well-founded.
///
/// # Example
/// ```
/// use hookgen_decl::{Declaration, DeclKind, Property};
///
/// let bar = Declaration::builder("Bar", DeclKind::Class)
///     .supertype("HooksDsl")
///     .property(Property::new("onTick", "Hook<TickEvent>").annotated("Hook"))
///     .build();
/// let foo = Declaration::builder("Foo", DeclKind::Class)
///     .package("com.example")
///     .nested(bar)
///     .build();
/// assert_eq!(foo.nested[0].name, "Bar");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Declaration {
    /// Simple name of the type.
    pub name: String,
    /// Declaration kind.
    pub kind: DeclKind,
    /// Declared visibility.
    #[serde(default)]
    pub visibility: Visibility,
    /// Type parameter names, verbatim and in declaration order.
    #[serde(default)]
    pub type_params: Vec<String>,
    /// Supertype reference names, as written at the declaration site.
    ///
    /// Matching against these is purely name-based; an aliased import of a
    /// hooks base is not recognized.
    #[serde(default)]
    pub supertypes: Vec<String>,
    /// Containing package; empty for the default package. Meaningful on
    /// top-level declarations only.
    #[serde(default)]
    pub package: String,
    /// Nested declarations, in declaration order.
    #[serde(default)]
    pub nested: Vec<Declaration>,
    /// Declared properties, in declaration order.
    #[serde(default)]
    pub properties: Vec<Property>,
    /// The host front end's "resolves cleanly" verdict. Nested declarations
    /// with `valid == false` are skipped by discovery.
    #[serde(default = "default_valid")]
    pub valid: bool,
}

fn default_valid() -> bool {
    true
}

impl Declaration {
    /// Creates a declaration builder.
    pub fn builder(name: impl Into<String>, kind: DeclKind) -> DeclarationBuilder {
        DeclarationBuilder::new(name, kind)
    }

    /// Whether one of the declared supertype names is a recognized hooks
    /// base, making this declaration a hook container.
    pub fn is_hook_container(&self, vocab: &MarkerVocabulary) -> bool {
        self.supertypes.iter().any(|s| vocab.is_container_base(s))
    }

    /// Properties carrying at least one recognized marker annotation, in
    /// declaration order.
    pub fn marked_properties<'a>(
        &'a self,
        vocab: &'a MarkerVocabulary,
    ) -> impl Iterator<Item = &'a Property> {
        self.properties.iter().filter(move |p| p.is_marked(vocab))
    }

    /// Parses a declaration from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serializes the declaration to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Builder for [`Declaration`].
#[derive(Debug, Clone)]
pub struct DeclarationBuilder {
    decl: Declaration,
}

impl DeclarationBuilder {
    fn new(name: impl Into<String>, kind: DeclKind) -> Self {
        Self {
            decl: Declaration {
                name: name.into(),
                kind,
                visibility: Visibility::Public,
                type_params: Vec::new(),
                supertypes: Vec::new(),
                package: String::new(),
                nested: Vec::new(),
                properties: Vec::new(),
                valid: true,
            },
        }
    }

    /// Sets the visibility.
    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.decl.visibility = visibility;
        self
    }

    /// Adds a type parameter name.
    pub fn type_param(mut self, name: impl Into<String>) -> Self {
        self.decl.type_params.push(name.into());
        self
    }

    /// Adds a supertype reference name.
    pub fn supertype(mut self, name: impl Into<String>) -> Self {
        self.decl.supertypes.push(name.into());
        self
    }

    /// Sets the containing package.
    pub fn package(mut self, package: impl Into<String>) -> Self {
        self.decl.package = package.into();
        self
    }

    /// Adds a nested declaration.
    pub fn nested(mut self, decl: Declaration) -> Self {
        self.decl.nested.push(decl);
        self
    }

    /// Adds a property.
    pub fn property(mut self, property: Property) -> Self {
        self.decl.properties.push(property);
        self
    }

    /// Marks the declaration as failing the host's resolution check.
    pub fn invalid(mut self) -> Self {
        self.decl.valid = false;
        self
    }

    /// Builds the declaration.
    pub fn build(self) -> Declaration {
        self.decl
    }
}
