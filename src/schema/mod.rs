//! Declarative per-type schema.
//!
//! The engine contains no knowledge of any concrete vocabulary type. Each
//! type is described by a [`TypeSchema`]: its canonical tag, the capability
//! roles it satisfies, and one [`PropertySpec`] per property. The schema is
//! plain data -- trimming or extending a vocabulary never touches the engine.

pub mod registry;

pub use registry::TypeRegistry;

/// One legal value shape for a property. The declared slice order is the
/// resolution trial order: first successful interpretation wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alternative {
    /// A nested object satisfying the Object capability.
    Object,
    /// A nested object satisfying the Link capability.
    Link,
    /// A bare absolute IRI reference.
    Iri,
    /// A plain string.
    String,
    /// A language-taggable string.
    LangString,
    /// An RFC 3339 timestamp.
    DateTime,
    /// An XSD-style duration.
    Duration,
    /// A JSON number.
    Number,
    /// A MIME media-type string.
    MediaType,
}

/// The named roles a concrete type may satisfy. Queried through the registry
/// when resolving a discriminated nested object against a property's
/// declared alternatives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub object: bool,
    pub link: bool,
    pub collection: bool,
}

impl Capabilities {
    /// An ordinary object type.
    pub fn object() -> Self {
        Capabilities { object: true, link: false, collection: false }
    }

    /// A link type. Links are not objects: a Link-capable tag does not
    /// satisfy an Object-only alternative.
    pub fn link() -> Self {
        Capabilities { object: false, link: true, collection: false }
    }

    /// A collection type. Collections are also objects.
    pub fn collection() -> Self {
        Capabilities { object: true, link: false, collection: true }
    }
}

/// The declaration of one property: its key, multiplicity, whether it has a
/// per-language map variant (`<name>Map`), and its ordered alternative set.
#[derive(Debug, Clone)]
pub struct PropertySpec {
    pub name: &'static str,
    pub functional: bool,
    pub language_map: bool,
    pub alternatives: Vec<Alternative>,
}

impl PropertySpec {
    /// A functional property: at most one value.
    pub fn functional(name: &'static str, alternatives: Vec<Alternative>) -> Self {
        PropertySpec { name, functional: true, language_map: false, alternatives }
    }

    /// A non-functional property: an ordered list of values.
    pub fn many(name: &'static str, alternatives: Vec<Alternative>) -> Self {
        PropertySpec { name, functional: false, language_map: false, alternatives }
    }

    /// Declare the `<name>Map` per-language variant alongside the property.
    pub fn with_language_map(mut self) -> Self {
        self.language_map = true;
        self
    }

    pub fn allows(&self, alternative: Alternative) -> bool {
        self.alternatives.contains(&alternative)
    }

    /// Whether any declared alternative is a nested-object shape.
    pub fn allows_nested(&self) -> bool {
        self.allows(Alternative::Object) || self.allows(Alternative::Link)
    }
}

/// The full declaration of one vocabulary type.
#[derive(Debug, Clone)]
pub struct TypeSchema {
    /// The canonical type tag, injected on serialize when absent.
    pub name: &'static str,
    pub capabilities: Capabilities,
    /// Declared properties, in emission order.
    pub properties: Vec<PropertySpec>,
}

impl TypeSchema {
    pub fn new(name: &'static str, capabilities: Capabilities, properties: Vec<PropertySpec>) -> Self {
        TypeSchema { name, capabilities, properties }
    }

    pub fn property(&self, name: &str) -> Option<&PropertySpec> {
        self.properties.iter().find(|p| p.name == name)
    }

    pub fn property_index(&self, name: &str) -> Option<usize> {
        self.properties.iter().position(|p| p.name == name)
    }

    /// Match a document key of the form `<name>Map` against a declared
    /// language-mappable property, returning the property's index.
    pub fn language_map_index(&self, key: &str) -> Option<usize> {
        let base = key.strip_suffix("Map")?;
        self.properties
            .iter()
            .position(|p| p.language_map && p.name == base)
    }
}
