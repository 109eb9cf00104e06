//! The vocabulary object: the aggregate a document deserializes into.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::model::iri::Iri;
use crate::model::langmap::LanguageMap;
use crate::schema::TypeSchema;

use super::container::PropertyContainer;
use super::ser;

/// An in-memory vocabulary object: an optional identifier, an ordered
/// type-tag list, one multiplicity container per declared property, one
/// language map per language-mappable property, and the unknown-extension
/// table for everything the schema does not claim.
///
/// Objects own their nested objects by value; only explicit IRI
/// alternatives are reference-only. The unknown table and the language maps
/// are always present (possibly empty) -- no lazy allocation, no null
/// branches.
#[derive(Debug, Clone)]
pub struct VocabObject {
    schema: Arc<TypeSchema>,
    id: Option<Iri>,
    types: Vec<String>,
    /// Index-aligned with `schema.properties`.
    containers: Vec<PropertyContainer>,
    /// Index-aligned with `schema.properties`; only entries whose spec
    /// declares `language_map` are reachable through the public accessors.
    language_maps: Vec<LanguageMap>,
    unknown: Map<String, Value>,
}

impl VocabObject {
    /// An empty instance of the given type. All containers start empty.
    pub fn new(schema: Arc<TypeSchema>) -> Self {
        let containers = schema
            .properties
            .iter()
            .map(|spec| PropertyContainer::empty(spec.functional))
            .collect();
        let language_maps = schema.properties.iter().map(|_| LanguageMap::new()).collect();
        VocabObject {
            schema,
            id: None,
            types: Vec::new(),
            containers,
            language_maps,
            unknown: Map::new(),
        }
    }

    pub fn schema(&self) -> &TypeSchema {
        &self.schema
    }

    pub(crate) fn schema_arc(&self) -> &Arc<TypeSchema> {
        &self.schema
    }

    /// The canonical type tag of the concrete type this object was built as.
    pub fn type_name(&self) -> &'static str {
        self.schema.name
    }

    pub fn id(&self) -> Option<&Iri> {
        self.id.as_ref()
    }

    pub fn set_id(&mut self, id: Iri) {
        self.id = Some(id);
    }

    pub fn clear_id(&mut self) {
        self.id = None;
    }

    /// The explicitly-set type tags. The canonical name is injected at
    /// serialization time when missing, not stored here.
    pub fn types(&self) -> &[String] {
        &self.types
    }

    pub fn add_type(&mut self, tag: impl Into<String>) {
        self.types.push(tag.into());
    }

    /// The container for a declared property, or `None` for a name the
    /// schema does not declare.
    pub fn prop(&self, name: &str) -> Option<&PropertyContainer> {
        let idx = self.schema.property_index(name)?;
        Some(&self.containers[idx])
    }

    pub fn prop_mut(&mut self, name: &str) -> Option<&mut PropertyContainer> {
        let idx = self.schema.property_index(name)?;
        Some(&mut self.containers[idx])
    }

    /// The language map of a declared language-mappable property.
    pub fn language_map(&self, name: &str) -> Option<&LanguageMap> {
        let idx = self.schema.property_index(name)?;
        if !self.schema.properties[idx].language_map {
            return None;
        }
        Some(&self.language_maps[idx])
    }

    pub fn language_map_mut(&mut self, name: &str) -> Option<&mut LanguageMap> {
        let idx = self.schema.property_index(name)?;
        if !self.schema.properties[idx].language_map {
            return None;
        }
        Some(&mut self.language_maps[idx])
    }

    /// The unknown-extension table: every document key the schema did not
    /// claim, kept verbatim for lossless round trips.
    pub fn unknown(&self) -> &Map<String, Value> {
        &self.unknown
    }

    pub fn unknown_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.unknown
    }

    pub(crate) fn container_at(&self, index: usize) -> &PropertyContainer {
        &self.containers[index]
    }

    pub(crate) fn container_at_mut(&mut self, index: usize) -> &mut PropertyContainer {
        &mut self.containers[index]
    }

    pub(crate) fn language_map_at(&self, index: usize) -> &LanguageMap {
        &self.language_maps[index]
    }

    pub(crate) fn set_language_map_at(&mut self, index: usize, map: LanguageMap) {
        self.language_maps[index] = map;
    }

    /// Serialize to a JSON object. Infallible: typed slots cannot hold
    /// values their codecs cannot encode.
    pub fn to_document(&self) -> Map<String, Value> {
        ser::serialize(self)
    }

    pub fn to_json_string(&self) -> String {
        Value::Object(self.to_document()).to_string()
    }
}
