//! The type registry: tag → schema, with capability queries.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use crate::codec::de;
use crate::codec::object::VocabObject;
use crate::error::CodecError;

use super::{Capabilities, TypeSchema};

/// Maps a type-tag name to the schema of the concrete type it denotes.
///
/// Populated once at startup by schema-definition code (see
/// [`crate::vocab::register_core`]); the engine only consults the capability
/// queries, each of which either hands back a usable empty instance or
/// answers "no match" -- an unregistered or capability-mismatched tag is
/// never an error at this level.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    entries: HashMap<String, Arc<TypeSchema>>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a type under its canonical tag. Re-registering a tag
    /// replaces the earlier entry.
    pub fn register(&mut self, schema: TypeSchema) {
        self.entries.insert(schema.name.to_string(), Arc::new(schema));
    }

    pub fn schema(&self, tag: &str) -> Option<&Arc<TypeSchema>> {
        self.entries.get(tag)
    }

    pub fn is_registered(&self, tag: &str) -> bool {
        self.entries.contains_key(tag)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn resolve(&self, tag: &str, want: impl Fn(Capabilities) -> bool) -> Option<VocabObject> {
        let schema = self.entries.get(tag)?;
        if !want(schema.capabilities) {
            return None;
        }
        Some(VocabObject::new(Arc::clone(schema)))
    }

    /// An empty instance of `tag` if it is registered and Object-capable.
    pub fn resolve_object(&self, tag: &str) -> Option<VocabObject> {
        self.resolve(tag, |c| c.object)
    }

    /// An empty instance of `tag` if it is registered and Link-capable.
    pub fn resolve_link(&self, tag: &str) -> Option<VocabObject> {
        self.resolve(tag, |c| c.link)
    }

    /// An empty instance of `tag` if it is registered and Collection-capable.
    pub fn resolve_collection(&self, tag: &str) -> Option<VocabObject> {
        self.resolve(tag, |c| c.collection)
    }

    /// An empty instance of any registered `tag`, for programmatic
    /// construction.
    pub fn new_object(&self, tag: &str) -> Option<VocabObject> {
        self.resolve(tag, |_| true)
    }

    /// Deserialize a top-level document, selecting the concrete type from
    /// the document's own discriminator. Tags are tried left-to-right, the
    /// Object reading before the Link reading for each.
    pub fn deserialize_document(&self, document: &Value) -> Result<VocabObject, CodecError> {
        let map = match document {
            Value::Object(map) => map,
            _ => return Err(CodecError::NotAnObject),
        };
        let tags = de::discriminator_tags(map);
        for tag in &tags {
            if let Some(mut obj) = self
                .resolve_object(tag)
                .or_else(|| self.resolve_link(tag))
            {
                de::populate(self, &mut obj, map)?;
                return Ok(obj);
            }
        }
        Err(CodecError::UnknownType(tags))
    }

    /// Parse JSON text and deserialize it as a top-level document.
    pub fn from_json_str(&self, text: &str) -> Result<VocabObject, CodecError> {
        let document: Value = serde_json::from_str(text)?;
        self.deserialize_document(&document)
    }
}
