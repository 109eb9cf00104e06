//! The deserialization engine: drives a document against a type's schema.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::error::CodecError;
use crate::model::iri::Iri;
use crate::model::langmap::LanguageMap;
use crate::schema::registry::TypeRegistry;
use crate::schema::TypeSchema;

use super::object::VocabObject;
use super::slot::Slot;

/// The reserved context key, consumed by an external context-resolution
/// collaborator; the engine recognizes and skips it.
pub const CONTEXT_KEY: &str = "@context";

/// The discriminator key naming one or more registered type tags.
pub const TYPE_KEY: &str = "type";

/// The identifier key.
pub const ID_KEY: &str = "id";

/// Deserialize a document into an empty instance of `schema`.
///
/// Callers that want the document itself to pick the type go through
/// [`TypeRegistry::deserialize_document`] instead.
pub fn deserialize_into(
    registry: &TypeRegistry,
    schema: Arc<TypeSchema>,
    document: &Map<String, Value>,
) -> Result<VocabObject, CodecError> {
    let mut obj = VocabObject::new(schema);
    populate(registry, &mut obj, document)?;
    Ok(obj)
}

/// The tags listed by a map's discriminator key: a single string, or an
/// array whose string entries are taken in order. Anything else yields no
/// tags.
pub(crate) fn discriminator_tags(map: &Map<String, Value>) -> Vec<String> {
    match map.get(TYPE_KEY) {
        Some(Value::String(tag)) => vec![tag.clone()],
        Some(Value::Array(tags)) => tags
            .iter()
            .filter_map(|t| t.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}

/// Populate `obj` from `document`, key by key.
///
/// Only a shape mismatch aborts; everything unclaimed or unclassifiable
/// lands in the unknown-extension table or an unknown slot, verbatim.
pub(crate) fn populate(
    registry: &TypeRegistry,
    obj: &mut VocabObject,
    document: &Map<String, Value>,
) -> Result<(), CodecError> {
    let schema = Arc::clone(obj.schema_arc());

    for (key, value) in document {
        if key == CONTEXT_KEY {
            continue;
        }

        if key == ID_KEY {
            match value.as_str().and_then(|s| Iri::parse(s).ok()) {
                Some(iri) => obj.set_id(iri),
                // Not an absolute IRI: keep it rather than lose it.
                None => {
                    obj.unknown_mut().insert(key.clone(), value.clone());
                }
            }
            continue;
        }

        if key == TYPE_KEY {
            if !normalize_type_tags(obj, value) {
                obj.unknown_mut().insert(key.clone(), value.clone());
            }
            continue;
        }

        if let Some(idx) = schema.property_index(key) {
            let spec = &schema.properties[idx];
            match value {
                // Array: resolve each element independently, in order. A
                // functional property keeps the last.
                Value::Array(items) => {
                    for item in items {
                        let slot = Slot::resolve(registry, spec, item)?;
                        obj.container_at_mut(idx).append(slot);
                    }
                }
                // Bare value: one slot, normalized to the sole element of a
                // non-functional list.
                other => {
                    let slot = Slot::resolve(registry, spec, other)?;
                    obj.container_at_mut(idx).append(slot);
                }
            }
            continue;
        }

        if let Some(idx) = schema.language_map_index(key) {
            if let Value::Object(entries) = value {
                if let Some(map) = LanguageMap::from_json(entries) {
                    obj.set_language_map_at(idx, map);
                    continue;
                }
            }
            // Not a string-to-string object: keep the raw value instead.
            obj.unknown_mut().insert(key.clone(), value.clone());
            continue;
        }

        obj.unknown_mut().insert(key.clone(), value.clone());
    }

    Ok(())
}

/// Accept a single tag or an array of tags. Returns `false` when the value
/// is not entirely string-shaped, in which case the caller keeps the raw
/// value.
fn normalize_type_tags(obj: &mut VocabObject, value: &Value) -> bool {
    match value {
        Value::String(tag) => {
            obj.add_type(tag.clone());
            true
        }
        Value::Array(tags) => {
            if !tags.iter().all(Value::is_string) {
                return false;
            }
            for tag in tags {
                if let Some(tag) = tag.as_str() {
                    obj.add_type(tag.to_string());
                }
            }
            true
        }
        _ => false,
    }
}
