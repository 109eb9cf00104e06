//! The serialization engine: reconstitutes a canonical document.

use serde_json::{Map, Value};

use super::de::{ID_KEY, TYPE_KEY};
use super::object::VocabObject;
use super::slot::Slot;

/// Serialize an object to a JSON map.
///
/// Emission order: the unknown-extension table verbatim, then the
/// identifier, then the type tags (injecting the canonical name when the
/// caller never set one, so every emitted document is self-describing;
/// suppressed entirely when a verbatim `type` value already sits in the
/// unknown table), then each declared property in schema order with its
/// language map alongside. Exactly one value emits bare; several emit an array in
/// insertion order; empty containers and empty language maps emit nothing.
pub(crate) fn serialize(obj: &VocabObject) -> Map<String, Value> {
    let mut out = Map::new();

    for (key, value) in obj.unknown() {
        out.insert(key.clone(), value.clone());
    }

    if let Some(id) = obj.id() {
        out.insert(ID_KEY.to_string(), Value::String(id.as_str().to_string()));
    }

    // A discriminator that was not entirely string-shaped was kept verbatim
    // in the unknown table; emitting computed tags would overwrite it.
    if !obj.unknown().contains_key(TYPE_KEY) {
        let mut tags = obj.types().to_vec();
        let canonical = obj.schema().name;
        if !tags.iter().any(|t| t == canonical) {
            tags.push(canonical.to_string());
        }
        let tags_value = if tags.len() == 1 {
            Value::String(tags.remove(0))
        } else {
            Value::Array(tags.into_iter().map(Value::String).collect())
        };
        out.insert(TYPE_KEY.to_string(), tags_value);
    }

    for (idx, spec) in obj.schema().properties.iter().enumerate() {
        let mut values: Vec<Value> = obj.container_at(idx).iter().map(Slot::to_value).collect();
        match values.len() {
            0 => {}
            1 => {
                out.insert(spec.name.to_string(), values.remove(0));
            }
            _ => {
                out.insert(spec.name.to_string(), Value::Array(values));
            }
        }
        if spec.language_map {
            let map = obj.language_map_at(idx);
            // An explicitly-set but empty map is suppressed: it round-trips
            // to the same state as an absent one.
            if !map.is_empty() {
                out.insert(format!("{}Map", spec.name), map.to_json());
            }
        }
    }

    out
}
