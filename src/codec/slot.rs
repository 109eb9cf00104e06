//! The property slot: exactly one of the declared alternatives, or the
//! lossless unknown fallback.
//!
//! Resolution is deterministic and never fails outward except for one case:
//! a map-shaped value arriving at a property whose alternatives are all
//! scalar. Everything else that cannot be classified degrades to
//! [`Slot::Unknown`], which re-emits the original value verbatim.

use chrono::{DateTime, FixedOffset};
use serde_json::Value;

use crate::error::CodecError;
use crate::model::iri::Iri;
use crate::model::scalar::{self, LangString, MediaType, XsdDuration};
use crate::schema::registry::TypeRegistry;
use crate::schema::{Alternative, PropertySpec};

use super::de;
use super::object::VocabObject;

/// One resolved property value occurrence.
///
/// The enum representation makes the exclusivity invariant structural:
/// exactly one alternative is ever populated, and assigning a variant
/// replaces whatever was there.
#[derive(Debug, Clone)]
pub enum Slot {
    /// A nested object resolved through the Object capability.
    Object(VocabObject),
    /// A nested object resolved through the Link capability.
    Link(VocabObject),
    /// A bare absolute IRI reference.
    Iri(Iri),
    /// A plain string.
    String(String),
    /// A language-taggable string.
    LangString(LangString),
    /// An RFC 3339 timestamp.
    DateTime(DateTime<FixedOffset>),
    /// An XSD-style duration.
    Duration(XsdDuration),
    /// A JSON number, integer/float distinction preserved.
    Number(serde_json::Number),
    /// A MIME media-type string.
    MediaType(MediaType),
    /// The raw value, kept verbatim because no alternative claimed it.
    Unknown(Value),
}

impl Slot {
    /// Resolve one raw value against a property's declared alternatives.
    ///
    /// Map-shaped values go through the discriminator and the registry's
    /// capability queries; everything else tries the declared scalar
    /// alternatives in order, first successful decode winning.
    pub fn resolve(
        registry: &TypeRegistry,
        spec: &PropertySpec,
        raw: &Value,
    ) -> Result<Slot, CodecError> {
        let map = match raw {
            Value::Object(map) => map,
            other => return Ok(Self::resolve_scalar(spec, other)),
        };

        if !spec.allows_nested() {
            return Err(CodecError::ShapeMismatch {
                property: spec.name.to_string(),
            });
        }

        let wants_object = spec.allows(Alternative::Object);
        let wants_link = spec.allows(Alternative::Link);
        for tag in de::discriminator_tags(map) {
            if wants_object {
                if let Some(mut obj) = registry.resolve_object(&tag) {
                    de::populate(registry, &mut obj, map)?;
                    return Ok(Slot::Object(obj));
                }
            }
            if wants_link {
                if let Some(mut obj) = registry.resolve_link(&tag) {
                    de::populate(registry, &mut obj, map)?;
                    return Ok(Slot::Link(obj));
                }
            }
        }

        // No discriminator, or no tag resolved: unclassifiable but not
        // malformed. Keep it verbatim.
        Ok(Slot::Unknown(raw.clone()))
    }

    fn resolve_scalar(spec: &PropertySpec, raw: &Value) -> Slot {
        for alternative in &spec.alternatives {
            match alternative {
                Alternative::Object | Alternative::Link => continue,
                Alternative::Iri => {
                    if let Some(s) = raw.as_str() {
                        if let Ok(iri) = Iri::parse(s) {
                            return Slot::Iri(iri);
                        }
                    }
                }
                Alternative::String => {
                    if let Some(s) = raw.as_str() {
                        return Slot::String(s.to_string());
                    }
                }
                Alternative::LangString => {
                    if let Ok(ls) = LangString::decode(raw) {
                        return Slot::LangString(ls);
                    }
                }
                Alternative::DateTime => {
                    if let Ok(dt) = scalar::decode_datetime(raw) {
                        return Slot::DateTime(dt);
                    }
                }
                Alternative::Duration => {
                    if let Ok(d) = XsdDuration::decode(raw) {
                        return Slot::Duration(d);
                    }
                }
                Alternative::Number => {
                    if let Ok(n) = scalar::decode_number(raw) {
                        return Slot::Number(n);
                    }
                }
                Alternative::MediaType => {
                    if let Ok(mt) = MediaType::decode(raw) {
                        return Slot::MediaType(mt);
                    }
                }
            }
        }
        Slot::Unknown(raw.clone())
    }

    /// Serialize whichever alternative is populated, recursing into nested
    /// objects. The unknown alternative re-emits exactly what was stored.
    pub fn to_value(&self) -> Value {
        match self {
            Slot::Object(obj) | Slot::Link(obj) => Value::Object(obj.to_document()),
            Slot::Iri(iri) => Value::String(iri.as_str().to_string()),
            Slot::String(s) => Value::String(s.clone()),
            Slot::LangString(ls) => ls.encode(),
            Slot::DateTime(dt) => scalar::encode_datetime(dt),
            Slot::Duration(d) => d.encode(),
            Slot::Number(n) => scalar::encode_number(n),
            Slot::MediaType(mt) => mt.encode(),
            Slot::Unknown(v) => v.clone(),
        }
    }

    pub fn as_object(&self) -> Option<&VocabObject> {
        match self {
            Slot::Object(obj) => Some(obj),
            _ => None,
        }
    }

    pub fn as_link(&self) -> Option<&VocabObject> {
        match self {
            Slot::Link(obj) => Some(obj),
            _ => None,
        }
    }

    pub fn as_iri(&self) -> Option<&Iri> {
        match self {
            Slot::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Slot::String(s) => Some(s),
            Slot::LangString(ls) => Some(&ls.value),
            _ => None,
        }
    }

    pub fn as_datetime(&self) -> Option<&DateTime<FixedOffset>> {
        match self {
            Slot::DateTime(dt) => Some(dt),
            _ => None,
        }
    }

    pub fn as_duration(&self) -> Option<&XsdDuration> {
        match self {
            Slot::Duration(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<&serde_json::Number> {
        match self {
            Slot::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_media_type(&self) -> Option<&MediaType> {
        match self {
            Slot::MediaType(mt) => Some(mt),
            _ => None,
        }
    }

    pub fn as_unknown(&self) -> Option<&Value> {
        match self {
            Slot::Unknown(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Slot::Unknown(_))
    }
}
