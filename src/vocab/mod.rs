//! The ActivityStreams core vocabulary, expressed as schema data.
//!
//! Nothing here is engine logic: each type is a [`TypeSchema`] row -- its
//! canonical tag, capability roles, and property declarations -- and
//! [`register_core`] installs the whole table into a registry at startup.
//! An embedding application can register additional types, or its own
//! vocabulary entirely, the same way.

use crate::schema::{Alternative as A, Capabilities, PropertySpec, TypeRegistry, TypeSchema};

fn obj_or_ref() -> Vec<A> {
    vec![A::Object, A::Link, A::Iri]
}

fn text_or_ref() -> Vec<A> {
    vec![A::String, A::LangString, A::Iri]
}

fn time_or_ref() -> Vec<A> {
    vec![A::DateTime, A::Iri]
}

/// The property set shared by every Object-capable type.
fn object_props() -> Vec<PropertySpec> {
    vec![
        PropertySpec::many("attachment", obj_or_ref()),
        PropertySpec::many("attributedTo", obj_or_ref()),
        PropertySpec::many("audience", obj_or_ref()),
        PropertySpec::many("content", text_or_ref()).with_language_map(),
        PropertySpec::many("context", obj_or_ref()),
        PropertySpec::many("name", text_or_ref()).with_language_map(),
        PropertySpec::functional("endTime", time_or_ref()),
        PropertySpec::many("generator", obj_or_ref()),
        PropertySpec::many("icon", obj_or_ref()),
        PropertySpec::many("image", obj_or_ref()),
        PropertySpec::many("inReplyTo", obj_or_ref()),
        PropertySpec::many("location", obj_or_ref()),
        PropertySpec::many("preview", obj_or_ref()),
        PropertySpec::functional("published", time_or_ref()),
        PropertySpec::functional("replies", vec![A::Object, A::Iri]),
        PropertySpec::functional("startTime", time_or_ref()),
        PropertySpec::many("summary", text_or_ref()).with_language_map(),
        PropertySpec::many("tag", obj_or_ref()),
        PropertySpec::functional("updated", time_or_ref()),
        PropertySpec::many("url", vec![A::Link, A::Iri]),
        PropertySpec::many("to", obj_or_ref()),
        PropertySpec::many("bto", obj_or_ref()),
        PropertySpec::many("cc", obj_or_ref()),
        PropertySpec::many("bcc", obj_or_ref()),
        PropertySpec::functional("mediaType", vec![A::MediaType]),
        PropertySpec::functional("duration", vec![A::Duration]),
    ]
}

/// The property set of Link-capable types. Links are not objects and share
/// none of the object property machinery beyond `name`/`preview`.
fn link_props() -> Vec<PropertySpec> {
    vec![
        PropertySpec::functional("href", vec![A::Iri]),
        PropertySpec::many("rel", vec![A::String]),
        PropertySpec::functional("mediaType", vec![A::MediaType]),
        PropertySpec::many("name", text_or_ref()).with_language_map(),
        PropertySpec::functional("hreflang", vec![A::String]),
        PropertySpec::functional("height", vec![A::Number]),
        PropertySpec::functional("width", vec![A::Number]),
        PropertySpec::many("preview", obj_or_ref()),
    ]
}

fn activity_props() -> Vec<PropertySpec> {
    let mut props = object_props();
    props.extend([
        PropertySpec::many("actor", obj_or_ref()),
        PropertySpec::many("object", obj_or_ref()),
        PropertySpec::many("target", obj_or_ref()),
        PropertySpec::many("result", obj_or_ref()),
        PropertySpec::many("origin", obj_or_ref()),
        PropertySpec::many("instrument", obj_or_ref()),
    ]);
    props
}

fn collection_props() -> Vec<PropertySpec> {
    let mut props = object_props();
    props.extend([
        PropertySpec::functional("totalItems", vec![A::Number]),
        PropertySpec::functional("current", obj_or_ref()),
        PropertySpec::functional("first", obj_or_ref()),
        PropertySpec::functional("last", obj_or_ref()),
        PropertySpec::many("items", obj_or_ref()),
    ]);
    props
}

fn ordered_collection_props() -> Vec<PropertySpec> {
    let mut props = collection_props();
    props.push(PropertySpec::many("orderedItems", obj_or_ref()));
    props
}

fn collection_page_props() -> Vec<PropertySpec> {
    let mut props = collection_props();
    props.extend([
        PropertySpec::functional("partOf", obj_or_ref()),
        PropertySpec::functional("next", obj_or_ref()),
        PropertySpec::functional("prev", obj_or_ref()),
    ]);
    props
}

fn place_props() -> Vec<PropertySpec> {
    let mut props = object_props();
    props.extend([
        PropertySpec::functional("accuracy", vec![A::Number, A::Iri]),
        PropertySpec::functional("altitude", vec![A::Number, A::Iri]),
        PropertySpec::functional("latitude", vec![A::Number, A::Iri]),
        PropertySpec::functional("longitude", vec![A::Number, A::Iri]),
        PropertySpec::functional("radius", vec![A::Number, A::Iri]),
        PropertySpec::functional("units", vec![A::String, A::Iri]),
    ]);
    props
}

fn profile_props() -> Vec<PropertySpec> {
    let mut props = object_props();
    props.push(PropertySpec::functional("describes", vec![A::Object, A::Iri]));
    props
}

fn tombstone_props() -> Vec<PropertySpec> {
    let mut props = object_props();
    props.extend([
        PropertySpec::many("formerType", vec![A::String, A::Object]),
        PropertySpec::functional("deleted", time_or_ref()),
    ]);
    props
}

/// Object subtypes carrying no properties of their own.
const PLAIN_OBJECT_TYPES: &[&str] = &[
    "Object", "Article", "Audio", "Document", "Event", "Image", "Note", "Page", "Video",
];

/// Actor types: structurally plain objects in the core vocabulary.
const ACTOR_TYPES: &[&str] = &["Application", "Group", "Organization", "Person", "Service"];

/// Activity subtypes sharing the Activity property set.
const ACTIVITY_TYPES: &[&str] = &[
    "Activity", "Accept", "Announce", "Create", "Delete", "Follow", "Like", "Reject", "Undo",
    "Update",
];

/// Install the core vocabulary into `registry`.
pub fn register_core(registry: &mut TypeRegistry) {
    for name in PLAIN_OBJECT_TYPES.iter().chain(ACTOR_TYPES).copied() {
        registry.register(TypeSchema::new(name, Capabilities::object(), object_props()));
    }
    for name in ACTIVITY_TYPES.iter().copied() {
        registry.register(TypeSchema::new(name, Capabilities::object(), activity_props()));
    }

    registry.register(TypeSchema::new("Place", Capabilities::object(), place_props()));
    registry.register(TypeSchema::new("Profile", Capabilities::object(), profile_props()));
    registry.register(TypeSchema::new(
        "Tombstone",
        Capabilities::object(),
        tombstone_props(),
    ));

    registry.register(TypeSchema::new("Link", Capabilities::link(), link_props()));
    registry.register(TypeSchema::new("Mention", Capabilities::link(), link_props()));

    registry.register(TypeSchema::new(
        "Collection",
        Capabilities::collection(),
        collection_props(),
    ));
    registry.register(TypeSchema::new(
        "OrderedCollection",
        Capabilities::collection(),
        ordered_collection_props(),
    ));
    registry.register(TypeSchema::new(
        "CollectionPage",
        Capabilities::collection(),
        collection_page_props(),
    ));
    registry.register(TypeSchema::new(
        "OrderedCollectionPage",
        Capabilities::collection(),
        {
            let mut props = collection_page_props();
            props.push(PropertySpec::many("orderedItems", obj_or_ref()));
            props
        },
    ));
}

/// A fresh registry pre-populated with the core vocabulary.
pub fn core_registry() -> TypeRegistry {
    let mut registry = TypeRegistry::new();
    register_core(&mut registry);
    registry
}
