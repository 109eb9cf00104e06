//! Tests for the type registry and its capability queries.

use astreams::vocab;
use astreams::{Alternative, Capabilities, PropertySpec, TypeRegistry, TypeSchema};

// --- Core vocabulary registration ---

#[test]
fn core_registry_is_populated() {
    let registry = vocab::core_registry();
    assert!(!registry.is_empty());
    for tag in ["Object", "Link", "Note", "Person", "Create", "Collection", "Mention"] {
        assert!(registry.is_registered(tag), "missing core type {tag}");
    }
}

#[test]
fn unregistered_tag_is_no_match_not_an_error() {
    let registry = vocab::core_registry();
    assert!(registry.resolve_object("Zorp").is_none());
    assert!(registry.resolve_link("Zorp").is_none());
    assert!(registry.new_object("Zorp").is_none());
}

// --- Capability queries ---

#[test]
fn object_capable_tag_does_not_resolve_as_link() {
    let registry = vocab::core_registry();
    assert!(registry.resolve_object("Person").is_some());
    assert!(registry.resolve_link("Person").is_none());
}

#[test]
fn link_capable_tag_does_not_resolve_as_object() {
    let registry = vocab::core_registry();
    assert!(registry.resolve_link("Mention").is_some());
    assert!(registry.resolve_object("Mention").is_none());
    assert!(registry.resolve_collection("Mention").is_none());
}

#[test]
fn collections_are_also_objects() {
    let registry = vocab::core_registry();
    assert!(registry.resolve_collection("OrderedCollection").is_some());
    assert!(registry.resolve_object("OrderedCollection").is_some());
    assert!(registry.resolve_collection("Note").is_none());
}

#[test]
fn resolved_instance_is_empty_and_typed() {
    let registry = vocab::core_registry();
    let person = registry.resolve_object("Person").unwrap();
    assert_eq!(person.type_name(), "Person");
    assert!(person.id().is_none());
    assert!(person.types().is_empty());
    assert!(person.prop("name").unwrap().is_empty());
    assert!(person.unknown().is_empty());
}

// --- Custom registration ---

fn badge_schema() -> TypeSchema {
    TypeSchema::new(
        "Badge",
        Capabilities::object(),
        vec![
            PropertySpec::many("name", vec![Alternative::String]),
            PropertySpec::functional("awarded", vec![Alternative::DateTime]),
        ],
    )
}

#[test]
fn applications_can_register_their_own_types() {
    let mut registry = TypeRegistry::new();
    registry.register(badge_schema());
    assert_eq!(registry.len(), 1);

    let badge = registry.resolve_object("Badge").unwrap();
    assert_eq!(badge.type_name(), "Badge");
    assert!(badge.prop("name").is_some());
    assert!(badge.prop("href").is_none());
}

#[test]
fn reregistering_a_tag_replaces_the_entry() {
    let mut registry = TypeRegistry::new();
    registry.register(badge_schema());
    registry.register(TypeSchema::new("Badge", Capabilities::link(), vec![]));
    assert_eq!(registry.len(), 1);
    assert!(registry.resolve_object("Badge").is_none());
    assert!(registry.resolve_link("Badge").is_some());
}

// --- Schema lookups ---

#[test]
fn schema_property_lookup() {
    let registry = vocab::core_registry();
    let note = registry.schema("Note").unwrap();
    let content = note.property("content").unwrap();
    assert!(!content.functional);
    assert!(content.language_map);
    assert!(content.allows(Alternative::String));
    assert!(!content.allows(Alternative::Object));
    assert!(note.property("actor").is_none());
}

#[test]
fn language_map_key_maps_back_to_property() {
    let registry = vocab::core_registry();
    let note = registry.schema("Note").unwrap();
    let idx = note.language_map_index("contentMap").unwrap();
    assert_eq!(note.properties[idx].name, "content");
    // "mediaType" ends in neither declared map form nor a mappable property
    assert!(note.language_map_index("mediaTypeMap").is_none());
    assert!(note.language_map_index("content").is_none());
}
