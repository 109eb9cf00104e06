//! Tests for the scalar codecs: IRI, language string, timestamp, duration,
//! media type, number.

use astreams::model::iri::{escape_segment, Iri};
use astreams::model::scalar::{
    decode_datetime, decode_number, decode_string, encode_datetime, LangString, MediaType,
    XsdDuration,
};
use serde_json::{json, Value};

// --- IRI ---

#[test]
fn iri_accepts_absolute_http() {
    let iri = Iri::parse("https://example.org/users/sally").unwrap();
    assert_eq!(iri.as_str(), "https://example.org/users/sally");
}

#[test]
fn iri_accepts_fragment_and_query() {
    assert!(Iri::parse("https://example.org/path?q=1#frag").is_ok());
}

#[test]
fn iri_accepts_non_http_schemes() {
    assert!(Iri::parse("urn:uuid:6e8bc430-9c3a-11d9-9669-0800200c9a66").is_ok());
    assert!(Iri::parse("mailto:sally@example.org").is_ok());
    assert!(Iri::parse("did:example:123456").is_ok());
}

#[test]
fn iri_accepts_unicode() {
    // IRIs allow non-ASCII per RFC 3987.
    assert!(Iri::parse("https://example.org/caf\u{e9}").is_ok());
}

#[test]
fn iri_rejects_relative_reference() {
    assert!(Iri::parse("/users/sally").is_err());
    assert!(Iri::parse("users/sally").is_err());
    assert!(Iri::parse("").is_err());
}

#[test]
fn iri_rejects_invalid_scheme() {
    // Scheme must start with a letter.
    assert!(Iri::parse("1http://example.org/").is_err());
    // A Windows path is not an IRI even though it contains a colon.
    assert!(Iri::parse("c:\\temp\\file").is_err());
}

#[test]
fn iri_rejects_raw_spaces_and_controls() {
    assert!(Iri::parse("https://example.org/a b").is_err());
    assert!(Iri::parse("https://example.org/a\tb").is_err());
    assert!(Iri::parse("https://example.org/<a>").is_err());
}

#[test]
fn iri_rejects_empty_hier_part() {
    assert!(Iri::parse("https:").is_err());
}

#[test]
fn iri_serde_round_trip() {
    let iri = Iri::parse("https://example.org/x").unwrap();
    let value = serde_json::to_value(&iri).unwrap();
    assert_eq!(value, json!("https://example.org/x"));
    let back: Iri = serde_json::from_value(value).unwrap();
    assert_eq!(back, iri);
}

#[test]
fn iri_serde_rejects_relative() {
    assert!(serde_json::from_value::<Iri>(json!("no-scheme-here")).is_err());
}

#[test]
fn escape_segment_encodes_reserved_characters() {
    assert_eq!(escape_segment("a/b:c"), "a%2Fb%3Ac");
    assert_eq!(escape_segment("plain-name_1.2~x"), "plain-name_1.2~x");
}

#[test]
fn escaped_segment_produces_valid_iri() {
    let iri = format!("https://example.org/tag/{}", escape_segment("two words"));
    assert!(Iri::parse(&iri).is_ok());
}

// --- Plain string / language string ---

#[test]
fn decode_string_accepts_only_strings() {
    assert_eq!(decode_string(&json!("hi")).unwrap(), "hi");
    assert!(decode_string(&json!(42)).is_err());
    assert!(decode_string(&json!(["hi"])).is_err());
}

#[test]
fn lang_string_from_bare_string_has_no_tag() {
    let ls = LangString::decode(&json!("bonjour")).unwrap();
    assert_eq!(ls.value, "bonjour");
    assert_eq!(ls.language, None);
    assert_eq!(ls.encode(), json!("bonjour"));
}

#[test]
fn lang_string_with_language() {
    let ls = LangString::with_language("bonjour", "fr");
    assert_eq!(ls.language.as_deref(), Some("fr"));
    assert_eq!(ls.to_string(), "bonjour");
    // the tag is in-memory only; the value position carries just the string
    assert_eq!(ls.encode(), json!("bonjour"));
}

// --- Timestamp ---

#[test]
fn datetime_zulu_round_trips_byte_identical() {
    let raw = json!("2024-03-05T09:30:00Z");
    let dt = decode_datetime(&raw).unwrap();
    assert_eq!(encode_datetime(&dt), raw);
}

#[test]
fn datetime_fractional_seconds_survive() {
    let raw = json!("2024-03-05T09:30:00.250Z");
    let dt = decode_datetime(&raw).unwrap();
    assert_eq!(encode_datetime(&dt), raw);
}

#[test]
fn datetime_nonzero_offset_is_kept() {
    let raw = json!("2024-03-05T09:30:00+02:00");
    let dt = decode_datetime(&raw).unwrap();
    assert_eq!(encode_datetime(&dt), raw);
}

#[test]
fn datetime_utc_offset_normalizes_to_z() {
    let dt = decode_datetime(&json!("2024-03-05T09:30:00+00:00")).unwrap();
    assert_eq!(encode_datetime(&dt), json!("2024-03-05T09:30:00Z"));
}

#[test]
fn datetime_rejects_garbage() {
    assert!(decode_datetime(&json!("yesterday")).is_err());
    assert!(decode_datetime(&json!("2024-03-05")).is_err());
    assert!(decode_datetime(&json!(1709630400)).is_err());
}

// --- Duration ---

#[test]
fn duration_simple_seconds() {
    let d = XsdDuration::parse("PT5S").unwrap();
    assert_eq!(d.seconds, 5.0);
    assert_eq!(d.to_string(), "PT5S");
}

#[test]
fn duration_full_form() {
    let d = XsdDuration::parse("P1Y2M3DT4H5M6S").unwrap();
    assert_eq!((d.years, d.months, d.days), (1, 2, 3));
    assert_eq!((d.hours, d.minutes, d.seconds), (4, 5, 6.0));
    assert_eq!(d.to_string(), "P1Y2M3DT4H5M6S");
}

#[test]
fn duration_negative() {
    let d = XsdDuration::parse("-PT90M").unwrap();
    assert!(d.negative);
    assert_eq!(d.minutes, 90);
    assert_eq!(d.to_string(), "-PT90M");
}

#[test]
fn duration_fractional_seconds() {
    let d = XsdDuration::parse("PT0.5S").unwrap();
    assert_eq!(d.seconds, 0.5);
    assert_eq!(d.to_string(), "PT0.5S");
}

#[test]
fn duration_date_only() {
    let d = XsdDuration::parse("P3D").unwrap();
    assert_eq!(d.days, 3);
    assert_eq!(d.to_string(), "P3D");
}

#[test]
fn duration_zero_displays_canonically() {
    assert_eq!(XsdDuration::default().to_string(), "PT0S");
}

#[test]
fn duration_rejects_malformed() {
    assert!(XsdDuration::parse("").is_err());
    assert!(XsdDuration::parse("P").is_err());
    assert!(XsdDuration::parse("PT").is_err());
    assert!(XsdDuration::parse("5S").is_err());
    assert!(XsdDuration::parse("P5X").is_err());
    // Fractions are only legal in the seconds component.
    assert!(XsdDuration::parse("P1.5Y").is_err());
    // Date designators after T, or time designators before it.
    assert!(XsdDuration::parse("PT3D").is_err());
}

// --- Media type ---

#[test]
fn media_type_basic() {
    let mt = MediaType::parse("text/html").unwrap();
    assert_eq!(mt.type_(), "text");
    assert_eq!(mt.subtype(), "html");
    assert_eq!(mt.essence(), "text/html");
}

#[test]
fn media_type_parameters_preserved() {
    let mt = MediaType::parse("text/html; charset=utf-8").unwrap();
    assert_eq!(mt.essence(), "text/html");
    assert_eq!(mt.as_str(), "text/html; charset=utf-8");
    assert_eq!(mt.encode(), json!("text/html; charset=utf-8"));
}

#[test]
fn media_type_structured_suffix() {
    let mt = MediaType::parse("application/ld+json").unwrap();
    assert_eq!(mt.subtype(), "ld+json");
}

#[test]
fn media_type_rejects_malformed() {
    assert!(MediaType::parse("texthtml").is_err());
    assert!(MediaType::parse("/html").is_err());
    assert!(MediaType::parse("text/").is_err());
    assert!(MediaType::parse("te xt/html").is_err());
}

// --- Number ---

#[test]
fn number_passthrough_keeps_integer_and_float() {
    let int = decode_number(&json!(42)).unwrap();
    assert_eq!(Value::Number(int), json!(42));
    let float = decode_number(&json!(4.5)).unwrap();
    assert_eq!(Value::Number(float), json!(4.5));
}

#[test]
fn number_never_coerced_from_string() {
    assert!(decode_number(&json!("42")).is_err());
}
