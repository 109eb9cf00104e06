//! Absolute IRI references.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::Error as _;
use serde::Deserialize as _;

use super::scalar::DecodeError;

/// Characters that need percent-encoding in IRI path segments.
/// We keep alphanumeric, -, _, ., ~ as unreserved per RFC 3987.
const SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'!')
    .add(b'"')
    .add(b'#')
    .add(b'$')
    .add(b'%')
    .add(b'&')
    .add(b'\'')
    .add(b'(')
    .add(b')')
    .add(b'*')
    .add(b'+')
    .add(b',')
    .add(b'/')
    .add(b':')
    .add(b';')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'@')
    .add(b'[')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Characters that may never appear raw anywhere in an IRI. A candidate
/// containing one of these would have needed escaping at the source, so it
/// is rejected rather than repaired. Non-ASCII characters are not in this
/// set: RFC 3987 admits them directly.
fn forbidden_char(c: char) -> bool {
    c.is_ascii_control()
        || matches!(c, ' ' | '"' | '<' | '>' | '\\' | '^' | '`' | '{' | '|' | '}')
}

/// An absolute IRI reference.
///
/// Only absolute IRIs are accepted: the vocabulary uses IRIs as global
/// identifiers, so a relative reference has no base to resolve against here.
/// Non-ASCII characters are legal per RFC 3987 and kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Iri(String);

impl Iri {
    /// Parse an absolute IRI. Requires an RFC 3986 scheme and rejects
    /// characters that would have needed percent-escaping.
    pub fn parse(s: &str) -> Result<Iri, DecodeError> {
        let colon = s
            .find(':')
            .ok_or_else(|| DecodeError::new("iri", format!("not absolute (no scheme): {s}")))?;
        let scheme = &s[..colon];
        if !valid_scheme(scheme) {
            return Err(DecodeError::new("iri", format!("invalid scheme: {s}")));
        }
        if s.len() == colon + 1 {
            return Err(DecodeError::new("iri", format!("empty hier-part: {s}")));
        }
        if s.chars().any(forbidden_char) {
            return Err(DecodeError::new(
                "iri",
                format!("contains characters requiring escaping: {s}"),
            ));
        }
        Ok(Iri(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Iri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl serde::Serialize for Iri {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for Iri {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Iri::parse(&s).map_err(D::Error::custom)
    }
}

/// Scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
fn valid_scheme(scheme: &str) -> bool {
    let mut chars = scheme.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Escape a string for use as an IRI path segment, for callers minting
/// identifiers from raw names.
pub fn escape_segment(value: &str) -> String {
    utf8_percent_encode(value, SEGMENT_ENCODE_SET).to_string()
}
