//! Scalar codecs: the primitive value alternatives a property slot can hold.
//!
//! Each scalar is a decode/encode pair over `serde_json::Value`. Decoding is
//! strict about lexical form (a malformed timestamp is a [`DecodeError`], not
//! a sloppy acceptance) but the caller -- the slot resolution algorithm -- is
//! lenient: a failed decode just advances to the next declared alternative.

use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde_json::Value;

/// A scalar codec could not parse its target lexical form.
///
/// Recovered locally by the alternative trial in slot resolution; it only
/// reaches callers using a codec directly.
#[derive(Debug)]
pub struct DecodeError {
    kind: &'static str,
    message: String,
}

impl DecodeError {
    pub fn new(kind: &'static str, message: String) -> Self {
        Self { kind, message }
    }

    /// Which codec failed ("iri", "datetime", "duration", "media-type", ...).
    pub fn kind(&self) -> &'static str {
        self.kind
    }
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} decode error: {}", self.kind, self.message)
    }
}

impl std::error::Error for DecodeError {}

fn expect_str<'a>(kind: &'static str, raw: &'a Value) -> Result<&'a str, DecodeError> {
    raw.as_str()
        .ok_or_else(|| DecodeError::new(kind, format!("expected a JSON string, got {raw}")))
}

// ---------------------------------------------------------------------------
// Plain string
// ---------------------------------------------------------------------------

pub fn decode_string(raw: &Value) -> Result<String, DecodeError> {
    expect_str("string", raw).map(str::to_string)
}

// ---------------------------------------------------------------------------
// Language-tagged string
// ---------------------------------------------------------------------------

/// A string with an optional language tag.
///
/// A bare JSON string decodes with no tag; tagged variants of a property
/// travel in its per-language map, not in the value position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LangString {
    pub value: String,
    pub language: Option<String>,
}

impl LangString {
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into(), language: None }
    }

    /// The language tag is advisory, for callers inspecting values in
    /// memory. Serialization emits only the value: per-language variants
    /// travel in the property's `<name>Map` channel, not the value position.
    pub fn with_language(value: impl Into<String>, language: impl Into<String>) -> Self {
        Self { value: value.into(), language: Some(language.into()) }
    }

    pub fn decode(raw: &Value) -> Result<LangString, DecodeError> {
        expect_str("lang-string", raw).map(LangString::new)
    }

    pub fn encode(&self) -> Value {
        Value::String(self.value.clone())
    }
}

impl std::fmt::Display for LangString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

// ---------------------------------------------------------------------------
// Timestamp (RFC 3339)
// ---------------------------------------------------------------------------

pub fn decode_datetime(raw: &Value) -> Result<DateTime<FixedOffset>, DecodeError> {
    let s = expect_str("datetime", raw)?;
    DateTime::parse_from_rfc3339(s)
        .map_err(|e| DecodeError::new("datetime", format!("{s}: {e}")))
}

/// `use_z` keeps the `Z` suffix for UTC and `AutoSi` keeps fractional
/// seconds only when present, so common inputs round-trip byte-identical.
pub fn encode_datetime(dt: &DateTime<FixedOffset>) -> Value {
    Value::String(dt.to_rfc3339_opts(SecondsFormat::AutoSi, true))
}

// ---------------------------------------------------------------------------
// Duration (XSD lexical space)
// ---------------------------------------------------------------------------

/// An `xsd:duration`-style duration: `[-]PnYnMnDTnHnMnS`.
///
/// Components are kept as written rather than normalized; `PT90M` and
/// `PT1H30M` denote the same span but are distinct lexical values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct XsdDuration {
    pub negative: bool,
    pub years: u64,
    pub months: u64,
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: f64,
}

impl XsdDuration {
    pub fn parse(s: &str) -> Result<XsdDuration, DecodeError> {
        let err = |msg: &str| DecodeError::new("duration", format!("{s}: {msg}"));

        let (negative, rest) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let rest = rest.strip_prefix('P').ok_or_else(|| err("missing 'P'"))?;
        let (date_part, time_part) = match rest.split_once('T') {
            Some((d, t)) => (d, Some(t)),
            None => (rest, None),
        };
        if date_part.is_empty() && time_part.is_none() {
            return Err(err("no components"));
        }
        if let Some(t) = time_part {
            if t.is_empty() {
                return Err(err("'T' with no time components"));
            }
        }

        let mut out = XsdDuration { negative, ..Default::default() };

        let mut cursor = date_part;
        for (designator, field) in [('Y', 0usize), ('M', 1), ('D', 2)] {
            if let Some((number, rest)) = take_component(cursor, designator) {
                let n = number.parse::<u64>().map_err(|_| err("bad number"))?;
                match field {
                    0 => out.years = n,
                    1 => out.months = n,
                    _ => out.days = n,
                }
                cursor = rest;
            }
        }
        if !cursor.is_empty() {
            return Err(err("trailing date components"));
        }

        if let Some(t) = time_part {
            let mut cursor = t;
            for (designator, field) in [('H', 0usize), ('M', 1), ('S', 2)] {
                if let Some((number, rest)) = take_component(cursor, designator) {
                    match field {
                        0 => out.hours = number.parse().map_err(|_| err("bad number"))?,
                        1 => out.minutes = number.parse().map_err(|_| err("bad number"))?,
                        _ => {
                            let secs = number.parse::<f64>().map_err(|_| err("bad seconds"))?;
                            if !secs.is_finite() || secs < 0.0 {
                                return Err(err("bad seconds"));
                            }
                            out.seconds = secs;
                        }
                    }
                    cursor = rest;
                }
            }
            if !cursor.is_empty() {
                return Err(err("trailing time components"));
            }
        }

        Ok(out)
    }

    pub fn decode(raw: &Value) -> Result<XsdDuration, DecodeError> {
        XsdDuration::parse(expect_str("duration", raw)?)
    }

    pub fn encode(&self) -> Value {
        Value::String(self.to_string())
    }

    fn is_zero(&self) -> bool {
        self.years == 0
            && self.months == 0
            && self.days == 0
            && self.hours == 0
            && self.minutes == 0
            && self.seconds == 0.0
    }
}

/// Split a leading `<digits-or-fraction><designator>` component off `s`.
/// Returns `None` when the next component has a different designator.
fn take_component(s: &str, designator: char) -> Option<(&str, &str)> {
    let end = s.find(|c: char| !c.is_ascii_digit() && c != '.')?;
    if s[end..].chars().next() != Some(designator) || end == 0 {
        return None;
    }
    Some((&s[..end], &s[end + designator.len_utf8()..]))
}

impl std::fmt::Display for XsdDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return f.write_str("PT0S");
        }
        if self.negative {
            f.write_str("-")?;
        }
        f.write_str("P")?;
        if self.years > 0 {
            write!(f, "{}Y", self.years)?;
        }
        if self.months > 0 {
            write!(f, "{}M", self.months)?;
        }
        if self.days > 0 {
            write!(f, "{}D", self.days)?;
        }
        if self.hours > 0 || self.minutes > 0 || self.seconds != 0.0 {
            f.write_str("T")?;
            if self.hours > 0 {
                write!(f, "{}H", self.hours)?;
            }
            if self.minutes > 0 {
                write!(f, "{}M", self.minutes)?;
            }
            if self.seconds != 0.0 {
                if self.seconds.fract() == 0.0 {
                    write!(f, "{:.0}S", self.seconds)?;
                } else {
                    write!(f, "{}S", self.seconds)?;
                }
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Media type
// ---------------------------------------------------------------------------

/// A MIME media-type string: `type "/" subtype *( ";" parameter )`.
///
/// The original text (including parameters and their spacing) is preserved
/// for re-emission; only the `type/subtype` essence is validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaType {
    full: String,
    slash: usize,
    essence_end: usize,
}

impl MediaType {
    pub fn parse(s: &str) -> Result<MediaType, DecodeError> {
        let err = |msg: &str| DecodeError::new("media-type", format!("{s}: {msg}"));

        let essence_end = s.find(';').unwrap_or(s.len());
        let essence = &s[..essence_end];
        let slash = essence.find('/').ok_or_else(|| err("missing '/'"))?;
        let (type_, subtype) = (&essence[..slash], &essence[slash + 1..]);
        if type_.is_empty() || !type_.chars().all(token_char) {
            return Err(err("invalid type token"));
        }
        if subtype.is_empty() || !subtype.chars().all(token_char) {
            return Err(err("invalid subtype token"));
        }
        Ok(MediaType { full: s.to_string(), slash, essence_end })
    }

    pub fn decode(raw: &Value) -> Result<MediaType, DecodeError> {
        MediaType::parse(expect_str("media-type", raw)?)
    }

    pub fn encode(&self) -> Value {
        Value::String(self.full.clone())
    }

    pub fn type_(&self) -> &str {
        &self.full[..self.slash]
    }

    pub fn subtype(&self) -> &str {
        &self.full[self.slash + 1..self.essence_end]
    }

    /// The `type/subtype` pair without parameters.
    pub fn essence(&self) -> &str {
        &self.full[..self.essence_end]
    }

    pub fn as_str(&self) -> &str {
        &self.full
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full)
    }
}

/// RFC 2045 token characters.
fn token_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '!' | '#' | '$' | '%' | '&' | '\'' | '*' | '+' | '-' | '.' | '^' | '_' | '`' | '|' | '~'
        )
}

// ---------------------------------------------------------------------------
// Number
// ---------------------------------------------------------------------------

/// Numbers pass through as `serde_json::Number` so the integer/float
/// distinction survives a round trip. Strings are never coerced.
pub fn decode_number(raw: &Value) -> Result<serde_json::Number, DecodeError> {
    match raw {
        Value::Number(n) => Ok(n.clone()),
        other => Err(DecodeError::new(
            "number",
            format!("expected a JSON number, got {other}"),
        )),
    }
}

pub fn encode_number(n: &serde_json::Number) -> Value {
    Value::Number(n.clone())
}
