//! Per-language string tables.

use serde_json::{Map, Value};

/// A mapping from language tag to string, attached to a property as its
/// per-language variant (e.g. `nameMap` alongside `name`).
///
/// Entries keep insertion order so documents re-emit stably. Lookups are
/// linear; these maps hold a handful of translations, not thousands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageMap {
    entries: Vec<(String, String)>,
}

impl LanguageMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// The value for `lang`, or `""` when absent. Absence is common and
    /// expected, so it is not an error and not an `Option`.
    pub fn get(&self, lang: &str) -> &str {
        self.entries
            .iter()
            .find(|(l, _)| l == lang)
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    }

    /// Set the value for `lang`, replacing any existing entry in place.
    pub fn set(&mut self, lang: impl Into<String>, value: impl Into<String>) {
        let lang = lang.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(l, _)| *l == lang) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((lang, value)),
        }
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(l, _)| l.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(l, v)| (l.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build from a JSON object, taking only string-valued entries.
    /// Returns `None` if any entry is not a string (the caller then keeps
    /// the raw value verbatim instead).
    pub fn from_json(map: &Map<String, Value>) -> Option<LanguageMap> {
        let mut out = LanguageMap::new();
        for (lang, value) in map {
            out.entries.push((lang.clone(), value.as_str()?.to_string()));
        }
        Some(out)
    }

    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        for (lang, value) in &self.entries {
            map.insert(lang.clone(), Value::String(value.clone()));
        }
        Value::Object(map)
    }
}
