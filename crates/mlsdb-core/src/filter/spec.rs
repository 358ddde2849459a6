use crate::filter::key::{FilterKey, ValueShape};
use derive_more::{Deref, DerefMut, IntoIterator};
use serde::{
    Deserialize, Deserializer, Serialize,
    de::{MapAccess, Visitor},
};
use serde_json::Value as Json;
use std::collections::BTreeMap;

///
/// FilterValue
///
/// Closed variant type for filter payloads, one variant per value shape a
/// key can expect. The compiler dispatches on the variant; there is no
/// runtime type probing beyond this.
///

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FilterValue {
    Flag(bool),
    Number(f64),
    Text(String),
    TextSet(Vec<String>),
}

impl FilterValue {
    /// Whether this value activates its filter. Empty strings, empty
    /// sets, zero, `"0"`, and false flags are all inert.
    #[must_use]
    pub fn is_active(&self) -> bool {
        match self {
            Self::Flag(flag) => *flag,
            Self::Number(n) => *n != 0.0,
            Self::Text(text) => !text.is_empty() && text != "0",
            Self::TextSet(values) => !values.is_empty(),
        }
    }
}

impl From<bool> for FilterValue {
    fn from(v: bool) -> Self {
        Self::Flag(v)
    }
}

impl From<f64> for FilterValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<i64> for FilterValue {
    fn from(v: i64) -> Self {
        Self::Number(v as f64)
    }
}

impl From<&str> for FilterValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<Vec<String>> for FilterValue {
    fn from(v: Vec<String>) -> Self {
        Self::TextSet(v)
    }
}

impl From<&[&str]> for FilterValue {
    fn from(v: &[&str]) -> Self {
        Self::TextSet(v.iter().map(ToString::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for FilterValue {
    fn from(v: [&str; N]) -> Self {
        Self::TextSet(v.iter().map(ToString::to_string).collect())
    }
}

///
/// FilterSpec
///
/// The client-supplied sparse map of search constraints. Immutable once
/// received: complement specs are copies with keys removed, never in-place
/// mutations, so concurrent facet computation needs no synchronization.
///
/// Deserialization is tolerant by contract: unrecognized keys and values
/// that do not coerce to the key's shape are dropped silently.
///

#[derive(Clone, Debug, Default, Deref, DerefMut, IntoIterator, PartialEq, Serialize)]
pub struct FilterSpec(BTreeMap<FilterKey, FilterValue>);

impl FilterSpec {
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Builder-style insertion for programmatic construction.
    #[must_use]
    pub fn with(mut self, key: FilterKey, value: impl Into<FilterValue>) -> Self {
        self.0.insert(key, value.into());
        self
    }

    /// A copy of this spec with the given keys removed.
    #[must_use]
    pub fn without(&self, keys: &[FilterKey]) -> Self {
        let mut entries = self.0.clone();
        for key in keys {
            entries.remove(key);
        }

        Self(entries)
    }

    /// Whether any entry would activate a filter.
    #[must_use]
    pub fn has_active_entries(&self) -> bool {
        self.0.values().any(FilterValue::is_active)
    }

    /// The active numeric value for a key, if any.
    #[must_use]
    pub fn active_number(&self, key: FilterKey) -> Option<f64> {
        match self.active(key)? {
            FilterValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The active text value for a key, if any.
    #[must_use]
    pub fn active_text(&self, key: FilterKey) -> Option<&str> {
        match self.active(key)? {
            FilterValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The active value list for a key, if any.
    #[must_use]
    pub fn active_values(&self, key: FilterKey) -> Option<&[String]> {
        match self.active(key)? {
            FilterValue::TextSet(values) => Some(values),
            _ => None,
        }
    }

    /// Whether a flag key is set. Any active value counts, matching the
    /// permissive truthiness clients have historically relied on.
    #[must_use]
    pub fn is_set(&self, key: FilterKey) -> bool {
        self.active(key).is_some()
    }

    fn active(&self, key: FilterKey) -> Option<&FilterValue> {
        self.0.get(&key).filter(|value| value.is_active())
    }
}

impl<'de> Deserialize<'de> for FilterSpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SpecVisitor;

        impl<'de> Visitor<'de> for SpecVisitor {
            type Value = FilterSpec;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a map of filter keys to filter values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = BTreeMap::new();

                while let Some(raw_key) = map.next_key::<String>()? {
                    let raw_value: Json = map.next_value()?;

                    let Some(key) = FilterKey::parse(&raw_key) else {
                        continue;
                    };
                    if let Some(value) = coerce(key.shape(), &raw_value) {
                        entries.insert(key, value);
                    }
                }

                Ok(FilterSpec(entries))
            }
        }

        deserializer.deserialize_map(SpecVisitor)
    }
}

/// Coerce a raw JSON payload into the shape a key expects.
///
/// Returns `None` on mismatch; the entry is then treated as absent.
/// Numbers arrive as JSON numbers or numeric strings (form-encoded
/// clients send the latter); flags arrive as booleans, 0/1, or strings.
fn coerce(shape: ValueShape, raw: &Json) -> Option<FilterValue> {
    match shape {
        ValueShape::Number => match raw {
            Json::Number(n) => n.as_f64().map(FilterValue::Number),
            Json::String(s) => s.trim().parse::<f64>().ok().map(FilterValue::Number),
            _ => None,
        },
        ValueShape::Text => match raw {
            Json::String(s) => Some(FilterValue::Text(s.clone())),
            _ => None,
        },
        ValueShape::TextSet => match raw {
            Json::Array(items) => Some(FilterValue::TextSet(
                items
                    .iter()
                    .filter_map(|item| match item {
                        Json::String(s) => Some(s.clone()),
                        Json::Number(n) => Some(n.to_string()),
                        _ => None,
                    })
                    .collect(),
            )),
            _ => None,
        },
        ValueShape::Flag => match raw {
            Json::Bool(flag) => Some(FilterValue::Flag(*flag)),
            Json::Number(n) => Some(FilterValue::Flag(n.as_f64() != Some(0.0))),
            Json::String(s) => Some(FilterValue::Flag(!s.is_empty() && s != "0")),
            _ => None,
        },
    }
}
