//! In-memory document model for configuration specifications.
//!
//! The validator operates on a closed tree of tagged variants rather than on
//! parser values directly, so every accessor is an exhaustive match and the
//! integer/float distinction survives parsing (size bounds such as `minItems`
//! must reject floats).

use std::slice;

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value as JsonValue;

use crate::error::Result;

/// A parsed configuration-specification document.
///
/// Mapping entries preserve source order, which in turn keeps diagnostic
/// order deterministic for a given input.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Document {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Sequence(Vec<Document>),
    Mapping(Mapping),
}

impl Document {
    /// Build a document from a parsed YAML value.
    ///
    /// Non-string mapping keys are dropped and tagged values are unwrapped,
    /// matching how the rest of the tooling ingests YAML.
    fn from_yaml(value: serde_yaml::Value) -> Self {
        match value {
            serde_yaml::Value::Null => Document::Null,
            serde_yaml::Value::Bool(b) => Document::Bool(b),
            serde_yaml::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Document::Int(i)
                } else if let Some(f) = n.as_f64() {
                    Document::Float(f)
                } else {
                    Document::Null
                }
            }
            serde_yaml::Value::String(s) => Document::String(s),
            serde_yaml::Value::Sequence(seq) => {
                Document::Sequence(seq.into_iter().map(Document::from_yaml).collect())
            }
            serde_yaml::Value::Mapping(map) => {
                let mut mapping = Mapping::new();
                for (key, value) in map {
                    if let serde_yaml::Value::String(key) = key {
                        mapping.insert(key, Document::from_yaml(value));
                    }
                }
                Document::Mapping(mapping)
            }
            serde_yaml::Value::Tagged(tagged) => Document::from_yaml(tagged.value),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Document::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Document::Mapping(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_mapping_mut(&mut self) -> Option<&mut Mapping> {
        match self {
            Document::Mapping(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Document]> {
        match self {
            Document::Sequence(seq) => Some(seq),
            _ => None,
        }
    }

    pub fn as_sequence_mut(&mut self) -> Option<&mut Vec<Document>> {
        match self {
            Document::Sequence(seq) => Some(seq),
            _ => None,
        }
    }

    /// Whether this value is numeric (integer or float).
    pub fn is_number(&self) -> bool {
        matches!(self, Document::Int(_) | Document::Float(_))
    }

    /// Numeric value widened to `f64`, for cross-field range comparisons.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Document::Int(i) => Some(*i as f64),
            Document::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Convert the document to a JSON value for downstream tooling.
    ///
    /// Non-finite floats become `null`, as they have no JSON representation.
    pub fn to_json(&self) -> JsonValue {
        match self {
            Document::Null => JsonValue::Null,
            Document::Bool(b) => JsonValue::Bool(*b),
            Document::Int(i) => JsonValue::Number((*i).into()),
            Document::Float(f) => serde_json::Number::from_f64(*f)
                .map(JsonValue::Number)
                .unwrap_or(JsonValue::Null),
            Document::String(s) => JsonValue::String(s.clone()),
            Document::Sequence(seq) => {
                JsonValue::Array(seq.iter().map(Document::to_json).collect())
            }
            Document::Mapping(map) => JsonValue::Object(
                map.iter()
                    .map(|(key, value)| (key.clone(), value.to_json()))
                    .collect(),
            ),
        }
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Document::Null => serializer.serialize_unit(),
            Document::Bool(b) => serializer.serialize_bool(*b),
            Document::Int(i) => serializer.serialize_i64(*i),
            Document::Float(f) => serializer.serialize_f64(*f),
            Document::String(s) => serializer.serialize_str(s),
            Document::Sequence(seq) => seq.serialize(serializer),
            Document::Mapping(map) => map.serialize(serializer),
        }
    }
}

/// An order-preserving, string-keyed mapping.
///
/// Specification documents are small (tens of keys per node), so lookups walk
/// the entry list instead of maintaining a side index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mapping {
    entries: Vec<(String, Document)>,
}

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Document> {
        self.entries
            .iter()
            .find(|(entry_key, _)| entry_key == key)
            .map(|(_, value)| value)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Document> {
        self.entries
            .iter_mut()
            .find(|(entry_key, _)| entry_key == key)
            .map(|(_, value)| value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(entry_key, _)| entry_key == key)
    }

    /// Insert a value, replacing an existing entry in place or appending.
    pub fn insert(&mut self, key: impl Into<String>, value: Document) {
        let key = key.into();
        match self.get_mut(&key) {
            Some(existing) => *existing = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn iter(&self) -> slice::Iter<'_, (String, Document)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Mapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Parse specification source text into a document.
///
/// This is the only fallible boundary of the crate; every later check is
/// reported through the diagnostic list instead of an error return.
pub fn parse(text: &str) -> Result<Document> {
    let value: serde_yaml::Value = serde_yaml::from_str(text)?;
    Ok(Document::from_yaml(value))
}
