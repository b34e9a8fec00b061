//! Document Value Object
//!
//! A small tagged tree that definition files are converted into right after
//! YAML deserialization. Consumers check shape explicitly at every access
//! instead of assuming structure.

use std::collections::BTreeMap;

/// A deserialized definition document node.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DocValue {
    /// Absent value, YAML `null` or `~`
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Sequence(Vec<DocValue>),
    Mapping(BTreeMap<String, DocValue>),
}

impl DocValue {
    /// An empty mapping; what a missing or empty source file reads as.
    pub fn empty_document() -> Self {
        DocValue::Mapping(BTreeMap::new())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, DocValue::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            DocValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            DocValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            DocValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[DocValue]> {
        match self {
            DocValue::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&BTreeMap<String, DocValue>> {
        match self {
            DocValue::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Look up a key when this node is a mapping.
    pub fn get(&self, key: &str) -> Option<&DocValue> {
        self.as_mapping().and_then(|map| map.get(key))
    }

    /// Render a scalar as text. Strings are returned as-is and integers in
    /// decimal; other shapes have no text form.
    pub fn scalar_text(&self) -> Option<String> {
        match self {
            DocValue::String(s) => Some(s.clone()),
            DocValue::Integer(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Short shape name used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            DocValue::Null => "null",
            DocValue::Bool(_) => "bool",
            DocValue::Integer(_) => "integer",
            DocValue::Float(_) => "float",
            DocValue::String(_) => "string",
            DocValue::Sequence(_) => "sequence",
            DocValue::Mapping(_) => "mapping",
        }
    }
}

impl From<serde_yaml_ng::Value> for DocValue {
    fn from(value: serde_yaml_ng::Value) -> Self {
        use serde_yaml_ng::Value;

        match value {
            Value::Null => DocValue::Null,
            Value::Bool(b) => DocValue::Bool(b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    DocValue::Integer(i)
                } else {
                    DocValue::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Value::String(s) => DocValue::String(s),
            Value::Sequence(items) => {
                DocValue::Sequence(items.into_iter().map(DocValue::from).collect())
            }
            Value::Mapping(map) => DocValue::Mapping(
                map.into_iter()
                    .map(|(k, v)| (mapping_key(k), DocValue::from(v)))
                    .collect(),
            ),
            Value::Tagged(tagged) => DocValue::from(tagged.value),
        }
    }
}

/// Scalar keys are stringified so `1: foo` and `"1": foo` address the same
/// entry.
fn mapping_key(key: serde_yaml_ng::Value) -> String {
    use serde_yaml_ng::Value;

    match key {
        Value::String(s) => s,
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Null => "null".to_string(),
        other => serde_yaml_ng::to_string(&other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}
