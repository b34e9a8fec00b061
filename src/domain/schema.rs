//! Field schemas and baseline defaults
//!
//! Every object kind merges against one fixed, ordered table of
//! `(field, baseline default, type)` entries. The tables are `'static` and
//! shared read-only by every compilation.
//!
//! | field               | integration topic | data-plane topic | type    |
//! |---------------------|-------------------|------------------|---------|
//! | `partitions`        | 1                 | 1                | integer |
//! | `replication`       | 2                 | 3                | integer |
//! | `retention_ms`      | "259200000" (3d)  | "604800000" (7d) | text    |
//! | `retention_bytes`   | "629145600"       | "-1" (unlimited) | text    |
//! | `cleanup_policy`    | "delete"          | "delete"         | text    |
//! | `compression_type`  | "snappy"          | "snappy"         | text    |
//! | `max_message_bytes` | "26214400" (25MB) | "26214400"       | text    |
//!
//! | field         | DNS node             | type      |
//! |---------------|----------------------|-----------|
//! | `record_type` | "A"                  | text      |
//! | `ttl`         | 300                  | integer   |
//! | `proxied`     | false                | bool      |
//! | `domain`      | "" (the node name)   | text      |
//! | `ips`         | []                   | text list |

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use super::value_objects::DocValue;

/// Identity field every raw definition must carry.
pub const IDENTITY_FIELD: &str = "name";

/// Accepted shape of a schema field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Integer,
    /// String, or an integer rendered as decimal text
    Text,
    Bool,
    /// Sequence of strings or integers
    TextList,
}

impl FieldType {
    /// Human readable description used in error messages.
    pub fn expected(&self) -> &'static str {
        match self {
            FieldType::Integer => "an integer",
            FieldType::Text => "a string or integer",
            FieldType::Bool => "a boolean",
            FieldType::TextList => "a list of strings",
        }
    }

    /// Convert a document value into a field value of this type.
    ///
    /// Returns `None` when the value has the wrong shape.
    pub fn coerce(&self, value: &DocValue) -> Option<FieldValue> {
        match self {
            FieldType::Integer => value.as_i64().map(FieldValue::Integer),
            FieldType::Text => value.scalar_text().map(FieldValue::Text),
            FieldType::Bool => value.as_bool().map(FieldValue::Bool),
            FieldType::TextList => value
                .as_sequence()?
                .iter()
                .map(DocValue::scalar_text)
                .collect::<Option<Vec<_>>>()
                .map(FieldValue::List),
        }
    }
}

/// Compile-time default for a schema field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Baseline {
    Integer(i64),
    Text(&'static str),
    Bool(bool),
    EmptyList,
}

impl Baseline {
    pub fn to_value(self) -> FieldValue {
        match self {
            Baseline::Integer(n) => FieldValue::Integer(n),
            Baseline::Text(s) => FieldValue::Text(s.to_string()),
            Baseline::Bool(b) => FieldValue::Bool(b),
            Baseline::EmptyList => FieldValue::List(Vec::new()),
        }
    }
}

/// A merged field value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Integer(i64),
    Text(String),
    Bool(bool),
    List(Vec<String>),
}

impl FieldValue {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::List(items) => Some(items),
            _ => None,
        }
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Integer(n) => write!(f, "{}", n),
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::List(items) => write!(f, "[{}]", items.join(", ")),
        }
    }
}

/// One schema entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub baseline: Baseline,
    pub field_type: FieldType,
}

impl FieldSpec {
    pub const fn new(name: &'static str, baseline: Baseline, field_type: FieldType) -> Self {
        Self {
            name,
            baseline,
            field_type,
        }
    }
}

/// Ordered set of recognized fields for one object kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    pub fields: &'static [FieldSpec],
}

impl Schema {
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn recognizes(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Effective configuration made only of baseline values.
    pub fn baseline_config(&self) -> EffectiveConfig {
        EffectiveConfig {
            entries: self
                .fields
                .iter()
                .map(|f| (f.name, f.baseline.to_value()))
                .collect(),
        }
    }
}

pub const INTEGRATION_TOPIC_SCHEMA: Schema = Schema {
    fields: &[
        FieldSpec::new("partitions", Baseline::Integer(1), FieldType::Integer),
        FieldSpec::new("replication", Baseline::Integer(2), FieldType::Integer),
        FieldSpec::new("retention_ms", Baseline::Text("259200000"), FieldType::Text),
        FieldSpec::new("retention_bytes", Baseline::Text("629145600"), FieldType::Text),
        FieldSpec::new("cleanup_policy", Baseline::Text("delete"), FieldType::Text),
        FieldSpec::new("compression_type", Baseline::Text("snappy"), FieldType::Text),
        FieldSpec::new("max_message_bytes", Baseline::Text("26214400"), FieldType::Text),
    ],
};

pub const DATA_PLANE_TOPIC_SCHEMA: Schema = Schema {
    fields: &[
        FieldSpec::new("partitions", Baseline::Integer(1), FieldType::Integer),
        FieldSpec::new("replication", Baseline::Integer(3), FieldType::Integer),
        FieldSpec::new("retention_ms", Baseline::Text("604800000"), FieldType::Text),
        FieldSpec::new("retention_bytes", Baseline::Text("-1"), FieldType::Text),
        FieldSpec::new("cleanup_policy", Baseline::Text("delete"), FieldType::Text),
        FieldSpec::new("compression_type", Baseline::Text("snappy"), FieldType::Text),
        FieldSpec::new("max_message_bytes", Baseline::Text("26214400"), FieldType::Text),
    ],
};

pub const DNS_RECORD_SCHEMA: Schema = Schema {
    fields: &[
        FieldSpec::new("record_type", Baseline::Text("A"), FieldType::Text),
        FieldSpec::new("ttl", Baseline::Integer(300), FieldType::Integer),
        FieldSpec::new("proxied", Baseline::Bool(false), FieldType::Bool),
        FieldSpec::new("domain", Baseline::Text(""), FieldType::Text),
        FieldSpec::new("ips", Baseline::EmptyList, FieldType::TextList),
    ],
};

/// Fully merged configuration of one object, in schema order.
///
/// Always holds exactly one value per schema field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveConfig {
    entries: Vec<(&'static str, FieldValue)>,
}

impl EffectiveConfig {
    pub(crate) fn from_entries(entries: Vec<(&'static str, FieldValue)>) -> Self {
        Self { entries }
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &FieldValue)> {
        self.entries.iter().map(|(name, value)| (*name, value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for EffectiveConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
