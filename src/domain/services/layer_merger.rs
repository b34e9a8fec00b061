//! Layer merger
//!
//! Builds an object's effective configuration from three layers, lowest to
//! highest priority:
//! - the schema baseline
//! - the file-level `defaults` block
//! - the object's own override fields
//!
//! Each field is resolved independently. Fields outside the schema never
//! reach the result; their names are reported back so the caller can warn.

use std::collections::BTreeMap;

use crate::domain::schema::{EffectiveConfig, FieldValue, Schema};
use crate::domain::value_objects::DocValue;

/// Typed, validated contents of a `defaults` block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileDefaults {
    values: BTreeMap<&'static str, FieldValue>,
}

impl FileDefaults {
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.values.get(field)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A recognized field with a value of the wrong shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub expected: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MergeOutcome {
    pub config: EffectiveConfig,
    /// Names of dropped fields, in key order
    pub unknown_fields: Vec<String>,
}

/// Validate a `defaults` mapping against `schema`.
///
/// Returns the typed defaults and the names of unrecognized keys.
pub fn resolve_defaults(
    schema: &Schema,
    raw: &BTreeMap<String, DocValue>,
) -> Result<(FileDefaults, Vec<String>), FieldError> {
    let mut values = BTreeMap::new();
    let mut unknown = Vec::new();

    for (key, value) in raw {
        match schema.field(key) {
            Some(spec) => {
                let typed = spec.field_type.coerce(value).ok_or_else(|| FieldError {
                    field: key.clone(),
                    expected: spec.field_type.expected(),
                })?;
                values.insert(spec.name, typed);
            }
            None => unknown.push(key.clone()),
        }
    }

    Ok((FileDefaults { values }, unknown))
}

/// Merge `overrides` over `defaults` over the schema baseline.
pub fn merge(
    schema: &Schema,
    defaults: &FileDefaults,
    overrides: &BTreeMap<String, DocValue>,
) -> Result<MergeOutcome, FieldError> {
    let mut entries = Vec::with_capacity(schema.fields.len());

    for spec in schema.fields {
        let value = match overrides.get(spec.name) {
            Some(raw) => spec.field_type.coerce(raw).ok_or_else(|| FieldError {
                field: spec.name.to_string(),
                expected: spec.field_type.expected(),
            })?,
            None => match defaults.get(spec.name) {
                Some(value) => value.clone(),
                None => spec.baseline.to_value(),
            },
        };
        entries.push((spec.name, value));
    }

    let unknown_fields = overrides
        .keys()
        .filter(|key| !schema.recognizes(key))
        .cloned()
        .collect();

    Ok(MergeOutcome {
        config: EffectiveConfig::from_entries(entries),
        unknown_fields,
    })
}
