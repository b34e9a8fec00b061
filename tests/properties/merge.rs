//! Property tests for default layering.

use std::collections::BTreeMap;

use proptest::prelude::*;

use stackdef::domain::schema::{FieldValue, DATA_PLANE_TOPIC_SCHEMA};
use stackdef::domain::services::{merge, resolve_defaults};
use stackdef::DocValue;

const INTEGER_FIELDS: &[&str] = &["partitions", "replication"];

fn layer() -> impl Strategy<Value = BTreeMap<String, DocValue>> {
    proptest::collection::btree_map(
        proptest::sample::select(INTEGER_FIELDS).prop_map(str::to_string),
        (1i64..1000).prop_map(DocValue::Integer),
        0..=2,
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: override beats file default beats baseline, for every field.
    #[test]
    fn property_merge_precedence(defaults in layer(), overrides in layer()) {
        let (file_defaults, unknown) =
            resolve_defaults(&DATA_PLANE_TOPIC_SCHEMA, &defaults).unwrap();
        prop_assert!(unknown.is_empty());

        let outcome = merge(&DATA_PLANE_TOPIC_SCHEMA, &file_defaults, &overrides).unwrap();

        prop_assert_eq!(outcome.config.len(), DATA_PLANE_TOPIC_SCHEMA.fields.len());
        for field in INTEGER_FIELDS {
            let expected = overrides
                .get(*field)
                .or_else(|| defaults.get(*field))
                .and_then(DocValue::as_i64)
                .map(FieldValue::Integer)
                .unwrap_or_else(|| {
                    DATA_PLANE_TOPIC_SCHEMA.field(field).unwrap().baseline.to_value()
                });
            prop_assert_eq!(outcome.config.get(field), Some(&expected));
        }
    }

    /// PROPERTY: unknown fields are reported and never reach the config.
    #[test]
    fn property_unknown_fields_are_dropped(key in "x_[a-z]{1,8}") {
        let mut overrides = BTreeMap::new();
        overrides.insert(key.clone(), DocValue::String("v".to_string()));

        let outcome = merge(&DATA_PLANE_TOPIC_SCHEMA, &Default::default(), &overrides).unwrap();

        prop_assert_eq!(outcome.unknown_fields, vec![key.clone()]);
        prop_assert!(outcome.config.get(&key).is_none());
    }
}
