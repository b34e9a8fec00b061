//! Property tests for combinatorial expansion.

use std::collections::BTreeMap;

use proptest::prelude::*;

use stackdef::domain::services::{expand, CombinatorialBlock};
use stackdef::Origin;

fn dimension_value() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9]{1,8}").unwrap()
}

fn block(values_a: Vec<String>, values_b: Vec<String>) -> CombinatorialBlock {
    CombinatorialBlock {
        template: "{stack}-{transport}-{node}".to_string(),
        placeholder_a: "{transport}",
        values_a,
        placeholder_b: "{node}",
        values_b,
        overrides: BTreeMap::new(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: expansion yields |A| x |B| definitions, A outer and B inner.
    #[test]
    fn property_expansion_is_row_major(
        values_a in proptest::collection::vec(dimension_value(), 0..5),
        values_b in proptest::collection::vec(dimension_value(), 0..5),
    ) {
        let block = block(values_a.clone(), values_b.clone());

        let definitions = expand(&block, &Origin::new("data-plane/kafka-topics.yaml", 0));

        let expected: Vec<String> = values_a
            .iter()
            .flat_map(|a| values_b.iter().map(move |b| format!("{{stack}}-{}-{}", a, b)))
            .collect();
        let names: Vec<String> = definitions.iter().map(|d| d.name.clone()).collect();
        prop_assert_eq!(names, expected);
    }

    /// PROPERTY: expanded definitions take consecutive indexes from the start origin.
    #[test]
    fn property_expansion_indexes_are_consecutive(
        start in 0usize..100,
        values_a in proptest::collection::vec(dimension_value(), 1..4),
        values_b in proptest::collection::vec(dimension_value(), 1..4),
    ) {
        let block = block(values_a, values_b);

        let definitions = expand(&block, &Origin::new("data-plane/kafka-topics.yaml", start));

        for (offset, definition) in definitions.iter().enumerate() {
            prop_assert_eq!(definition.origin.index, start + offset);
        }
    }
}
