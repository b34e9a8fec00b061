//! Combinatorial expander
//!
//! Turns a "dimension × dimension" shorthand block into one raw definition
//! per combination:
//!
//! ```yaml
//! transport_node_topics:
//!   template: "{stack}-{transport}-responses-{node}"
//!   transports: [http, grpc]
//!   nodes: ["1", "2"]
//!   overrides:          # optional, applied to every combination
//!     partitions: 3
//! ```
//!
//! Combinations are produced row-major: every value of the first dimension
//! in declared order, and for each of them every value of the second. The
//! environment placeholder in the template is left for naming to substitute.

use std::collections::BTreeMap;

use crate::domain::entities::{Origin, RawDefinition};
use crate::domain::kind::{CombinatorialLayout, DimensionLayout};
use crate::domain::value_objects::DocValue;

/// Key of the optional per-block overrides mapping.
pub const OVERRIDES_KEY: &str = "overrides";
pub const TEMPLATE_KEY: &str = "template";

/// A validated combinatorial block
#[derive(Debug, Clone, PartialEq)]
pub struct CombinatorialBlock {
    pub template: String,
    pub placeholder_a: &'static str,
    pub values_a: Vec<String>,
    pub placeholder_b: &'static str,
    pub values_b: Vec<String>,
    pub overrides: BTreeMap<String, DocValue>,
}

impl CombinatorialBlock {
    /// Check the shape of `block` against `layout`.
    ///
    /// The error string describes the first problem found.
    pub fn parse(layout: &CombinatorialLayout, block: &DocValue) -> Result<Self, String> {
        let map = block.as_mapping().ok_or_else(|| {
            format!(
                "'{}' must be a mapping, found {}",
                layout.key,
                block.kind_name()
            )
        })?;

        let template = match map.get(TEMPLATE_KEY) {
            Some(DocValue::String(s)) => s.clone(),
            Some(other) => {
                return Err(format!(
                    "'{}.{}' must be a string, found {}",
                    layout.key,
                    TEMPLATE_KEY,
                    other.kind_name()
                ))
            }
            None => return Err(format!("'{}' is missing '{}'", layout.key, TEMPLATE_KEY)),
        };

        for dimension in [&layout.dimension_a, &layout.dimension_b] {
            if !template.contains(dimension.placeholder) {
                return Err(format!(
                    "template '{}' does not use placeholder '{}'",
                    template, dimension.placeholder
                ));
            }
        }

        let values_a = dimension_values(layout.key, &layout.dimension_a, map)?;
        let values_b = dimension_values(layout.key, &layout.dimension_b, map)?;

        let overrides = match map.get(OVERRIDES_KEY) {
            None | Some(DocValue::Null) => BTreeMap::new(),
            Some(DocValue::Mapping(m)) => m.clone(),
            Some(other) => {
                return Err(format!(
                    "'{}.{}' must be a mapping, found {}",
                    layout.key,
                    OVERRIDES_KEY,
                    other.kind_name()
                ))
            }
        };

        Ok(Self {
            template,
            placeholder_a: layout.dimension_a.placeholder,
            values_a,
            placeholder_b: layout.dimension_b.placeholder,
            values_b,
            overrides,
        })
    }

    /// Number of definitions [`expand`] will produce.
    pub fn combinations(&self) -> usize {
        self.values_a.len() * self.values_b.len()
    }
}

fn dimension_values(
    block_key: &str,
    dimension: &DimensionLayout,
    map: &BTreeMap<String, DocValue>,
) -> Result<Vec<String>, String> {
    let items = match map.get(dimension.key) {
        Some(DocValue::Sequence(items)) => items,
        Some(other) => {
            return Err(format!(
                "'{}.{}' must be a list, found {}",
                block_key,
                dimension.key,
                other.kind_name()
            ))
        }
        None => return Err(format!("'{}' is missing '{}'", block_key, dimension.key)),
    };

    items
        .iter()
        .map(|item| {
            item.scalar_text().ok_or_else(|| {
                format!(
                    "'{}.{}' entries must be strings, found {}",
                    block_key,
                    dimension.key,
                    item.kind_name()
                )
            })
        })
        .collect()
}

/// Expand `block` into raw definitions.
///
/// Origin indexes count up from `start.index` so expanded definitions keep
/// counting after the flat ones of the same source.
pub fn expand(block: &CombinatorialBlock, start: &Origin) -> Vec<RawDefinition> {
    let mut definitions = Vec::with_capacity(block.combinations());
    let mut index = start.index;

    for a in &block.values_a {
        for b in &block.values_b {
            let name = fill(&block.template, (block.placeholder_a, a), (block.placeholder_b, b));
            definitions.push(
                RawDefinition::new(name, Origin::new(start.source.clone(), index))
                    .with_overrides(block.overrides.clone()),
            );
            index += 1;
        }
    }

    definitions
}

/// Substitute both placeholders in one pass; a value that happens to contain
/// the other placeholder is not expanded again.
fn fill(template: &str, a: (&str, &str), b: (&str, &str)) -> String {
    template
        .split(a.0)
        .map(|part| part.replace(b.0, b.1))
        .collect::<Vec<_>>()
        .join(a.1)
}
