//! Object kinds
//!
//! Each kind fixes its schema, the document keys it reads, how its resource
//! identifiers are shaped, and the plane tag its objects carry.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::schema::{
    Schema, DATA_PLANE_TOPIC_SCHEMA, DNS_RECORD_SCHEMA, INTEGRATION_TOPIC_SCHEMA,
};
use super::value_objects::IdentifierScheme;

/// Kind of infrastructure object a definition describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ObjectKind {
    /// Kafka topics owned by integrations, one file per integration
    IntegrationTopic,
    /// Kafka topics of the data plane, single file
    DataPlaneTopic,
    /// DNS records for cluster nodes, single file
    DnsRecord,
}

/// One dimension of a combinatorial block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimensionLayout {
    /// Document key holding the dimension values
    pub key: &'static str,
    /// Template placeholder the values replace
    pub placeholder: &'static str,
}

/// Where a combinatorial block lives and what it is made of
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombinatorialLayout {
    pub key: &'static str,
    pub dimension_a: DimensionLayout,
    pub dimension_b: DimensionLayout,
}

/// Top-level keys a definition document of one kind may contain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentLayout {
    /// Flat object lists, read in this order
    pub object_keys: &'static [&'static str],
    pub combinatorial: Option<CombinatorialLayout>,
}

/// Key of the file-level defaults block, shared by every kind.
pub const DEFAULTS_KEY: &str = "defaults";

impl ObjectKind {
    /// Kinds in compilation order.
    pub const ALL: [ObjectKind; 3] = [
        ObjectKind::IntegrationTopic,
        ObjectKind::DataPlaneTopic,
        ObjectKind::DnsRecord,
    ];

    pub fn schema(&self) -> &'static Schema {
        match self {
            ObjectKind::IntegrationTopic => &INTEGRATION_TOPIC_SCHEMA,
            ObjectKind::DataPlaneTopic => &DATA_PLANE_TOPIC_SCHEMA,
            ObjectKind::DnsRecord => &DNS_RECORD_SCHEMA,
        }
    }

    pub fn layout(&self) -> DocumentLayout {
        match self {
            ObjectKind::IntegrationTopic => DocumentLayout {
                object_keys: &["topics"],
                combinatorial: None,
            },
            ObjectKind::DataPlaneTopic => DocumentLayout {
                object_keys: &["topics", "shared_topics"],
                combinatorial: Some(CombinatorialLayout {
                    key: "transport_node_topics",
                    dimension_a: DimensionLayout {
                        key: "transports",
                        placeholder: "{transport}",
                    },
                    dimension_b: DimensionLayout {
                        key: "nodes",
                        placeholder: "{node}",
                    },
                }),
            },
            ObjectKind::DnsRecord => DocumentLayout {
                object_keys: &["records"],
                combinatorial: None,
            },
        }
    }

    pub fn identifier_scheme(&self) -> IdentifierScheme {
        match self {
            ObjectKind::IntegrationTopic | ObjectKind::DataPlaneTopic => {
                IdentifierScheme::new(None, Some("topic"))
            }
            ObjectKind::DnsRecord => IdentifierScheme::new(Some("dns"), None),
        }
    }

    /// Value of the `plane` tag, if the kind carries one.
    pub fn plane(&self) -> Option<&'static str> {
        match self {
            ObjectKind::IntegrationTopic => None,
            ObjectKind::DataPlaneTopic => Some("data-plane"),
            ObjectKind::DnsRecord => Some("edge"),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectKind::IntegrationTopic => "integration-topic",
            ObjectKind::DataPlaneTopic => "data-plane-topic",
            ObjectKind::DnsRecord => "dns-record",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
