//! DNS record fan-out
//!
//! A DNS definition describes one cluster node: its identity (`name`), the
//! domain it answers for and the IPs it answers with. The provider takes one
//! A record per IP, so a node with N IPs becomes N records, all published
//! under the node's domain and addressed as
//! `{namespace}-dns-{environment}-{node}-{ip index}`.

use crate::domain::schema::{EffectiveConfig, FieldValue};
use crate::domain::value_objects::{Environment, IdentifierScheme, ResourceId};

use super::naming::substitute_environment;

/// Domain the records are published under; empty means the node name.
pub const DOMAIN_FIELD: &str = "domain";
/// IPs of the node, one record each
pub const IPS_FIELD: &str = "ips";
/// Single IP a compiled record points at
pub const CONTENT_FIELD: &str = "content";

/// One provider-side record of a node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeRecord {
    /// Domain the record is published under, environment substituted
    pub domain: String,
    pub config: EffectiveConfig,
    pub resource_identifier: ResourceId,
}

/// Split a merged node configuration into one record per IP.
///
/// `node` must already have the environment substituted. The record config
/// keeps every field of `config` except the domain and the IP list, and adds
/// the record's own IP as `content`.
pub fn fan_out(
    node: &str,
    config: &EffectiveConfig,
    environment: &Environment,
    namespace: &str,
    scheme: IdentifierScheme,
) -> Result<Vec<NodeRecord>, String> {
    let ips = match config.get(IPS_FIELD).and_then(FieldValue::as_list) {
        Some(ips) if !ips.is_empty() => ips,
        _ => return Err(format!("node '{}' has no {}", node, IPS_FIELD)),
    };

    let domain = match config.get(DOMAIN_FIELD).and_then(FieldValue::as_str) {
        Some(domain) if !domain.trim().is_empty() => {
            substitute_environment(domain, environment)
        }
        _ => node.to_string(),
    };

    let shared: Vec<(&'static str, FieldValue)> = config
        .iter()
        .filter(|(name, _)| *name != DOMAIN_FIELD && *name != IPS_FIELD)
        .map(|(name, value)| (name, value.clone()))
        .collect();

    let records = ips
        .iter()
        .enumerate()
        .map(|(index, ip)| {
            let mut entries = shared.clone();
            entries.push((CONTENT_FIELD, FieldValue::Text(ip.clone())));
            let key = format!("{}-{}-{}", environment, node, index);
            NodeRecord {
                domain: domain.clone(),
                config: EffectiveConfig::from_entries(entries),
                resource_identifier: ResourceId::derive(namespace, &key, scheme),
            }
        })
        .collect();

    Ok(records)
}
