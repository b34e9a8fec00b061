//! Name finalization
//!
//! Substitutes the environment into a raw name and derives the resource
//! identifier from the result.

use crate::domain::value_objects::{
    Environment, IdentifierScheme, ResourceId, ENVIRONMENT_PLACEHOLDER,
};

/// Final names of one object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalName {
    pub external_name: String,
    pub resource_identifier: ResourceId,
}

/// Replace every `{stack}` in `raw_name` with the environment name.
///
/// Plain text replacement: no escaping, and the inserted value is not
/// scanned again.
pub fn substitute_environment(raw_name: &str, environment: &Environment) -> String {
    raw_name.replace(ENVIRONMENT_PLACEHOLDER, environment.as_str())
}

pub fn finalize(
    raw_name: &str,
    environment: &Environment,
    namespace: &str,
    scheme: IdentifierScheme,
) -> FinalName {
    let external_name = substitute_environment(raw_name, environment);
    let resource_identifier = ResourceId::derive(namespace, &external_name, scheme);
    FinalName {
        external_name,
        resource_identifier,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOPIC: IdentifierScheme = IdentifierScheme::new(None, Some("topic"));

    #[test]
    fn substitutes_environment() {
        let name = finalize("svc-{stack}-topic", &Environment::new("prod"), "clustera", TOPIC);
        assert_eq!(name.external_name, "svc-prod-topic");
        assert_eq!(name.resource_identifier.as_str(), "clustera-svc-prod-topic-topic");
    }

    #[test]
    fn substitutes_every_occurrence() {
        let name = substitute_environment("{stack}.events.{stack}", &Environment::new("dev"));
        assert_eq!(name, "dev.events.dev");
    }

    #[test]
    fn name_without_placeholder_is_unchanged() {
        let name = substitute_environment("shared.audit", &Environment::new("dev"));
        assert_eq!(name, "shared.audit");
    }

    #[test]
    fn inserted_value_is_not_expanded_again() {
        let name = substitute_environment("{stack}-x", &Environment::new("{stack}"));
        assert_eq!(name, "{stack}-x");
    }

    #[test]
    fn finalize_is_deterministic() {
        let env = Environment::new("staging");
        let first = finalize("{stack}.orders_v1", &env, "clustera", TOPIC);
        let second = finalize("{stack}.orders_v1", &env, "clustera", TOPIC);
        assert_eq!(first, second);
        assert_eq!(first.resource_identifier.as_str(), "clustera-staging-orders-v1-topic");
    }
}
