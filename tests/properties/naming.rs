//! Property tests for environment substitution and resource identifiers.

use proptest::prelude::*;

use stackdef::domain::services::finalize;
use stackdef::domain::value_objects::{sanitize, IdentifierScheme};
use stackdef::Environment;

const TOPIC: IdentifierScheme = IdentifierScheme::new(None, Some("topic"));

fn environment_name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("prod".to_string()),
        Just("production".to_string()),
        Just("Production".to_string()),
        proptest::string::string_regex("[a-z][a-z0-9-]{0,10}").unwrap(),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: sanitized names only contain `[A-Za-z0-9-]` and keep their length.
    #[test]
    fn property_sanitize_output_is_safe(name in "\\PC{0,24}") {
        let sanitized = sanitize(&name);

        prop_assert!(sanitized.chars().all(|c| c.is_ascii_alphanumeric() || c == '-'));
        prop_assert_eq!(sanitized.chars().count(), name.chars().count());
        prop_assert_eq!(sanitize(&sanitized), sanitized.clone());
    }

    /// PROPERTY: finalizing is deterministic and leaves no `{stack}` behind.
    #[test]
    fn property_finalize_is_deterministic(
        prefix in "[a-z.]{0,8}",
        suffix in "[a-z_]{0,8}",
        env in environment_name(),
    ) {
        let raw = format!("{}{{stack}}{}", prefix, suffix);
        let environment = Environment::new(env.clone());

        let first = finalize(&raw, &environment, "clustera", TOPIC);
        let second = finalize(&raw, &environment, "clustera", TOPIC);

        prop_assert_eq!(&first, &second);
        prop_assert!(!first.external_name.contains("{stack}"), "external_name still contains {{stack}}: {}", first.external_name);
        prop_assert_eq!(&first.external_name, &format!("{}{}{}", prefix, env, suffix));
        let expected_id = format!("clustera-{}-topic", sanitize(&first.external_name));
        prop_assert_eq!(first.resource_identifier.as_str(), expected_id.as_str());
    }

    /// PROPERTY: protection is on exactly for `prod` and `production`.
    #[test]
    fn property_protect_only_for_production(env in environment_name()) {
        let expected = env == "prod" || env == "production";
        prop_assert_eq!(Environment::new(env).protect(), expected);
    }
}
