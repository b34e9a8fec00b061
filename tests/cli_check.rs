//! CLI tests for `stackdef check`

mod common;

use common::fixtures::FULL_PROJECT;
use common::TestEnv;

fn fingerprint(stdout: &str) -> String {
    stdout
        .lines()
        .find_map(|line| line.trim().strip_prefix("fingerprint:"))
        .map(|rest| rest.trim().to_string())
        .expect("fingerprint line")
}

#[test]
fn test_check_reports_counts_per_kind() {
    let env = TestEnv::new();
    for (path, content) in FULL_PROJECT {
        env.write(path, content);
    }

    let result = env.run(&["check", "--env", "dev"]);

    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result.stdout.contains("integration-topic: 3"));
    assert!(result.stdout.contains("data-plane-topic:  5"));
    assert!(result.stdout.contains("dns-record:        2"));
    assert!(result.stdout.contains("total:             10"));
    assert!(result.stdout.contains("protect:           false"));
    assert!(!result.stdout.contains("Warnings"));
}

#[test]
fn test_check_fingerprint_is_deterministic() {
    let env = TestEnv::new();
    for (path, content) in FULL_PROJECT {
        env.write(path, content);
    }

    let first = env.run(&["check", "--env", "dev"]);
    let second = env.run(&["check", "--env", "dev"]);
    let prod = env.run(&["check", "--env", "prod"]);

    let first = fingerprint(&first.stdout);
    assert!(first.starts_with("sha256:"));
    assert_eq!(first, fingerprint(&second.stdout));
    assert_ne!(first, fingerprint(&prod.stdout));
}

#[test]
fn test_check_lists_missing_sources_as_warnings() {
    let env = TestEnv::new();

    let result = env.run(&["check", "--env", "dev"]);

    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result.stdout.contains("total:             0"));
    assert!(result.stdout.contains("Warnings (3):"));
    assert!(result.stdout.contains("definition source not found"));
}

#[test]
fn test_check_reports_unknown_fields() {
    let env = TestEnv::new();
    env.write(
        "data-plane/kafka-topics.yaml",
        "defaults:\n  colour: red\nshared_topics:\n  - name: audit\n    flavour: mint\n",
    );

    let result = env.run(&["check", "--env", "dev"]);

    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result.stdout.contains("ignoring unknown field 'colour' in defaults"));
    assert!(result.stdout.contains("ignoring unknown field 'flavour' in definition #0"));
}
