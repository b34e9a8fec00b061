//! Configuration loading

use std::fs;
use std::path::Path;

use crate::error::{StackdefError, StackdefResult};

use super::types::Config;
use super::ConfigWarning;

/// File name of the project configuration.
pub const CONFIG_FILE_NAME: &str = "stackdef.toml";

/// Environment variable overriding `environment.name`
pub const ENV_ENVIRONMENT: &str = "STACKDEF_ENV";
/// Environment variable overriding `naming.namespace`
pub const ENV_NAMESPACE: &str = "STACKDEF_NAMESPACE";

/// Parse `path`, reporting every key the config types do not know about.
///
/// Unknown keys never fail the load; they come back as [`ConfigWarning`]s
/// pointing at the first line that assigns them.
pub fn load_with_warnings(path: &Path) -> StackdefResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut ignored = Vec::new();
    let config: Config =
        serde_ignored::deserialize(toml::de::Deserializer::new(&content), |key_path| {
            ignored.push(key_path.to_string());
        })
        .map_err(|e| StackdefError::Config {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let warnings = ignored
        .iter()
        .map(|key_path| unknown_key_warning(path, &content, key_path))
        .collect();

    Ok((config, warnings))
}

fn unknown_key_warning(file: &Path, content: &str, key_path: &str) -> ConfigWarning {
    let key = key_path.rsplit('.').next().unwrap_or(key_path);
    ConfigWarning {
        key: key.to_string(),
        file: file.to_path_buf(),
        line: key_line(content, key),
        suggestion: suggest_key(key),
    }
}

/// Load `stackdef.toml` from `project_root`; defaults when the file is absent.
pub fn load_for_project(project_root: &Path) -> StackdefResult<(Config, Vec<ConfigWarning>)> {
    let path = project_root.join(CONFIG_FILE_NAME);
    if path.is_file() {
        load_with_warnings(&path)
    } else {
        Ok((Config::default(), Vec::new()))
    }
}

/// Apply environment variable overrides, reading variables through `lookup`.
pub fn with_env_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    let set = |v: &String| !v.trim().is_empty();

    if let Some(name) = lookup(ENV_ENVIRONMENT).filter(set) {
        config.environment.name = Some(name);
    }

    if let Some(namespace) = lookup(ENV_NAMESPACE).filter(set) {
        config.naming.namespace = namespace;
    }

    config
}

/// 1-based line of the first `key = ...` assignment.
fn key_line(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| {
            line.trim_start()
                .strip_prefix(key)
                .is_some_and(|rest| rest.trim_start().starts_with('='))
        })
        .map(|index| index + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "environment",
        "name",
        "naming",
        "namespace",
        "tags",
        "platform",
        "managed_by",
        "sources",
        "integration_topics_root",
        "topic_file_name",
        "data_plane_topics",
        "dns_records",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (*candidate, edit_distance(unknown, candidate)))
        .filter(|(_, distance)| *distance <= 2)
        .min_by_key(|(_, distance)| *distance)
        .map(|(candidate, _)| candidate.to_string())
}

/// Edit distance over chars, keeping a single row of the table.
fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = diagonal + usize::from(ca != *cb);
            diagonal = row[j + 1];
            row[j + 1] = substitution.min(row[j] + 1).min(diagonal + 1);
        }
    }

    row[b.len()]
}
