//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::services::aggregator::{
    DEFAULT_MANAGED_BY, DEFAULT_NAMESPACE, DEFAULT_PLATFORM,
};
use crate::domain::services::CompileContext;
use crate::domain::value_objects::{ConfigWarning, Environment};
use crate::error::StackdefResult;

use super::loader;

/// Deployment stage configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EnvironmentConfig {
    /// Stage name; the CLI flag or `STACKDEF_ENV` take precedence
    #[serde(default)]
    pub name: Option<String>,
}

/// Resource identifier configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamingConfig {
    #[serde(default = "default_namespace")]
    pub namespace: String,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
        }
    }
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

/// Provenance tag values
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagsConfig {
    #[serde(default = "default_platform")]
    pub platform: String,

    #[serde(default = "default_managed_by")]
    pub managed_by: String,
}

impl Default for TagsConfig {
    fn default() -> Self {
        Self {
            platform: default_platform(),
            managed_by: default_managed_by(),
        }
    }
}

fn default_platform() -> String {
    DEFAULT_PLATFORM.to_string()
}

fn default_managed_by() -> String {
    DEFAULT_MANAGED_BY.to_string()
}

/// Definition file locations, relative to the project root
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourcesConfig {
    /// Searched recursively for `topic_file_name`
    #[serde(default = "default_integration_topics_root")]
    pub integration_topics_root: PathBuf,

    #[serde(default = "default_topic_file_name")]
    pub topic_file_name: String,

    #[serde(default = "default_data_plane_topics")]
    pub data_plane_topics: PathBuf,

    #[serde(default = "default_dns_records")]
    pub dns_records: PathBuf,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            integration_topics_root: default_integration_topics_root(),
            topic_file_name: default_topic_file_name(),
            data_plane_topics: default_data_plane_topics(),
            dns_records: default_dns_records(),
        }
    }
}

fn default_integration_topics_root() -> PathBuf {
    PathBuf::from("integrations")
}

fn default_topic_file_name() -> String {
    "kafka-topics.yaml".to_string()
}

fn default_data_plane_topics() -> PathBuf {
    PathBuf::from("data-plane/kafka-topics.yaml")
}

fn default_dns_records() -> PathBuf {
    PathBuf::from("dns-records.yaml")
}

/// Main configuration structure (`stackdef.toml`)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub environment: EnvironmentConfig,

    #[serde(default)]
    pub naming: NamingConfig,

    #[serde(default)]
    pub tags: TagsConfig,

    #[serde(default)]
    pub sources: SourcesConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> StackdefResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> StackdefResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load `stackdef.toml` from the project root, or defaults when absent.
    pub fn load_for_project(project_root: &Path) -> StackdefResult<(Self, Vec<ConfigWarning>)> {
        loader::load_for_project(project_root)
    }

    /// Apply environment variable overrides (STACKDEF_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self, |key| std::env::var(key).ok())
    }

    /// Build the compile context for `environment`.
    pub fn compile_context(&self, environment: Environment) -> CompileContext {
        CompileContext::new(environment)
            .with_namespace(self.naming.namespace.clone())
            .with_platform(self.tags.platform.clone())
            .with_managed_by(self.tags.managed_by.clone())
    }
}
