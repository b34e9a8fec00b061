//! Configuration module for stackdef
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (STACKDEF_*)
//! 3. Project config (`stackdef.toml` in the project root)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{CONFIG_FILE_NAME, ENV_ENVIRONMENT, ENV_NAMESPACE};
pub use types::{Config, EnvironmentConfig, NamingConfig, SourcesConfig, TagsConfig};
