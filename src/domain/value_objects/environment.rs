//! Environment Value Object
//!
//! The deployment stage a compilation targets (`dev`, `staging`, `prod`...).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Placeholder replaced with the environment name in object names.
pub const ENVIRONMENT_PLACEHOLDER: &str = "{stack}";

/// Environment names that mark a production deployment. Matching is exact.
pub const PRODUCTION_ALIASES: &[&str] = &["production", "prod"];

/// Deployment stage identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Environment(String);

impl Environment {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this environment is a production deployment.
    pub fn is_production(&self) -> bool {
        PRODUCTION_ALIASES.contains(&self.0.as_str())
    }

    /// Protection flag attached to every object compiled for this environment.
    pub fn protect(&self) -> bool {
        self.is_production()
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
