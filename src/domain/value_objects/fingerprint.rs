//! Plan Fingerprint Value Object
//!
//! A SHA-256 digest of a compiled plan, used to compare two compilations of
//! the same inputs without diffing them object by object.

use std::fmt;

use sha2::{Digest, Sha256};

/// `sha256:`-prefixed digest of a compiled plan
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlanFingerprint(String);

impl PlanFingerprint {
    pub const PREFIX: &'static str = "sha256:";

    /// Digest arbitrary bytes (the canonical JSON of a plan).
    pub fn of_bytes(bytes: &[u8]) -> Self {
        let digest = Sha256::digest(bytes);
        Self(format!("{}{:x}", Self::PREFIX, digest))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Hex part without the prefix
    pub fn hex(&self) -> &str {
        self.0.strip_prefix(Self::PREFIX).unwrap_or(&self.0)
    }
}

impl fmt::Display for PlanFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
