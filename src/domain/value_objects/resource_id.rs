//! Resource Identifier Value Object
//!
//! The name the provisioning engine uses to address an object across runs.
//! Derived deterministically from the external name; two external names that
//! sanitize to the same identifier are a collision the compiler must report.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Character every disallowed character is replaced with.
pub const SAFE_SEPARATOR: char = '-';

/// How a kind wraps a sanitized name into an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentifierScheme {
    /// Segment placed between the namespace and the sanitized name
    pub infix: Option<&'static str>,
    /// Segment appended after the sanitized name
    pub suffix: Option<&'static str>,
}

impl IdentifierScheme {
    pub const fn new(infix: Option<&'static str>, suffix: Option<&'static str>) -> Self {
        Self { infix, suffix }
    }
}

/// Sanitized, namespaced resource identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(String);

impl ResourceId {
    /// Build the identifier for `external_name` under `namespace`.
    pub fn derive(namespace: &str, external_name: &str, scheme: IdentifierScheme) -> Self {
        let mut id = String::with_capacity(namespace.len() + external_name.len() + 12);
        id.push_str(namespace);
        if let Some(infix) = scheme.infix {
            id.push(SAFE_SEPARATOR);
            id.push_str(infix);
        }
        id.push(SAFE_SEPARATOR);
        id.push_str(&sanitize(external_name));
        if let Some(suffix) = scheme.suffix {
            id.push(SAFE_SEPARATOR);
            id.push_str(suffix);
        }
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Replace every character outside `[A-Za-z0-9-]` with [`SAFE_SEPARATOR`].
///
/// Dots and underscores are the common cases (`orders.v1`, `dead_letter`).
/// The mapping is one character to one character, so character counts are preserved.
pub fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == SAFE_SEPARATOR {
                c
            } else {
                SAFE_SEPARATOR
            }
        })
        .collect()
}
