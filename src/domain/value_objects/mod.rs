//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod compile_warning;
mod config_warning;
mod document;
mod environment;
mod fingerprint;
mod resource_id;

pub use compile_warning::CompileWarning;
pub use config_warning::ConfigWarning;
pub use document::DocValue;
pub use environment::{Environment, ENVIRONMENT_PLACEHOLDER, PRODUCTION_ALIASES};
pub use fingerprint::PlanFingerprint;
pub use resource_id::{sanitize, IdentifierScheme, ResourceId, SAFE_SEPARATOR};
