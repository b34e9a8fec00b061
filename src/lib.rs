//! Stackdef - declarative compiler for infrastructure resource definitions
//!
//! Stackdef reads YAML definitions of Kafka topics and DNS records, layers
//! per-object overrides onto file-level and built-in defaults, expands
//! combinatorial shorthand, and emits a validated, ordered plan of resources
//! for an external provisioning engine.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{CompileOptions, CompileUseCase};
pub use config::{Config, ConfigWarning};
pub use domain::entities::{CompilationResult, CompiledObject, DefinitionSource, Origin};
pub use domain::kind::ObjectKind;
pub use domain::services::{CompileContext, Compiler};
pub use domain::value_objects::{CompileWarning, DocValue, Environment, ResourceId};
pub use error::{StackdefError, StackdefResult};
pub use infrastructure::FsDefinitionReader;
