//! Domain Layer
//!
//! The compiler proper: pure business logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Definition sources and compiled objects
//! - `value_objects/` - Immutable value types (DocValue, Environment, ResourceId)
//! - `schema` - Recognized fields and their baseline defaults
//! - `kind` - Per-kind document layout and naming
//! - `services/` - Merge, expansion, naming, aggregation
//! - `ports/` - Interface definitions for infrastructure

pub mod entities;
pub mod kind;
pub mod ports;
pub mod schema;
pub mod services;
pub mod value_objects;
