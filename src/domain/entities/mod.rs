//! Domain Entities
//!
//! Definition sources going in, compiled objects coming out.

mod compiled;
mod definition;

pub use compiled::{CompilationResult, CompiledObject};
pub use definition::{DefinitionSource, Origin, RawDefinition};
