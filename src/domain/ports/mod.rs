//! Domain Ports
//!
//! Interfaces the domain needs from infrastructure.

pub mod source_reader;

pub use source_reader::{DefinitionReader, SourceRead, SourceReadError};
