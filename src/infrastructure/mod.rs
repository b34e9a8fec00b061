//! Infrastructure Layer
//!
//! Concrete implementations of domain ports, plus plan file output.

pub mod fs_reader;
pub mod plan_writer;

pub use fs_reader::FsDefinitionReader;
pub use plan_writer::{write_atomic, write_plan};
