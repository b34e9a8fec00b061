//! Compile Module
//!
//! Reads every definition source of a project and compiles the plan.
//!
//! ## Structure
//!
//! - `options` - Inputs of one run (`CompileOptions`)
//! - `use_case` - Core use case logic (`CompileUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use stackdef::application::compile::{CompileOptions, CompileUseCase};
//!
//! let use_case = CompileUseCase::new(FsDefinitionReader::new());
//! let result = use_case.execute(&CompileOptions::new(root, context))?;
//! ```

mod options;
mod use_case;

pub use options::{CompileOptions, SourceLocation};
pub use use_case::CompileUseCase;

#[cfg(test)]
mod tests;
