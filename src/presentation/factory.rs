//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::CompileUseCase;
use crate::infrastructure::FsDefinitionReader;

/// Type alias for the concrete CompileUseCase reading from disk
pub type ConcreteCompileUseCase = CompileUseCase<FsDefinitionReader>;

/// Create a compile use case reading definitions from the file system
pub fn create_compile_use_case() -> ConcreteCompileUseCase {
    CompileUseCase::new(FsDefinitionReader::new())
}
