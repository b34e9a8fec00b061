//! Compile Use Case
//!
//! Orchestrates one compilation:
//! 1. Read the sources of every object kind, in fixed kind order
//! 2. Compile them into one checked result
//!
//! Reader warnings come first in the returned result, followed by the
//! warnings raised while compiling.

use tracing::info;

use crate::domain::entities::CompilationResult;
use crate::domain::kind::ObjectKind;
use crate::domain::ports::{DefinitionReader, SourceRead};
use crate::domain::services::Compiler;
use crate::error::StackdefResult;

use super::options::{CompileOptions, SourceLocation};

/// Compile use case, parameterized by the definition reader port.
pub struct CompileUseCase<R>
where
    R: DefinitionReader,
{
    reader: R,
}

impl<R> CompileUseCase<R>
where
    R: DefinitionReader,
{
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    pub fn reader(&self) -> &R {
        &self.reader
    }

    /// Execute the compile use case
    ///
    /// Any fatal problem aborts the run; there is no partial result.
    pub fn execute(&self, options: &CompileOptions) -> StackdefResult<CompilationResult> {
        let mut warnings = Vec::new();
        let mut inputs = Vec::with_capacity(ObjectKind::ALL.len());

        for kind in ObjectKind::ALL {
            let read = self.read_sources(kind, options)?;
            warnings.extend(read.warnings);
            inputs.push((kind, read.sources));
        }

        let mut result = Compiler::new(options.context.clone()).compile(&inputs)?;
        warnings.append(&mut result.warnings);
        result.warnings = warnings;

        info!(
            environment = %options.context.environment,
            objects = result.len(),
            warnings = result.warnings.len(),
            "compilation finished"
        );
        Ok(result)
    }

    fn read_sources(&self, kind: ObjectKind, options: &CompileOptions) -> StackdefResult<SourceRead> {
        let read = match options.location(kind) {
            SourceLocation::File(path) => self.reader.read_file(&path)?,
            SourceLocation::Tree { root, file_name } => self.reader.read_tree(&root, file_name)?,
        };
        Ok(read)
    }
}
