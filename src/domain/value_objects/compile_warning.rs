//! Compile warning value object.

use std::fmt;
use std::path::PathBuf;

/// Non-fatal condition observed while compiling definitions.
///
/// Warnings are logged when they occur and also returned with the result so
/// a front end can render them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileWarning {
    /// A definition source (file or discovery root) does not exist
    MissingSource { path: PathBuf },

    /// A discovery root exists but holds no definition file
    NoDefinitionFiles { root: PathBuf, file_name: String },

    /// A field outside the schema was dropped
    UnknownField {
        file: PathBuf,
        /// Definition index, or `None` for the `defaults` block
        index: Option<usize>,
        field: String,
    },
}

impl fmt::Display for CompileWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileWarning::MissingSource { path } => {
                write!(f, "definition source not found: {}", path.display())
            }
            CompileWarning::NoDefinitionFiles { root, file_name } => {
                write!(f, "no {} files found under {}", file_name, root.display())
            }
            CompileWarning::UnknownField {
                file,
                index: Some(index),
                field,
            } => write!(
                f,
                "ignoring unknown field '{}' in definition #{} of {}",
                field,
                index,
                file.display()
            ),
            CompileWarning::UnknownField {
                file,
                index: None,
                field,
            } => write!(
                f,
                "ignoring unknown field '{}' in defaults of {}",
                field,
                file.display()
            ),
        }
    }
}
