//! DefinitionReader port
//!
//! Locates definition files and turns them into documents.

use std::path::{Path, PathBuf};

use crate::domain::entities::DefinitionSource;
use crate::domain::value_objects::CompileWarning;
use crate::error::StackdefError;

pub trait DefinitionReader {
    /// Read one well-known definition file.
    ///
    /// A missing file yields an empty source and a `MissingSource` warning.
    fn read_file(&self, path: &Path) -> Result<SourceRead, SourceReadError>;

    /// Read every file called `file_name` below `root`, sorted by path.
    ///
    /// A missing root yields no sources and a `MissingSource` warning; a root
    /// without any matching file yields a `NoDefinitionFiles` warning.
    fn read_tree(&self, root: &Path, file_name: &str) -> Result<SourceRead, SourceReadError>;
}

/// Sources in discovery order plus the warnings raised finding them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceRead {
    pub sources: Vec<DefinitionSource>,
    pub warnings: Vec<CompileWarning>,
}

impl SourceRead {
    pub fn missing(path: impl Into<PathBuf>) -> Self {
        Self {
            sources: Vec::new(),
            warnings: vec![CompileWarning::MissingSource { path: path.into() }],
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SourceReadError {
    #[error("cannot read {path}: {message}")]
    Unreadable { path: PathBuf, message: String },

    #[error("invalid YAML in {path}: {message}")]
    InvalidYaml { path: PathBuf, message: String },

    #[error("cannot walk {root}: {message}")]
    Walk { root: PathBuf, message: String },
}

impl From<SourceReadError> for StackdefError {
    fn from(err: SourceReadError) -> Self {
        match err {
            SourceReadError::Unreadable { path, message }
            | SourceReadError::InvalidYaml { path, message } => {
                StackdefError::UnreadableSource { path, message }
            }
            SourceReadError::Walk { root, message } => StackdefError::UnreadableSource {
                path: root,
                message,
            },
        }
    }
}
