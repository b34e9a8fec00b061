//! Definition entities
//!
//! A `DefinitionSource` is one deserialized definition file. A
//! `RawDefinition` is one object entry taken out of it (or produced by
//! combinatorial expansion) whose shape has been checked but whose fields
//! have not been merged yet.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::value_objects::DocValue;

/// One definition file and its document.
#[derive(Debug, Clone, PartialEq)]
pub struct DefinitionSource {
    path: PathBuf,
    document: DocValue,
}

impl DefinitionSource {
    pub fn new(path: impl Into<PathBuf>, document: DocValue) -> Self {
        Self {
            path: path.into(),
            document,
        }
    }

    /// A source that contributes nothing.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self::new(path, DocValue::empty_document())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn document(&self) -> &DocValue {
        &self.document
    }
}

/// Where a definition came from: source path and position within it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Origin {
    pub source: PathBuf,
    pub index: usize,
}

impl Origin {
    pub fn new(source: impl Into<PathBuf>, index: usize) -> Self {
        Self {
            source: source.into(),
            index,
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.source.display(), self.index)
    }
}

/// A shape-checked object definition awaiting merge and naming.
#[derive(Debug, Clone, PartialEq)]
pub struct RawDefinition {
    /// Name before environment substitution
    pub name: String,
    /// Every field of the entry except the identity field
    pub overrides: BTreeMap<String, DocValue>,
    pub origin: Origin,
}

impl RawDefinition {
    pub fn new(name: impl Into<String>, origin: Origin) -> Self {
        Self {
            name: name.into(),
            overrides: BTreeMap::new(),
            origin,
        }
    }

    pub fn with_overrides(mut self, overrides: BTreeMap<String, DocValue>) -> Self {
        self.overrides = overrides;
        self
    }
}
