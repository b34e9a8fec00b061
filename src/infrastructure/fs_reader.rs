//! File system DefinitionReader implementation

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use tracing::{debug, info, warn};

use crate::domain::entities::DefinitionSource;
use crate::domain::ports::{DefinitionReader, SourceRead, SourceReadError};
use crate::domain::value_objects::{CompileWarning, DocValue};

/// Reads YAML definition files from disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsDefinitionReader;

impl FsDefinitionReader {
    pub fn new() -> Self {
        Self
    }
}

impl DefinitionReader for FsDefinitionReader {
    fn read_file(&self, path: &Path) -> Result<SourceRead, SourceReadError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!(path = %path.display(), "definition file not found, no objects contributed");
                return Ok(SourceRead::missing(path));
            }
            Err(e) => {
                return Err(SourceReadError::Unreadable {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })
            }
        };

        let document = parse_document(&content, path)?;
        let entries = document.as_mapping().map_or(0, |m| m.len());
        info!(path = %path.display(), entries, "loaded definition file");

        Ok(SourceRead {
            sources: vec![DefinitionSource::new(path, document)],
            warnings: Vec::new(),
        })
    }

    fn read_tree(&self, root: &Path, file_name: &str) -> Result<SourceRead, SourceReadError> {
        if !root.exists() {
            warn!(root = %root.display(), "definition root not found, no objects contributed");
            return Ok(SourceRead::missing(root));
        }

        let paths = discover(root, file_name)?;
        if paths.is_empty() {
            warn!(root = %root.display(), file_name, "no definition files found");
            return Ok(SourceRead {
                sources: Vec::new(),
                warnings: vec![CompileWarning::NoDefinitionFiles {
                    root: root.to_path_buf(),
                    file_name: file_name.to_string(),
                }],
            });
        }
        debug!(root = %root.display(), files = paths.len(), "discovered definition files");

        let mut read = SourceRead::default();
        for path in paths {
            let file = self.read_file(&path)?;
            read.sources.extend(file.sources);
            read.warnings.extend(file.warnings);
        }
        Ok(read)
    }
}

/// Every file named `file_name` under `root`, in lexicographic path order.
///
/// Ignore files and hidden-entry filtering are disabled: the convention name
/// alone decides what is a definition file.
pub fn discover(root: &Path, file_name: &str) -> Result<Vec<PathBuf>, SourceReadError> {
    let mut paths = Vec::new();

    for entry in WalkBuilder::new(root).standard_filters(false).build() {
        let entry = entry.map_err(|e| SourceReadError::Walk {
            root: root.to_path_buf(),
            message: e.to_string(),
        })?;
        let is_file = entry.file_type().is_some_and(|t| t.is_file());
        if is_file && entry.file_name() == file_name {
            paths.push(entry.into_path());
        }
    }

    paths.sort();
    Ok(paths)
}

/// Deserialize a definition file into a document.
///
/// Blank, comment-only and `null` files read as an empty mapping. Merge keys
/// (`<<: *anchor`) are resolved before conversion.
pub fn parse_document(content: &str, path: &Path) -> Result<DocValue, SourceReadError> {
    let blank = content.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#')
    });
    if blank {
        return Ok(DocValue::empty_document());
    }

    let invalid = |e: serde_yaml_ng::Error| SourceReadError::InvalidYaml {
        path: path.to_path_buf(),
        message: format_yaml_error(&e),
    };
    let mut value: serde_yaml_ng::Value = serde_yaml_ng::from_str(content).map_err(invalid)?;
    value.apply_merge().map_err(invalid)?;

    Ok(match DocValue::from(value) {
        DocValue::Null => DocValue::empty_document(),
        document => document,
    })
}

fn format_yaml_error(err: &serde_yaml_ng::Error) -> String {
    match err.location() {
        Some(loc) => format!("line {}, column {}: {}", loc.line(), loc.column(), err),
        None => err.to_string(),
    }
}
