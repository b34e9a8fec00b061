//! Compile Options

use std::path::{Path, PathBuf};

use crate::config::SourcesConfig;
use crate::domain::kind::ObjectKind;
use crate::domain::services::CompileContext;

/// Options for the compile use case
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Directory every source location is resolved against
    pub project_root: PathBuf,
    /// Where each kind's definitions live
    pub sources: SourcesConfig,
    pub context: CompileContext,
}

impl CompileOptions {
    pub fn new(project_root: impl Into<PathBuf>, context: CompileContext) -> Self {
        Self {
            project_root: project_root.into(),
            sources: SourcesConfig::default(),
            context,
        }
    }

    pub fn with_sources(mut self, sources: SourcesConfig) -> Self {
        self.sources = sources;
        self
    }

    /// Where definitions of `kind` are read from.
    pub fn location(&self, kind: ObjectKind) -> SourceLocation<'_> {
        match kind {
            ObjectKind::IntegrationTopic => SourceLocation::Tree {
                root: self.resolve(&self.sources.integration_topics_root),
                file_name: &self.sources.topic_file_name,
            },
            ObjectKind::DataPlaneTopic => {
                SourceLocation::File(self.resolve(&self.sources.data_plane_topics))
            }
            ObjectKind::DnsRecord => SourceLocation::File(self.resolve(&self.sources.dns_records)),
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.project_root.join(path)
        }
    }
}

/// A single well-known file, or every file with a convention name below a root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocation<'a> {
    File(PathBuf),
    Tree { root: PathBuf, file_name: &'a str },
}
