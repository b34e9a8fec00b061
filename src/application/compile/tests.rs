//! Compile Use Case Tests

use super::*;
use crate::config::SourcesConfig;
use crate::domain::entities::DefinitionSource;
use crate::domain::kind::ObjectKind;
use crate::domain::ports::{DefinitionReader, SourceRead, SourceReadError};
use crate::domain::services::CompileContext;
use crate::domain::value_objects::{CompileWarning, DocValue, Environment};
use crate::error::StackdefError;
use crate::infrastructure::FsDefinitionReader;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

// Mock implementations for testing

#[derive(Default)]
struct MockReader {
    files: HashMap<PathBuf, &'static str>,
    calls: RefCell<Vec<String>>,
}

impl MockReader {
    fn with_file(mut self, path: &str, yaml: &'static str) -> Self {
        self.files.insert(PathBuf::from(path), yaml);
        self
    }

    fn source(&self, path: &Path) -> Option<DefinitionSource> {
        self.files.get(path).map(|yaml| {
            let value: serde_yaml_ng::Value = serde_yaml_ng::from_str(yaml).unwrap();
            DefinitionSource::new(path, DocValue::from(value))
        })
    }
}

impl DefinitionReader for MockReader {
    fn read_file(&self, path: &Path) -> Result<SourceRead, SourceReadError> {
        self.calls
            .borrow_mut()
            .push(format!("file:{}", path.display()));
        Ok(match self.source(path) {
            Some(source) => SourceRead {
                sources: vec![source],
                warnings: Vec::new(),
            },
            None => SourceRead::missing(path),
        })
    }

    fn read_tree(&self, root: &Path, file_name: &str) -> Result<SourceRead, SourceReadError> {
        self.calls
            .borrow_mut()
            .push(format!("tree:{}:{}", root.display(), file_name));
        let mut paths: Vec<&PathBuf> = self
            .files
            .keys()
            .filter(|p| p.starts_with(root) && p.file_name().is_some_and(|n| n == file_name))
            .collect();
        paths.sort();
        Ok(SourceRead {
            sources: paths.into_iter().filter_map(|p| self.source(p)).collect(),
            warnings: Vec::new(),
        })
    }
}

struct FailingReader;

impl DefinitionReader for FailingReader {
    fn read_file(&self, path: &Path) -> Result<SourceRead, SourceReadError> {
        Err(SourceReadError::InvalidYaml {
            path: path.to_path_buf(),
            message: "line 1, column 1: broken".to_string(),
        })
    }

    fn read_tree(&self, _root: &Path, _file_name: &str) -> Result<SourceRead, SourceReadError> {
        Ok(SourceRead::default())
    }
}

fn options(env: &str) -> CompileOptions {
    CompileOptions::new("/project", CompileContext::new(Environment::new(env)))
}

#[test]
fn execute_reads_every_kind_in_fixed_order() {
    let reader = MockReader::default();
    let use_case = CompileUseCase::new(reader);

    let result = use_case.execute(&options("dev")).unwrap();

    assert!(result.is_empty());
    assert_eq!(
        *use_case.reader().calls.borrow(),
        vec![
            "tree:/project/integrations:kafka-topics.yaml".to_string(),
            "file:/project/data-plane/kafka-topics.yaml".to_string(),
            "file:/project/dns-records.yaml".to_string(),
        ]
    );
}

#[test]
fn execute_orders_objects_by_kind_then_source() {
    let reader = MockReader::default()
        .with_file(
            "/project/dns-records.yaml",
            "records:\n  - name: api.example.io\n    ips: [10.0.0.1]\n",
        )
        .with_file(
            "/project/data-plane/kafka-topics.yaml",
            "shared_topics:\n  - name: \"{stack}-audit\"\n",
        )
        .with_file(
            "/project/integrations/slack/kafka-topics.yaml",
            "topics:\n  - name: \"{stack}.slack.events\"\n",
        )
        .with_file(
            "/project/integrations/gmail/kafka-topics.yaml",
            "topics:\n  - name: \"{stack}.gmail.messages\"\n",
        );

    let result = CompileUseCase::new(reader).execute(&options("dev")).unwrap();

    assert_eq!(
        result.external_names(),
        vec![
            "dev.gmail.messages",
            "dev.slack.events",
            "dev-audit",
            "api.example.io",
        ]
    );
    assert_eq!(
        result.objects_of(ObjectKind::DnsRecord).count(),
        1,
        "one DNS record expected"
    );
}

#[test]
fn execute_keeps_reader_warnings_first() {
    let reader = MockReader::default().with_file(
        "/project/data-plane/kafka-topics.yaml",
        "shared_topics:\n  - name: audit\n    colour: blue\n",
    );

    let result = CompileUseCase::new(reader).execute(&options("dev")).unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(result.warnings.len(), 2);
    assert_eq!(
        result.warnings[0],
        CompileWarning::MissingSource {
            path: PathBuf::from("/project/dns-records.yaml")
        }
    );
    assert!(matches!(
        &result.warnings[1],
        CompileWarning::UnknownField { field, .. } if field == "colour"
    ));
}

#[test]
fn execute_detects_collision_across_kinds() {
    let reader = MockReader::default()
        .with_file(
            "/project/integrations/a/kafka-topics.yaml",
            "topics:\n  - name: shared.events\n",
        )
        .with_file(
            "/project/data-plane/kafka-topics.yaml",
            "shared_topics:\n  - name: shared_events\n",
        );

    let err = CompileUseCase::new(reader)
        .execute(&options("dev"))
        .unwrap_err();

    match err {
        StackdefError::IdentifierCollision {
            identifier,
            first_name,
            second_name,
            ..
        } => {
            assert_eq!(identifier, "clustera-shared-events-topic");
            assert_eq!(first_name, "shared.events");
            assert_eq!(second_name, "shared_events");
        }
        other => panic!("expected collision, got {other:?}"),
    }
}

#[test]
fn execute_propagates_reader_errors() {
    let err = CompileUseCase::new(FailingReader)
        .execute(&options("dev"))
        .unwrap_err();

    assert!(matches!(err, StackdefError::UnreadableSource { .. }));
}

#[test]
fn execute_uses_configured_locations() {
    let sources = SourcesConfig {
        dns_records: PathBuf::from("edge/dns.yaml"),
        ..SourcesConfig::default()
    };
    let reader = MockReader::default().with_file(
        "/project/edge/dns.yaml",
        "records:\n  - name: www.example.io\n    ips: [10.0.0.2]\n",
    );

    let result = CompileUseCase::new(reader)
        .execute(&options("dev").with_sources(sources))
        .unwrap();

    assert_eq!(result.external_names(), vec!["www.example.io"]);
}

#[test]
fn location_keeps_absolute_paths() {
    let sources = SourcesConfig {
        dns_records: PathBuf::from("/etc/stackdef/dns.yaml"),
        ..SourcesConfig::default()
    };
    let options = options("dev").with_sources(sources);

    assert_eq!(
        options.location(ObjectKind::DnsRecord),
        SourceLocation::File(PathBuf::from("/etc/stackdef/dns.yaml"))
    );
    assert_eq!(
        options.location(ObjectKind::IntegrationTopic),
        SourceLocation::Tree {
            root: PathBuf::from("/project/integrations"),
            file_name: "kafka-topics.yaml",
        }
    );
}

#[test]
fn execute_with_fs_reader_on_project_tree() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("integrations/gmail")).unwrap();
    fs::create_dir_all(root.join("data-plane")).unwrap();
    fs::write(
        root.join("integrations/gmail/kafka-topics.yaml"),
        "topics:\n  - name: \"{stack}.gmail.messages\"\n",
    )
    .unwrap();
    fs::write(
        root.join("data-plane/kafka-topics.yaml"),
        r#"
transport_node_topics:
  template: "{stack}-{transport}-{node}"
  transports: [http, grpc]
  nodes: [n1, n2]
"#,
    )
    .unwrap();
    fs::write(
        root.join("dns-records.yaml"),
        "records:\n  - name: api.example.io\n    ips: [10.0.0.1]\n",
    )
    .unwrap();

    let options = CompileOptions::new(root, CompileContext::new(Environment::new("prod")));
    let result = CompileUseCase::new(FsDefinitionReader::new())
        .execute(&options)
        .unwrap();

    assert_eq!(
        result.external_names(),
        vec![
            "prod.gmail.messages",
            "prod-http-n1",
            "prod-http-n2",
            "prod-grpc-n1",
            "prod-grpc-n2",
            "api.example.io",
        ]
    );
    assert!(result.objects.iter().all(|o| o.protect));
    assert!(result.warnings.is_empty());
}
