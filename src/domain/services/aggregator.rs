//! Validator & aggregator
//!
//! Walks definition sources in order and turns every object entry into a
//! `CompiledObject`: shape check, merge, expansion, naming, tagging. DNS
//! nodes yield one object per IP. Any
//! fatal problem aborts the whole compilation; there is no partial result.

use std::collections::{BTreeMap, HashMap};

use tracing::{debug, info, warn};

use crate::domain::entities::{
    CompilationResult, CompiledObject, DefinitionSource, Origin, RawDefinition,
};
use crate::domain::kind::{ObjectKind, DEFAULTS_KEY};
use crate::domain::schema::{EffectiveConfig, IDENTITY_FIELD};
use crate::domain::value_objects::{CompileWarning, DocValue, Environment, ResourceId};
use crate::error::{StackdefError, StackdefResult};

use super::expander::{expand, CombinatorialBlock};
use super::layer_merger::{merge, resolve_defaults, FileDefaults};
use super::naming::{finalize, substitute_environment};
use super::record_fanout::fan_out;

/// Tag keys attached to every compiled object.
pub const TAG_ENVIRONMENT: &str = "environment";
pub const TAG_MANAGED_BY: &str = "managed_by";
pub const TAG_PLATFORM: &str = "platform";
pub const TAG_PLANE: &str = "plane";
/// Tag naming the node a DNS record belongs to.
pub const TAG_NODE: &str = "node";

pub const DEFAULT_NAMESPACE: &str = "clustera";
pub const DEFAULT_PLATFORM: &str = "clustera";
pub const DEFAULT_MANAGED_BY: &str = "pulumi";

/// Inputs shared by every object of one compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileContext {
    pub environment: Environment,
    /// Leading segment of every resource identifier
    pub namespace: String,
    pub platform: String,
    pub managed_by: String,
}

impl CompileContext {
    pub fn new(environment: Environment) -> Self {
        Self {
            environment,
            namespace: DEFAULT_NAMESPACE.to_string(),
            platform: DEFAULT_PLATFORM.to_string(),
            managed_by: DEFAULT_MANAGED_BY.to_string(),
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = platform.into();
        self
    }

    pub fn with_managed_by(mut self, managed_by: impl Into<String>) -> Self {
        self.managed_by = managed_by.into();
        self
    }

    fn tags_for(&self, kind: ObjectKind) -> BTreeMap<String, String> {
        let mut tags = BTreeMap::new();
        tags.insert(TAG_ENVIRONMENT.to_string(), self.environment.to_string());
        tags.insert(TAG_MANAGED_BY.to_string(), self.managed_by.clone());
        tags.insert(TAG_PLATFORM.to_string(), self.platform.clone());
        if let Some(plane) = kind.plane() {
            tags.insert(TAG_PLANE.to_string(), plane.to_string());
        }
        tags
    }
}

/// Compiles definition sources of every kind into one checked result.
#[derive(Debug, Clone)]
pub struct Compiler {
    context: CompileContext,
}

impl Compiler {
    pub fn new(context: CompileContext) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &CompileContext {
        &self.context
    }

    /// Compile `inputs` in the order given and check identifier uniqueness
    /// across all of them.
    pub fn compile(
        &self,
        inputs: &[(ObjectKind, Vec<DefinitionSource>)],
    ) -> StackdefResult<CompilationResult> {
        let mut result = CompilationResult::new();

        for (kind, sources) in inputs {
            let compiled = compile_kind(*kind, sources, &self.context)?;
            result.objects.extend(compiled.objects);
            result.warnings.extend(compiled.warnings);
        }

        ensure_unique_identifiers(&result.objects)?;
        Ok(result)
    }
}

/// Compile all sources of one kind, in source order then entry order.
pub fn compile_kind(
    kind: ObjectKind,
    sources: &[DefinitionSource],
    context: &CompileContext,
) -> StackdefResult<CompilationResult> {
    let protect = context.environment.protect();
    let tags = context.tags_for(kind);
    let schema = kind.schema();
    let mut result = CompilationResult::new();

    for source in sources {
        let (defaults, definitions, warnings) = collect_definitions(kind, source)?;
        result.warnings.extend(warnings);

        for definition in definitions {
            let origin = definition.origin;
            let outcome = merge(schema, &defaults, &definition.overrides).map_err(|e| {
                StackdefError::InvalidField {
                    file: origin.source.clone(),
                    index: origin.index,
                    field: e.field,
                    expected: e.expected,
                }
            })?;

            for field in outcome.unknown_fields {
                warn!(
                    file = %origin.source.display(),
                    index = origin.index,
                    field = %field,
                    "ignoring unknown field"
                );
                result.warnings.push(CompileWarning::UnknownField {
                    file: origin.source.clone(),
                    index: Some(origin.index),
                    field,
                });
            }

            let built = build_objects(kind, &definition.name, outcome.config, context)
                .map_err(|message| StackdefError::MalformedDefinition {
                    file: origin.source.clone(),
                    index: origin.index,
                    message,
                })?;

            for object in built {
                if object.external_name.is_empty() {
                    return Err(StackdefError::MalformedDefinition {
                        file: origin.source.clone(),
                        index: origin.index,
                        message: "name is empty after substitution".to_string(),
                    });
                }

                debug!(
                    kind = %kind,
                    name = %object.external_name,
                    id = %object.resource_identifier,
                    "compiled object"
                );

                let mut source_tags = tags.clone();
                if let Some(node) = object.node {
                    source_tags.insert(TAG_NODE.to_string(), node);
                }

                result.objects.push(CompiledObject {
                    kind,
                    external_name: object.external_name,
                    effective_config: object.config,
                    resource_identifier: object.resource_identifier,
                    protect,
                    source_tags,
                    origin: origin.clone(),
                });
            }
        }
    }

    info!(
        kind = %kind,
        sources = sources.len(),
        objects = result.objects.len(),
        "compiled definitions"
    );

    ensure_unique_identifiers(&result.objects)?;
    Ok(result)
}

/// Fail on the first resource identifier produced by two objects.
pub fn ensure_unique_identifiers(objects: &[CompiledObject]) -> StackdefResult<()> {
    let mut seen: HashMap<&str, &CompiledObject> = HashMap::new();
    for object in objects {
        if let Some(first) = seen.insert(object.resource_identifier.as_str(), object) {
            return Err(StackdefError::IdentifierCollision {
                identifier: object.resource_identifier.to_string(),
                first_name: first.external_name.clone(),
                first: first.origin.clone(),
                second_name: object.external_name.clone(),
                second: object.origin.clone(),
            });
        }
    }
    Ok(())
}

/// Names and config of one object before tagging.
struct BuiltObject {
    external_name: String,
    config: EffectiveConfig,
    resource_identifier: ResourceId,
    node: Option<String>,
}

/// Name a merged definition. DNS nodes fan out into one object per IP;
/// every other kind compiles to exactly one object.
fn build_objects(
    kind: ObjectKind,
    raw_name: &str,
    config: EffectiveConfig,
    context: &CompileContext,
) -> Result<Vec<BuiltObject>, String> {
    let scheme = kind.identifier_scheme();

    if kind == ObjectKind::DnsRecord {
        let node = substitute_environment(raw_name, &context.environment);
        let records = fan_out(&node, &config, &context.environment, &context.namespace, scheme)?;
        return Ok(records
            .into_iter()
            .map(|record| BuiltObject {
                external_name: record.domain,
                config: record.config,
                resource_identifier: record.resource_identifier,
                node: Some(node.clone()),
            })
            .collect());
    }

    let name = finalize(raw_name, &context.environment, &context.namespace, scheme);
    Ok(vec![BuiltObject {
        external_name: name.external_name,
        config,
        resource_identifier: name.resource_identifier,
        node: None,
    }])
}

type Collected = (FileDefaults, Vec<RawDefinition>, Vec<CompileWarning>);

/// Pull the defaults block and every raw definition out of one source.
fn collect_definitions(kind: ObjectKind, source: &DefinitionSource) -> StackdefResult<Collected> {
    let path = source.path();
    let malformed_document = |message: String| StackdefError::MalformedDocument {
        file: path.to_path_buf(),
        message,
    };

    let document = match source.document() {
        DocValue::Null => return Ok((FileDefaults::default(), Vec::new(), Vec::new())),
        DocValue::Mapping(map) => map,
        other => {
            return Err(malformed_document(format!(
                "top level must be a mapping, found {}",
                other.kind_name()
            )))
        }
    };

    let mut warnings = Vec::new();
    let defaults = match document.get(DEFAULTS_KEY) {
        None | Some(DocValue::Null) => FileDefaults::default(),
        Some(DocValue::Mapping(raw)) => {
            let (defaults, unknown) = resolve_defaults(kind.schema(), raw).map_err(|e| {
                StackdefError::InvalidDefault {
                    file: path.to_path_buf(),
                    field: e.field,
                    expected: e.expected,
                }
            })?;
            for field in unknown {
                warn!(file = %path.display(), field = %field, "ignoring unknown default");
                warnings.push(CompileWarning::UnknownField {
                    file: path.to_path_buf(),
                    index: None,
                    field,
                });
            }
            defaults
        }
        Some(other) => {
            return Err(malformed_document(format!(
                "'{}' must be a mapping, found {}",
                DEFAULTS_KEY,
                other.kind_name()
            )))
        }
    };

    let layout = kind.layout();
    let mut definitions = Vec::new();
    let mut index = 0;

    for key in layout.object_keys {
        let entries = match document.get(*key) {
            None | Some(DocValue::Null) => continue,
            Some(DocValue::Sequence(entries)) => entries,
            Some(other) => {
                return Err(malformed_document(format!(
                    "'{}' must be a list, found {}",
                    key,
                    other.kind_name()
                )))
            }
        };

        for entry in entries {
            definitions.push(raw_definition(entry, Origin::new(path, index))?);
            index += 1;
        }
    }

    if let Some(combinatorial) = layout.combinatorial {
        match document.get(combinatorial.key) {
            None | Some(DocValue::Null) => {}
            Some(block) => {
                let block = CombinatorialBlock::parse(&combinatorial, block).map_err(|message| {
                    StackdefError::MalformedDefinition {
                        file: path.to_path_buf(),
                        index,
                        message,
                    }
                })?;
                definitions.extend(expand(&block, &Origin::new(path, index)));
            }
        }
    }

    info!(
        file = %path.display(),
        definitions = definitions.len(),
        "loaded definitions"
    );

    Ok((defaults, definitions, warnings))
}

/// Check one object entry and split it into identity and overrides.
fn raw_definition(entry: &DocValue, origin: Origin) -> StackdefResult<RawDefinition> {
    let malformed = |message: String| StackdefError::MalformedDefinition {
        file: origin.source.clone(),
        index: origin.index,
        message,
    };

    let map = entry.as_mapping().ok_or_else(|| {
        malformed(format!(
            "expected a mapping with a '{}' field, found {}",
            IDENTITY_FIELD,
            entry.kind_name()
        ))
    })?;

    let name = match map.get(IDENTITY_FIELD) {
        None | Some(DocValue::Null) => {
            return Err(malformed(format!("missing '{}' field", IDENTITY_FIELD)))
        }
        Some(value) => value.scalar_text().ok_or_else(|| {
            malformed(format!(
                "'{}' must be a string, found {}",
                IDENTITY_FIELD,
                value.kind_name()
            ))
        })?,
    };
    if name.trim().is_empty() {
        return Err(malformed(format!("'{}' is empty", IDENTITY_FIELD)));
    }

    let overrides = map
        .iter()
        .filter(|(key, _)| key.as_str() != IDENTITY_FIELD)
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    Ok(RawDefinition::new(name, origin).with_overrides(overrides))
}
