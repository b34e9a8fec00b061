//! Compiled object entities
//!
//! The output handed to the provisioning engine: one `CompiledObject` per
//! resource to create, in definition order.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::kind::ObjectKind;
use crate::domain::schema::EffectiveConfig;
use crate::domain::value_objects::{CompileWarning, PlanFingerprint, ResourceId};
use crate::error::StackdefResult;

use super::definition::Origin;

/// A fully specified resource
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompiledObject {
    pub kind: ObjectKind,
    /// Provider-side name, environment already substituted
    pub external_name: String,
    pub effective_config: EffectiveConfig,
    pub resource_identifier: ResourceId,
    /// Guard against destructive mutation (production only)
    pub protect: bool,
    pub source_tags: BTreeMap<String, String>,
    pub origin: Origin,
}

/// Ordered compiled objects plus the non-fatal warnings raised on the way.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompilationResult {
    pub objects: Vec<CompiledObject>,
    pub warnings: Vec<CompileWarning>,
}

impl CompilationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn objects_of(&self, kind: ObjectKind) -> impl Iterator<Item = &CompiledObject> {
        self.objects.iter().filter(move |o| o.kind == kind)
    }

    pub fn external_names(&self) -> Vec<&str> {
        self.objects.iter().map(|o| o.external_name.as_str()).collect()
    }

    /// Compact JSON of the objects; the canonical form fingerprints are taken of.
    pub fn to_json(&self) -> StackdefResult<String> {
        Ok(serde_json::to_string(&self.objects)?)
    }

    pub fn to_json_pretty(&self) -> StackdefResult<String> {
        Ok(serde_json::to_string_pretty(&self.objects)?)
    }

    pub fn fingerprint(&self) -> StackdefResult<PlanFingerprint> {
        Ok(PlanFingerprint::of_bytes(self.to_json()?.as_bytes()))
    }
}
