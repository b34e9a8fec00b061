//! Domain Services
//!
//! Pure transformation from definition documents to compiled objects.
//! Nothing here touches the file system.

pub mod aggregator;
pub mod expander;
pub mod layer_merger;
pub mod naming;
pub mod record_fanout;

pub use aggregator::{compile_kind, ensure_unique_identifiers, CompileContext, Compiler};
pub use expander::{expand, CombinatorialBlock};
pub use layer_merger::{merge, resolve_defaults, FieldError, FileDefaults, MergeOutcome};
pub use naming::{finalize, substitute_environment, FinalName};
pub use record_fanout::{fan_out, NodeRecord};
