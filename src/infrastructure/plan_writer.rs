//! Plan file writer
//!
//! Writes a compiled plan to disk atomically: the content goes to a temporary
//! file in the destination directory, which is then renamed over the target.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::info;

use crate::domain::entities::CompilationResult;
use crate::error::StackdefResult;

/// Write the plan as pretty JSON to `path`, creating parent directories.
pub fn write_plan(path: &Path, result: &CompilationResult) -> StackdefResult<()> {
    let mut json = result.to_json_pretty()?;
    json.push('\n');
    write_atomic(path, json.as_bytes())?;

    info!(path = %path.display(), objects = result.len(), "wrote plan");
    Ok(())
}

/// Replace `path` with `content` without ever exposing a partial file.
pub fn write_atomic(path: &Path, content: &[u8]) -> StackdefResult<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)?;

    let mut file = NamedTempFile::new_in(parent)?;
    file.write_all(content)?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}
