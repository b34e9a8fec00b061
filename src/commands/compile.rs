use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use stackdef::infrastructure::write_plan;
use stackdef::presentation::{create_renderer, OutputFormat};

pub fn cmd_compile(
    root: &Path,
    config_path: Option<&Path>,
    env: Option<String>,
    json: bool,
    output: Option<PathBuf>,
    verbose: u8,
) -> Result<()> {
    let (environment, result) = super::compile_project(root, config_path, env)?;

    if let Some(path) = &output {
        write_plan(path, &result)
            .with_context(|| format!("failed to write plan to {}", path.display()))?;
        eprintln!("Wrote {} objects to {}", result.len(), path.display());
    }

    let format = if json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let rendered = create_renderer(format, verbose).render(&result, &environment)?;
    print!("{}", rendered);

    Ok(())
}
