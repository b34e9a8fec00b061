use std::path::Path;

use anyhow::Result;
use stackdef::presentation::output::render_check_summary;

pub fn cmd_check(root: &Path, config_path: Option<&Path>, env: Option<String>) -> Result<()> {
    let (environment, result) = super::compile_project(root, config_path, env)?;

    print!("{}", render_check_summary(&result, &environment)?);
    Ok(())
}
