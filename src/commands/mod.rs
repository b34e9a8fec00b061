//! Command handlers for the stackdef binary

pub mod check;
pub mod compile;

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use stackdef::application::CompileOptions;
use stackdef::presentation::factory::create_compile_use_case;
use stackdef::presentation::output::format_config_warning;
use stackdef::{CompilationResult, Config, Environment};

/// Load the project config, report its warnings, and apply env overrides.
pub fn load_config(root: &Path, config_path: Option<&Path>) -> Result<Config> {
    let (config, warnings) = match config_path {
        Some(path) => Config::load_with_warnings(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Config::load_for_project(root)
            .with_context(|| format!("failed to load config from {}", root.display()))?,
    };

    for warning in &warnings {
        eprintln!("{}", format_config_warning(warning));
    }

    Ok(config.with_env_overrides())
}

/// `--env` first, then `STACKDEF_ENV`, then `[environment] name`.
pub fn resolve_environment(cli_env: Option<String>, config: &Config) -> Result<Environment> {
    let given = |env: &String| !env.trim().is_empty();
    cli_env
        .filter(given)
        .or_else(|| config.environment.name.clone().filter(given))
        .map(Environment::new)
        .ok_or_else(|| {
            anyhow!(
                "no environment given\n  → Fix: pass --env <ENV>, set STACKDEF_ENV, \
                 or set [environment] name in stackdef.toml"
            )
        })
}

/// Resolve config and environment, then compile every definition source.
pub fn compile_project(
    root: &Path,
    config_path: Option<&Path>,
    cli_env: Option<String>,
) -> Result<(Environment, CompilationResult)> {
    let config = load_config(root, config_path)?;
    let environment = resolve_environment(cli_env, &config)?;

    let options = CompileOptions::new(root, config.compile_context(environment.clone()))
        .with_sources(config.sources.clone());
    let result = create_compile_use_case()
        .execute(&options)
        .with_context(|| format!("compilation failed for environment '{}'", environment))?;

    Ok((environment, result))
}
