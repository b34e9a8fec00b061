//! Stackdef CLI - declarative resource compiler
//!
//! Usage: stackdef [OPTIONS] <COMMAND>
//!
//! Commands:
//!   compile  Compile all definitions and print the resulting plan
//!   check    Compile all definitions and report counts and warnings only

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Compile { env, json, output } => {
            commands::compile::cmd_compile(&cli.root, config_path, env, json, output, cli.verbose)
        }
        Commands::Check { env } => commands::check::cmd_check(&cli.root, config_path, env),
    }
}

/// Log to stderr; `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "stackdef=warn",
        1 => "stackdef=info",
        2 => "stackdef=debug",
        _ => "stackdef=trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
