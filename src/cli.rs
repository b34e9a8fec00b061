use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Stackdef - compile Kafka topic and DNS record definitions into a resource plan
#[derive(Parser, Debug)]
#[command(name = "stackdef")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Project root the definition sources are resolved against
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// Config file (default: <root>/stackdef.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compile all definitions and print the resulting plan
    Compile {
        /// Deployment environment (e.g. dev, staging, prod)
        #[arg(short, long)]
        env: Option<String>,

        /// Print the plan as JSON
        #[arg(long)]
        json: bool,

        /// Write the plan as pretty JSON to this file
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Compile all definitions and report counts and warnings only
    Check {
        /// Deployment environment (e.g. dev, staging, prod)
        #[arg(short, long)]
        env: Option<String>,
    },
}
