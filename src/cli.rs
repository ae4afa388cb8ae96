use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{load_config, DEFAULT_CONFIG_FILE};
use crate::schema;

#[derive(Parser)]
#[command(name = "crudgen")]
#[command(about = "Schema-driven CRUD layer generator", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate every layer file for every registered schema
    Generate {
        /// Path to a crudgen.toml (defaults to ./crudgen.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

/// Parse arguments and run. Render and formatting failures have already
/// been logged by the pipeline and do not affect the exit status; an I/O
/// or configuration error propagates and exits non-zero.
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match &cli.command {
        Commands::Generate { config } => {
            let path = config
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
            let config = load_config(&path)?.unwrap_or_default();
            let registry = schema::registry();
            let summary = crate::generator::generate_all(&config, registry.values())?;
            println!(
                "Finished: {} generated, {} skipped, {} failed",
                summary.written, summary.skipped, summary.failed
            );
            Ok(())
        }
    }
}
