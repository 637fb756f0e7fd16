//! gentrig CLI tool.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "gentrig")]
#[command(about = "Build-time triggers for external code generators", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run go-enum on the source file named by GOFILE
    Enum {
        /// Source file to process
        #[arg(env = "GOFILE")]
        source_file: String,
    },
    /// Stage config/sqlc.yaml and run sqlc generate
    Sqlc {
        /// Project root containing config/sqlc.yaml
        #[arg(env = "PROJECT_ROOT")]
        project_root: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing. Logs go to stderr; stdout carries only the
    // confirmation line.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Enum { source_file } => {
            commands::enum_gen(source_file).await?;
        }
        Commands::Sqlc { project_root } => {
            commands::sqlc(project_root).await?;
        }
    }

    Ok(())
}
