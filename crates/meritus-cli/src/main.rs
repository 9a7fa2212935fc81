//! Meritus CLI — Command-line walkthrough of the credential registry.

mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Meritus — Verifiable education credential registry.
#[derive(Parser, Debug)]
#[command(name = "meritus", version, about, long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a scripted end-to-end exercise of the registry.
    Demo(commands::demo::DemoArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    match &cli.command {
        Commands::Demo(args) => commands::demo::run(args),
    }
}
