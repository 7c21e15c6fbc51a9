//! apiforge CLI tool

#![forbid(unsafe_code)]

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::MakeModuleCommand;

#[derive(Parser)]
#[command(name = "apiforge")]
#[command(version)]
#[command(about = "Module scaffolding for API projects", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate code from the module templates
    Make {
        #[command(subcommand)]
        command: MakeCommands,
    },
}

#[derive(Subcommand)]
enum MakeCommands {
    /// Generate a complete module (controllers, resource, model, repository)
    Module(MakeModuleCommand),
}

fn main() -> Result<()> {
    // Quiet by default; RUST_LOG turns the engine's tracing on.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Make { command } => match command {
            MakeCommands::Module(cmd) => cmd.execute()?,
        },
    }

    Ok(())
}
