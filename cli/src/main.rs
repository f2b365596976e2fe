#![deny(missing_docs)]

//! # API Catalog CLI
//!
//! Command Line Interface for the API Explorer catalog generator.
//!
//! Supported Commands:
//! - `generate`: OpenAPI document -> catalog JSON.
//! - `inspect`: Prints the domains and duplicate keys the catalog would contain.

use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use crate::error::CliResult;

mod args;
mod error;
mod generate;
mod inspect;

#[derive(Parser, Debug)]
#[clap(author, version, about = "API Explorer catalog generator")]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate the catalog JSON from an OpenAPI document.
    Generate(generate::GenerateArgs),
    /// Summarize the catalog without writing it.
    Inspect(inspect::InspectArgs),
}

fn run(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Commands::Generate(args) => generate::execute(args),
        Commands::Inspect(args) => inspect::execute(args),
    }
}

fn main() -> ExitCode {
    // `.env` only supplies defaults for the CATALOG_* flags; it is optional.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Printed directly so the failure is visible whatever RUST_LOG says.
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
