//! toolreg CLI
//!
//! Generates MCP tool registration code from a mapping table.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the generated code
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    let config = cli.config.as_deref();
    match cli.command {
        Some(Commands::Generate { output, strict }) => {
            commands::run_generate(config, output.as_deref(), strict)
        }
        Some(Commands::List { json }) => commands::run_list(config, json),
        Some(Commands::Check { strict }) => commands::run_check(config, strict),
        None => commands::run_generate(config, None, false),
    }
}
