//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// toolreg - Generate MCP tool registration code from a mapping table
#[derive(Parser, Debug)]
#[command(name = "toolreg")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output (logged to stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a toolreg.toml configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// The command to run (defaults to `generate`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Generate registration code
    ///
    /// Writes to stdout unless --output is given.
    ///
    /// Examples:
    ///   toolreg generate                  # Built-in table to stdout
    ///   toolreg generate -o tools.gen.ts  # Write to a file
    ///   toolreg -c toolreg.toml generate --strict
    Generate {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Lexically validate names and argument expressions first
        #[arg(long)]
        strict: bool,
    },

    /// List the mapping table in output order
    List {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Validate the mapping table without generating
    Check {
        /// Lexically validate names and argument expressions
        #[arg(long)]
        strict: bool,
    },
}
