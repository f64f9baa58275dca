//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Top-level CLI parser for `routerbits`.
#[derive(Debug, Parser)]
#[command(name = "routerbits", version, about = "Manage a collection of CNC router bits")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run an add/remove script against a fresh collection, printing every snapshot.
    Session {
        /// YAML script to run. Reads stdin when omitted.
        #[arg(long, value_name = "FILE")]
        script: Option<PathBuf>,
        /// How snapshots are printed.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print freshly generated router-bit identifiers.
    Id {
        /// How many identifiers to print.
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },
}

/// Snapshot output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text table.
    Text,
    /// One JSON array per snapshot.
    Json,
}
