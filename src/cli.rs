//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `statprobe`.
#[derive(Debug, Parser)]
#[command(name = "statprobe", version, about = "Query file status, type and size")]
pub struct Cli {
    /// Print results as a JSON object.
    #[arg(long, global = true)]
    pub json: bool,

    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show file type, mode and size of a path.
    Status {
        /// Path to stat.
        path: PathBuf,
    },
    /// Report whether a path names a regular file.
    IsRegular {
        /// Path to stat.
        path: PathBuf,
    },
    /// Print the size in bytes of a regular file.
    Size {
        /// Path to stat.
        path: PathBuf,
    },
}
