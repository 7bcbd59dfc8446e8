//! Command-line interface definitions for dot-tracker.
//!
//! The definitions are shared between the main binary and the xtask man page
//! generator.

#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Main CLI structure.
#[derive(Parser)]
#[command(
    name = "dtrack",
    version = crate::VERSION,
    about = "Track dotfiles in named groups",
    long_about = "Copies dotfiles into a central store and records which files belong to which group"
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress informational messages
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Settings file (default: ~/.dot_tracker.toml)
    #[arg(short, long, global = true, env = crate::CONFIG_ENV_VAR)]
    pub config: Option<PathBuf>,
}

/// All available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Create the store directory and an empty manifest
    Init,

    /// Add files or directories to the store and track them as a group
    Add {
        /// Paths to file or dir
        #[arg(short = 'f', long = "file", value_name = "FILE", num_args = 1.., required = true)]
        paths: Vec<String>,

        /// Group name; a random id is generated when omitted
        #[arg(short, long, value_name = "GROUP")]
        group: Option<String>,

        /// Overwrite files already tracked or stored
        #[arg(short, long)]
        overwrite: bool,
    },

    /// List tracked groups and their files
    List,

    /// Rename a group
    Rename {
        /// Old group name
        #[arg(short, long = "old", value_name = "NAME")]
        old: String,

        /// New group name
        #[arg(short, long = "new", value_name = "NAME")]
        new: String,
    },

    /// Remove a group, or a single file from a group
    Remove {
        /// Name of the group
        #[arg(short, long, value_name = "GROUP")]
        group: String,

        /// File to remove from the group
        #[arg(short = 'f', long = "file", value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
