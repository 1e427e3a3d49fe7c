//! Command-line interface for the `mdt` binary, built on clap derive.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// mdt - MDT resource diagnostics from the command line.
#[derive(Parser)]
#[command(name = "mdt", version, about = "MDT resource diagnostics from the command line")]
pub struct Cli {
    /// Config file (defaults to <config dir>/mdt/mdt.toml)
    #[arg(short = 'C', long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// Resource context to report, overriding `general.context`
    #[arg(short, long, global = true)]
    pub context: Option<String>,
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Emit one colored log line.
    Log {
        /// Level name; names outside the palette get the fallback color
        #[arg(short, long, default_value = "info")]
        level: String,
        /// Log message
        #[arg(required = true)]
        message: Vec<String>,
    },
    /// Print the startup announcement for a script.
    Announce {
        /// Script name, e.g. server.lua
        script: String,
    },
    /// Print the DNA hash of the given text.
    Hash {
        /// Reject characters above U+00FF instead of emitting wide groups
        #[arg(long)]
        strict: bool,
        /// Text to hash; words are joined with single spaces
        text: Vec<String>,
    },
    /// Show the level → token table in use.
    Palette,
}

pub use commands::{cmd_announce, cmd_hash, cmd_log, cmd_palette};
