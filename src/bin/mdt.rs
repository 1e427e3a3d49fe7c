//! `mdt` — emit MDT-formatted log lines and DNA hashes from scripts.
//!
//! Usage:
//!   mdt log [-l <level>] <message...>     Log a message (level defaults to info)
//!   mdt announce <script> [-c <context>]  Print the startup announcement
//!   mdt hash [--strict] <text...>         Print the DNA hash of the text
//!   mdt palette                           Show the color table in use
//!
//! Global options: `-C/--config <path>`, `-c/--context <name>`.

use clap::Parser;
use mdt_utils::cli::{Cli, Command, cmd_announce, cmd_hash, cmd_log, cmd_palette};
use mdt_utils::config::Config;
use mdt_utils::{Logger, internal};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Palette, tag and sinks all come from config, so it loads before any logger exists
    let loaded = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match loaded {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            return ExitCode::FAILURE;
        }
    };

    internal::init_with_config(&config);
    let logger = Logger::from_config_with(&config, cli.context.as_deref());

    match cli.command {
        Command::Log { level, message } => cmd_log(&level, &message, &logger),
        Command::Announce { script } => cmd_announce(&script, &logger),
        Command::Hash { strict, text } => cmd_hash(&text, strict),
        Command::Palette => cmd_palette(&logger),
    }
}
