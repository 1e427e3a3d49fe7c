//! `mdt-utils` - diagnostic logging and DNA identity hashing for MDT game-server resources.
//!
//! - Leveled log lines colored with the host console's caret tokens
//!   (`^2[MDT] message^0`), fanned out to console, file, JSONL or custom sinks
//! - A startup announcement naming the running script and its resource
//! - `dna_hash`, a reversible per-character hex expansion used to compare
//!   string identity (not a cryptographic digest)
//!
//! # Example
//!
//! ```
//! use mdt_utils::{Level, Logger, MemoryOutput, dna_hash};
//!
//! let lines = MemoryOutput::new();
//! let logger = Logger::builder()
//!     .context("mdt-core")
//!     .output(lines.clone())
//!     .build();
//!
//! logger.announce("server.lua");
//! logger.log(Level::Warn, "queue is filling up");
//! logger.log_named("custom", "unknown levels get the fallback color");
//!
//! assert_eq!(
//!     lines.lines(),
//!     [
//!         "Started server.lua in resource mdt-core",
//!         "^3[MDT] queue is filling up^0",
//!         "^7[MDT] unknown levels get the fallback color^0",
//!     ]
//! );
//! assert_eq!(dna_hash("MDT"), "4d4454");
//! ```
//!
//! # Features
//!
//! - `cli` (default): builds the `mdt` command-line tool

pub mod config;
pub mod dna;
mod error;
pub mod fmt;
pub mod internal;
pub mod level;
pub mod logger;
pub mod output;

#[cfg(feature = "cli")]
pub mod cli;

pub use config::Config;
pub use dna::{dna_hash, dna_hash_strict, is_single_byte};
pub use error::Error;
pub use fmt::{ColorToken, Palette};
pub use level::Level;
pub use logger::{Logger, LoggerBuilder};
pub use output::{ConsoleOutput, FileOutput, JsonOutput, MemoryOutput, Output};
