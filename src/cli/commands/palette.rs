//! `mdt palette`: each level rendered in its own color, plus the fallback.
//!
//! Tokens are shown by digit; printing `^N` itself would just recolor the line.

use crate::level::Level;
use crate::logger::Logger;
use std::process::ExitCode;

#[must_use]
pub fn cmd_palette(logger: &Logger) -> ExitCode {
    let palette = logger.palette();
    for level in Level::all() {
        logger.log(
            level,
            format_args!("{:<9}color {}", level.as_str(), palette.token(level).digit()),
        );
    }
    logger.log_named(
        "fallback",
        format_args!("{:<9}color {}", "fallback", palette.fallback().digit()),
    );
    match logger.flush() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("mdt: {e}");
            ExitCode::FAILURE
        }
    }
}
