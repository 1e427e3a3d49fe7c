//! `mdt log`: the shell-script way to emit one line.

use crate::logger::Logger;
use std::process::ExitCode;

/// Unknown level names are not an error; they print in the fallback color.
#[must_use]
pub fn cmd_log(level: &str, message: &[String], logger: &Logger) -> ExitCode {
    logger.log_named(level, message.join(" "));
    match logger.flush() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("mdt: {e}");
            ExitCode::FAILURE
        }
    }
}
