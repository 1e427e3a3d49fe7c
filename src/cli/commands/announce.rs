//! `mdt announce <script>`.

use crate::logger::Logger;
use std::process::ExitCode;

#[must_use]
pub fn cmd_announce(script: &str, logger: &Logger) -> ExitCode {
    logger.announce(script);
    match logger.flush() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("mdt: {e}");
            ExitCode::FAILURE
        }
    }
}
