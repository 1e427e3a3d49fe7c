//! The crate's own diagnostics (config loading, sink failures), reported
//! through the same line format as everything else.
//!
//! Uses `OnceLock` so the logger is initialized exactly once, even if several
//! entry points race to call `init_with_config`. The internal logger only ever writes to
//! the console, so a failing file sink can report itself without recursing.

use crate::config::Config;
use crate::level::Level;
use crate::logger::Logger;
use crate::output::Render;
use std::sync::OnceLock;

static INTERNAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Reuses the caller's already-loaded config. Only the first call takes effect.
pub fn init_with_config(config: &Config) {
    let was_init = INTERNAL_LOGGER.get().is_some();
    INTERNAL_LOGGER.get_or_init(|| build_internal_logger(config));
    if !was_init {
        trace("INTERNAL", "Internal logger ready");
    }
}

/// No outputs at all unless `general.diagnostics` is on.
fn build_internal_logger(config: &Config) -> Logger {
    let builder = Logger::builder()
        .palette(config.palette().unwrap_or_default())
        .tag(format!("{}[internal]", config.general.tag));

    if config.general.diagnostics {
        builder.console().render(Render::Plain).done().build()
    } else {
        builder.build()
    }
}

/// Pre-init calls silently vanish rather than crashing.
fn log(level: Level, scope: &str, msg: &str) {
    if let Some(logger) = INTERNAL_LOGGER.get() {
        logger.log(level, format_args!("{scope}: {msg}"));
    }
}

pub fn trace(scope: &str, msg: &str) {
    log(Level::Trace, scope, msg);
}

pub fn info(scope: &str, msg: &str) {
    log(Level::Info, scope, msg);
}

pub fn warn(scope: &str, msg: &str) {
    log(Level::Warn, scope, msg);
}

pub fn error(scope: &str, msg: &str) {
    log(Level::Error, scope, msg);
}
