//! The builder assembles palette, tag, context and sinks; the resulting Logger
//! renders each call to one line and fans it out to every sink.

mod builder;
mod from_config;
mod json_builder;

pub use builder::{ConsoleBuilder, FileBuilder, LoggerBuilder};
pub use json_builder::JsonBuilder;

use crate::fmt::{ColorToken, Palette, format_line};
use crate::level::Level;
use crate::output::{LogRecord, Output};
use std::fmt::Display;

/// Context reported by [`Logger::announce`] when the host didn't supply one.
pub const UNKNOWN_CONTEXT: &str = "unknown";

/// Immutable after build, so it can be shared across threads without locks.
pub struct Logger {
    palette: Palette,
    tag: String,
    context: Option<String>,
    outputs: Vec<Box<dyn Output>>,
}

impl Default for Logger {
    fn default() -> Self {
        LoggerBuilder::new().build()
    }
}

impl Logger {
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Emits `"<color><tag> <message><reset>"` to every sink.
    ///
    /// Any `Display` value is accepted and coerced to text, so there is no
    /// invalid-message case. Sink errors are dropped; logging never fails.
    pub fn log(&self, level: Level, message: impl Display) {
        self.emit(level.as_str(), self.palette.token(level), &message.to_string());
    }

    /// Like [`log`](Self::log) with the level given by name. A name that is not
    /// exactly a level key (`"info"`, `"nui"`, …) gets the fallback color.
    pub fn log_named(&self, level: &str, message: impl Display) {
        self.emit(level, self.palette.token_for_name(level), &message.to_string());
    }

    pub fn info(&self, message: impl Display) {
        self.log(Level::Info, message);
    }

    pub fn warn(&self, message: impl Display) {
        self.log(Level::Warn, message);
    }

    pub fn error(&self, message: impl Display) {
        self.log(Level::Error, message);
    }

    pub fn trace(&self, message: impl Display) {
        self.log(Level::Trace, message);
    }

    pub fn event(&self, message: impl Display) {
        self.log(Level::Event, message);
    }

    pub fn nui(&self, message: impl Display) {
        self.log(Level::Nui, message);
    }

    /// The line [`log`](Self::log) would emit, without emitting it.
    #[must_use]
    pub fn format(&self, level: Level, message: impl Display) -> String {
        self.render(self.palette.token(level), &message.to_string())
    }

    /// The line [`log_named`](Self::log_named) would emit, without emitting it.
    #[must_use]
    pub fn format_named(&self, level: &str, message: impl Display) -> String {
        self.render(self.palette.token_for_name(level), &message.to_string())
    }

    /// Startup line naming the running script and the resource it belongs to.
    /// Printed as-is: no tag, no color.
    pub fn announce(&self, script: &str) {
        let line = format!("Started {script} in resource {}", self.context());
        let record = LogRecord {
            level: Level::Info.as_str().to_string(),
            color: self.palette.reset(),
            message: line.clone(),
            line,
            context: self.context.clone(),
            raw: true,
        };
        self.dispatch(&record);
    }

    /// The opaque resource context, or [`UNKNOWN_CONTEXT`].
    #[must_use]
    pub fn context(&self) -> &str {
        self.context.as_deref().unwrap_or(UNKNOWN_CONTEXT)
    }

    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    #[must_use]
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    #[must_use]
    pub fn output_count(&self) -> usize {
        self.outputs.len()
    }

    /// # Errors
    /// Returns the first I/O error encountered across all outputs.
    pub fn flush(&self) -> Result<(), crate::Error> {
        for output in &self.outputs {
            output.flush()?;
        }
        Ok(())
    }

    fn render(&self, color: ColorToken, message: &str) -> String {
        format_line(color, &self.tag, message, self.palette.reset())
    }

    fn emit(&self, level: &str, color: ColorToken, message: &str) {
        let record = LogRecord {
            level: level.to_string(),
            color,
            message: message.to_string(),
            line: self.render(color, message),
            context: self.context.clone(),
            raw: false,
        };
        self.dispatch(&record);
    }

    fn dispatch(&self, record: &LogRecord) {
        for output in &self.outputs {
            let _ = output.write(record);
        }
    }
}
