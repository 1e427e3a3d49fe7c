//! Where formatted lines go. The logger never touches a global console directly —
//! every sink sits behind the `Output` trait, so hosts and tests inject their own.

mod console;
mod file;
mod json;
mod memory;

pub use console::{ConsoleOutput, Render, Stream};
pub use file::FileOutput;
pub use json::JsonOutput;
pub use memory::MemoryOutput;

use crate::fmt::ColorToken;

/// Everything a backend needs to emit one line.
#[derive(Debug, Clone)]
pub struct LogRecord {
    /// The level name exactly as the caller gave it. May not be a known level.
    pub level: String,
    /// Token the palette resolved for `level` (the fallback for unknown names).
    pub color: ColorToken,
    /// The caller's message, already coerced to text.
    pub message: String,
    /// Fully rendered line with host tokens, no trailing newline.
    pub line: String,
    /// Opaque resource context the logger was built with.
    pub context: Option<String>,
    /// Announcements and other lines printed without color or tag.
    pub raw: bool,
}

/// `Send + Sync` lets one logger be shared across threads without a lock around the trait object.
pub trait Output: Send + Sync {
    /// Emits one record as one complete line.
    ///
    /// # Errors
    /// I/O errors from the underlying sink (stderr, file).
    fn write(&self, record: &LogRecord) -> Result<(), crate::Error>;

    /// # Errors
    /// I/O errors from the underlying sink.
    fn flush(&self) -> Result<(), crate::Error>;
}
