//! Appends plain, timestamped lines to a log file.

use super::{LogRecord, Output};
use crate::fmt::strip_tokens;
use crate::internal;

use chrono::Local;
use chrono::format::{Item, StrftimeItems};
use std::fmt::Write as _;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone)]
pub struct FileOutput {
    /// May start with `~`; expanded on every write.
    path: PathBuf,
    /// strftime pattern for the leading timestamp.
    timestamp_format: String,
}

impl Default for FileOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl FileOutput {
    /// Defaults to `<state dir>/mdt/logs/mdt.log`.
    #[must_use]
    pub fn new() -> Self {
        let path = directories::ProjectDirs::from("", "", "mdt").map_or_else(
            || PathBuf::from("mdt.log"),
            |dirs| {
                dirs.state_dir()
                    .unwrap_or_else(|| dirs.data_dir())
                    .join("logs")
                    .join("mdt.log")
            },
        );

        Self {
            path,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }

    #[must_use]
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    /// A pattern chrono can't render (`%Q`, a dangling `%`) is reported and
    /// the default pattern is kept.
    #[must_use]
    pub fn timestamp_format(mut self, format: impl Into<String>) -> Self {
        let format = format.into();
        if StrftimeItems::new(&format).any(|item| matches!(item, Item::Error)) {
            internal::warn(
                "FILE",
                &format!("Invalid timestamp format '{format}', using {DEFAULT_TIMESTAMP_FORMAT}"),
            );
        } else {
            self.timestamp_format = format;
        }
        self
    }

    fn resolve_path(&self) -> PathBuf {
        let path_str = self.path.to_string_lossy();
        let expanded = shellexpand::tilde(&path_str);
        PathBuf::from(expanded.as_ref())
    }

    fn format_content(&self, record: &LogRecord) -> Result<String, crate::Error> {
        let mut content = String::new();
        write!(content, "{}", Local::now().format(&self.timestamp_format))
            .map_err(|_| crate::Error::Format("timestamp formatting failed".to_string()))?;
        content.push(' ');
        content.push_str(&strip_tokens(&record.line));
        content.push('\n');
        Ok(content)
    }
}

impl Output for FileOutput {
    fn write(&self, record: &LogRecord) -> Result<(), crate::Error> {
        let path = self.resolve_path();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            if let Err(e) = fs::create_dir_all(parent) {
                internal::error(
                    "FILE",
                    &format!("Failed to create directory {}: {e}", parent.display()),
                );
                return Err(e.into());
            }
            internal::info("FILE", &format!("Created directory: {}", parent.display()));
        }

        // Single write of the whole line, newline included.
        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        file.write_all(self.format_content(record)?.as_bytes())?;

        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        Ok(())
    }
}
