//! JSONL sink: one object per line, so log collectors can query by level or
//! context without parsing caret-coloured text.

use super::{LogRecord, Output};
use crate::internal;

use chrono::Local;
use serde::Serialize;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use ulid::Ulid;

#[derive(Debug, Serialize)]
struct JsonEntry {
    /// ULID is time-sortable and unique across concurrent writers.
    id: String,
    ts: String,
    /// The name as the caller gave it, known level or not.
    level: String,
    /// The caller's message verbatim. Palette tokens only ever live in the rendered line.
    msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    context: Option<String>,
}

#[derive(Debug, Clone)]
pub struct JsonOutput {
    file_path: PathBuf,
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonOutput {
    /// Defaults to `<state dir>/mdt/db/mdt.jsonl`.
    #[must_use]
    pub fn new() -> Self {
        let file_path = directories::ProjectDirs::from("", "", "mdt").map_or_else(
            || PathBuf::from("mdt.jsonl"),
            |dirs| {
                dirs.state_dir()
                    .unwrap_or_else(|| dirs.data_dir())
                    .join("db")
                    .join("mdt.jsonl")
            },
        );

        Self { file_path }
    }

    #[must_use]
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = path.into();
        self
    }

    fn resolve_path(&self) -> PathBuf {
        let path_str = self.file_path.to_string_lossy();
        let expanded = shellexpand::tilde(&path_str);
        PathBuf::from(expanded.as_ref())
    }

    fn create_entry(record: &LogRecord) -> JsonEntry {
        JsonEntry {
            id: Ulid::new().to_string(),
            ts: Local::now().to_rfc3339(),
            level: record.level.clone(),
            msg: record.message.clone(),
            context: record.context.clone(),
        }
    }
}

impl Output for JsonOutput {
    fn write(&self, record: &LogRecord) -> Result<(), crate::Error> {
        // Announcements aren't log entries.
        if record.raw {
            return Ok(());
        }

        let path = self.resolve_path();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            if let Err(e) = fs::create_dir_all(parent) {
                internal::error(
                    "JSON",
                    &format!("Failed to create directory {}: {e}", parent.display()),
                );
                return Err(e.into());
            }
            internal::info("JSON", &format!("Created directory: {}", parent.display()));
        }

        let mut json = serde_json::to_string(&Self::create_entry(record))
            .map_err(|e| crate::Error::Format(format!("JSON serialization failed: {e}")))?;
        json.push('\n');

        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        file.write_all(json.as_bytes())?;

        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        Ok(())
    }
}
