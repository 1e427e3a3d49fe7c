//! Configuration struct definitions.

use crate::fmt::DEFAULT_TAG;
use serde::Deserialize;

/// General configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Label printed after the color token.
    pub tag: String,
    /// Resource context to report when the host doesn't pass one.
    pub context: Option<String>,
    /// Print the crate's own diagnostics (config loading, sink failures) to stderr.
    pub diagnostics: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            tag: DEFAULT_TAG.to_string(),
            context: None,
            diagnostics: false,
        }
    }
}

/// Per-level token overrides (`"^2"` etc). Unset keys keep the stock palette.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ColorsConfig {
    pub info: Option<String>,
    pub warn: Option<String>,
    pub error: Option<String>,
    pub trace: Option<String>,
    pub event: Option<String>,
    pub nui: Option<String>,
    /// Token for level names that aren't in the table.
    pub fallback: Option<String>,
    /// Token closing every line.
    pub reset: Option<String>,
}

/// Console output configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Enable console output.
    pub enabled: bool,
    /// `stderr` or `stdout`.
    pub stream: String,
    /// `caret`, `ansi` or `plain`.
    pub render: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            stream: "stderr".to_string(),
            render: "caret".to_string(),
        }
    }
}

/// File output configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Enable file output.
    pub enabled: bool,
    /// Log file path, `~` allowed.
    pub path: String,
    /// Timestamp format (strftime).
    pub timestamp_format: String,
}

impl Default for FileConfig {
    fn default() -> Self {
        let path = directories::ProjectDirs::from("", "", "mdt").map_or_else(
            || "mdt.log".to_string(),
            |dirs| {
                dirs.state_dir()
                    .unwrap_or_else(|| dirs.data_dir())
                    .join("logs")
                    .join("mdt.log")
                    .to_string_lossy()
                    .into_owned()
            },
        );

        Self {
            enabled: false,
            path,
            timestamp_format: "%Y-%m-%d %H:%M:%S".to_string(),
        }
    }
}

/// JSONL output configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct JsonConfig {
    /// Enable JSON output.
    pub enabled: bool,
    /// JSONL file path, `~` allowed.
    pub path: String,
}

impl Default for JsonConfig {
    fn default() -> Self {
        let path = directories::ProjectDirs::from("", "", "mdt").map_or_else(
            || "mdt.jsonl".to_string(),
            |dirs| {
                dirs.state_dir()
                    .unwrap_or_else(|| dirs.data_dir())
                    .join("db")
                    .join("mdt.jsonl")
                    .to_string_lossy()
                    .into_owned()
            },
        );

        Self {
            enabled: false,
            path,
        }
    }
}
