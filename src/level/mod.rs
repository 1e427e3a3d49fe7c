//! Categories that pick the host color token for a diagnostic line.
//!
//! Unlike severity levels these are not ordered: `event` and `nui` tag the
//! subsystem a line came from rather than how serious it is.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Level {
    /// Normal operational messages. The level used when a caller doesn't pick one.
    #[default]
    Info,
    /// Non-fatal anomalies worth a second look.
    Warn,
    /// Failures that stopped an operation.
    Error,
    /// High-volume instrumentation.
    Trace,
    /// Game-event traffic between scripts.
    Event,
    /// Messages exchanged with the NUI (in-game browser) layer.
    Nui,
}

impl Level {
    /// Lowercase because config keys and CLI args use lowercase level strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Trace => "trace",
            Self::Event => "event",
            Self::Nui => "nui",
        }
    }

    /// Palette order. Used by help output, the `palette` command, and tests.
    #[must_use]
    pub const fn all() -> [Self; 6] {
        [
            Self::Info,
            Self::Warn,
            Self::Error,
            Self::Trace,
            Self::Event,
            Self::Nui,
        ]
    }

    /// Exact, case-sensitive lookup by table key. Unlike `FromStr` this accepts no
    /// aliases, so `"warning"` or `"INFO"` are not keys and resolve to `None`.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().into_iter().find(|level| level.as_str() == key)
    }

    /// Stable slot in a fixed-size per-level table.
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown level" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" | "err" => Ok(Self::Error),
            "trace" => Ok(Self::Trace),
            "event" => Ok(Self::Event),
            "nui" => Ok(Self::Nui),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
