//! TOML configuration loading and conversion into the typed values the logger needs.
//!
//! Struct definitions live in `structs`, so the loading logic stays independent
//! of the serde schema.

mod structs;

pub use structs::{ColorsConfig, ConsoleConfig, FileConfig, GeneralConfig, JsonConfig};

use crate::fmt::{ColorToken, Palette};
use crate::internal;
use crate::level::Level;
use crate::output::{Render, Stream};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// An empty file must still produce a working logger, hence `#[serde(default)]` everywhere.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub colors: ColorsConfig,
    pub console: ConsoleConfig,
    pub file: FileConfig,
    pub json: JsonConfig,
}

impl Config {
    /// Loads from the default location; a missing file yields defaults.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined or TOML parsing hits a syntax error.
    pub fn load() -> Result<Self, crate::Error> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads from an explicit path; a missing file yields defaults.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        let expanded = shellexpand::tilde(&path.to_string_lossy()).into_owned();
        let path = Path::new(&expanded);
        if !path.exists() {
            internal::info("CONFIG", "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config = Self::parse(&content)?;
        internal::info("CONFIG", &format!("Config loaded from {}", path.display()));
        Ok(config)
    }

    /// # Errors
    /// TOML syntax or type errors.
    pub fn parse(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// `<config dir>/mdt/mdt.toml`.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("mdt").join("mdt.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// Stock palette with every `[colors]` override applied.
    ///
    /// # Errors
    /// `InvalidArgument` for any value that isn't a `^0`…`^9` token.
    pub fn palette(&self) -> Result<Palette, crate::Error> {
        let c = &self.colors;
        let mut palette = Palette::new();

        for (level, value) in [
            (Level::Info, &c.info),
            (Level::Warn, &c.warn),
            (Level::Error, &c.error),
            (Level::Trace, &c.trace),
            (Level::Event, &c.event),
            (Level::Nui, &c.nui),
        ] {
            if let Some(value) = value {
                palette = palette.with_level(level, value.parse()?);
            }
        }
        if let Some(value) = &c.fallback {
            palette = palette.with_fallback(value.parse::<ColorToken>()?);
        }
        if let Some(value) = &c.reset {
            palette = palette.with_reset(value.parse::<ColorToken>()?);
        }

        Ok(palette)
    }

    /// Anything other than `stdout` keeps the diagnostic stream.
    #[must_use]
    pub fn parse_stream(&self) -> Stream {
        match self.console.stream.to_lowercase().as_str() {
            "stdout" | "out" => Stream::Stdout,
            _ => Stream::Stderr,
        }
    }

    /// Unknown values leave tokens untouched.
    #[must_use]
    pub fn parse_render(&self) -> Render {
        match self.console.render.to_lowercase().as_str() {
            "ansi" | "terminal" => Render::Ansi,
            "plain" | "none" => Render::Plain,
            _ => Render::Caret,
        }
    }
}
