//! Logger construction from an `mdt.toml` config.

use super::{Logger, LoggerBuilder};
use crate::config::Config;
use crate::internal;

impl Logger {
    /// Loads the default config file and builds from it. A broken config
    /// falls back to defaults so the host still gets a console logger.
    #[must_use]
    pub fn from_config(context: Option<&str>) -> Self {
        let config = Config::load().unwrap_or_else(|e| {
            internal::warn("LOGGER", &format!("Config unusable, using defaults: {e}"));
            Config::default()
        });
        Self::from_config_with(&config, context)
    }

    /// Builds outputs, palette and tag from `config`. The host-supplied
    /// `context` wins over `general.context`. Invalid color tokens are reported
    /// and the stock palette is used instead.
    #[must_use]
    pub fn from_config_with(config: &Config, context: Option<&str>) -> Self {
        let palette = config.palette().unwrap_or_else(|e| {
            internal::warn("LOGGER", &format!("Ignoring [colors]: {e}"));
            crate::fmt::Palette::new()
        });

        let mut builder = LoggerBuilder::new()
            .palette(palette)
            .tag(config.general.tag.as_str());

        if let Some(context) = context.or(config.general.context.as_deref()) {
            builder = builder.context(context);
        }

        let mut outputs: Vec<&str> = Vec::new();

        if config.console.enabled {
            builder = builder
                .console()
                .stream(config.parse_stream())
                .render(config.parse_render())
                .done();
            outputs.push("console");
        }

        if config.file.enabled {
            builder = builder
                .file()
                .path(&config.file.path)
                .timestamp_format(&config.file.timestamp_format)
                .done();
            outputs.push("file");
        }

        if config.json.enabled {
            builder = builder.json().path(&config.json.path).done();
            outputs.push("json");
        }

        if outputs.is_empty() {
            internal::warn("LOGGER", "No outputs enabled");
        } else {
            internal::info(
                "LOGGER",
                &format!("Outputs enabled: [{}]", outputs.join(", ")),
            );
        }

        builder.build()
    }
}
