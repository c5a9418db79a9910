//! Logger construction from a [`Config`].

use super::{Logger, LoggerBuilder};
use crate::category::Category;
use crate::config::Config;
use crate::global;
use crate::output::Target;

impl Logger {
    /// Builds a logger from the default config file, or defaults if it can't be loaded.
    #[must_use]
    pub fn from_default_config() -> Self {
        let config = Config::load().unwrap_or_else(|e| {
            global::diagnostic(&format!("{e}, using default config"));
            Config::default()
        });
        Self::from_config(&config)
    }

    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::builder_from_config(config).build()
    }

    /// Same as [`Logger::from_config`] but leaves the builder open for further tweaks.
    #[must_use]
    pub fn builder_from_config(config: &Config) -> LoggerBuilder {
        let mut builder = LoggerBuilder::new()
            .categories(config.parse_mask())
            .gate(config.parse_gate())
            .caller_source(config.parse_caller())
            .source_suffix(&config.terminal.source_suffix);

        for category in Category::all() {
            if let Some(label) = config.label_for(category) {
                builder = builder.label(category, label);
            }
            if let Some(color) = config.color_for(category) {
                builder = builder.color(category, color);
            }
        }

        if config.terminal.enabled {
            builder = builder
                .terminal()
                .colors(config.terminal.colors)
                .structure(&config.terminal.structure)
                .target(if config.terminal.stderr {
                    Target::Stderr
                } else {
                    Target::Stdout
                })
                .done();
        } else {
            global::diagnostic("terminal output disabled, logger has no outputs");
        }

        builder
    }
}
