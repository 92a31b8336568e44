//! Configuration for the apival front end

use crate::output::{OutputFormat, RenderOptions};
use clap::ValueEnum;
use std::env;
use tracing::warn;

/// Default limit on how deeply nested an expected document may be
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Settings resolved from the environment, before command-line overrides
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Output format (`APIVAL_FORMAT`)
    pub format: OutputFormat,
    /// Deepest expected document accepted (`APIVAL_MAX_DEPTH`)
    pub max_depth: usize,
    /// Whether tables include path and match columns (`APIVAL_SHOW_PATHS`)
    pub show_paths: bool,
    /// Whether output is styled; disabled when `NO_COLOR` is set
    pub color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            max_depth: DEFAULT_MAX_DEPTH,
            show_paths: false,
            color: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// Unparseable values are logged and fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(format) = lookup("APIVAL_FORMAT") {
            match OutputFormat::from_str(format.trim(), true) {
                Ok(format) => config.format = format,
                Err(_) => warn!("Ignoring invalid APIVAL_FORMAT '{}'", format),
            }
        }

        if let Some(depth) = lookup("APIVAL_MAX_DEPTH") {
            match depth.trim().parse() {
                Ok(depth) => config.max_depth = depth,
                Err(_) => warn!("Ignoring invalid APIVAL_MAX_DEPTH '{}'", depth),
            }
        }

        if let Some(show_paths) = lookup("APIVAL_SHOW_PATHS") {
            config.show_paths = parse_flag(&show_paths);
        }

        // https://no-color.org: any non-empty value disables color
        if lookup("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            config.color = false;
        }

        config
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            show_paths: self.show_paths,
            color: self.color,
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
