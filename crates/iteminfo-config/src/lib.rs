//! Shared configuration for the item information service.
//!
//! Configuration is layered by `ortho_config`: built-in defaults, then an
//! optional TOML file (`--config-path` or `ITEMINFO_CONFIG_PATH`), then
//! `ITEMINFO_*` environment variables, then command-line flags. Later layers
//! override earlier ones.
//!
//! The binary only consumes the flags listed in [`CONFIG_CLI_FLAGS`]; any
//! remaining arguments are item identifiers.

mod defaults;
mod logging;

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

pub use defaults::{
    DEFAULT_LOG_FILTER, DEMO_IDENTIFIERS, default_log_filter, default_log_filter_string,
    default_log_format,
};
pub use logging::LogFormat;
pub use ortho_config::OrthoConfig;

/// Command-line flags understood by the configuration loader.
///
/// Each flag takes a value, either inline (`--log-format=json`) or as the
/// following argument.
pub const CONFIG_CLI_FLAGS: &[&str] = &[
    "--config-path",
    "--log-filter",
    "--log-format",
    "--catalog-path",
];

/// Resolved configuration shared by the binary and its tests.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, OrthoConfig)]
#[ortho_config(prefix = "ITEMINFO")]
pub struct Config {
    /// Tracing filter expression, e.g. `info` or `iteminfo_chain=debug`.
    #[ortho_config(default = default_log_filter_string())]
    pub log_filter: String,
    /// Output format for log records.
    #[ortho_config(default = default_log_format())]
    pub log_format: LogFormat,
    /// Optional JSON catalogue. The built-in static catalogue is used when
    /// unset.
    pub catalog_path: Option<Utf8PathBuf>,
}

impl Config {
    /// Tracing filter expression.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    /// Output format for log records.
    #[must_use]
    pub const fn log_format(&self) -> LogFormat {
        self.log_format
    }

    /// Path to a JSON catalogue, when configured.
    #[must_use]
    pub fn catalog_path(&self) -> Option<&Utf8Path> {
        self.catalog_path.as_deref()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter_string(),
            log_format: default_log_format(),
            catalog_path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::OsString;

    use super::*;

    #[test]
    fn defaults_use_static_catalogue() {
        let config = Config::default();
        assert_eq!(config.log_filter(), DEFAULT_LOG_FILTER);
        assert_eq!(config.log_format(), LogFormat::Json);
        assert!(config.catalog_path().is_none());
    }

    #[test]
    fn cli_flags_override_defaults() {
        let args = [
            "iteminfo",
            "--log-filter",
            "debug",
            "--log-format",
            "compact",
            "--catalog-path",
            "/srv/catalog.json",
        ]
        .map(OsString::from);
        let config = Config::load_from_iter(args).expect("load configuration");
        assert_eq!(config.log_filter(), "debug");
        assert_eq!(config.log_format(), LogFormat::Compact);
        assert_eq!(
            config.catalog_path(),
            Some(Utf8Path::new("/srv/catalog.json"))
        );
    }

    #[test]
    fn config_flags_take_values() {
        assert!(CONFIG_CLI_FLAGS.iter().all(|flag| flag.starts_with("--")));
        assert!(CONFIG_CLI_FLAGS.contains(&"--config-path"));
    }
}
