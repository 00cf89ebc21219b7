//! Shared configuration for the end-to-end action executor.
//!
//! Settings are layered by [`ortho_config`]: built-in defaults, then an
//! optional configuration file, then `E2E_*` environment variables, then
//! command-line flags. The executor itself is configured in code; the values
//! here govern the ambient runtime, chiefly structured logging.

mod defaults;
mod logging;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

pub use defaults::{DEFAULT_LOG_FILTER, default_log_filter, default_log_format};
pub use logging::{LogFormat, LogFormatParseError};

/// Resolved configuration for hosts embedding the action executor.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, OrthoConfig)]
#[ortho_config(prefix = "E2E")]
pub struct Config {
    /// Tracing filter expression, in `EnvFilter` syntax.
    #[ortho_config(default = defaults::default_log_filter_string())]
    pub log_filter: String,
    /// Output format for log records.
    #[ortho_config(default = defaults::default_log_format())]
    pub log_format: LogFormat,
}

impl Config {
    /// Returns the configured tracing filter expression.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        self.log_filter.as_str()
    }

    /// Returns the configured log output format.
    #[must_use]
    pub fn log_format(&self) -> LogFormat {
        self.log_format
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: defaults::default_log_filter_string(),
            log_format: defaults::default_log_format(),
        }
    }
}
