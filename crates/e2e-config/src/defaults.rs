//! Built-in defaults applied before any configuration layer.

use crate::logging::LogFormat;

/// Default log filter expression used by hosts.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Default log filter expression used by hosts.
#[must_use]
pub fn default_log_filter() -> &'static str {
    DEFAULT_LOG_FILTER
}

/// Owned log filter value used where allocation is required (e.g. serde).
pub(crate) fn default_log_filter_string() -> String {
    DEFAULT_LOG_FILTER.to_owned()
}

/// Default logging format for hosts.
#[must_use]
pub fn default_log_format() -> LogFormat {
    LogFormat::Json
}
