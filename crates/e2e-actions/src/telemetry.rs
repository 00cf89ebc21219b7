//! Structured telemetry for executor hosts.
//!
//! Executor events are emitted under module-path targets
//! (`e2e_actions::executor`, `e2e_actions::provider`,
//! `e2e_actions::bootstrap`), so a filter such as
//! `warn,e2e_actions::executor=debug` follows individual calls through their
//! resolving and running transitions while keeping everything else quiet.

use std::io::{self, IsTerminal};

use once_cell::sync::OnceCell;
use tracing::{Subscriber, subscriber::SetGlobalDefaultError};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::{self, MakeWriter};

use e2e_config::{Config, LogFormat};

static TELEMETRY_GUARD: OnceCell<()> = OnceCell::new();

/// Subscriber assembled from a [`Config`], ready to install or scope.
pub type BoxedSubscriber = Box<dyn Subscriber + Send + Sync>;

/// Handle returned when telemetry has been initialised.
#[derive(Debug, Default, Clone, Copy)]
pub struct TelemetryHandle;

/// Errors encountered while configuring telemetry.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// Failed to parse the configured log filter expression.
    #[error("invalid log filter: {0}")]
    Filter(String),
    /// Failed to install the tracing subscriber.
    #[error("failed to install telemetry subscriber: {0}")]
    Subscriber(SetGlobalDefaultError),
}

/// Installs the global stderr subscriber on first use.
///
/// Later calls return a fresh [`TelemetryHandle`] without touching the
/// global state. A call that fails leaves the guard unset, so a corrected
/// configuration can be retried.
///
/// # Errors
///
/// Returns [`TelemetryError::Filter`] for an unparseable filter and
/// [`TelemetryError::Subscriber`] when another global subscriber already
/// owns the process.
pub fn initialise(config: &Config) -> Result<TelemetryHandle, TelemetryError> {
    TELEMETRY_GUARD
        .get_or_try_init(|| install_subscriber(config))
        .map(|_| TelemetryHandle)
}

/// Builds the configured subscriber over `writer` without installing it.
///
/// Hosts that route logs somewhere other than stderr, or scope them with
/// [`tracing::subscriber::with_default`], start here. ANSI colour is off.
///
/// # Errors
///
/// Returns [`TelemetryError::Filter`] for an unparseable filter.
pub fn build_subscriber<W>(config: &Config, writer: W) -> Result<BoxedSubscriber, TelemetryError>
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    subscriber(config, writer, false)
}

fn install_subscriber(config: &Config) -> Result<(), TelemetryError> {
    let subscriber = subscriber(config, io::stderr, io::stderr().is_terminal())?;
    tracing::subscriber::set_global_default(subscriber).map_err(TelemetryError::Subscriber)
}

fn subscriber<W>(config: &Config, writer: W, ansi: bool) -> Result<BoxedSubscriber, TelemetryError>
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let filter = EnvFilter::try_new(config.log_filter())
        .map_err(|error| TelemetryError::Filter(error.to_string()))?;

    let builder = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(writer)
        .with_ansi(ansi)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    Ok(match config.log_format() {
        LogFormat::Json => Box::new(builder.json().flatten_event(true).finish()),
        LogFormat::Compact => Box::new(builder.compact().finish()),
    })
}
