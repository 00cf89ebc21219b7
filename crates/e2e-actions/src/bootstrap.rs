//! Host bootstrap: configuration, telemetry, and the executor.

use std::sync::Arc;

use ortho_config::{OrthoConfig, OrthoError};
use thiserror::Error;
use tracing::info;

use e2e_config::Config;

use crate::action::ErrorHandler;
use crate::executor::Executor;
use crate::telemetry::{self, TelemetryError, TelemetryHandle};

const BOOTSTRAP_TARGET: &str = module_path!();

/// Trait abstracting configuration loading for testability.
pub trait ConfigLoader: Send + Sync {
    /// Loads the host configuration.
    fn load(&self) -> Result<Config, Arc<OrthoError>>;
}

/// Loader that delegates to [`Config::load`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemConfigLoader;

impl ConfigLoader for SystemConfigLoader {
    fn load(&self) -> Result<Config, Arc<OrthoError>> {
        Config::load()
    }
}

/// Loader returning a fixed configuration, for hosts configured in code.
#[derive(Debug, Default, Clone)]
pub struct StaticConfigLoader(pub Config);

impl ConfigLoader for StaticConfigLoader {
    fn load(&self) -> Result<Config, Arc<OrthoError>> {
        Ok(self.0.clone())
    }
}

/// Errors surfaced during bootstrap.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// Configuration failed to load.
    #[error("failed to load configuration: {source}")]
    Configuration {
        /// Underlying loader error.
        #[source]
        source: Arc<OrthoError>,
    },
    /// Telemetry initialisation failed.
    #[error("failed to initialise telemetry: {source}")]
    Telemetry {
        /// Underlying telemetry error.
        #[source]
        source: TelemetryError,
    },
}

/// Result of a successful bootstrap invocation.
#[derive(Debug)]
pub struct Bootstrapped<P> {
    config: Config,
    telemetry: TelemetryHandle,
    executor: Executor<P>,
}

impl<P> Bootstrapped<P> {
    /// Accessor for the resolved configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Accessor for the telemetry handle, primarily useful for testing.
    #[must_use]
    pub fn telemetry(&self) -> TelemetryHandle {
        self.telemetry
    }

    /// Accessor for the ready executor.
    #[must_use]
    pub fn executor(&self) -> &Executor<P> {
        &self.executor
    }

    /// Consumes the bootstrap result, keeping only the executor.
    #[must_use]
    pub fn into_executor(self) -> Executor<P> {
        self.executor
    }
}

/// Loads configuration, installs telemetry, and builds an executor over
/// `provider` with `error_handler` as its default.
///
/// # Errors
///
/// Returns [`BootstrapError::Configuration`] when the loader fails and
/// [`BootstrapError::Telemetry`] when the subscriber cannot be installed.
pub fn bootstrap_with<P>(
    loader: &dyn ConfigLoader,
    provider: P,
    error_handler: ErrorHandler,
) -> Result<Bootstrapped<P>, BootstrapError> {
    let config = loader
        .load()
        .map_err(|source| BootstrapError::Configuration { source })?;
    let telemetry =
        telemetry::initialise(&config).map_err(|source| BootstrapError::Telemetry { source })?;

    info!(
        target: BOOTSTRAP_TARGET,
        log_format = %config.log_format(),
        "action executor ready"
    );

    Ok(Bootstrapped {
        config,
        telemetry,
        executor: Executor::with_error_handler(provider, error_handler),
    })
}
