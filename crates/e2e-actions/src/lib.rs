//! Action execution for an end-to-end encryption host.
//!
//! Callers hand the [`Executor`] an [`ApiRequest`] naming an action, an
//! opaque requestor, a result callback, and optionally an error handler. The
//! executor looks the action up in the [`ActionRegistry`], resolves the
//! shared [`Context`] through a [`ContextProvider`], and runs the matching
//! [`Action`]. Nothing is returned: every outcome is delivered to exactly one
//! of the result callback or an error handler, as an [`ActionOutput`] or an
//! [`ActionError`] carrying a stable [`MessageId`].
//!
//! All futures are `!Send` and expect a single cooperative thread, matching
//! hosts whose context lives on one event loop.
//!
//! [`bootstrap_with`] wires the ambient runtime for a host: configuration via
//! [`e2e_config`], structured telemetry, and an executor with a default error
//! handler.

mod action;
mod action_type;
pub mod actions;
mod bootstrap;
mod context;
mod error;
mod executor;
mod provider;
mod registry;
mod request;
pub mod telemetry;

pub use action::{Action, ActionOutput, Continuation, ErrorHandler, ResultCallback};
pub use action_type::ActionType;
pub use bootstrap::{
    BootstrapError, Bootstrapped, ConfigLoader, StaticConfigLoader, SystemConfigLoader,
    bootstrap_with,
};
pub use context::{Context, KeyDescription};
pub use error::{
    ActionError, BoxError, ContextError, ErrorReport, HostError, MessageId, RequestError,
};
pub use executor::Executor;
pub use provider::{ContextProvider, Host, HostContextProvider, Launcher};
pub use registry::{ActionConstructor, ActionRegistry};
pub use request::ApiRequest;
pub use telemetry::{TelemetryError, TelemetryHandle};

#[cfg(test)]
mod tests;
