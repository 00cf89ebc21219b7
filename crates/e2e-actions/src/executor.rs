//! Dispatch of action requests to their handlers.
//!
//! The executor looks the request's action up in the registry, resolves the
//! shared context from its provider, builds the action, and runs it. Every
//! failure along the way is delivered to exactly one error handler: the one
//! supplied with the call, or the executor's default. Nothing is returned
//! to the caller.
//!
//! Per call, the flow moves through:
//!
//! ```text
//! Pending -> Failed(unsupported)
//!         -> ContextPending -> ContextFailed
//!                           -> ActionRunning -> Succeeded | Failed
//! ```

use tracing::{debug, warn};

use crate::action::{Action, ErrorHandler, ResultCallback};
use crate::action_type::ActionType;
use crate::error::ActionError;
use crate::provider::ContextProvider;
use crate::registry::ActionRegistry;
use crate::request::ApiRequest;

/// Tracing target for executor operations.
pub(crate) const EXECUTOR_TARGET: &str = module_path!();

/// Routes requests to actions and failures to error handlers.
///
/// The default error handler is the executor's only state besides its
/// provider, so independent executors can coexist with different defaults.
#[derive(Debug)]
pub struct Executor<P> {
    provider: P,
    registry: ActionRegistry,
    error_handler: ErrorHandler,
}

impl<P> Executor<P> {
    /// Creates an executor whose default error handler discards errors.
    #[must_use]
    pub fn new(provider: P) -> Self {
        Self::with_error_handler(provider, ErrorHandler::noop())
    }

    /// Creates an executor with the given default error handler.
    #[must_use]
    pub fn with_error_handler(provider: P, error_handler: ErrorHandler) -> Self {
        Self {
            provider,
            registry: ActionRegistry::new(),
            error_handler,
        }
    }

    /// Returns the context provider.
    #[must_use]
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Returns the action registry.
    #[must_use]
    pub fn registry(&self) -> &ActionRegistry {
        &self.registry
    }

    /// Returns `true` when `action` names an executable action.
    #[must_use]
    pub fn supports(&self, action: &str) -> bool {
        self.registry.supports(action)
    }
}

impl<P> Executor<P>
where
    P: ContextProvider,
{
    /// Executes the action named by `request`.
    ///
    /// `requestor` is handed to the action unchanged. `callback` receives the
    /// action's result. `error_callback`, when supplied, receives every
    /// failure of this call, including failures raised by the action;
    /// otherwise the executor's default handler does.
    ///
    /// An unsupported action is reported before the first suspension point
    /// and without consulting the provider. A provider failure is reported
    /// without building the action. A failure returned by the synchronous
    /// part of [`Action::execute`](crate::Action::execute) is reported to the
    /// handler. Failures inside the action's continuation are routed by the
    /// action itself.
    pub async fn execute<Q: ?Sized>(
        &self,
        request: &ApiRequest,
        requestor: &Q,
        callback: ResultCallback,
        error_callback: Option<ErrorHandler>,
    ) {
        let error_handler = error_callback.unwrap_or_else(|| self.error_handler.clone());

        let Some((action_type, construct)) = self.registry.lookup::<Q>(request.action()) else {
            warn!(
                target: EXECUTOR_TARGET,
                action = request.action(),
                "unsupported action"
            );
            error_handler.call(ActionError::unsupported_action(request.action()));
            return;
        };

        self.run(
            action_type,
            construct,
            request,
            requestor,
            callback,
            error_handler,
        )
        .await;
    }

    /// Resolves the context and runs the action built by `construct`.
    async fn run<Q, F>(
        &self,
        action_type: ActionType,
        construct: F,
        request: &ApiRequest,
        requestor: &Q,
        callback: ResultCallback,
        error_handler: ErrorHandler,
    ) where
        Q: ?Sized,
        F: FnOnce() -> Box<dyn Action<Q>>,
    {
        debug!(
            target: EXECUTOR_TARGET,
            action = action_type.as_str(),
            "resolving context"
        );
        let context = match self.provider.resolve_context().await {
            Ok(context) => context,
            Err(cause) => {
                warn!(
                    target: EXECUTOR_TARGET,
                    action = action_type.as_str(),
                    error = %cause,
                    "context unavailable"
                );
                error_handler.call(ActionError::context_unavailable(cause));
                return;
            }
        };

        debug!(
            target: EXECUTOR_TARGET,
            action = action_type.as_str(),
            "running action"
        );
        let action = construct();
        match action.execute(
            context,
            request,
            requestor,
            callback,
            error_handler.clone(),
        ) {
            Ok(continuation) => continuation.await,
            Err(error) => {
                warn!(
                    target: EXECUTOR_TARGET,
                    action = action_type.as_str(),
                    %error,
                    "action rejected request"
                );
                error_handler.call(error);
            }
        }
    }
}
