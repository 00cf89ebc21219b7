//! The per-variant action contract and the continuations it reports through.
//!
//! An action runs in two parts. [`Action::execute`] is the synchronous part:
//! it validates the request and either fails by returning `Err`, which the
//! executor routes to the error handler, or returns a [`Continuation`]. The
//! continuation is the asynchronous part and yields `()`, so any failure
//! inside it must be routed to the error handler by the action itself.
//!
//! Whichever part finishes the work invokes exactly one of the result
//! callback or the error handler, exactly once.

use std::fmt;
use std::rc::Rc;

use futures::future::LocalBoxFuture;
use serde::Serialize;
use tracing::warn;

use crate::action_type::ActionType;
use crate::context::{Context, KeyDescription};
use crate::error::ActionError;
use crate::request::ApiRequest;

/// Asynchronous remainder of an action, borrowing the request and requestor.
pub type Continuation<'a> = LocalBoxFuture<'a, ()>;

/// Single-shot continuation receiving an action's result.
pub type ResultCallback = Box<dyn FnOnce(ActionOutput)>;

/// Successful result of an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum ActionOutput {
    /// Description of the keys in an armored block.
    KeyDescription(KeyDescription),
    /// Keys held by the keyring.
    Keys(Vec<KeyDescription>),
    /// User ids imported into the keyring.
    Imported(Vec<String>),
}

/// Shared sink for action failures.
///
/// Handlers are cheap to clone: the executor keeps its default handler for
/// every call and hands a clone to each action.
#[derive(Clone)]
pub struct ErrorHandler(Rc<dyn Fn(ActionError)>);

impl ErrorHandler {
    /// Wraps a closure as an error handler.
    #[must_use]
    pub fn new(handler: impl Fn(ActionError) + 'static) -> Self {
        Self(Rc::new(handler))
    }

    /// Handler that discards every error.
    #[must_use]
    pub fn noop() -> Self {
        Self::new(|_| {})
    }

    /// Handler that records every error as a `warn` event.
    #[must_use]
    pub fn traced() -> Self {
        Self::new(|error| {
            warn!(
                target: crate::executor::EXECUTOR_TARGET,
                message_id = error.message_id().as_str(),
                %error,
                "unhandled action error"
            );
        })
    }

    /// Delivers an error to the handler.
    pub fn call(&self, error: ActionError) {
        (self.0)(error);
    }
}

impl Default for ErrorHandler {
    fn default() -> Self {
        Self::noop()
    }
}

impl fmt::Debug for ErrorHandler {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("ErrorHandler")
    }
}

/// A unit of work bound to one [`ActionType`].
///
/// Instances are built by the registry immediately before use and consumed
/// by `execute`; they are never reused. `Q` is the requestor type, passed
/// through untouched from the caller.
pub trait Action<Q: ?Sized> {
    /// The action type this variant serves.
    fn action_type(&self) -> ActionType;

    /// Starts the action.
    ///
    /// # Errors
    ///
    /// Returns an error when the synchronous part fails. In that case the
    /// callback and error handler must not have been invoked; the executor
    /// delivers the error to the handler.
    fn execute<'a>(
        self: Box<Self>,
        context: Rc<dyn Context>,
        request: &'a ApiRequest,
        requestor: &'a Q,
        callback: ResultCallback,
        error_handler: ErrorHandler,
    ) -> Result<Continuation<'a>, ActionError>;
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[test]
    fn clones_share_the_same_sink() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let handler = ErrorHandler::new(move |error| sink.borrow_mut().push(error.message_id()));
        let clone = handler.clone();

        handler.call(ActionError::unsupported_action("A"));
        clone.call(ActionError::unsupported_action("B"));

        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn noop_and_traced_handlers_accept_errors() {
        ErrorHandler::noop().call(ActionError::unsupported_action("A"));
        ErrorHandler::traced().call(ActionError::unsupported_action("B"));
        ErrorHandler::default().call(ActionError::missing_content(ActionType::ImportKey));
    }

    #[test]
    fn output_serialises_with_kind_tag() {
        let output = ActionOutput::Imported(vec!["alice@example.com".to_owned()]);
        let json = serde_json::to_string(&output).expect("serialise output");
        assert_eq!(json, r#"{"kind":"imported","value":["alice@example.com"]}"#);
    }
}
