//! Error types surfaced by the action executor.
//!
//! Every failure the executor observes is funnelled into an [`ActionError`]
//! and handed to exactly one error handler. Each variant carries a stable
//! [`MessageId`] that UI layers map to localised text, and wraps the
//! lower-level failure (when there is one) as its `source`.

use std::error::Error as StdError;

use serde::Serialize;
use strum::{Display, IntoStaticStr};
use thiserror::Error;

use crate::action_type::ActionType;

/// Boxed error type used for wrapped causes.
pub type BoxError = Box<dyn StdError + Send + Sync>;

/// Stable, user-facing lookup keys for executor failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
pub enum MessageId {
    /// No registry entry exists for the requested action type.
    #[strum(serialize = "errorUnsupportedAction")]
    UnsupportedAction,
    /// The host environment could not supply a context.
    #[strum(serialize = "errorContextUnavailable")]
    ContextUnavailable,
    /// The request lacked the content the action operates on.
    #[strum(serialize = "errorMissingContent")]
    MissingContent,
    /// The action reported a failure while running.
    #[strum(serialize = "errorActionFailed")]
    ActionFailed,
}

impl MessageId {
    /// Returns the lookup key as a static string.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// Errors routed to error handlers by the executor and its actions.
#[derive(Debug, Error)]
pub enum ActionError {
    /// The request named an action type with no registry entry.
    #[error("unsupported action: {action}")]
    UnsupportedAction {
        /// The identifier carried by the request.
        action: String,
    },

    /// The host environment failed to supply a context.
    #[error("context unavailable: {source}")]
    ContextUnavailable {
        /// Failure reported by the host environment.
        #[source]
        source: HostError,
    },

    /// The request did not carry the content its action needs.
    #[error("{action} request is missing its content")]
    MissingContent {
        /// The action that rejected the request.
        action: ActionType,
    },

    /// The action failed while executing.
    #[error("action failed: {source}")]
    ActionFailure {
        /// Lookup key reported to the UI layer.
        message_id: MessageId,
        /// Original failure raised by the action.
        #[source]
        source: BoxError,
    },
}

impl ActionError {
    /// Creates an unsupported action error.
    #[must_use]
    pub fn unsupported_action(action: impl Into<String>) -> Self {
        Self::UnsupportedAction {
            action: action.into(),
        }
    }

    /// Wraps a host failure raised during context resolution.
    #[must_use]
    pub fn context_unavailable(source: HostError) -> Self {
        Self::ContextUnavailable { source }
    }

    /// Creates a missing content error for the given action.
    #[must_use]
    pub fn missing_content(action: ActionType) -> Self {
        Self::MissingContent { action }
    }

    /// Wraps a failure raised by an action.
    #[must_use]
    pub fn action_failed(source: impl Into<BoxError>) -> Self {
        Self::action_failed_with(MessageId::ActionFailed, source)
    }

    /// Wraps a failure raised by an action under a specific lookup key.
    #[must_use]
    pub fn action_failed_with(message_id: MessageId, source: impl Into<BoxError>) -> Self {
        Self::ActionFailure {
            message_id,
            source: source.into(),
        }
    }

    /// Returns the machine-readable classification of this error.
    #[must_use]
    pub fn message_id(&self) -> MessageId {
        match self {
            Self::UnsupportedAction { .. } => MessageId::UnsupportedAction,
            Self::ContextUnavailable { .. } => MessageId::ContextUnavailable,
            Self::MissingContent { .. } => MessageId::MissingContent,
            Self::ActionFailure { message_id, .. } => *message_id,
        }
    }

    /// Builds the serialisable shape consumed by UI layers.
    #[must_use]
    pub fn report(&self) -> ErrorReport {
        ErrorReport {
            message_id: self.message_id().as_str().to_owned(),
            cause: self.source().map(ToString::to_string),
        }
    }
}

/// Wire shape of an error handed to the UI layer.
///
/// Serialises as `{"messageId": "...", "cause": "..."}`; `cause` is omitted
/// when the error does not wrap a lower-level failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorReport {
    /// Stable lookup key, for example `errorUnsupportedAction`.
    pub message_id: String,
    /// Rendered underlying cause, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
}

/// Failure reported by the host environment while supplying a context.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HostError {
    message: String,
    #[source]
    source: Option<BoxError>,
}

impl HostError {
    /// Builds an error without an underlying source.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Builds an error that wraps an underlying source.
    #[must_use]
    pub fn with_source(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Human-readable message describing the failure.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

/// Failure reported by a context operation.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ContextError {
    message: String,
    #[source]
    source: Option<BoxError>,
}

impl ContextError {
    /// Builds an error without an underlying source.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Builds an error that wraps an underlying source.
    #[must_use]
    pub fn with_source(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Human-readable message describing the failure.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

/// Errors raised while parsing an inbound request.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The request body was empty or whitespace.
    #[error("empty request")]
    Empty,
    /// The request body was not a valid request document.
    #[error("malformed request: {0}")]
    Malformed(#[from] serde_json::Error),
}
