//! Inbound action requests.
//!
//! A request names its action by identifier and carries the payload fields
//! that action reads. The identifier is kept verbatim so that values outside
//! [`ActionType`](crate::ActionType) still reach the executor and fail as
//! unsupported actions rather than as parse errors.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::RequestError;

/// Immutable request handed to [`Executor::execute`](crate::Executor::execute).
#[derive(Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRequest {
    action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    current_user: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    recipients: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    passphrase: Option<String>,
}

impl ApiRequest {
    /// Creates a request for the given action identifier with no payload.
    #[must_use]
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            ..Self::default()
        }
    }

    /// Parses a JSON request document.
    ///
    /// Trailing whitespace (including a newline delimiter) is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::Empty`] for blank input and
    /// [`RequestError::Malformed`] when the bytes are not a request document.
    pub fn parse(bytes: &[u8]) -> Result<Self, RequestError> {
        let trimmed = bytes.trim_ascii_end();
        if trimmed.is_empty() {
            return Err(RequestError::Empty);
        }
        Ok(serde_json::from_slice(trimmed)?)
    }

    /// Sets the armored content the action operates on.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Sets the user on whose behalf the action runs.
    #[must_use]
    pub fn with_current_user(mut self, user: impl Into<String>) -> Self {
        self.current_user = Some(user.into());
        self
    }

    /// Appends a recipient.
    #[must_use]
    pub fn with_recipient(mut self, recipient: impl Into<String>) -> Self {
        self.recipients.push(recipient.into());
        self
    }

    /// Sets the passphrase used to unlock imported keys.
    #[must_use]
    pub fn with_passphrase(mut self, passphrase: impl Into<String>) -> Self {
        self.passphrase = Some(passphrase.into());
        self
    }

    /// Returns the action identifier exactly as supplied.
    #[must_use]
    pub fn action(&self) -> &str {
        self.action.as_str()
    }

    /// Returns the armored content, if any.
    #[must_use]
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Returns the current user, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<&str> {
        self.current_user.as_deref()
    }

    /// Returns the recipients.
    #[must_use]
    pub fn recipients(&self) -> &[String] {
        &self.recipients
    }

    /// Returns the passphrase, if any.
    #[must_use]
    pub fn passphrase(&self) -> Option<&str> {
        self.passphrase.as_deref()
    }
}

// Passphrases never reach logs.
impl fmt::Debug for ApiRequest {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ApiRequest")
            .field("action", &self.action)
            .field("content", &self.content)
            .field("current_user", &self.current_user)
            .field("recipients", &self.recipients)
            .field("passphrase", &self.passphrase.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
