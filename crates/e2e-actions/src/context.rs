//! The shared cryptographic context actions operate on.
//!
//! The context is owned by the host environment and shared by every call in
//! flight. The executor only borrows it (through an `Rc`) for the duration
//! of one call and never serialises access to it.

use futures::future::LocalBoxFuture;
use serde::{Deserialize, Serialize};

use crate::error::ContextError;

/// Summary of a single key, as shown to users before they act on it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyDescription {
    /// Hex-encoded key fingerprint.
    pub fingerprint: String,
    /// User identities bound to the key.
    pub user_ids: Vec<String>,
    /// Whether secret key material is present.
    pub secret: bool,
}

impl KeyDescription {
    /// Describes a public key.
    #[must_use]
    pub fn public(fingerprint: impl Into<String>, user_ids: Vec<String>) -> Self {
        Self {
            fingerprint: fingerprint.into(),
            user_ids,
            secret: false,
        }
    }
}

/// Capability exposing the keyring operations actions rely on.
///
/// Implementations may suspend; returned futures are not required to be
/// `Send` because the executor runs on a single cooperative thread.
pub trait Context {
    /// Describes the keys contained in an armored key block without
    /// importing them.
    fn key_description<'a>(
        &'a self,
        armored: &'a str,
    ) -> LocalBoxFuture<'a, Result<KeyDescription, ContextError>>;

    /// Lists every key held by the keyring.
    fn list_keys(&self) -> LocalBoxFuture<'_, Result<Vec<KeyDescription>, ContextError>>;

    /// Imports an armored key block, returning the imported user ids.
    fn import_key<'a>(
        &'a self,
        armored: &'a str,
        passphrase: Option<&'a str>,
    ) -> LocalBoxFuture<'a, Result<Vec<String>, ContextError>>;
}
