//! The closed set of action identifiers carried by requests.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

/// Action types known to the executor.
///
/// Identifiers are stable SCREAMING_SNAKE_CASE strings shared with the UI
/// layer. Being a member of this set does not make a type executable: only
/// the members mapped by [`ActionRegistry`](crate::ActionRegistry) are.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    IntoStaticStr,
    Deserialize,
    Serialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionType {
    /// Describe the keys contained in an armored key block.
    GetKeyDescription,
    /// List every key held by the keyring.
    ListKeys,
    /// Import an armored key block into the keyring.
    ImportKey,
    /// Encrypt and optionally sign a message.
    EncryptSign,
    /// Decrypt and verify a message.
    DecryptVerify,
}

impl ActionType {
    /// Every member of the enumeration, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::GetKeyDescription,
        Self::ListKeys,
        Self::ImportKey,
        Self::EncryptSign,
        Self::DecryptVerify,
    ];

    /// Parses an identifier.
    ///
    /// Returns `None` for identifiers outside the enumeration. Matching is
    /// exact: case-sensitive, with no whitespace trimming.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        value.parse().ok()
    }

    /// Returns the canonical identifier.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}
