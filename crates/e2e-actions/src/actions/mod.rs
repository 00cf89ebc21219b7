//! Concrete action variants.
//!
//! Each variant validates its request synchronously and performs its keyring
//! work in the returned continuation, routing context failures to the error
//! handler itself.

mod get_key_description;
mod import_key;
mod list_keys;

pub use get_key_description::GetKeyDescription;
pub use import_key::ImportKey;
pub use list_keys::ListKeys;
