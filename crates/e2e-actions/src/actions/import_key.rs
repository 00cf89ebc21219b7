//! Imports an armored key block into the keyring.

use std::rc::Rc;

use futures::FutureExt;
use tracing::info;

use crate::action::{Action, ActionOutput, Continuation, ErrorHandler, ResultCallback};
use crate::action_type::ActionType;
use crate::context::Context;
use crate::error::ActionError;
use crate::executor::EXECUTOR_TARGET;
use crate::request::ApiRequest;

/// Action serving [`ActionType::ImportKey`].
///
/// The request content holds the armored block; the optional passphrase
/// unlocks secret key material.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImportKey;

impl<Q: ?Sized> Action<Q> for ImportKey {
    fn action_type(&self) -> ActionType {
        ActionType::ImportKey
    }

    fn execute<'a>(
        self: Box<Self>,
        context: Rc<dyn Context>,
        request: &'a ApiRequest,
        _requestor: &'a Q,
        callback: ResultCallback,
        error_handler: ErrorHandler,
    ) -> Result<Continuation<'a>, ActionError> {
        let armored = request
            .content()
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| ActionError::missing_content(ActionType::ImportKey))?;
        let passphrase = request.passphrase();

        Ok(async move {
            match context.import_key(armored, passphrase).await {
                Ok(user_ids) => {
                    info!(
                        target: EXECUTOR_TARGET,
                        imported = user_ids.len(),
                        "imported key block"
                    );
                    callback(ActionOutput::Imported(user_ids));
                }
                Err(error) => error_handler.call(ActionError::action_failed(error)),
            }
        }
        .boxed_local())
    }
}
