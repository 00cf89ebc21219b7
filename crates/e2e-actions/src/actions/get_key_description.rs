//! Describes the keys contained in an armored key block.

use std::rc::Rc;

use futures::FutureExt;
use tracing::debug;

use crate::action::{Action, ActionOutput, Continuation, ErrorHandler, ResultCallback};
use crate::action_type::ActionType;
use crate::context::Context;
use crate::error::ActionError;
use crate::executor::EXECUTOR_TARGET;
use crate::request::ApiRequest;

/// Action serving [`ActionType::GetKeyDescription`].
///
/// Reads the armored block from the request content. The keyring is not
/// modified.
#[derive(Debug, Default, Clone, Copy)]
pub struct GetKeyDescription;

impl<Q: ?Sized> Action<Q> for GetKeyDescription {
    fn action_type(&self) -> ActionType {
        ActionType::GetKeyDescription
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
            .ok_or_else(|| ActionError::missing_content(ActionType::GetKeyDescription))?;

        Ok(async move {
            match context.key_description(armored).await {
                Ok(description) => {
                    debug!(
                        target: EXECUTOR_TARGET,
                        fingerprint = description.fingerprint.as_str(),
                        "described key"
                    );
                    callback(ActionOutput::KeyDescription(description));
                }
                Err(error) => error_handler.call(ActionError::action_failed(error)),
            }
        }
        .boxed_local())
    }
}
