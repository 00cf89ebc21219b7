//! Lists the keys held by the keyring.

use std::rc::Rc;

use futures::FutureExt;

use crate::action::{Action, ActionOutput, Continuation, ErrorHandler, ResultCallback};
use crate::action_type::ActionType;
use crate::context::Context;
use crate::error::ActionError;
use crate::request::ApiRequest;

/// Action serving [`ActionType::ListKeys`]. Takes no payload.
#[derive(Debug, Default, Clone, Copy)]
pub struct ListKeys;

impl<Q: ?Sized> Action<Q> for ListKeys {
    fn action_type(&self) -> ActionType {
        ActionType::ListKeys
    }

    fn execute<'a>(
        self: Box<Self>,
        context: Rc<dyn Context>,
        _request: &'a ApiRequest,
        _requestor: &'a Q,
        callback: ResultCallback,
        error_handler: ErrorHandler,
    ) -> Result<Continuation<'a>, ActionError> {
        Ok(async move {
            match context.list_keys().await {
                Ok(keys) => callback(ActionOutput::Keys(keys)),
                Err(error) => error_handler.call(ActionError::action_failed(error)),
            }
        }
        .boxed_local())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::{FakeContext, Outcomes, Requestor, alice_key, bob_key};

    #[tokio::test]
    async fn lists_every_key() {
        let context = Rc::new(FakeContext::with_keys(vec![alice_key(), bob_key()]));
        let outcomes = Outcomes::default();

        Box::new(ListKeys)
            .execute(
                context,
                &ApiRequest::new("LIST_KEYS"),
                &Requestor::default(),
                outcomes.callback(),
                outcomes.error_handler(),
            )
            .expect("synchronous part succeeds")
            .await;

        assert_eq!(
            outcomes.results(),
            vec![ActionOutput::Keys(vec![alice_key(), bob_key()])]
        );
    }

    #[tokio::test]
    async fn routes_keyring_failures_to_the_error_handler() {
        let outcomes = Outcomes::default();

        Box::new(ListKeys)
            .execute(
                Rc::new(FakeContext::failing("keyring locked")),
                &ApiRequest::new("LIST_KEYS"),
                &Requestor::default(),
                outcomes.callback(),
                outcomes.error_handler(),
            )
            .expect("synchronous part succeeds")
            .await;

        assert!(outcomes.results().is_empty());
        assert_eq!(outcomes.message_ids(), vec!["errorActionFailed"]);
    }
}
