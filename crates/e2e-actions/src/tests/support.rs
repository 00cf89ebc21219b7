//! Shared test doubles for executor and action tests.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use futures::FutureExt;
use futures::future::LocalBoxFuture;

use crate::action::{ActionOutput, ErrorHandler, ResultCallback};
use crate::context::{Context, KeyDescription};
use crate::error::{ActionError, ContextError, HostError};
use crate::provider::ContextProvider;

pub(crate) fn alice_key() -> KeyDescription {
    KeyDescription::public(
        "A1B2C3D4E5F60718293A4B5C6D7E8F9012345678",
        vec!["Alice <alice@example.com>".to_owned()],
    )
}

pub(crate) fn bob_key() -> KeyDescription {
    KeyDescription::public(
        "0F1E2D3C4B5A69788796A5B4C3D2E1F001234567",
        vec!["Bob <bob@example.com>".to_owned()],
    )
}

/// Opaque requestor handed through the executor untouched.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct Requestor {
    tab: u32,
}

impl Requestor {
    pub(crate) fn for_tab(tab: u32) -> Self {
        Self { tab }
    }

    pub(crate) fn tab(&self) -> u32 {
        self.tab
    }
}

/// In-memory keyring that records every call made against it.
#[derive(Debug, Default)]
pub(crate) struct FakeContext {
    keys: Vec<KeyDescription>,
    failure: Option<String>,
    calls: RefCell<Vec<String>>,
}

impl FakeContext {
    pub(crate) fn with_keys(keys: Vec<KeyDescription>) -> Self {
        Self {
            keys,
            ..Self::default()
        }
    }

    pub(crate) fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_owned()),
            ..Self::default()
        }
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) -> Result<(), ContextError> {
        self.calls.borrow_mut().push(call);
        match &self.failure {
            Some(message) => Err(ContextError::new(message.clone())),
            None => Ok(()),
        }
    }
}

impl Context for FakeContext {
    fn key_description<'a>(
        &'a self,
        armored: &'a str,
    ) -> LocalBoxFuture<'a, Result<KeyDescription, ContextError>> {
        let result = self
            .record(format!("key_description:{armored}"))
            .and_then(|()| {
                self.keys
                    .first()
                    .cloned()
                    .ok_or_else(|| ContextError::new("no key in armored block"))
            });
        async move { result }.boxed_local()
    }

    fn list_keys(&self) -> LocalBoxFuture<'_, Result<Vec<KeyDescription>, ContextError>> {
        let result = self
            .record("list_keys".to_owned())
            .map(|()| self.keys.clone());
        async move { result }.boxed_local()
    }

    fn import_key<'a>(
        &'a self,
        armored: &'a str,
        passphrase: Option<&'a str>,
    ) -> LocalBoxFuture<'a, Result<Vec<String>, ContextError>> {
        let unlock = if passphrase.is_some() {
            "with-passphrase"
        } else {
            "no-passphrase"
        };
        let result = self
            .record(format!("import_key:{armored}:{unlock}"))
            .map(|()| vec![armored.to_owned()]);
        async move { result }.boxed_local()
    }
}

/// Captures everything delivered to result callbacks and error handlers.
#[derive(Clone, Default)]
pub(crate) struct Outcomes {
    results: Rc<RefCell<Vec<ActionOutput>>>,
    errors: Rc<RefCell<Vec<ActionError>>>,
}

impl Outcomes {
    pub(crate) fn callback(&self) -> ResultCallback {
        let results = Rc::clone(&self.results);
        Box::new(move |output| results.borrow_mut().push(output))
    }

    pub(crate) fn error_handler(&self) -> ErrorHandler {
        let errors = Rc::clone(&self.errors);
        ErrorHandler::new(move |error| errors.borrow_mut().push(error))
    }

    pub(crate) fn results(&self) -> Vec<ActionOutput> {
        self.results.borrow().clone()
    }

    pub(crate) fn message_ids(&self) -> Vec<&'static str> {
        self.errors
            .borrow()
            .iter()
            .map(|error| error.message_id().as_str())
            .collect()
    }

    pub(crate) fn causes(&self) -> Vec<Option<String>> {
        self.errors
            .borrow()
            .iter()
            .map(|error| error.report().cause)
            .collect()
    }

    pub(crate) fn with_errors<R>(&self, inspect: impl FnOnce(&[ActionError]) -> R) -> R {
        inspect(&self.errors.borrow())
    }
}

#[derive(Debug)]
enum Resolution {
    Ready(Rc<FakeContext>),
    Unavailable(String),
}

#[derive(Debug)]
struct ProviderState {
    resolution: Resolution,
    yields: RefCell<VecDeque<usize>>,
    calls: Cell<usize>,
}

/// Context provider that counts resolutions and can suspend before answering.
#[derive(Debug, Clone)]
pub(crate) struct RecordingProvider {
    state: Rc<ProviderState>,
}

impl RecordingProvider {
    fn with_resolution(resolution: Resolution) -> Self {
        Self {
            state: Rc::new(ProviderState {
                resolution,
                yields: RefCell::new(VecDeque::new()),
                calls: Cell::new(0),
            }),
        }
    }

    pub(crate) fn ready(context: Rc<FakeContext>) -> Self {
        Self::with_resolution(Resolution::Ready(context))
    }

    pub(crate) fn unavailable(message: &str) -> Self {
        Self::with_resolution(Resolution::Unavailable(message.to_owned()))
    }

    /// Sets how many times each successive resolution yields before it
    /// completes. Resolutions past the end of the list complete immediately.
    pub(crate) fn with_yields(self, yields: impl IntoIterator<Item = usize>) -> Self {
        self.state.yields.borrow_mut().extend(yields);
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.state.calls.get()
    }
}

impl ContextProvider for RecordingProvider {
    fn resolve_context(&self) -> LocalBoxFuture<'_, Result<Rc<dyn Context>, HostError>> {
        self.state.calls.set(self.state.calls.get() + 1);
        let yields = self.state.yields.borrow_mut().pop_front().unwrap_or(0);
        async move {
            for _ in 0..yields {
                tokio::task::yield_now().await;
            }
            match &self.state.resolution {
                Resolution::Ready(context) => Ok(Rc::clone(context) as Rc<dyn Context>),
                Resolution::Unavailable(message) => Err(HostError::new(message.clone())),
            }
        }
        .boxed_local()
    }
}
