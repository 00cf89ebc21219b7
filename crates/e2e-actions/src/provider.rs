//! Asynchronous resolution of the shared context from the host environment.
//!
//! The executor depends only on [`ContextProvider`]. [`HostContextProvider`]
//! is the adapter for hosts that expose the context through a launcher page:
//! it asks the host for the launcher and, when the host cannot supply one,
//! reports the host's last error instead.

use std::rc::Rc;

use futures::FutureExt;
use futures::future::LocalBoxFuture;
use tracing::debug;

use crate::context::Context;
use crate::error::HostError;

/// Tracing target for context resolution.
pub(crate) const PROVIDER_TARGET: &str = module_path!();

/// Source of the shared context.
///
/// Each call resolves independently and completes exactly once, with either
/// the context or the failure that prevented it. Calls are not cancellable,
/// and concurrent calls may complete in any order.
pub trait ContextProvider {
    /// Resolves the shared context.
    fn resolve_context(&self) -> LocalBoxFuture<'_, Result<Rc<dyn Context>, HostError>>;
}

impl<P> ContextProvider for &P
where
    P: ContextProvider + ?Sized,
{
    fn resolve_context(&self) -> LocalBoxFuture<'_, Result<Rc<dyn Context>, HostError>> {
        (**self).resolve_context()
    }
}

impl<P> ContextProvider for Rc<P>
where
    P: ContextProvider + ?Sized,
{
    fn resolve_context(&self) -> LocalBoxFuture<'_, Result<Rc<dyn Context>, HostError>> {
        (**self).resolve_context()
    }
}

/// Long-lived page owned by the host that holds the shared context.
pub trait Launcher {
    /// Returns the shared context.
    fn context(&self) -> Rc<dyn Context>;
}

/// Host environment able to hand out its launcher page.
pub trait Host {
    /// Fetches the launcher page, or `None` when the host cannot supply it
    /// (for example because the background process is not running).
    fn launcher(&self) -> LocalBoxFuture<'static, Option<Rc<dyn Launcher>>>;

    /// Describes why the most recent launcher lookup failed.
    fn last_error(&self) -> HostError;
}

/// [`ContextProvider`] that extracts the context from a host's launcher.
#[derive(Debug, Clone)]
pub struct HostContextProvider<H> {
    host: H,
}

impl<H> HostContextProvider<H> {
    /// Wraps a host environment.
    #[must_use]
    pub fn new(host: H) -> Self {
        Self { host }
    }

    /// Returns the wrapped host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }
}

impl<H> ContextProvider for HostContextProvider<H>
where
    H: Host,
{
    fn resolve_context(&self) -> LocalBoxFuture<'_, Result<Rc<dyn Context>, HostError>> {
        let launcher = self.host.launcher();
        async move {
            match launcher.await {
                Some(launcher) => {
                    debug!(target: PROVIDER_TARGET, "launcher supplied context");
                    Ok(launcher.context())
                }
                None => Err(self.host.last_error()),
            }
        }
        .boxed_local()
    }
}
