//! # Listener trait and handle types.
//!
//! A listener is an async unit of reaction: it receives one payload per
//! matching emission and settles with `Ok(())` or a [`ListenerError`].
//!
//! [`Listen::call`] is deliberately **not** an `async fn`: invoking it runs
//! the listener's synchronous prefix immediately and returns the in-flight
//! remainder as a future. The emitter relies on this split — all listeners of
//! one dispatch are invoked back-to-back before any outcome is awaited.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::error::ListenerError;

/// Boxed future produced by a single listener invocation.
pub type BoxListenFuture = Pin<Box<dyn Future<Output = Result<(), ListenerError>> + Send>>;

/// # Asynchronous event listener.
///
/// Implementors receive an owned clone of the emitted payload and report
/// their outcome through the returned future. Failures (returned errors and
/// panics alike) are isolated by the emitter and never reach other listeners.
///
/// # Example
/// ```
/// use emits::{BoxListenFuture, Listen};
///
/// struct Audit;
///
/// impl Listen<String> for Audit {
///     fn call(&self, payload: String) -> BoxListenFuture {
///         Box::pin(async move {
///             // write audit record...
///             let _ = payload;
///             Ok(())
///         })
///     }
/// }
/// ```
pub trait Listen<P>: Send + Sync + 'static {
    /// Invokes the listener with one payload.
    ///
    /// Runs any synchronous prefix immediately; the returned future settles
    /// when the listener has fully processed the payload.
    fn call(&self, payload: P) -> BoxListenFuture;
}

/// Shared handle to a listener, suitable for registration.
pub type ListenerRef<P> = Arc<dyn Listen<P>>;
