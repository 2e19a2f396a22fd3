//! # Function-backed listener (`ListenerFn`)
//!
//! [`ListenerFn`] wraps a closure `F: Fn(P) -> Fut`, producing a fresh future
//! per invocation. This avoids shared mutable state; if a listener needs
//! state across invocations, capture an `Arc<...>` explicitly inside the
//! closure.
//!
//! ## Example
//! ```rust
//! use emits::{ListenerError, ListenerFn, ListenerRef};
//!
//! let l: ListenerRef<u32> = ListenerFn::arc(|n: u32| async move {
//!     if n == 0 {
//!         return Err(ListenerError::fail("zero payload"));
//!     }
//!     Ok(())
//! });
//! ```

use std::future::Future;
use std::sync::Arc;

use crate::error::ListenerError;
use crate::listeners::listener::{BoxListenFuture, Listen};

/// Function-backed listener implementation.
///
/// Wraps a closure that *creates* a new future per invocation.
#[derive(Debug)]
pub struct ListenerFn<F> {
    f: F,
}

impl<F> ListenerFn<F> {
    /// Creates a new function-backed listener.
    ///
    /// Prefer [`ListenerFn::arc`] when you immediately need a
    /// [`ListenerRef`](crate::ListenerRef).
    pub fn new(f: F) -> Self {
        Self { f }
    }

    /// Creates the listener and returns it as a shared handle.
    pub fn arc(f: F) -> Arc<Self> {
        Arc::new(Self::new(f))
    }
}

impl<F, Fut, P> Listen<P> for ListenerFn<F>
where
    F: Fn(P) -> Fut + Send + Sync + 'static, // Fn, not FnMut
    Fut: Future<Output = Result<(), ListenerError>> + Send + 'static,
    P: Send + 'static,
{
    fn call(&self, payload: P) -> BoxListenFuture {
        let fut = (self.f)(payload);
        Box::pin(fut)
    }
}
