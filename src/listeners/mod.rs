//! # Listener abstractions.
//!
//! This module provides the core listener-related types:
//! - [`Listen`] - trait for implementing event listeners
//! - [`ListenerFn`] - function-backed listener implementation
//! - [`ListenerRef`] - shared reference to a listener (`Arc<dyn Listen<P>>`)
//! - [`BoxListenFuture`] - boxed future produced by one listener invocation

mod listener;
mod listener_fn;

pub use listener::{BoxListenFuture, Listen, ListenerRef};
pub use listener_fn::ListenerFn;
