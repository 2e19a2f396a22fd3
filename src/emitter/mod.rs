//! # Emitter: registration and ordered, failure-isolated fan-out.
//!
//! This module groups the dispatch **core** and the **unsubscribe handle**:
//! - [`Emitter`] - named-event registry with settle-all dispatch
//! - [`Subscription`] - idempotent handle removing exactly one registration
//!
//! ## Quick reference
//! - **Register**: [`Emitter::on`] / [`Emitter::on_fn`] (synchronous)
//! - **Remove**: [`Subscription::unsubscribe`] — the *only* removal path;
//!   there is no public direct-removal API by design
//! - **Dispatch**: [`Emitter::emit`] (async; resolves once every listener of
//!   that dispatch has settled)

mod core;
mod subscription;

pub use core::Emitter;
pub use subscription::Subscription;
