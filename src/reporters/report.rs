//! # Failure-report sink trait.
//!
//! [`Report`] is the extension point for routing listener failures somewhere
//! useful (stderr, metrics, an audit buffer). The emitter core depends only
//! on this trait, never on ambient I/O, which keeps dispatch logic testable.
//!
//! ## Rules
//! - Called once per failed listener, after all listeners of the dispatch
//!   have settled, in initiation order.
//! - Never called for successful listeners or for emits on empty channels.
//! - May await (e.g. async log transport); this delays only the completion
//!   of `emit`, never sibling listeners.
//!
//! ## Example
//! ```rust
//! use async_trait::async_trait;
//! use emits::{ListenerError, Report};
//!
//! struct Metrics;
//!
//! #[async_trait]
//! impl Report for Metrics {
//!     async fn failure(&self, event: &str, error: &ListenerError) {
//!         let _ = (event, error.as_label());
//!         // increment a failure counter, etc.
//!     }
//!
//!     fn name(&self) -> &'static str { "metrics" }
//! }
//! ```

use async_trait::async_trait;

use crate::error::ListenerError;

/// Contract for listener-failure sinks.
///
/// Implementations should avoid blocking the async runtime (prefer async I/O
/// and cooperative waits).
#[async_trait]
pub trait Report: Send + Sync + 'static {
    /// Handles a single listener failure.
    ///
    /// # Parameters
    /// - `event`: name of the channel the failing listener was registered on
    /// - `error`: the isolated failure (returned error or caught panic)
    async fn failure(&self, event: &str, error: &ListenerError);

    /// Human-readable name (for logs/metrics).
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
