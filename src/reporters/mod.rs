//! # Diagnostic sinks for listener failures.
//!
//! The emitter never lets a listener failure reach the caller of `emit`;
//! failures surface only through a [`Report`] sink injected at construction.
//!
//! ## Architecture
//! ```text
//! emit(name, payload)
//!     │
//!     ├─► listener 1 ── Ok ────────────────► (nothing reported)
//!     ├─► listener 2 ── Err / panic ──────► Report::failure(name, error)
//!     └─► listener N ── Ok ────────────────► (nothing reported)
//! ```
//!
//! ## Contents
//! - [`Report`] - sink contract (implement for metrics, buffers, test spies)
//! - [`StderrReport`] - default sink writing one line per failure to stderr

mod log;
mod report;

pub use log::StderrReport;
pub use report::Report;
