//! # StderrReport — default failure printer
//!
//! A minimal sink that prints one line per listener failure to stderr.
//! This is what [`Emitter::new`](crate::Emitter::new) wires in by default.
//!
//! ## Example output
//! ```text
//! Error in listener for event "payment:settled": listener failed: connection refused
//! Error in listener for event "tick": listener panicked: boom
//! ```

use async_trait::async_trait;

use crate::error::ListenerError;
use crate::reporters::Report;

/// Failure writer sink.
#[derive(Debug, Default)]
pub struct StderrReport;

impl StderrReport {
    /// Construct a new [`StderrReport`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Report for StderrReport {
    async fn failure(&self, event: &str, error: &ListenerError) {
        eprintln!("Error in listener for event \"{event}\": {error}");
    }

    fn name(&self) -> &'static str {
        "StderrReport"
    }
}
