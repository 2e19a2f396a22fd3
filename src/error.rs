//! Error types for listener outcomes.
//!
//! A dispatch never fails as a whole: [`ListenerError`] describes the failure
//! of a **single** listener within one emit, and is what the emitter hands to
//! the configured [`Report`](crate::Report) sink. The emitter itself has no
//! error type — `emit` always completes once every listener has settled.

use std::any::Any;

use thiserror::Error;

/// # Failure of a single listener during one dispatch.
///
/// Produced in two ways:
/// - the listener returned `Err(..)` ([`ListenerError::Fail`])
/// - the listener panicked, either while being invoked or while its future
///   was being driven ([`ListenerError::Panicked`])
///
/// Either way the failure is isolated: sibling listeners still run, and the
/// overall `emit` still resolves.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ListenerError {
    /// Listener returned an error from its own logic.
    #[error("listener failed: {error}")]
    Fail {
        /// The underlying error message.
        error: String,
    },

    /// Listener panicked (caught and converted; never propagates).
    #[error("listener panicked: {info}")]
    Panicked {
        /// Panic payload rendered as text.
        info: String,
    },
}

impl ListenerError {
    /// Builds a [`ListenerError::Fail`] from any displayable message.
    ///
    /// # Example
    /// ```
    /// use emits::ListenerError;
    ///
    /// let err = ListenerError::fail("connection refused");
    /// assert_eq!(err.to_string(), "listener failed: connection refused");
    /// ```
    pub fn fail(error: impl Into<String>) -> Self {
        ListenerError::Fail { error: error.into() }
    }

    /// Builds a [`ListenerError::Panicked`] from a caught panic payload.
    ///
    /// `&str` and `String` payloads (the common cases from `panic!`) are
    /// rendered verbatim; anything else becomes an opaque marker.
    pub(crate) fn panicked(panic: Box<dyn Any + Send>) -> Self {
        let info = if let Some(s) = panic.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = panic.downcast_ref::<String>() {
            s.clone()
        } else {
            "non-string panic payload".to_string()
        };
        ListenerError::Panicked { info }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use emits::ListenerError;
    ///
    /// let err = ListenerError::fail("boom");
    /// assert_eq!(err.as_label(), "listener_failed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            ListenerError::Fail { .. } => "listener_failed",
            ListenerError::Panicked { .. } => "listener_panicked",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            ListenerError::Fail { error } => format!("error: {error}"),
            ListenerError::Panicked { info } => format!("panic: {info}"),
        }
    }

    /// True if this failure came from a caught panic.
    pub fn is_panic(&self) -> bool {
        matches!(self, ListenerError::Panicked { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panicked_renders_str_payload() {
        let err = ListenerError::panicked(Box::new("boom"));
        assert_eq!(err.to_string(), "listener panicked: boom");
        assert!(err.is_panic());
    }

    #[test]
    fn test_panicked_renders_string_payload() {
        let err = ListenerError::panicked(Box::new("boom".to_string()));
        assert_eq!(err.as_message(), "panic: boom");
    }

    #[test]
    fn test_panicked_opaque_payload() {
        let err = ListenerError::panicked(Box::new(42_u8));
        assert_eq!(err.as_message(), "panic: non-string panic payload");
    }
}
