//! # Subscription: the sole removal path.
//!
//! [`Emitter::on`](crate::Emitter::on) returns a [`Subscription`] bound to
//! exactly one registration. There is no public "remove by listener" API —
//! whoever holds the subscription decides when delivery stops, and nothing
//! else can remove that registration out from under them.
//!
//! ## Rules
//! - `unsubscribe` is idempotent and infallible: calling it twice, or after
//!   the registration is gone, is a silent no-op.
//! - Dropping a subscription does **not** unsubscribe; the listener stays
//!   registered for the life of the emitter.
//! - Removal never affects an emit already in flight (snapshot dispatch).

use std::sync::Arc;

use super::core::Shared;

/// Handle to one listener registration.
///
/// Holds the shared emitter state, the event name, and the registration
/// token, so it stays valid however long the caller keeps it.
pub struct Subscription<P> {
    shared: Arc<Shared<P>>,
    event: Arc<str>,
    token: u64,
}

impl<P> Subscription<P> {
    pub(crate) fn new(shared: Arc<Shared<P>>, event: Arc<str>, token: u64) -> Self {
        Self { shared, event, token }
    }

    /// Removes this registration from the emitter.
    ///
    /// No-op if it was already removed. Never fails, never panics.
    pub fn unsubscribe(&self) {
        self.shared.off(&self.event, self.token);
    }

    /// Name of the event this subscription was registered on.
    #[must_use]
    pub fn event(&self) -> &str {
        &self.event
    }
}

impl<P> std::fmt::Debug for Subscription<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("event", &self.event)
            .field("token", &self.token)
            .finish()
    }
}
