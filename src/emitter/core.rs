//! # Dispatch core: channel map, registration, settle-all fan-out.
//!
//! [`Emitter`] owns a map from event name to an ordered list of registrations
//! and exposes `on`/`emit`; removal happens only through the
//! [`Subscription`](crate::Subscription) returned by `on`.
//!
//! ## Architecture
//! ```text
//!   on(name, listener) ──► channels: name ──► [reg#0, reg#1, ...]
//!                                                   ▲
//!   Subscription::unsubscribe() ── off(name, token) ┘ (removes one entry)
//!
//!   emit(name, payload)
//!       ├─ snapshot channel under lock, then release lock
//!       ├─ invoke every listener in registration order (sync panics caught)
//!       ├─ await ALL outcomes together (join_all + per-future catch_unwind)
//!       └─ report each failure to the Report sink, then resolve
//! ```
//!
//! ## Rules
//! - **Snapshot dispatch**: registrations added or removed while an emit is
//!   in flight never affect that emit; the snapshot is taken once, up front.
//! - **Ordered initiation**: listeners are invoked back-to-back in
//!   registration order before any outcome is awaited. Completion order is
//!   unspecified for async listeners.
//! - **Failure isolation**: a panicking or failing listener never stops its
//!   siblings and never fails the emit.
//! - **Eager cleanup**: a channel whose last registration is removed is
//!   deleted from the map, so membership queries stay accurate.
//! - **No cancellation**: a listener that never settles makes that `emit`
//!   never complete. Callers needing timeouts wrap their own listeners.

use std::collections::HashMap;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures::FutureExt;
use futures::future::{BoxFuture, join_all, ready};

use crate::error::ListenerError;
use crate::listeners::{ListenerFn, ListenerRef};
use crate::reporters::{Report, StderrReport};

use super::subscription::Subscription;

/// One registration on one channel.
///
/// The token stands in for callback identity: registering the same listener
/// handle twice yields two tokens, i.e. two independent registrations.
pub(crate) struct Registration<P> {
    token: u64,
    listener: ListenerRef<P>,
}

impl<P> Clone for Registration<P> {
    fn clone(&self) -> Self {
        Self {
            token: self.token,
            listener: Arc::clone(&self.listener),
        }
    }
}

/// State shared between an [`Emitter`] and its [`Subscription`] handles.
pub(crate) struct Shared<P> {
    channels: Mutex<HashMap<Arc<str>, Vec<Registration<P>>>>,
    next_token: AtomicU64,
    reporter: Arc<dyn Report>,
}

impl<P> Shared<P> {
    /// Locks the channel map.
    ///
    /// Listeners never run under this lock (emit snapshots and releases
    /// first), so a poisoning panic cannot leave the map half-mutated.
    fn channels(&self) -> MutexGuard<'_, HashMap<Arc<str>, Vec<Registration<P>>>> {
        self.channels.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Removes the registration identified by `(name, token)`.
    ///
    /// Silent no-op when the channel or the token is gone already. Deletes
    /// the channel entry entirely when it empties.
    pub(crate) fn off(&self, name: &str, token: u64) {
        let mut channels = self.channels();
        let Some(regs) = channels.get_mut(name) else {
            return;
        };
        regs.retain(|reg| reg.token != token);
        if regs.is_empty() {
            channels.remove(name);
        }
    }
}

/// # Named-event registry with ordered, failure-isolated fan-out.
///
/// Cheap to clone (internally holds `Arc`-backed state); clones share one
/// channel map. The payload type `P` is chosen per emitter — use an enum
/// with one variant per event name to approximate a typed event map.
///
/// ### Properties
/// - `on`/`unsubscribe` are synchronous and never suspend; the channel map
///   is mutated fully before or fully after any emit's snapshot.
/// - `emit` resolves only once **all** listeners of that dispatch have
///   settled, successes and failures alike.
/// - Failures go to the injected [`Report`] sink, nowhere else.
pub struct Emitter<P> {
    shared: Arc<Shared<P>>,
}

impl<P> Clone for Emitter<P> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<P> Default for Emitter<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> fmt::Debug for Emitter<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitter")
            .field("channels", &self.shared.channels().len())
            .field("reporter", &self.shared.reporter.name())
            .finish()
    }
}

impl<P> Emitter<P> {
    /// Creates an emitter reporting failures to stderr via [`StderrReport`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_reporter(Arc::new(StderrReport::new()))
    }

    /// Creates an emitter with a custom failure sink.
    ///
    /// ## Example
    /// ```rust
    /// use std::sync::Arc;
    /// use emits::{Emitter, StderrReport};
    ///
    /// let emitter: Emitter<u32> = Emitter::with_reporter(Arc::new(StderrReport::new()));
    /// assert!(emitter.is_empty());
    /// ```
    #[must_use]
    pub fn with_reporter(reporter: Arc<dyn Report>) -> Self {
        Self {
            shared: Arc::new(Shared {
                channels: Mutex::new(HashMap::new()),
                next_token: AtomicU64::new(0),
                reporter,
            }),
        }
    }

    /// Registers a listener on `name`, creating the channel lazily.
    ///
    /// Appends to the end of the channel's list; registration order is
    /// dispatch initiation order. Registering the same listener handle more
    /// than once creates independent entries, each with its own handle.
    ///
    /// Returns the [`Subscription`] bound to exactly this registration —
    /// the sole way to remove it. Dropping the subscription without calling
    /// [`unsubscribe`](Subscription::unsubscribe) keeps the listener
    /// registered.
    ///
    /// ## Example
    /// ```rust
    /// use emits::{Emitter, ListenerError, ListenerFn};
    ///
    /// let emitter: Emitter<u32> = Emitter::new();
    /// let sub = emitter.on("tick", ListenerFn::arc(|_n: u32| async {
    ///     Ok::<_, ListenerError>(())
    /// }));
    ///
    /// assert!(emitter.has_listeners("tick"));
    /// sub.unsubscribe();
    /// assert!(!emitter.has_listeners("tick"));
    /// ```
    pub fn on(&self, name: impl Into<Arc<str>>, listener: ListenerRef<P>) -> Subscription<P> {
        let name = name.into();
        let token = self.shared.next_token.fetch_add(1, AtomicOrdering::Relaxed);
        self.shared
            .channels()
            .entry(Arc::clone(&name))
            .or_default()
            .push(Registration { token, listener });
        Subscription::new(Arc::clone(&self.shared), name, token)
    }

    /// Registers a closure listener on `name`.
    ///
    /// Shorthand for `on(name, ListenerFn::arc(f))`.
    pub fn on_fn<F, Fut>(&self, name: impl Into<Arc<str>>, f: F) -> Subscription<P>
    where
        F: Fn(P) -> Fut + Send + Sync + 'static,
        Fut: std::future::Future<Output = Result<(), ListenerError>> + Send + 'static,
        P: Send + 'static,
    {
        self.on(name, ListenerFn::arc(f))
    }

    /// Fans `payload` out to every listener currently registered on `name`
    /// and resolves once all of them have settled.
    ///
    /// - Takes a snapshot of the channel up front; concurrent `on`/
    ///   `unsubscribe` calls affect only later emits.
    /// - Invokes listeners back-to-back in registration order, cloning the
    ///   payload once per listener. A panic during invocation is caught at
    ///   the call site and becomes that listener's failed outcome; the
    ///   remaining listeners are still invoked.
    /// - Awaits all outcomes together, then reports each failure to the
    ///   [`Report`] sink with the event name.
    /// - A channel with no listeners is an immediate no-op: no reports, no
    ///   suspension.
    ///
    /// `emit` itself never fails; listener errors are observable only
    /// through the sink.
    pub async fn emit(&self, name: &str, payload: P)
    where
        P: Clone + 'static,
    {
        let snapshot = match self.shared.channels().get(name) {
            Some(regs) => regs.clone(),
            None => return,
        };

        let mut outcomes: Vec<BoxFuture<'_, Result<(), ListenerError>>> =
            Vec::with_capacity(snapshot.len());

        for reg in snapshot {
            let payload = payload.clone();
            let invoked = panic::catch_unwind(AssertUnwindSafe(move || reg.listener.call(payload)));
            match invoked {
                Ok(fut) => outcomes.push(
                    AssertUnwindSafe(fut)
                        .catch_unwind()
                        .map(|settled| match settled {
                            Ok(outcome) => outcome,
                            Err(panic) => Err(ListenerError::panicked(panic)),
                        })
                        .boxed(),
                ),
                Err(panic) => outcomes.push(ready(Err(ListenerError::panicked(panic))).boxed()),
            }
        }

        for outcome in join_all(outcomes).await {
            if let Err(err) = outcome {
                self.shared.reporter.failure(name, &err).await;
            }
        }
    }

    /// True if at least one listener is registered on `name`.
    ///
    /// Accurate by construction: emptied channels are deleted eagerly.
    #[must_use]
    pub fn has_listeners(&self, name: &str) -> bool {
        self.shared.channels().contains_key(name)
    }

    /// Number of listeners registered on `name`.
    #[must_use]
    pub fn listener_count(&self, name: &str) -> usize {
        self.shared.channels().get(name).map_or(0, Vec::len)
    }

    /// True if no channel has any listener.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shared.channels().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop() -> ListenerRef<u32> {
        ListenerFn::arc(|_: u32| async { Ok::<_, ListenerError>(()) })
    }

    #[test]
    fn test_on_creates_channel_lazily() {
        let emitter: Emitter<u32> = Emitter::new();
        assert!(emitter.is_empty());

        let _sub = emitter.on("tick", noop());
        assert!(emitter.has_listeners("tick"));
        assert_eq!(emitter.listener_count("tick"), 1);
        assert_eq!(emitter.listener_count("tock"), 0);
    }

    #[test]
    fn test_unsubscribe_deletes_emptied_channel() {
        let emitter: Emitter<u32> = Emitter::new();
        let sub = emitter.on("tick", noop());

        sub.unsubscribe();
        assert!(!emitter.has_listeners("tick"));
        assert!(emitter.is_empty());
    }

    #[test]
    fn test_unsubscribe_is_idempotent() {
        let emitter: Emitter<u32> = Emitter::new();
        let sub = emitter.on("tick", noop());

        sub.unsubscribe();
        sub.unsubscribe();
        assert!(!emitter.has_listeners("tick"));
    }

    #[test]
    fn test_same_listener_twice_is_two_registrations() {
        let emitter: Emitter<u32> = Emitter::new();
        let listener = noop();

        let first = emitter.on("tick", Arc::clone(&listener));
        let _second = emitter.on("tick", listener);
        assert_eq!(emitter.listener_count("tick"), 2);

        first.unsubscribe();
        assert_eq!(emitter.listener_count("tick"), 1);
    }

    #[test]
    fn test_clones_share_channel_map() {
        let emitter: Emitter<u32> = Emitter::new();
        let clone = emitter.clone();

        let sub = clone.on("tick", noop());
        assert!(emitter.has_listeners("tick"));

        sub.unsubscribe();
        assert!(!emitter.has_listeners("tick"));
    }
}
