//! # emits
//!
//! **emits** is a minimal typed publish/subscribe primitive for Rust.
//!
//! Callers register named-event listeners; a producer emits an event name
//! with a payload, fanning it out to every registered listener and awaiting
//! their completion — sequentially initiated, concurrently resolved — while
//! isolating listener failures from one another and from the emitter.
//! Strictly in-process and in-memory: no namespacing, no priorities, no
//! backpressure, no cross-process delivery.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!   on("user:created", listener) ──► Emitter
//!                                      │  channels: name ─► [listener, ...]
//!                                      │
//!   emit("user:created", payload) ────►│
//!       │                              ▼
//!       │        snapshot the channel, then per listener in order:
//!       │        ┌──────────────┐  ┌──────────────┐  ┌──────────────┐
//!       └───────►│  listener 1  │  │  listener 2  │  │  listener N  │
//!                └──────┬───────┘  └──────┬───────┘  └──────┬───────┘
//!                       │ settle          │ settle          │ settle
//!                       ▼                 ▼                 ▼
//!                ┌───────────────────────────────────────────────────┐
//!                │ join all outcomes (successes and failures alike)  │
//!                └──────────────────────────┬────────────────────────┘
//!                                           │ failures only
//!                                           ▼
//!                                  Report sink (stderr by default)
//! ```
//!
//! ### Dispatch lifecycle
//! ```text
//! emit(name, payload)
//!   ├─► no channel? resolve immediately (no reports)
//!   ├─► snapshot listeners (later on/unsubscribe calls don't affect this emit)
//!   ├─► invoke each listener back-to-back, registration order
//!   │     └─ panic at invocation ─► caught, becomes that listener's outcome
//!   ├─► await ALL outcomes (completion order unspecified)
//!   └─► report each failure with the event name, then resolve
//! ```
//!
//! ## Features
//! | Area             | Description                                                   | Key types / traits               |
//! |------------------|---------------------------------------------------------------|----------------------------------|
//! | **Registration** | Register listeners per event name; remove via returned handle.| [`Emitter`], [`Subscription`]    |
//! | **Listeners**    | Define listeners as closures or trait impls.                  | [`Listen`], [`ListenerFn`], [`ListenerRef`] |
//! | **Reporting**    | Route listener failures to a pluggable sink.                  | [`Report`], [`StderrReport`]     |
//! | **Errors**       | Typed per-listener failure (error return or caught panic).    | [`ListenerError`]                |
//!
//! ## Example
//! ```rust
//! use emits::{Emitter, ListenerError};
//!
//! #[derive(Clone, Debug)]
//! enum Lifecycle {
//!     Started { port: u16 },
//!     Stopped,
//! }
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let emitter: Emitter<Lifecycle> = Emitter::new();
//!
//!     let sub = emitter.on_fn("lifecycle", |ev: Lifecycle| async move {
//!         println!("observed: {ev:?}");
//!         Ok::<_, ListenerError>(())
//!     });
//!
//!     // Resolves once every listener has settled.
//!     emitter.emit("lifecycle", Lifecycle::Started { port: 8080 }).await;
//!
//!     sub.unsubscribe();
//!     emitter.emit("lifecycle", Lifecycle::Stopped).await; // no listeners: no-op
//! }
//! ```
//!
//! ## Limits
//! - A listener that never settles makes that `emit` never complete; wrap
//!   individual listeners with a timeout if you need one.
//! - The event-name→payload contract is a type-system concern: pick one
//!   payload type per emitter (an enum variant per event name works well).

mod emitter;
mod error;
mod listeners;
mod reporters;

// ---- Public re-exports ----

pub use emitter::{Emitter, Subscription};
pub use error::ListenerError;
pub use listeners::{BoxListenFuture, Listen, ListenerFn, ListenerRef};
pub use reporters::{Report, StderrReport};
