//! # stagebus
//!
//! **Stagebus** is a request-lifecycle signal bus for cooperative services.
//!
//! It lets external code observe and extend the internal stages of a
//! processing pipeline (an image service's read/resize/crop/serialize flow,
//! health checks, server startup) without modifying the pipeline itself:
//! stages trigger named signals, extensions subscribe hooks.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!     ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//!     │   pipeline   │   │   pipeline   │   │    server    │
//!     │    stage     │   │    stage     │   │   startup    │
//!     └──────┬───────┘   └──────┬───────┘   └──────┬───────┘
//!            │ trigger(...)     │                  │ trigger_sync(...)
//!            ▼                  ▼                  ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  Dispatcher                                                       │
//! │  - discipline check (signal kind vs entry point)                  │
//! │  - ordered hook invocation                                        │
//! │  - async: schedule every hook, await only the first               │
//! └──────┬─────────────────────────────────────────────────┬──────────┘
//!        │                                                 │
//!        ▼                                                 ▼
//! ┌──────────────────────────────┐   ┌──────────────────────────────┐
//! │  Lifecycle (signal catalog)  │   │  Schedule (adapter)          │
//! │  - Server      (sync)        │   │  - TokioSpawner: hooks 2..n  │
//! │  - Imaging     (async)       │   │    keep running detached on  │
//! │  - Engine      (async*)      │   │    the host loop             │
//! │  - Healthcheck (async)       │   └──────────────────────────────┘
//! │  + Registry (name lookup)    │
//! └──────────────────────────────┘
//! ```
//!
//! ### Delivery disciplines
//! Every signal is created with a fixed [`SignalKind`]:
//!
//! - **Synchronous** - [`Dispatcher::trigger_sync`] runs every hook on the
//!   calling turn, fail-fast, and returns all values. Used for
//!   startup/shutdown signals where a broken extension should halt
//!   configuration.
//! - **Asynchronous** - [`Dispatcher::trigger`] schedules every hook's
//!   computation on the host loop and awaits only the first subscriber's
//!   value, which lets exactly one extension veto or replace default
//!   pipeline behavior while the rest run for side effects.
//!
//! Crossing the boundary in either direction - triggering a sync signal
//! asynchronously, or attaching the wrong hook shape - fails with
//! [`BusError::Discipline`].
//!
//! ## Features
//! | Area               | Description                                                  | Key types / traits                     |
//! |--------------------|--------------------------------------------------------------|----------------------------------------|
//! | **Catalog**        | Fixed, eagerly-created set of lifecycle signals.             | [`Lifecycle`], [`Registry`], [`Signal`]|
//! | **Subscription**   | Ordered, append-only hook lists per signal.                  | [`SyncHook`], [`AsyncHook`]            |
//! | **Dispatch**       | The two trigger entry points and their contracts.            | [`Dispatcher`], [`Reply`]              |
//! | **Scheduling**     | Injected adapter between hooks and the host loop.            | [`Schedule`], [`TokioSpawner`]         |
//! | **Pipeline**       | before/operation/after triads for engine and healthcheck.    | [`EngineOps`], [`HealthcheckOps`]      |
//! | **Errors**         | Typed errors for bus misuse and hook failures.               | [`BusError`], [`HookError`]            |
//!
//! ## Optional features
//! - `notify` *(default)*: exports the best-effort upload queue notifier
//!   ([`UploadNotifier`], [`QueuePublisher`]).
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use stagebus::{AsyncHookFn, Context, Dispatcher, Lifecycle, Sender, SyncHookFn};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), stagebus::BusError> {
//!     let lifecycle = Lifecycle::new();
//!     let dispatcher = Dispatcher::default();
//!
//!     // Synchronous startup notification.
//!     lifecycle.server.after_server_run.subscribe_sync(SyncHookFn::arc(
//!         "announce",
//!         |_s: &Sender, _c: &Context| {
//!             println!("server is running");
//!             Ok(None)
//!         },
//!     ))?;
//!     dispatcher.trigger_sync(
//!         &lifecycle.server.after_server_run,
//!         &Sender::new("server"),
//!         &Context::new(),
//!     )?;
//!
//!     // Asynchronous hook whose value short-circuits the pipeline.
//!     lifecycle.imaging.received.subscribe_async(AsyncHookFn::arc(
//!         "cache",
//!         |_s: Sender, _c: Arc<Context>| async move {
//!             Ok(Some(serde_json::json!({ "cached": true })))
//!         },
//!     ))?;
//!     let value = dispatcher
//!         .trigger(
//!             &lifecycle.imaging.received,
//!             &Sender::new("core-handler"),
//!             Context::new(),
//!         )
//!         .await?;
//!     assert_eq!(value, Some(serde_json::json!({ "cached": true })));
//!     Ok(())
//! }
//! ```

mod dispatch;
mod error;
mod hooks;
mod pipeline;
mod signals;

// ---- Public re-exports ----

pub use dispatch::{Context, Dispatcher, Reply, Schedule, Scheduled, Sender, TokioSpawner};
pub use error::{BusError, HookError};
pub use hooks::{
    AsyncHook, AsyncHookFn, AsyncHookRef, HookResult, SyncHook, SyncHookFn, SyncHookRef,
};
pub use pipeline::{EngineOps, HealthcheckOps};
pub use signals::{
    kind_for_name, EngineSignals, HealthcheckSignals, ImagingSignals, Lifecycle, Registry,
    ServerSignals, Signal, SignalKind,
};

// Optional: expose the best-effort upload queue notifier.
// Enable with: `--features notify` (on by default)
#[cfg(feature = "notify")]
mod notify;
#[cfg(feature = "notify")]
pub use notify::{NotifyConfig, PublishError, QueuePublisher, UploadNotifier};
