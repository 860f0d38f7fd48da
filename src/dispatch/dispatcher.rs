//! # Dispatcher: the two trigger entry points.
//!
//! [`Dispatcher`] validates signal kind against call discipline, invokes
//! subscribers in subscription order, and implements the two delivery
//! contracts:
//!
//! ```text
//! trigger_sync(signal, sender, ctx)          trigger(signal, sender, ctx).await
//!     │                                          │
//!     ├─► kind == Sync? ── no ─► Discipline      ├─► kind == Async? ── no ─► Discipline
//!     ▼                                          ▼
//!   hook1.call() ──► Reply                     schedule(hook1) ──► awaited ──► value
//!   hook2.call() ──► Reply                     schedule(hook2) ──► detached (logged on error)
//!   hook3.call() ──► Reply                     schedule(hook3) ──► detached (logged on error)
//!     ▼                                          ▼
//!   Vec<Reply> (fail-fast on first Err)        first hook's resolved value
//! ```
//!
//! ## Rules
//! - Invocation order equals subscription order, for both disciplines.
//! - `trigger_sync` never suspends: the whole chain runs within one turn.
//! - `trigger` suspends only while awaiting the first hook's computation.
//! - Zero subscribers: `trigger_sync` returns an empty reply list;
//!   `trigger` returns `Ok(None)` without suspending.
//! - Every async hook is scheduled, so hooks 2..n run for side effects
//!   even though their values are discarded by contract; their failures
//!   are logged at warn level, never surfaced.

use std::sync::Arc;

use futures::FutureExt;
use serde_json::Value;

use crate::dispatch::context::{Context, Sender};
use crate::dispatch::scheduler::{Schedule, TokioSpawner};
use crate::error::BusError;
use crate::signals::{Signal, SignalKind};

/// One synchronous hook's return value, paired with the hook name.
///
/// Callers of pure notification signals typically ignore these.
#[derive(Debug, Clone)]
pub struct Reply {
    /// Name of the hook that produced the value.
    pub hook: Arc<str>,
    /// The hook's return value, if any.
    pub value: Option<Value>,
}

/// The two trigger entry points over a shared scheduler adapter.
///
/// The scheduler is injected at construction, so the bus never discovers a
/// global loop instance and tests can substitute their own adapter.
pub struct Dispatcher {
    scheduler: Arc<dyn Schedule>,
}

impl Dispatcher {
    /// Creates a dispatcher over the given scheduler adapter.
    pub fn new(scheduler: Arc<dyn Schedule>) -> Self {
        Self { scheduler }
    }

    /// Triggers a synchronous signal.
    ///
    /// Invokes every subscribed hook in subscription order, on the calling
    /// turn, to completion, and returns each hook's value paired with its
    /// name. Fail-fast: the first hook `Err` propagates immediately and
    /// aborts the remaining hooks; earlier hooks' effects persist.
    ///
    /// Fails with [`BusError::Discipline`] when `signal` is asynchronous.
    pub fn trigger_sync(
        &self,
        signal: &Signal,
        sender: &Sender,
        ctx: &Context,
    ) -> Result<Vec<Reply>, BusError> {
        tracing::debug!(signal = signal.name(), %sender, "trigger synchronous signal");
        if !signal.is_sync() {
            return Err(BusError::discipline(
                signal.name_arc(),
                signal.kind(),
                SignalKind::Sync,
            ));
        }

        let hooks = signal.sync_hooks();
        let mut replies = Vec::with_capacity(hooks.len());
        for hook in hooks {
            let value = hook.call(sender, ctx)?;
            replies.push(Reply {
                hook: hook.name().into(),
                value,
            });
        }
        Ok(replies)
    }

    /// Triggers an asynchronous signal.
    ///
    /// Every subscribed hook's computation is handed to the scheduler in
    /// subscription order; only the first subscriber's computation is
    /// awaited, and its resolved value is returned to the caller. With zero
    /// subscribers this returns `Ok(None)` without suspending.
    ///
    /// An error from the awaited first hook propagates as
    /// [`BusError::Hook`]. Errors from hooks 2..n are logged and discarded.
    ///
    /// Fails with [`BusError::Discipline`] when `signal` is synchronous.
    pub async fn trigger(
        &self,
        signal: &Signal,
        sender: &Sender,
        ctx: Context,
    ) -> Result<Option<Value>, BusError> {
        tracing::debug!(signal = signal.name(), %sender, "trigger asynchronous signal");
        if !signal.is_async() {
            return Err(BusError::discipline(
                signal.name_arc(),
                signal.kind(),
                SignalKind::Async,
            ));
        }

        let ctx = Arc::new(ctx);
        let mut hooks = signal.async_hooks().into_iter();
        let Some(first_hook) = hooks.next() else {
            return Ok(None);
        };

        let first = {
            let sender = sender.clone();
            let ctx = Arc::clone(&ctx);
            self.scheduler
                .schedule(async move { first_hook.call(sender, ctx).await }.boxed())
        };

        for hook in hooks {
            let hook_name: Arc<str> = hook.name().into();
            let signal_name = Arc::clone(signal.name_arc());
            let sender = sender.clone();
            let ctx = Arc::clone(&ctx);
            // Detached: the scheduler keeps driving it; the value is
            // discarded by the dispatch contract, the error is not.
            let _ = self.scheduler.schedule(
                async move {
                    if let Err(err) = hook.call(sender, ctx).await {
                        tracing::warn!(
                            signal = %signal_name,
                            hook = %hook_name,
                            error = %err,
                            "side-effect hook failed"
                        );
                    }
                    Ok(None)
                }
                .boxed(),
            );
        }

        Ok(first.await?)
    }
}

impl Default for Dispatcher {
    /// Dispatcher over [`TokioSpawner`].
    fn default() -> Self {
        Self::new(Arc::new(TokioSpawner))
    }
}
