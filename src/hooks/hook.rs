//! # Hook traits.
//!
//! Provides [`SyncHook`] and [`AsyncHook`], the extension points for
//! plugging external code into lifecycle signals.
//!
//! Both shapes resolve to a [`HookResult`]: `Ok(Some(value))` to hand a
//! value back to the dispatcher, `Ok(None)` for pure notification, `Err`
//! to report a failure. How that result travels depends on the discipline:
//! synchronous dispatch collects every hook's value and fails fast on the
//! first error; asynchronous dispatch returns only the first hook's
//! resolved value to the trigger caller.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::dispatch::{Context, Sender};
use crate::error::HookError;

/// Outcome of a single hook invocation.
pub type HookResult = Result<Option<Value>, HookError>;

/// Shared handle to a synchronous hook.
pub type SyncHookRef = Arc<dyn SyncHook>;

/// Shared handle to an asynchronous hook.
pub type AsyncHookRef = Arc<dyn AsyncHook>;

/// # Synchronous lifecycle hook.
///
/// Runs on the calling turn, to completion, with no suspension. Used for
/// startup/shutdown-phase signals where a broken extension should halt
/// configuration rather than run degraded.
///
/// ### Implementation requirements
/// - Do not block: these run inside the host loop's turn.
/// - Report failures through `Err`; do not panic.
pub trait SyncHook: Send + Sync + 'static {
    /// Returns the hook name used in logs and dispatch replies.
    ///
    /// Prefer short, descriptive names (e.g., "config-audit", "cache").
    /// The default uses `type_name::<Self>()`, which can be verbose -
    /// override it when possible.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Processes a single dispatch.
    ///
    /// Called in subscription order with the trigger's sender and context.
    fn call(&self, sender: &Sender, ctx: &Context) -> HookResult;
}

/// # Asynchronous lifecycle hook.
///
/// Produces a pending computation that the dispatcher registers with the
/// host loop through the scheduler adapter. The first subscriber of a
/// signal is special: its resolved value is awaited and returned to the
/// trigger caller, which lets exactly one extension veto or replace default
/// pipeline behavior. Later subscribers still run for side effects, but
/// their values are discarded.
///
/// ### Implementation requirements
/// - Use async I/O; avoid blocking the executor.
/// - Failures from non-first subscribers are logged, not surfaced - do not
///   rely on the caller seeing them.
#[async_trait]
pub trait AsyncHook: Send + Sync + 'static {
    /// Returns the hook name used in logs.
    ///
    /// The default uses `type_name::<Self>()` - override it when possible.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Processes a single dispatch.
    ///
    /// Receives an owned sender and a shared context so the computation can
    /// outlive the trigger call (the scheduler may still be driving it
    /// after the caller has its answer).
    async fn call(&self, sender: Sender, ctx: Arc<Context>) -> HookResult;
}
