//! # Scheduler adapter: hands pending hook computations to the host loop.
//!
//! Provides [`Schedule`] - the seam between the dispatcher and the host
//! executor - and [`TokioSpawner`], its production implementation.
//!
//! A hook that returns a pending computation has *started* async work; the
//! loop must drive that work to completion even when nobody awaits the
//! result (subscribers 2..n of an asynchronous dispatch). [`Schedule::schedule`]
//! registers the computation with the executor and returns a [`Scheduled`]
//! handle the dispatcher can itself await for the one computation whose
//! result it returns to the caller.
//!
//! ## Rules
//! - Scheduling must not block and must not poll the computation inline.
//! - Dropping the [`Scheduled`] handle must not cancel the computation.
//! - A panic inside the computation surfaces as [`HookError::Panicked`]
//!   through the handle instead of tearing down the loop.
//!
//! The adapter is injected into [`Dispatcher::new`](crate::Dispatcher::new),
//! so tests can substitute a recording implementation.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context as TaskContext, Poll};

use futures::future::BoxFuture;

use crate::error::HookError;
use crate::hooks::HookResult;

/// Host-loop scheduling seam.
///
/// Implementations register the computation with their executor so it
/// progresses without being actively polled by the dispatcher.
pub trait Schedule: Send + Sync + 'static {
    /// Registers `fut` with the host executor and returns an awaitable
    /// handle to its eventual result.
    fn schedule(&self, fut: BoxFuture<'static, HookResult>) -> Scheduled;
}

/// Awaitable handle to a scheduled hook computation.
pub struct Scheduled {
    inner: BoxFuture<'static, HookResult>,
}

impl Scheduled {
    /// Wraps the future an implementation uses to observe its executor's
    /// completion of the scheduled computation.
    pub fn new(inner: BoxFuture<'static, HookResult>) -> Self {
        Self { inner }
    }
}

impl Future for Scheduled {
    type Output = HookResult;

    fn poll(mut self: Pin<&mut Self>, cx: &mut TaskContext<'_>) -> Poll<Self::Output> {
        self.inner.as_mut().poll(cx)
    }
}

/// Production scheduler backed by `tokio::spawn`.
///
/// The spawned task is owned by the runtime, so it runs to completion even
/// if the [`Scheduled`] handle is dropped. On a current-thread runtime this
/// preserves the cooperative model: the computation advances whenever the
/// loop turns, never in parallel with the caller.
///
/// Must be used from within a Tokio runtime.
pub struct TokioSpawner;

impl Schedule for TokioSpawner {
    fn schedule(&self, fut: BoxFuture<'static, HookResult>) -> Scheduled {
        let handle = tokio::spawn(fut);
        Scheduled::new(Box::pin(async move {
            match handle.await {
                Ok(result) => result,
                Err(err) if err.is_panic() => {
                    let any = err.into_panic();
                    let reason = if let Some(msg) = any.downcast_ref::<&'static str>() {
                        (*msg).to_string()
                    } else if let Some(msg) = any.downcast_ref::<String>() {
                        msg.clone()
                    } else {
                        "unknown panic".to_string()
                    };
                    Err(HookError::Panicked { reason })
                }
                Err(_) => Err(HookError::fail("scheduled computation was cancelled")),
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::FutureExt;
    use serde_json::json;
    use std::sync::Arc;
    use tokio::sync::Notify;

    #[tokio::test]
    async fn test_scheduled_value_passes_through() {
        let scheduler = TokioSpawner;
        let scheduled = scheduler.schedule(async { Ok(Some(json!("X"))) }.boxed());
        assert_eq!(scheduled.await.expect("hook ok"), Some(json!("X")));
    }

    #[tokio::test]
    async fn test_unawaited_computation_still_completes() {
        let scheduler = TokioSpawner;
        let done = Arc::new(Notify::new());
        let done_tx = Arc::clone(&done);

        let scheduled = scheduler.schedule(
            async move {
                done_tx.notify_one();
                Ok(None)
            }
            .boxed(),
        );
        drop(scheduled);

        // The loop still drives the detached task to completion.
        done.notified().await;
    }

    #[tokio::test]
    async fn test_panic_is_contained() {
        let scheduler = TokioSpawner;
        let scheduled = scheduler.schedule(async { panic!("boom") }.boxed());
        let err = scheduled.await.expect_err("panicked");
        match err {
            HookError::Panicked { reason } => assert_eq!(reason, "boom"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
