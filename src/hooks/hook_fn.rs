//! # Function-backed hooks (`SyncHookFn`, `AsyncHookFn`)
//!
//! Wrap a closure so it can be subscribed without a named type. The async
//! variant wraps `F: Fn(Sender, Arc<Context>) -> Fut`, producing a fresh
//! future per dispatch; there is no shared mutable state unless the closure
//! captures an `Arc<...>` explicitly.
//!
//! ## Example
//! ```rust
//! use stagebus::{Context, Sender, SyncHookFn, SyncHook};
//!
//! let hook = SyncHookFn::arc("startup-flag", |_sender: &Sender, _ctx: &Context| Ok(None));
//! assert_eq!(hook.name(), "startup-flag");
//! ```

use std::borrow::Cow;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;

use crate::dispatch::{Context, Sender};
use crate::hooks::hook::{AsyncHook, HookResult, SyncHook};

/// Function-backed synchronous hook.
pub struct SyncHookFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> SyncHookFn<F> {
    /// Creates a new function-backed hook.
    ///
    /// Prefer [`SyncHookFn::arc`] when you immediately need a
    /// [`SyncHookRef`](crate::SyncHookRef).
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }

    /// Creates the hook and returns it as a shared handle.
    pub fn arc(name: impl Into<Cow<'static, str>>, f: F) -> Arc<Self> {
        Arc::new(Self::new(name, f))
    }
}

impl<F> SyncHook for SyncHookFn<F>
where
    F: Fn(&Sender, &Context) -> HookResult + Send + Sync + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn call(&self, sender: &Sender, ctx: &Context) -> HookResult {
        (self.f)(sender, ctx)
    }
}

/// Function-backed asynchronous hook.
///
/// Wraps a closure that *creates* a new future per dispatch.
pub struct AsyncHookFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> AsyncHookFn<F> {
    /// Creates a new function-backed hook.
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }

    /// Creates the hook and returns it as a shared handle.
    ///
    /// ## Example
    /// ```rust
    /// use stagebus::{AsyncHook, AsyncHookFn, Context, Sender};
    /// use std::sync::Arc;
    ///
    /// let hook = AsyncHookFn::arc("noop", |_s: Sender, _c: Arc<Context>| async { Ok(None) });
    /// assert_eq!(hook.name(), "noop");
    /// ```
    pub fn arc(name: impl Into<Cow<'static, str>>, f: F) -> Arc<Self> {
        Arc::new(Self::new(name, f))
    }
}

#[async_trait]
impl<F, Fut> AsyncHook for AsyncHookFn<F>
where
    F: Fn(Sender, Arc<Context>) -> Fut + Send + Sync + 'static, // Fn, not FnMut
    Fut: Future<Output = HookResult> + Send + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    async fn call(&self, sender: Sender, ctx: Arc<Context>) -> HookResult {
        (self.f)(sender, ctx).await
    }
}
