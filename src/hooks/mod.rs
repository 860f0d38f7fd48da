//! # Lifecycle hooks: the two subscriber capability shapes.
//!
//! A hook is external code attached to a signal. The bus distinguishes two
//! shapes, one per dispatch discipline:
//!
//! - [`SyncHook`] — a plain callable, run to completion on the triggering
//!   turn. Attachable only to synchronous signals.
//! - [`AsyncHook`] — a callable producing a pending computation, driven by
//!   the host loop through the scheduler adapter. Attachable only to
//!   asynchronous signals.
//!
//! Attaching the wrong shape fails with a discipline error; the two worlds
//! never silently cross.
//!
//! ## Implementing hooks
//! Implement the trait for struct-backed hooks, or wrap a closure with
//! [`SyncHookFn`] / [`AsyncHookFn`]:
//! ```rust
//! use stagebus::{AsyncHook, AsyncHookFn, Context, Sender};
//! use std::sync::Arc;
//!
//! let hook = AsyncHookFn::arc("resize", |_sender: Sender, ctx: Arc<Context>| async move {
//!     let width = ctx.get_u64("width").unwrap_or(0);
//!     Ok(Some(serde_json::json!({ "width": width })))
//! });
//! assert_eq!(hook.name(), "resize");
//! ```

mod hook;
mod hook_fn;

pub use hook::{AsyncHook, AsyncHookRef, HookResult, SyncHook, SyncHookRef};
pub use hook_fn::{AsyncHookFn, SyncHookFn};
