//! # Signals: named, kind-tagged subscription channels.
//!
//! A [`Signal`] is an addressable channel carrying an ordered list of
//! subscribed hooks. The [`SignalKind`] tag is fixed at creation and
//! decides both which hook shape may attach and which trigger entry point
//! may dispatch it.
//!
//! ## Rules
//! - Kind never changes after creation.
//! - Invocation order equals subscription order.
//! - Duplicate subscriptions are allowed; the hook runs once per entry.
//! - There is no unsubscribe; subscriptions last for the process lifetime.
//!
//! ## Example
//! ```rust
//! use stagebus::{Context, Lifecycle, Sender, SyncHookFn};
//!
//! let lifecycle = Lifecycle::new();
//! let hook = SyncHookFn::arc("audit", |_s: &Sender, _c: &Context| Ok(None));
//! lifecycle.server.after_config.subscribe_sync(hook)?;
//! assert_eq!(lifecycle.server.after_config.subscriber_count(), 1);
//! # Ok::<(), stagebus::BusError>(())
//! ```

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use crate::error::BusError;
use crate::hooks::{AsyncHookRef, SyncHookRef};

/// Dispatch discipline of a signal, fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalKind {
    /// Dispatched on the calling turn; all hooks run to completion before
    /// the trigger call returns.
    Sync,
    /// Dispatched through the scheduler adapter; the first hook's resolved
    /// value may be awaited by the caller.
    Async,
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignalKind::Sync => f.write_str("synchronous"),
            SignalKind::Async => f.write_str("asynchronous"),
        }
    }
}

/// Subscriber list, tagged to match the signal kind.
///
/// The tag is decided once in [`Signal::new`] and the two worlds never mix:
/// a sync signal only ever holds sync hooks, and vice versa.
enum Subscribers {
    Sync(Vec<SyncHookRef>),
    Async(Vec<AsyncHookRef>),
}

/// A named lifecycle channel with an ordered list of subscribed hooks.
///
/// Signals are created by the [`Registry`](crate::Registry) (eagerly via the
/// [`Lifecycle`](crate::Lifecycle) catalog, or lazily via name-based lookup)
/// and shared as `Arc<Signal>` for the process lifetime.
pub struct Signal {
    name: Arc<str>,
    kind: SignalKind,
    subs: RwLock<Subscribers>,
}

impl Signal {
    pub(crate) fn new(name: impl Into<Arc<str>>, kind: SignalKind) -> Arc<Self> {
        let subs = match kind {
            SignalKind::Sync => Subscribers::Sync(Vec::new()),
            SignalKind::Async => Subscribers::Async(Vec::new()),
        };
        Arc::new(Self {
            name: name.into(),
            kind,
            subs: RwLock::new(subs),
        })
    }

    /// Returns the globally unique dotted name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn name_arc(&self) -> &Arc<str> {
        &self.name
    }

    /// Returns the dispatch discipline this signal was created with.
    pub fn kind(&self) -> SignalKind {
        self.kind
    }

    /// Whether this signal dispatches synchronously.
    pub fn is_sync(&self) -> bool {
        self.kind == SignalKind::Sync
    }

    /// Whether this signal dispatches asynchronously.
    pub fn is_async(&self) -> bool {
        self.kind == SignalKind::Async
    }

    /// Attaches a synchronous hook.
    ///
    /// Appends to the subscriber list; invocation order equals subscription
    /// order and duplicates are not collapsed. Fails with
    /// [`BusError::Discipline`] on an asynchronous signal.
    pub fn subscribe_sync(&self, hook: SyncHookRef) -> Result<(), BusError> {
        let mut subs = self.subs.write().unwrap_or_else(PoisonError::into_inner);
        match &mut *subs {
            Subscribers::Sync(list) => {
                tracing::debug!(signal = %self.name, hook = hook.name(), "subscribing hook");
                list.push(hook);
                Ok(())
            }
            Subscribers::Async(_) => {
                Err(BusError::discipline(&self.name, self.kind, SignalKind::Sync))
            }
        }
    }

    /// Attaches an asynchronous hook.
    ///
    /// Same ordering and duplicate semantics as [`Signal::subscribe_sync`].
    /// Fails with [`BusError::Discipline`] on a synchronous signal.
    pub fn subscribe_async(&self, hook: AsyncHookRef) -> Result<(), BusError> {
        let mut subs = self.subs.write().unwrap_or_else(PoisonError::into_inner);
        match &mut *subs {
            Subscribers::Async(list) => {
                tracing::debug!(signal = %self.name, hook = hook.name(), "subscribing hook");
                list.push(hook);
                Ok(())
            }
            Subscribers::Sync(_) => {
                Err(BusError::discipline(&self.name, self.kind, SignalKind::Async))
            }
        }
    }

    /// Number of attached hooks.
    pub fn subscriber_count(&self) -> usize {
        let subs = self.subs.read().unwrap_or_else(PoisonError::into_inner);
        match &*subs {
            Subscribers::Sync(list) => list.len(),
            Subscribers::Async(list) => list.len(),
        }
    }

    /// Snapshot of the sync subscriber list, in subscription order.
    ///
    /// Empty on an async signal; the dispatcher checks the kind first.
    pub(crate) fn sync_hooks(&self) -> Vec<SyncHookRef> {
        let subs = self.subs.read().unwrap_or_else(PoisonError::into_inner);
        match &*subs {
            Subscribers::Sync(list) => list.clone(),
            Subscribers::Async(_) => Vec::new(),
        }
    }

    /// Snapshot of the async subscriber list, in subscription order.
    pub(crate) fn async_hooks(&self) -> Vec<AsyncHookRef> {
        let subs = self.subs.read().unwrap_or_else(PoisonError::into_inner);
        match &*subs {
            Subscribers::Async(list) => list.clone(),
            Subscribers::Sync(_) => Vec::new(),
        }
    }
}

impl fmt::Debug for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
