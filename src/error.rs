//! Error types used by the signal bus and its hooks.
//!
//! This module defines two main error enums:
//!
//! - [`BusError`] — errors raised by the bus itself (registry lookups,
//!   discipline violations, propagated hook failures).
//! - [`HookError`] — errors raised by individual hook invocations.
//!
//! Both types provide an `as_label` helper for logging/metrics.

use std::sync::Arc;
use thiserror::Error;

use crate::signals::SignalKind;

/// # Errors produced by the signal bus.
///
/// These represent misuse of the bus API or failures surfaced through it.
/// A [`BusError::Discipline`] is a programming error in pipeline code, not
/// a runtime condition to retry.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum BusError {
    /// A signal was used through the wrong discipline: a synchronous signal
    /// dispatched via the async entry point (or vice versa), or a hook of
    /// the wrong shape attached to it.
    #[error("signal {name:?} is {kind}, not {expected}")]
    Discipline {
        /// Dotted name of the signal.
        name: Arc<str>,
        /// The kind the signal was created with.
        kind: SignalKind,
        /// The kind the caller's entry point requires.
        expected: SignalKind,
    },

    /// No signal is registered under the requested name.
    #[error("no signal registered as {name:?}")]
    NotFound {
        /// The name that failed to resolve.
        name: String,
    },

    /// A signal with this name already exists in the registry.
    #[error("signal {name:?} is already registered")]
    Duplicate {
        /// The colliding name.
        name: String,
    },

    /// A hook failed during dispatch.
    ///
    /// Synchronous dispatch propagates the first failing hook and aborts
    /// the remaining hooks for that call. Asynchronous dispatch propagates
    /// only a failure of the awaited first hook.
    #[error(transparent)]
    Hook(#[from] HookError),
}

impl BusError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use stagebus::BusError;
    ///
    /// let err = BusError::NotFound { name: "imaging.received".into() };
    /// assert_eq!(err.as_label(), "signal_not_found");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            BusError::Discipline { .. } => "signal_discipline",
            BusError::NotFound { .. } => "signal_not_found",
            BusError::Duplicate { .. } => "signal_duplicate",
            BusError::Hook(e) => e.as_label(),
        }
    }

    pub(crate) fn discipline(name: &Arc<str>, kind: SignalKind, expected: SignalKind) -> Self {
        BusError::Discipline {
            name: Arc::clone(name),
            kind,
            expected,
        }
    }
}

/// # Errors produced by hook invocations.
///
/// A hook either reports a failure itself ([`HookError::Fail`]) or panics,
/// in which case the scheduler adapter converts the panic into
/// [`HookError::Panicked`] instead of tearing down the host loop.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum HookError {
    /// The hook reported a failure.
    #[error("hook failed: {reason}")]
    Fail {
        /// The underlying failure message.
        reason: String,
    },

    /// The hook panicked while its computation was being driven.
    #[error("hook panicked: {reason}")]
    Panicked {
        /// Panic payload, if it could be extracted.
        reason: String,
    },
}

impl HookError {
    /// Creates a reported failure from any displayable reason.
    ///
    /// # Example
    /// ```
    /// use stagebus::HookError;
    ///
    /// let err = HookError::fail("cache miss");
    /// assert_eq!(err.as_label(), "hook_failed");
    /// ```
    pub fn fail(reason: impl Into<String>) -> Self {
        HookError::Fail {
            reason: reason.into(),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            HookError::Fail { .. } => "hook_failed",
            HookError::Panicked { .. } => "hook_panicked",
        }
    }
}
