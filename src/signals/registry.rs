//! # Signal registry: exact lookup and name-based resolution.
//!
//! The [`Registry`] maps dotted names to [`Signal`]s. It is an explicit
//! value owned by the [`Lifecycle`](crate::Lifecycle) catalog and threaded
//! through; there is no process-wide global constructed at import time.
//!
//! ## Lookup paths
//! - [`Registry::resolve`] - exact lookup, errors on a miss.
//! - [`Registry::get`] - registry-first: exact lookup, then lazy creation
//!   with the kind inferred by [`kind_for_name`]. This exists so extension
//!   code can subscribe by string without importing the catalog.
//!
//! ## Rules
//! - Pre-registered signals always win over the naming heuristic, so the
//!   convention-violating focal-points triad resolves to its registered
//!   synchronous signals.
//! - Lazy creation is logged at debug level with the inferred kind.

use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::error::BusError;
use crate::signals::signal::{Signal, SignalKind};

/// Infers a signal kind from its dotted name.
///
/// Names containing the substring `"server"` are synchronous; all others
/// are asynchronous. This is a naming convention, not a registry lookup:
/// a signal whose name violates the convention will be mis-classified on
/// this path. Callers creating signals lazily must follow the convention
/// strictly; pre-registered signals are exempt because [`Registry::get`]
/// resolves them by exact name first.
pub fn kind_for_name(name: &str) -> SignalKind {
    if name.contains("server") {
        SignalKind::Sync
    } else {
        SignalKind::Async
    }
}

/// Name-keyed catalog of signals.
///
/// Created once at process start (through [`Lifecycle::new`](crate::Lifecycle::new))
/// and read-only thereafter except for the mutable subscriber list each
/// signal owns and for lazy creation through [`Registry::get`].
pub struct Registry {
    signals: RwLock<BTreeMap<Arc<str>, Arc<Signal>>>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            signals: RwLock::new(BTreeMap::new()),
        }
    }

    /// Creates and registers a signal with an explicit kind.
    ///
    /// Fails with [`BusError::Duplicate`] if the name is already taken.
    pub fn create(&self, name: &str, kind: SignalKind) -> Result<Arc<Signal>, BusError> {
        let mut map = self.signals.write().unwrap_or_else(PoisonError::into_inner);
        if map.contains_key(name) {
            return Err(BusError::Duplicate {
                name: name.to_string(),
            });
        }
        let signal = Signal::new(name, kind);
        map.insert(Arc::from(name), Arc::clone(&signal));
        Ok(signal)
    }

    /// Exact lookup by dotted name.
    ///
    /// Fails with [`BusError::NotFound`] if no signal is registered under
    /// the name.
    pub fn resolve(&self, name: &str) -> Result<Arc<Signal>, BusError> {
        let map = self.signals.read().unwrap_or_else(PoisonError::into_inner);
        map.get(name)
            .cloned()
            .ok_or_else(|| BusError::NotFound {
                name: name.to_string(),
            })
    }

    /// Returns the signal under `name`, creating it lazily if absent.
    ///
    /// Exact lookup first; on a miss the signal is created with the kind
    /// inferred by [`kind_for_name`] and registered. Extension code relying
    /// on this path must follow the naming convention strictly.
    pub fn get(&self, name: &str) -> Arc<Signal> {
        if let Ok(signal) = self.resolve(name) {
            return signal;
        }
        let kind = kind_for_name(name);
        let mut map = self.signals.write().unwrap_or_else(PoisonError::into_inner);
        // Re-check under the write lock: another caller may have won the race.
        if let Some(signal) = map.get(name) {
            return Arc::clone(signal);
        }
        tracing::debug!(signal = name, %kind, "lazily creating signal by naming convention");
        let signal = Signal::new(name, kind);
        map.insert(Arc::from(name), Arc::clone(&signal));
        signal
    }

    /// Registers a catalog signal, returning the existing one on a re-run.
    ///
    /// Catalog names are distinct literals, so on the fresh registry the
    /// catalog constructor uses this always creates.
    pub(crate) fn intern(&self, name: &'static str, kind: SignalKind) -> Arc<Signal> {
        let mut map = self.signals.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(signal) = map.get(name) {
            return Arc::clone(signal);
        }
        let signal = Signal::new(name, kind);
        map.insert(Arc::from(name), Arc::clone(&signal));
        signal
    }

    /// Number of registered signals.
    pub fn len(&self) -> usize {
        let map = self.signals.read().unwrap_or_else(PoisonError::into_inner);
        map.len()
    }

    /// Whether the registry holds no signals.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<Arc<str>> {
        let map = self.signals.read().unwrap_or_else(PoisonError::into_inner);
        map.keys().cloned().collect()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_then_resolve() {
        let reg = Registry::new();
        let created = reg
            .create("imaging.received", SignalKind::Async)
            .expect("fresh name");
        let resolved = reg.resolve("imaging.received").expect("registered");
        assert!(Arc::ptr_eq(&created, &resolved));
    }

    #[test]
    fn test_create_duplicate_fails() {
        let reg = Registry::new();
        reg.create("server.before_config", SignalKind::Sync)
            .expect("fresh name");
        let err = reg
            .create("server.before_config", SignalKind::Sync)
            .expect_err("duplicate");
        assert!(matches!(err, BusError::Duplicate { .. }));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn test_resolve_unknown_fails() {
        let reg = Registry::new();
        let err = reg.resolve("imaging.never_registered").expect_err("miss");
        assert!(matches!(err, BusError::NotFound { .. }));
    }

    #[test]
    fn test_kind_for_name_convention() {
        assert_eq!(kind_for_name("server.after_config"), SignalKind::Sync);
        assert_eq!(kind_for_name("imaging.received"), SignalKind::Async);
        assert_eq!(kind_for_name("engine.resize"), SignalKind::Async);
        // Fragility of the convention: "server" anywhere in the name wins.
        assert_eq!(kind_for_name("imaging.server_side"), SignalKind::Sync);
    }

    #[test]
    fn test_get_lazily_creates_by_convention() {
        let reg = Registry::new();
        let sync = reg.get("server.custom_extension");
        assert_eq!(sync.kind(), SignalKind::Sync);
        let asynch = reg.get("imaging.custom_extension");
        assert_eq!(asynch.kind(), SignalKind::Async);
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn test_get_returns_same_signal_on_repeat() {
        let reg = Registry::new();
        let a = reg.get("engine.custom");
        let b = reg.get("engine.custom");
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn test_get_prefers_registered_over_convention() {
        let reg = Registry::new();
        // Registered as sync even though the name lacks "server".
        reg.create("engine.focal_points_changed", SignalKind::Sync)
            .expect("fresh name");
        let signal = reg.get("engine.focal_points_changed");
        assert_eq!(signal.kind(), SignalKind::Sync);
    }
}
