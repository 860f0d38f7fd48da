//! # Lifecycle catalog: every signal of the request lifecycle.
//!
//! [`Lifecycle`] owns the [`Registry`] and eagerly creates the full,
//! compile-time-known set of signals, grouped by phase:
//!
//! - [`ServerSignals`] - process startup/shutdown (synchronous)
//! - [`ImagingSignals`] - per-request imaging flow (asynchronous)
//! - [`EngineSignals`] - engine operations (asynchronous, with one
//!   synchronous exception)
//! - [`HealthcheckSignals`] - health probes (asynchronous)
//!
//! Groups exist purely for readability and namespacing; no behavior is
//! attached to a group. The catalog is constructed explicitly at process
//! start and treated as read-only thereafter, except for the subscriber
//! list each signal owns.
//!
//! ## Example
//! ```rust
//! use stagebus::{Lifecycle, SignalKind};
//!
//! let lifecycle = Lifecycle::new();
//! assert_eq!(lifecycle.server.after_config.kind(), SignalKind::Sync);
//! assert_eq!(lifecycle.imaging.received.name(), "imaging.received");
//! ```

use std::sync::Arc;

use crate::error::BusError;
use crate::signals::registry::Registry;
use crate::signals::signal::{Signal, SignalKind};

/// Server lifecycle signals.
///
/// All synchronous: they gate startup/shutdown correctness, so a broken
/// extension halts configuration instead of running degraded.
pub struct ServerSignals {
    // Server parameter parsing
    pub before_server_parameters: Arc<Signal>,
    pub after_server_parameters: Arc<Signal>,

    // Configuration loading
    pub before_config: Arc<Signal>,
    pub after_config: Arc<Signal>,

    // Log configuration
    pub before_log_configuration: Arc<Signal>,
    pub after_log_configuration: Arc<Signal>,

    // Importer loading
    pub before_importer: Arc<Signal>,
    pub after_importer: Arc<Signal>,

    // Application start
    pub before_application_start: Arc<Signal>,
    pub after_application_start: Arc<Signal>,

    // Application handlers
    pub before_app_handlers: Arc<Signal>,
    pub after_app_handlers: Arc<Signal>,

    // Server run
    pub before_server_run: Arc<Signal>,
    pub after_server_run: Arc<Signal>,
    pub before_server_block: Arc<Signal>,
}

impl ServerSignals {
    fn register(reg: &Registry) -> Self {
        let sync = |name| reg.intern(name, SignalKind::Sync);
        Self {
            before_server_parameters: sync("server.before_server_parameters"),
            after_server_parameters: sync("server.after_server_parameters"),
            before_config: sync("server.before_config"),
            after_config: sync("server.after_config"),
            before_log_configuration: sync("server.before_log_configuration"),
            after_log_configuration: sync("server.after_log_configuration"),
            before_importer: sync("server.before_importer"),
            after_importer: sync("server.after_importer"),
            before_application_start: sync("server.before_application_start"),
            after_application_start: sync("server.after_application_start"),
            before_app_handlers: sync("server.before_app_handlers"),
            after_app_handlers: sync("server.after_app_handlers"),
            before_server_run: sync("server.before_server_run"),
            after_server_run: sync("server.after_server_run"),
            before_server_block: sync("server.before_server_block"),
        }
    }
}

/// Imaging signals, fired while handling an image request.
///
/// All asynchronous: the first subscriber's resolved value lets an
/// extension short-circuit the request (e.g., supply a cached response).
pub struct ImagingSignals {
    pub before_finish_request: Arc<Signal>,
    pub after_finish_request: Arc<Signal>,

    /// Fired before anything else is done with a received request.
    pub received: Arc<Signal>,

    // Argument parsing
    pub before_parsing_arguments: Arc<Signal>,
    pub after_parsing_arguments: Arc<Signal>,

    // Source image loading
    pub before_loading_source_image: Arc<Signal>,
    pub loading_source_image: Arc<Signal>,
    pub after_loading_source_image: Arc<Signal>,
    pub source_image_not_found: Arc<Signal>,
    pub source_image_already_loaded: Arc<Signal>,

    // Image transformation
    pub before_transforming_image: Arc<Signal>,
    pub after_transforming_image: Arc<Signal>,
}

impl ImagingSignals {
    fn register(reg: &Registry) -> Self {
        let asyn = |name| reg.intern(name, SignalKind::Async);
        Self {
            before_finish_request: asyn("imaging.before_finish_request"),
            after_finish_request: asyn("imaging.after_finish_request"),
            received: asyn("imaging.received"),
            before_parsing_arguments: asyn("imaging.before_parsing_arguments"),
            after_parsing_arguments: asyn("imaging.after_parsing_arguments"),
            before_loading_source_image: asyn("imaging.before_loading_source_image"),
            loading_source_image: asyn("imaging.loading_source_image"),
            after_loading_source_image: asyn("imaging.after_loading_source_image"),
            source_image_not_found: asyn("imaging.source_image_not_found"),
            source_image_already_loaded: asyn("imaging.source_image_already_loaded"),
            before_transforming_image: asyn("imaging.before_transforming_image"),
            after_transforming_image: asyn("imaging.after_transforming_image"),
        }
    }
}

/// Engine operation signals.
///
/// Each operation forms a before/operation/after triad; the operation
/// signal's first subscriber supplies the result (the engine
/// implementation itself is an ordinary subscriber). Asynchronous, except
/// the focal-points triad, which is synchronous by exception - note that
/// its names violate the `"server"` naming convention, which is why
/// name-based lookup resolves these from the registry rather than
/// inferring their kind.
pub struct EngineSignals {
    pub before_read_image: Arc<Signal>,
    pub read_image: Arc<Signal>,
    pub after_read_image: Arc<Signal>,

    pub before_resize: Arc<Signal>,
    pub resize: Arc<Signal>,
    pub after_resize: Arc<Signal>,

    pub before_crop: Arc<Signal>,
    pub crop: Arc<Signal>,
    pub after_crop: Arc<Signal>,

    pub before_reorientate: Arc<Signal>,
    pub reorientate: Arc<Signal>,
    pub after_reorientate: Arc<Signal>,

    pub before_serialize: Arc<Signal>,
    pub serialize: Arc<Signal>,
    pub after_serialize: Arc<Signal>,

    /// Synchronous by exception to the group rule.
    pub before_focal_points_changed: Arc<Signal>,
    /// Synchronous by exception to the group rule.
    pub focal_points_changed: Arc<Signal>,
    /// Synchronous by exception to the group rule.
    pub after_focal_points_changed: Arc<Signal>,

    pub get_image_data_as_rgb: Arc<Signal>,
    pub get_image_size: Arc<Signal>,
}

impl EngineSignals {
    fn register(reg: &Registry) -> Self {
        let asyn = |name| reg.intern(name, SignalKind::Async);
        let sync = |name| reg.intern(name, SignalKind::Sync);
        Self {
            before_read_image: asyn("engine.before_read_image"),
            read_image: asyn("engine.read_image"),
            after_read_image: asyn("engine.after_read_image"),
            before_resize: asyn("engine.before_resize"),
            resize: asyn("engine.resize"),
            after_resize: asyn("engine.after_resize"),
            before_crop: asyn("engine.before_crop"),
            crop: asyn("engine.crop"),
            after_crop: asyn("engine.after_crop"),
            before_reorientate: asyn("engine.before_reorientate"),
            reorientate: asyn("engine.reorientate"),
            after_reorientate: asyn("engine.after_reorientate"),
            before_serialize: asyn("engine.before_serialize"),
            serialize: asyn("engine.serialize"),
            after_serialize: asyn("engine.after_serialize"),
            before_focal_points_changed: sync("engine.before_focal_points_changed"),
            focal_points_changed: sync("engine.focal_points_changed"),
            after_focal_points_changed: sync("engine.after_focal_points_changed"),
            get_image_data_as_rgb: asyn("engine.get_image_data_as_rgb"),
            get_image_size: asyn("engine.get_image_size"),
        }
    }
}

/// Healthcheck signals.
pub struct HealthcheckSignals {
    pub before_healthcheck: Arc<Signal>,
    /// The first subscriber supplies the health payload.
    pub execute: Arc<Signal>,
    pub after_healthcheck: Arc<Signal>,
}

impl HealthcheckSignals {
    fn register(reg: &Registry) -> Self {
        let asyn = |name| reg.intern(name, SignalKind::Async);
        Self {
            before_healthcheck: asyn("healthcheck.before_healthcheck"),
            execute: asyn("healthcheck.execute"),
            after_healthcheck: asyn("healthcheck.after_healthcheck"),
        }
    }
}

/// The request-lifecycle catalog.
///
/// Owns the registry and the four signal groups. Create one per process at
/// startup and share it (`Lifecycle` is cheap to wrap in `Arc`); signals
/// live for the process lifetime and are never destroyed.
pub struct Lifecycle {
    registry: Arc<Registry>,

    pub server: ServerSignals,
    pub imaging: ImagingSignals,
    pub engine: EngineSignals,
    pub healthcheck: HealthcheckSignals,
}

impl Lifecycle {
    /// Creates the catalog, eagerly registering every lifecycle signal.
    pub fn new() -> Self {
        let registry = Arc::new(Registry::new());
        Self {
            server: ServerSignals::register(&registry),
            imaging: ImagingSignals::register(&registry),
            engine: EngineSignals::register(&registry),
            healthcheck: HealthcheckSignals::register(&registry),
            registry,
        }
    }

    /// Returns the underlying registry.
    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    /// Name-based lookup; see [`Registry::get`].
    pub fn get(&self, name: &str) -> Arc<Signal> {
        self.registry.get(name)
    }

    /// Exact lookup; see [`Registry::resolve`].
    pub fn resolve(&self, name: &str) -> Result<Arc<Signal>, BusError> {
        self.registry.resolve(name)
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_registers_all_signals() {
        let lifecycle = Lifecycle::new();
        assert_eq!(lifecycle.registry().len(), 50);
    }

    #[test]
    fn test_server_signals_are_sync() {
        let lifecycle = Lifecycle::new();
        let server = &lifecycle.server;
        for signal in [
            &server.before_server_parameters,
            &server.after_server_parameters,
            &server.before_config,
            &server.after_config,
            &server.before_log_configuration,
            &server.after_log_configuration,
            &server.before_importer,
            &server.after_importer,
            &server.before_application_start,
            &server.after_application_start,
            &server.before_app_handlers,
            &server.after_app_handlers,
            &server.before_server_run,
            &server.after_server_run,
            &server.before_server_block,
        ] {
            assert_eq!(signal.kind(), SignalKind::Sync, "{}", signal.name());
        }
    }

    #[test]
    fn test_imaging_and_healthcheck_signals_are_async() {
        let lifecycle = Lifecycle::new();
        for signal in [
            &lifecycle.imaging.received,
            &lifecycle.imaging.before_finish_request,
            &lifecycle.imaging.source_image_not_found,
            &lifecycle.healthcheck.before_healthcheck,
            &lifecycle.healthcheck.execute,
            &lifecycle.healthcheck.after_healthcheck,
        ] {
            assert_eq!(signal.kind(), SignalKind::Async, "{}", signal.name());
        }
    }

    #[test]
    fn test_focal_points_triad_is_sync_by_exception() {
        let lifecycle = Lifecycle::new();
        let engine = &lifecycle.engine;
        assert_eq!(engine.resize.kind(), SignalKind::Async);
        assert_eq!(engine.get_image_size.kind(), SignalKind::Async);
        for signal in [
            &engine.before_focal_points_changed,
            &engine.focal_points_changed,
            &engine.after_focal_points_changed,
        ] {
            assert_eq!(signal.kind(), SignalKind::Sync, "{}", signal.name());
        }
    }

    #[test]
    fn test_catalog_field_and_resolve_share_signal() {
        let lifecycle = Lifecycle::new();
        let via_field = &lifecycle.imaging.received;
        let via_name = lifecycle.resolve("imaging.received").expect("registered");
        assert!(Arc::ptr_eq(via_field, &via_name));
    }

    #[test]
    fn test_name_based_lookup_matches_catalog_kinds() {
        let lifecycle = Lifecycle::new();
        assert_eq!(
            lifecycle.get("server.after_config").kind(),
            SignalKind::Sync
        );
        assert_eq!(lifecycle.get("imaging.received").kind(), SignalKind::Async);
    }

    #[test]
    fn test_get_resolves_registered_exception_before_convention() {
        let lifecycle = Lifecycle::new();
        // No "server" in the name, but registered as sync: registry wins.
        let signal = lifecycle.get("engine.focal_points_changed");
        assert_eq!(signal.kind(), SignalKind::Sync);
        // An unregistered extension name falls back to the convention.
        let ext = lifecycle.get("imaging.extension_stage");
        assert_eq!(ext.kind(), SignalKind::Async);
    }
}
