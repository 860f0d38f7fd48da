//! Signals: data model, registry and the lifecycle catalog.
//!
//! This module groups the signal **data model** and the **catalog** used
//! to address lifecycle signals by field or by dotted name.
//!
//! ## Contents
//! - [`SignalKind`], [`Signal`] kind tag, subscriber list
//! - [`Registry`], [`kind_for_name`] exact and convention-based lookup
//! - [`Lifecycle`] and the per-phase groups ([`ServerSignals`],
//!   [`ImagingSignals`], [`EngineSignals`], [`HealthcheckSignals`])
//!
//! ## Quick reference
//! - **Producers**: pipeline stages trigger signals through the
//!   [`Dispatcher`](crate::Dispatcher).
//! - **Consumers**: extensions attach hooks via [`Signal::subscribe_sync`]
//!   / [`Signal::subscribe_async`], either through a catalog field or via
//!   [`Registry::get`] by dotted name.

mod catalog;
mod registry;
mod signal;

pub use catalog::{
    EngineSignals, HealthcheckSignals, ImagingSignals, Lifecycle, ServerSignals,
};
pub use registry::{kind_for_name, Registry};
pub use signal::{Signal, SignalKind};
