//! Pipeline facades over the signal groups.
//!
//! Stages of the imaging pipeline consume the engine and healthcheck
//! groups as fixed triads rather than firing signals one by one:
//!
//! - [`EngineOps`] - read/resize/crop/reorientate/serialize triads, the
//!   size/RGB getters and the synchronous focal-points triad
//! - [`HealthcheckOps`] - the probe triad
//!
//! Both return the operation signal's first-hook value, which is how one
//! subscriber (normally the engine implementation, possibly an extension
//! replacing it) drives pipeline behavior.

mod engine;
mod healthcheck;

pub use engine::EngineOps;
pub use healthcheck::HealthcheckOps;
