//! Dispatch: trigger entry points, invocation payload and scheduling.
//!
//! This module groups everything that happens when a signal fires:
//!
//! - [`Sender`], [`Context`] the ephemeral trigger invocation payload
//! - [`Dispatcher`], [`Reply`] the two trigger entry points
//! - [`Schedule`], [`Scheduled`], [`TokioSpawner`] the scheduler adapter
//!   between hooks' pending computations and the host loop
//!
//! See `dispatcher` for the delivery contracts of the two disciplines.

mod context;
mod dispatcher;
mod scheduler;

pub use context::{Context, Sender};
pub use dispatcher::{Dispatcher, Reply};
pub use scheduler::{Schedule, Scheduled, TokioSpawner};
