//! # Best-effort upload notifications (feature `notify`).
//!
//! After an upload is persisted, the service announces `{method, location}`
//! to an external queue so downstream consumers can react. The announcement
//! is strictly best-effort: a publish failure is logged and swallowed, and
//! must never affect dispatch outcome or the HTTP response.
//!
//! This module provides the seam, not the broker client:
//!
//! - [`QueuePublisher`] - the trait a real queue client implements
//! - [`UploadNotifier`] - an [`AsyncHook`](crate::AsyncHook) that builds
//!   the payload from the trigger context and publishes it
//! - [`NotifyConfig`] - payload knobs
//!
//! ## Example
//! ```rust,ignore
//! let notifier = Arc::new(UploadNotifier::new(my_amqp_client, NotifyConfig::default()));
//! lifecycle.imaging.after_finish_request.subscribe_async(notifier)?;
//! ```

mod notifier;
mod publisher;

pub use notifier::{NotifyConfig, UploadNotifier};
pub use publisher::{PublishError, QueuePublisher};
