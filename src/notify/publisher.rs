//! # Queue publisher seam.
//!
//! [`QueuePublisher`] abstracts the message-queue client the service
//! publishes upload announcements through. Broker connectivity, exchange
//! declaration and delivery guarantees belong to the implementation, not
//! to this crate.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// A publish attempt failed.
///
/// Consumers of [`QueuePublisher`] treat this as a best-effort outcome:
/// log it and continue.
#[derive(Error, Debug)]
#[error("publish failed: {reason}")]
pub struct PublishError {
    /// The underlying failure message.
    pub reason: String,
}

impl PublishError {
    /// Creates a publish error from any displayable reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// External message-queue client.
///
/// Implementations own connection management and routing; callers hand
/// over a JSON payload and nothing else.
#[async_trait]
pub trait QueuePublisher: Send + Sync + 'static {
    /// Publishes one message payload.
    async fn publish(&self, payload: &Value) -> Result<(), PublishError>;
}
