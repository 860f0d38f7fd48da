//! # Upload Notification Example
//!
//! Wires an [`UploadNotifier`] to `imaging.after_finish_request` with a
//! stdout publisher standing in for a real queue client. The announcement
//! is best-effort: swap `fail: true` in to see a failure logged and
//! swallowed while the trigger still succeeds.
//!
//! ## Run
//! ```bash
//! cargo run --example upload_notify
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use stagebus::{
    Context, Dispatcher, Lifecycle, NotifyConfig, PublishError, QueuePublisher, Sender,
    UploadNotifier,
};

struct StdoutPublisher {
    fail: bool,
}

#[async_trait]
impl QueuePublisher for StdoutPublisher {
    async fn publish(&self, payload: &Value) -> Result<(), PublishError> {
        if self.fail {
            return Err(PublishError::new("broker unreachable"));
        }
        println!("published: {payload}");
        Ok(())
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stagebus=debug".into()),
        )
        .init();

    let lifecycle = Lifecycle::new();
    let dispatcher = Dispatcher::default();

    let notifier = UploadNotifier::new(
        Arc::new(StdoutPublisher { fail: false }),
        NotifyConfig::default(),
    );
    lifecycle
        .imaging
        .after_finish_request
        .subscribe_async(Arc::new(notifier))?;

    dispatcher
        .trigger(
            &lifecycle.imaging.after_finish_request,
            &Sender::new("upload-handler"),
            Context::new().with("location", "/image/abc123/photo.jpg"),
        )
        .await?;

    Ok(())
}
