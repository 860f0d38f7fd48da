//! # Upload notifier hook.
//!
//! [`UploadNotifier`] is an ordinary asynchronous subscriber: attach it to
//! whichever signal fires once an upload's location is known. It reads the
//! location from the trigger context, publishes `{method, location}`, and
//! always resolves to `Ok(None)` - publish failures are logged, never
//! surfaced.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use crate::dispatch::{Context, Sender};
use crate::hooks::{AsyncHook, HookResult};
use crate::notify::publisher::QueuePublisher;

/// Payload knobs for the upload announcement.
///
/// ## Field semantics
/// - `method`: HTTP method reported in the payload. Uploads are announced
///   as `"POST"`; PUT/DELETE announcements would reuse the same shape.
/// - `location_key`: context key holding the resource location. The hook
///   publishes nothing when the key is absent or not a string.
#[derive(Clone, Debug)]
pub struct NotifyConfig {
    pub method: String,
    pub location_key: String,
}

impl Default for NotifyConfig {
    /// Default configuration:
    ///
    /// - `method = "POST"`
    /// - `location_key = "location"`
    fn default() -> Self {
        Self {
            method: "POST".to_string(),
            location_key: "location".to_string(),
        }
    }
}

/// Best-effort `{method, location}` queue announcement.
pub struct UploadNotifier {
    publisher: Arc<dyn QueuePublisher>,
    cfg: NotifyConfig,
}

impl UploadNotifier {
    /// Creates a notifier over the given publisher.
    pub fn new(publisher: Arc<dyn QueuePublisher>, cfg: NotifyConfig) -> Self {
        Self { publisher, cfg }
    }
}

#[async_trait]
impl AsyncHook for UploadNotifier {
    fn name(&self) -> &str {
        "upload-notifier"
    }

    async fn call(&self, _sender: Sender, ctx: Arc<Context>) -> HookResult {
        let Some(location) = ctx.get_str(&self.cfg.location_key) else {
            return Ok(None);
        };

        let payload = json!({
            "method": self.cfg.method,
            "location": location,
        });
        tracing::debug!(%payload, "publishing upload notification");
        if let Err(err) = self.publisher.publish(&payload).await {
            tracing::warn!(error = %err, "failed to publish upload notification, continuing");
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::publisher::PublishError;
    use serde_json::Value;
    use std::sync::Mutex;

    struct RecordingPublisher {
        sent: Mutex<Vec<Value>>,
        fail: bool,
    }

    impl RecordingPublisher {
        fn new(fail: bool) -> Arc<Self> {
            Arc::new(Self {
                sent: Mutex::new(Vec::new()),
                fail,
            })
        }
    }

    #[async_trait]
    impl QueuePublisher for RecordingPublisher {
        async fn publish(&self, payload: &Value) -> Result<(), PublishError> {
            if self.fail {
                return Err(PublishError::new("broker unreachable"));
            }
            self.sent.lock().unwrap().push(payload.clone());
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_publishes_method_and_location() {
        let publisher = RecordingPublisher::new(false);
        let notifier = UploadNotifier::new(
            Arc::clone(&publisher) as Arc<dyn QueuePublisher>,
            NotifyConfig::default(),
        );

        let ctx = Context::new().with("location", "/image/abc123/photo.jpg");
        let out = notifier
            .call(Sender::new("upload-handler"), Arc::new(ctx))
            .await
            .expect("best-effort never errors");
        assert_eq!(out, None);

        let sent = publisher.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(
            sent[0],
            json!({"method": "POST", "location": "/image/abc123/photo.jpg"})
        );
    }

    #[tokio::test]
    async fn test_no_location_publishes_nothing() {
        let publisher = RecordingPublisher::new(false);
        let notifier = UploadNotifier::new(
            Arc::clone(&publisher) as Arc<dyn QueuePublisher>,
            NotifyConfig::default(),
        );

        let out = notifier
            .call(Sender::new("upload-handler"), Arc::new(Context::new()))
            .await
            .expect("best-effort never errors");
        assert_eq!(out, None);
        assert!(publisher.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_publish_failure_is_swallowed() {
        let publisher = RecordingPublisher::new(true);
        let notifier = UploadNotifier::new(
            publisher as Arc<dyn QueuePublisher>,
            NotifyConfig::default(),
        );

        let ctx = Context::new().with("location", "/image/abc123/photo.jpg");
        let out = notifier
            .call(Sender::new("upload-handler"), Arc::new(ctx))
            .await
            .expect("publish failures never surface");
        assert_eq!(out, None);
    }
}
