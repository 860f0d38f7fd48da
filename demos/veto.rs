//! # First-Result Veto Example
//!
//! Two extensions subscribe to `imaging.received`. The first supplies a
//! cached response, which the pipeline caller receives and can use to
//! short-circuit image loading; the second still runs for side effects,
//! but its value is discarded by the dispatch contract.
//!
//! ## Run
//! ```bash
//! cargo run --example veto
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use stagebus::{AsyncHookFn, Context, Dispatcher, Lifecycle, Sender};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let lifecycle = Lifecycle::new();
    let dispatcher = Dispatcher::default();
    let requests_seen = Arc::new(AtomicU64::new(0));

    lifecycle.imaging.received.subscribe_async(AsyncHookFn::arc(
        "cache",
        |_sender: Sender, ctx: Arc<Context>| async move {
            let url = ctx.get_str("image_url").unwrap_or("<unknown>").to_string();
            Ok(Some(serde_json::json!({
                "cached": true,
                "image_url": url,
            })))
        },
    ))?;

    let counter = Arc::clone(&requests_seen);
    lifecycle.imaging.received.subscribe_async(AsyncHookFn::arc(
        "request-metrics",
        move |_sender: Sender, _ctx: Arc<Context>| {
            let counter = Arc::clone(&counter);
            async move {
                counter.fetch_add(1, Ordering::Relaxed);
                Ok(None)
            }
        },
    ))?;

    let response = dispatcher
        .trigger(
            &lifecycle.imaging.received,
            &Sender::new("core-handler"),
            Context::new().with("image_url", "unsafe/photo.jpg"),
        )
        .await?;

    // Let the loop drain the detached metrics hook.
    tokio::task::yield_now().await;

    println!("first hook's response: {response:?}");
    println!(
        "requests counted by the second hook: {}",
        requests_seen.load(Ordering::Relaxed)
    );
    Ok(())
}
