//! # Lifecycle Walkthrough Example
//!
//! Shows the two dispatch disciplines side by side:
//! - a synchronous hook on `server.after_server_run`
//! - an asynchronous hook on `engine.resize` whose value is returned to
//!   the triggering stage
//!
//! ## Run
//! ```bash
//! cargo run --example lifecycle
//! ```

use std::sync::Arc;
use std::time::Duration;

use stagebus::{AsyncHookFn, Context, Dispatcher, Lifecycle, Sender, SyncHookFn};

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

    lifecycle.server.after_server_run.subscribe_sync(SyncHookFn::arc(
        "announce",
        |sender: &Sender, _ctx: &Context| {
            println!("[sync] server is running (sender={sender})");
            Ok(None)
        },
    ))?;

    lifecycle.engine.resize.subscribe_async(AsyncHookFn::arc(
        "pillow",
        |_sender: Sender, ctx: Arc<Context>| async move {
            // Pretend to resize.
            tokio::time::sleep(Duration::from_millis(50)).await;
            Ok(Some(serde_json::json!({
                "width": ctx.get_u64("width").unwrap_or(0),
                "height": ctx.get_u64("height").unwrap_or(0),
            })))
        },
    ))?;

    dispatcher.trigger_sync(
        &lifecycle.server.after_server_run,
        &Sender::new("server"),
        &Context::new(),
    )?;

    let resized = dispatcher
        .trigger(
            &lifecycle.engine.resize,
            &Sender::new("core-handler"),
            Context::new().with("width", 100).with("height", 50),
        )
        .await?;
    println!("[async] resize resolved to {resized:?}");

    Ok(())
}
