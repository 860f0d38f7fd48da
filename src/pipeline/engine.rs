//! # Engine operation facade: before/operation/after triads.
//!
//! Pipeline code does not fire engine signals one by one; each operation is
//! a fixed triad. [`EngineOps::resize`] dispatches
//! `engine.before_resize` → `engine.resize` → `engine.after_resize` and
//! returns the operation signal's first-hook value - the engine
//! implementation is itself an ordinary subscriber on the middle signal,
//! which is what lets an extension replace it wholesale.
//!
//! The focal-points triad is synchronous by exception and goes through
//! [`Dispatcher::trigger_sync`].

use serde_json::Value;

use crate::dispatch::{Context, Dispatcher, Reply, Sender};
use crate::error::BusError;
use crate::signals::{EngineSignals, Signal};

/// Engine operations expressed as signal triads.
///
/// Borrows the dispatcher and the engine signal group; construct one per
/// call site or keep it alongside the pipeline state.
pub struct EngineOps<'a> {
    dispatcher: &'a Dispatcher,
    signals: &'a EngineSignals,
}

impl<'a> EngineOps<'a> {
    pub fn new(dispatcher: &'a Dispatcher, signals: &'a EngineSignals) -> Self {
        Self {
            dispatcher,
            signals,
        }
    }

    /// Reads the source image into engine state.
    pub async fn read_image(&self, sender: &Sender, ctx: &Context) -> Result<Option<Value>, BusError> {
        self.triad(
            &self.signals.before_read_image,
            &self.signals.read_image,
            &self.signals.after_read_image,
            sender,
            ctx,
        )
        .await
    }

    /// Resizes to the dimensions carried in the context.
    pub async fn resize(&self, sender: &Sender, ctx: &Context) -> Result<Option<Value>, BusError> {
        self.triad(
            &self.signals.before_resize,
            &self.signals.resize,
            &self.signals.after_resize,
            sender,
            ctx,
        )
        .await
    }

    /// Crops to the box carried in the context.
    pub async fn crop(&self, sender: &Sender, ctx: &Context) -> Result<Option<Value>, BusError> {
        self.triad(
            &self.signals.before_crop,
            &self.signals.crop,
            &self.signals.after_crop,
            sender,
            ctx,
        )
        .await
    }

    /// Reorientates according to image metadata.
    pub async fn reorientate(&self, sender: &Sender, ctx: &Context) -> Result<Option<Value>, BusError> {
        self.triad(
            &self.signals.before_reorientate,
            &self.signals.reorientate,
            &self.signals.after_reorientate,
            sender,
            ctx,
        )
        .await
    }

    /// Serializes the transformed image to bytes.
    pub async fn serialize(&self, sender: &Sender, ctx: &Context) -> Result<Option<Value>, BusError> {
        self.triad(
            &self.signals.before_serialize,
            &self.signals.serialize,
            &self.signals.after_serialize,
            sender,
            ctx,
        )
        .await
    }

    /// Returns the current image dimensions from the engine subscriber.
    pub async fn get_image_size(&self, sender: &Sender, ctx: &Context) -> Result<Option<Value>, BusError> {
        self.dispatcher
            .trigger(&self.signals.get_image_size, sender, ctx.clone())
            .await
    }

    /// Returns the raw RGB data from the engine subscriber.
    pub async fn get_image_data_as_rgb(
        &self,
        sender: &Sender,
        ctx: &Context,
    ) -> Result<Option<Value>, BusError> {
        self.dispatcher
            .trigger(&self.signals.get_image_data_as_rgb, sender, ctx.clone())
            .await
    }

    /// Runs the synchronous focal-points triad.
    ///
    /// Returns the operation signal's replies; the before/after replies are
    /// notification-only and discarded.
    pub fn focus(&self, sender: &Sender, ctx: &Context) -> Result<Vec<Reply>, BusError> {
        self.dispatcher
            .trigger_sync(&self.signals.before_focal_points_changed, sender, ctx)?;
        let replies = self
            .dispatcher
            .trigger_sync(&self.signals.focal_points_changed, sender, ctx)?;
        self.dispatcher
            .trigger_sync(&self.signals.after_focal_points_changed, sender, ctx)?;
        Ok(replies)
    }

    async fn triad(
        &self,
        before: &Signal,
        op: &Signal,
        after: &Signal,
        sender: &Sender,
        ctx: &Context,
    ) -> Result<Option<Value>, BusError> {
        self.dispatcher.trigger(before, sender, ctx.clone()).await?;
        let value = self.dispatcher.trigger(op, sender, ctx.clone()).await?;
        self.dispatcher.trigger(after, sender, ctx.clone()).await?;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::{AsyncHookFn, SyncHookFn};
    use crate::signals::Lifecycle;
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    fn record_async(signal: &Signal, label: &'static str, order: &Arc<Mutex<Vec<&'static str>>>) {
        let order = Arc::clone(order);
        signal
            .subscribe_async(AsyncHookFn::arc(label, move |_s: Sender, _c: Arc<Context>| {
                let order = Arc::clone(&order);
                async move {
                    order.lock().unwrap().push(label);
                    Ok(None)
                }
            }))
            .expect("async hook on async signal");
    }

    #[tokio::test]
    async fn test_resize_triad_order_and_value() {
        let lifecycle = Lifecycle::new();
        let dispatcher = Dispatcher::default();
        let engine = EngineOps::new(&dispatcher, &lifecycle.engine);
        let order = Arc::new(Mutex::new(Vec::new()));

        record_async(&lifecycle.engine.before_resize, "before", &order);
        let order_op = Arc::clone(&order);
        lifecycle
            .engine
            .resize
            .subscribe_async(AsyncHookFn::arc("op", move |_s: Sender, ctx: Arc<Context>| {
                let order = Arc::clone(&order_op);
                async move {
                    order.lock().unwrap().push("op");
                    Ok(Some(json!({
                        "width": ctx.get_u64("width").unwrap_or(0),
                        "height": ctx.get_u64("height").unwrap_or(0),
                    })))
                }
            }))
            .expect("async hook on async signal");
        record_async(&lifecycle.engine.after_resize, "after", &order);

        let sender = Sender::new("core-handler");
        let ctx = Context::new().with("width", 100).with("height", 50);
        let value = engine.resize(&sender, &ctx).await.expect("triad ok");

        assert_eq!(value, Some(json!({"width": 100, "height": 50})));
        assert_eq!(*order.lock().unwrap(), ["before", "op", "after"]);
    }

    #[tokio::test]
    async fn test_get_image_size_returns_first_hook_value() {
        let lifecycle = Lifecycle::new();
        let dispatcher = Dispatcher::default();
        let engine = EngineOps::new(&dispatcher, &lifecycle.engine);

        lifecycle
            .engine
            .get_image_size
            .subscribe_async(AsyncHookFn::arc("pillow", |_s: Sender, _c: Arc<Context>| async {
                Ok(Some(json!([800, 600])))
            }))
            .expect("async hook on async signal");

        let size = engine
            .get_image_size(&Sender::new("core-handler"), &Context::new())
            .await
            .expect("hook ok");
        assert_eq!(size, Some(json!([800, 600])));
    }

    #[tokio::test]
    async fn test_triad_with_no_subscribers_is_a_noop() {
        let lifecycle = Lifecycle::new();
        let dispatcher = Dispatcher::default();
        let engine = EngineOps::new(&dispatcher, &lifecycle.engine);

        let value = engine
            .serialize(&Sender::new("core-handler"), &Context::new())
            .await
            .expect("empty triad ok");
        assert_eq!(value, None);
    }

    #[test]
    fn test_focus_runs_sync_triad() {
        let lifecycle = Lifecycle::new();
        let dispatcher = Dispatcher::default();
        let engine = EngineOps::new(&dispatcher, &lifecycle.engine);
        let order = Arc::new(Mutex::new(Vec::new()));

        for (signal, label) in [
            (&lifecycle.engine.before_focal_points_changed, "before"),
            (&lifecycle.engine.focal_points_changed, "op"),
            (&lifecycle.engine.after_focal_points_changed, "after"),
        ] {
            let order = Arc::clone(&order);
            signal
                .subscribe_sync(SyncHookFn::arc(label, move |_: &Sender, _: &Context| {
                    order.lock().unwrap().push(label);
                    Ok(None)
                }))
                .expect("sync hook on sync signal");
        }

        let replies = engine
            .focus(&Sender::new("core-handler"), &Context::new())
            .expect("sync triad ok");
        assert_eq!(replies.len(), 1);
        assert_eq!(replies[0].hook.as_ref(), "op");
        assert_eq!(*order.lock().unwrap(), ["before", "op", "after"]);
    }
}
