//! # Healthcheck facade.
//!
//! Runs the `healthcheck.before_healthcheck` → `healthcheck.execute` →
//! `healthcheck.after_healthcheck` triad. The first subscriber on
//! `healthcheck.execute` supplies the health payload returned to the
//! probing caller; the before/after signals are notification-only.

use serde_json::Value;

use crate::dispatch::{Context, Dispatcher, Sender};
use crate::error::BusError;
use crate::signals::HealthcheckSignals;

/// Healthcheck probe over the healthcheck signal group.
pub struct HealthcheckOps<'a> {
    dispatcher: &'a Dispatcher,
    signals: &'a HealthcheckSignals,
}

impl<'a> HealthcheckOps<'a> {
    pub fn new(dispatcher: &'a Dispatcher, signals: &'a HealthcheckSignals) -> Self {
        Self {
            dispatcher,
            signals,
        }
    }

    /// Runs the probe triad and returns the health payload, if any.
    pub async fn execute(&self, sender: &Sender, ctx: &Context) -> Result<Option<Value>, BusError> {
        self.dispatcher
            .trigger(&self.signals.before_healthcheck, sender, ctx.clone())
            .await?;
        let payload = self
            .dispatcher
            .trigger(&self.signals.execute, sender, ctx.clone())
            .await?;
        self.dispatcher
            .trigger(&self.signals.after_healthcheck, sender, ctx.clone())
            .await?;
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::AsyncHookFn;
    use crate::signals::Lifecycle;
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_execute_returns_probe_payload() {
        let lifecycle = Lifecycle::new();
        let dispatcher = Dispatcher::default();
        let health = HealthcheckOps::new(&dispatcher, &lifecycle.healthcheck);

        lifecycle
            .healthcheck
            .execute
            .subscribe_async(AsyncHookFn::arc("probe", |_s: Sender, _c: Arc<Context>| async {
                Ok(Some(json!({"status": "WORKING"})))
            }))
            .expect("async hook on async signal");

        let payload = health
            .execute(&Sender::new("healthcheck-handler"), &Context::new())
            .await
            .expect("probe ok");
        assert_eq!(payload, Some(json!({"status": "WORKING"})));
    }

    #[tokio::test]
    async fn test_execute_without_probe_returns_none() {
        let lifecycle = Lifecycle::new();
        let dispatcher = Dispatcher::default();
        let health = HealthcheckOps::new(&dispatcher, &lifecycle.healthcheck);

        let payload = health
            .execute(&Sender::new("healthcheck-handler"), &Context::new())
            .await
            .expect("empty probe ok");
        assert_eq!(payload, None);
    }
}
