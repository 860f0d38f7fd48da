//! # Trigger invocation payload: sender identity and keyword context.
//!
//! Every trigger call carries a [`Sender`] (which component fired the
//! signal) and a [`Context`] (arbitrary keyword data for the hooks).
//! Both are ephemeral values: they live for one dispatch and are never
//! persisted by the bus.
//!
//! ## Example
//! ```rust
//! use stagebus::{Context, Sender};
//!
//! let sender = Sender::new("core-handler");
//! let ctx = Context::new()
//!     .with("width", 100)
//!     .with("height", 50);
//!
//! assert_eq!(sender.as_str(), "core-handler");
//! assert_eq!(ctx.get("width").and_then(|v| v.as_u64()), Some(100));
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

/// Identity of the component that triggered a signal.
///
/// A cheap cloneable name, shared with every hook of the dispatch. Hooks
/// should treat it as opaque identity, not as routing data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sender(Arc<str>);

impl Sender {
    /// Creates a sender from any string-like name.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    /// Returns the sender name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Sender {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Sender {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

/// Keyword context passed to every hook of a dispatch.
///
/// A string-keyed map of [`Value`]s with a chainable builder, mirroring the
/// keyword-argument calling convention of the lifecycle hooks:
/// `trigger(signal, sender, ctx)` hands the same context to each subscriber.
///
/// The bus never interprets the entries; keys are a contract between the
/// triggering pipeline stage and its subscribers.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Context {
    entries: BTreeMap<String, Value>,
}

impl Context {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry, chainable.
    #[inline]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Inserts an entry, replacing any previous value under the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Returns the value under `key`, if present.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Returns the value under `key` as a string slice, if present and a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(Value::as_str)
    }

    /// Returns the value under `key` as an unsigned integer, if present and numeric.
    pub fn get_u64(&self, key: &str) -> Option<u64> {
        self.entries.get(key).and_then(Value::as_u64)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the context has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder_chain() {
        let ctx = Context::new().with("width", 100).with("method", "POST");
        assert_eq!(ctx.len(), 2);
        assert_eq!(ctx.get_u64("width"), Some(100));
        assert_eq!(ctx.get_str("method"), Some("POST"));
    }

    #[test]
    fn test_insert_replaces() {
        let mut ctx = Context::new().with("status", 200);
        ctx.insert("status", 404);
        assert_eq!(ctx.get_u64("status"), Some(404));
        assert_eq!(ctx.len(), 1);
    }

    #[test]
    fn test_missing_key() {
        let ctx = Context::new();
        assert!(ctx.is_empty());
        assert!(ctx.get("nope").is_none());
        assert!(ctx.get_str("nope").is_none());
    }

    #[test]
    fn test_structured_value() {
        let ctx = Context::new().with("crop", json!({"left": 0, "top": 10}));
        let crop = ctx.get("crop").expect("crop entry");
        assert_eq!(crop["top"], json!(10));
    }

    #[test]
    fn test_sender_display() {
        let sender = Sender::from("upload-handler");
        assert_eq!(sender.to_string(), "upload-handler");
    }
}
