//! Fire-and-forget progress event sink.
//!
//! Both optimizers push short human-readable status strings to an
//! injected sink. The contract is best effort: publishing never blocks
//! the optimization, and delivery is not required for correctness.

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// A one-way sink for human-readable optimization status messages.
///
/// Implementations must not block and must not fail the caller;
/// delivery problems are swallowed.
pub trait ProgressSink: Send + Sync {
    /// Publishes one status message.
    fn publish(&self, message: String);
}

/// A sink that drops every message.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl ProgressSink for NullSink {
    fn publish(&self, _message: String) {}
}

/// A sink backed by an unbounded channel, for forwarding to a
/// broadcaster task (e.g., a websocket hub).
///
/// Sending on an unbounded channel is synchronous and non-blocking;
/// a dropped receiver silently discards further messages.
///
/// # Examples
///
/// ```
/// use collect_routing::progress::{ChannelSink, ProgressSink};
///
/// let (sink, mut rx) = ChannelSink::new();
/// sink.publish("starting optimization".into());
/// assert_eq!(rx.try_recv().unwrap(), "starting optimization");
/// ```
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: UnboundedSender<String>,
}

impl ChannelSink {
    /// Creates a sink and the receiver its messages arrive on.
    pub fn new() -> (Self, UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl ProgressSink for ChannelSink {
    fn publish(&self, message: String) {
        // Receiver may be gone; delivery is best effort.
        let _ = self.tx.send(message);
    }
}
