//! The single-slot status channel the UI watches.
//!
//! Presentation observes only the latest line; there is no replay. A
//! `tokio::sync::watch` channel is exactly that contract: every write
//! overwrites the slot, receivers see the freshest value whenever they
//! look. Each write is also emitted as a `tracing` event so the
//! lifecycle is visible in logs without a UI attached.

use tokio::sync::watch;
use tracing::info;

/// Last-write-wins progress channel for human-readable status lines.
pub struct StatusReporter {
    tx: watch::Sender<String>,
}

impl StatusReporter {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(String::new());
        Self { tx }
    }

    /// Hand out a receiver for the UI to watch.
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.tx.subscribe()
    }

    /// Overwrite the slot with a new status line.
    pub fn set(&self, line: impl Into<String>) {
        let line = line.into();
        info!(status = %line);
        self.tx.send_replace(line);
    }

    /// The current line.
    pub fn latest(&self) -> String {
        self.tx.borrow().clone()
    }
}

impl Default for StatusReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let status = StatusReporter::new();
        assert_eq!(status.latest(), "");
    }

    #[test]
    fn last_write_wins() {
        let status = StatusReporter::new();
        status.set("first");
        status.set("second");
        assert_eq!(status.latest(), "second");
    }

    #[test]
    fn set_works_without_subscribers() {
        let status = StatusReporter::new();
        status.set("nobody listening");
        assert_eq!(status.latest(), "nobody listening");
    }

    #[tokio::test]
    async fn subscriber_observes_latest_value() {
        let status = StatusReporter::new();
        let mut rx = status.subscribe();

        status.set("one");
        status.set("two");

        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), "two");
    }
}
