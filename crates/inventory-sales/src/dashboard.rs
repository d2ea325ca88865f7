//! # Dashboard Notification
//!
//! After a sale is recorded the dashboard totals are stale. The sales view
//! tells the dashboard to reload through a [`DashboardListener`]; nobody
//! listening is fine.
//!
//! ```text
//! SalesView ──reload_dashboard()──► DashboardSignal ──broadcast──► Dashboard
//!                                        │
//!                                        └── no subscriber: dropped silently
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::broadcast;
use tracing::debug;

/// Receives "reload the dashboard" requests. Must not block.
pub trait DashboardListener: Send + Sync {
    fn reload_dashboard(&self);
}

/// Listener used when no dashboard is mounted.
pub struct NoOpListener;

impl DashboardListener for NoOpListener {
    fn reload_dashboard(&self) {}
}

/// A reload request as seen by subscribers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardEvent {
    pub requested_at: DateTime<Utc>,
}

/// Broadcast-backed listener; dashboards call [`subscribe`](Self::subscribe).
#[derive(Debug, Clone)]
pub struct DashboardSignal {
    tx: broadcast::Sender<DashboardEvent>,
}

impl DashboardSignal {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        DashboardSignal { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<DashboardEvent> {
        self.tx.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl DashboardListener for DashboardSignal {
    fn reload_dashboard(&self) {
        let event = DashboardEvent {
            requested_at: Utc::now(),
        };
        // Err only means nobody is subscribed.
        if self.tx.send(event).is_err() {
            debug!("No dashboard subscribed, reload dropped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reload_without_subscriber_is_silent() {
        let signal = DashboardSignal::new(4);
        assert_eq!(signal.subscriber_count(), 0);
        signal.reload_dashboard();
    }

    #[tokio::test]
    async fn test_subscriber_receives_reload() {
        let signal = DashboardSignal::new(4);
        let mut rx = signal.subscribe();

        signal.reload_dashboard();

        let event = rx.recv().await.unwrap();
        assert!(event.requested_at <= Utc::now());
    }
}
