//! Staff panel feed
//!
//! Panels poll the order store on a fixed interval rather than
//! subscribing to push updates; staleness is bounded by the interval.
//! A failed poll keeps the previous snapshot.

use crate::orders::{sort_newest_first, OrderStore};
use shared::models::{PersistedOrder, StatusFilter};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Default poll interval for staff panels
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(15);

/// Periodic order-store poller publishing snapshots to panel views
pub struct PanelFeed {
    rx: watch::Receiver<Vec<PersistedOrder>>,
    handle: JoinHandle<()>,
}

impl std::fmt::Debug for PanelFeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PanelFeed")
            .field("orders", &self.rx.borrow().len())
            .finish()
    }
}

impl PanelFeed {
    /// Spawn the poll loop. The first poll fires immediately.
    pub fn spawn(
        store: Arc<dyn OrderStore>,
        filter: StatusFilter,
        poll_interval: Duration,
    ) -> Self {
        let (tx, rx) = watch::channel(Vec::new());

        let handle = tokio::spawn(async move {
            let mut tick = tokio::time::interval(poll_interval);
            tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            loop {
                tick.tick().await;
                match store.list(filter).await {
                    Ok(mut orders) => {
                        sort_newest_first(&mut orders);
                        if tx.send(orders).is_err() {
                            // All panel views are gone.
                            break;
                        }
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "Panel poll failed, keeping last snapshot");
                    }
                }
            }
        });

        Self { rx, handle }
    }

    /// Subscribe a panel view to snapshot updates.
    pub fn subscribe(&self) -> watch::Receiver<Vec<PersistedOrder>> {
        self.rx.clone()
    }

    /// Most recent snapshot
    pub fn latest(&self) -> Vec<PersistedOrder> {
        self.rx.borrow().clone()
    }

    pub fn stop(&self) {
        self.handle.abort();
    }
}

impl Drop for PanelFeed {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
