//! Feed Poller - refreshes market snapshots on its own timer

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::data::SnapshotStore;
use crate::engine::{spawn_periodic, ScheduleHandle, SharedState};
use crate::exchange::MarketFeed;

/// Copies the latest feed snapshot of every selected instrument into the store
///
/// Never touches positions or history.
#[derive(Clone)]
pub struct FeedPoller {
    state: SharedState,
    snapshots: SnapshotStore,
    feed: Arc<dyn MarketFeed>,
}

impl FeedPoller {
    pub fn new(state: SharedState, snapshots: SnapshotStore, feed: Arc<dyn MarketFeed>) -> Self {
        Self {
            state,
            snapshots,
            feed,
        }
    }

    /// Refresh every selected instrument once and forget deselected ones
    pub async fn poll_once(&self) -> usize {
        let instruments = self.state.read().await.config.selected_instruments.clone();

        let pruned = self.snapshots.retain_only(&instruments).await;
        if pruned > 0 {
            debug!("Dropped {} snapshots of deselected instruments", pruned);
        }

        let mut refreshed = 0;
        for instrument in &instruments {
            match self.feed.latest_snapshot(instrument).await {
                Ok(Some(snapshot)) => {
                    debug!(
                        "{}: {:.2}, spread {:?}",
                        instrument,
                        snapshot.price(),
                        snapshot.orderbook.spread()
                    );
                    self.snapshots.insert(instrument, snapshot).await;
                    refreshed += 1;
                }
                Ok(None) => debug!("{}: feed has no snapshot", instrument),
                Err(e) => warn!("⚠️ {}: snapshot refresh failed: {}", instrument, e),
            }
        }
        refreshed
    }

    /// Poll every `period` until the handle is cancelled
    pub fn spawn(self, period: Duration) -> ScheduleHandle {
        spawn_periodic("feed-poller", move || {
            let poller = self.clone();
            async move {
                poller.poll_once().await;
                period
            }
        })
    }
}
