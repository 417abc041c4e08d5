//! Latest snapshot storage keyed by instrument

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::data::MarketSnapshot;

/// In-memory store of the most recent snapshot per instrument
///
/// Written by the feed poller, read by the coordinator. Each write replaces
/// the whole snapshot for one key under the lock.
#[derive(Debug, Clone, Default)]
pub struct SnapshotStore {
    snapshots: Arc<RwLock<HashMap<String, MarketSnapshot>>>,
}

impl SnapshotStore {
    /// Create new storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the snapshot for an instrument
    pub async fn insert(&self, instrument: &str, snapshot: MarketSnapshot) {
        self.snapshots
            .write()
            .await
            .insert(instrument.to_string(), snapshot);
    }

    /// Latest snapshot for an instrument
    pub async fn get(&self, instrument: &str) -> Option<MarketSnapshot> {
        self.snapshots.read().await.get(instrument).cloned()
    }

    /// Drop snapshots of instruments outside `instruments`, returning how many went
    pub async fn retain_only(&self, instruments: &BTreeSet<String>) -> usize {
        let mut snapshots = self.snapshots.write().await;
        let before = snapshots.len();
        snapshots.retain(|instrument, _| instruments.contains(instrument));
        before - snapshots.len()
    }

    /// Clear all data
    pub async fn clear(&self) {
        self.snapshots.write().await.clear();
    }

    /// Get number of stored snapshots
    pub async fn len(&self) -> usize {
        self.snapshots.read().await.len()
    }

    /// Check if storage is empty
    pub async fn is_empty(&self) -> bool {
        self.snapshots.read().await.is_empty()
    }
}
