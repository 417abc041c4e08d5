//! Market data feed contract

use async_trait::async_trait;

use crate::data::{Candle, MarketSnapshot};

/// Source of market snapshots and candle history
#[async_trait]
pub trait MarketFeed: Send + Sync {
    /// Current snapshot, `None` when the instrument has no data yet
    async fn latest_snapshot(&self, instrument: &str) -> anyhow::Result<Option<MarketSnapshot>>;

    /// Up to `count` most recent candles, oldest first; may return fewer
    async fn recent_candles(&self, instrument: &str, count: usize) -> anyhow::Result<Vec<Candle>>;
}
