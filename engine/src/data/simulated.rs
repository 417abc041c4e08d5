//! Simulated market feed for dry runs and tests

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::Mutex;

use crate::data::{tail, BookLevel, Candle, MarketSnapshot, OrderBook};
use crate::exchange::MarketFeed;

/// Candles kept per instrument
const HISTORY_LIMIT: usize = 200;

/// Order book levels generated on each side
const BOOK_DEPTH: usize = 10;

/// Reference price the random walk oscillates around
pub fn base_price(instrument: &str) -> f64 {
    match instrument {
        "BTC_KRW" => 45_000_000.0,
        "ETH_KRW" => 2_800_000.0,
        "ADA_KRW" => 580.0,
        "DOT_KRW" => 8_900.0,
        "MATIC_KRW" => 1_250.0,
        _ => 1_000.0,
    }
}

struct SimState {
    rng: StdRng,
    history: HashMap<String, Vec<Candle>>,
}

/// Feed producing ±1% noise around a per-instrument base price
///
/// Every `latest_snapshot` call generates a fresh candle and appends it to the
/// instrument's history, which `recent_candles` serves.
pub struct SimulatedFeed {
    state: Mutex<SimState>,
}

impl SimulatedFeed {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Reproducible feed
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            state: Mutex::new(SimState {
                rng,
                history: HashMap::new(),
            }),
        }
    }

    /// Generate `count` candles up front so indicators have a full window
    pub async fn warm_up(&self, instrument: &str, count: usize) {
        for _ in 0..count {
            self.generate(instrument).await;
        }
    }

    async fn generate(&self, instrument: &str) -> MarketSnapshot {
        let mut state = self.state.lock().await;

        let price = base_price(instrument) * (1.0 + (state.rng.gen::<f64>() - 0.5) * 0.02);
        let volume = state.rng.gen::<f64>() * 1_000_000.0;
        let candle = Candle::around(price, volume, Utc::now());

        let bids = (0..BOOK_DEPTH)
            .map(|i| BookLevel {
                price: price * (1.0 - (i + 1) as f64 * 0.001),
                quantity: state.rng.gen::<f64>() * 100.0,
            })
            .collect();
        let asks = (0..BOOK_DEPTH)
            .map(|i| BookLevel {
                price: price * (1.0 + (i + 1) as f64 * 0.001),
                quantity: state.rng.gen::<f64>() * 100.0,
            })
            .collect();

        let history = state.history.entry(instrument.to_string()).or_default();
        history.push(candle.clone());
        if history.len() > HISTORY_LIMIT {
            let excess = history.len() - HISTORY_LIMIT;
            history.drain(..excess);
        }

        MarketSnapshot::new(candle, OrderBook { bids, asks })
    }
}

impl Default for SimulatedFeed {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MarketFeed for SimulatedFeed {
    async fn latest_snapshot(&self, instrument: &str) -> anyhow::Result<Option<MarketSnapshot>> {
        Ok(Some(self.generate(instrument).await))
    }

    async fn recent_candles(&self, instrument: &str, count: usize) -> anyhow::Result<Vec<Candle>> {
        let state = self.state.lock().await;
        Ok(state
            .history
            .get(instrument)
            .map(|candles| tail(candles, count).to_vec())
            .unwrap_or_default())
    }
}
