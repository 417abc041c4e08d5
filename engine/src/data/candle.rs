//! OHLCV candle data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// OHLCV candle; sequences are ordered oldest first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Opening price
    pub open: f64,
    /// High price
    pub high: f64,
    /// Low price
    pub low: f64,
    /// Closing price
    pub close: f64,
    /// Volume
    pub volume: f64,
    /// Bucket timestamp
    pub timestamp: DateTime<Utc>,
}

impl Candle {
    /// Create a new candle
    pub fn new(
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            open,
            high,
            low,
            close,
            volume,
            timestamp,
        }
    }

    /// Candle with a flat body around `close`: open -0.1%, high +0.1%, low -0.2%
    pub fn around(close: f64, volume: f64, timestamp: DateTime<Utc>) -> Self {
        Self::new(
            close * 0.999,
            close * 1.001,
            close * 0.998,
            close,
            volume,
            timestamp,
        )
    }
}

/// Closing prices of a window, oldest first
pub fn closes(candles: &[Candle]) -> impl Iterator<Item = f64> + '_ {
    candles.iter().map(|c| c.close)
}

/// Last `count` candles of a window (all of them if shorter)
pub fn tail(candles: &[Candle], count: usize) -> &[Candle] {
    &candles[candles.len().saturating_sub(count)..]
}
