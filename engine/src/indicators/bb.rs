//! Bollinger Bands indicator

use serde::{Deserialize, Serialize};

use crate::data::{tail, Candle};

/// Bollinger Bands result structure
///
/// All fields are zero when the window is shorter than the period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BollingerOutput {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
    pub width: f64,
    /// Mean of `width` repeated `period` times, equal to `width` up to rounding
    pub width_ma: f64,
}

/// Bands at `multiplier` population standard deviations around the SMA of the
/// last `period` closes
pub fn bollinger_bands(candles: &[Candle], period: usize, multiplier: f64) -> BollingerOutput {
    if period == 0 || candles.len() < period {
        return BollingerOutput::default();
    }

    let window = tail(candles, period);
    let n = period as f64;

    let sma = window.iter().map(|c| c.close).sum::<f64>() / n;
    let variance = window
        .iter()
        .map(|c| (c.close - sma).powi(2))
        .sum::<f64>()
        / n;
    let std_dev = variance.sqrt();

    let upper = sma + std_dev * multiplier;
    let lower = sma - std_dev * multiplier;
    let width = upper - lower;
    let width_ma = std::iter::repeat(width).take(period).sum::<f64>() / n;

    BollingerOutput {
        upper,
        middle: sma,
        lower,
        width,
        width_ma,
    }
}
