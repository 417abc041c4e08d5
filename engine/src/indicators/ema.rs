//! EMA (Exponential Moving Average) indicator

use ta::indicators::ExponentialMovingAverage;
use ta::Next;

use crate::data::{closes, Candle};

/// EMA of closing prices
///
/// Seeded with the first close of the window (no SMA warm-up) and weighted by
/// `2 / (period + 1)`. The seed choice is part of the numeric contract: the
/// result depends on how far back the window reaches. Returns 0 for an empty
/// window.
pub fn ema(candles: &[Candle], period: usize) -> f64 {
    ema_of(closes(candles), period)
}

/// EMA over an arbitrary value sequence with the same first-value seed
pub fn ema_of<I>(values: I, period: usize) -> f64
where
    I: IntoIterator<Item = f64>,
{
    // ta's EMA starts from the first input and applies k = 2 / (period + 1)
    let Ok(mut inner) = ExponentialMovingAverage::new(period) else {
        return 0.0;
    };
    values.into_iter().fold(0.0, |_, value| inner.next(value))
}
