//! Volume moving average

use ta::indicators::SimpleMovingAverage;
use ta::Next;

use crate::data::{tail, Candle};

/// Simple mean of the last `period` volumes; 0 with fewer candles
pub fn volume_ma(candles: &[Candle], period: usize) -> f64 {
    if candles.len() < period {
        return 0.0;
    }
    let Ok(mut sma) = SimpleMovingAverage::new(period) else {
        return 0.0;
    };
    tail(candles, period)
        .iter()
        .fold(0.0, |_, candle| sma.next(candle.volume))
}
