//! RSI (Relative Strength Index) indicator

use crate::data::Candle;

/// Value reported when the window is too short
pub const NEUTRAL_RSI: f64 = 50.0;

/// Simple-average RSI over the last `period` close-to-close changes
///
/// Returns 50 with fewer than `period + 1` candles and 100 when the window
/// holds no losses.
pub fn rsi(candles: &[Candle], period: usize) -> f64 {
    if period == 0 || candles.len() < period + 1 {
        return NEUTRAL_RSI;
    }

    let window = &candles[candles.len() - period - 1..];
    let (gains, losses) = window.windows(2).fold((0.0, 0.0), |(gains, losses), pair| {
        let change = pair[1].close - pair[0].close;
        if change > 0.0 {
            (gains + change, losses)
        } else {
            (gains, losses - change)
        }
    });

    let avg_gain = gains / period as f64;
    let avg_loss = losses / period as f64;

    if avg_loss == 0.0 {
        return 100.0;
    }

    let rs = avg_gain / avg_loss;
    100.0 - (100.0 / (1.0 + rs))
}
