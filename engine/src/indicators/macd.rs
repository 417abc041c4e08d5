//! MACD (Moving Average Convergence Divergence) indicator

use serde::{Deserialize, Serialize};

use crate::data::Candle;
use crate::indicators::{ema, ema_of};

/// MACD result structure
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacdOutput {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
}

/// MACD line with a reduced-fidelity signal line
///
/// The signal is the EMA of `signal` repetitions of the current MACD value
/// (capped at the window length), not of a historical MACD series, so it
/// converges to the MACD value itself.
pub fn macd(candles: &[Candle], fast: usize, slow: usize, signal: usize) -> MacdOutput {
    let line = ema(candles, fast) - ema(candles, slow);

    let repetitions = signal.min(candles.len());
    let signal_line = ema_of(std::iter::repeat(line).take(repetitions), signal);

    MacdOutput {
        macd: line,
        signal: signal_line,
        histogram: line - signal_line,
    }
}
