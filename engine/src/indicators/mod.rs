//! Technical indicators module
//!
//! Pure functions over an oldest-first candle window. Every function degrades
//! to a neutral value on short windows and never returns NaN or infinity for
//! finite input.

pub mod bb;
pub mod ema;
pub mod macd;
pub mod rsi;
pub mod volume;

pub use bb::*;
pub use ema::*;
pub use macd::*;
pub use rsi::*;
pub use volume::*;

use serde::{Deserialize, Serialize};

use crate::data::Candle;

pub const RSI_PERIOD: usize = 14;
pub const MACD_FAST: usize = 12;
pub const MACD_SLOW: usize = 26;
pub const MACD_SIGNAL: usize = 9;
pub const BB_PERIOD: usize = 20;
pub const BB_MULTIPLIER: f64 = 2.0;
pub const VOLUME_MA_PERIOD: usize = 20;

/// Indicator values for one instrument, recomputed every evaluation cycle
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSet {
    pub rsi: f64,
    pub macd: f64,
    pub macd_signal: f64,
    pub macd_histogram: f64,
    pub bollinger_upper: f64,
    pub bollinger_middle: f64,
    pub bollinger_lower: f64,
    pub bollinger_width: f64,
    pub bollinger_width_ma: f64,
    pub ema20: f64,
    pub ema50: f64,
    pub volume_ma: f64,
    /// Second to last candle of the window
    pub previous_candle: Option<Candle>,
}

impl IndicatorSet {
    /// Compute the full set with the standard parameters
    pub fn compute(candles: &[Candle]) -> Self {
        let macd = macd(candles, MACD_FAST, MACD_SLOW, MACD_SIGNAL);
        let bands = bollinger_bands(candles, BB_PERIOD, BB_MULTIPLIER);

        Self {
            rsi: rsi(candles, RSI_PERIOD),
            macd: macd.macd,
            macd_signal: macd.signal,
            macd_histogram: macd.histogram,
            bollinger_upper: bands.upper,
            bollinger_middle: bands.middle,
            bollinger_lower: bands.lower,
            bollinger_width: bands.width,
            bollinger_width_ma: bands.width_ma,
            ema20: ema(candles, 20),
            ema50: ema(candles, 50),
            volume_ma: volume_ma(candles, VOLUME_MA_PERIOD),
            previous_candle: candles.len().checked_sub(2).map(|i| candles[i].clone()),
        }
    }
}
