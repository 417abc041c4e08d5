//! Volatility breakout strategy (band width expansion + volume)

use crate::data::Candle;
use crate::indicators::IndicatorSet;
use crate::portfolio::Position;
use crate::strategy::Strategy;

const WIDTH_EXPANSION: f64 = 1.2;
const WIDTH_CONTRACTION: f64 = 0.8;
const VOLUME_SURGE: f64 = 1.5;
const TAKE_PROFIT: f64 = 15.0;
const STOP_LOSS: f64 = -7.0;

/// Buy upside breakouts of expanding bands on heavy volume
#[derive(Debug, Clone, Copy, Default)]
pub struct VolatilityBreakout;

impl Strategy for VolatilityBreakout {
    fn key(&self) -> &'static str {
        "volatilityBreakout"
    }

    fn name(&self) -> &'static str {
        "Volatility Breakout"
    }

    fn description(&self) -> &'static str {
        "Breakouts above the upper band on widening bands and a volume surge"
    }

    fn should_enter(&self, candle: &Candle, indicators: &IndicatorSet) -> bool {
        let Some(previous) = indicators.previous_candle.as_ref() else {
            return false;
        };

        indicators.bollinger_width > indicators.bollinger_width_ma * WIDTH_EXPANSION
            && candle.close > indicators.bollinger_upper
            && candle.volume > indicators.volume_ma * VOLUME_SURGE
            && indicators.rsi > 50.0
            && candle.close > previous.high
    }

    fn should_exit(&self, candle: &Candle, indicators: &IndicatorSet, position: &Position) -> bool {
        let profit = position.profit_percent(candle.close);

        candle.close < indicators.bollinger_lower
            || indicators.bollinger_width < indicators.bollinger_width_ma * WIDTH_CONTRACTION
            || indicators.rsi < 30.0
            || profit > TAKE_PROFIT
            || profit < STOP_LOSS
    }
}
