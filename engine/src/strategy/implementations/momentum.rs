//! Momentum strategy (RSI + MACD + EMA trend)

use crate::data::Candle;
use crate::indicators::IndicatorSet;
use crate::portfolio::Position;
use crate::strategy::Strategy;

const TAKE_PROFIT: f64 = 10.0;
const STOP_LOSS: f64 = -5.0;

/// Trend following: buy a confirmed uptrend while RSI is not extreme
#[derive(Debug, Clone, Copy, Default)]
pub struct Momentum;

impl Strategy for Momentum {
    fn key(&self) -> &'static str {
        "momentum"
    }

    fn name(&self) -> &'static str {
        "Momentum"
    }

    fn description(&self) -> &'static str {
        "Trend following on RSI, MACD and the EMA20/EMA50 stack"
    }

    fn should_enter(&self, candle: &Candle, indicators: &IndicatorSet) -> bool {
        indicators.rsi > 30.0
            && indicators.rsi < 70.0
            && indicators.macd > indicators.macd_signal
            && candle.close > indicators.ema20
            && indicators.ema20 > indicators.ema50
    }

    fn should_exit(&self, candle: &Candle, indicators: &IndicatorSet, position: &Position) -> bool {
        let profit = position.profit_percent(candle.close);

        indicators.rsi > 70.0
            || indicators.macd < indicators.macd_signal
            || profit > TAKE_PROFIT
            || profit < STOP_LOSS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn candle(close: f64) -> Candle {
        Candle::new(close, close, close, close, 1.0, Utc::now())
    }

    fn entry_indicators() -> IndicatorSet {
        IndicatorSet {
            rsi: 50.0,
            macd: 2.0,
            macd_signal: 1.0,
            ema20: 100.0,
            ema50: 90.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_enter_on_uptrend() {
        assert!(Momentum.should_enter(&candle(110.0), &entry_indicators()));
    }

    #[test]
    fn test_no_entry_when_macd_below_signal() {
        let indicators = IndicatorSet {
            macd: 1.0,
            macd_signal: 2.0,
            ..entry_indicators()
        };
        assert!(!Momentum.should_enter(&candle(110.0), &indicators));
    }

    #[test]
    fn test_no_entry_outside_rsi_band_or_trend() {
        let overbought = IndicatorSet { rsi: 70.0, ..entry_indicators() };
        assert!(!Momentum.should_enter(&candle(110.0), &overbought));

        let oversold = IndicatorSet { rsi: 30.0, ..entry_indicators() };
        assert!(!Momentum.should_enter(&candle(110.0), &oversold));

        assert!(!Momentum.should_enter(&candle(99.0), &entry_indicators()));

        let inverted = IndicatorSet { ema50: 105.0, ..entry_indicators() };
        assert!(!Momentum.should_enter(&candle(110.0), &inverted));
    }

    #[test]
    fn test_exit_rules() {
        let position = Position::long("BTC_KRW", 1.0, 100.0);
        let holding = entry_indicators();

        assert!(!Momentum.should_exit(&candle(105.0), &holding, &position));
        assert!(Momentum.should_exit(&candle(111.0), &holding, &position));
        assert!(Momentum.should_exit(&candle(94.0), &holding, &position));

        let hot = IndicatorSet { rsi: 71.0, ..holding.clone() };
        assert!(Momentum.should_exit(&candle(101.0), &hot, &position));

        let crossed = IndicatorSet { macd: 0.5, ..holding };
        assert!(Momentum.should_exit(&candle(101.0), &crossed, &position));
    }
}
