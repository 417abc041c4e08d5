//! Mean reversion strategy (Bollinger Bands + RSI)

use crate::data::Candle;
use crate::indicators::IndicatorSet;
use crate::portfolio::Position;
use crate::strategy::Strategy;

/// Relative distance to a band that counts as touching it
const BAND_PROXIMITY: f64 = 0.02;
const TAKE_PROFIT: f64 = 8.0;
const STOP_LOSS: f64 = -4.0;

/// Counter-trend: buy oversold prices at the lower band, sell back at the mean
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanReversion;

impl Strategy for MeanReversion {
    fn key(&self) -> &'static str {
        "meanReversion"
    }

    fn name(&self) -> &'static str {
        "Mean Reversion"
    }

    fn description(&self) -> &'static str {
        "Counter-trend entries near the lower Bollinger band with oversold RSI"
    }

    fn should_enter(&self, candle: &Candle, indicators: &IndicatorSet) -> bool {
        let distance_from_lower =
            (candle.close - indicators.bollinger_lower) / indicators.bollinger_lower;

        indicators.rsi < 30.0
            && distance_from_lower < BAND_PROXIMITY
            && candle.close < indicators.bollinger_middle
    }

    fn should_exit(&self, candle: &Candle, indicators: &IndicatorSet, position: &Position) -> bool {
        let distance_from_upper =
            (indicators.bollinger_upper - candle.close) / indicators.bollinger_upper;
        let profit = position.profit_percent(candle.close);

        indicators.rsi > 70.0
            || distance_from_upper < BAND_PROXIMITY
            || candle.close > indicators.bollinger_middle
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

    fn bands() -> IndicatorSet {
        IndicatorSet {
            rsi: 25.0,
            bollinger_upper: 120.0,
            bollinger_middle: 100.0,
            bollinger_lower: 80.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_enter_near_lower_band_when_oversold() {
        assert!(MeanReversion.should_enter(&candle(81.0), &bands()));
        assert!(MeanReversion.should_enter(&candle(79.0), &bands()));
    }

    #[test]
    fn test_no_entry_away_from_band_or_not_oversold() {
        assert!(!MeanReversion.should_enter(&candle(90.0), &bands()));

        let neutral = IndicatorSet { rsi: 45.0, ..bands() };
        assert!(!MeanReversion.should_enter(&candle(81.0), &neutral));
    }

    #[test]
    fn test_no_entry_without_bands() {
        // Zeroed bands on a short window must not trigger
        let empty = IndicatorSet { rsi: 20.0, ..Default::default() };
        assert!(!MeanReversion.should_enter(&candle(81.0), &empty));
    }

    #[test]
    fn test_exit_rules() {
        let position = Position::long("ETH_KRW", 1.0, 90.0);
        let holding = IndicatorSet { rsi: 40.0, ..bands() };

        assert!(!MeanReversion.should_exit(&candle(92.0), &holding, &position));
        // above the middle band
        assert!(MeanReversion.should_exit(&candle(101.0), &holding, &position));
        // stop loss below -4%
        assert!(MeanReversion.should_exit(&candle(86.0), &holding, &position));

        let overbought = IndicatorSet { rsi: 75.0, ..holding.clone() };
        assert!(MeanReversion.should_exit(&candle(92.0), &overbought, &position));

        let tight = IndicatorSet {
            bollinger_upper: 93.0,
            bollinger_middle: 95.0,
            ..holding
        };
        assert!(MeanReversion.should_exit(&candle(92.0), &tight, &position));
    }
}
