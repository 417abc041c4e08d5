//! Base strategy trait

use crate::data::Candle;
use crate::indicators::IndicatorSet;
use crate::portfolio::Position;

/// Entry/exit rules of a trading strategy
///
/// Both predicates are pure: they only read their arguments.
pub trait Strategy {
    /// Stable key used in configuration
    fn key(&self) -> &'static str;

    /// Human readable name
    fn name(&self) -> &'static str;

    /// One line summary
    fn description(&self) -> &'static str;

    /// Open a position when flat
    fn should_enter(&self, candle: &Candle, indicators: &IndicatorSet) -> bool;

    /// Close the open position
    fn should_exit(&self, candle: &Candle, indicators: &IndicatorSet, position: &Position) -> bool;
}
