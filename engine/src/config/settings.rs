//! Trading settings

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Money management settings, read-only for the duration of a pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Total quote amount split evenly across the selected instruments
    pub investment_amount: f64,
    /// Stored user preference (e.g., 5.0 = -5%); exits follow the strategy rules
    pub stop_loss_percent: f64,
    /// Stored user preference (e.g., 10.0 = +10%)
    pub take_profit_percent: f64,
    /// Seconds between trading passes
    pub interval_seconds: u64,
    /// Maximum number of simultaneously open positions
    pub max_positions: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            investment_amount: 1_000_000.0,
            stop_loss_percent: 5.0,
            take_profit_percent: 10.0,
            interval_seconds: 60,
            max_positions: 5,
        }
    }
}

impl Settings {
    /// Reject non-positive or non-finite values instead of clamping them
    pub fn validate(&self) -> Result<()> {
        if !self.investment_amount.is_finite() || self.investment_amount <= 0.0 {
            return Err(EngineError::config(format!(
                "investment amount must be positive, got {}",
                self.investment_amount
            )));
        }
        if !self.stop_loss_percent.is_finite() || self.stop_loss_percent <= 0.0 {
            return Err(EngineError::config(format!(
                "stop loss percent must be positive, got {}",
                self.stop_loss_percent
            )));
        }
        if !self.take_profit_percent.is_finite() || self.take_profit_percent <= 0.0 {
            return Err(EngineError::config(format!(
                "take profit percent must be positive, got {}",
                self.take_profit_percent
            )));
        }
        if self.interval_seconds == 0 {
            return Err(EngineError::config("trading interval must be at least 1 second"));
        }
        if self.max_positions == 0 {
            return Err(EngineError::config("max positions must be at least 1"));
        }
        Ok(())
    }

    /// Quote amount allotted to a single instrument
    pub fn allocation_per_instrument(&self, instruments: usize) -> f64 {
        if instruments == 0 {
            return 0.0;
        }
        self.investment_amount / instruments as f64
    }
}
