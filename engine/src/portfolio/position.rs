//! Position tracking

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Open holding in one instrument
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    /// Instrument, e.g. "BTC_KRW"; unique among open positions
    pub instrument_id: String,
    /// Position side
    pub side: PositionSide,
    /// Quantity
    pub quantity: f64,
    /// Entry price
    pub average_entry_price: f64,
    /// Entry time
    pub entry_time: DateTime<Utc>,
    /// Last marked price
    pub current_price: f64,
    /// Unrealized P&L in quote currency
    pub unrealized_pnl: f64,
}

/// Position side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionSide {
    /// Long position
    Long,
}

impl Position {
    /// Create new long position entered now
    pub fn long(instrument_id: &str, quantity: f64, entry_price: f64) -> Self {
        Self::opened_at(instrument_id, quantity, entry_price, Utc::now())
    }

    pub fn opened_at(
        instrument_id: &str,
        quantity: f64,
        entry_price: f64,
        entry_time: DateTime<Utc>,
    ) -> Self {
        Self {
            instrument_id: instrument_id.to_string(),
            side: PositionSide::Long,
            quantity,
            average_entry_price: entry_price,
            entry_time,
            current_price: entry_price,
            unrealized_pnl: 0.0,
        }
    }

    /// Profit in percent of the entry price if closed at `price`
    pub fn profit_percent(&self, price: f64) -> f64 {
        if self.average_entry_price <= 0.0 {
            return 0.0;
        }
        ((price - self.average_entry_price) / self.average_entry_price) * 100.0
    }

    /// Update current price and recalculate P&L
    pub fn mark(&mut self, price: f64) {
        self.current_price = price;
        self.unrealized_pnl = (price - self.average_entry_price) * self.quantity;
    }

    /// Get entry value
    pub fn entry_value(&self) -> f64 {
        self.average_entry_price * self.quantity
    }
}
