//! Trade records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::exchange::OrderSide;
use crate::strategy::StrategyKind;

/// Immutable fact of a confirmed buy or sell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeRecord {
    pub id: String,
    pub instrument_id: String,
    pub side: OrderSide,
    pub price: f64,
    pub quantity: f64,
    /// Realized profit, sells only
    pub profit_percent: Option<f64>,
    pub timestamp: DateTime<Utc>,
    pub strategy: StrategyKind,
}

impl TradeRecord {
    pub fn buy(instrument_id: &str, price: f64, quantity: f64, strategy: StrategyKind) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            instrument_id: instrument_id.to_string(),
            side: OrderSide::Buy,
            price,
            quantity,
            profit_percent: None,
            timestamp: Utc::now(),
            strategy,
        }
    }

    pub fn sell(
        instrument_id: &str,
        price: f64,
        quantity: f64,
        profit_percent: f64,
        strategy: StrategyKind,
    ) -> Self {
        Self {
            side: OrderSide::Sell,
            profit_percent: Some(profit_percent),
            ..Self::buy(instrument_id, price, quantity, strategy)
        }
    }

    pub fn is_sell(&self) -> bool {
        self.side == OrderSide::Sell
    }
}
