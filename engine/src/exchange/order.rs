//! Order management

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Order side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    /// Buy
    Buy,
    /// Sell
    Sell,
}

/// Order status as confirmed by the venue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Filled
    Filled,
    /// Rejected
    Rejected,
}

/// Order as acknowledged by the venue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Order ID
    pub id: String,
    /// Instrument, e.g. "BTC_KRW"
    pub instrument_id: String,
    /// Order side
    pub side: OrderSide,
    /// Quantity
    pub quantity: f64,
    /// Limit price
    pub price: f64,
    /// Status
    pub status: OrderStatus,
    /// Venue supplied reason for a rejection
    pub reason: Option<String>,
    /// Created time
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Order confirmed as filled
    pub fn filled(instrument_id: &str, side: OrderSide, price: f64, quantity: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            instrument_id: instrument_id.to_string(),
            side,
            quantity,
            price,
            status: OrderStatus::Filled,
            reason: None,
            created_at: Utc::now(),
        }
    }

    /// Order refused by the venue
    pub fn rejected(
        instrument_id: &str,
        side: OrderSide,
        price: f64,
        quantity: f64,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            status: OrderStatus::Rejected,
            reason: Some(reason.into()),
            ..Self::filled(instrument_id, side, price, quantity)
        }
    }

    /// Check if order is filled
    pub fn is_filled(&self) -> bool {
        self.status == OrderStatus::Filled
    }
}
