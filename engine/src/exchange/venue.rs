//! Trading venue contract and a paper implementation

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::info;

use crate::exchange::{Order, OrderSide};

/// Order placement endpoint
///
/// Each call is a single, synchronously confirmed attempt; the engine never
/// retries a call on its own.
#[async_trait]
pub trait TradingVenue: Send + Sync {
    async fn submit_buy(&self, instrument: &str, price: f64, quantity: f64) -> anyhow::Result<Order>;

    async fn submit_sell(&self, instrument: &str, price: f64, quantity: f64)
        -> anyhow::Result<Order>;
}

/// Venue that fills every order at the requested price
#[derive(Debug, Default)]
pub struct PaperVenue {
    orders: Mutex<Vec<Order>>,
}

impl PaperVenue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every order placed so far, oldest first
    pub async fn orders(&self) -> Vec<Order> {
        self.orders.lock().await.clone()
    }

    async fn fill(&self, instrument: &str, side: OrderSide, price: f64, quantity: f64) -> Order {
        let order = Order::filled(instrument, side, price, quantity);
        info!(
            "📝 Paper {:?} filled: {} {:.8} @ {:.2}",
            side, instrument, quantity, price
        );
        self.orders.lock().await.push(order.clone());
        order
    }
}

#[async_trait]
impl TradingVenue for PaperVenue {
    async fn submit_buy(&self, instrument: &str, price: f64, quantity: f64) -> anyhow::Result<Order> {
        Ok(self.fill(instrument, OrderSide::Buy, price, quantity).await)
    }

    async fn submit_sell(
        &self,
        instrument: &str,
        price: f64,
        quantity: f64,
    ) -> anyhow::Result<Order> {
        Ok(self.fill(instrument, OrderSide::Sell, price, quantity).await)
    }
}
