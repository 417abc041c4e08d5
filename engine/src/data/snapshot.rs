//! Market snapshots: the latest candle plus an order book

use serde::{Deserialize, Serialize};

use crate::data::Candle;

/// One price level of the order book
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BookLevel {
    pub price: f64,
    pub quantity: f64,
}

/// Top of book, best level first on both sides
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderBook {
    pub bids: Vec<BookLevel>,
    pub asks: Vec<BookLevel>,
}

impl OrderBook {
    pub fn best_bid(&self) -> Option<f64> {
        self.bids.first().map(|l| l.price)
    }

    pub fn best_ask(&self) -> Option<f64> {
        self.asks.first().map(|l| l.price)
    }

    /// Ask minus bid, when both sides are present
    pub fn spread(&self) -> Option<f64> {
        Some(self.best_ask()? - self.best_bid()?)
    }
}

/// Latest market state for one instrument
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    pub candle: Candle,
    pub orderbook: OrderBook,
}

impl MarketSnapshot {
    pub fn new(candle: Candle, orderbook: OrderBook) -> Self {
        Self { candle, orderbook }
    }

    /// Price used for order placement
    pub fn price(&self) -> f64 {
        self.candle.close
    }
}
