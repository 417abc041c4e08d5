//! Scripted collaborators shared by the integration tests

#![allow(dead_code)]

use std::collections::{BTreeSet, HashMap};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use tokio::sync::Notify;

use autotrade_engine::prelude::*;

/// Oldest-first candles falling by `step` per candle and closing at `last`
pub fn falling_to(last: f64, step: f64, count: usize) -> Vec<Candle> {
    let start = Utc::now() - Duration::minutes(count as i64);
    (0..count)
        .map(|i| {
            let close = last + step * (count - 1 - i) as f64;
            Candle::new(close, close, close, close, 1.0, start + Duration::minutes(i as i64))
        })
        .collect()
}

pub fn config(strategy: &str, instruments: &[&str]) -> EngineConfig {
    EngineConfig {
        active_strategy: Some(strategy.to_string()),
        selected_instruments: instruments.iter().map(|s| s.to_string()).collect::<BTreeSet<_>>(),
        ..Default::default()
    }
}

#[derive(Debug, Clone, Default)]
struct Market {
    price: f64,
    candles: Vec<Candle>,
    history_unavailable: bool,
}

/// Feed serving fixed prices and candle windows per instrument
#[derive(Debug, Default)]
pub struct ScriptedFeed {
    markets: Mutex<HashMap<String, Market>>,
}

impl ScriptedFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_market(&self, instrument: &str, price: f64, candles: Vec<Candle>) {
        self.markets.lock().unwrap().insert(
            instrument.to_string(),
            Market {
                price,
                candles,
                history_unavailable: false,
            },
        );
    }

    /// Move the snapshot price, keeping the candle window
    pub fn set_price(&self, instrument: &str, price: f64) {
        if let Some(market) = self.markets.lock().unwrap().get_mut(instrument) {
            market.price = price;
        }
    }

    pub fn fail_history(&self, instrument: &str) {
        if let Some(market) = self.markets.lock().unwrap().get_mut(instrument) {
            market.history_unavailable = true;
        }
    }
}

#[async_trait]
impl MarketFeed for ScriptedFeed {
    async fn latest_snapshot(&self, instrument: &str) -> anyhow::Result<Option<MarketSnapshot>> {
        let markets = self.markets.lock().unwrap();
        Ok(markets.get(instrument).map(|market| {
            MarketSnapshot::new(
                Candle::new(market.price, market.price, market.price, market.price, 1.0, Utc::now()),
                OrderBook::default(),
            )
        }))
    }

    async fn recent_candles(&self, instrument: &str, count: usize) -> anyhow::Result<Vec<Candle>> {
        let markets = self.markets.lock().unwrap();
        let market = markets
            .get(instrument)
            .ok_or_else(|| anyhow::anyhow!("unknown instrument {}", instrument))?;
        if market.history_unavailable {
            anyhow::bail!("candle history unavailable for {}", instrument);
        }
        Ok(tail(&market.candles, count).to_vec())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VenueMode {
    Fill,
    Reject,
    Unreachable,
}

/// Submitted order as seen by the venue
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub side: OrderSide,
    pub instrument: String,
    pub price: f64,
    pub quantity: f64,
}

/// Venue with a switchable outcome and an optional gate that holds each
/// submission until released
#[derive(Debug)]
pub struct ScriptedVenue {
    mode: Mutex<VenueMode>,
    submissions: Mutex<Vec<Submission>>,
    gated: bool,
    pub entered: Notify,
    pub release: Notify,
}

impl ScriptedVenue {
    pub fn new(mode: VenueMode) -> Self {
        Self {
            mode: Mutex::new(mode),
            submissions: Mutex::new(Vec::new()),
            gated: false,
            entered: Notify::new(),
            release: Notify::new(),
        }
    }

    pub fn gated() -> Self {
        Self {
            gated: true,
            ..Self::new(VenueMode::Fill)
        }
    }

    pub fn set_mode(&self, mode: VenueMode) {
        *self.mode.lock().unwrap() = mode;
    }

    pub fn submissions(&self) -> Vec<Submission> {
        self.submissions.lock().unwrap().clone()
    }

    async fn submit(
        &self,
        side: OrderSide,
        instrument: &str,
        price: f64,
        quantity: f64,
    ) -> anyhow::Result<Order> {
        self.submissions.lock().unwrap().push(Submission {
            side,
            instrument: instrument.to_string(),
            price,
            quantity,
        });

        if self.gated {
            self.entered.notify_one();
            self.release.notified().await;
        }

        let mode = *self.mode.lock().unwrap();
        match mode {
            VenueMode::Fill => Ok(Order::filled(instrument, side, price, quantity)),
            VenueMode::Reject => Ok(Order::rejected(
                instrument,
                side,
                price,
                quantity,
                "insufficient balance",
            )),
            VenueMode::Unreachable => anyhow::bail!("connection reset by venue"),
        }
    }
}

#[async_trait]
impl TradingVenue for ScriptedVenue {
    async fn submit_buy(&self, instrument: &str, price: f64, quantity: f64) -> anyhow::Result<Order> {
        self.submit(OrderSide::Buy, instrument, price, quantity).await
    }

    async fn submit_sell(
        &self,
        instrument: &str,
        price: f64,
        quantity: f64,
    ) -> anyhow::Result<Order> {
        self.submit(OrderSide::Sell, instrument, price, quantity).await
    }
}
