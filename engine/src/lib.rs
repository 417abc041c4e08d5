//! Autotrade engine: the decision core of an automated spot trading bot
//!
//! For every tracked instrument the engine periodically computes technical
//! indicators from recent candles, evaluates the active strategy against them
//! and the current position, and places at most one buy or sell per pass.
//!
//! # Features
//!
//! - **Indicators**: RSI, EMA, MACD, Bollinger Bands and volume average over a candle window
//! - **Strategies**: momentum, mean reversion and volatility breakout entry/exit predicates
//! - **Ledger**: open positions (one per instrument) and a bounded trade history
//! - **Coordinator**: per-instrument evaluation with venue-confirmed bookkeeping
//! - **Trading loop**: cancellable fixed-interval passes plus an independent feed poller
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use autotrade_engine::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = EngineConfig::from_env()?;
//!     let feed = Arc::new(SimulatedFeed::new());
//!     let venue = Arc::new(PaperVenue::new());
//!     let engine = TradingEngine::new(config, feed, venue);
//!     engine.start().await?;
//!     tokio::signal::ctrl_c().await?;
//!     engine.stop().await;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod data;
pub mod engine;
pub mod error;
pub mod exchange;
pub mod indicators;
pub mod portfolio;
pub mod strategy;

// Re-export commonly used types
pub mod prelude {
    pub use crate::config::*;
    pub use crate::data::*;
    pub use crate::engine::*;
    pub use crate::error::*;
    pub use crate::exchange::*;
    pub use crate::indicators::*;
    pub use crate::portfolio::*;
    pub use crate::strategy::*;
}

pub use error::{EngineError, LedgerError, Result};
