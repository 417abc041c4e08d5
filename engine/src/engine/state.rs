//! Engine state owned by a trading session

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;
use tracing::warn;

use crate::config::{EngineConfig, Settings};
use crate::portfolio::Ledger;
use crate::strategy::StrategyKind;

/// Mutable state shared by the trading loop, the coordinator and the poller
#[derive(Debug, Clone, Default)]
pub struct EngineState {
    pub is_trading: bool,
    pub config: EngineConfig,
    pub ledger: Ledger,
}

pub type SharedState = Arc<RwLock<EngineState>>;

impl EngineState {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            is_trading: false,
            config,
            ledger: Ledger::new(),
        }
    }

    pub fn shared(config: EngineConfig) -> SharedState {
        Arc::new(RwLock::new(Self::new(config)))
    }

    /// Read-only view for callers outside the engine
    pub fn status(&self) -> EngineStatus {
        EngineStatus {
            is_trading: self.is_trading,
            active_strategy: self.config.active_strategy.clone(),
            selected_instruments: self.config.selected_instruments.iter().cloned().collect(),
            settings: self.config.settings.clone(),
            open_positions: self.ledger.open_positions(),
            history_len: self.ledger.history_len(),
        }
    }
}

/// Point in time summary of the engine
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineStatus {
    pub is_trading: bool,
    pub active_strategy: Option<String>,
    pub selected_instruments: Vec<String>,
    pub settings: Settings,
    pub open_positions: usize,
    pub history_len: usize,
}

/// Inputs of one trading pass, captured once when the pass starts
///
/// Later configuration changes only affect the following passes.
#[derive(Debug, Clone)]
pub struct PassContext {
    /// `None` when the configured key is unset or unknown; the pass is a no-op
    pub strategy: Option<StrategyKind>,
    pub settings: Settings,
    pub instruments: Vec<String>,
    pub candle_lookback: usize,
}

impl PassContext {
    pub fn capture(config: &EngineConfig) -> Self {
        let strategy = match config.strategy() {
            Ok(kind) => Some(kind),
            Err(e) => {
                warn!("No usable strategy for this pass: {}", e);
                None
            }
        };

        Self {
            strategy,
            settings: config.settings.clone(),
            instruments: config.selected_instruments.iter().cloned().collect(),
            candle_lookback: config.candle_lookback,
        }
    }
}
