//! Strategy Registry - the closed catalog of available strategies

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::data::Candle;
use crate::error::EngineError;
use crate::indicators::IndicatorSet;
use crate::portfolio::Position;
use crate::strategy::{MeanReversion, Momentum, Strategy, VolatilityBreakout};

/// Every strategy the engine can run, resolved once per pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StrategyKind {
    Momentum,
    MeanReversion,
    VolatilityBreakout,
}

/// Catalog entry for listing strategies
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrategyInfo {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 3] = [
        StrategyKind::Momentum,
        StrategyKind::MeanReversion,
        StrategyKind::VolatilityBreakout,
    ];

    fn implementation(&self) -> &'static dyn Strategy {
        match self {
            StrategyKind::Momentum => &Momentum,
            StrategyKind::MeanReversion => &MeanReversion,
            StrategyKind::VolatilityBreakout => &VolatilityBreakout,
        }
    }

    pub fn info(&self) -> StrategyInfo {
        StrategyInfo {
            key: self.key(),
            name: self.name(),
            description: self.description(),
        }
    }

    /// Get list of available strategies
    pub fn catalog() -> Vec<StrategyInfo> {
        Self::ALL.iter().map(StrategyKind::info).collect()
    }
}

impl Strategy for StrategyKind {
    fn key(&self) -> &'static str {
        self.implementation().key()
    }

    fn name(&self) -> &'static str {
        self.implementation().name()
    }

    fn description(&self) -> &'static str {
        self.implementation().description()
    }

    fn should_enter(&self, candle: &Candle, indicators: &IndicatorSet) -> bool {
        self.implementation().should_enter(candle, indicators)
    }

    fn should_exit(&self, candle: &Candle, indicators: &IndicatorSet, position: &Position) -> bool {
        self.implementation().should_exit(candle, indicators, position)
    }
}

impl FromStr for StrategyKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['_', '-', ' '], "").as_str() {
            "momentum" => Ok(Self::Momentum),
            "meanreversion" => Ok(Self::MeanReversion),
            "volatilitybreakout" => Ok(Self::VolatilityBreakout),
            _ => Err(EngineError::config(format!("unknown strategy: {}", s))),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
