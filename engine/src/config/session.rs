//! Session configuration loaded from the environment

use std::collections::BTreeSet;
use std::fmt::Display;
use std::str::FromStr;

use anyhow::Context;
use dotenv::dotenv;
use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::error::{EngineError, Result};
use crate::strategy::StrategyKind;

/// Default number of candles fetched for indicator computation
pub const DEFAULT_CANDLE_LOOKBACK: usize = 200;

/// Default snapshot polling period in milliseconds
pub const DEFAULT_FEED_INTERVAL_MS: u64 = 1_000;

/// Everything a trading session needs before it can start
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineConfig {
    pub settings: Settings,
    /// Strategy key, e.g. "momentum"
    pub active_strategy: Option<String>,
    pub selected_instruments: BTreeSet<String>,
    pub feed_interval_ms: u64,
    pub candle_lookback: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            settings: Settings::default(),
            active_strategy: None,
            selected_instruments: BTreeSet::new(),
            feed_interval_ms: DEFAULT_FEED_INTERVAL_MS,
            candle_lookback: DEFAULT_CANDLE_LOOKBACK,
        }
    }
}

impl EngineConfig {
    /// Load from `.env` and the process environment
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; missing keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Settings::default();

        let settings = Settings {
            investment_amount: parse_or(&lookup, "INVESTMENT_AMOUNT", defaults.investment_amount)?,
            stop_loss_percent: parse_or(&lookup, "STOP_LOSS_PERCENT", defaults.stop_loss_percent)?,
            take_profit_percent: parse_or(
                &lookup,
                "TAKE_PROFIT_PERCENT",
                defaults.take_profit_percent,
            )?,
            interval_seconds: parse_or(&lookup, "TRADING_INTERVAL_SECS", defaults.interval_seconds)?,
            max_positions: parse_or(&lookup, "MAX_POSITIONS", defaults.max_positions)?,
        };

        let selected_instruments = lookup("SELECTED_INSTRUMENTS")
            .map(|raw| parse_instruments(&raw))
            .unwrap_or_default();

        Ok(Self {
            settings,
            active_strategy: lookup("ACTIVE_STRATEGY").filter(|s| !s.trim().is_empty()),
            selected_instruments,
            feed_interval_ms: parse_or(&lookup, "FEED_INTERVAL_MS", DEFAULT_FEED_INTERVAL_MS)?,
            candle_lookback: parse_or(&lookup, "CANDLE_LOOKBACK", DEFAULT_CANDLE_LOOKBACK)?,
        })
    }

    /// Resolve the configured strategy key
    pub fn strategy(&self) -> Result<StrategyKind> {
        let key = self
            .active_strategy
            .as_deref()
            .ok_or_else(|| EngineError::config("no active strategy selected"))?;
        key.parse()
    }

    /// Check everything a session start depends on
    pub fn validate(&self) -> Result<StrategyKind> {
        self.settings.validate()?;
        if self.selected_instruments.is_empty() {
            return Err(EngineError::config("no instruments selected"));
        }
        if self.feed_interval_ms == 0 {
            return Err(EngineError::config("feed interval must be positive"));
        }
        if self.candle_lookback == 0 {
            return Err(EngineError::config("candle lookback must be positive"));
        }
        self.strategy()
    }
}

/// Split a comma separated instrument list, dropping blanks and duplicates
pub fn parse_instruments(raw: &str) -> BTreeSet<String> {
    raw.split(',')
        .map(|s| s.trim().to_uppercase())
        .filter(|s| !s.is_empty())
        .collect()
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> anyhow::Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("{}", e))
            .with_context(|| format!("invalid value for {}: {:?}", key, raw)),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_environment_is_empty() {
        let config = EngineConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.settings, Settings::default());
        assert!(config.active_strategy.is_none());
        assert!(config.selected_instruments.is_empty());
        assert_eq!(config.candle_lookback, 200);
    }

    #[test]
    fn test_reads_values() {
        let config = EngineConfig::from_lookup(lookup_from(&[
            ("ACTIVE_STRATEGY", "momentum"),
            ("SELECTED_INSTRUMENTS", "btc_krw, ETH_KRW,,BTC_KRW"),
            ("INVESTMENT_AMOUNT", "500000"),
            ("TRADING_INTERVAL_SECS", "30"),
        ]))
        .unwrap();

        assert_eq!(config.settings.investment_amount, 500_000.0);
        assert_eq!(config.settings.interval_seconds, 30);
        assert_eq!(config.selected_instruments.len(), 2);
        assert!(config.selected_instruments.contains("BTC_KRW"));
        assert_eq!(config.validate().unwrap(), StrategyKind::Momentum);
    }

    #[test]
    fn test_unparsable_value_is_an_error() {
        let result = EngineConfig::from_lookup(lookup_from(&[("MAX_POSITIONS", "many")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_requires_instruments_and_known_strategy() {
        let mut config = EngineConfig::default();
        config.active_strategy = Some("momentum".to_string());
        assert!(matches!(config.validate(), Err(EngineError::Configuration(_))));

        config.selected_instruments.insert("BTC_KRW".to_string());
        assert!(config.validate().is_ok());

        config.active_strategy = Some("martingale".to_string());
        assert!(matches!(config.validate(), Err(EngineError::Configuration(_))));

        config.active_strategy = None;
        assert!(config.validate().is_err());
    }
}
