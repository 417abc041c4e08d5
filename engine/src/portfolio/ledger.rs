//! Position and trade history ledger

use std::collections::{HashMap, VecDeque};

use serde::Serialize;

use crate::error::LedgerError;
use crate::portfolio::{Performance, Position, TradeRecord};

/// Trade records retained, newest first; older ones are discarded
pub const HISTORY_LIMIT: usize = 1000;

/// Open positions (one per instrument) and the bounded trade log
///
/// The only place positions and history change.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Ledger {
    positions: HashMap<String, Position>,
    history: VecDeque<TradeRecord>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a position from a confirmed entry trade
    pub fn open_position(
        &mut self,
        instrument_id: &str,
        entry: &TradeRecord,
    ) -> Result<&Position, LedgerError> {
        if self.positions.contains_key(instrument_id) {
            return Err(LedgerError::DuplicatePosition(instrument_id.to_string()));
        }
        let position =
            Position::opened_at(instrument_id, entry.quantity, entry.price, entry.timestamp);
        Ok(self
            .positions
            .entry(instrument_id.to_string())
            .or_insert(position))
    }

    /// Remove and return the open position
    pub fn close_position(&mut self, instrument_id: &str) -> Result<Position, LedgerError> {
        self.positions
            .remove(instrument_id)
            .ok_or_else(|| LedgerError::NoPosition(instrument_id.to_string()))
    }

    /// Mark the open position to `price`
    pub fn mark_position(&mut self, instrument_id: &str, price: f64) -> Result<(), LedgerError> {
        let position = self
            .positions
            .get_mut(instrument_id)
            .ok_or_else(|| LedgerError::NoPosition(instrument_id.to_string()))?;
        position.mark(price);
        Ok(())
    }

    /// Insert at the head and drop everything beyond the retention cap
    pub fn append_trade(&mut self, record: TradeRecord) {
        self.history.push_front(record);
        self.history.truncate(HISTORY_LIMIT);
    }

    pub fn position(&self, instrument_id: &str) -> Option<&Position> {
        self.positions.get(instrument_id)
    }

    pub fn positions(&self) -> impl Iterator<Item = &Position> {
        self.positions.values()
    }

    pub fn open_positions(&self) -> usize {
        self.positions.len()
    }

    /// Trade history, newest first
    pub fn history(&self) -> impl Iterator<Item = &TradeRecord> {
        self.history.iter()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn performance(&self) -> Performance {
        Performance::from_history(self.history.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::StrategyKind;

    fn entry(instrument: &str) -> TradeRecord {
        TradeRecord::buy(instrument, 45_000_000.0, 0.01, StrategyKind::Momentum)
    }

    #[test]
    fn test_open_then_duplicate_fails() {
        let mut ledger = Ledger::new();
        let position = ledger.open_position("BTC_KRW", &entry("BTC_KRW")).unwrap();
        assert_eq!(position.average_entry_price, 45_000_000.0);
        assert_eq!(position.quantity, 0.01);

        assert_eq!(
            ledger.open_position("BTC_KRW", &entry("BTC_KRW")).unwrap_err(),
            LedgerError::DuplicatePosition("BTC_KRW".to_string())
        );
        assert_eq!(ledger.open_positions(), 1);
    }

    #[test]
    fn test_close_without_position_fails() {
        let mut ledger = Ledger::new();
        assert_eq!(
            ledger.close_position("ETH_KRW").unwrap_err(),
            LedgerError::NoPosition("ETH_KRW".to_string())
        );
        assert!(ledger.mark_position("ETH_KRW", 1.0).is_err());
    }

    #[test]
    fn test_close_returns_position() {
        let mut ledger = Ledger::new();
        ledger.open_position("BTC_KRW", &entry("BTC_KRW")).unwrap();
        ledger.mark_position("BTC_KRW", 46_000_000.0).unwrap();

        let closed = ledger.close_position("BTC_KRW").unwrap();
        assert_eq!(closed.current_price, 46_000_000.0);
        assert!(ledger.position("BTC_KRW").is_none());
        // reopening after a close is allowed
        assert!(ledger.open_position("BTC_KRW", &entry("BTC_KRW")).is_ok());
    }

    #[test]
    fn test_history_retention() {
        let mut ledger = Ledger::new();
        for i in 0..1001 {
            ledger.append_trade(TradeRecord::buy(
                "BTC_KRW",
                1.0 + i as f64,
                1.0,
                StrategyKind::Momentum,
            ));
        }

        assert_eq!(ledger.history_len(), 1000);
        let prices: Vec<f64> = ledger.history().map(|t| t.price).collect();
        // newest first, the very first record dropped
        assert_eq!(prices[0], 1001.0);
        assert_eq!(prices[999], 2.0);
        assert!(!prices.contains(&1.0));
    }
}
