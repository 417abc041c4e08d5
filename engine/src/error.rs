//! Error taxonomy of the engine

use thiserror::Error;

use crate::exchange::OrderSide;

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors surfaced by the engine
#[derive(Error, Debug)]
pub enum EngineError {
    /// Invalid settings or unknown strategy; fails session start
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// Snapshot or candle history missing for an instrument this cycle
    #[error("Market data unavailable for {instrument}: {reason}")]
    FeedUnavailable { instrument: String, reason: String },

    /// The venue refused or failed an order; the ledger is left untouched
    #[error("{side:?} order for {instrument} rejected: {reason}")]
    VenueRejection {
        instrument: String,
        side: OrderSide,
        reason: String,
    },

    /// Ledger invariant broken, points at a logic error upstream
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

/// Ledger consistency violations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("a position is already open for {0}")]
    DuplicatePosition(String),

    #[error("no open position for {0}")]
    NoPosition(String),
}

impl EngineError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub(crate) fn feed(instrument: &str, reason: impl ToString) -> Self {
        Self::FeedUnavailable {
            instrument: instrument.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Per-cycle errors that only skip the instrument
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::FeedUnavailable { .. } | Self::VenueRejection { .. }
        )
    }
}
