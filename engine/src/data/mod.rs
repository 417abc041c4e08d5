//! Market data module
//!
//! Candles, market snapshots, the per-instrument snapshot store and a
//! simulated feed for dry runs.

pub mod candle;
pub mod simulated;
pub mod snapshot;
pub mod storage;

pub use candle::*;
pub use simulated::*;
pub use snapshot::*;
pub use storage::*;
