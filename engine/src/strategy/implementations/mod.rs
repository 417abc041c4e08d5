//! Strategy implementations

pub mod mean_reversion;
pub mod momentum;
pub mod volatility_breakout;

pub use mean_reversion::*;
pub use momentum::*;
pub use volatility_breakout::*;
