//! Portfolio management module

pub mod ledger;
pub mod performance;
pub mod position;
pub mod risk;
pub mod trade;

pub use ledger::*;
pub use performance::*;
pub use position::*;
pub use risk::*;
pub use trade::*;
