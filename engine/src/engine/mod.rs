//! Runtime: scheduling, per-instrument execution and the trading loop

pub mod coordinator;
pub mod poller;
pub mod scheduler;
pub mod state;
pub mod trading_loop;

pub use coordinator::*;
pub use poller::*;
pub use scheduler::*;
pub use state::*;
pub use trading_loop::*;
