//! Collaborator boundaries
//!
//! The engine talks to the outside world only through these traits: a market
//! feed for snapshots and candle history, a trading venue for order placement,
//! and an optional recommendation service.

pub mod feed;
pub mod order;
pub mod recommendation;
pub mod venue;

pub use feed::*;
pub use order::*;
pub use recommendation::*;
pub use venue::*;
