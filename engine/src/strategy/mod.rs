//! Strategy engine module
//!
//! Entry/exit predicates, the concrete strategies and the closed registry that
//! resolves them by key.

pub mod base;
pub mod implementations;
pub mod registry;

pub use base::*;
pub use implementations::*;
pub use registry::*;
