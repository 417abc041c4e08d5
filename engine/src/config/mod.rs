//! Configuration module

pub mod settings;
pub mod session;

pub use settings::*;
pub use session::*;
