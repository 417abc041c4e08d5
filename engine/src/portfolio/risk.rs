//! Portfolio limits checked before opening positions

use crate::config::Settings;

/// Settings-level limits applied regardless of the active strategy
#[derive(Debug)]
pub struct RiskManager<'a> {
    settings: &'a Settings,
}

impl<'a> RiskManager<'a> {
    /// Create new risk manager
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Check max open positions
    pub fn can_open_position(&self, current_positions: usize) -> bool {
        current_positions < self.settings.max_positions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_positions() {
        let settings = Settings {
            max_positions: 2,
            ..Settings::default()
        };
        let risk = RiskManager::new(&settings);
        assert!(risk.can_open_position(0));
        assert!(risk.can_open_position(1));
        assert!(!risk.can_open_position(2));
        assert!(!risk.can_open_position(3));
    }
}
