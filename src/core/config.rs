//! Game configuration.
//!
//! The defaults are the standard 3D Mill rules: 23 pieces each, flying at
//! three pieces, losing below three, Red opens.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::error::ConfigError;

/// Tunable rule parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MillConfig {
    /// Pieces each side starts with in reserve.
    pub starting_reserve: u32,

    /// A side may move to any empty cell once reserve + on-board
    /// is at most this many.
    pub flying_threshold: u32,

    /// A side loses once reserve + on-board drops below this.
    pub losing_threshold: u32,

    /// Side to move at the start of every game.
    pub first_turn: Color,
}

impl Default for MillConfig {
    fn default() -> Self {
        Self {
            starting_reserve: 23,
            flying_threshold: 3,
            losing_threshold: 3,
            first_turn: Color::Red,
        }
    }
}

impl MillConfig {
    /// Set the starting reserve.
    #[must_use]
    pub fn with_starting_reserve(mut self, reserve: u32) -> Self {
        self.starting_reserve = reserve;
        self
    }

    /// Set the flying threshold.
    #[must_use]
    pub fn with_flying_threshold(mut self, threshold: u32) -> Self {
        self.flying_threshold = threshold;
        self
    }

    /// Set the losing threshold.
    #[must_use]
    pub fn with_losing_threshold(mut self, threshold: u32) -> Self {
        self.losing_threshold = threshold;
        self
    }

    /// Set the opening side.
    #[must_use]
    pub fn with_first_turn(mut self, color: Color) -> Self {
        self.first_turn = color;
        self
    }

    /// Check that the thresholds describe a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.losing_threshold == 0 {
            return Err(ConfigError::Invalid(
                "losing_threshold must be at least 1".to_string(),
            ));
        }
        if self.losing_threshold > self.starting_reserve {
            return Err(ConfigError::Invalid(format!(
                "losing_threshold ({}) exceeds starting_reserve ({})",
                self.losing_threshold, self.starting_reserve
            )));
        }
        if self.flying_threshold < self.losing_threshold {
            return Err(ConfigError::Invalid(format!(
                "flying_threshold ({}) is below losing_threshold ({})",
                self.flying_threshold, self.losing_threshold
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MillConfig::default();
        assert_eq!(config.starting_reserve, 23);
        assert_eq!(config.flying_threshold, 3);
        assert_eq!(config.losing_threshold, 3);
        assert_eq!(config.first_turn, Color::Red);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = MillConfig::default()
            .with_starting_reserve(9)
            .with_flying_threshold(4)
            .with_first_turn(Color::Blue);

        assert_eq!(config.starting_reserve, 9);
        assert_eq!(config.flying_threshold, 4);
        assert_eq!(config.first_turn, Color::Blue);
    }

    #[test]
    fn test_validation() {
        assert!(MillConfig::default().with_losing_threshold(0).validate().is_err());
        assert!(MillConfig::default().with_starting_reserve(2).validate().is_err());

        let err = MillConfig::default().with_flying_threshold(2).validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "config validation error: flying_threshold (2) is below losing_threshold (3)"
        );
    }

    #[test]
    fn test_serialization() {
        let config = MillConfig::default().with_starting_reserve(12);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: MillConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
