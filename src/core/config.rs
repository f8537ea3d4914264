//! Board configuration.
//!
//! ```
//! use tile_2048::core::BoardConfig;
//!
//! let config = BoardConfig::default().with_size(5).with_four_probability(0.25);
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use super::error::BoardError;

/// Default side length.
pub const DEFAULT_SIZE: usize = 4;

/// Default chance that a spawned tile is a 4 instead of a 2.
pub const DEFAULT_FOUR_PROBABILITY: f64 = 0.1;

/// Default number of tiles placed on a fresh random board.
pub const DEFAULT_STARTING_TILES: usize = 2;

/// Parameters for a new game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Side length N of the N×N grid.
    pub size: usize,

    /// Probability that a spawn produces a 4.
    pub four_probability: f64,

    /// Tiles spawned when a random board is created.
    pub starting_tiles: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            four_probability: DEFAULT_FOUR_PROBABILITY,
            starting_tiles: DEFAULT_STARTING_TILES,
        }
    }
}

impl BoardConfig {
    #[must_use]
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn with_four_probability(mut self, probability: f64) -> Self {
        self.four_probability = probability;
        self
    }

    #[must_use]
    pub fn with_starting_tiles(mut self, count: usize) -> Self {
        self.starting_tiles = count;
        self
    }

    /// Check that the configuration describes a playable board.
    pub fn validate(&self) -> Result<(), BoardError> {
        if self.size == 0 {
            return Err(BoardError::InvalidSize(self.size));
        }
        if !(0.0..=1.0).contains(&self.four_probability) {
            return Err(BoardError::InvalidProbability(self.four_probability));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BoardConfig::default();
        assert_eq!(config.size, 4);
        assert_eq!(config.four_probability, 0.1);
        assert_eq!(config.starting_tiles, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_size() {
        let config = BoardConfig::default().with_size(0);
        assert_eq!(config.validate(), Err(BoardError::InvalidSize(0)));
    }

    #[test]
    fn test_rejects_bad_probability() {
        for p in [-0.1, 1.5, f64::NAN] {
            let config = BoardConfig::default().with_four_probability(p);
            assert!(matches!(config.validate(), Err(BoardError::InvalidProbability(_))));
        }
    }

    #[test]
    fn test_serde_fills_missing_fields() {
        let config: BoardConfig = serde_json::from_str(r#"{"size": 6}"#).unwrap();
        assert_eq!(config, BoardConfig::default().with_size(6));
    }
}
