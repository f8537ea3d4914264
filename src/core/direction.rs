//! Move directions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// One of the four slide directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Lowercase name (`"up"`, `"down"`, ...).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Exact lowercase name lookup. No trimming, no case folding.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Direction::ALL.into_iter().find(|d| d.name() == name)
    }

    /// Map a `w/a/s/d` key to a direction.
    #[must_use]
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            'w' => Some(Direction::Up),
            'a' => Some(Direction::Left),
            's' => Some(Direction::Down),
            'd' => Some(Direction::Right),
            _ => None,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names no direction.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown direction `{0}`")]
pub struct ParseDirectionError(pub String);

/// Lenient parse for interactive input: surrounding whitespace and case are
/// ignored.
impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Direction::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseDirectionError(s.to_string()))
    }
}
