//! Practice layouts.
//!
//! Fixed starting boards that skip the random deal. Some of them use blocked
//! cells to shrink the playable area.

use serde::{Deserialize, Serialize};

use crate::core::cell::{Cell, BLOCKED};
use crate::core::{BoardError, GameRng};
use crate::rules::Game2048;

/// Side length of every built-in preset.
pub const PRESET_SIZE: usize = 4;

const X: Cell = BLOCKED;

/// A built-in practice board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Preset {
    /// A lone 8192 in the corner with a short feeder chain.
    #[serde(rename = "straight-8192")]
    Straight8192,
    /// Three columns of the bottom two rows walled off, leaving an L of open cells.
    #[serde(rename = "l-shape")]
    LShape,
    /// A nearly finished snake of large tiles.
    #[serde(rename = "endgame")]
    Endgame,
}

impl Preset {
    #[must_use]
    pub const fn all() -> [Preset; 3] {
        [Preset::Straight8192, Preset::LShape, Preset::Endgame]
    }

    /// Stable identifier used on the command line.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Preset::Straight8192 => "straight-8192",
            Preset::LShape => "l-shape",
            Preset::Endgame => "endgame",
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Preset::Straight8192 => "Straight to 8192",
            Preset::LShape => "L-shape drill",
            Preset::Endgame => "Endgame",
        }
    }

    #[must_use]
    pub fn by_id(id: &str) -> Option<Self> {
        Self::all().into_iter().find(|p| p.id().eq_ignore_ascii_case(id.trim()))
    }

    #[must_use]
    pub const fn layout(self) -> [[Cell; PRESET_SIZE]; PRESET_SIZE] {
        match self {
            Preset::Straight8192 => [
                [0, 0, 0, 2],
                [0, 0, 0, 4],
                [0, 0, 0, 0],
                [8192, 0, 0, 0],
            ],
            Preset::LShape => [
                [0, 0, 0, 2],
                [0, 0, 0, 4],
                [X, X, X, 0],
                [X, X, X, 0],
            ],
            Preset::Endgame => [
                [64, 32, 16, 2],
                [512, 256, 128, 2],
                [4096, 2048, 1024, 4],
                [32768, 16384, 8192, 8],
            ],
        }
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Game2048 {
    /// Start a practice game. `seed` drives the spawns after each move.
    pub fn from_preset(preset: Preset, seed: u64) -> Result<Self, BoardError> {
        Self::from_preset_with_rng(preset, GameRng::new(seed))
    }

    pub fn from_preset_with_rng(preset: Preset, rng: GameRng) -> Result<Self, BoardError> {
        let board = crate::board::Board::from_rows(&preset.layout())?;
        Self::from_board(Default::default(), board, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique_and_resolvable() {
        for preset in Preset::all() {
            assert_eq!(Preset::by_id(preset.id()), Some(preset));
        }
        assert_eq!(Preset::by_id("L-SHAPE"), Some(Preset::LShape));
        assert_eq!(Preset::by_id("nope"), None);
    }

    #[test]
    fn test_layouts_are_valid_boards() {
        for preset in Preset::all() {
            let game = Game2048::from_preset(preset, 0).unwrap();
            assert_eq!(game.board().to_rows(), preset.layout().map(|r| r.to_vec()).to_vec());
            assert_eq!(game.score(), 0);
        }
    }

    #[test]
    fn test_serde_ids() {
        let json = serde_json::to_string(&Preset::Straight8192).unwrap();
        assert_eq!(json, "\"straight-8192\"");
        let back: Preset = serde_json::from_str("\"l-shape\"").unwrap();
        assert_eq!(back, Preset::LShape);
    }
}
