//! # tile-2048
//!
//! A deterministic engine for the sliding-tile puzzle 2048.
//!
//! ## Design Principles
//!
//! 1. **One slide routine**: every direction is "slide left" conjugated with
//!    reverse and transpose.
//!
//! 2. **Owned randomness**: the engine carries its own seedable `GameRng`,
//!    so a seed replays a whole game.
//!
//! 3. **Moves never fail**: an unchanged board, an unknown direction name,
//!    and a full board are all ordinary outcomes. Only construction returns
//!    errors.
//!
//! ## Modules
//!
//! - `core`: cells, directions, configuration, errors, RNG
//! - `board`: grid storage, compress/merge, reverse/transpose
//! - `rules`: the `Game2048` engine
//! - `presets`: fixed practice layouts
//! - `python`: PyO3 bindings (feature `python`)

pub mod board;
pub mod core;
pub mod presets;
pub mod rules;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    BoardConfig, BoardError, Cell, Direction, GameRng, GameRngState, ParseDirectionError, BLOCKED,
    EMPTY,
};

pub use crate::board::{compress, merge, Board};

pub use crate::presets::Preset;

pub use crate::rules::{Game2048, GameStatus, MoveOutcome, Spawn};
