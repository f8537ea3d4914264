//! Game rules: moves, spawns, and terminal detection.
//!
//! The board module knows how to slide; this module adds the score, the
//! random spawns, and the "did anything move" bookkeeping around it.

pub mod engine;

pub use engine::{Game2048, GameStatus, MoveOutcome, Spawn};
