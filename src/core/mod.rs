//! Core types: cells, directions, configuration, errors, RNG.

pub mod cell;
pub mod config;
pub mod direction;
pub mod error;
pub mod rng;

pub use cell::{Cell, BLOCKED, EMPTY};
pub use config::BoardConfig;
pub use direction::{Direction, ParseDirectionError};
pub use error::BoardError;
pub use rng::{GameRng, GameRngState};
