//! Board storage and the slide/merge algorithms.
//!
//! - `row`: compress and merge on a single row
//! - `grid`: the N×N [`Board`], reverse/transpose, and directional slides

pub mod grid;
pub mod row;

pub use grid::Board;
pub use row::{compress, merge, slide_left, Row};
