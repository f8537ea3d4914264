//! Python bindings for the tile-2048 engine.
//!
//! Lets a Python GUI shell drive the engine directly.
//!
//! # Quick Start
//!
//! ```python
//! import tile_2048
//!
//! game = tile_2048.Game2048(seed=42)
//! if game.move("left") and not game.can_move():
//!     print("game over", game.score)
//!
//! practice = tile_2048.Game2048.from_preset("l-shape")
//! print(practice.board)
//! ```

use pyo3::prelude::*;

mod py_game;

pub use py_game::*;

/// tile_2048: a 2048 board engine.
#[pymodule]
fn tile_2048(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGame2048>()?;
    m.add_function(wrap_pyfunction!(presets, m)?)?;
    Ok(())
}
