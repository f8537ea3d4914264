//! Game bindings for Python.

use numpy::{PyArray1, PyArray2, PyArrayMethods};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{BoardError, Cell, GameRng};
use crate::presets::Preset;
use crate::rules::Game2048;

fn value_error(err: BoardError) -> PyErr {
    PyErr::new::<PyValueError, _>(err.to_string())
}

/// Python wrapper for the 2048 engine.
///
/// Mirrors the call surface a GUI needs: `move`, `can_move`, and read access
/// to `board` and `score`.
#[pyclass(name = "Game2048")]
pub struct PyGame2048 {
    inner: Game2048,
}

#[pymethods]
impl PyGame2048 {
    /// Create a new game.
    ///
    /// # Arguments
    /// - size: Side length of a random board
    /// - init_board: Fixed layout (list of rows); skips the random deal.
    ///   None or an empty list deals a random board instead
    /// - seed: RNG seed; drawn from the OS when omitted
    #[new]
    #[pyo3(signature = (size = 4, init_board = None, seed = None))]
    fn new(size: usize, init_board: Option<Vec<Vec<Cell>>>, seed: Option<u64>) -> PyResult<Self> {
        let rng = seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let inner = Game2048::start(size, init_board.as_deref(), rng).map_err(value_error)?;
        Ok(Self { inner })
    }

    /// Start a built-in practice board by id (e.g. "l-shape").
    #[staticmethod]
    #[pyo3(signature = (preset, seed = None))]
    fn from_preset(preset: &str, seed: Option<u64>) -> PyResult<Self> {
        let preset = Preset::by_id(preset)
            .ok_or_else(|| PyErr::new::<PyValueError, _>(format!("unknown preset `{preset}`")))?;
        let rng = seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let inner = Game2048::from_preset_with_rng(preset, rng).map_err(value_error)?;
        Ok(Self { inner })
    }

    /// Apply a move by exact name ("up", "down", "left", "right"). Returns
    /// whether anything moved.
    ///
    /// Any other string returns False without touching the board.
    #[pyo3(name = "move")]
    fn make_move(&mut self, direction: &str) -> bool {
        self.inner.move_named(direction)
    }

    fn can_move(&self) -> bool {
        self.inner.can_move()
    }

    /// Place one random tile. Returns (row, col, value) or None on a full board.
    fn spawn_tile(&mut self) -> Option<(usize, usize, Cell)> {
        self.inner.spawn_tile().map(|s| (s.row, s.col, s.value))
    }

    /// Deal a fresh random board of the same size.
    fn restart(&mut self) {
        self.inner.restart();
    }

    /// Directions that would change the board.
    fn legal_moves(&self) -> Vec<&'static str> {
        self.inner.legal_moves().into_iter().map(|d| d.name()).collect()
    }

    #[getter]
    fn board(&self) -> Vec<Vec<Cell>> {
        self.inner.board().to_rows()
    }

    #[getter]
    fn score(&self) -> u64 {
        self.inner.score()
    }

    #[getter]
    fn size(&self) -> usize {
        self.inner.size()
    }

    /// Board as an int64 numpy array of shape [size, size].
    fn board_array<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<i64>>> {
        let n = self.inner.size();
        PyArray1::from_slice_bound(py, self.inner.board().cells())
            .reshape([n, n])
            .map_err(|e| PyErr::new::<PyValueError, _>(format!("{}", e)))
    }

    fn __repr__(&self) -> String {
        format!(
            "Game2048(size={}, score={}, max_tile={})",
            self.inner.size(),
            self.inner.score(),
            self.inner.max_tile()
        )
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }
}

/// List built-in practice boards as (id, name) pairs.
#[pyfunction]
pub fn presets() -> Vec<(&'static str, &'static str)> {
    Preset::all().into_iter().map(|p| (p.id(), p.name())).collect()
}
