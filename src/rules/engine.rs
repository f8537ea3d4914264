//! The 2048 game engine.
//!
//! `Game2048` owns the board, the score, and the random source. Callers drive
//! it with [`Game2048::make_move`] and poll [`Game2048::can_move`] afterwards;
//! nothing in the engine transitions to game over on its own.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::cell::Cell;
use crate::core::{BoardConfig, BoardError, Direction, GameRng};

/// Whether any legal move remains.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// [`Game2048::can_move`] reports true. Usually some move changes the
    /// board, but adjacent blocked cells also count, so a board of walls and
    /// locked tiles can be playable with no legal move.
    Playable,
    /// No empty cell and no equal neighbours.
    Terminal,
}

/// A tile placed by [`Game2048::spawn_tile`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spawn {
    pub row: usize,
    pub col: usize,
    pub value: Cell,
}

/// Everything a caller may want to know after one move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Whether the board changed. A tile is spawned only if so.
    pub moved: bool,
    /// Points won by merges in this move.
    pub gained: u64,
    /// The tile spawned after the move, if any.
    pub spawned: Option<Spawn>,
    /// Status after the spawn.
    pub status: GameStatus,
}

/// A single 2048 game.
///
/// ## Example
///
/// ```
/// use tile_2048::{Direction, Game2048};
///
/// let mut game = Game2048::from_layout(&[
///     [2, 2, 0, 0],
///     [0, 0, 0, 0],
///     [0, 0, 0, 0],
///     [0, 0, 0, 0],
/// ], 7).unwrap();
///
/// assert!(game.make_move(Direction::Left));
/// assert_eq!(game.board().get(0, 0), 4);
/// assert_eq!(game.score(), 4);
/// ```
#[derive(Clone, Debug)]
pub struct Game2048 {
    config: BoardConfig,
    board: Board,
    score: u64,
    moves: u32,
    rng: GameRng,
}

impl Game2048 {
    /// Start a random game from `seed`.
    pub fn new(config: BoardConfig, seed: u64) -> Result<Self, BoardError> {
        Self::with_rng(config, GameRng::new(seed))
    }

    /// Start a random game seeded from the operating system.
    pub fn from_entropy(config: BoardConfig) -> Result<Self, BoardError> {
        Self::with_rng(config, GameRng::from_entropy())
    }

    /// Start a random game drawing from `rng`.
    pub fn with_rng(config: BoardConfig, rng: GameRng) -> Result<Self, BoardError> {
        config.validate()?;
        let board = Board::new(config.size)?;
        let mut game = Self {
            config,
            board,
            score: 0,
            moves: 0,
            rng,
        };
        game.seed_board();
        Ok(game)
    }

    /// Start from a fixed layout with default spawn settings.
    ///
    /// The layout is copied as given, blocked cells included. No tiles are
    /// spawned and the score starts at 0. `seed` only drives later spawns.
    pub fn from_layout<R: AsRef<[Cell]>>(rows: &[R], seed: u64) -> Result<Self, BoardError> {
        let board = Board::from_rows(rows)?;
        let config = BoardConfig::default().with_size(board.size());
        Self::from_board(config, board, GameRng::new(seed))
    }

    /// Start a `size`×`size` game, from `layout` when one is given.
    ///
    /// A missing or empty layout deals a random board with default spawn
    /// settings; a non-empty one is copied as in [`Game2048::from_board`].
    pub fn start<R: AsRef<[Cell]>>(
        size: usize,
        layout: Option<&[R]>,
        rng: GameRng,
    ) -> Result<Self, BoardError> {
        match layout.filter(|rows| !rows.is_empty()) {
            Some(rows) => Self::from_board(BoardConfig::default(), Board::from_rows(rows)?, rng),
            None => Self::with_rng(BoardConfig::default().with_size(size), rng),
        }
    }

    /// Start from an existing board. `config.size` is overridden by the
    /// board's own size.
    pub fn from_board(config: BoardConfig, board: Board, rng: GameRng) -> Result<Self, BoardError> {
        let config = config.with_size(board.size());
        config.validate()?;
        Ok(Self {
            config,
            board,
            score: 0,
            moves: 0,
            rng,
        })
    }

    /// Throw the current board away and deal a fresh random one.
    ///
    /// The random source keeps running, so a restarted game differs from the
    /// first one.
    pub fn restart(&mut self) {
        self.board.clear();
        self.score = 0;
        self.moves = 0;
        self.seed_board();
        debug!("restarted {}x{} game", self.config.size, self.config.size);
    }

    fn seed_board(&mut self) {
        for _ in 0..self.config.starting_tiles {
            self.spawn_tile();
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Number of moves that changed the board.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.moves
    }

    #[must_use]
    pub fn max_tile(&self) -> Cell {
        self.board.max_tile()
    }

    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.board.tile_count()
    }

    // === Spawning ===

    /// Place a 2 (or, with the configured probability, a 4) on a uniformly
    /// chosen empty cell. Does nothing on a full board.
    pub fn spawn_tile(&mut self) -> Option<Spawn> {
        let empty = self.board.empty_cells();
        let Some(&(row, col)) = self.rng.choose(&empty) else {
            trace!("spawn skipped: board full");
            return None;
        };
        let value = if self.rng.gen_bool(self.config.four_probability) { 4 } else { 2 };
        self.board.set(row, col, value);
        debug!("spawned {value} at ({row}, {col})");
        Some(Spawn { row, col, value })
    }

    // === Directional primitives (no spawn) ===

    fn slide(&mut self, direction: Direction) -> bool {
        let (moved, gained) = self.board.slide(direction);
        self.score = self.score.saturating_add(gained);
        moved
    }

    /// Slide every row left and merge. Does not spawn.
    pub fn move_left(&mut self) -> bool {
        self.slide(Direction::Left)
    }

    /// Slide every row right and merge. Does not spawn.
    pub fn move_right(&mut self) -> bool {
        self.slide(Direction::Right)
    }

    /// Slide every column up and merge. Does not spawn.
    pub fn move_up(&mut self) -> bool {
        self.slide(Direction::Up)
    }

    /// Slide every column down and merge. Does not spawn.
    pub fn move_down(&mut self) -> bool {
        self.slide(Direction::Down)
    }

    // === Full moves ===

    /// Play one move. If the board changed, spawn one tile and return `true`;
    /// otherwise leave everything untouched and return `false`.
    pub fn make_move(&mut self, direction: Direction) -> bool {
        self.step(direction).moved
    }

    /// Play a move given by its exact name (`"up"`, `"down"`, `"left"`,
    /// `"right"`).
    ///
    /// Any other string, including a differently cased or padded name, is a
    /// no-op returning `false`.
    pub fn move_named(&mut self, direction: &str) -> bool {
        match Direction::from_name(direction) {
            Some(direction) => self.make_move(direction),
            None => {
                trace!("ignored move `{direction}`");
                false
            }
        }
    }

    /// Play one move and report the details.
    pub fn step(&mut self, direction: Direction) -> MoveOutcome {
        let score_before = self.score;
        let moved = self.slide(direction);
        let spawned = if moved {
            self.moves += 1;
            self.spawn_tile()
        } else {
            None
        };
        let gained = self.score - score_before;

        if moved {
            debug!("move {direction}: +{gained}, score {}", self.score);
        } else {
            trace!("move {direction}: board unchanged");
        }

        MoveOutcome {
            moved,
            gained,
            spawned,
            status: self.status(),
        }
    }

    // === Terminal detection ===

    /// True while an empty cell or a pair of equal neighbours exists.
    #[must_use]
    pub fn can_move(&self) -> bool {
        self.board.can_move()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.can_move() {
            GameStatus::Playable
        } else {
            GameStatus::Terminal
        }
    }

    /// Directions that would change the board right now.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|&d| self.board.clone().slide(d).0)
            .collect()
    }
}

impl std::fmt::Display for Game2048 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.board)?;
        writeln!(f, "Score: {}", self.score)?;
        writeln!(f, "{}", "-".repeat(20))
    }
}
