//! Game state module - the board engine
//!
//! This module ties together the board, the tile RNG and scoring. It owns the
//! grid and the spawned-four counter, applies commands coming from the
//! presentation layer and tracks the Playing -> GameOver transition.

use log::{debug, info, trace};

use crate::board::Board;
use crate::config::{GameConfig, NoopCheck};
use crate::rng::TileRng;
use crate::scoring::compute_score;
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Engine lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Playing,
    /// Terminal: no direction changes the grid.
    GameOver,
}

/// Result of applying one command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The grid changed and a tile was spawned.
    Moved,
    /// The move left the grid as it was; nothing spawned.
    Unchanged,
    /// No direction can change the grid any more.
    GameOver,
    /// The game is already over.
    Ignored,
    Quit,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R> {
    board: Board,
    /// Tiles spawned directly as 4s (excluded from the score).
    four_spawn_count: u32,
    score: u32,
    status: Status,
    /// Commands that changed the grid.
    moves: u32,
    noop_check: NoopCheck,
    rng: R,
}

impl<R: TileRng> GameState<R> {
    /// Create a new game: empty grid plus the opening tile
    pub fn new(rng: R) -> Self {
        let mut state = Self::from_parts(Board::new(), 0, rng);
        state.spawn_tile();
        state
    }

    /// New game using the engine settings from `config`.
    pub fn with_config(config: &GameConfig, rng: R) -> Self {
        Self::new(rng).with_noop_check(config.noop_check)
    }

    /// Resume from an explicit board without spawning.
    ///
    /// The state starts as Playing; a stuck board is detected on the next move.
    pub fn from_parts(board: Board, four_spawn_count: u32, rng: R) -> Self {
        let mut state = Self {
            board,
            four_spawn_count,
            score: 0,
            status: Status::Playing,
            moves: 0,
            noop_check: NoopCheck::default(),
            rng,
        };
        state.compute_score();
        state
    }

    pub fn with_noop_check(mut self, noop_check: NoopCheck) -> Self {
        self.noop_check = noop_check;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn grid(&self) -> &Grid {
        self.board.rows()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn four_spawn_count(&self) -> u32 {
        self.four_spawn_count
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status == Status::GameOver
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn noop_check(&self) -> NoopCheck {
        self.noop_check
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Place a new tile in a uniformly chosen empty cell.
    ///
    /// The opening tile on an empty grid is always a 2. Later tiles are 4 with
    /// probability 1/10 (counted in `four_spawn_count`), 2 otherwise.
    ///
    /// # Panics
    ///
    /// Panics if the grid has no empty cell. Callers only spawn after a move
    /// that changed the grid, which always leaves a free cell.
    pub fn spawn_tile(&mut self) -> (usize, usize, u32) {
        let empty = self.board.empty_cells();
        assert!(
            !empty.is_empty(),
            "spawn_tile called on a full grid: {:?}",
            self.board.rows()
        );

        let pick = self.rng.next_range(empty.len() as u32) as usize;
        let (row, col) = empty[pick];

        let value = if empty.len() == GRID_CELLS {
            FIRST_SPAWN_VALUE
        } else if self.rng.next_range(RARE_SPAWN_ONE_IN) == 0 {
            self.four_spawn_count += 1;
            SPAWN_VALUE_RARE
        } else {
            SPAWN_VALUE_COMMON
        };

        self.board.set(row, col, value);
        debug!("spawned {} at ({}, {})", value, row, col);
        (row, col, value)
    }

    /// Slide the grid toward `dir` without spawning or scoring.
    ///
    /// Returns true if any cell changed.
    pub fn slide(&mut self, dir: Direction) -> bool {
        self.board.slide(dir)
    }

    /// Recompute the score from the grid and the spawned-four counter.
    pub fn compute_score(&mut self) -> u32 {
        self.score = compute_score(self.board.rows(), self.four_spawn_count);
        self.score
    }

    /// True if neither Right nor Down would change the grid.
    pub fn is_same_board(&self) -> bool {
        [Direction::Right, Direction::Down]
            .into_iter()
            .all(|dir| !self.board.would_change(dir))
    }

    /// True if no direction would change the grid. The grid is left as is.
    pub fn is_game_over(&self) -> bool {
        Direction::ALL
            .into_iter()
            .all(|dir| !self.board.would_change(dir))
    }

    fn skip_move(&self, dir: Direction) -> bool {
        match self.noop_check {
            NoopCheck::Legacy => {
                matches!(dir, Direction::Right | Direction::Down) && self.is_same_board()
            }
            NoopCheck::Symmetric => !self.board.would_change(dir),
        }
    }

    /// Apply one command from the presentation layer.
    ///
    /// Move, rescore, check for game over, then spawn if the grid changed.
    pub fn apply(&mut self, command: Command) -> Outcome {
        let dir = match command {
            Command::Quit => return Outcome::Quit,
            Command::Move(dir) => dir,
        };
        if self.status == Status::GameOver {
            return Outcome::Ignored;
        }

        let before = self.board;
        if self.skip_move(dir) {
            trace!("skipped no-op move {}", dir.as_str());
        } else {
            self.board.slide(dir);
        }

        self.compute_score();

        if self.is_game_over() {
            self.status = Status::GameOver;
            info!(
                "game over: score {} max tile {} after {} moves",
                self.score,
                self.board.max_tile(),
                self.moves
            );
            return Outcome::GameOver;
        }

        // Game over is only checked before the spawn: a spawn that fills the
        // last cell of a stuck grid is reported on the next command.
        if self.board == before {
            trace!("move {} left the grid unchanged", dir.as_str());
            return Outcome::Unchanged;
        }

        self.moves = self.moves.wrapping_add(1);
        self.spawn_tile();
        Outcome::Moved
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.grid = *self.board.rows();
        out.score = self.score;
        out.max_tile = self.board.max_tile();
        out.moves = self.moves;
        out.four_spawn_count = self.four_spawn_count;
        out.game_over = self.is_over();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
