//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Grid
//!
//! The playfield is a fixed 4x4 square of tile values:
//!
//! - **Size**: [`GRID_SIZE`] rows by [`GRID_SIZE`] columns
//! - **Indexing**: `grid[row][col]`, row 0 at the top, column 0 at the left
//! - **Cells**: `0` is empty, any other value is a power of two `>= 2`
//!
//! # Spawn Odds
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FIRST_SPAWN_VALUE` | 2 | Value of the opening tile |
//! | `SPAWN_VALUE_COMMON` | 2 | Value of most spawned tiles |
//! | `SPAWN_VALUE_RARE` | 4 | Value of the occasional spawned tile |
//! | `RARE_SPAWN_ONE_IN` | 10 | One spawn in ten is the rare value |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Command, Direction, GRID_SIZE};
//!
//! let dir = Direction::from_str("left").unwrap();
//! assert_eq!(dir, Direction::Left);
//! assert!(dir.is_horizontal());
//! assert!(!dir.is_reversed());
//!
//! assert_eq!(Command::Move(Direction::Up).direction(), Some(Direction::Up));
//! assert_eq!(Command::Quit.direction(), None);
//!
//! assert_eq!(GRID_SIZE, 4);
//! ```

/// Grid side length in cells (4x4 board)
pub const GRID_SIZE: usize = 4;

/// Total number of cells on the grid (16)
pub const GRID_CELLS: usize = GRID_SIZE * GRID_SIZE;

/// Row-major grid of tile values, `grid[row][col]`
pub type Grid = [[u32; GRID_SIZE]; GRID_SIZE];

/// A single line (row or column) of the grid in travel order
pub type Line = [u32; GRID_SIZE];

/// Value of the very first tile placed on an empty grid
pub const FIRST_SPAWN_VALUE: u32 = 2;

/// Value of a regular spawned tile (9 out of 10 spawns)
pub const SPAWN_VALUE_COMMON: u32 = 2;

/// Value of a rare spawned tile (1 out of 10 spawns)
pub const SPAWN_VALUE_RARE: u32 = 4;

/// Denominator of the rare spawn probability
pub const RARE_SPAWN_ONE_IN: u32 = 10;


/// The four directions tiles can slide in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in the order the game-over probe tries them
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse direction from string (case-insensitive)
    ///
    /// Accepts the full name or its first letter.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("Down"), Some(Direction::Down));
    /// assert_eq!(Direction::from_str("u"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("x"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Rows slide for Left/Right, columns for Up/Down
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// Lines are read back-to-front for Right/Down so tiles always pack toward index 0
    pub fn is_reversed(&self) -> bool {
        matches!(self, Direction::Right | Direction::Down)
    }
}

/// A command forwarded from the presentation layer to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Slide all tiles in a direction
    Move(Direction),
    /// Leave the game (Esc, window close)
    Quit,
}

impl Command {
    /// The direction carried by a move command
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Command::Move(dir) => Some(*dir),
            Command::Quit => None,
        }
    }
}
