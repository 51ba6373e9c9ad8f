//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the 2048 board rules: sliding and merging, scoring, the
//! tile spawn policy and terminal-state detection. It has **zero dependencies**
//! on terminal I/O, making it:
//!
//! - **Deterministic**: all randomness goes through the [`TileRng`] strategy
//! - **Testable**: scripted RNGs and explicit boards drive every rule
//! - **Portable**: can run in any environment (terminal, GUI, headless)
//! - **Fast**: slides and probes never allocate
//!
//! # Module Structure
//!
//! - [`board`]: 4x4 grid with line compression and slides
//! - [`game_state`]: the engine (grid, spawned-four counter, score, lifecycle)
//! - [`rng`]: tile RNG strategy plus seeded, `rand`-backed and scripted sources
//! - [`scoring`]: score reconstructed from tile values
//! - [`snapshot`]: read-only view for the presentation layer
//! - [`config`]: environment-driven settings
//!
//! # Game Rules
//!
//! - **Slides**: tiles pack toward the move direction; equal neighbours merge
//!   once per move, leftmost (travel-edge) pair first
//! - **Spawns**: after every grid-changing move one tile appears in a random empty
//!   cell: 2 with probability 9/10, 4 with 1/10; the opening tile is always a 2
//! - **Game over**: no direction changes the grid
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{GameState, Outcome, SimpleRng};
//! use tui_2048_types::{Command, Direction};
//!
//! let mut game = GameState::new(SimpleRng::new(12345));
//! assert_eq!(game.board().empty_count(), 15);
//!
//! let outcome = game.apply(Command::Move(Direction::Left));
//! assert_ne!(outcome, Outcome::GameOver);
//! assert_eq!(game.apply(Command::Quit), Outcome::Quit);
//! ```

pub mod board;
pub mod config;
pub mod game_state;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::{compress_line, Board};
pub use config::{GameConfig, NoopCheck};
pub use game_state::{GameState, Outcome, Status};
pub use rng::{RandTileRng, ScriptedRng, SimpleRng, TileRng};
pub use scoring::{compute_score, tile_score};
pub use snapshot::GameSnapshot;
