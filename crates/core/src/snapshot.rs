use crate::types::{Grid, GRID_SIZE};

/// Read-only view of the engine handed to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub grid: Grid,
    pub score: u32,
    pub max_tile: u32,
    pub moves: u32,
    pub four_spawn_count: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: [[0; GRID_SIZE]; GRID_SIZE],
            score: 0,
            max_tile: 0,
            moves: 0,
            four_spawn_count: 0,
            game_over: false,
        }
    }
}
