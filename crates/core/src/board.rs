//! Board module - manages the tile grid
//!
//! The board is a 4x4 grid of tile values. `0` marks an empty cell; every other
//! value is a power of two. Coordinates are `(row, col)` with row 0 at the top.
//!
//! Sliding works line by line: each row (Left/Right) or column (Up/Down) is read
//! in travel order, compressed toward index 0 with [`compress_line`], and written
//! back. Right/Down lines are read reversed so one compression routine serves all
//! four directions. All hot paths are allocation-free.

use arrayvec::ArrayVec;

use crate::types::{Direction, Grid, Line, GRID_CELLS, GRID_SIZE};

/// Compress one line toward index 0, merging equal neighbours once.
///
/// Zeros are dropped, then tiles are scanned left to right: a tile equal to the
/// last output tile doubles it, and a zero placeholder is pushed after the merge
/// so the doubled tile cannot merge again in the same pass. Placeholders are
/// dropped and the result is padded with zeros.
///
/// ```
/// use tui_2048_core::board::compress_line;
///
/// assert_eq!(compress_line([2, 2, 2, 0]), [4, 2, 0, 0]);
/// assert_eq!(compress_line([2, 2, 2, 2]), [4, 4, 0, 0]);
/// assert_eq!(compress_line([0, 4, 0, 4]), [8, 0, 0, 0]);
/// ```
pub fn compress_line(line: Line) -> Line {
    // Scratch holds at most one placeholder per merge plus every tile.
    let mut scratch: ArrayVec<u32, { 2 * GRID_SIZE }> = ArrayVec::new();
    for value in line.into_iter().filter(|&v| v != 0) {
        match scratch.last_mut() {
            Some(last) if *last == value => {
                *last *= 2;
                scratch.push(0);
            }
            _ => scratch.push(value),
        }
    }

    let mut out = [0u32; GRID_SIZE];
    for (slot, value) in out
        .iter_mut()
        .zip(scratch.into_iter().filter(|&v| v != 0))
    {
        *slot = value;
    }
    out
}

/// The game board - 4x4 grid of tile values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    rows: Grid,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            rows: [[0; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Create a board from explicit rows
    pub fn from_rows(rows: Grid) -> Self {
        Self { rows }
    }

    /// Borrow the row-major grid
    pub fn rows(&self) -> &Grid {
        &self.rows
    }

    /// Get the tile at `(row, col)`
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Set the tile at `(row, col)`
    /// Returns false if out of bounds
    pub fn set(&mut self, row: usize, col: usize, value: u32) -> bool {
        match self.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> ArrayVec<(usize, usize), GRID_CELLS> {
        let mut out = ArrayVec::new();
        for (r, row) in self.rows.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                if value == 0 {
                    out.push((r, c));
                }
            }
        }
        out
    }

    pub fn empty_count(&self) -> usize {
        self.rows.iter().flatten().filter(|&&v| v == 0).count()
    }

    pub fn is_full(&self) -> bool {
        self.rows.iter().flatten().all(|&v| v != 0)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.iter().flatten().all(|&v| v == 0)
    }

    /// Largest tile on the board (0 when empty)
    pub fn max_tile(&self) -> u32 {
        self.rows.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Read line `index` in the travel order of `dir`
    fn line(&self, dir: Direction, index: usize) -> Line {
        let mut line = [0u32; GRID_SIZE];
        for (i, slot) in line.iter_mut().enumerate() {
            *slot = if dir.is_horizontal() {
                self.rows[index][i]
            } else {
                self.rows[i][index]
            };
        }
        if dir.is_reversed() {
            line.reverse();
        }
        line
    }

    /// Write line `index` back, undoing the travel-order reversal
    fn write_line(&mut self, dir: Direction, index: usize, mut line: Line) {
        if dir.is_reversed() {
            line.reverse();
        }
        for (i, value) in line.into_iter().enumerate() {
            if dir.is_horizontal() {
                self.rows[index][i] = value;
            } else {
                self.rows[i][index] = value;
            }
        }
    }

    /// Slide and merge every line toward `dir`.
    ///
    /// Returns true if any cell changed.
    pub fn slide(&mut self, dir: Direction) -> bool {
        let mut changed = false;
        for index in 0..GRID_SIZE {
            let before = self.line(dir, index);
            let after = compress_line(before);
            if after != before {
                changed = true;
                self.write_line(dir, index, after);
            }
        }
        changed
    }

    /// Would sliding toward `dir` change anything? (board untouched)
    pub fn would_change(&self, dir: Direction) -> bool {
        let mut probe = *self;
        probe.slide(dir)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
