//! Scoring module - score reconstructed from the grid
//!
//! The score is never accumulated at merge time. Instead it is recomputed from the
//! tiles on the board: a tile of value `v` is assumed to be the result of merging
//! 2-tiles all the way up, so it is worth every merge in that ancestry
//! (`f(v) = 2 * f(v / 2) + v`, with `f(2) = 0`). Tiles that were spawned as 4s
//! skipped one merge level, so `4` per spawned four is subtracted from the total.
//!
//! The `-4 * fours` term is global, not per tile.

use crate::types::Grid;

/// Points represented by one tile: the sum of all merges that built it from 2s.
///
/// ```
/// use tui_2048_core::scoring::tile_score;
///
/// assert_eq!(tile_score(0), 0);
/// assert_eq!(tile_score(2), 0);
/// assert_eq!(tile_score(4), 4);
/// assert_eq!(tile_score(8), 16);
/// assert_eq!(tile_score(2048), 20480);
/// ```
pub fn tile_score(value: u32) -> u32 {
    if value <= 2 {
        return 0;
    }
    2 * tile_score(value / 2) + value
}

/// Recompute the total score for `grid`, correcting for spawned 4-tiles.
///
/// Saturates at zero when `four_spawn_count` overstates what the grid holds.
pub fn compute_score(grid: &Grid, four_spawn_count: u32) -> u32 {
    let total: u32 = grid.iter().flatten().map(|&v| tile_score(v)).sum();
    total.saturating_sub(four_spawn_count.saturating_mul(4))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_score_matches_log_formula() {
        // Classic closed form: (log2(v) - 1) * v
        let mut v = 4u32;
        while v <= 1 << 17 {
            let log2 = v.trailing_zeros();
            assert_eq!(tile_score(v), (log2 - 1) * v, "value {}", v);
            v *= 2;
        }
    }

    #[test]
    fn test_zero_and_two_are_free() {
        assert_eq!(tile_score(0), 0);
        assert_eq!(tile_score(2), 0);
    }

    #[test]
    fn test_compute_score_sums_tiles() {
        let grid = [[4, 8, 0, 0], [0, 0, 0, 0], [0, 0, 2, 0], [0, 0, 0, 16]];
        assert_eq!(compute_score(&grid, 0), 4 + 16 + 48);
    }

    #[test]
    fn test_spawned_four_scores_nothing() {
        let grid = [[4, 0, 0, 0], [0; 4], [0; 4], [0; 4]];
        assert_eq!(compute_score(&grid, 0), 4);
        assert_eq!(compute_score(&grid, 1), 0);
    }

    #[test]
    fn test_spawned_four_merged_up_keeps_only_real_merges() {
        // A spawned 4 merged with a built 4 (2+2, worth 4) gives an 8.
        // Real merges: 2+2 (4) and 4+4 (8) = 12 = f(8) - 4.
        let grid = [[8, 0, 0, 0], [0; 4], [0; 4], [0; 4]];
        assert_eq!(compute_score(&grid, 1), 12);
    }

    #[test]
    fn test_overstated_counter_saturates() {
        let grid = [[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]];
        assert_eq!(compute_score(&grid, 3), 0);
    }
}
