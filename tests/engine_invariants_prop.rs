//! Property tests for line compression, sliding and the move/spawn loop.
//!
//! Invariants covered:
//! - `compress_line` conserves the tile sum, packs tiles toward index 0 and
//!   agrees with a two-pointer reference that merges each tile at most once.
//! - After one slide every line is packed; a second slide in the same direction
//!   only changes the grid by merging, and is a no-op when no equal pair is left.
//! - Repeated slides in one direction reach a fixpoint within `GRID_SIZE` moves.
//! - Over random rollouts the score always matches a recomputation and the
//!   spawn counter never exceeds the number of moves plus the opening tile.

use proptest::prelude::*;
use tui_2048::core::{compress_line, compute_score, Board, GameState, Outcome, SimpleRng};
use tui_2048::types::{Command, Direction, Grid, Line, GRID_CELLS, GRID_SIZE};

fn tile() -> impl Strategy<Value = u32> {
    // Empty cells are common; values up to 2^11.
    prop_oneof![
        3 => Just(0u32),
        5 => (1u32..=11).prop_map(|exp| 1 << exp),
    ]
}

fn line() -> impl Strategy<Value = Line> {
    prop::array::uniform4(tile())
}

fn grid() -> impl Strategy<Value = Grid> {
    prop::array::uniform4(line())
}

fn direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

fn is_packed(line: &Line) -> bool {
    line.windows(2).all(|w| !(w[0] == 0 && w[1] != 0))
}

fn tile_count(line: &Line) -> usize {
    line.iter().filter(|&&v| v != 0).count()
}

/// Lines of `grid` in travel order for `dir`.
fn travel_lines(grid: &Grid, dir: Direction) -> Vec<Line> {
    (0..GRID_SIZE)
        .map(|i| {
            let mut line = [0u32; GRID_SIZE];
            for (k, slot) in line.iter_mut().enumerate() {
                let j = if dir.is_reversed() { GRID_SIZE - 1 - k } else { k };
                *slot = if dir.is_horizontal() { grid[i][j] } else { grid[j][i] };
            }
            line
        })
        .collect()
}

/// Straightforward two-pointer compression used as an independent reference.
fn reference_compress(line: Line) -> Line {
    let tiles: Vec<u32> = line.into_iter().filter(|&v| v != 0).collect();
    let mut out = [0u32; GRID_SIZE];
    let (mut i, mut k) = (0, 0);
    while i < tiles.len() {
        if i + 1 < tiles.len() && tiles[i] == tiles[i + 1] {
            out[k] = tiles[i] * 2;
            i += 2;
        } else {
            out[k] = tiles[i];
            i += 1;
        }
        k += 1;
    }
    out
}

fn has_adjacent_pair(line: &Line) -> bool {
    line.windows(2).any(|w| w[0] != 0 && w[0] == w[1])
}

proptest! {
    #[test]
    fn compress_line_conserves_and_packs(input in line()) {
        let out = compress_line(input);

        prop_assert_eq!(input.iter().sum::<u32>(), out.iter().sum::<u32>());
        prop_assert!(is_packed(&out), "{:?} -> {:?}", input, out);

        // Every merge consumes exactly two input tiles.
        let before = tile_count(&input);
        let after = tile_count(&out);
        prop_assert!(after <= before);
        prop_assert!(after >= before.div_ceil(2), "{:?} -> {:?}", input, out);
    }

    #[test]
    fn compress_line_matches_reference(input in line()) {
        prop_assert_eq!(compress_line(input), reference_compress(input), "input {:?}", input);
    }

    #[test]
    fn second_slide_only_merges(rows in grid(), dir in direction()) {
        let mut once = Board::from_rows(rows);
        once.slide(dir);
        for line in travel_lines(once.rows(), dir) {
            prop_assert!(is_packed(&line));
        }

        let mut twice = once;
        let changed = twice.slide(dir);
        let pairs_left = travel_lines(once.rows(), dir).iter().any(has_adjacent_pair);

        if pairs_left {
            prop_assert!(changed);
            prop_assert!(twice.empty_count() > once.empty_count());
        } else {
            prop_assert!(!changed);
            prop_assert_eq!(once, twice);
        }
    }

    #[test]
    fn repeated_slides_reach_fixpoint(rows in grid(), dir in direction()) {
        let mut board = Board::from_rows(rows);
        for _ in 0..GRID_SIZE {
            board.slide(dir);
        }
        let mut again = board;
        prop_assert!(!again.slide(dir));
        prop_assert!(!board.would_change(dir));
    }

    #[test]
    fn would_change_agrees_with_slide(rows in grid(), dir in direction()) {
        let board = Board::from_rows(rows);
        let mut moved = board;
        prop_assert_eq!(board.would_change(dir), moved.slide(dir));
    }

    #[test]
    fn rollout_keeps_score_and_counters_consistent(
        seed in any::<u32>(),
        moves in prop::collection::vec(direction(), 1..120),
    ) {
        let mut state = GameState::new(SimpleRng::new(seed));
        let mut spawned = 1u32;

        for dir in moves {
            let tiles_before = GRID_CELLS - state.board().empty_count();
            match state.apply(Command::Move(dir)) {
                Outcome::Moved => {
                    spawned += 1;
                    // Merges remove tiles, the spawn adds exactly one.
                    prop_assert!(GRID_CELLS - state.board().empty_count() <= tiles_before + 1);
                }
                Outcome::GameOver => {
                    prop_assert!(state.is_over());
                    prop_assert!(state.board().is_full());
                }
                Outcome::Ignored => prop_assert!(state.is_over()),
                Outcome::Unchanged => {}
                Outcome::Quit => prop_assert!(false, "move produced Quit"),
            }

            prop_assert_eq!(
                state.score(),
                compute_score(state.grid(), state.four_spawn_count())
            );
            prop_assert!(state.four_spawn_count() < spawned);
            prop_assert_eq!(state.moves() + 1, spawned);
        }
    }
}
