use tui_2048::core::{Board, GameSnapshot, GameState, SimpleRng};
use tui_2048::term::{tile_color, AnchorY, FrameBuffer, GameView, Viewport};

/// Render into a viewport that fits the default board exactly (35x21).
fn render_exact(snap: &GameSnapshot) -> FrameBuffer {
    GameView::default().render(snap, Viewport::new(35, 21))
}

fn snapshot_of(rows: [[u32; 4]; 4]) -> GameSnapshot {
    GameState::from_parts(Board::from_rows(rows), 0, SimpleRng::new(1)).snapshot()
}

#[test]
fn term_view_renders_border_corners() {
    let fb = render_exact(&GameSnapshot::default());

    // Two header rows above a 35x19 frame.
    assert_eq!(fb.get(0, 2).unwrap().ch, '┌');
    assert_eq!(fb.get(34, 2).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 20).unwrap().ch, '└');
    assert_eq!(fb.get(34, 20).unwrap().ch, '┘');
    assert_eq!(fb.get(10, 2).unwrap().ch, '─');
    assert_eq!(fb.get(0, 10).unwrap().ch, '│');
}

#[test]
fn term_view_centers_tile_values() {
    let snap = snapshot_of([[2, 0, 0, 0], [0; 4], [0; 4], [0, 0, 0, 2048]]);
    let fb = render_exact(&snap);

    // Tile (0, 0) spans x 2..9, y 4..7; the value sits on the middle row.
    let row: String = fb.row_text(5).chars().skip(2).take(7).collect();
    assert_eq!(row, "   2   ");

    // Tile (3, 3) spans x 26..33, y 16..19.
    let row: String = fb.row_text(17).chars().skip(26).take(7).collect();
    assert_eq!(row, " 2048  ");
}

#[test]
fn term_view_paints_tile_backgrounds() {
    let snap = snapshot_of([[0, 4, 0, 0], [0; 4], [0; 4], [0; 4]]);
    let fb = render_exact(&snap);

    // Empty tile (0, 0) and the 4 at (0, 1) which starts at x = 10.
    assert_eq!(fb.get(2, 4).unwrap().style.bg, tile_color(0));
    assert_eq!(fb.get(10, 4).unwrap().style.bg, tile_color(4));
    assert_eq!(fb.get(16, 6).unwrap().style.bg, tile_color(4));
    // Gap column between the two tiles shows the board.
    assert_ne!(fb.get(9, 4).unwrap().style.bg, tile_color(4));
}

#[test]
fn term_view_draws_title_and_score() {
    let mut snap = snapshot_of([[8, 8, 0, 0], [0; 4], [0; 4], [0; 4]]);
    assert_eq!(snap.score, 32);
    snap.score = 1234;

    let fb = render_exact(&snap);
    let header = fb.row_text(0);

    assert!(header.starts_with("2048"), "header: {:?}", header);
    assert!(header.ends_with("SCORE 1234"), "header: {:?}", header);
}

#[test]
fn term_view_shows_game_over_overlay() {
    let stuck = [[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]];
    let mut snap = snapshot_of(stuck);
    let fb = render_exact(&snap);
    assert!(!fb.row_text(11).contains("GAME OVER"));

    snap.game_over = true;
    let fb = render_exact(&snap);
    assert!(fb.row_text(11).contains(" GAME OVER "));
    assert!(fb.get(13, 11).unwrap().style.bold);
}

#[test]
fn term_view_centers_board_in_large_viewport() {
    let snap = GameSnapshot::default();
    let fb = GameView::default().render(&snap, Viewport::new(80, 24));

    // (80 - 35) / 2 = 22, (24 - 21) / 2 = 1
    assert_eq!(fb.get(22, 3).unwrap().ch, '┌');
    let header: String = fb.row_text(1).chars().skip(22).collect();
    assert!(header.starts_with("2048"));
    // Hint line below the frame.
    assert!(fb.row_text(22).contains("esc quit"));
}

#[test]
fn term_view_top_anchor() {
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let layout = view.layout(Viewport::new(80, 40));
    assert_eq!((layout.header_y, layout.frame_y), (0, 2));
    assert_eq!(layout.frame_x, 22);
}

#[test]
fn term_view_clips_in_tiny_viewport() {
    let snap = snapshot_of([[1024, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
    let fb = GameView::default().render(&snap, Viewport::new(10, 5));
    assert_eq!((fb.width(), fb.height()), (10, 5));
    assert_eq!(fb.get(0, 2).unwrap().ch, '┌');
}
