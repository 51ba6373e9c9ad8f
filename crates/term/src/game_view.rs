//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top to bottom: a header row (title + score), a blank row, then the
//! bordered board. Each tile is a `cell_w x cell_h` block separated by a one
//! cell gap, with its value centered on the middle row.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::GRID_SIZE;

/// Page background
const PAGE_BG: Rgb = Rgb::new(250, 248, 239);
/// Board background (shows through the gaps between tiles)
const BOARD_BG: Rgb = Rgb::new(188, 172, 156);
/// Text on light tiles (2 and 4) and the title
const DARK_TEXT: Rgb = Rgb::new(119, 110, 101);
/// Text on every tile from 8 upwards
const LIGHT_TEXT: Rgb = Rgb::new(255, 255, 255);
/// Background for tiles beyond 2048
const SUPER_TILE_BG: Rgb = Rgb::new(60, 58, 50);

/// Rows taken by the header above the board frame
const HEADER_ROWS: u16 = 2;
/// Gap between tiles (and between tiles and the frame)
const GAP: u16 = 1;

/// Background colour for a tile value.
pub fn tile_color(value: u32) -> Rgb {
    match value {
        0 => Rgb::new(204, 196, 180),
        2 => Rgb::new(240, 228, 220),
        4 => Rgb::new(244, 227, 204),
        8 => Rgb::new(248, 180, 124),
        16 => Rgb::new(248, 148, 100),
        32 => Rgb::new(248, 124, 92),
        64 => Rgb::new(248, 92, 60),
        128 => Rgb::new(236, 212, 116),
        256 => Rgb::new(240, 204, 100),
        512 => Rgb::new(240, 204, 84),
        1024 => Rgb::new(237, 197, 63),
        2048 => Rgb::new(237, 194, 46),
        _ => SUPER_TILE_BG,
    }
}

/// Text colour for a tile value: dark on 2/4, white from 8 up.
pub fn tile_text_color(value: u32) -> Rgb {
    if value < 8 {
        DARK_TEXT
    } else {
        LIGHT_TEXT
    }
}

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Where the board lands inside a viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    /// Top-left corner of the header row
    pub header_x: u16,
    pub header_y: u16,
    /// Top-left corner of the board frame
    pub frame_x: u16,
    pub frame_y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
    cell_w: u16,
    cell_h: u16,
}

impl BoardLayout {
    /// `(x, y, w, h)` of the tile at `(row, col)`.
    pub fn tile_rect(&self, row: usize, col: usize) -> (u16, u16, u16, u16) {
        let x = self.frame_x + 1 + GAP + col as u16 * (self.cell_w + GAP);
        let y = self.frame_y + 1 + GAP + row as u16 * (self.cell_h + GAP);
        (x, y, self.cell_w, self.cell_h)
    }
}

/// A lightweight terminal renderer for the 2048 board.
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 fits a six digit value with a column of padding and keeps tiles
        // roughly square on typical terminal glyphs.
        Self {
            cell_w: 7,
            cell_h: 3,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Compute where the header and board go for `viewport`.
    pub fn layout(&self, viewport: Viewport) -> BoardLayout {
        let n = GRID_SIZE as u16;
        let inner_w = n * self.cell_w + (n + 1) * GAP;
        let inner_h = n * self.cell_h + (n + 1) * GAP;
        let frame_w = inner_w + 2;
        let frame_h = inner_h + 2;
        let total_h = HEADER_ROWS + frame_h;

        let frame_x = viewport.width.saturating_sub(frame_w) / 2;
        let header_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(total_h) / 2,
            AnchorY::Top => 0,
        };

        BoardLayout {
            header_x: frame_x,
            header_y,
            frame_x,
            frame_y: header_y + HEADER_ROWS,
            frame_w,
            frame_h,
            cell_w: self.cell_w,
            cell_h: self.cell_h,
        }
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(DARK_TEXT, PAGE_BG).cell(' '));

        let layout = self.layout(viewport);

        self.draw_header(fb, snap, &layout);

        let board_style = CellStyle::new(BOARD_BG, BOARD_BG);
        fb.fill_rect(
            layout.frame_x + 1,
            layout.frame_y + 1,
            layout.frame_w - 2,
            layout.frame_h - 2,
            ' ',
            board_style,
        );
        draw_border(
            fb,
            layout.frame_x,
            layout.frame_y,
            layout.frame_w,
            layout.frame_h,
            CellStyle::new(DARK_TEXT, PAGE_BG),
        );

        for (r, row) in snap.grid.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                self.draw_tile(fb, &layout, r, c, value);
            }
        }

        let hint_y = layout.frame_y + layout.frame_h;
        if hint_y < viewport.height {
            fb.put_centered(
                layout.frame_x,
                hint_y,
                layout.frame_w,
                "arrows/wasd/hjkl move  esc quit",
                CellStyle::new(BOARD_BG, PAGE_BG),
            );
        }

        if snap.game_over {
            let mid_y = layout.frame_y + layout.frame_h / 2;
            fb.put_centered(
                layout.frame_x,
                mid_y,
                layout.frame_w,
                " GAME OVER ",
                CellStyle::new(LIGHT_TEXT, DARK_TEXT).bold(),
            );
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_header(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: &BoardLayout) {
        let title = CellStyle::new(DARK_TEXT, PAGE_BG).bold();
        fb.put_str(layout.header_x, layout.header_y, "2048", title);

        // "SCORE <n>" right-aligned to the frame edge.
        let digits = digit_count(snap.score);
        let label = "SCORE ";
        let width = label.len() as u16 + digits;
        let right = layout.frame_x + layout.frame_w;
        let x = right.saturating_sub(width).max(layout.header_x + 5);
        let score_style = CellStyle::new(LIGHT_TEXT, BOARD_BG).bold();
        let label_style = CellStyle::new(Rgb::new(240, 228, 220), BOARD_BG);
        fb.put_str(x, layout.header_y, label, label_style);
        fb.put_u32(x + label.len() as u16, layout.header_y, snap.score, score_style);
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        layout: &BoardLayout,
        row: usize,
        col: usize,
        value: u32,
    ) {
        let (x, y, w, h) = layout.tile_rect(row, col);
        let bg = tile_color(value);
        fb.fill_rect(x, y, w, h, ' ', CellStyle::new(bg, bg));

        if value == 0 {
            return;
        }
        let style = CellStyle::new(tile_text_color(value), bg).bold();
        let digits = digit_count(value);
        let text_x = x + w.saturating_sub(digits) / 2;
        fb.put_u32(text_x, y + h / 2, value, style);
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

fn digit_count(mut n: u32) -> u16 {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}
