//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};

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

const BOARD_BG: Rgb = Rgb::new(187, 173, 160);
const EMPTY_BG: Rgb = Rgb::new(205, 193, 180);
const DARK_TEXT: Rgb = Rgb::new(119, 110, 101);
const LIGHT_TEXT: Rgb = Rgb::new(249, 246, 242);

/// Background per tile exponent (index 1 = 2, 2 = 4, ...); larger tiles reuse the last.
const TILE_BG: [Rgb; 12] = [
    EMPTY_BG,
    Rgb::new(238, 228, 218),
    Rgb::new(237, 224, 200),
    Rgb::new(242, 177, 121),
    Rgb::new(245, 149, 99),
    Rgb::new(246, 124, 95),
    Rgb::new(246, 94, 59),
    Rgb::new(237, 207, 114),
    Rgb::new(237, 204, 97),
    Rgb::new(237, 200, 80),
    Rgb::new(237, 197, 63),
    Rgb::new(237, 194, 46),
];

/// A lightweight terminal view of the grid.
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 leaves room for four digits plus padding and roughly squares the tile.
        Self {
            cell_w: 7,
            cell_h: 3,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is only reallocated when the
    /// terminal grows.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let size = snap.size as u16;
        let frame_w = size * self.cell_w + 2;
        let frame_h = size * self.cell_h + 2;
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let header_y = viewport.height.saturating_sub(frame_h + 2) / 2;
        let start_y = header_y + 2;

        self.draw_header(fb, snap, start_x, header_y);

        let border = CellStyle::new(BOARD_BG, Rgb::new(0, 0, 0));
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);
        fb.fill_rect(
            start_x + 1,
            start_y + 1,
            size * self.cell_w,
            size * self.cell_h,
            ' ',
            CellStyle::new(DARK_TEXT, BOARD_BG),
        );

        for y in 0..snap.size {
            for x in 0..snap.size {
                let value = snap.tile_at(x, y).map_or(0, |t| t.value);
                self.draw_tile(fb, start_x, start_y, x as u16, y as u16, value);
            }
        }

        if snap.over {
            let text = " GAME OVER ";
            let text_w = text.chars().count() as u16;
            let x = start_x + frame_w.saturating_sub(text_w) / 2;
            let style = CellStyle::new(LIGHT_TEXT, Rgb::new(0, 0, 0)).bold();
            fb.put_str(x, start_y + frame_h / 2, text, style);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_header(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, y: u16) {
        let label = CellStyle::default().bold();
        let value = CellStyle::default();

        fb.put_str(x, y, "SCORE ", label);
        let used = fb.put_number(x + 6, y, snap.score, value);
        let moves_x = x + 6 + used + 3;
        fb.put_str(moves_x, y, "MOVES ", label);
        fb.put_number(moves_x + 6, y, u64::from(snap.moves), value);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
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

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        value: u32,
    ) {
        let exponent = value.trailing_zeros() as usize;
        let bg = if value == 0 {
            EMPTY_BG
        } else {
            TILE_BG[exponent.min(TILE_BG.len() - 1)]
        };
        let fg = if exponent <= 2 { DARK_TEXT } else { LIGHT_TEXT };
        let style = CellStyle::new(fg, bg).bold();

        // One column of board background between tiles.
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        let inner_w = self.cell_w.saturating_sub(1).max(1);
        fb.fill_rect(px, py, inner_w, self.cell_h, ' ', style);

        if value != 0 {
            let digits = digit_count(u64::from(value));
            let tx = px + inner_w.saturating_sub(digits) / 2;
            fb.put_number(tx, py + self.cell_h / 2, u64::from(value), style);
        }
    }
}

fn digit_count(mut n: u64) -> u16 {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}
