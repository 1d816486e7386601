//! Maps a `Playfield` snapshot into a terminal framebuffer.
//!
//! Pure (no I/O) so it can be unit-tested without a real terminal.

use tui_tetris_core::Playfield;
use tui_tetris_types::{shape_color, ShapeName, Tile, TileVariant, GARBAGE_COLOR};

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

/// Maps the playfield grid plus the preview queue and hold slot into a
/// framebuffer. Cells are drawn two characters wide to compensate for the
/// usual terminal glyph aspect ratio.
pub struct GameView {
    cell_w: u16,
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Renders the current playfield, preview queue, and hold slot into an
    /// existing framebuffer. Callers can reuse one `FrameBuffer` across
    /// frames; it is only resized when `viewport` changes.
    pub fn render_into(
        &self,
        pf: &Playfield,
        queue: &[ShapeName],
        hold: Option<ShapeName>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let cols = pf.cols() as u16;
        let rows = pf.rows() as u16;
        let board_px_w = cols * self.cell_w;
        let board_px_h = rows * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let bg = CellStyle {
            fg: Rgb(80, 80, 90),
            bg: Rgb(30, 30, 40),
            bold: false,
            dim: false,
        };
        let border = CellStyle {
            fg: Rgb(200, 200, 200),
            bg: Rgb(0, 0, 0),
            bold: false,
            dim: false,
        };

        fb.fill_rect(start_x + 1, start_y + 1, board_px_w, board_px_h, ' ', bg);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for y in 0..pf.rows() {
            for x in 0..pf.cols() {
                if let Some(tile) = pf.get(x as i32, y as i32) {
                    self.draw_cell(fb, start_x, start_y, x as u16, y as u16, rows, tile);
                }
            }
        }

        self.draw_sidebar(fb, start_x + frame_w + 2, start_y, queue, hold);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        for dx in 0..w {
            fb.put_char(x + dx, y, '#', style);
            fb.put_char(x + dx, y + h - 1, '#', style);
        }
        for dy in 0..h {
            fb.put_char(x, y + dy, '#', style);
            fb.put_char(x + w - 1, y + dy, '#', style);
        }
    }

    /// `y` here is bottom-up board space; the framebuffer row grows
    /// downward, so row `rows - 1 - y` is where it lands on screen.
    fn draw_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        rows: u16,
        tile: Tile,
    ) {
        let screen_row = rows - 1 - y;
        let px = start_x + 1 + x * self.cell_w;
        let py = start_y + 1 + screen_row * self.cell_h;

        let (rgb, dim) = match tile {
            Tile::Garbage => (GARBAGE_COLOR, false),
            Tile::Shape(name, TileVariant::Normal) => (shape_color(name), false),
            Tile::Shape(name, TileVariant::Ghost) => (shape_color(name), true),
        };
        let style = CellStyle {
            fg: rgb,
            bg: Rgb(30, 30, 40),
            bold: !dim,
            dim,
        };
        let glyph = if dim { '.' } else { '#' };
        for dx in 0..self.cell_w {
            fb.put_char(px + dx, py, glyph, style);
        }
    }

    fn draw_sidebar(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        queue: &[ShapeName],
        hold: Option<ShapeName>,
    ) {
        let label = CellStyle::default();
        fb.put_str(x, y, "HOLD", label);
        let hold_style = CellStyle {
            fg: hold.map(shape_color).unwrap_or(Rgb(80, 80, 80)),
            ..CellStyle::default()
        };
        fb.put_str(x, y + 1, hold.map(|s| s.as_str()).unwrap_or("--"), hold_style);

        fb.put_str(x, y + 3, "NEXT", label);
        for (i, shape) in queue.iter().enumerate() {
            let style = CellStyle {
                fg: shape_color(*shape),
                ..CellStyle::default()
            };
            fb.put_str(x, y + 4 + i as u16, shape.as_str(), style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_tetris_core::Playfield;

    #[test]
    fn renders_without_panicking_on_a_typical_viewport() {
        let pf = Playfield::empty(10, 20);
        let view = GameView::default();
        let mut fb = FrameBuffer::new(60, 24);
        view.render_into(&pf, &[ShapeName::T, ShapeName::I], Some(ShapeName::O), Viewport::new(60, 24), &mut fb);
        assert_eq!(fb.width(), 60);
        assert_eq!(fb.height(), 24);
    }

    #[test]
    fn locked_cell_is_reflected_in_the_framebuffer() {
        let rows = ["T.........", "TTT......."];
        let pf = Playfield::from_rows(&rows);
        let view = GameView::default();
        let mut fb = FrameBuffer::new(40, 20);
        view.render_into(&pf, &[], None, Viewport::new(40, 20), &mut fb);
        let has_non_blank = fb.cells().iter().any(|c| c.ch == '#');
        assert!(has_non_blank);
    }
}
