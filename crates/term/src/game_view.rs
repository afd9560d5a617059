//! GameView: maps a `core::BoardSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::BoardSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{palette_rgb, Cell};

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

const PLAYFIELD_BG: Rgb = Rgb::new(0, 0, 0);
const BORDER: CellStyle = CellStyle::new(Rgb::new(128, 128, 128), Rgb::BLACK);
const HELP: [(&str, &str); 7] = [
    ("←/→", "move"),
    ("↑", "rotate"),
    ("↓", "drop one"),
    ("space", "drop"),
    ("p", "pause"),
    ("n", "new game"),
    ("q", "quit"),
];

/// Terminal renderer for the board.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    show_help: bool,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            show_help: true,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            ..Self::default()
        }
    }

    pub fn without_help(mut self) -> Self {
        self.show_help = false;
        self
    }

    /// Size of the bordered board in terminal cells
    pub fn frame_size(&self, snap: &BoardSnapshot) -> (u16, u16) {
        (
            to_u16(snap.columns).saturating_mul(self.cell_w).saturating_add(2),
            to_u16(snap.rows).saturating_add(2),
        )
    }

    /// Render into an existing framebuffer, reusing its allocation.
    pub fn render_into(&self, snap: &BoardSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.reset(viewport.width, viewport.height);

        let (frame_w, frame_h) = self.frame_size(snap);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_border(fb, start_x, start_y, frame_w, frame_h);

        for row in 0..snap.rows {
            for col in 0..snap.columns {
                self.draw_board_cell(fb, start_x, start_y, row, col, snap.cell_at(row, col));
            }
        }

        if self.show_help {
            self.draw_help(fb, viewport, start_x.saturating_add(frame_w).saturating_add(2), start_y);
        }

        if snap.paused {
            let text = "PAUSED";
            let x = start_x + frame_w.saturating_sub(text.len() as u16) / 2;
            let y = start_y + frame_h / 2;
            fb.put_str(x, y, text, CellStyle::new(Rgb::new(255, 255, 255), Rgb::BLACK).bold());
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &BoardSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }
        let right = x + w - 1;
        let bottom = y + h - 1;

        fb.put_char(x, y, '┌', BORDER);
        fb.put_char(right, y, '┐', BORDER);
        fb.put_char(x, bottom, '└', BORDER);
        fb.put_char(right, bottom, '┘', BORDER);
        fb.fill_rect(x + 1, y, w - 2, 1, '─', BORDER);
        fb.fill_rect(x + 1, bottom, w - 2, 1, '─', BORDER);
        fb.fill_rect(x, y + 1, 1, h - 2, '│', BORDER);
        fb.fill_rect(right, y + 1, 1, h - 2, '│', BORDER);
    }

    fn draw_board_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        row: usize,
        col: usize,
        cell: Cell,
    ) {
        let px = to_u16(col)
            .checked_mul(self.cell_w)
            .and_then(|dx| dx.checked_add(start_x.saturating_add(1)));
        let py = to_u16(row).checked_add(start_y.saturating_add(1));
        // Cells past the viewport edge are clipped.
        let (Some(px), Some(py)) = (px, py) else {
            return;
        };
        if px >= fb.width() || py >= fb.height() {
            return;
        }
        let (ch, style) = match palette_rgb(cell) {
            Some(rgb) => ('█', CellStyle::new(rgb.into(), PLAYFIELD_BG)),
            None => (' ', CellStyle::new(Rgb::BLACK, PLAYFIELD_BG)),
        };
        fb.fill_rect(px, py, self.cell_w, 1, ch, style);
    }

    fn draw_help(&self, fb: &mut FrameBuffer, viewport: Viewport, x: u16, y: u16) {
        // Needs room for "space  new game".
        if x.saturating_add(16) > viewport.width {
            return;
        }
        let key = CellStyle::default().bold();
        let text = CellStyle::default();
        for (i, (k, what)) in HELP.iter().enumerate() {
            let row = y + i as u16;
            fb.put_str(x, row, k, key);
            fb.put_str(x + 7, row, what, text);
        }
    }
}

/// Board coordinates beyond `u16` saturate; they are off-screen anyway.
fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}
