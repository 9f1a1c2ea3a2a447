//! BoardView: maps a `core::BoardSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::BoardSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Gem, GRID_COLUMNS, GRID_ROWS};

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

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);

/// Draws the gem grid, cursor, rise countdown and game-over overlay.
pub struct BoardView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for BoardView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl BoardView {
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

    /// Outer frame size (grid plus border) in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            GRID_COLUMNS as u16 * self.cell_w + 2,
            GRID_ROWS as u16 * self.cell_h + 2,
        )
    }

    /// Render into an existing framebuffer, replacing its contents.
    pub fn render_into(&self, snap: &BoardSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        fb.draw_border(start_x, start_y, frame_w, frame_h, border);

        for row in 0..GRID_ROWS {
            for column in 0..GRID_COLUMNS {
                let gem = snap.cells[row][column];
                let px = start_x + 1 + column as u16 * self.cell_w;
                let py = start_y + 1 + row as u16 * self.cell_h;
                if snap.is_cursor_cell(row, column) {
                    self.draw_cursor_cell(fb, px, py, gem);
                } else {
                    self.draw_gem_cell(fb, px, py, gem);
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x + frame_w + 2, start_y);

        if snap.game_over {
            let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
            fb.put_centered(start_x, frame_w, start_y + frame_h / 2, "GAME OVER", style);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &BoardSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_gem_cell(&self, fb: &mut FrameBuffer, px: u16, py: u16, gem: Gem) {
        match gem_color(gem) {
            Some(fg) => {
                let style = CellStyle::new(fg, PLAY_BG).bold();
                fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
            }
            None => {
                let style = CellStyle::new(Rgb::new(90, 90, 100), PLAY_BG).dim();
                fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
                fb.put_char(px, py, '·', style);
            }
        }
    }

    /// Cursor cells show brackets over the gem's color.
    fn draw_cursor_cell(&self, fb: &mut FrameBuffer, px: u16, py: u16, gem: Gem) {
        let bg = gem_color(gem).unwrap_or(PLAY_BG);
        let style = CellStyle::new(Rgb::new(255, 255, 255), bg).bold();
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
        fb.put_char(px, py, '[', style);
        fb.put_char(px + self.cell_w - 1, py, ']', style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &BoardSnapshot,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x >= viewport.width || viewport.width - panel_x < 8 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let mut y = start_y;
        fb.put_str(panel_x, y, "RISE IN", label);
        y = y.saturating_add(1);
        let tenths = (snap.spawn_timer.max(0.0) * 10.0).ceil() as u32;
        fb.put_u32(panel_x, y, tenths / 10, value);
        let int_w = digit_count(tenths / 10);
        fb.put_char(panel_x + int_w, y, '.', value);
        fb.put_u32(panel_x + int_w + 1, y, tenths % 10, value);
        fb.put_char(panel_x + int_w + 2, y, 's', value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "GEMS", label);
        y = y.saturating_add(1);
        let gems = snap
            .cells
            .iter()
            .flatten()
            .filter(|g| !g.is_empty())
            .count() as u32;
        fb.put_u32(panel_x, y, gems, value);
        y = y.saturating_add(2);

        let hint = value.dim();
        for line in ["arrows move", "space swap", "esc back"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }
}

fn digit_count(mut v: u32) -> u16 {
    let mut n = 1;
    while v >= 10 {
        v /= 10;
        n += 1;
    }
    n
}

/// Foreground color per gem; `None` for `Empty`.
pub fn gem_color(gem: Gem) -> Option<Rgb> {
    match gem {
        Gem::Empty => None,
        Gem::Fire => Some(Rgb::new(220, 60, 60)),
        Gem::Water => Some(Rgb::new(70, 120, 230)),
        Gem::Grass => Some(Rgb::new(90, 200, 90)),
        Gem::Rock => Some(Rgb::new(150, 100, 60)),
    }
}
