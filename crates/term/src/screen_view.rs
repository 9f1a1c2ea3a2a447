//! Menu and settings screens.

use crate::board_view::Viewport;
use crate::engine::SettingRow;
use crate::fb::{CellStyle, FrameBuffer, Rgb};

const MENU_BG: Rgb = Rgb::new(0, 70, 30);

/// Menu items stacked in the middle of the screen, selection highlighted.
#[derive(Debug, Clone, Copy)]
pub struct MenuView {
    /// Blank lines between items
    spacing: u16,
}

impl Default for MenuView {
    fn default() -> Self {
        Self { spacing: 1 }
    }
}

impl MenuView {
    pub fn render_into(
        &self,
        items: &[&str],
        selected: usize,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        let bg = CellStyle::new(Rgb::new(240, 240, 240), MENU_BG);
        fb.clear(bg.into_cell(' '));

        let title = CellStyle::new(Rgb::new(255, 255, 255), MENU_BG).bold();
        let start_y = viewport.height / 2;
        fb.put_centered(0, viewport.width, start_y.saturating_sub(3), "GEM LEAGUE", title);

        let highlight = CellStyle::new(Rgb::new(250, 220, 40), MENU_BG).bold();
        for (i, item) in items.iter().enumerate() {
            let y = start_y.saturating_add(i as u16 * (self.spacing + 1));
            if y >= viewport.height {
                break;
            }
            if i == selected {
                fb.put_centered(0, viewport.width, y, &format!("> {} <", item), highlight);
            } else {
                fb.put_centered(0, viewport.width, y, item, bg);
            }
        }
    }
}

/// Two-column list of settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct SettingsView;

impl SettingsView {
    pub fn render_into(&self, rows: &[SettingRow], viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        let bg = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(20, 20, 30));
        fb.clear(bg.into_cell(' '));

        let name_w = rows.iter().map(|r| r.name.len()).max().unwrap_or(0) as u16;
        let value_w = rows.iter().map(|r| r.value.len()).max().unwrap_or(0) as u16;
        let block_w = name_w + 3 + value_w;
        let x = viewport.width.saturating_sub(block_w) / 2;
        let mut y = viewport.height.saturating_sub(rows.len() as u16 + 4) / 2;

        fb.put_centered(0, viewport.width, y, "SETTINGS", bg.bold());
        y = y.saturating_add(2);
        for row in rows {
            fb.put_str(x, y, row.name, bg.bold());
            fb.put_str(x + name_w + 3, y, &row.value, bg);
            y = y.saturating_add(1);
        }
        y = y.saturating_add(1);
        fb.put_centered(0, viewport.width, y, "esc back", bg.dim());
    }
}
