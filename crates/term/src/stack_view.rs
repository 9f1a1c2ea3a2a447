//! StackView: renders every scene of a state stack, bottom to top.

use crate::board_view::{BoardView, Viewport};
use crate::engine::Scene;
use crate::fb::FrameBuffer;
use crate::screen_view::{MenuView, SettingsView};

#[derive(Default)]
pub struct StackView {
    board: BoardView,
    menu: MenuView,
    settings: SettingsView,
}

impl StackView {
    pub fn new(board: BoardView) -> Self {
        Self {
            board,
            ..Self::default()
        }
    }

    /// Draw one scene. Every screen is opaque and clears the framebuffer first.
    pub fn render_scene(&self, scene: Scene<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        match scene {
            Scene::Menu { items, selected } => self.menu.render_into(items, selected, viewport, fb),
            Scene::Match(snap) => self.board.render_into(snap, viewport, fb),
            Scene::Settings(rows) => self.settings.render_into(rows, viewport, fb),
        }
    }

    /// Draw `scenes` in order into `fb`.
    pub fn render_into<'a>(
        &self,
        scenes: impl IntoIterator<Item = Scene<'a>>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Default::default());
        for scene in scenes {
            self.render_scene(scene, viewport, fb);
        }
    }
}
