//! Read-only listing of the active settings.

use crate::state::{Context, Scene, SettingRow, State, Transition};
use crate::types::{InputAction, PressedActions};

pub struct SettingsScreen {
    rows: Vec<SettingRow>,
}

impl SettingsScreen {
    pub fn new(rows: Vec<SettingRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[SettingRow] {
        &self.rows
    }
}

impl State for SettingsScreen {
    fn name(&self) -> &'static str {
        "settings"
    }

    fn enter(&mut self, _ctx: Option<Context>) {}

    fn update(&mut self, _dt: f32, input: &PressedActions) -> Transition {
        if input.contains(InputAction::Back) || input.contains(InputAction::Select) {
            return Transition::Pop;
        }
        Transition::None
    }

    fn scene(&self) -> Scene<'_> {
        Scene::Settings(&self.rows)
    }
}
