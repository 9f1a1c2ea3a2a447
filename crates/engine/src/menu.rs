//! Main menu: Play / Settings / Exit.

use log::info;

use crate::core::{BoardConfig, SimpleRng};
use crate::match_screen::MatchScreen;
use crate::settings_screen::SettingsScreen;
use crate::state::{Context, Scene, SettingRow, State, Transition};
use crate::types::{InputAction, PressedActions};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Play,
    Settings,
    Exit,
}

impl MenuOption {
    pub const ALL: [MenuOption; 3] = [MenuOption::Play, MenuOption::Settings, MenuOption::Exit];

    pub const fn label(&self) -> &'static str {
        match self {
            MenuOption::Play => "Play",
            MenuOption::Settings => "Settings",
            MenuOption::Exit => "Exit",
        }
    }
}

/// Labels in `MenuOption::ALL` order, as shown by the menu scene.
const MENU_LABELS: [&str; MenuOption::ALL.len()] = {
    let mut labels = [""; MenuOption::ALL.len()];
    let mut i = 0;
    while i < labels.len() {
        labels[i] = MenuOption::ALL[i].label();
        i += 1;
    }
    labels
};

/// Configuration the menu hands down to the screens it opens.
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    pub board: BoardConfig,
    /// Rows shown on the settings screen
    pub settings: Vec<SettingRow>,
}

pub struct MainMenu {
    selected: usize,
    /// Seeds each new match
    rng: SimpleRng,
    session: SessionConfig,
}

impl MainMenu {
    pub fn new(seed: u32, session: SessionConfig) -> Self {
        Self {
            selected: 0,
            rng: SimpleRng::new(seed),
            session,
        }
    }

    pub fn selected(&self) -> MenuOption {
        MenuOption::ALL[self.selected]
    }

    fn activate(&mut self) -> Transition {
        match self.selected() {
            MenuOption::Play => {
                let seed = self.rng.next_u32();
                info!("starting match with seed {}", seed);
                Transition::Push(
                    Box::new(MatchScreen::new(self.session.board)),
                    Some(Context::Seed(seed)),
                )
            }
            MenuOption::Settings => Transition::Push(
                Box::new(SettingsScreen::new(self.session.settings.clone())),
                None,
            ),
            MenuOption::Exit => Transition::Quit,
        }
    }
}

impl State for MainMenu {
    fn name(&self) -> &'static str {
        "main_menu"
    }

    fn enter(&mut self, ctx: Option<Context>) {
        if let Some(Context::Seed(seed)) = ctx {
            self.rng = SimpleRng::new(seed);
        }
        self.selected = 0;
    }

    fn update(&mut self, _dt: f32, input: &PressedActions) -> Transition {
        let count = MenuOption::ALL.len();
        if input.contains(InputAction::Up) {
            self.selected = (self.selected + count - 1) % count;
        }
        if input.contains(InputAction::Down) {
            self.selected = (self.selected + 1) % count;
        }

        if input.contains(InputAction::Select) {
            return self.activate();
        }
        if input.contains(InputAction::Back) {
            return Transition::Quit;
        }
        Transition::None
    }

    fn scene(&self) -> Scene<'_> {
        Scene::Menu {
            items: &MENU_LABELS,
            selected: self.selected,
        }
    }

    fn exit(&mut self) {
        self.selected = 0;
    }
}
