//! State stack and screens.
//!
//! The driver owns a [`StateStack`] of boxed [`State`]s. Each frame it calls
//! [`StateStack::update`] with the elapsed seconds and the actions pressed this
//! frame; only the top state is updated, and the transition it returns (push,
//! pop, replace, quit) is applied immediately. Rendering walks
//! [`StateStack::scenes`] bottom to top.
//!
//! # Screens
//!
//! - [`MainMenu`]: Play / Settings / Exit, wrapping selection
//! - [`MatchScreen`]: one board simulation, popped on Back or after game over
//! - [`SettingsScreen`]: read-only list of the active settings

pub mod match_screen;
pub mod menu;
pub mod settings_screen;
pub mod stack;
pub mod state;

pub use gem_league_core as core;
pub use gem_league_types as types;

pub use match_screen::{MatchScreen, GAME_OVER_LINGER_SECS};
pub use menu::{MainMenu, MenuOption, SessionConfig};
pub use settings_screen::SettingsScreen;
pub use stack::{StateStack, MAX_STATES};
pub use state::{Context, Scene, SettingRow, State, Transition};
