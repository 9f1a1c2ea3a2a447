//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It renders into a simple framebuffer that is flushed to the terminal
//! with diffing, instead of going through a widget toolkit.
//!
//! - [`FrameBuffer`]: styled character grid
//! - [`BoardView`], [`MenuView`], [`SettingsView`]: pure scene painters
//! - [`StackView`]: paints a state stack bottom to top
//! - [`TerminalRenderer`]: raw mode / alternate screen and diff flushing

pub mod board_view;
pub mod fb;
pub mod renderer;
pub mod screen_view;
pub mod stack_view;

pub use gem_league_core as core;
pub use gem_league_engine as engine;
pub use gem_league_types as types;

pub use board_view::{gem_color, AnchorY, BoardView, Viewport};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use screen_view::{MenuView, SettingsView};
pub use stack_view::StackView;
