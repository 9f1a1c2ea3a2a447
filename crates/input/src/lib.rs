//! Terminal input module.
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::InputAction`] and collects them into
//! discrete per-frame presses, so the board only ever sees "pressed this frame".

pub mod frame;
pub mod map;

pub use gem_league_types as types;

pub use frame::FrameInput;
pub use map::{handle_key_event, should_quit};
