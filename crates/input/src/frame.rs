//! Per-frame press collection.
//!
//! Terminals report key presses as discrete events. `FrameInput` gathers the
//! presses that arrive between two frames and hands them out once, so an action
//! reads as pressed only on the frame its event arrived.

use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::handle_key_event;
use crate::types::{InputAction, PressedActions};

#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    pending: PressedActions,
}

impl FrameInput {
    pub fn new() -> Self {
        Self {
            pending: PressedActions::new(),
        }
    }

    /// Record a key event. Returns the mapped action for fresh presses.
    ///
    /// Auto-repeat and release events are ignored: a held key is not a new press.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<InputAction> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        let action = handle_key_event(key)?;
        self.pending.insert(action);
        Some(action)
    }

    /// Record an action directly (scripted input, tests).
    pub fn press(&mut self, action: InputAction) {
        self.pending.insert(action);
    }

    /// Presses for this frame; the pending set starts empty again.
    pub fn take(&mut self) -> PressedActions {
        std::mem::take(&mut self.pending)
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    fn key(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn presses_are_reported_once() {
        let mut input = FrameInput::new();
        input.handle_key(key(KeyCode::Left, KeyEventKind::Press));
        input.handle_key(key(KeyCode::Char(' '), KeyEventKind::Press));

        let frame = input.take();
        assert!(frame.contains(InputAction::Left));
        assert!(frame.contains(InputAction::Swap));

        assert!(input.take().is_empty());
    }

    #[test]
    fn repeat_and_release_are_ignored() {
        let mut input = FrameInput::new();
        assert_eq!(input.handle_key(key(KeyCode::Up, KeyEventKind::Repeat)), None);
        assert_eq!(input.handle_key(key(KeyCode::Up, KeyEventKind::Release)), None);
        assert!(!input.has_pending());
    }

    #[test]
    fn unmapped_keys_do_nothing() {
        let mut input = FrameInput::new();
        assert_eq!(input.handle_key(key(KeyCode::Char('x'), KeyEventKind::Press)), None);
        assert!(!input.has_pending());
    }
}
