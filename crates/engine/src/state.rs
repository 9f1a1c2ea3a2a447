//! The `State` trait and the values states exchange with the stack.

use crate::core::BoardSnapshot;
use crate::types::PressedActions;

/// Payload handed to a state's `enter` when it is pushed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Context {
    /// Seed for the pushed state's random source
    Seed(u32),
}

/// What the stack should do after a state's update.
pub enum Transition {
    None,
    Push(Box<dyn State>, Option<Context>),
    /// Pop the current state
    Pop,
    /// Pop the current state, then push another
    Replace(Box<dyn State>, Option<Context>),
    /// Exit every state and stop the driver
    Quit,
}

impl std::fmt::Debug for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Transition::None => f.write_str("None"),
            Transition::Push(s, ctx) => write!(f, "Push({}, {:?})", s.name(), ctx),
            Transition::Pop => f.write_str("Pop"),
            Transition::Replace(s, ctx) => write!(f, "Replace({}, {:?})", s.name(), ctx),
            Transition::Quit => f.write_str("Quit"),
        }
    }
}

/// One labelled value on the settings screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingRow {
    pub name: &'static str,
    pub value: String,
}

impl SettingRow {
    pub fn new(name: &'static str, value: impl ToString) -> Self {
        Self {
            name,
            value: value.to_string(),
        }
    }
}

/// Render-facing view of a state. Renderers draw scenes bottom to top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scene<'a> {
    Menu {
        items: &'a [&'static str],
        selected: usize,
    },
    Match(&'a BoardSnapshot),
    Settings(&'a [SettingRow]),
}

/// A screen on the state stack.
pub trait State {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    fn enter(&mut self, ctx: Option<Context>);

    /// Advance one frame. Only the top state is updated.
    fn update(&mut self, dt: f32, input: &PressedActions) -> Transition;

    fn scene(&self) -> Scene<'_>;

    fn exit(&mut self) {}
}
