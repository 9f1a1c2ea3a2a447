//! StateStack: owns the active screens and applies their transitions.
//!
//! Only the top state receives `update`; every state contributes a scene when
//! rendering, bottom first.

use arrayvec::ArrayVec;
use log::{debug, info};

use crate::state::{Context, Scene, State, Transition};
use crate::types::PressedActions;

/// Maximum stack depth
pub const MAX_STATES: usize = 8;

#[derive(Default)]
pub struct StateStack {
    states: ArrayVec<Box<dyn State>, MAX_STATES>,
    quit: bool,
}

impl StateStack {
    pub fn new() -> Self {
        Self {
            states: ArrayVec::new(),
            quit: false,
        }
    }

    /// Enter `state` with `ctx` and make it the top of the stack.
    ///
    /// # Panics
    ///
    /// Panics when the stack already holds `MAX_STATES` states.
    pub fn push(&mut self, mut state: Box<dyn State>, ctx: Option<Context>) {
        assert!(!self.states.is_full(), "state stack overflow");
        debug!("push {} ({:?})", state.name(), ctx);
        state.enter(ctx);
        self.states.push(state);
    }

    /// Exit and remove the top state.
    pub fn pop(&mut self) -> Option<Box<dyn State>> {
        let mut state = self.states.pop()?;
        debug!("pop {}", state.name());
        state.exit();
        Some(state)
    }

    /// Update the top state and apply its transition.
    ///
    /// Returns false once the stack is finished (empty or quit).
    pub fn update(&mut self, dt: f32, input: &PressedActions) -> bool {
        let Some(top) = self.states.last_mut() else {
            return false;
        };
        let transition = top.update(dt, input);
        self.apply(transition);
        !self.is_finished()
    }

    fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::None => {}
            Transition::Push(state, ctx) => self.push(state, ctx),
            Transition::Pop => {
                self.pop();
            }
            Transition::Replace(state, ctx) => {
                self.pop();
                self.push(state, ctx);
            }
            Transition::Quit => {
                info!("quit requested with {} states", self.states.len());
                self.clear();
                self.quit = true;
            }
        }
    }

    /// Exit every state, top first.
    pub fn clear(&mut self) {
        while self.pop().is_some() {}
    }

    /// Scenes of every state, bottom to top
    pub fn scenes(&self) -> impl Iterator<Item = Scene<'_>> + '_ {
        self.states.iter().map(|s| s.scene())
    }

    /// Name of the top state
    pub fn top_name(&self) -> Option<&'static str> {
        self.states.last().map(|s| s.name())
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn is_finished(&self) -> bool {
        self.quit || self.states.is_empty()
    }
}
