//! Match screen: drives one board instance from the state stack.

use log::info;

use crate::core::{Board, BoardConfig, BoardSnapshot, BoardStatus, SimpleRng};
use crate::state::{Context, Scene, State, Transition};
use crate::types::{InputAction, PressedActions};

/// How long the final board stays on screen after game over
pub const GAME_OVER_LINGER_SECS: f32 = 2.0;

pub struct MatchScreen {
    board: Board<SimpleRng>,
    snapshot: BoardSnapshot,
    /// Seconds spent on the game-over screen
    game_over_secs: f32,
}

impl MatchScreen {
    pub fn new(config: BoardConfig) -> Self {
        Self {
            board: Board::with_config(SimpleRng::default(), config),
            snapshot: BoardSnapshot::default(),
            game_over_secs: 0.0,
        }
    }

    pub fn board(&self) -> &Board<SimpleRng> {
        &self.board
    }

    pub fn snapshot(&self) -> &BoardSnapshot {
        &self.snapshot
    }
}

impl State for MatchScreen {
    fn name(&self) -> &'static str {
        "match"
    }

    fn enter(&mut self, ctx: Option<Context>) {
        if let Some(Context::Seed(seed)) = ctx {
            self.board = Board::with_config(SimpleRng::new(seed), self.board.config());
        }
        self.board.enter();
        self.board.snapshot_into(&mut self.snapshot);
        self.game_over_secs = 0.0;
    }

    fn update(&mut self, dt: f32, input: &PressedActions) -> Transition {
        if input.contains(InputAction::Back) {
            return Transition::Pop;
        }

        if self.board.is_game_over() {
            // Hold the final board briefly; Select skips the wait.
            self.game_over_secs += dt.max(0.0);
            if self.game_over_secs >= GAME_OVER_LINGER_SECS || input.contains(InputAction::Select)
            {
                return Transition::Pop;
            }
            return Transition::None;
        }

        let status = self.board.advance(dt, input);
        self.board.snapshot_into(&mut self.snapshot);
        if status == BoardStatus::GameOver {
            info!("match over after {} frames", self.board.frame());
        }
        Transition::None
    }

    fn scene(&self) -> Scene<'_> {
        Scene::Match(&self.snapshot)
    }

    fn exit(&mut self) {
        self.board.exit();
        self.snapshot.clear();
    }
}
