//! Board module - the match-3 board simulator
//!
//! Owns the grid, cursor, spawn timer and random source, and advances them once
//! per frame. Stage order inside [`Board::advance`] is fixed:
//!
//! 1. match detect
//! 2. remove
//! 3. gravity
//! 4. cursor move
//! 5. swap
//! 6. row spawn (timer gated)
//! 7. game-over check
//!
//! Because detection runs before the swap, a swap's matches are cleared on the
//! following frame.

use log::{debug, info};

use crate::grid::Grid;
use crate::rng::{RandomSource, SimpleRng};
use crate::snapshot::BoardSnapshot;
use crate::types::{ActionInput, Cursor, InputAction, SPAWN_INTERVAL_SECS};

/// Tunables for a board instance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardConfig {
    /// Seconds between row rises
    pub spawn_interval_secs: f32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            spawn_interval_secs: SPAWN_INTERVAL_SECS,
        }
    }
}

impl BoardConfig {
    pub fn with_spawn_interval(mut self, secs: f32) -> Self {
        assert!(secs > 0.0, "spawn interval must be positive, got {}", secs);
        self.spawn_interval_secs = secs;
        self
    }
}

/// Result of one `advance` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardStatus {
    Running,
    /// A gem reached the top row; the driver should tear the board down
    GameOver,
}

impl BoardStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, BoardStatus::GameOver)
    }
}

/// Complete board state
#[derive(Debug, Clone)]
pub struct Board<R: RandomSource = SimpleRng> {
    grid: Grid,
    cursor: Cursor,
    /// Seconds accumulated toward the next rise (f64 keeps long sums exact
    /// enough to hit the interval boundary on time)
    spawn_elapsed: f64,
    config: BoardConfig,
    rng: R,
    entered: bool,
    game_over: bool,
    /// Frames advanced since `enter`
    frame: u64,
}

impl<R: RandomSource> Board<R> {
    /// Create an empty board. Call [`Board::enter`] before advancing it.
    pub fn new(rng: R) -> Self {
        Self::with_config(rng, BoardConfig::default())
    }

    pub fn with_config(rng: R, config: BoardConfig) -> Self {
        Self {
            grid: Grid::new(),
            cursor: Cursor::center(),
            spawn_elapsed: 0.0,
            config,
            rng,
            entered: false,
            game_over: false,
            frame: 0,
        }
    }

    /// Fill the bottom half, center the cursor and reset the spawn timer
    pub fn enter(&mut self) {
        self.grid.clear();
        self.grid.fill_initial(&mut self.rng);
        self.cursor = Cursor::center();
        self.spawn_elapsed = 0.0;
        self.game_over = false;
        self.frame = 0;
        self.entered = true;
        info!(
            "board entered with {} gems, spawn interval {}s",
            self.grid.filled_count(),
            self.config.spawn_interval_secs
        );
    }

    /// Tear the board down (grid back to all `Empty`)
    pub fn exit(&mut self) {
        info!("board exited after {} frames", self.frame);
        self.grid.clear();
        self.cursor = Cursor::center();
        self.entered = false;
        self.game_over = false;
    }

    /// Advance the simulation by one frame.
    ///
    /// `dt` is the elapsed time in seconds since the previous frame. Negative
    /// values are treated as zero. Once the board is terminal it stays terminal
    /// and further calls leave it untouched.
    ///
    /// # Panics
    ///
    /// Panics when called before [`Board::enter`].
    pub fn advance<I: ActionInput + ?Sized>(&mut self, dt: f32, input: &I) -> BoardStatus {
        assert!(self.entered, "Board::advance called before Board::enter");
        if self.game_over {
            return BoardStatus::GameOver;
        }
        self.frame += 1;

        let cleared = self.grid.clear_matches();
        if cleared > 0 {
            debug!("frame {}: cleared {} gems", self.frame, cleared);
        }

        self.grid.apply_gravity();
        self.move_cursor(input);

        if input.pressed(InputAction::Swap) {
            self.swap();
        }

        self.tick_spawn_timer(dt.max(0.0));

        if self.grid.top_row_occupied() {
            self.game_over = true;
            info!("frame {}: gem reached the top row, game over", self.frame);
        }

        self.status()
    }

    /// At most one directional move applies per frame (Up, Down, Left, Right
    /// priority); a move blocked by the edge is dropped.
    fn move_cursor<I: ActionInput + ?Sized>(&mut self, input: &I) {
        if input.pressed(InputAction::Up) {
            self.cursor.move_up();
        } else if input.pressed(InputAction::Down) {
            self.cursor.move_down();
        } else if input.pressed(InputAction::Left) {
            self.cursor.move_left();
        } else if input.pressed(InputAction::Right) {
            self.cursor.move_right();
        }
    }

    /// Unconditional swap of the cursor pair; no legality check.
    fn swap(&mut self) {
        assert!(
            self.cursor.is_in_bounds(),
            "cursor out of bounds: {:?}",
            self.cursor
        );
        let left = (self.cursor.row, self.cursor.column);
        self.grid.swap(left, self.cursor.swap_target());
    }

    /// Fires on the frame where the accumulated time first reaches the interval.
    fn tick_spawn_timer(&mut self, dt: f32) {
        self.spawn_elapsed += f64::from(dt);
        if self.spawn_elapsed >= f64::from(self.config.spawn_interval_secs) {
            self.grid.shift_up_and_spawn(&mut self.rng);
            self.spawn_elapsed = 0.0;
            debug!("frame {}: board rose one row", self.frame);
        }
    }

    pub fn status(&self) -> BoardStatus {
        if self.game_over {
            BoardStatus::GameOver
        } else {
            BoardStatus::Running
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn is_entered(&self) -> bool {
        self.entered
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Direct grid access for setting up positions
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Place the cursor directly.
    ///
    /// # Panics
    ///
    /// Panics when the cursor pair would leave the grid.
    pub fn set_cursor(&mut self, cursor: Cursor) {
        assert!(cursor.is_in_bounds(), "cursor out of bounds: {:?}", cursor);
        self.cursor = cursor;
    }

    /// Seconds until the next row rise
    pub fn spawn_timer(&self) -> f32 {
        (f64::from(self.config.spawn_interval_secs) - self.spawn_elapsed).max(0.0) as f32
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Write the renderer view into an existing snapshot (no allocation)
    pub fn snapshot_into(&self, out: &mut BoardSnapshot) {
        out.cells = self.grid.to_rows();
        out.cursor = self.cursor;
        out.spawn_timer = self.spawn_timer();
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        let mut snap = BoardSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}
