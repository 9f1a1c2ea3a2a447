//! Core board logic - pure, deterministic, and testable
//!
//! This crate contains the match-3 board simulation. It has **zero dependencies**
//! on UI, input devices, or I/O, making it:
//!
//! - **Deterministic**: Same random source produces identical boards
//! - **Testable**: Every stage is a plain function over the grid
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`grid`]: 12x6 gem grid with match detection, removal, gravity and row rise
//! - [`board`]: The per-frame simulator (cursor, swap, spawn timer, game over)
//! - [`rng`]: Explicit random sources (`SimpleRng` LCG, `SequenceRng` replay)
//! - [`snapshot`]: Read-only view handed to renderers
//!
//! # Example
//!
//! ```
//! use gem_league_core::{Board, BoardStatus, SimpleRng};
//! use gem_league_types::{InputAction, PressedActions};
//!
//! let mut board = Board::new(SimpleRng::new(12345));
//! board.enter();
//!
//! let mut input = PressedActions::new();
//! input.insert(InputAction::Swap);
//! let status = board.advance(0.016, &input);
//!
//! assert_eq!(status, BoardStatus::Running);
//! let snap = board.snapshot();
//! assert!(snap.cells[0].iter().all(|g| g.is_empty()));
//! ```
//!
//! # Timing
//!
//! Call [`Board::advance`](board::Board::advance) once per frame with the elapsed
//! seconds. Every [`SPAWN_INTERVAL_SECS`](types::SPAWN_INTERVAL_SECS) the whole
//! board rises by one row and a new, fully filled row enters from below.

pub mod board;
pub mod grid;
pub mod rng;
pub mod snapshot;

pub use gem_league_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, BoardConfig, BoardStatus};
pub use grid::{Grid, MatchMask};
pub use rng::{RandomSource, SequenceRng, SimpleRng};
pub use snapshot::BoardSnapshot;
