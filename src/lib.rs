//! Gem League (workspace facade crate).
//!
//! Re-exports the member crates as `gem_league::{core,engine,input,term,types}` and
//! holds the pieces only the binary needs: environment-driven [`settings`] and
//! file-backed [`logging`].

pub mod logging;
pub mod settings;

pub use gem_league_core as core;
pub use gem_league_engine as engine;
pub use gem_league_input as input;
pub use gem_league_term as term;
pub use gem_league_types as types;

pub use settings::Settings;
