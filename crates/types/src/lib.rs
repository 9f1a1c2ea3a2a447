//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (board simulation, state stack, terminal rendering).
//!
//! # Grid Dimensions
//!
//! - **Rows**: 12 (row 0 is the top, row 11 the bottom)
//! - **Columns**: 6
//! - **Cursor**: covers two horizontally adjacent cells, so its column stays in `0..=4`
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_TARGET_FPS` | 60 | Frame rate used when none is configured |
//! | `SPAWN_INTERVAL_SECS` | 5.0 | Seconds between board rises |
//!
//! # Examples
//!
//! ```
//! use gem_league_types::{Gem, InputAction, PressedActions, ActionInput, GRID_ROWS, GRID_COLUMNS};
//!
//! let gem = Gem::from_index(2).unwrap();
//! assert_eq!(gem, Gem::Water);
//! assert!(!gem.is_empty());
//!
//! let mut pressed = PressedActions::new();
//! pressed.insert(InputAction::Swap);
//! assert!(pressed.pressed(InputAction::Swap));
//! assert!(!pressed.pressed(InputAction::Up));
//!
//! assert_eq!(GRID_ROWS, 12);
//! assert_eq!(GRID_COLUMNS, 6);
//! ```

/// Grid height in cells (12 rows)
pub const GRID_ROWS: usize = 12;

/// Grid width in cells (6 columns)
pub const GRID_COLUMNS: usize = 6;

/// Total number of cells on the grid
pub const GRID_SIZE: usize = GRID_ROWS * GRID_COLUMNS;

/// Target frame rate when nothing else is configured
pub const DEFAULT_TARGET_FPS: u32 = 60;

/// Seconds between two board rises (row shift + new bottom row)
pub const SPAWN_INTERVAL_SECS: f32 = 5.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_dimensions_leave_room_for_cursor() {
        assert_eq!(GRID_SIZE, 72);
        assert!(GRID_COLUMNS >= 2);
        assert!(GRID_ROWS >= 3);
    }

    #[test]
    fn gem_index_roundtrip_covers_every_variant() {
        for (i, gem) in Gem::ALL.iter().enumerate() {
            assert_eq!(Gem::from_index(i as u32), Some(*gem));
            assert_eq!(gem.as_u8() as usize, i);
        }
        assert_eq!(Gem::from_index(Gem::COUNT), None);
    }

    #[test]
    fn only_empty_is_empty() {
        assert!(Gem::Empty.is_empty());
        assert!(Gem::ALL[1..].iter().all(|g| !g.is_empty()));
    }

    #[test]
    fn pressed_actions_set_semantics() {
        let mut set = PressedActions::new();
        assert!(set.is_empty());

        set.insert(InputAction::Left);
        set.insert(InputAction::Left);
        set.insert(InputAction::Back);
        assert!(set.contains(InputAction::Left));
        assert!(set.contains(InputAction::Back));
        assert!(!set.contains(InputAction::Right));
        assert_eq!(set.iter().count(), 2);

        set.clear();
        assert!(set.is_empty());
    }

    #[test]
    fn cursor_clamps_at_every_edge() {
        let mut c = Cursor::new(0, 0);
        assert!(!c.move_up());
        assert!(!c.move_left());
        assert_eq!(c, Cursor::new(0, 0));

        let mut c = Cursor::new(GRID_ROWS - 1, GRID_COLUMNS - 2);
        assert!(!c.move_down());
        assert!(!c.move_right());
        assert_eq!(c, Cursor::new(GRID_ROWS - 1, GRID_COLUMNS - 2));

        let mut c = Cursor::center();
        assert!(c.move_right());
        assert_eq!(c.column, GRID_COLUMNS / 2 + 1);
        assert_eq!(c.swap_target(), (c.row, c.column + 1));
    }
}

/// The gem kinds a grid cell can hold
///
/// `Empty` is a valid cell value meaning "no tile"; it never takes part in a match.
/// The remaining variants are matchable gems:
/// - **Fire**: red
/// - **Water**: blue
/// - **Grass**: green
/// - **Rock**: brown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Gem {
    #[default]
    Empty = 0,
    Fire = 1,
    Water = 2,
    Grass = 3,
    Rock = 4,
}

impl Gem {
    /// Number of variants, `Empty` included
    pub const COUNT: u32 = 5;

    /// Every variant in tag order (`Empty` first)
    pub const ALL: [Gem; Gem::COUNT as usize] =
        [Gem::Empty, Gem::Fire, Gem::Water, Gem::Grass, Gem::Rock];

    /// Map a tag index (`0..COUNT`) back to a gem
    ///
    /// # Examples
    ///
    /// ```
    /// use gem_league_types::Gem;
    ///
    /// assert_eq!(Gem::from_index(0), Some(Gem::Empty));
    /// assert_eq!(Gem::from_index(4), Some(Gem::Rock));
    /// assert_eq!(Gem::from_index(5), None);
    /// ```
    pub fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Tag value handed to renderers
    pub fn as_u8(&self) -> u8 {
        *self as u8
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Gem::Empty)
    }
}

/// Abstract input actions
///
/// Device polling lives outside the simulation; everything downstream only sees
/// these actions as "pressed this frame" signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Move cursor / menu selection up
    Up,
    /// Move cursor / menu selection down
    Down,
    /// Move cursor one column left
    Left,
    /// Move cursor one column right
    Right,
    /// Swap the two gems under the cursor
    Swap,
    /// Confirm a menu entry
    Select,
    /// Leave the current screen
    Back,
}

impl InputAction {
    pub const ALL: [InputAction; 7] = [
        InputAction::Up,
        InputAction::Down,
        InputAction::Left,
        InputAction::Right,
        InputAction::Swap,
        InputAction::Select,
        InputAction::Back,
    ];

    #[inline(always)]
    fn bit(self) -> u8 {
        1 << (self as u8)
    }

    /// Lowercase name, as printed by the key-check binary
    pub fn as_str(&self) -> &'static str {
        match self {
            InputAction::Up => "up",
            InputAction::Down => "down",
            InputAction::Left => "left",
            InputAction::Right => "right",
            InputAction::Swap => "swap",
            InputAction::Select => "select",
            InputAction::Back => "back",
        }
    }
}

/// Source of "pressed this frame" signals.
///
/// `pressed` must only report `true` on the frame an action transitioned to active.
pub trait ActionInput {
    fn pressed(&self, action: InputAction) -> bool;
}

/// Set of actions pressed during one frame (a 7-bit mask).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PressedActions {
    bits: u8,
}

impl PressedActions {
    pub fn new() -> Self {
        Self { bits: 0 }
    }

    pub fn insert(&mut self, action: InputAction) {
        self.bits |= action.bit();
    }

    pub fn contains(&self, action: InputAction) -> bool {
        self.bits & action.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn clear(&mut self) {
        self.bits = 0;
    }

    /// Iterate the pressed actions in `InputAction::ALL` order
    pub fn iter(&self) -> impl Iterator<Item = InputAction> + '_ {
        InputAction::ALL.into_iter().filter(|a| self.contains(*a))
    }
}

impl ActionInput for PressedActions {
    fn pressed(&self, action: InputAction) -> bool {
        self.contains(action)
    }
}

impl FromIterator<InputAction> for PressedActions {
    fn from_iter<I: IntoIterator<Item = InputAction>>(iter: I) -> Self {
        let mut set = Self::new();
        for action in iter {
            set.insert(action);
        }
        set
    }
}

/// Board cursor: the left cell of the horizontally adjacent swap pair.
///
/// Invariant: `row < GRID_ROWS` and `column <= GRID_COLUMNS - 2`, so the right
/// neighbour `(row, column + 1)` is always on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cursor {
    pub row: usize,
    pub column: usize,
}

impl Cursor {
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Starting position for a fresh board
    pub const fn center() -> Self {
        Self::new(GRID_ROWS / 2, GRID_COLUMNS / 2)
    }

    pub fn is_in_bounds(&self) -> bool {
        self.row < GRID_ROWS && self.column + 1 < GRID_COLUMNS
    }

    /// The cell the cursor swaps with
    pub fn swap_target(&self) -> (usize, usize) {
        (self.row, self.column + 1)
    }

    pub fn move_up(&mut self) -> bool {
        if self.row > 0 {
            self.row -= 1;
            return true;
        }
        false
    }

    pub fn move_down(&mut self) -> bool {
        if self.row < GRID_ROWS - 1 {
            self.row += 1;
            return true;
        }
        false
    }

    pub fn move_left(&mut self) -> bool {
        if self.column > 0 {
            self.column -= 1;
            return true;
        }
        false
    }

    pub fn move_right(&mut self) -> bool {
        // Right neighbour must stay on the grid.
        if self.column < GRID_COLUMNS - 2 {
            self.column += 1;
            return true;
        }
        false
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::center()
    }
}
