use crate::types::{Cursor, Gem, GRID_COLUMNS, GRID_ROWS};

/// Read-only view of a board handed to renderers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardSnapshot {
    /// Gem tags, row 0 first
    pub cells: [[Gem; GRID_COLUMNS]; GRID_ROWS],
    pub cursor: Cursor,
    /// Seconds until the next row rise
    pub spawn_timer: f32,
    pub game_over: bool,
}

impl BoardSnapshot {
    pub fn clear(&mut self) {
        self.cells = [[Gem::Empty; GRID_COLUMNS]; GRID_ROWS];
        self.cursor = Cursor::center();
        self.spawn_timer = 0.0;
        self.game_over = false;
    }

    pub fn rows(&self) -> usize {
        GRID_ROWS
    }

    pub fn columns(&self) -> usize {
        GRID_COLUMNS
    }

    pub fn gem(&self, row: usize, column: usize) -> Option<Gem> {
        self.cells.get(row).and_then(|r| r.get(column)).copied()
    }

    /// Whether (row, column) is one of the two cursor cells
    pub fn is_cursor_cell(&self, row: usize, column: usize) -> bool {
        row == self.cursor.row && (column == self.cursor.column || column == self.cursor.column + 1)
    }
}

impl Default for BoardSnapshot {
    fn default() -> Self {
        Self {
            cells: [[Gem::Empty; GRID_COLUMNS]; GRID_ROWS],
            cursor: Cursor::center(),
            spawn_timer: 0.0,
            game_over: false,
        }
    }
}
