//! Grid module - the gem playfield and its per-frame stages
//!
//! The grid is a 12x6 array of [`Gem`] values stored flat (row-major) for cache
//! locality and zero allocation. Row 0 is the top, row 11 the bottom.
//!
//! Every stage here is total: it works on internally generated indices only and
//! always completes in O(rows * columns).

use crate::rng::RandomSource;
use crate::types::{Gem, GRID_COLUMNS, GRID_ROWS, GRID_SIZE};

/// Length of the shortest run that counts as a match
const MATCH_LEN: usize = 3;

/// The gem grid - 6 columns x 12 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Flat array of cells, row-major order (row * COLUMNS + column)
    cells: [Gem; GRID_SIZE],
}

/// Cells marked for removal in one match pass.
///
/// Computed fresh from grid contents each frame; never carried across frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchMask {
    marked: [bool; GRID_SIZE],
}

impl MatchMask {
    fn new() -> Self {
        Self {
            marked: [false; GRID_SIZE],
        }
    }

    fn mark(&mut self, idx: usize) {
        self.marked[idx] = true;
    }

    pub fn is_marked(&self, row: usize, column: usize) -> bool {
        Grid::index(row, column)
            .map(|idx| self.marked[idx])
            .unwrap_or(false)
    }

    /// Number of marked cells
    pub fn count(&self) -> usize {
        self.marked.iter().filter(|m| **m).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.marked.iter().any(|m| *m)
    }
}

impl Grid {
    /// Create a new grid with every cell `Empty`
    pub fn new() -> Self {
        Self {
            cells: [Gem::Empty; GRID_SIZE],
        }
    }

    /// Calculate flat index from (row, column)
    #[inline(always)]
    fn index(row: usize, column: usize) -> Option<usize> {
        if row >= GRID_ROWS || column >= GRID_COLUMNS {
            return None;
        }
        Some(row * GRID_COLUMNS + column)
    }

    pub fn rows(&self) -> usize {
        GRID_ROWS
    }

    pub fn columns(&self) -> usize {
        GRID_COLUMNS
    }

    /// Get the gem at (row, column)
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, column: usize) -> Option<Gem> {
        Self::index(row, column).map(|idx| self.cells[idx])
    }

    /// Set the gem at (row, column)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: usize, column: usize, gem: Gem) -> bool {
        match Self::index(row, column) {
            Some(idx) => {
                self.cells[idx] = gem;
                true
            }
            None => false,
        }
    }

    /// One row as a slice (left to right)
    ///
    /// # Panics
    ///
    /// Panics when `row >= GRID_ROWS`.
    pub fn row(&self, row: usize) -> &[Gem] {
        let start = row * GRID_COLUMNS;
        &self.cells[start..start + GRID_COLUMNS]
    }

    pub fn cells(&self) -> &[Gem] {
        &self.cells
    }

    /// Reset every cell to `Empty`
    pub fn clear(&mut self) {
        self.cells.fill(Gem::Empty);
    }

    /// Number of non-empty cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|g| !g.is_empty()).count()
    }

    /// Exchange two cells.
    ///
    /// Both positions are produced by the cursor clamp rules; an out-of-bounds
    /// position is a programmer error.
    pub fn swap(&mut self, a: (usize, usize), b: (usize, usize)) {
        let ia = Self::index(a.0, a.1);
        let ib = Self::index(b.0, b.1);
        match (ia, ib) {
            (Some(ia), Some(ib)) => self.cells.swap(ia, ib),
            _ => panic!("swap out of bounds: {:?} <-> {:?}", a, b),
        }
    }

    /// Populate the bottom half of the grid for a fresh board.
    ///
    /// The first populated row draws over every gem (`Empty` included). Each row
    /// below draws over every gem when the cell above is `Empty`, and over the
    /// non-empty gems otherwise, so no gem starts out resting on a hole.
    /// Rows above `GRID_ROWS / 2` are left untouched.
    pub fn fill_initial<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        let initial_row = GRID_ROWS / 2;

        for row in initial_row..GRID_ROWS {
            for column in 0..GRID_COLUMNS {
                let gem = if row == initial_row {
                    rng.any_gem()
                } else if self.cells[(row - 1) * GRID_COLUMNS + column].is_empty() {
                    rng.any_gem()
                } else {
                    rng.filled_gem()
                };
                self.cells[row * GRID_COLUMNS + column] = gem;
            }
        }
    }

    /// Mark every cell that belongs to a horizontal or vertical run of three or
    /// more equal, non-empty gems.
    ///
    /// Every start offset is scanned, so a run of four or five is fully marked by
    /// its overlapping triples.
    pub fn match_mask(&self) -> MatchMask {
        let mut mask = MatchMask::new();

        // Horizontal
        for row in 0..GRID_ROWS {
            for column in 0..=GRID_COLUMNS - MATCH_LEN {
                let idx = row * GRID_COLUMNS + column;
                if self.is_run(idx, 1) {
                    for k in 0..MATCH_LEN {
                        mask.mark(idx + k);
                    }
                }
            }
        }

        // Vertical
        for row in 0..=GRID_ROWS - MATCH_LEN {
            for column in 0..GRID_COLUMNS {
                let idx = row * GRID_COLUMNS + column;
                if self.is_run(idx, GRID_COLUMNS) {
                    for k in 0..MATCH_LEN {
                        mask.mark(idx + k * GRID_COLUMNS);
                    }
                }
            }
        }

        mask
    }

    #[inline(always)]
    fn is_run(&self, start: usize, stride: usize) -> bool {
        let first = self.cells[start];
        !first.is_empty() && (1..MATCH_LEN).all(|k| self.cells[start + k * stride] == first)
    }

    /// Set every marked cell to `Empty`; returns how many gems were removed
    pub fn remove(&mut self, mask: &MatchMask) -> usize {
        let mut removed = 0;
        for (cell, marked) in self.cells.iter_mut().zip(mask.marked.iter()) {
            if *marked && !cell.is_empty() {
                *cell = Gem::Empty;
                removed += 1;
            }
        }
        removed
    }

    /// Detect and remove matches in one step
    pub fn clear_matches(&mut self) -> usize {
        let mask = self.match_mask();
        if mask.is_empty() {
            return 0;
        }
        self.remove(&mask)
    }

    /// Compact every column downwards.
    ///
    /// Scans each column bottom to top; every `Empty` cell pulls down the nearest
    /// non-empty gem above it. A single pass leaves no gaps under any gem, so the
    /// result is a fixed point. Returns the number of gems moved.
    pub fn apply_gravity(&mut self) -> usize {
        let mut moved = 0;
        for column in 0..GRID_COLUMNS {
            for row in (0..GRID_ROWS).rev() {
                let dst = row * GRID_COLUMNS + column;
                if !self.cells[dst].is_empty() {
                    continue;
                }
                let src = (0..row)
                    .rev()
                    .map(|k| k * GRID_COLUMNS + column)
                    .find(|&idx| !self.cells[idx].is_empty());
                if let Some(src) = src {
                    self.cells[dst] = self.cells[src];
                    self.cells[src] = Gem::Empty;
                    moved += 1;
                }
            }
        }
        moved
    }

    /// Raise the board by one row.
    ///
    /// Row `r` takes the contents of row `r + 1` (row 0's content is discarded),
    /// then the bottom row is refilled with non-empty gems.
    pub fn shift_up_and_spawn<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        // copy_within handles the overlapping ranges
        self.cells.copy_within(GRID_COLUMNS.., 0);

        let bottom = (GRID_ROWS - 1) * GRID_COLUMNS;
        for cell in &mut self.cells[bottom..] {
            *cell = rng.filled_gem();
        }
    }

    /// True when any gem sits in the top row (terminal condition)
    pub fn top_row_occupied(&self) -> bool {
        self.row(0).iter().any(|g| !g.is_empty())
    }

    /// Build a grid from full row data (top to bottom)
    pub fn from_rows(rows: [[Gem; GRID_COLUMNS]; GRID_ROWS]) -> Self {
        let mut grid = Self::new();
        for (row, gems) in rows.iter().enumerate() {
            grid.cells[row * GRID_COLUMNS..(row + 1) * GRID_COLUMNS].copy_from_slice(gems);
        }
        grid
    }

    /// Build a grid whose bottom rows hold `rows` (listed top to bottom); the
    /// rest is `Empty`.
    pub fn from_bottom_rows(rows: &[[Gem; GRID_COLUMNS]]) -> Self {
        assert!(rows.len() <= GRID_ROWS, "too many rows: {}", rows.len());
        let mut grid = Self::new();
        let first = GRID_ROWS - rows.len();
        for (i, gems) in rows.iter().enumerate() {
            let start = (first + i) * GRID_COLUMNS;
            grid.cells[start..start + GRID_COLUMNS].copy_from_slice(gems);
        }
        grid
    }

    /// Copy out as a 2D array (top to bottom)
    pub fn to_rows(&self) -> [[Gem; GRID_COLUMNS]; GRID_ROWS] {
        let mut out = [[Gem::Empty; GRID_COLUMNS]; GRID_ROWS];
        for (row, dst) in out.iter_mut().enumerate() {
            dst.copy_from_slice(self.row(row));
        }
        out
    }

    /// One column as an array (top to bottom)
    pub fn column(&self, column: usize) -> [Gem; GRID_ROWS] {
        let mut out = [Gem::Empty; GRID_ROWS];
        for (row, dst) in out.iter_mut().enumerate() {
            *dst = self.cells[row * GRID_COLUMNS + column];
        }
        out
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{SequenceRng, SimpleRng};
    use Gem::{Empty as E, Fire as F, Grass as G, Rock as R, Water as W};

    #[test]
    fn test_grid_index_calculation() {
        assert_eq!(Grid::index(0, 0), Some(0));
        assert_eq!(Grid::index(0, 5), Some(5));
        assert_eq!(Grid::index(1, 0), Some(6));
        assert_eq!(Grid::index(11, 5), Some(71));
        assert_eq!(Grid::index(12, 0), None);
        assert_eq!(Grid::index(0, 6), None);
    }

    #[test]
    fn test_horizontal_triple_is_marked() {
        let grid = Grid::from_bottom_rows(&[[F, F, F, W, R, G]]);
        let mask = grid.match_mask();
        assert_eq!(mask.count(), 3);
        assert!(mask.is_marked(11, 0));
        assert!(mask.is_marked(11, 2));
        assert!(!mask.is_marked(11, 3));
    }

    #[test]
    fn test_run_of_four_marks_all_four() {
        let grid = Grid::from_bottom_rows(&[[W, R, R, R, R, F]]);
        let mask = grid.match_mask();
        assert_eq!(mask.count(), 4);
        for column in 1..=4 {
            assert!(mask.is_marked(11, column));
        }
    }

    #[test]
    fn test_empty_runs_never_match() {
        let grid = Grid::new();
        assert!(grid.match_mask().is_empty());
    }

    #[test]
    fn test_vertical_and_horizontal_marks_combine() {
        // An L shape sharing the corner cell.
        let grid = Grid::from_bottom_rows(&[
            [G, W, R, F, W, R],
            [G, R, W, F, R, W],
            [G, G, G, W, F, R],
        ]);
        let mask = grid.match_mask();
        assert_eq!(mask.count(), 5);
        assert!(mask.is_marked(9, 0));
        assert!(mask.is_marked(10, 0));
        assert!(mask.is_marked(11, 0));
        assert!(mask.is_marked(11, 1));
        assert!(mask.is_marked(11, 2));
    }

    #[test]
    fn test_match_at_right_and_bottom_edges() {
        let mut grid = Grid::new();
        for row in 9..12 {
            grid.set(row, 5, W);
        }
        grid.set(0, 3, F);
        grid.set(0, 4, F);
        grid.set(0, 5, F);
        let mask = grid.match_mask();
        assert_eq!(mask.count(), 6);
        assert!(mask.is_marked(11, 5));
        assert!(mask.is_marked(0, 5));
    }

    #[test]
    fn test_remove_counts_cleared_cells() {
        let mut grid = Grid::from_bottom_rows(&[[F, F, F, W, R, G]]);
        assert_eq!(grid.clear_matches(), 3);
        assert_eq!(grid.row(11), &[E, E, E, W, R, G]);
    }

    #[test]
    fn test_gravity_pulls_nearest_gem_down() {
        let mut grid = Grid::from_bottom_rows(&[[E; 6], [F; 6], [E; 6], [W; 6]]);
        grid.apply_gravity();
        let column = grid.column(0);
        assert_eq!(&column[8..], &[E, E, F, W]);
    }

    #[test]
    fn test_gravity_drops_across_multiple_rows_in_one_pass() {
        let mut grid = Grid::new();
        grid.set(2, 1, R);
        grid.set(4, 1, G);
        assert_eq!(grid.apply_gravity(), 2);
        assert_eq!(grid.get(11, 1), Some(G));
        assert_eq!(grid.get(10, 1), Some(R));
        assert_eq!(grid.filled_count(), 2);
    }

    #[test]
    fn test_gravity_is_idempotent() {
        let mut grid = Grid::from_bottom_rows(&[
            [F, E, W, E, E, R],
            [E, G, E, E, W, E],
            [R, E, E, F, E, E],
            [E, E, G, E, E, W],
        ]);
        grid.apply_gravity();
        let once = grid.clone();
        assert_eq!(grid.apply_gravity(), 0);
        assert_eq!(grid, once);
    }

    #[test]
    fn test_shift_up_discards_top_row_and_fills_bottom() {
        let mut grid = Grid::new();
        grid.set(0, 0, F);
        grid.set(1, 2, W);
        grid.set(11, 4, R);
        let mut rng = SequenceRng::new([0, 1, 2, 3]);
        grid.shift_up_and_spawn(&mut rng);

        assert_eq!(grid.get(0, 2), Some(W));
        assert_eq!(grid.get(0, 0), Some(E));
        assert_eq!(grid.get(10, 4), Some(R));
        assert_eq!(grid.row(11), &[F, W, G, R, F, W]);
    }

    #[test]
    fn test_fill_initial_leaves_top_half_empty() {
        let mut grid = Grid::new();
        grid.fill_initial(&mut SimpleRng::new(42));
        for row in 0..GRID_ROWS / 2 {
            assert!(grid.row(row).iter().all(|g| g.is_empty()), "row {}", row);
        }
    }

    #[test]
    fn test_fill_initial_never_leaves_holes_under_gems() {
        for seed in 1..50 {
            let mut grid = Grid::new();
            grid.fill_initial(&mut SimpleRng::new(seed));
            for row in GRID_ROWS / 2 + 1..GRID_ROWS {
                for column in 0..GRID_COLUMNS {
                    let above = grid.get(row - 1, column).unwrap();
                    let here = grid.get(row, column).unwrap();
                    assert!(
                        above.is_empty() || !here.is_empty(),
                        "seed {} hole at ({}, {})",
                        seed,
                        row,
                        column
                    );
                }
            }
        }
    }

    #[test]
    fn test_fill_initial_draw_rules() {
        // First populated row draws over all gems: 0 -> Empty, 1 -> Fire.
        // Second row: under Empty draws over all gems, under Fire over filled gems
        // only (0 -> Fire after the offset).
        let mut rng = SequenceRng::new([0, 1, 0, 1, 0, 1, 0, 0]);
        let mut grid = Grid::new();
        grid.fill_initial(&mut rng);
        assert_eq!(grid.row(6), &[E, F, E, F, E, F]);
        assert_eq!(grid.get(7, 0), Some(E));
        assert_eq!(grid.get(7, 1), Some(F));
    }

    #[test]
    fn test_top_row_occupied() {
        let mut grid = Grid::from_bottom_rows(&[[F; 6]]);
        assert!(!grid.top_row_occupied());
        grid.set(0, 3, G);
        assert!(grid.top_row_occupied());
    }

    #[test]
    #[should_panic(expected = "swap out of bounds")]
    fn test_swap_out_of_bounds_panics() {
        let mut grid = Grid::new();
        grid.swap((0, 5), (0, 6));
    }

    #[test]
    #[should_panic]
    fn test_row_out_of_range_panics() {
        let grid = Grid::new();
        grid.row(GRID_ROWS);
    }
}
