// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A dense two-dimensional grid
//!
//! Every intermediate product of the carver (the energy of each
//! pixel, the cumulative cost of reaching it, each colour channel of
//! the image itself) is one of these: a fixed-size, row-major block
//! of cells addressed as `(row, column)`.

use std::fmt;
use std::ops::{Index, IndexMut};

/// An addressable two-dimensional field of `P`.  The size is fixed at
/// construction; the only way to change it is to re-initialize the
/// whole thing.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<P: Default + Copy> {
    width: u32,
    height: u32,
    cells: Vec<P>,
}

impl<P: Default + Copy> Grid<P> {
    /// Define a new grid, every cell set to the cell type's default
    /// (zero, for the integer grids).
    pub fn new(width: u32, height: u32) -> Self {
        assert!(
            width > 0 && height > 0,
            "grid dimensions must be positive, got {}x{}",
            width,
            height
        );
        Grid {
            width,
            height,
            cells: vec![P::default(); width as usize * height as usize],
        }
    }

    /// Throw away the current contents and start over at a new size.
    pub fn init(&mut self, width: u32, height: u32) {
        *self = Grid::new(width, height);
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    // Absolutely, the number one name of this game is keep the index
    // math in a singular location and never, ever mess with it.  Each
    // axis is checked on its own: a column past the end of a row must
    // not quietly land in the next one.
    fn get_index(&self, row: u32, col: u32) -> usize {
        assert!(
            row < self.height && col < self.width,
            "({}, {}) is outside a {}x{} grid",
            row,
            col,
            self.width,
            self.height
        );
        (row as usize) * (self.width as usize) + (col as usize)
    }

    /// Get the value at a single cell's address
    pub fn at(&self, row: u32, col: u32) -> P {
        self.cells[self.get_index(row, col)]
    }

    /// Get a mutable reference to the value at a single cell's address
    pub fn at_mut(&mut self, row: u32, col: u32) -> &mut P {
        let index = self.get_index(row, col);
        &mut self.cells[index]
    }

    /// Set every cell to `value`.
    pub fn fill(&mut self, value: P) {
        self.cells.iter_mut().for_each(|c| *c = value);
    }

    /// Set only the outermost ring of cells.  On a grid one row or one
    /// column thick that is every cell.
    pub fn fill_border(&mut self, value: P) {
        let (mw, mh) = (self.width - 1, self.height - 1);
        for col in 0..self.width {
            self[(0, col)] = value;
            self[(mh, col)] = value;
        }
        for row in 0..self.height {
            self[(row, 0)] = value;
            self[(row, mw)] = value;
        }
    }

    /// The cells of one row, left to right.
    pub fn row(&self, row: u32) -> &[P] {
        let start = self.get_index(row, 0);
        &self.cells[start..start + self.width as usize]
    }
}

impl<P: Default + Copy + PartialOrd> Grid<P> {
    /// The largest value anywhere in the grid.
    pub fn max(&self) -> P {
        self.cells
            .iter()
            .skip(1)
            .fold(self.cells[0], |m, &c| if c > m { c } else { m })
    }

    /// The column, within `[col_start, col_end)`, holding the smallest
    /// value in `row`.  Ties go to the lowest column; the seam finder
    /// depends on that.
    pub fn argmin_in_row(&self, row: u32, col_start: u32, col_end: u32) -> u32 {
        assert!(
            col_start < col_end && col_end <= self.width,
            "empty or out-of-range column span [{}, {}) in a row of {}",
            col_start,
            col_end,
            self.width
        );
        let cells = &self.row(row)[col_start as usize..col_end as usize];
        let mut best = 0;
        for (i, &c) in cells.iter().enumerate().skip(1) {
            // Strictly less: an equal value further right never wins.
            if c < cells[best] {
                best = i;
            }
        }
        col_start + best as u32
    }

    /// The smallest value in `row` within `[col_start, col_end)`.
    pub fn min_in_row(&self, row: u32, col_start: u32, col_end: u32) -> P {
        self[(row, self.argmin_in_row(row, col_start, col_end))]
    }
}

impl<P: Default + Copy> Index<(u32, u32)> for Grid<P> {
    type Output = P;

    /// A convenience addressing mode for getting values, as `(row, col)`.
    fn index(&self, (row, col): (u32, u32)) -> &P {
        let index = self.get_index(row, col);
        &self.cells[index]
    }
}

impl<P: Default + Copy> IndexMut<(u32, u32)> for Grid<P> {
    /// A convenience addressing mode for setting values, as `(row, col)`.
    fn index_mut(&mut self, (row, col): (u32, u32)) -> &mut P {
        let index = self.get_index(row, col);
        &mut self.cells[index]
    }
}

/// The debugging dump: dimensions on the first line, then one line
/// per row.  Every value is followed by a space.
impl<P: Default + Copy + fmt::Display> fmt::Display for Grid<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {} ", self.width, self.height)?;
        for row in 0..self.height {
            for c in self.row(row) {
                write!(f, "{} ", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn border(grid: &Grid<i32>, row: u32, col: u32) -> bool {
        row == 0 || row == grid.height() - 1 || col == 0 || col == grid.width() - 1
    }

    // Rows 0 and 1 hold ties so the lowest-column rule gets exercised.
    fn scan_fixture() -> Grid<i32> {
        let rows = [[5, 2, 7, 2, 9, 1], [-4, -4, -2, -9, -9, 0], [3; 6]];
        let mut grid = Grid::new(6, 3);
        for (r, vals) in rows.iter().enumerate() {
            for (c, v) in vals.iter().enumerate() {
                grid[(r as u32, c as u32)] = *v;
            }
        }
        grid
    }

    #[test]
    fn new_grid_is_zero_filled() {
        let grid: Grid<i32> = Grid::new(2, 2);
        assert_eq!(grid.width(), 2);
        assert_eq!(grid.height(), 2);
        assert!(grid.cells.iter().all(|&c| c == 0));
    }

    #[test]
    fn init_discards_old_contents() {
        let mut grid: Grid<i32> = Grid::new(2, 2);
        grid[(0, 0)] = 99;
        grid[(1, 1)] = 42;
        grid.init(3, 1);
        assert_eq!((grid.width(), grid.height()), (3, 1));
        assert_eq!(grid.cells, vec![0, 0, 0]);
    }

    #[test]
    fn at_is_row_major() {
        let mut grid = Grid::new(3, 2);
        *grid.at_mut(1, 2) = 99;
        *grid.at_mut(0, 1) = -3;
        assert_eq!(grid.at(1, 2), 99);
        assert_eq!(grid.cells[1 * 3 + 2], 99);
        assert_eq!(grid[(0, 1)], -3);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn column_overflow_does_not_wrap() {
        let grid: Grid<i32> = Grid::new(3, 2);
        grid.at(0, 3);
    }

    #[test]
    fn fill_overwrites_everything() {
        let mut grid = Grid::new(3, 5);
        grid.fill(42);
        assert!(grid.cells.iter().all(|&c| c == 42));
        grid[(2, 1)] = 1;
        grid.fill(0);
        assert!(grid.cells.iter().all(|&c| c == 0));
    }

    #[test]
    fn fill_border_leaves_interior_alone() {
        let mut grid = Grid::new(4, 3);
        grid.fill(7);
        grid.fill_border(1);
        grid.fill_border(9);
        for row in 0..3 {
            for col in 0..4 {
                let expected = if border(&grid, row, col) { 9 } else { 7 };
                assert_eq!(grid[(row, col)], expected);
            }
        }
    }

    #[test]
    fn fill_border_on_degenerate_grids() {
        let mut single = Grid::new(1, 1);
        single.fill(4);
        single.fill_border(8);
        assert_eq!(single[(0, 0)], 8);

        let mut wide = Grid::new(5, 1);
        wide.fill(2);
        wide.fill_border(6);
        assert_eq!(wide.row(0), &[6, 6, 6, 6, 6]);

        let mut tall = Grid::new(1, 5);
        tall.fill(3);
        tall.fill_border(7);
        assert!((0..5).all(|r| tall[(r, 0)] == 7));
    }

    #[test]
    fn max_handles_negatives_and_single_cells() {
        let mut grid = Grid::new(2, 2);
        grid[(0, 0)] = -5;
        grid[(0, 1)] = -9;
        grid[(1, 0)] = -3;
        grid[(1, 1)] = -7;
        assert_eq!(grid.max(), -3);

        let mut single = Grid::new(1, 1);
        single[(0, 0)] = 42;
        assert_eq!(single.max(), 42);

        let mut corner = Grid::new(3, 3);
        corner.fill(1);
        corner[(0, 2)] = 99;
        assert_eq!(corner.max(), 99);
    }

    #[test]
    fn argmin_prefers_lowest_column() {
        let grid = scan_fixture();
        assert_eq!(grid.argmin_in_row(0, 0, 6), 5);
        assert_eq!(grid.argmin_in_row(1, 0, 6), 3);
        assert_eq!(grid.argmin_in_row(0, 1, 4), 1);
        assert_eq!(grid.argmin_in_row(0, 3, 4), 3);
        assert_eq!(grid.argmin_in_row(2, 0, 6), 0);
        assert_eq!(grid.argmin_in_row(2, 2, 5), 2);
    }

    #[test]
    fn min_in_row_matches_argmin() {
        let grid = scan_fixture();
        assert_eq!(grid.min_in_row(0, 0, 6), 1);
        assert_eq!(grid.min_in_row(1, 0, 6), -9);
        assert_eq!(grid.min_in_row(0, 1, 4), 2);
        assert_eq!(grid.min_in_row(0, 3, 4), 2);
        assert_eq!(grid.min_in_row(2, 0, 6), 3);
        assert_eq!(grid.min_in_row(2, 2, 5), 3);
    }

    #[test]
    fn display_dumps_dimensions_then_rows() {
        let mut grid = Grid::new(3, 2);
        for (i, v) in (1..=6).enumerate() {
            grid[(i as u32 / 3, i as u32 % 3)] = v;
        }
        assert_eq!(grid.to_string(), "3 2 \n1 2 3 \n4 5 6 \n");
    }
}
