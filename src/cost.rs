// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Cumulative seam cost
//!
//! Each cell of the cost grid holds the energy of the cheapest
//! top-to-bottom path ending at that cell.  The top row is the energy
//! itself; every cell below adds its own energy to the cheapest of the
//! (up to three) cells that touch it in the row above.  There is no
//! wraparound at the edges: the corner cells just have fewer
//! candidates.

use crate::energy::EnergyGrid;
use crate::grid::Grid;

/// The cumulative cost grid; same dimensions as the energy grid.
pub type CostGrid = Grid<i32>;

/// The span of columns in a row that can lead to `col` in the next,
/// as a half-open range clamped to the grid.
pub(crate) fn predecessors(col: u32, width: u32) -> (u32, u32) {
    (col.saturating_sub(1), (col + 2).min(width))
}

/// Given an energy map, compute the minimal cost of reaching every
/// cell along a vertical seam.
pub fn compute_vertical_cost(energy: &EnergyGrid) -> CostGrid {
    let (width, height) = (energy.width(), energy.height());
    let mut cost = Grid::new(width, height);

    // Populate the first row with their native energies.
    for col in 0..width {
        cost[(0, col)] = energy[(0, col)];
    }

    // For every subsequent row, add the cheapest adjacent cost from
    // the row above.
    for row in 1..height {
        for col in 0..width {
            let (start, end) = predecessors(col, width);
            let best = cost.min_in_row(row - 1, start, end);
            cost[(row, col)] = energy[(row, col)] + best;
        }
    }
    cost
}
