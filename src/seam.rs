// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Finding the seam
//!
//! A seam is a list of column numbers, one per row, top row first.
//! Adjacent rows never differ by more than one column.

use crate::cost::{compute_vertical_cost, predecessors, CostGrid};
use crate::energy::compute_energy;
use crate::raster::RasterImage;

/// This trait defines how we get seams out of an image.  It's a
/// primitive interface, just enough to make room for more than one
/// way of choosing what to cut.  Horizontal seams are found by
/// rotating the image, so only vertical seams are asked for.
pub trait SeamFinder {
    /// The column to remove from each row, top to bottom.
    fn find_vertical_seam(&self, image: &RasterImage) -> Vec<u32>;
}

/// Given a cost grid, return the list of columns that, when mapped
/// with the range (0..height), give the coordinates of each pixel in
/// the cheapest seam.
///
/// Works from the bottom up: start at the cheapest cell of the bottom
/// row, then in each row above pick the cheapest of the cells that
/// touch the previous pick.  Ties always go to the leftmost cell.  The
/// cost grid already holds the true minimum for every cell, so this
/// greedy walk back up lands on a minimal seam.
pub fn find_minimal_vertical_seam(cost: &CostGrid) -> Vec<u32> {
    let (width, height) = (cost.width(), cost.height());
    let mut seam = vec![0; height as usize];

    let mut col = cost.argmin_in_row(height - 1, 0, width);
    seam[height as usize - 1] = col;
    for row in (0..height - 1).rev() {
        let (start, end) = predecessors(col, width);
        col = cost.argmin_in_row(row, start, end);
        seam[row as usize] = col;
    }
    seam
}

/// The classic backward-energy seam: gradient energy, accumulated top
/// to bottom, cheapest path traced back up.
#[derive(Debug, Default, Copy, Clone)]
pub struct BackwardEnergy;

impl SeamFinder for BackwardEnergy {
    fn find_vertical_seam(&self, image: &RasterImage) -> Vec<u32> {
        let energy = compute_energy(image);
        let cost = compute_vertical_cost(&energy);
        find_minimal_vertical_seam(&cost)
    }
}
