// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! The energy of a pixel is how much its neighbours disagree with
//! each other: the colour distance between the pixels to its left and
//! right, plus the distance between the pixels above and below.  This
//! is the basic gradient energy of [Avidan & Shamir (2007)], with no
//! forward-energy term.
//!
//! Pixels on the edge of the image don't have a full set of
//! neighbours, so they don't get a gradient.  Instead the whole border
//! is set to the highest interior energy, which makes it uniformly
//! unattractive to the seam finder.

use crate::grid::Grid;
use crate::raster::{Pixel, RasterImage};
use itertools::iproduct;

/// The per-pixel energy of an image; same dimensions as the image.
pub type EnergyGrid = Grid<i32>;

// Takes the channels (R,G,B) from two pixels, squares the difference
// of each, and sums them:
//
//        |Δ|² = (Δr)²+(Δg)²+(Δb)²
//
// The divide by 100 keeps the cumulative costs well inside an i32
// for any image we expect to see.
pub(crate) fn squared_difference(p1: Pixel, p2: Pixel) -> i32 {
    let (dr, dg, db) = (p2.r - p1.r, p2.g - p1.g, p2.b - p1.b);
    (dr * dr + dg * dg + db * db) / 100
}

/// Compute the energy of every pixel in an image.
pub fn compute_energy(image: &RasterImage) -> EnergyGrid {
    let (width, height) = (image.width(), image.height());
    let mut energy = Grid::new(width, height);

    let mut max_energy = 0i32;
    // Both ranges are empty when the image has no interior.
    for (row, col) in iproduct!(1..height.saturating_sub(1), 1..width.saturating_sub(1)) {
        let (left, right) = (image.get_pixel(row, col - 1), image.get_pixel(row, col + 1));
        let (up, down) = (image.get_pixel(row - 1, col), image.get_pixel(row + 1, col));
        let e = squared_difference(left, right) + squared_difference(up, down);
        energy[(row, col)] = e;
        max_energy = max_energy.max(e);
    }

    energy.fill_border(max_energy);
    energy
}
