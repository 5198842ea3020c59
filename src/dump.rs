// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Energy map visualisation
//!
//! Turns an energy grid into a grayscale image, brightest where the
//! energy is highest, so you can see what the carver is avoiding.

use crate::energy::EnergyGrid;
use image::{GrayImage, ImageBuffer, Luma, Pixel};
use itertools::iproduct;
use num_traits::{cast, clamp};

/// Scale the energies linearly so the largest becomes 255.  A grid
/// with no energy at all comes out black.
pub fn energy_to_image(energy: &EnergyGrid) -> GrayImage {
    let (width, height) = (energy.width(), energy.height());
    let mut out: GrayImage = ImageBuffer::new(width, height);
    let factor = i64::from(energy.max());
    if factor <= 0 {
        return out;
    }

    for (y, x) in iproduct!(0..height, 0..width) {
        let scaled = i64::from(energy[(y, x)]) * 255 / factor;
        let level = cast::<i64, u8>(clamp(scaled, 0, 255)).unwrap_or(0);
        out.put_pixel(x, y, *Luma::from_slice(&[level]));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;

    #[test]
    fn brightest_at_max_energy() {
        let mut energy = Grid::new(3, 2);
        energy[(0, 0)] = 10;
        energy[(1, 2)] = 5;
        let img = energy_to_image(&energy);
        assert_eq!(img.dimensions(), (3, 2));
        assert_eq!(img.get_pixel(0, 0).channels(), &[255]);
        assert_eq!(img.get_pixel(2, 1).channels(), &[127]);
        assert_eq!(img.get_pixel(1, 0).channels(), &[0]);
    }

    #[test]
    fn large_energies_scale_without_overflow() {
        let mut energy = Grid::new(2, 1);
        energy[(0, 0)] = i32::max_value();
        energy[(0, 1)] = i32::max_value() / 2;
        let img = energy_to_image(&energy);
        assert_eq!(img.get_pixel(0, 0).channels(), &[255]);
        assert_eq!(img.get_pixel(1, 0).channels(), &[127]);
    }

    #[test]
    fn no_energy_is_black() {
        let energy = Grid::new(4, 4);
        let img = energy_to_image(&energy);
        assert!(img.pixels().all(|p| p.channels() == &[0]));
    }
}
