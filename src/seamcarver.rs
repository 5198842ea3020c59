// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - The main function
//!
//! The main seamcarver routine, with helpers for the width and height
//! operations.  Only vertical seams are ever found: to take rows out,
//! the image is turned on its side, narrowed, and turned back.

use crate::error::{Error, Result};
use crate::raster::RasterImage;
use crate::seam::{BackwardEnergy, SeamFinder};
use log::{debug, trace};

/// Build a new image one column narrower, with the pixel at
/// `seam[row]` dropped from each row.  Everything else keeps its
/// left-to-right order.
pub fn remove_vertical_seam(image: &RasterImage, seam: &[u32]) -> RasterImage {
    let (width, height) = (image.width(), image.height());
    assert!(width >= 2, "cannot remove a seam from an image {} wide", width);
    assert_eq!(
        seam.len(),
        height as usize,
        "seam length does not match image height"
    );

    let mut resized = RasterImage::new(width - 1, height);
    for (row, &skip) in (0..height).zip(seam) {
        assert!(skip < width, "seam column {} outside width {}", skip, width);
        for (new_col, col) in (0..width).filter(|&c| c != skip).enumerate() {
            resized.set_pixel(row, new_col as u32, image.get_pixel(row, col));
        }
    }
    resized
}

/// A carver, parameterized by how it chooses its seams.
#[derive(Debug, Default, Clone)]
pub struct SeamCarver<F: SeamFinder = BackwardEnergy> {
    finder: F,
}

impl SeamCarver<BackwardEnergy> {
    /// A carver using the classic backward-energy seams.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<F: SeamFinder> SeamCarver<F> {
    pub fn with_finder(finder: F) -> Self {
        SeamCarver { finder }
    }

    // This is absurdly inefficient, as the entire energy map and cost
    // map are recalculated for every seam.

    /// Narrow `image` to `new_width` columns, one seam at a time.
    ///
    /// # Panics
    ///
    /// If `new_width` is zero or wider than the image.
    pub fn carve_width(&self, image: &mut RasterImage, new_width: u32) {
        assert!(
            new_width > 0 && new_width <= image.width(),
            "cannot carve an image {} wide to {}",
            image.width(),
            new_width
        );
        while image.width() > new_width {
            let seam = self.finder.find_vertical_seam(image);
            debug!(
                "removing seam from {}x{} image, bottom at column {}",
                image.width(),
                image.height(),
                seam[seam.len() - 1]
            );
            trace!("seam: {:?}", seam);
            *image = remove_vertical_seam(image, &seam);
        }
    }

    /// Shorten `image` to `new_height` rows: rotate left, narrow,
    /// rotate back.
    ///
    /// # Panics
    ///
    /// If `new_height` is zero or taller than the image.
    pub fn carve_height(&self, image: &mut RasterImage, new_height: u32) {
        let mut rotated = image.rotate_left();
        self.carve_width(&mut rotated, new_height);
        *image = rotated.rotate_right();
    }

    /// Given an image and a desired new width and height, carve the
    /// width all the way down first, then the height.
    pub fn carve(&self, image: &mut RasterImage, new_width: u32, new_height: u32) -> Result<()> {
        let (width, height) = (image.width(), image.height());
        if new_width == 0 || new_height == 0 || new_width > width || new_height > height {
            return Err(Error::InvalidDimensions {
                width,
                height,
                new_width,
                new_height,
            });
        }
        self.carve_width(image, new_width);
        self.carve_height(image, new_height);
        Ok(())
    }
}

/// Carve `image` down to `new_width` x `new_height` with the default
/// carver.
pub fn seamcarve(image: &mut RasterImage, new_width: u32, new_height: u32) -> Result<()> {
    SeamCarver::new().carve(image, new_width, new_height)
}
