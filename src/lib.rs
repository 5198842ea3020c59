// #![deny(missing_docs)]

//! Seam carving for plain-text PPM images.
//!
//! Shrinks an image by repeatedly cutting out the connected
//! top-to-bottom path of pixels that carries the least visual
//! information, rather than scaling or cropping.

pub mod grid;
pub use grid::Grid;

pub mod error;
pub use error::{Error, Result};

pub mod raster;
pub use raster::{Pixel, RasterImage};

pub mod energy;
pub use energy::{compute_energy, EnergyGrid};

pub mod cost;
pub use cost::{compute_vertical_cost, CostGrid};

pub mod seam;
pub use seam::{find_minimal_vertical_seam, BackwardEnergy, SeamFinder};

pub mod seamcarver;
pub use seamcarver::{remove_vertical_seam, seamcarve, SeamCarver};

pub mod dump;
pub use dump::energy_to_image;
