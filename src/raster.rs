// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The image being carved
//!
//! A colour raster held as three [`Grid`]s, one per channel, plus the
//! plain-text PPM (`P3`) reader and writer.  Shrinking never happens
//! in place: the carver builds a new, smaller image and replaces the
//! old one wholesale.

use crate::error::{Error, Result};
use crate::grid::Grid;
use image::{Pixel as _, Rgb, RgbImage};
use itertools::iproduct;
use std::fmt;
use std::io::{Read, Write};
use std::str::FromStr;

const MAX_SAMPLE: i32 = 255;

/// One colour.  Channels are nominally 0-255, but nothing here
/// enforces that.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Pixel {
    pub r: i32,
    pub g: i32,
    pub b: i32,
}

impl Pixel {
    pub const BLACK: Pixel = Pixel { r: 0, g: 0, b: 0 };

    pub fn new(r: i32, g: i32, b: i32) -> Self {
        Pixel { r, g, b }
    }
}

/// A width x height colour image.  The three channel grids always
/// share the image's dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    red: Grid<i32>,
    green: Grid<i32>,
    blue: Grid<i32>,
}

impl RasterImage {
    /// A new, all-black image.
    pub fn new(width: u32, height: u32) -> Self {
        RasterImage {
            width,
            height,
            red: Grid::new(width, height),
            green: Grid::new(width, height),
            blue: Grid::new(width, height),
        }
    }

    /// Read a complete `P3` image from `reader`.
    pub fn read<R: Read>(mut reader: R) -> Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        text.parse()
    }

    /// Write the image as `P3` text.
    pub fn write<W: Write>(&self, mut writer: W) -> Result<()> {
        write!(writer, "{}", self)?;
        writer.flush()?;
        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn get_pixel(&self, row: u32, col: u32) -> Pixel {
        Pixel {
            r: self.red[(row, col)],
            g: self.green[(row, col)],
            b: self.blue[(row, col)],
        }
    }

    pub fn set_pixel(&mut self, row: u32, col: u32, pixel: Pixel) {
        self.red[(row, col)] = pixel.r;
        self.green[(row, col)] = pixel.g;
        self.blue[(row, col)] = pixel.b;
    }

    /// Paint the whole image one colour.
    pub fn fill(&mut self, pixel: Pixel) {
        self.red.fill(pixel.r);
        self.green.fill(pixel.g);
        self.blue.fill(pixel.b);
    }

    /// Rotate 90° counter-clockwise.  The top-right corner becomes the
    /// top-left.
    pub fn rotate_left(&self) -> RasterImage {
        let mut aux = RasterImage::new(self.height, self.width);
        for (r, c) in iproduct!(0..self.height, 0..self.width) {
            aux.set_pixel(self.width - 1 - c, r, self.get_pixel(r, c));
        }
        aux
    }

    /// Rotate 90° clockwise; undoes [`RasterImage::rotate_left`].
    pub fn rotate_right(&self) -> RasterImage {
        let mut aux = RasterImage::new(self.height, self.width);
        for (r, c) in iproduct!(0..self.height, 0..self.width) {
            aux.set_pixel(c, self.height - 1 - r, self.get_pixel(r, c));
        }
        aux
    }
}

// Header: the magic number, the dimensions, and the maximum sample
// value, in that order.  Whitespace of any kind separates tokens.
fn header_value<'a, I>(tokens: &mut I, what: &str) -> Result<u32>
where
    I: Iterator<Item = &'a str>,
{
    let token = tokens
        .next()
        .ok_or_else(|| Error::BadHeader(format!("missing {}", what)))?;
    match token.parse::<u32>() {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(Error::BadHeader(format!("bad {} {:?}", what, token))),
    }
}

impl FromStr for RasterImage {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        let mut tokens = text.split_whitespace();

        let magic = tokens.next().unwrap_or("");
        if magic != "P3" {
            return Err(Error::BadMagic(magic.to_string()));
        }
        let width = header_value(&mut tokens, "width")?;
        let height = header_value(&mut tokens, "height")?;
        let maxval = header_value(&mut tokens, "maximum value")?;
        if maxval != MAX_SAMPLE as u32 {
            return Err(Error::BadHeader(format!(
                "maximum value must be {}, found {}",
                MAX_SAMPLE, maxval
            )));
        }

        let expected = width as usize * height as usize * 3;
        let samples = tokens
            .take(expected)
            .map(|t| match t.parse::<i32>() {
                Ok(v) if v >= 0 && v <= MAX_SAMPLE => Ok(v),
                _ => Err(Error::BadSample(t.to_string())),
            })
            .collect::<Result<Vec<i32>>>()?;
        if samples.len() < expected {
            return Err(Error::MissingPixelData {
                expected,
                found: samples.len(),
            });
        }

        let mut image = RasterImage::new(width, height);
        for ((r, c), rgb) in iproduct!(0..height, 0..width).zip(samples.chunks(3)) {
            image.set_pixel(r, c, Pixel::new(rgb[0], rgb[1], rgb[2]));
        }
        Ok(image)
    }
}

/// `P3` text, one image row per line, every sample followed by a
/// space.
impl fmt::Display for RasterImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "P3")?;
        writeln!(f, "{} {}", self.width, self.height)?;
        writeln!(f, "{}", MAX_SAMPLE)?;
        for row in 0..self.height {
            for col in 0..self.width {
                let p = self.get_pixel(row, col);
                write!(f, "{} {} {} ", p.r, p.g, p.b)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn to_sample(channel: i32) -> u8 {
    num_traits::clamp(channel, 0, MAX_SAMPLE) as u8
}

/// Hand the image to the `image` ecosystem.  Out-of-range channels
/// are clamped.
impl From<&RasterImage> for RgbImage {
    fn from(raster: &RasterImage) -> Self {
        RgbImage::from_fn(raster.width, raster.height, |x, y| {
            let p = raster.get_pixel(y, x);
            *Rgb::from_slice(&[to_sample(p.r), to_sample(p.g), to_sample(p.b)])
        })
    }
}

impl From<&RgbImage> for RasterImage {
    fn from(buffer: &RgbImage) -> Self {
        let (width, height) = buffer.dimensions();
        let mut raster = RasterImage::new(width, height);
        for (x, y, pixel) in buffer.enumerate_pixels() {
            let c = pixel.channels();
            raster.set_pixel(y, x, Pixel::new(c[0].into(), c[1].into(), c[2].into()));
        }
        raster
    }
}
