// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors that can reach a user.
//!
//! Only problems with the outside world live here: unreadable files,
//! broken image text, impossible resize targets.  Misusing the
//! algorithm itself (a seam of the wrong length, an out-of-range
//! coordinate) is a bug in the caller and panics instead.

use failure::Fail;
use std::io;

#[derive(Debug, Fail)]
pub enum Error {
    #[fail(display = "I/O error: {}", _0)]
    Io(#[cause] io::Error),

    #[fail(display = "not a plain-text PPM image: expected P3, found {:?}", _0)]
    BadMagic(String),

    #[fail(display = "malformed image header: {}", _0)]
    BadHeader(String),

    #[fail(display = "malformed pixel value {:?}", _0)]
    BadSample(String),

    #[fail(
        display = "insufficient pixel data: expected {} values, found {}",
        expected, found
    )]
    MissingPixelData { expected: usize, found: usize },

    #[fail(
        display = "cannot carve a {}x{} image to {}x{}",
        width, height, new_width, new_height
    )]
    InvalidDimensions {
        width: u32,
        height: u32,
        new_width: u32,
        new_height: u32,
    },
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
