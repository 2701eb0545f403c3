// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Everything that can go wrong while reading, carving, or writing
//! a graymap.

use crate::seamfinder::Orientation;
use failure::Fail;
use std::io;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SeamError>;

/// The crate-level error.
#[derive(Debug, Fail)]
pub enum SeamError {
    /// The number of cells supplied doesn't match the declared shape.
    #[fail(
        display = "expected an image of size {}, but got {} values",
        expected, actual
    )]
    DimensionMismatch { expected: usize, actual: usize },

    /// A map was built from rows of unequal length.
    #[fail(
        display = "row {} has {} values, but the first row has {}",
        row, actual, expected
    )]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// An intensity is larger than the image's declared maximum.
    #[fail(display = "got value of {}, but max value is {}", value, max)]
    ValueOutOfRange { value: u64, max: u32 },

    /// A seam was requested from a map with an empty axis.
    #[fail(display = "cannot find a seam in a {}x{} image", width, height)]
    DegenerateGrid { width: u32, height: u32 },

    /// Carving would shrink an axis to nothing.
    #[fail(
        display = "cannot remove {} {} seams: at most {} can be removed",
        requested, orientation, limit
    )]
    OverReduction {
        orientation: Orientation,
        requested: u32,
        limit: u32,
    },

    /// A seam doesn't fit the map it's being removed from.
    #[fail(display = "seam does not fit the image: {}", reason)]
    InvalidSeam { reason: String },

    /// The input isn't a plain-text graymap.
    #[fail(display = "incorrect file format: {}", reason)]
    BadFormat { reason: String },

    /// Reading or writing a file failed.
    #[fail(display = "I/O error: {}", _0)]
    Io(#[cause] io::Error),

    /// The image encoder refused the energy map.
    #[fail(display = "could not write image: {}", reason)]
    Image { reason: String },
}

impl From<io::Error> for SeamError {
    fn from(err: io::Error) -> Self {
        SeamError::Io(err)
    }
}

impl From<image::ImageError> for SeamError {
    fn from(err: image::ImageError) -> Self {
        SeamError::Image {
            reason: err.to_string(),
        }
    }
}
