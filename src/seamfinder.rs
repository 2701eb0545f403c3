// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seams, and how to find them
//!
//! Given a cumulative energy map, walk back from the cheapest cell on
//! the far edge to the near edge, at every step moving to the
//! cheapest of the (at most three) cells the path could have come
//! from.  Ties always go to the lowest index: the first minimum seen
//! when the candidates are scanned in ascending order.

use crate::error::{Result, SeamError};
use crate::flipper::Flipper;
use crate::twodmap::{parents, GridView, TwoDimensionalMap};
use std::fmt;
use std::ops::RangeInclusive;

/// Which way a seam runs through the image.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Top to bottom, one pixel per row.  Removing it narrows the image.
    Vertical,
    /// Left to right, one pixel per column.  Removing it shortens the image.
    Horizontal,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Orientation::Vertical => write!(f, "vertical"),
            Orientation::Horizontal => write!(f, "horizontal"),
        }
    }
}

/// A connected path across the image.  For a vertical seam `path[y]`
/// is the column removed from row `y`; for a horizontal seam
/// `path[x]` is the row removed from column `x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seam {
    orientation: Orientation,
    path: Vec<u32>,
    cost: u64,
}

impl Seam {
    /// A vertical seam from a list of columns, top row first.
    pub fn vertical(path: Vec<u32>) -> Self {
        Seam {
            orientation: Orientation::Vertical,
            path,
            cost: 0,
        }
    }

    /// A horizontal seam from a list of rows, left column first.
    pub fn horizontal(path: Vec<u32>) -> Self {
        Seam {
            orientation: Orientation::Horizontal,
            path,
            cost: 0,
        }
    }

    /// Which way the seam runs.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The perpendicular index at each step along the seam.
    pub fn path(&self) -> &[u32] {
        &self.path
    }

    /// Total energy of the seam, as read from the cumulative map.
    /// Zero for hand-built seams.
    pub fn cost(&self) -> u64 {
        self.cost
    }

    /// Number of pixels in the seam.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// True for the seam of a degenerate image.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Every pixel on the seam as `(row, column)`.
    pub fn coordinates(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let orientation = self.orientation;
        self.path.iter().enumerate().map(move |(i, &p)| match orientation {
            Orientation::Vertical => (i as u32, p),
            Orientation::Horizontal => (p, i as u32),
        })
    }
}

/// This trait defines how we will return seams from an image.  It's a
/// primitive interface, just enough to make room for multiple seam
/// finders.
pub trait SeamFinder {
    /// Request the cheapest left-to-right seam.
    fn find_horizontal_seam(&self) -> Result<Seam>;

    /// Request the cheapest top-to-bottom seam.
    fn find_vertical_seam(&self) -> Result<Seam>;
}

// Iterator::min_by_key returns the first of several equal minima,
// which is exactly the tie-break we want.
fn cheapest<V>(cumulative: &V, candidates: RangeInclusive<u32>, y: u32) -> Option<u32>
where
    V: GridView<Cell = u64>,
{
    candidates.min_by_key(|&x| cumulative.get(x, y))
}

// Runs top to bottom in whatever view it's given; the horizontal
// search hands it a Flipper.
fn backtrack<V>(cumulative: &V) -> Result<(Vec<u32>, u64)>
where
    V: GridView<Cell = u64>,
{
    let (width, height) = cumulative.dimensions();
    let degenerate = || SeamError::DegenerateGrid { width, height };
    if cumulative.is_degenerate() {
        return Err(degenerate());
    }

    let (maxwidth, bottom) = (width - 1, height - 1);
    let mut seam_col = cheapest(cumulative, 0..=maxwidth, bottom).ok_or_else(degenerate)?;
    let cost = cumulative.get(seam_col, bottom);

    let mut path = vec![0; height as usize];
    path[bottom as usize] = seam_col;
    for y in (0..bottom).rev() {
        seam_col = cheapest(cumulative, parents(seam_col, maxwidth), y).ok_or_else(degenerate)?;
        path[y as usize] = seam_col;
    }
    Ok((path, cost))
}

/// Given a vertical cumulative energy map, return the cheapest
/// top-to-bottom seam.
pub fn vertical_seam(cumulative: &TwoDimensionalMap<u64>) -> Result<Seam> {
    let (path, cost) = backtrack(cumulative)?;
    Ok(Seam {
        orientation: Orientation::Vertical,
        path,
        cost,
    })
}

/// Given a horizontal cumulative energy map, return the cheapest
/// left-to-right seam.
pub fn horizontal_seam(cumulative: &TwoDimensionalMap<u64>) -> Result<Seam> {
    let (path, cost) = backtrack(&Flipper::new(cumulative))?;
    Ok(Seam {
        orientation: Orientation::Horizontal,
        path,
        cost,
    })
}
