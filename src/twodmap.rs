// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The two-dimensional map
//!
//! Every stage of the carver works on the same container: a
//! rectangular, row-major field of cells.  The image is a map of
//! intensities, the energy is a map of `u32`, the cumulative energy is
//! a map of `u64`.  Rectangularity is enforced at construction; none
//! of the operations here can produce a ragged map.

use crate::cq;
use crate::error::{Result, SeamError};
use std::fmt;
use std::ops::{Index, IndexMut, RangeInclusive};

/// Read-only access to anything shaped like a map.  The carving
/// algorithms are written against this trait so that the horizontal
/// variants can run the vertical code over a transposed view.
pub trait GridView {
    /// The cell type.
    type Cell: Copy;

    /// Number of columns.
    fn width(&self) -> u32;

    /// Number of rows.
    fn height(&self) -> u32;

    /// The value at column `x`, row `y`.
    fn get(&self, x: u32, y: u32) -> Self::Cell;

    /// `(width, height)`, as image.rs orders them.
    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    /// True if either axis is empty.  No seam exists in such a map.
    fn is_degenerate(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }
}

/// An addressable two-dimensional field.  The content type must
/// implement Default so that fresh maps can be allocated before
/// they're filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwoDimensionalMap<P: Default + Copy> {
    width: u32,
    height: u32,
    cells: Vec<P>,
}

impl<P: Default + Copy> TwoDimensionalMap<P> {
    /// Define a new map, every cell holding `P::default()`.
    pub fn new(width: u32, height: u32) -> Self {
        TwoDimensionalMap {
            width,
            height,
            cells: vec![P::default(); width as usize * height as usize],
        }
    }

    /// Wrap an existing row-major buffer.  The buffer must hold
    /// exactly `width * height` cells.
    pub fn from_vec(width: u32, height: u32, cells: Vec<P>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if cells.len() != expected {
            return Err(SeamError::DimensionMismatch {
                expected,
                actual: cells.len(),
            });
        }
        Ok(TwoDimensionalMap {
            width,
            height,
            cells,
        })
    }

    /// Build a map from a list of rows, refusing rows of unequal
    /// length.  No rows at all is a legal, if useless, 0x0 map.
    pub fn from_rows<R: AsRef<[P]>>(rows: &[R]) -> Result<Self> {
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let mut cells = Vec::with_capacity(width * rows.len());
        for (row, r) in rows.iter().enumerate() {
            let r = r.as_ref();
            if r.len() != width {
                return Err(SeamError::RaggedRows {
                    row,
                    expected: width,
                    actual: r.len(),
                });
            }
            cells.extend_from_slice(r);
        }
        Ok(TwoDimensionalMap {
            width: width as u32,
            height: rows.len() as u32,
            cells,
        })
    }

    // Absolutely, the number one name of this game is keep the index
    // math in a singular location and never, ever mess with it.  This
    // particular variant is the same one used in image.rs.
    fn get_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// True if either axis is empty.
    pub fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Get the value at a single cell's address
    pub fn get(&self, x: u32, y: u32) -> P {
        self.cells[self.get_index(x, y)]
    }

    /// Row `y` as a slice.
    pub fn row(&self, y: u32) -> &[P] {
        let start = self.get_index(0, y);
        &self.cells[start..start + self.width as usize]
    }

    /// Every row, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[P]> + '_ {
        // chunks() refuses a zero size, and a zero-width map has no
        // cells anyway.
        let width = (self.width as usize).max(1);
        self.cells.chunks(width)
    }

    /// Column `x`, top to bottom, copied out.
    pub fn column(&self, x: u32) -> Vec<P> {
        (0..self.height).map(|y| self.get(x, y)).collect()
    }

    /// The raw row-major buffer.
    pub fn as_slice(&self) -> &[P] {
        &self.cells
    }

    /// Surrender the raw row-major buffer.
    pub fn into_vec(self) -> Vec<P> {
        self.cells
    }

    /// Build a new map of the same shape by transforming every cell.
    pub fn map<Q, F>(&self, f: F) -> TwoDimensionalMap<Q>
    where
        Q: Default + Copy,
        F: FnMut(P) -> Q,
    {
        TwoDimensionalMap {
            width: self.width,
            height: self.height,
            cells: self.cells.iter().copied().map(f).collect(),
        }
    }

    /// Swap rows for columns.
    pub fn transpose(&self) -> Self {
        let mut cells = Vec::with_capacity(self.cells.len());
        for x in 0..self.width {
            for y in 0..self.height {
                cells.push(self.get(x, y));
            }
        }
        TwoDimensionalMap {
            width: self.height,
            height: self.width,
            cells,
        }
    }
}

impl<P: Default + Copy> GridView for TwoDimensionalMap<P> {
    type Cell = P;

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn get(&self, x: u32, y: u32) -> P {
        self.cells[self.get_index(x, y)]
    }
}

impl<P: Default + Copy> Index<(u32, u32)> for TwoDimensionalMap<P> {
    type Output = P;

    /// A convenience addressing mode for getting values.
    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.get_index(x, y);
        &self.cells[index]
    }
}

impl<P: Default + Copy> IndexMut<(u32, u32)> for TwoDimensionalMap<P> {
    /// A convenience addressing mode for setting values.
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.cells[index]
    }
}

// One row per line, cells separated by a single space.  This is the
// layout of the matrix dumps in the trace log and of the PGM body.
impl<P: Default + Copy + fmt::Display> fmt::Display for TwoDimensionalMap<P> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_degenerate() {
            return Ok(());
        }
        for row in self.rows() {
            let mut cells = row.iter();
            if let Some(first) = cells.next() {
                write!(f, "{}", first)?;
            }
            for cell in cells {
                write!(f, " {}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// The columns in the row above that a path through column `x` could
/// have come from.  `max` is the last valid column.
pub(crate) fn parents(x: u32, max: u32) -> RangeInclusive<u32> {
    cq!(x == 0, 0, x - 1)..=cq!(x >= max, max, x + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parents_are_clipped_to_the_map() {
        assert_eq!(parents(0, 3), 0..=1);
        assert_eq!(parents(2, 3), 1..=3);
        assert_eq!(parents(3, 3), 2..=3);
        assert_eq!(parents(0, 0), 0..=0);
    }

    #[test]
    fn from_rows_builds_row_major() {
        let map = TwoDimensionalMap::from_rows(&[[1u16, 2, 3], [4, 5, 6]]).unwrap();
        assert_eq!(map.dimensions(), (3, 2));
        assert_eq!(map[(2, 0)], 3);
        assert_eq!(map[(0, 1)], 4);
        assert_eq!(map.as_slice(), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(map.column(1), vec![2, 5]);
    }

    #[test]
    fn ragged_rows_are_refused() {
        let rows: Vec<Vec<u16>> = vec![vec![1, 2, 3], vec![4, 5]];
        match TwoDimensionalMap::from_rows(&rows) {
            Err(SeamError::RaggedRows {
                row: 1,
                expected: 3,
                actual: 2,
            }) => (),
            other => panic!("expected a ragged row error, got {:?}", other),
        }
    }

    #[test]
    fn from_vec_checks_the_cell_count() {
        assert!(TwoDimensionalMap::from_vec(2, 2, vec![0u32; 4]).is_ok());
        match TwoDimensionalMap::from_vec(2, 2, vec![0u32; 5]) {
            Err(SeamError::DimensionMismatch {
                expected: 4,
                actual: 5,
            }) => (),
            other => panic!("expected a dimension mismatch, got {:?}", other),
        }
    }

    #[test]
    fn no_rows_is_a_degenerate_map() {
        let rows: Vec<Vec<u16>> = Vec::new();
        let map = TwoDimensionalMap::from_rows(&rows).unwrap();
        assert!(map.is_degenerate());
        assert_eq!(map.rows().count(), 0);
        assert_eq!(map.to_string(), "");
    }

    #[test]
    fn transpose_swaps_the_axes() {
        let map = TwoDimensionalMap::from_rows(&[[1u16, 2, 3], [4, 5, 6]]).unwrap();
        let flipped = map.transpose();
        assert_eq!(flipped.dimensions(), (2, 3));
        assert_eq!(flipped.as_slice(), &[1, 4, 2, 5, 3, 6]);
        assert_eq!(flipped.transpose(), map);
    }

    #[test]
    fn display_prints_one_row_per_line() {
        let map = TwoDimensionalMap::from_rows(&[[10u32, 0], [7, 255]]).unwrap();
        assert_eq!(map.to_string(), "10 0\n7 255\n");
    }
}
