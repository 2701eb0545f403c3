// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Cumulative energy maps
//!
//! Each cell of a cumulative map holds the cheapest total energy of
//! any path from the starting edge to that cell, one step per row
//! (vertical) or per column (horizontal), moving at most one pixel
//! sideways per step.  Only the costs are recorded; the seam finder
//! works out the parents again on the way back.

use crate::error::{Result, SeamError};
use crate::flipper::Flipper;
use crate::twodmap::{parents, GridView, TwoDimensionalMap};

// Runs top to bottom in whatever view it's given.
fn accumulate<V>(energy: &V) -> Result<TwoDimensionalMap<u64>>
where
    V: GridView<Cell = u32>,
{
    let (width, height) = energy.dimensions();
    if energy.is_degenerate() {
        return Err(SeamError::DegenerateGrid { width, height });
    }

    let mut target = TwoDimensionalMap::new(width, height);

    // Populate the first row with their native energies.
    for x in 0..width {
        target[(x, 0)] = u64::from(energy.get(x, 0));
    }

    let maxwidth = width - 1;
    // For every subsequent row, populate the target cell with the sum
    // of its own energy and the *lowest adjacent upper* cumulative
    // energy.  There is always at least one candidate.
    for y in 1..height {
        for x in 0..width {
            let parent = parents(x, maxwidth)
                .map(|px| target[(px, y - 1)])
                .fold(u64::MAX, u64::min);
            target[(x, y)] = u64::from(energy.get(x, y)) + parent;
        }
    }
    Ok(target)
}

/// Cumulative energy for top-to-bottom seams: row 0 is the energy
/// itself, every later row adds the cheapest of the two or three
/// cells above.
pub fn vertical_cumulative_energy(
    energy: &TwoDimensionalMap<u32>,
) -> Result<TwoDimensionalMap<u64>> {
    accumulate(energy)
}

/// Cumulative energy for left-to-right seams: column 0 is the energy
/// itself, every later column adds the cheapest of the two or three
/// cells to the left.  The result is in the same orientation as the
/// energy map.
pub fn horizontal_cumulative_energy(
    energy: &TwoDimensionalMap<u32>,
) -> Result<TwoDimensionalMap<u64>> {
    accumulate(&Flipper::new(energy)).map(|flipped| flipped.transpose())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENERGY: [u32; 20] = [
        0, 17, 27, 10, 0, 8, 32, 18, 4, 10, 0, 8, 0, 19, 27, 0, 0, 9, 27, 18,
    ];
    const VERTICAL: [u64; 20] = [
        0, 17, 27, 10, 0, 8, 32, 28, 4, 10, 8, 16, 4, 23, 31, 8, 4, 13, 31, 41,
    ];
    const HORIZONTAL: [u64; 20] = [
        0, 17, 44, 36, 4, 8, 32, 26, 4, 14, 0, 8, 0, 19, 31, 0, 0, 9, 27, 37,
    ];

    fn energy() -> TwoDimensionalMap<u32> {
        TwoDimensionalMap::from_vec(5, 4, ENERGY.to_vec()).unwrap()
    }

    #[test]
    fn vertical_accumulation() {
        let cumulative = vertical_cumulative_energy(&energy()).unwrap();
        assert_eq!(cumulative.dimensions(), (5, 4));
        assert_eq!(cumulative.as_slice(), &VERTICAL[..]);
    }

    #[test]
    fn horizontal_accumulation() {
        let cumulative = horizontal_cumulative_energy(&energy()).unwrap();
        assert_eq!(cumulative.dimensions(), (5, 4));
        assert_eq!(cumulative.as_slice(), &HORIZONTAL[..]);
    }

    #[test]
    fn the_starting_edge_is_the_energy() {
        let energy = energy();
        let vertical = vertical_cumulative_energy(&energy).unwrap();
        let horizontal = horizontal_cumulative_energy(&energy).unwrap();
        for x in 0..energy.width() {
            assert_eq!(vertical[(x, 0)], u64::from(energy[(x, 0)]));
        }
        for y in 0..energy.height() {
            assert_eq!(horizontal[(0, y)], u64::from(energy[(0, y)]));
        }
    }

    #[test]
    fn single_column_sums_straight_down() {
        let column = TwoDimensionalMap::from_rows(&[[3u32], [4], [5]]).unwrap();
        assert_eq!(vertical_cumulative_energy(&column).unwrap().as_slice(), &[3, 7, 12]);
        assert_eq!(horizontal_cumulative_energy(&column).unwrap().as_slice(), &[3, 4, 5]);
    }

    #[test]
    fn degenerate_maps_are_refused() {
        let empty = TwoDimensionalMap::<u32>::new(0, 0);
        assert!(vertical_cumulative_energy(&empty).is_err());
        assert!(horizontal_cumulative_energy(&empty).is_err());
    }
}
