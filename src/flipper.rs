// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Map dimensional flipper
//!
//! A utility proxy for the GridView trait that maps the width to the
//! original height, and vice versa, as well as every x to y and vice
//! versa.
//!
//! A horizontal seam through a map is a vertical seam through the
//! same map turned on its side, and the tie-breaking rules line up:
//! "lowest row" in the original is "lowest column" in the flipped
//! view.  So the horizontal builder and finder are the vertical ones
//! run through a Flipper, and nothing is copied to do it.

use crate::twodmap::GridView;

/// A transposed, read-only view of another map.
pub struct Flipper<'a, V: GridView> {
    /// The map being viewed.
    pub image: &'a V,
}

impl<'a, V: GridView> Flipper<'a, V> {
    /// Turn `image` on its side.
    pub fn new(image: &'a V) -> Self {
        Flipper { image }
    }
}

impl<'a, V: GridView> GridView for Flipper<'a, V> {
    type Cell = V::Cell;

    fn width(&self) -> u32 {
        self.image.height()
    }

    fn height(&self) -> u32 {
        self.image.width()
    }

    fn get(&self, x: u32, y: u32) -> V::Cell {
        self.image.get(y, x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::twodmap::TwoDimensionalMap;

    #[test]
    fn flipper_swaps_addresses() {
        let map = TwoDimensionalMap::from_rows(&[[1u32, 2, 3], [4, 5, 6]]).unwrap();
        let flipped = Flipper::new(&map);
        assert_eq!(flipped.dimensions(), (2, 3));
        assert_eq!(flipped.get(1, 0), 4);
        assert_eq!(flipped.get(0, 2), 3);
        assert_eq!(flipped.get(1, 2), 6);
    }
}
