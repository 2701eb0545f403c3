// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! Given a map of intensities, calculate the energy map and either a
//! horizontal or vertical seam for that image.  The energy of a pixel
//! is the sum of the absolute differences between it and each of its
//! up, down, left and right neighbours, where they exist: corners sum
//! two terms, edges three, and everything else four.  There is no
//! normalization, and no forward energy.

use crate::cq;
use crate::energymap::{horizontal_cumulative_energy, vertical_cumulative_energy};
use crate::error::{Result, SeamError};
use crate::seamfinder::{horizontal_seam, vertical_seam, Seam, SeamFinder};
use crate::twodmap::{GridView, TwoDimensionalMap};
use itertools::iproduct;
use tracing::trace;

// (Pixel, Pixel) -> Energy
#[inline]
fn energy_of_pair(p1: u16, p2: u16) -> u32 {
    u32::from(p1.max(p2) - p1.min(p2))
}

// Image -> Energy Map

/// Compute the energy of every pixel in an image.  Intensities are
/// at most 16 bits wide, so four differences always fit in a `u32`.
pub fn calculate_energy<V>(image: &V) -> Result<TwoDimensionalMap<u32>>
where
    V: GridView,
    V::Cell: Into<u16>,
{
    let (width, height) = image.dimensions();
    if image.is_degenerate() {
        return Err(SeamError::DegenerateGrid { width, height });
    }
    let (mw, mh) = (width - 1, height - 1);
    let pixel = |x: u32, y: u32| -> u16 { image.get(x, y).into() };

    let energy: Vec<u32> = iproduct!(0..height, 0..width)
        .map(|(y, x)| {
            let current = pixel(x, y);
            let neighbours = [
                cq!(y == 0, None, Some((x, y - 1))),
                cq!(y >= mh, None, Some((x, y + 1))),
                cq!(x == 0, None, Some((x - 1, y))),
                cq!(x >= mw, None, Some((x + 1, y))),
            ];
            neighbours
                .iter()
                .flatten()
                .map(|&(nx, ny)| energy_of_pair(current, pixel(nx, ny)))
                .sum::<u32>()
        })
        .collect();

    TwoDimensionalMap::from_vec(width, height, energy)
}

/// The basic seam engine: just a simple image reference holder.
/// Every request recalculates the energy from scratch.
pub struct EnergySeams<'a, V: GridView> {
    image: &'a V,
}

impl<'a, V> EnergySeams<'a, V>
where
    V: GridView,
    V::Cell: Into<u16>,
{
    /// Takes a reference to an image, and holds onto it.
    pub fn new(image: &'a V) -> Self {
        EnergySeams { image }
    }

    fn energy(&self) -> Result<TwoDimensionalMap<u32>> {
        let energy = calculate_energy(self.image)?;
        trace!("energy matrix:\n{}", energy);
        Ok(energy)
    }
}

impl<'a, V> SeamFinder for EnergySeams<'a, V>
where
    V: GridView,
    V::Cell: Into<u16>,
{
    fn find_horizontal_seam(&self) -> Result<Seam> {
        let cumulative = horizontal_cumulative_energy(&self.energy()?)?;
        trace!("cumulative energy matrix (horizontal):\n{}", cumulative);
        horizontal_seam(&cumulative)
    }

    fn find_vertical_seam(&self) -> Result<Seam> {
        let cumulative = vertical_cumulative_energy(&self.energy()?)?;
        trace!("cumulative energy matrix (vertical):\n{}", cumulative);
        vertical_seam(&cumulative)
    }
}

/// A convenience wrapper: Given an image, get back the next
/// top-to-bottom seam for that image.
pub fn calculate_vertical_seam<V>(image: &V) -> Result<Seam>
where
    V: GridView,
    V::Cell: Into<u16>,
{
    EnergySeams::new(image).find_vertical_seam()
}

/// A convenience wrapper: Given an image, get back the next
/// left-to-right seam for that image.
pub fn calculate_horizontal_seam<V>(image: &V) -> Result<Seam>
where
    V: GridView,
    V::Cell: Into<u16>,
{
    EnergySeams::new(image).find_horizontal_seam()
}
