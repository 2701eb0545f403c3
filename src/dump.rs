// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Energy maps as pictures
//!
//! Looking at the energy map is the quickest way to see why a seam
//! went where it did.  This scales an energy map into an 8-bit
//! grayscale image and hands it to image.rs, which picks the file
//! format from the extension.

use crate::energy::calculate_energy;
use crate::error::Result;
use crate::twodmap::TwoDimensionalMap;
use image::{GrayImage, Luma};
use std::path::Path;
use tracing::info;

/// Scale an energy map so that the highest energy is white.  A map
/// with no energy at all is black.
pub fn energy_to_image(energy: &TwoDimensionalMap<u32>) -> GrayImage {
    let factor = u64::from(energy.as_slice().iter().copied().max().unwrap_or(0));
    GrayImage::from_fn(energy.width(), energy.height(), |x, y| {
        let e = u64::from(energy[(x, y)]);
        let shade = if factor == 0 { 0 } else { e * 255 / factor };
        Luma([shade as u8])
    })
}

/// Compute the energy of an image and write it out as a picture.
pub fn save_energy_map<P: AsRef<Path>>(image: &TwoDimensionalMap<u16>, path: P) -> Result<()> {
    let energy = calculate_energy(image)?;
    energy_to_image(&energy).save(path.as_ref())?;
    info!(path = %path.as_ref().display(), "wrote energy map");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn energy_is_scaled_to_white() {
        let energy = TwoDimensionalMap::from_rows(&[[0u32, 10], [20, 40]]).unwrap();
        let picture = energy_to_image(&energy);
        assert_eq!(picture.dimensions(), (2, 2));
        assert_eq!(picture.into_raw(), vec![0, 63, 127, 255]);
    }

    #[test]
    fn no_energy_is_black() {
        let energy = TwoDimensionalMap::<u32>::new(3, 2);
        assert!(energy_to_image(&energy).into_raw().iter().all(|&p| p == 0));
    }
}
