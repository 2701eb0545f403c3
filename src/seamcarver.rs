// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - The main function
//!
//! The main seamcarver routine, with helpers for removing a single
//! horizontal or vertical seam.  Both helpers copy into a freshly
//! allocated map, skipping the seam's pixels, so the source is never
//! touched and no "deleted" marker can be confused with a real
//! intensity.

use crate::energy::EnergySeams;
use crate::error::{Result, SeamError};
use crate::seamfinder::{Orientation, Seam, SeamFinder};
use crate::twodmap::TwoDimensionalMap;
use itertools::Itertools;
use tracing::{debug, info};

fn invalid(reason: String) -> SeamError {
    SeamError::InvalidSeam { reason }
}

// A seam fits a map if it runs the right way, has one step per row
// (or column), stays inside the map, and never jumps more than one
// pixel sideways.  Removing it must also leave something behind.
fn check_seam<P: Default + Copy>(image: &TwoDimensionalMap<P>, seam: &Seam) -> Result<()> {
    let (width, height) = image.dimensions();
    if image.is_degenerate() {
        return Err(SeamError::DegenerateGrid { width, height });
    }

    let (length, extent) = match seam.orientation() {
        Orientation::Vertical => (height, width),
        Orientation::Horizontal => (width, height),
    };
    if extent < 2 {
        return Err(SeamError::OverReduction {
            orientation: seam.orientation(),
            requested: 1,
            limit: extent - 1,
        });
    }
    if seam.len() != length as usize {
        return Err(invalid(format!(
            "a {} seam through a {}x{} image needs {} pixels, not {}",
            seam.orientation(),
            width,
            height,
            length,
            seam.len()
        )));
    }
    if let Some((step, &p)) = seam.path().iter().find_position(|&&p| p >= extent) {
        return Err(invalid(format!(
            "step {} is at {}, outside the image's {} pixels",
            step, p, extent
        )));
    }
    if let Some((step, (a, b))) = seam
        .path()
        .iter()
        .tuple_windows()
        .find_position(|&(a, b)| a.max(b) - a.min(b) > 1)
    {
        return Err(invalid(format!(
            "step {} jumps from {} to {}",
            step + 1,
            a,
            b
        )));
    }
    Ok(())
}

/// Remove a vertical seam: every row loses the one pixel the seam
/// names, and the pixels to its right move one place left.
pub fn remove_vertical_seam<P>(
    image: &TwoDimensionalMap<P>,
    seam: &Seam,
) -> Result<TwoDimensionalMap<P>>
where
    P: Default + Copy,
{
    if seam.orientation() != Orientation::Vertical {
        return Err(invalid("expected a vertical seam".to_string()));
    }
    check_seam(image, seam)?;

    let (width, height) = image.dimensions();
    let mut cells = Vec::with_capacity((width as usize - 1) * height as usize);
    for (row, &x) in image.rows().zip(seam.path()) {
        let x = x as usize;
        cells.extend_from_slice(&row[..x]);
        cells.extend_from_slice(&row[x + 1..]);
    }
    TwoDimensionalMap::from_vec(width - 1, height, cells)
}

/// Remove a horizontal seam: every column loses the one pixel the
/// seam names, and the pixels below it move one place up.  Columns
/// lose different rows, so the new map is filled row by row, each
/// cell taken from the same row or the one below depending on where
/// the seam crosses its column.
pub fn remove_horizontal_seam<P>(
    image: &TwoDimensionalMap<P>,
    seam: &Seam,
) -> Result<TwoDimensionalMap<P>>
where
    P: Default + Copy,
{
    if seam.orientation() != Orientation::Horizontal {
        return Err(invalid("expected a horizontal seam".to_string()));
    }
    check_seam(image, seam)?;

    let (width, height) = image.dimensions();
    let mut cells = Vec::with_capacity(width as usize * (height as usize - 1));
    for y in 0..height - 1 {
        for (x, &cut) in (0..width).zip(seam.path()) {
            cells.push(image.get(x, if y < cut { y } else { y + 1 }));
        }
    }
    TwoDimensionalMap::from_vec(width, height - 1, cells)
}

/// Remove whichever kind of seam this is.
pub fn remove_seam<P>(
    image: &TwoDimensionalMap<P>,
    seam: &Seam,
) -> Result<TwoDimensionalMap<P>>
where
    P: Default + Copy,
{
    match seam.orientation() {
        Orientation::Vertical => remove_vertical_seam(image, seam),
        Orientation::Horizontal => remove_horizontal_seam(image, seam),
    }
}

fn carveonce<P, F>(
    image: &TwoDimensionalMap<P>,
    direction: Orientation,
    on_seam: &mut F,
) -> Result<TwoDimensionalMap<P>>
where
    P: Default + Copy + Into<u16>,
    F: FnMut(&Seam),
{
    let carver = EnergySeams::new(image);
    let seam = match direction {
        Orientation::Vertical => carver.find_vertical_seam()?,
        Orientation::Horizontal => carver.find_horizontal_seam()?,
    };
    on_seam(&seam);
    let carved = remove_seam(image, &seam)?;
    debug!(
        orientation = %direction,
        cost = seam.cost(),
        width = carved.width(),
        height = carved.height(),
        "removed seam"
    );
    Ok(carved)
}

/// A struct for holding the image to be carved.
pub struct SeamCarver<'a, P: Default + Copy> {
    image: &'a TwoDimensionalMap<P>,
}

impl<'a, P> SeamCarver<'a, P>
where
    P: Default + Copy + Into<u16>,
{
    /// Creates a new SeamCarver with an image to be carved.
    pub fn new(image: &'a TwoDimensionalMap<P>) -> Self {
        Self { image }
    }

    // The entire energy map and cumulative map are recalculated for
    // every seam.  Every request is checked before any carving, so a
    // request that can't be met leaves nothing half-done.

    /// Remove `vertical` top-to-bottom seams, then `horizontal`
    /// left-to-right seams, returning the carved image.  The source
    /// image is not modified.
    pub fn carve(&self, vertical: u32, horizontal: u32) -> Result<TwoDimensionalMap<P>> {
        self.carve_with(vertical, horizontal, |_| ())
    }

    /// As `carve`, but hands every seam to `on_seam` just before it's
    /// removed.  Coordinates are relative to the image as it was at
    /// that moment, not to the original.
    pub fn carve_with<F>(
        &self,
        vertical: u32,
        horizontal: u32,
        mut on_seam: F,
    ) -> Result<TwoDimensionalMap<P>>
    where
        F: FnMut(&Seam),
    {
        let (width, height) = self.image.dimensions();
        if self.image.is_degenerate() {
            return Err(SeamError::DegenerateGrid { width, height });
        }
        if vertical >= width {
            return Err(SeamError::OverReduction {
                orientation: Orientation::Vertical,
                requested: vertical,
                limit: width - 1,
            });
        }
        if horizontal >= height {
            return Err(SeamError::OverReduction {
                orientation: Orientation::Horizontal,
                requested: horizontal,
                limit: height - 1,
            });
        }

        info!(width, height, vertical, horizontal, "carving");
        let mut scratch = self.image.clone();
        for _ in 0..vertical {
            scratch = carveonce(&scratch, Orientation::Vertical, &mut on_seam)?;
        }
        for _ in 0..horizontal {
            scratch = carveonce(&scratch, Orientation::Horizontal, &mut on_seam)?;
        }
        info!(width = scratch.width(), height = scratch.height(), "carved");
        Ok(scratch)
    }
}

/// Carve an image down by the given number of seams in each
/// direction, verticals first.
pub fn seamcarve<P>(
    image: &TwoDimensionalMap<P>,
    vertical: u32,
    horizontal: u32,
) -> Result<TwoDimensionalMap<P>>
where
    P: Default + Copy + Into<u16>,
{
    SeamCarver::new(image).carve(vertical, horizontal)
}
