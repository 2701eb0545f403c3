// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seam carving for plain-text portable graymaps
//!
//! Shrinks an image by repeatedly removing the connected path of
//! pixels, top to bottom or left to right, whose total energy is the
//! lowest.  See `SeamCarver` for the entry point.

mod ternary;

pub mod error;
pub use error::{Result, SeamError};

pub mod twodmap;
pub use twodmap::{GridView, TwoDimensionalMap};

pub mod flipper;

pub mod energy;
pub use energy::{calculate_energy, EnergySeams};

pub mod energymap;
pub use energymap::{horizontal_cumulative_energy, vertical_cumulative_energy};

pub mod seamfinder;
pub use seamfinder::{horizontal_seam, vertical_seam, Orientation, Seam, SeamFinder};

pub mod seamcarver;
pub use seamcarver::{
    remove_horizontal_seam, remove_seam, remove_vertical_seam, seamcarve, SeamCarver,
};

pub mod pgm;
pub use pgm::{processed_path, Graymap};

pub mod dump;
pub use dump::{energy_to_image, save_energy_map};
