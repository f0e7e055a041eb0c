// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Content-aware image resizing.
//!
//! A [`SeamCarver`] owns one image and shrinks it a row or a column at
//! a time, each time cutting out the connected one-pixel path whose
//! pixels carry the least dual-gradient energy.

pub mod energy;
pub use energy::{energy, energy_map, EnergyMap, BORDER_ENERGY};

pub mod error;
pub use error::{Result, SeamError};

pub mod orientation;
pub use orientation::Orientation;

pub mod picture;

pub mod pixelbuffer;
pub use pixelbuffer::{Color, PixelBuffer};

pub mod seamcarver;
pub use seamcarver::SeamCarver;

pub mod seamfinder;
pub use seamfinder::{energy_to_seam, SeamFinder};

pub mod seamremover;
pub use seamremover::{remove_seam, validate_seam};

pub mod twodmap;
