// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! The dual-gradient energy of a pixel is the magnitude of the color
//! change across it in both directions.  Border pixels get a fixed,
//! very large energy, so they're never worth carving and the
//! gradient never has to look outside the buffer.
//!
//! Nothing here is cached.  Energy depends only on the buffer's
//! current content, and every carve produces a new buffer, so the
//! map is rebuilt from scratch for each seam search.

use crate::error::Result;
use crate::pixelbuffer::{Color, PixelBuffer};
use crate::twodmap::TwoDimensionalMap;
#[cfg(not(feature = "threaded"))]
use itertools::iproduct;

/// The energy of every pixel on the edge of the image.  Far larger
/// than any interior gradient (which tops out near 624.6).
pub const BORDER_ENERGY: f64 = 1000.0;

/// The energy map: one `f64` per pixel.
pub type EnergyMap = TwoDimensionalMap<f64>;

// Takes the channels (R,G,B) from two pixels and maps the difference
// between each channel, squares it, and then sums them all up.  This
// is the rusty expression of:
//
//        |Δx|² = (Δrx)²+(Δgx)²+(Δbx)²
//        |Δy|² = (Δry)²+(Δgy)²+(Δby)²
//       e(x,y) = sqrt(|Δx|²+|Δy|²)
#[inline]
fn gradient(p1: Color, p2: Color) -> u32 {
    p1.channels()
        .iter()
        .zip(p2.channels().iter())
        .map(|(&c1, &c2)| {
            let d = i32::from(c2) - i32::from(c1);
            (d * d) as u32
        })
        .sum()
}

// Unchecked: the caller keeps (x, y) inside the buffer.
#[inline]
fn pixel_energy(buffer: &PixelBuffer, x: u32, y: u32) -> f64 {
    let (width, height) = buffer.dimensions();
    if x == 0 || y == 0 || x == width - 1 || y == height - 1 {
        return BORDER_ENERGY;
    }
    let gx = gradient(buffer.get(x - 1, y), buffer.get(x + 1, y));
    let gy = gradient(buffer.get(x, y - 1), buffer.get(x, y + 1));
    f64::from(gx + gy).sqrt()
}

/// The dual-gradient energy of the pixel at `(x, y)`.
pub fn energy(buffer: &PixelBuffer, x: u32, y: u32) -> Result<f64> {
    buffer.check_bounds(x, y)?;
    Ok(pixel_energy(buffer, x, y))
}

/// Compute the energy of every pixel in the buffer.
#[cfg(not(feature = "threaded"))]
pub fn energy_map(buffer: &PixelBuffer) -> EnergyMap {
    let (width, height) = buffer.dimensions();
    let energies = iproduct!(0..height, 0..width)
        .map(|(y, x)| pixel_energy(buffer, x, y))
        .collect();
    TwoDimensionalMap::from_vec(width, height, energies)
}

// Every pixel's energy is independent of every other's, so the map is
// cut into bands of whole rows and each band is filled on its own
// thread.  The scope guarantees the buffer outlives the workers.

/// Compute the energy of every pixel in the buffer.
#[cfg(feature = "threaded")]
pub fn energy_map(buffer: &PixelBuffer) -> EnergyMap {
    let (width, height) = buffer.dimensions();
    let mut emap = EnergyMap::new(width, height);
    let threads = num_cpus::get().max(1);
    let rows_per_band = (height as usize + threads - 1) / threads;

    crossbeam::scope(|scope| {
        for (band_index, band) in emap.bands_mut(rows_per_band).enumerate() {
            let first_row = (band_index * rows_per_band) as u32;
            scope.spawn(move |_| {
                for (offset, row) in band.chunks_mut(width as usize).enumerate() {
                    let y = first_row + offset as u32;
                    for (x, cell) in row.iter_mut().enumerate() {
                        *cell = pixel_energy(buffer, x as u32, y);
                    }
                }
            });
        }
    })
    .unwrap_or_else(|panic| std::panic::resume_unwind(panic));
    emap
}
