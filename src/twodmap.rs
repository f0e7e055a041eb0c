// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::ops::{Index, IndexMut};
use std::slice::Chunks;

/// An addressable two-dimensional field, stored row-major.  Holds the
/// pixels of the image, the energy of every pixel, or the running
/// seam costs, depending on what the carver is doing at the moment.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoDimensionalMap<P: Default + Copy> {
    pub width: u32,
    pub height: u32,
    data: Vec<P>,
}

impl<P: Default + Copy> TwoDimensionalMap<P> {
    /// Define a new map, every cell holding the content type's
    /// default.
    pub fn new(width: u32, height: u32) -> Self {
        TwoDimensionalMap {
            width,
            height,
            data: vec![P::default(); width as usize * height as usize],
        }
    }

    /// Wrap an existing row-major vector.  The caller guarantees that
    /// `data.len() == width * height`.
    pub(crate) fn from_vec(width: u32, height: u32, data: Vec<P>) -> Self {
        debug_assert_eq!(data.len(), width as usize * height as usize);
        TwoDimensionalMap {
            width,
            height,
            data,
        }
    }

    // Absolutely, the number one name of this game is keep the index
    // math in a singular location and never, ever mess with it.  This
    // particular variant is the same one used in image.rs.
    fn get_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// One row of the map.
    pub fn row(&self, y: u32) -> &[P] {
        let start = self.get_index(0, y);
        &self.data[start..start + self.width as usize]
    }

    pub fn rows(&self) -> Chunks<'_, P> {
        self.data.chunks(self.width as usize)
    }

    /// A new map with the axes swapped: what was at `(x, y)` is now
    /// at `(y, x)`.
    pub fn transposed(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for x in 0..self.width {
            for y in 0..self.height {
                data.push(self[(x, y)]);
            }
        }
        TwoDimensionalMap::from_vec(self.height, self.width, data)
    }

    /// Runs of `rows` whole rows each, for handing out to workers.
    #[cfg(feature = "threaded")]
    pub(crate) fn bands_mut(&mut self, rows: usize) -> std::slice::ChunksMut<'_, P> {
        self.data.chunks_mut(rows * self.width as usize)
    }

    pub(crate) fn as_slice(&self) -> &[P] {
        &self.data
    }
}

impl<P: Default + Copy> Index<(u32, u32)> for TwoDimensionalMap<P> {
    type Output = P;

    /// A convenience addressing mode for getting values.
    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.get_index(x, y);
        &self.data[index]
    }
}

impl<P: Default + Copy> IndexMut<(u32, u32)> for TwoDimensionalMap<P> {
    /// A convenience addressing mode for setting values.
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.data[index]
    }
}
