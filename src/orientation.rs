// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Image dimensional flipper
//!
//! Holds the buffer together with a record of whether it is currently
//! stored on its side.  Flipping the image 90° turns every horizontal
//! seam into a vertical one, so the finder and the remover only ever
//! have to know about columns.
//!
//! The flip is real (the buffer is rebuilt transposed), so it is only
//! done when the requested orientation differs from the stored one.
//! A run of horizontal carves pays for one transpose, not one per
//! carve.

use crate::pixelbuffer::PixelBuffer;
use log::trace;

/// Which way round the buffer is stored.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Orientation {
    /// Stored axes match the image's natural axes.
    Normal,
    /// Stored with rows and columns swapped.
    Transposed,
}

impl Orientation {
    fn turn(self) -> Self {
        match self {
            Orientation::Normal => Orientation::Transposed,
            Orientation::Transposed => Orientation::Normal,
        }
    }
}

/// A buffer and the orientation it is stored in.
#[derive(Debug, Clone)]
pub struct Flipper {
    buffer: PixelBuffer,
    orientation: Orientation,
}

impl Flipper {
    /// Takes ownership of a buffer in its natural orientation.
    pub fn new(buffer: PixelBuffer) -> Self {
        Flipper {
            buffer,
            orientation: Orientation::Normal,
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Width of the image in its natural orientation, whichever way
    /// the buffer is stored.
    pub fn width(&self) -> u32 {
        match self.orientation {
            Orientation::Normal => self.buffer.width(),
            Orientation::Transposed => self.buffer.height(),
        }
    }

    /// Height of the image in its natural orientation.
    pub fn height(&self) -> u32 {
        match self.orientation {
            Orientation::Normal => self.buffer.height(),
            Orientation::Transposed => self.buffer.width(),
        }
    }

    /// The buffer as currently stored, for read-only work that
    /// doesn't care about orientation.
    pub fn stored(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// Make sure the buffer is stored in `orientation`, transposing at
    /// most once, and hand it back.
    pub fn oriented(&mut self, orientation: Orientation) -> &PixelBuffer {
        if self.orientation != orientation {
            trace!(
                "flipping {}x{} buffer to {:?}",
                self.buffer.width(),
                self.buffer.height(),
                orientation
            );
            self.buffer = self.buffer.transposed();
            self.orientation = self.orientation.turn();
        }
        &self.buffer
    }

    /// Swap in the next generation of the buffer.  It must be stored
    /// in `orientation`.
    pub fn replace(&mut self, buffer: PixelBuffer, orientation: Orientation) {
        self.buffer = buffer;
        self.orientation = orientation;
    }

    /// Give back the buffer in its natural orientation.
    pub fn into_normal(mut self) -> PixelBuffer {
        self.oriented(Orientation::Normal);
        self.buffer
    }
}
