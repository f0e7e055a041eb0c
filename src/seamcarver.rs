// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - The engine
//!
//! `SeamCarver` owns one image and answers every question about it in
//! the image's natural frame: x runs along the width, y along the
//! height.  Horizontal work is done on the flipped buffer, so the
//! finder and remover only ever handle vertical seams.

use crate::energy::{energy, energy_map};
use crate::error::{Result, SeamError};
use crate::orientation::{Flipper, Orientation};
use crate::pixelbuffer::{Color, PixelBuffer};
use crate::seamfinder::{energy_to_seam, SeamFinder};
use crate::seamremover;
use log::{debug, info};

// Which dimension a single carve shrinks.
#[derive(PartialEq, Copy, Clone, Debug)]
enum Carve {
    Width,
    Height,
}

impl Carve {
    fn turn(self) -> Self {
        match self {
            Carve::Width => Carve::Height,
            Carve::Height => Carve::Width,
        }
    }
}

/// A content-aware resizer for a single image.
#[derive(Debug, Clone)]
pub struct SeamCarver {
    image: Flipper,
}

impl SeamCarver {
    /// Creates a new SeamCarver with an image to be carved.
    pub fn new(buffer: PixelBuffer) -> Self {
        SeamCarver {
            image: Flipper::new(buffer),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// How the buffer is stored right now.  Only interesting to
    /// callers who want to know what the next call will cost.
    pub fn orientation(&self) -> Orientation {
        self.image.orientation()
    }

    /// The dual-gradient energy of the pixel at `(x, y)`.
    ///
    /// The energy is the same whichever way round the buffer is
    /// stored, so this never forces a flip.
    pub fn energy(&self, x: u32, y: u32) -> Result<f64> {
        if x >= self.width() {
            return Err(SeamError::index("x", x, self.width()));
        }
        if y >= self.height() {
            return Err(SeamError::index("y", y, self.height()));
        }
        match self.image.orientation() {
            Orientation::Normal => energy(self.image.stored(), x, y),
            Orientation::Transposed => energy(self.image.stored(), y, x),
        }
    }

    fn find_seam(&mut self, orientation: Orientation) -> Vec<u32> {
        let buffer = self.image.oriented(orientation);
        let seam = energy_to_seam(&energy_map(buffer));
        debug!(
            "found {:?} seam across {}x{} buffer",
            orientation,
            buffer.width(),
            buffer.height()
        );
        seam
    }

    fn remove_seam(&mut self, seam: &[u32], orientation: Orientation) -> Result<()> {
        let next = seamremover::remove_seam(self.image.oriented(orientation), seam)?;
        self.image.replace(next, orientation);
        debug!("carved to {}x{}", self.width(), self.height());
        Ok(())
    }

    /// Remove a top-to-bottom seam: one column index per row.
    pub fn remove_vertical_seam(&mut self, seam: &[u32]) -> Result<()> {
        self.remove_seam(seam, Orientation::Normal)
    }

    /// Remove a left-to-right seam: one row index per column.
    pub fn remove_horizontal_seam(&mut self, seam: &[u32]) -> Result<()> {
        self.remove_seam(seam, Orientation::Transposed)
    }

    /// The current image, row by row, in its natural orientation.
    pub fn export_image(&mut self) -> Vec<Vec<Color>> {
        self.image.oriented(Orientation::Normal).export()
    }

    /// Give up the image, in its natural orientation.
    pub fn into_buffer(self) -> PixelBuffer {
        self.image.into_normal()
    }

    fn carve_once(&mut self, direction: Carve) -> Result<()> {
        match direction {
            Carve::Width => {
                let seam = self.find_vertical_seam();
                self.remove_vertical_seam(&seam)
            }
            Carve::Height => {
                let seam = self.find_horizontal_seam();
                self.remove_horizontal_seam(&seam)
            }
        }
    }

    // The entire energy map and seam digraph are recalculated for every
    // carve.  Only the pixels next to the last seam actually changed,
    // but nothing here tracks that.

    /// Given a desired new width and height, repeatedly carve seams
    /// out of the image, alternating between columns and rows until
    /// one dimension is done, then finishing the other.
    pub fn carve_to(&mut self, new_width: u32, new_height: u32) -> Result<()> {
        let (width, height) = (self.width(), self.height());
        if new_width == 0 || new_height == 0 {
            return Err(SeamError::Validation(format!(
                "cannot carve down to {}x{}",
                new_width, new_height
            )));
        }
        if width < new_width || height < new_height {
            return Err(SeamError::Validation(format!(
                "seam carving cannot upscale {}x{} to {}x{}",
                width, height, new_width, new_height
            )));
        }
        info!(
            "carving {}x{} down to {}x{}",
            width, height, new_width, new_height
        );

        let mut direction = Carve::Width;
        while self.width() > new_width && self.height() > new_height {
            self.carve_once(direction)?;
            direction = direction.turn();
        }
        while self.width() > new_width {
            self.carve_once(Carve::Width)?;
        }
        while self.height() > new_height {
            self.carve_once(Carve::Height)?;
        }

        info!("carved to {}x{}", self.width(), self.height());
        Ok(())
    }
}

impl SeamFinder for SeamCarver {
    fn find_horizontal_seam(&mut self) -> Vec<u32> {
        self.find_seam(Orientation::Transposed)
    }

    fn find_vertical_seam(&mut self) -> Vec<u32> {
        self.find_seam(Orientation::Normal)
    }
}
