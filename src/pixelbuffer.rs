// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The pixel buffer
//!
//! The only mutable state the carver owns.  Everything else is either
//! a pure function over a buffer, or a recipe for producing the next
//! (narrower) buffer.  Removing a seam never edits a buffer in place;
//! it builds a new one and the old one is dropped.

use crate::error::{Result, SeamError};
use crate::twodmap::TwoDimensionalMap;

/// A packed 24-bit RGB color: red in bits 16-23, green in 8-15, blue
/// in 0-7.  Anything above bit 23 is ignored.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    pub fn from_channels(red: u8, green: u8, blue: u8) -> Self {
        Color(u32::from(red) << 16 | u32::from(green) << 8 | u32::from(blue))
    }

    #[inline]
    pub fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub fn blue(self) -> u8 {
        self.0 as u8
    }

    #[inline]
    pub fn channels(self) -> [u8; 3] {
        [self.red(), self.green(), self.blue()]
    }
}

impl From<u32> for Color {
    fn from(packed: u32) -> Self {
        Color(packed)
    }
}

/// A rectangular grid of colors, at least one pixel on each side.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    pixels: TwoDimensionalMap<Color>,
}

impl PixelBuffer {
    /// Build a buffer from a grid given row by row.  Every row must
    /// have the same, non-zero, length.
    pub fn new(rows: Vec<Vec<Color>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(SeamError::Shape(format!(
                "image must be at least 1x1, got {}x{}",
                width, height
            )));
        }
        if let Some((y, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(SeamError::Shape(format!(
                "row {} has {} pixels, expected {}",
                y,
                row.len(),
                width
            )));
        }
        let data = rows.into_iter().flatten().collect();
        Ok(PixelBuffer {
            pixels: TwoDimensionalMap::from_vec(width as u32, height as u32, data),
        })
    }

    /// Build a buffer from row-major pixel data.
    pub fn from_raw(width: u32, height: u32, pixels: Vec<Color>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(SeamError::Shape(format!(
                "image must be at least 1x1, got {}x{}",
                width, height
            )));
        }
        if pixels.len() != width as usize * height as usize {
            return Err(SeamError::Shape(format!(
                "{} pixels cannot fill a {}x{} image",
                pixels.len(),
                width,
                height
            )));
        }
        Ok(PixelBuffer {
            pixels: TwoDimensionalMap::from_vec(width, height, pixels),
        })
    }

    pub fn width(&self) -> u32 {
        self.pixels.width
    }

    pub fn height(&self) -> u32 {
        self.pixels.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.pixels.width, self.pixels.height)
    }

    /// The color at `(x, y)`, checked against the current bounds.
    pub fn pixel_at(&self, x: u32, y: u32) -> Result<Color> {
        self.check_bounds(x, y)?;
        Ok(self.pixels[(x, y)])
    }

    /// Unchecked access for the inner loops; the caller has already
    /// validated the coordinates.
    #[inline]
    pub(crate) fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(x, y)]
    }

    pub(crate) fn check_bounds(&self, x: u32, y: u32) -> Result<()> {
        if x >= self.width() {
            return Err(SeamError::index("x", x, self.width()));
        }
        if y >= self.height() {
            return Err(SeamError::index("y", y, self.height()));
        }
        Ok(())
    }

    /// The current content as rows, ready for an encoder.
    pub fn export(&self) -> Vec<Vec<Color>> {
        self.pixels.rows().map(<[Color]>::to_vec).collect()
    }

    /// The current content as one row-major vector.
    pub fn to_raw(&self) -> Vec<Color> {
        self.pixels.as_slice().to_vec()
    }

    /// A copy of this buffer with rows and columns swapped.
    pub fn transposed(&self) -> Self {
        PixelBuffer {
            pixels: self.pixels.transposed(),
        }
    }

    // No checking here: the seam remover validates the seam against
    // this buffer before asking for the cut.  Each row is copied in
    // two runs, skipping the seam pixel.
    pub(crate) fn without_vertical_seam(&self, seam: &[u32]) -> Self {
        let (width, height) = self.dimensions();
        let mut data = Vec::with_capacity((width as usize - 1) * height as usize);
        for (row, &cut) in self.pixels.rows().zip(seam) {
            let cut = cut as usize;
            data.extend_from_slice(&row[..cut]);
            data.extend_from_slice(&row[cut + 1..]);
        }
        PixelBuffer {
            pixels: TwoDimensionalMap::from_vec(width - 1, height, data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&[u32]]) -> Vec<Vec<Color>> {
        rows.iter()
            .map(|r| r.iter().map(|&c| Color(c)).collect())
            .collect()
    }

    #[test]
    fn colors_unpack_into_channels() {
        let c = Color(0x00ff_8001);
        assert_eq!(c.channels(), [0xff, 0x80, 0x01]);
        assert_eq!(Color::from_channels(0xff, 0x80, 0x01), c);
        // The top byte is ignored.
        assert_eq!(Color(0xab12_3456).channels(), [0x12, 0x34, 0x56]);
    }

    #[test]
    fn ragged_grids_are_rejected() {
        let err = PixelBuffer::new(grid(&[&[1, 2, 3], &[4, 5]])).unwrap_err();
        assert!(matches!(err, SeamError::Shape(_)));
        assert!(matches!(PixelBuffer::new(vec![]), Err(SeamError::Shape(_))));
        assert!(matches!(
            PixelBuffer::new(vec![vec![]]),
            Err(SeamError::Shape(_))
        ));
        assert!(matches!(
            PixelBuffer::from_raw(2, 2, vec![Color(0); 3]),
            Err(SeamError::Shape(_))
        ));
        assert!(matches!(
            PixelBuffer::from_raw(0, 2, vec![]),
            Err(SeamError::Shape(_))
        ));
    }

    #[test]
    fn pixel_access_is_bounds_checked() {
        let buf = PixelBuffer::new(grid(&[&[1, 2, 3], &[4, 5, 6]])).unwrap();
        assert_eq!(buf.dimensions(), (3, 2));
        assert_eq!(buf.pixel_at(2, 1), Ok(Color(6)));
        assert_eq!(buf.pixel_at(3, 0), Err(SeamError::index("x", 3, 3)));
        assert_eq!(buf.pixel_at(0, 2), Err(SeamError::index("y", 2, 2)));
    }

    #[test]
    fn export_returns_the_rows_it_was_built_from() {
        let rows = grid(&[&[1, 2, 3], &[4, 5, 6]]);
        let buf = PixelBuffer::new(rows.clone()).unwrap();
        assert_eq!(buf.export(), rows);
        assert_eq!(buf.to_raw().len(), 6);
    }

    #[test]
    fn double_transpose_is_identity() {
        let buf = PixelBuffer::new(grid(&[&[1, 2, 3], &[4, 5, 6]])).unwrap();
        let flipped = buf.transposed();
        assert_eq!(flipped.export(), grid(&[&[1, 4], &[2, 5], &[3, 6]]));
        assert_eq!(flipped.transposed(), buf);
    }

    #[test]
    fn cutting_a_seam_shifts_the_rest_of_the_row_left() {
        let buf = PixelBuffer::new(grid(&[&[1, 2, 3], &[4, 5, 6], &[7, 8, 9]])).unwrap();
        let cut = buf.without_vertical_seam(&[0, 1, 2]);
        assert_eq!(cut.export(), grid(&[&[2, 3], &[4, 6], &[7, 8]]));
    }
}
