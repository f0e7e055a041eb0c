// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Moving pictures in and out of the carver
//!
//! The carver only knows packed RGB.  Whatever the decoder produced
//! (grey, RGBA, sixteen bits a channel) is squeezed down to eight bits
//! of red, green and blue on the way in; alpha is dropped.

use crate::error::Result;
use crate::pixelbuffer::{Color, PixelBuffer};
use image::{GenericImageView, Pixel, Primitive, Rgb, RgbImage};
use itertools::iproduct;
use num_traits::{Bounded, ToPrimitive};

// Rescale one subpixel to the 0..=255 range.
fn subpixel_to_u8<S: Primitive>(s: S) -> u8 {
    let max = <S as Bounded>::max_value().to_f64().unwrap_or(255.0);
    let value = s.to_f64().unwrap_or(0.0);
    (value * 255.0 / max).round().max(0.0).min(255.0) as u8
}

fn color_of<P, S>(pixel: &P) -> Color
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let Rgb([r, g, b]) = pixel.to_rgb();
    Color::from_channels(subpixel_to_u8(r), subpixel_to_u8(g), subpixel_to_u8(b))
}

impl From<Rgb<u8>> for Color {
    fn from(pixel: Rgb<u8>) -> Self {
        let Rgb([r, g, b]) = pixel;
        Color::from_channels(r, g, b)
    }
}

impl From<Color> for Rgb<u8> {
    fn from(color: Color) -> Self {
        Rgb(color.channels())
    }
}

impl PixelBuffer {
    /// Copy a decoded image into a new buffer.
    pub fn from_image<I, P, S>(image: &I) -> Result<Self>
    where
        I: GenericImageView<Pixel = P>,
        P: Pixel<Subpixel = S> + 'static,
        S: Primitive + 'static,
    {
        let (width, height) = image.dimensions();
        let pixels = iproduct!(0..height, 0..width)
            .map(|(y, x)| color_of(&image.get_pixel(x, y)))
            .collect();
        PixelBuffer::from_raw(width, height, pixels)
    }

    /// Copy the buffer out as an eight-bit RGB image for an encoder.
    pub fn to_rgb_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width(), self.height(), |x, y| self.get(x, y).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SeamError;
    use image::{ImageBuffer, Luma, Rgba};

    #[test]
    fn rgb_images_round_trip_through_the_buffer() {
        let img = RgbImage::from_fn(4, 3, |x, y| Rgb([x as u8 * 10, y as u8 * 20, 7]));
        let buf = PixelBuffer::from_image(&img).unwrap();
        assert_eq!(buf.dimensions(), (4, 3));
        assert_eq!(buf.pixel_at(3, 2), Ok(Color::from_channels(30, 40, 7)));
        assert_eq!(buf.to_rgb_image(), img);
    }

    #[test]
    fn alpha_is_dropped_and_grey_is_spread() {
        let rgba: ImageBuffer<Rgba<u8>, Vec<u8>> =
            ImageBuffer::from_pixel(2, 2, Rgba([1, 2, 3, 0]));
        let buf = PixelBuffer::from_image(&rgba).unwrap();
        assert_eq!(buf.pixel_at(1, 1), Ok(Color(0x010203)));

        let grey: ImageBuffer<Luma<u8>, Vec<u8>> = ImageBuffer::from_pixel(2, 1, Luma([0x40]));
        let buf = PixelBuffer::from_image(&grey).unwrap();
        assert_eq!(buf.pixel_at(0, 0), Ok(Color(0x404040)));
    }

    #[test]
    fn wide_subpixels_are_scaled_down() {
        let deep: ImageBuffer<Rgb<u16>, Vec<u16>> =
            ImageBuffer::from_pixel(1, 1, Rgb([u16::max_value(), 0, 0x8080]));
        let buf = PixelBuffer::from_image(&deep).unwrap();
        assert_eq!(buf.pixel_at(0, 0), Ok(Color::from_channels(255, 0, 128)));
    }

    #[test]
    fn empty_images_are_rejected() {
        let img = RgbImage::new(0, 5);
        assert!(matches!(
            PixelBuffer::from_image(&img),
            Err(SeamError::Shape(_))
        ));
    }
}
