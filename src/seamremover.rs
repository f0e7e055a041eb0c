// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Remove a seam from a buffer
//!
//! Seams arrive from outside, so each one is checked against the
//! buffer before anything is cut.  A rejected seam leaves the buffer
//! exactly as it was; an accepted one yields a new buffer one column
//! narrower.

use crate::error::{Result, SeamError};
use crate::pixelbuffer::PixelBuffer;

/// Check that `seam` describes a removable vertical seam of `buffer`.
pub fn validate_seam(buffer: &PixelBuffer, seam: &[u32]) -> Result<()> {
    let (width, height) = buffer.dimensions();

    if width <= 1 {
        return Err(SeamError::Validation(format!(
            "cannot remove a seam from an image {} pixel wide",
            width
        )));
    }

    if seam.len() != height as usize {
        return Err(SeamError::Validation(format!(
            "seam has {} entries, expected {}",
            seam.len(),
            height
        )));
    }

    if let Some(&x) = seam.iter().find(|&&x| x >= width) {
        return Err(SeamError::index("seam entry", x, width));
    }

    if let Some(row) = seam
        .windows(2)
        .position(|pair| (i64::from(pair[0]) - i64::from(pair[1])).abs() > 1)
    {
        return Err(SeamError::Validation(format!(
            "non-adjacent seam: column {} at row {} is followed by column {}",
            seam[row],
            row,
            seam[row + 1]
        )));
    }

    Ok(())
}

/// Validate `seam` and return a copy of `buffer` with it cut out.
pub fn remove_seam(buffer: &PixelBuffer, seam: &[u32]) -> Result<PixelBuffer> {
    validate_seam(buffer, seam)?;
    Ok(buffer.without_vertical_seam(seam))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixelbuffer::Color;

    fn buffer(width: u32, height: u32) -> PixelBuffer {
        PixelBuffer::from_raw(width, height, (0..width * height).map(Color).collect()).unwrap()
    }

    #[test]
    fn removal_narrows_by_one_column() {
        let buf = buffer(4, 3);
        let cut = remove_seam(&buf, &[3, 2, 2]).unwrap();
        assert_eq!(cut.dimensions(), (3, 3));
        let rows: Vec<Vec<u32>> = cut
            .export()
            .into_iter()
            .map(|r| r.into_iter().map(|c| c.0).collect())
            .collect();
        assert_eq!(rows, vec![vec![0, 1, 2], vec![4, 5, 7], vec![8, 9, 11]]);
    }

    #[test]
    fn single_column_images_cannot_lose_a_seam() {
        let buf = buffer(1, 3);
        assert!(matches!(
            remove_seam(&buf, &[0, 0, 0]),
            Err(SeamError::Validation(_))
        ));
    }

    #[test]
    fn seam_length_must_match_height() {
        let buf = buffer(3, 3);
        assert!(matches!(
            remove_seam(&buf, &[1, 1]),
            Err(SeamError::Validation(_))
        ));
        assert!(matches!(
            remove_seam(&buf, &[]),
            Err(SeamError::Validation(_))
        ));
    }

    #[test]
    fn seam_entries_must_be_inside_the_image() {
        let buf = buffer(3, 3);
        assert_eq!(
            remove_seam(&buf, &[1, 2, 3]),
            Err(SeamError::index("seam entry", 3, 3))
        );
    }

    #[test]
    fn seam_jumps_are_rejected() {
        let buf = buffer(3, 3);
        let err = remove_seam(&buf, &[0, 2, 1]).unwrap_err();
        assert!(matches!(err, SeamError::Validation(_)));
        assert!(err.to_string().contains("non-adjacent"));
    }
}
