// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Find the cheapest seam through an energy map
//!
//! The map is treated as a DAG in which pixel (x, y) points at the
//! (up to) three pixels touching it in the row below.  One pass of
//! dynamic programming over the rows gives the cheapest route to
//! every pixel; the cheapest pixel in the last row, followed back up
//! through its parents, is the seam.

use crate::energy::EnergyMap;
use crate::twodmap::TwoDimensionalMap;

/// The seam-producing half of the carver's interface.
pub trait SeamFinder {
    /// Request a horizontal seam: one row index per column, left to
    /// right.
    fn find_horizontal_seam(&mut self) -> Vec<u32>;

    /// Request a vertical seam: one column index per row, top to
    /// bottom.
    fn find_vertical_seam(&mut self) -> Vec<u32>;
}

#[derive(Default, Debug, Copy, Clone)]
pub(crate) struct EnergyAndBackPointer {
    pub energy: f64,
    pub parent: u32,
}

// Pick the cheapest of the candidate columns in `row`.  Candidates are
// visited left to right and only a strictly smaller total replaces
// the current best, so ties go to the leftmost column.
fn cheapest<I>(row: &[EnergyAndBackPointer], mut candidates: I) -> u32
where
    I: Iterator<Item = u32>,
{
    let first = candidates.next().unwrap_or(0);
    candidates.fold(first, |best, x| {
        if row[x as usize].energy < row[best as usize].energy {
            x
        } else {
            best
        }
    })
}

/// Given an energy map, return the list of x-coordinates that, when
/// mapped with the range (0..height), give the XY coordinates for each
/// pixel in the seam to be removed.
///
/// Ties are broken deterministically: among equally cheap endpoints
/// the leftmost wins, and while walking back up a tied parent is
/// chosen left before center before right.
pub fn energy_to_seam(energy: &EnergyMap) -> Vec<u32> {
    let (width, height) = (energy.width, energy.height);

    // A single column has exactly one seam, and nothing to search.
    if width <= 1 {
        return vec![0; height as usize];
    }

    let mut target: TwoDimensionalMap<EnergyAndBackPointer> =
        TwoDimensionalMap::new(width, height);

    // Populate the first row with their native energies.
    for x in 0..width {
        target[(x, 0)].energy = energy[(x, 0)];
    }

    let maxwidth = width - 1;
    // For every subsequent row, populate the target cell with the sum
    // of the *lowest adjacent upper energy* and the *x coordinate of
    // that energy*.  Columns past either edge simply aren't
    // candidates.
    for y in 1..height {
        for x in 0..width {
            let above = target.row(y - 1);
            let parent_x = cheapest(above, x.saturating_sub(1)..=(x + 1).min(maxwidth));
            let erg = energy[(x, y)] + above[parent_x as usize].energy;
            target[(x, y)] = EnergyAndBackPointer {
                energy: erg,
                parent: parent_x,
            };
        }
    }

    // Find the x coordinate of the bottommost seam with the least energy.
    let mut seam_col = cheapest(target.row(height - 1), 0..width);

    // Working backwards, generate a vec of x coordinates that that map to
    // the seam, reverse and return.
    (0..height)
        .rev()
        .fold(Vec::<u32>::with_capacity(height as usize), |mut acc, y| {
            acc.push(seam_col);
            seam_col = target[(seam_col, y)].parent;
            acc
        })
        .into_iter()
        .rev()
        .collect()
}
