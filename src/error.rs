// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors raised by the carver
//!
//! Everything here is in-memory arithmetic, so there are no transient
//! failures: a call either succeeds or is rejected before it touches
//! the image.

use failure::Fail;

/// The three ways a request to the carver can go wrong.
#[derive(Debug, Fail, Clone, PartialEq)]
pub enum SeamError {
    /// The pixel grid handed to the carver isn't a non-empty rectangle.
    #[fail(display = "malformed pixel grid: {}", _0)]
    Shape(String),

    /// A coordinate or seam entry falls outside the current image.
    #[fail(display = "{} = {} is outside the range 0..{}", what, index, limit)]
    Index {
        what: &'static str,
        index: u32,
        limit: u32,
    },

    /// A seam (or a carve request) fails a length, adjacency, or
    /// minimum-size precondition.
    #[fail(display = "{}", _0)]
    Validation(String),
}

impl SeamError {
    pub(crate) fn index(what: &'static str, index: u32, limit: u32) -> Self {
        SeamError::Index { what, index, limit }
    }
}

/// Results from the carver.
pub type Result<T> = std::result::Result<T, SeamError>;
