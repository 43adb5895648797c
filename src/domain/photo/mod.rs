// SPDX-License-Identifier: MPL-2.0
//! Photo domain types.
//!
//! Photos, their halves, and the keys used to address a single half.

pub mod types;

pub use types::{CropCoords, HalfKey, HalfPreview, ParseSideError, Photo, PhotoId, Side};
