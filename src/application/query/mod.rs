// SPDX-License-Identifier: MPL-2.0
//! Query services (CQRS read-side).
//!
//! These services never modify edit state; they read the photo list and the
//! tracker to decide what to show.
//!
//! # Available Services
//!
//! - [`carousel`]: Full-screen preview navigation (`PreviewCarousel`)

pub mod carousel;

// Re-export main types
pub use carousel::{
    Direction, KeyOutcome, PreviewCarousel, PreviewKey, PreviewView, RotationSource, StepOutcome,
    DEFAULT_ROW_WIDTH,
};
