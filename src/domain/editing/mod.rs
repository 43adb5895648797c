// SPDX-License-Identifier: MPL-2.0
//! Editing domain types.
//!
//! This module provides pure domain types for per-half edits:
//! - [`RotationAngle`]: Rotation restricted to quarter turns
//! - [`HalfEditState`]: Deleted / rotation / border-removal intent of one half

pub mod half_state;
pub mod newtypes;

pub use half_state::{HalfEditState, DEFAULT_REMOVE_BORDER};
pub use newtypes::RotationAngle;
