// SPDX-License-Identifier: MPL-2.0
//! Mutable per-half state (CQRS write-side).
//!
//! - [`tracker`]: Deleted / rotation / border-removal state (`HalfEditStateTracker`)

pub mod tracker;

pub use tracker::{ActivePhoto, DeletionChange, HalfEditStateTracker, HalfExport};
