// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`editing`]: Per-half edit types ([`RotationAngle`](editing::RotationAngle),
//!   [`HalfEditState`](editing::HalfEditState))
//! - [`error`]: Domain error types ([`StateError`](error::StateError))
//! - [`photo`]: Photo identity ([`Photo`](photo::Photo), [`HalfKey`](photo::HalfKey),
//!   [`Side`](photo::Side))

pub mod editing;
pub mod error;
pub mod photo;
