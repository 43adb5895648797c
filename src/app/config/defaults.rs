// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Preview**: Grid geometry used by vertical preview navigation
//! - **Backend**: Timeout applied to dialog, load and export calls
//! - **Logging**: Default log filter

use crate::application::query::DEFAULT_ROW_WIDTH;

// ==========================================================================
// Preview Defaults
// ==========================================================================

/// Halves per grid row (two photo cards side by side).
pub const DEFAULT_PREVIEW_ROW_WIDTH: usize = DEFAULT_ROW_WIDTH;

/// Largest accepted row width.
pub const MAX_PREVIEW_ROW_WIDTH: usize = 64;

// ==========================================================================
// Backend Defaults
// ==========================================================================

/// Default timeout for a backend export (in seconds).
pub const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 120;

/// Minimum backend timeout (in seconds).
pub const MIN_BACKEND_TIMEOUT_SECS: u64 = 1;

/// Maximum backend timeout (in seconds).
pub const MAX_BACKEND_TIMEOUT_SECS: u64 = 3600;

// ==========================================================================
// Logging Defaults
// ==========================================================================

/// Log filter used when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// How long a transient message stays visible (in seconds).
pub const DEFAULT_MESSAGE_DURATION_SECS: u64 = 5;
