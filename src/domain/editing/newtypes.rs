// SPDX-License-Identifier: MPL-2.0
//! Editing newtypes.
//!
//! Type-safe wrappers for per-half edit values, ensuring they are always
//! within their valid set.

use std::fmt;

// =============================================================================
// RotationAngle
// =============================================================================

/// Rotation angle in 90° increments.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always one of: 0°, 90°, 180°, or 270°.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RotationAngle(u16);

impl RotationAngle {
    /// No rotation (0°).
    pub const ZERO: Self = Self(0);

    /// Every valid angle, in ascending order.
    pub const ALL: [Self; 4] = [Self(0), Self(90), Self(180), Self(270)];

    /// Creates a new rotation angle, normalizing to valid 90° increments.
    ///
    /// Any value is rounded down to a multiple of 90° and wrapped into 0–270°.
    #[must_use]
    pub fn new(degrees: u16) -> Self {
        Self(((degrees / 90) * 90) % 360)
    }

    /// Returns the angle in degrees.
    #[must_use]
    pub fn degrees(self) -> u16 {
        self.0
    }

    /// Rotates 90° counter-clockwise.
    #[must_use]
    pub fn rotate_counterclockwise(self) -> Self {
        Self((self.0 + 270) % 360)
    }

    /// Returns true if the angle is not zero.
    #[must_use]
    pub fn is_rotated(self) -> bool {
        self.0 != 0
    }
}

impl fmt::Display for RotationAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

// =============================================================================
// Tests
// =============================================================================
