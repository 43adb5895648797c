// SPDX-License-Identifier: MPL-2.0
//! Edit intent recorded for a single half.

use super::newtypes::RotationAngle;

/// Border removal is requested for every half until the user opts out.
pub const DEFAULT_REMOVE_BORDER: bool = true;

/// What the user wants done with one half at export time.
///
/// No pixels are touched here; this only records intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HalfEditState {
    /// Half is excluded from export.
    pub deleted: bool,
    /// Rotation to apply when exporting.
    pub rotation: RotationAngle,
    /// Use the border-cropped variant instead of the original.
    pub remove_border: bool,
}

impl Default for HalfEditState {
    fn default() -> Self {
        Self {
            deleted: false,
            rotation: RotationAngle::ZERO,
            remove_border: DEFAULT_REMOVE_BORDER,
        }
    }
}

impl HalfEditState {
    /// Returns true if the half still belongs to the export set.
    #[must_use]
    pub fn is_included(&self) -> bool {
        !self.deleted
    }
}
