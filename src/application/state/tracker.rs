// SPDX-License-Identifier: MPL-2.0
//! Per-half edit state for the current photo selection.
//!
//! [`HalfEditStateTracker`] is the single owner of every deleted flag,
//! rotation and border-removal choice. Rendering code reads through its
//! accessors and mutates only through its methods, so the "both halves
//! deleted" rule is computed in one place.
//!
//! Values are stored sparsely: a registered half with no entry in a map has
//! the default value for that field (see [`HalfEditState::default`]).

use crate::application::query::carousel::RotationSource;
use crate::domain::editing::{HalfEditState, RotationAngle, DEFAULT_REMOVE_BORDER};
use crate::domain::error::StateError;
use crate::domain::photo::{HalfKey, Photo, PhotoId, Side};
use std::collections::{HashMap, HashSet};

/// Outcome of toggling a half's deleted flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeletionChange {
    /// New deleted flag of the toggled half.
    pub deleted: bool,
    /// Whether both halves of the owning photo are now deleted.
    pub photo_fully_deleted: bool,
}

/// Export parameters of one half of an active photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HalfExport {
    pub included: bool,
    pub rotation: RotationAngle,
    pub remove_border: bool,
}

/// A photo with at least one half still included in the export set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivePhoto {
    pub photo: PhotoId,
    pub left: HalfExport,
    pub right: HalfExport,
}

impl ActivePhoto {
    /// Export parameters of one side.
    #[must_use]
    pub fn half(&self, side: Side) -> &HalfExport {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// Number of halves that will be written.
    #[must_use]
    pub fn included_count(&self) -> usize {
        usize::from(self.left.included) + usize::from(self.right.included)
    }
}

/// Owner of the deleted / rotation / border-removal state of every half.
#[derive(Debug, Clone, Default)]
pub struct HalfEditStateTracker {
    /// Photos of the current selection; both halves of each are valid keys.
    registered: HashSet<PhotoId>,
    deleted: HashSet<HalfKey>,
    rotations: HashMap<HalfKey, RotationAngle>,
    border_removal: HashMap<HalfKey, bool>,
}

impl HalfEditStateTracker {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole state with fresh defaults for `photos`.
    ///
    /// Nothing from the previous selection survives, even for paths that
    /// appear in both.
    pub fn reset(&mut self, photos: &[Photo]) {
        self.deleted.clear();
        self.rotations.clear();
        self.border_removal.clear();
        self.registered.clear();
        self.registered
            .extend(photos.iter().map(|photo| photo.id().clone()));
        tracing::debug!(photos = self.registered.len(), "edit state reset");
    }

    /// Number of registered photos.
    #[must_use]
    pub fn len(&self) -> usize {
        self.registered.len()
    }

    /// Returns true if no photo is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registered.is_empty()
    }

    /// Returns true if the half belongs to the current selection.
    #[must_use]
    pub fn contains(&self, key: &HalfKey) -> bool {
        self.registered.contains(key.photo())
    }

    fn ensure_known(&self, key: &HalfKey) -> Result<(), StateError> {
        if self.contains(key) {
            Ok(())
        } else {
            Err(StateError::InvalidKey(key.clone()))
        }
    }

    /// Full edit state of a half, with defaults filled in for unset fields.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::InvalidKey`] if the half is not registered.
    pub fn state(&self, key: &HalfKey) -> Result<HalfEditState, StateError> {
        self.ensure_known(key)?;
        Ok(HalfEditState {
            deleted: self.deleted.contains(key),
            rotation: self.rotation(key),
            remove_border: self.removes_border(key),
        })
    }

    /// Deleted flag of a half (false when unknown).
    #[must_use]
    pub fn is_deleted(&self, key: &HalfKey) -> bool {
        self.deleted.contains(key)
    }

    /// Rotation of a half (0° when unset).
    #[must_use]
    pub fn rotation(&self, key: &HalfKey) -> RotationAngle {
        self.rotations.get(key).copied().unwrap_or_default()
    }

    /// Border-removal flag of a half (enabled when unset).
    #[must_use]
    pub fn removes_border(&self, key: &HalfKey) -> bool {
        self.border_removal
            .get(key)
            .copied()
            .unwrap_or(DEFAULT_REMOVE_BORDER)
    }

    /// Returns true if both halves of the photo are deleted.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::InvalidKey`] if the photo is not registered.
    pub fn is_photo_fully_deleted(&self, photo: &PhotoId) -> Result<bool, StateError> {
        self.ensure_known(&photo.half(Side::Left))?;
        Ok(Side::BOTH
            .iter()
            .all(|side| self.deleted.contains(&photo.half(*side))))
    }

    /// Flips the deleted flag of a half.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::InvalidKey`] if the half is not registered.
    pub fn toggle_deleted(&mut self, key: &HalfKey) -> Result<DeletionChange, StateError> {
        self.ensure_known(key)?;

        let deleted = if self.deleted.remove(key) {
            false
        } else {
            self.deleted.insert(key.clone());
            true
        };
        let photo_fully_deleted = deleted && self.deleted.contains(&key.sibling());

        tracing::debug!(%key, deleted, photo_fully_deleted, "toggled deletion");
        Ok(DeletionChange {
            deleted,
            photo_fully_deleted,
        })
    }

    /// Turns a half 90° counter-clockwise and returns the new angle.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::InvalidKey`] if the half is not registered.
    pub fn rotate(&mut self, key: &HalfKey) -> Result<RotationAngle, StateError> {
        self.ensure_known(key)?;
        let angle = self.rotation(key).rotate_counterclockwise();
        if angle.is_rotated() {
            self.rotations.insert(key.clone(), angle);
        } else {
            self.rotations.remove(key);
        }
        tracing::debug!(%key, degrees = angle.degrees(), "rotated half");
        Ok(angle)
    }

    /// Sets whether the border-cropped variant is used for a half.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::InvalidKey`] if the half is not registered.
    pub fn set_border_removal(&mut self, key: &HalfKey, enabled: bool) -> Result<(), StateError> {
        self.ensure_known(key)?;
        if enabled == DEFAULT_REMOVE_BORDER {
            self.border_removal.remove(key);
        } else {
            self.border_removal.insert(key.clone(), enabled);
        }
        Ok(())
    }

    /// Photos that still have at least one half to export, in input order.
    ///
    /// Photos not registered with the tracker are treated as unedited.
    #[must_use]
    pub fn active_photos(&self, photos: &[Photo]) -> Vec<ActivePhoto> {
        photos
            .iter()
            .filter_map(|photo| {
                let half = |side| {
                    let key = photo.key(side);
                    HalfExport {
                        included: !self.is_deleted(&key),
                        rotation: self.rotation(&key),
                        remove_border: self.removes_border(&key),
                    }
                };
                let left = half(Side::Left);
                let right = half(Side::Right);
                (left.included || right.included).then(|| ActivePhoto {
                    photo: photo.id().clone(),
                    left,
                    right,
                })
            })
            .collect()
    }

    /// Number of halves not marked deleted.
    #[must_use]
    pub fn active_half_count(&self) -> usize {
        self.registered.len() * 2 - self.deleted.len()
    }
}

impl RotationSource for HalfEditStateTracker {
    fn rotation_of(&self, key: &HalfKey) -> RotationAngle {
        self.rotation(key)
    }
}
