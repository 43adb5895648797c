// SPDX-License-Identifier: MPL-2.0
//! Backend collaborator ports.
//!
//! The backend owns everything that touches files and pixels: file dialogs,
//! splitting, border detection and writing the exported halves. The core
//! talks to it through the three traits below.

use crate::application::export::ExportPlan;
use crate::domain::photo::{CropCoords, HalfPreview, Photo, PhotoId};
use std::fmt;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::time::Duration;

// =============================================================================
// BackendError
// =============================================================================

/// Errors reported by a backend collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// The user dismissed a dialog without choosing anything.
    Cancelled(String),

    /// The backend failed; the message is shown as-is.
    Failed(String),

    /// The call did not complete within the configured timeout.
    TimedOut(Duration),
}

impl BackendError {
    /// Message shown to the user.
    #[must_use]
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendError::Cancelled(msg) | BackendError::Failed(msg) => f.write_str(msg),
            BackendError::TimedOut(after) => {
                write!(f, "Operation timed out after {}s", after.as_secs())
            }
        }
    }
}

impl std::error::Error for BackendError {}

// =============================================================================
// Selection payloads
// =============================================================================

/// One photo as returned by the selection collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PhotoRecord {
    pub path: String,
    pub left_preview_url: String,
    pub right_preview_url: String,
    pub left_cropped_url: Option<String>,
    pub right_cropped_url: Option<String>,
    pub left_crop_coords: Option<CropCoords>,
    pub right_crop_coords: Option<CropCoords>,
}

impl From<PhotoRecord> for Photo {
    fn from(record: PhotoRecord) -> Self {
        let half = |url: String, cropped: Option<String>, coords: Option<CropCoords>| HalfPreview {
            original_url: url,
            cropped_url: cropped,
            crop_coords: coords,
        };
        Photo::new(
            PhotoId::new(record.path),
            half(
                record.left_preview_url,
                record.left_cropped_url,
                record.left_crop_coords,
            ),
            half(
                record.right_preview_url,
                record.right_cropped_url,
                record.right_crop_coords,
            ),
        )
    }
}

/// Result of a photo selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    /// Selected photos in the order the user picked them.
    pub files: Vec<PhotoRecord>,
    /// Directory to start the next selection from.
    pub last_dir: Option<PathBuf>,
}

/// Result of a successful export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// Number of halves written.
    pub exported: usize,
    /// Message shown to the user.
    pub message: String,
}

// =============================================================================
// Ports
// =============================================================================

/// Lets the user pick photos and produces their half previews.
pub trait PhotoSelector {
    /// Opens the selection, starting in `start_dir` when given.
    fn select_photos(
        &self,
        start_dir: Option<&Path>,
    ) -> impl Future<Output = Result<Selection, BackendError>> + Send;
}

/// Lets the user choose the output directory.
pub trait DirectoryPicker {
    /// Opens the directory chooser, starting in `start_dir` when given.
    fn select_directory(
        &self,
        start_dir: Option<&Path>,
    ) -> impl Future<Output = Result<PathBuf, BackendError>> + Send;
}

/// Writes the halves listed in an export plan.
pub trait Exporter {
    /// Splits, rotates, crops and writes every item of `plan`.
    fn export(&self, plan: &ExportPlan)
        -> impl Future<Output = Result<ExportSummary, BackendError>> + Send;
}
