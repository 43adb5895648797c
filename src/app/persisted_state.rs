// SPDX-License-Identifier: MPL-2.0
//! Application state persistence using CBOR format.
//!
//! Holds the directories the dialogs should start in next time. This is
//! transient state, kept apart from the user-editable `settings.toml`.
//!
//! # Path Resolution
//!
//! 1. Use `load_from()`/`save_to()` with explicit path override
//! 2. `--data-dir` CLI argument or `HALF_FRAME_DATA_DIR` environment variable
//! 3. Falls back to platform-specific data directory

use super::paths;
use super::warning::StorageWarning;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// State file name within the app data directory.
const STATE_FILE: &str = "state.cbor";

/// Application state that persists across sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    /// Directory the photo selection dialog starts in.
    #[serde(default)]
    pub last_photo_directory: Option<PathBuf>,

    /// Output directory chosen last time.
    #[serde(default)]
    pub last_output_directory: Option<PathBuf>,
}

impl AppState {
    /// Loads application state from the default location.
    ///
    /// Returns a tuple of (state, optional_warning). If loading fails, returns
    /// default state with a warning explaining what went wrong.
    pub fn load() -> (Self, Option<StorageWarning>) {
        Self::load_from(None)
    }

    /// Loads application state from a custom directory.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<StorageWarning>) {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            return (Self::default(), None);
        }

        match fs::File::open(&path) {
            Ok(file) => {
                let reader = BufReader::new(file);
                match ciborium::from_reader(reader) {
                    Ok(state) => (state, None),
                    Err(err) => {
                        tracing::warn!(path = %path.display(), error = %err, "unreadable state file");
                        (Self::default(), Some(StorageWarning::StateCorrupted))
                    }
                }
            }
            Err(_) => (Self::default(), Some(StorageWarning::StateUnreadable)),
        }
    }

    /// Saves application state to the default location.
    ///
    /// Returns a warning if the save failed.
    pub fn save(&self) -> Option<StorageWarning> {
        self.save_to(None)
    }

    /// Saves application state to a custom directory.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<StorageWarning> {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return Some(StorageWarning::StatePathUnavailable);
        };

        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return Some(StorageWarning::StateDirectoryUnavailable);
            }
        }

        match fs::File::create(&path) {
            Ok(file) => {
                let writer = BufWriter::new(file);
                if ciborium::into_writer(self, writer).is_err() {
                    return Some(StorageWarning::StateNotWritten);
                }
                None
            }
            Err(_) => Some(StorageWarning::StateNotCreated),
        }
    }

    fn state_file_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(STATE_FILE);
            path
        })
    }

    /// Remembers the directory of a selected photo.
    ///
    /// Paths without a parent leave the stored directory unchanged.
    pub fn set_last_photo_directory_from_file(&mut self, file_path: &Path) {
        if let Some(parent) = file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.last_photo_directory = Some(parent.to_path_buf());
        }
    }
}
