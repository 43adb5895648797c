// SPDX-License-Identifier: MPL-2.0
//! Top-level messages, effects and runtime flags for the application.

use crate::application::export::ExportPlan;
use crate::application::port::{BackendError, ExportSummary, Selection};
use crate::application::query::PreviewKey;
use crate::domain::photo::HalfKey;
use std::path::PathBuf;
use std::time::Instant;

/// Messages consumed by `App::update`: user actions and backend completions.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Ask the backend for a new photo selection.
    SelectPhotos,
    PhotosSelected(Result<Selection, BackendError>),
    /// Ask the backend for an output directory.
    SelectOutputDirectory,
    OutputDirectorySelected(Result<PathBuf, BackendError>),
    /// Export every included half.
    Export,
    ExportCompleted(Result<ExportSummary, BackendError>),
    ToggleDelete(HalfKey),
    Rotate(HalfKey),
    SetBorderRemoval(HalfKey, bool),
    /// Show a half full-screen.
    OpenPreview(HalfKey),
    /// A key press while the full-screen preview has focus.
    PreviewKey(PreviewKey),
    ClosePreview,
    /// Periodic tick for notification expiry.
    Tick(Instant),
}

/// Backend work requested by `App::update`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SelectPhotos { start_dir: Option<PathBuf> },
    SelectOutputDirectory { start_dir: Option<PathBuf> },
    Export(ExportPlan),
}

/// What the host must do after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Run a backend command and feed its completion message back.
    Run(Command),
}

impl Effect {
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Effect::None)
    }
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Data directory override (for `state.cbor` and logs).
    /// Takes precedence over `HALF_FRAME_DATA_DIR`.
    pub data_dir: Option<PathBuf>,
    /// Config directory override (for `settings.toml`).
    /// Takes precedence over `HALF_FRAME_CONFIG_DIR`.
    pub config_dir: Option<PathBuf>,
}
