// SPDX-License-Identifier: MPL-2.0
//! Non-fatal problems reading or writing the settings and session state files.

use std::fmt;

/// A settings or session-state file problem shown as a warning notification.
///
/// The app keeps running with defaults (on load) or in-memory state (on save).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageWarning {
    /// `settings.toml` exists but could not be read or parsed.
    ConfigInvalid,
    /// `state.cbor` exists but is not valid CBOR.
    StateCorrupted,
    /// `state.cbor` exists but could not be opened.
    StateUnreadable,
    /// No data directory could be resolved for `state.cbor`.
    StatePathUnavailable,
    /// The data directory could not be created.
    StateDirectoryUnavailable,
    /// `state.cbor` could not be created.
    StateNotCreated,
    /// `state.cbor` was created but encoding into it failed.
    StateNotWritten,
}

impl fmt::Display for StorageWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            StorageWarning::ConfigInvalid => "Settings file is invalid; using defaults",
            StorageWarning::StateCorrupted => "Saved session state is corrupted; starting fresh",
            StorageWarning::StateUnreadable => "Saved session state could not be read",
            StorageWarning::StatePathUnavailable => {
                "Session state was not saved: no data directory available"
            }
            StorageWarning::StateDirectoryUnavailable => {
                "Session state was not saved: data directory could not be created"
            }
            StorageWarning::StateNotCreated => {
                "Session state was not saved: state file could not be created"
            }
            StorageWarning::StateNotWritten => {
                "Session state was not saved: writing the state file failed"
            }
        };
        f.write_str(text)
    }
}
