// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the edit-state tracker,
//! the full-screen preview and the backend.
//!
//! The `App` struct owns the photo list and every piece of session state, and
//! translates messages into state changes or backend [`Command`]s. Hosts run
//! the commands (see [`runtime`]) and feed the completion messages back into
//! [`App::update`].

pub mod config;
mod message;
pub mod notifications;
pub mod operation;
pub mod paths;
pub mod persisted_state;
pub mod runtime;
mod update;
pub mod view;
mod warning;

pub use message::{Command, Effect, Flags, Message};
pub use warning::StorageWarning;

use crate::application::export::ExportPlan;
use crate::application::query::{PreviewCarousel, PreviewView};
use crate::application::state::HalfEditStateTracker;
use crate::domain::photo::{HalfKey, Photo, Side};
use crate::error::{Error, Result};
use notifications::{Notification, Severity};
use operation::BusyState;
use persisted_state::AppState;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Where session state is written after it changes.
#[derive(Debug, Clone, PartialEq, Eq)]
enum StatePersistence {
    Disabled,
    Enabled { data_dir: Option<PathBuf> },
}

/// Root application state.
pub struct App {
    config: config::Config,
    app_state: AppState,
    persistence: StatePersistence,
    photos: Vec<Photo>,
    tracker: HalfEditStateTracker,
    carousel: PreviewCarousel,
    output_dir: Option<PathBuf>,
    busy: BusyState,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("photos", &self.photos.len())
            .field("output_dir", &self.output_dir)
            .field("busy", &self.busy.current())
            .field("preview_open", &self.carousel.is_open())
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::with_config(config::Config::default())
    }
}

impl App {
    /// Loads settings and session state and builds the application.
    ///
    /// Problems reading either file are reported as warning notifications;
    /// the application then starts from defaults.
    #[must_use]
    pub fn new(flags: Flags) -> Self {
        let (config, config_warning) = config::load_with_override(flags.config_dir);
        let (app_state, state_warning) = AppState::load_from(flags.data_dir.clone());

        let mut app = Self::with_config(config);
        app.app_state = app_state;
        app.persistence = StatePersistence::Enabled {
            data_dir: flags.data_dir,
        };

        for warning in [config_warning, state_warning].into_iter().flatten() {
            app.push_warning(warning);
        }
        app
    }

    /// Builds an application from an explicit config without touching disk.
    #[must_use]
    pub fn with_config(config: config::Config) -> Self {
        let carousel = PreviewCarousel::new(config.preview_row_width());
        Self {
            config,
            app_state: AppState::default(),
            persistence: StatePersistence::Disabled,
            photos: Vec::new(),
            tracker: HalfEditStateTracker::new(),
            carousel,
            output_dir: None,
            busy: BusyState::default(),
            notifications: notifications::Manager::new(),
        }
    }

    /// Sets the output directory directly, e.g. from a command-line flag.
    pub fn set_output_dir(&mut self, dir: impl Into<PathBuf>) {
        let dir = dir.into();
        tracing::info!(dir = %dir.display(), "output directory set");
        self.app_state.last_output_directory = Some(dir.clone());
        self.output_dir = Some(dir);
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[must_use]
    pub fn config(&self) -> &config::Config {
        &self.config
    }

    #[must_use]
    pub fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Loaded photos in selection order.
    #[must_use]
    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    #[must_use]
    pub fn photo_at(&self, index: usize) -> Option<&Photo> {
        self.photos.get(index)
    }

    /// Key of one half of the photo at `index`.
    #[must_use]
    pub fn key_at(&self, index: usize, side: Side) -> Option<HalfKey> {
        self.photo_at(index).map(|photo| photo.key(side))
    }

    #[must_use]
    pub fn tracker(&self) -> &HalfEditStateTracker {
        &self.tracker
    }

    #[must_use]
    pub fn carousel(&self) -> &PreviewCarousel {
        &self.carousel
    }

    /// The half shown full-screen, if the preview is open.
    #[must_use]
    pub fn preview(&self) -> Option<PreviewView> {
        self.carousel.current()
    }

    #[must_use]
    pub fn output_dir(&self) -> Option<&Path> {
        self.output_dir.as_deref()
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    /// Returns true while a backend call is in flight.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy.is_busy()
    }

    /// Timeout applied to every backend call.
    #[must_use]
    pub fn backend_timeout(&self) -> Duration {
        self.config.backend_timeout()
    }

    /// Returns true when the export action should be enabled: an output
    /// directory is chosen, photos are loaded and nothing is in flight.
    #[must_use]
    pub fn can_export(&self) -> bool {
        self.output_dir.is_some() && !self.photos.is_empty() && !self.busy.is_busy()
    }

    /// Builds the export request for the current state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutputDirectoryNotSet`] before an output directory is
    /// chosen, and `NoActiveFiles` when every half is deleted or nothing is
    /// loaded.
    pub fn prepare_export(&self) -> Result<ExportPlan> {
        let output_dir = self.output_dir.as_ref().ok_or(Error::OutputDirectoryNotSet)?;
        let active = self.tracker.active_photos(&self.photos);
        Ok(ExportPlan::build(active, output_dir.clone())?)
    }

    // =========================================================================
    // Notifications & persistence
    // =========================================================================

    fn notify(&mut self, severity: Severity, message: impl Into<String>) {
        let notification = Notification::new(severity, message, Instant::now());
        tracing::debug!(%severity, message = notification.message(), "notification");
        self.notifications.push(notification);
    }

    fn push_warning(&mut self, warning: StorageWarning) {
        self.notify(Severity::Warning, warning.to_string());
    }

    fn persist_state(&mut self) {
        let StatePersistence::Enabled { data_dir } = &self.persistence else {
            return;
        };
        if let Some(warning) = self.app_state.save_to(data_dir.clone()) {
            tracing::warn!(?warning, "failed to save session state");
            self.push_warning(warning);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn default_app_is_idle_and_empty() {
        let app = App::default();
        assert!(app.photos().is_empty());
        assert!(!app.is_busy());
        assert!(!app.can_export());
        assert!(app.preview().is_none());
        assert_eq!(app.carousel().row_width(), config::DEFAULT_PREVIEW_ROW_WIDTH);
    }

    #[test]
    fn row_width_comes_from_config() {
        let mut config = config::Config::default();
        config.preview.row_width = Some(2);
        let app = App::with_config(config);
        assert_eq!(app.carousel().row_width(), 2);
    }

    #[test]
    fn prepare_export_requires_output_directory() {
        let app = App::default();
        assert_eq!(app.prepare_export(), Err(Error::OutputDirectoryNotSet));
    }

    #[test]
    fn prepare_export_with_no_photos_has_no_active_files() {
        let mut app = App::default();
        app.set_output_dir("/out");
        assert_eq!(
            app.prepare_export(),
            Err(Error::State(crate::domain::error::StateError::NoActiveFiles))
        );
    }

    #[test]
    fn new_reports_invalid_settings_as_warning() {
        let config_dir = tempdir().expect("temp dir");
        let data_dir = tempdir().expect("temp dir");
        fs::write(config_dir.path().join("settings.toml"), "preview = 3").expect("write");

        let app = App::new(Flags {
            config_dir: Some(config_dir.path().to_path_buf()),
            data_dir: Some(data_dir.path().to_path_buf()),
        });

        let messages: Vec<&str> = app.notifications().visible().map(Notification::message).collect();
        assert_eq!(messages, ["Settings file is invalid; using defaults"]);
        assert_eq!(app.config(), &config::Config::default());
    }

    #[test]
    fn new_restores_session_state() {
        let config_dir = tempdir().expect("temp dir");
        let data_dir = tempdir().expect("temp dir");
        let state = AppState {
            last_photo_directory: Some(PathBuf::from("/scans")),
            last_output_directory: None,
        };
        assert!(state.save_to(Some(data_dir.path().to_path_buf())).is_none());

        let app = App::new(Flags {
            config_dir: Some(config_dir.path().to_path_buf()),
            data_dir: Some(data_dir.path().to_path_buf()),
        });

        assert_eq!(app.app_state(), &state);
        assert_eq!(app.notifications().visible_count(), 0);
    }

    #[test]
    fn failed_state_save_names_the_cause() {
        let config_dir = tempdir().expect("temp dir");
        let blocker = config_dir.path().join("data");
        fs::write(&blocker, b"").expect("write blocker file");
        let mut app = App::new(Flags {
            config_dir: Some(config_dir.path().to_path_buf()),
            data_dir: Some(blocker),
        });

        app.update(Message::SelectPhotos);
        app.update(Message::PhotosSelected(Ok(crate::application::port::Selection {
            files: vec![crate::application::port::PhotoRecord {
                path: "/roll/a.jpg".into(),
                ..Default::default()
            }],
            last_dir: Some(PathBuf::from("/roll")),
        })));

        let warnings: Vec<&str> = app
            .notifications()
            .visible()
            .filter(|n| n.severity() == Severity::Warning)
            .map(Notification::message)
            .collect();
        assert_eq!(
            warnings,
            ["Session state was not saved: data directory could not be created"]
        );
    }
}
