// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::notifications::Severity;
use super::operation::Operation;
use super::{App, Command, Effect, Message};
use crate::application::port::{BackendError, ExportSummary, Selection};
use crate::application::query::{KeyOutcome, PreviewKey};
use crate::domain::error::StateError;
use crate::domain::photo::{HalfKey, Photo, PhotoId};
use crate::error::Error;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

impl App {
    /// Applies one message and returns the backend work it requires.
    pub fn update(&mut self, message: Message) -> Effect {
        match message {
            Message::SelectPhotos => self.begin(
                Operation::LoadPhotos,
                Command::SelectPhotos {
                    start_dir: self.app_state.last_photo_directory.clone(),
                },
            ),
            Message::PhotosSelected(result) => {
                if self.busy.finish(Operation::LoadPhotos) {
                    self.handle_photos_selected(result);
                }
                Effect::None
            }
            Message::SelectOutputDirectory => self.begin(
                Operation::SelectOutput,
                Command::SelectOutputDirectory {
                    start_dir: self
                        .output_dir
                        .clone()
                        .or_else(|| self.app_state.last_output_directory.clone()),
                },
            ),
            Message::OutputDirectorySelected(result) => {
                if self.busy.finish(Operation::SelectOutput) {
                    self.handle_output_selected(result);
                }
                Effect::None
            }
            Message::Export => self.handle_export_requested(),
            Message::ExportCompleted(result) => {
                if self.busy.finish(Operation::Export) {
                    self.handle_export_completed(result);
                }
                Effect::None
            }
            Message::ToggleDelete(key) => {
                match self.tracker.toggle_deleted(&key) {
                    Ok(change) if change.photo_fully_deleted => {
                        tracing::info!(photo = %key.photo(), "both halves deleted");
                    }
                    Ok(_) => {}
                    Err(err) => self.report_state_error(&err),
                }
                Effect::None
            }
            Message::Rotate(key) => {
                if let Err(err) = self.tracker.rotate(&key) {
                    self.report_state_error(&err);
                }
                Effect::None
            }
            Message::SetBorderRemoval(key, enabled) => {
                if let Err(err) = self.tracker.set_border_removal(&key, enabled) {
                    self.report_state_error(&err);
                }
                Effect::None
            }
            Message::OpenPreview(key) => {
                self.handle_open_preview(&key);
                Effect::None
            }
            Message::PreviewKey(key) => {
                self.handle_preview_key(key);
                Effect::None
            }
            Message::ClosePreview => {
                self.carousel.close();
                Effect::None
            }
            Message::Tick(now) => {
                self.notifications.tick(now);
                Effect::None
            }
        }
    }

    fn begin(&mut self, operation: Operation, command: Command) -> Effect {
        if self.busy.try_begin(operation) {
            tracing::debug!(%operation, "backend operation started");
            Effect::Run(command)
        } else {
            Effect::None
        }
    }

    fn handle_photos_selected(&mut self, result: Result<Selection, BackendError>) {
        let selection = match result {
            Ok(selection) => selection,
            Err(err) => {
                self.report_backend_error(&err);
                return;
            }
        };
        if selection.files.is_empty() {
            tracing::debug!("empty photo selection ignored");
            return;
        }

        let photos = dedupe_photos(selection.files.into_iter().map(Photo::from));
        tracing::info!(photos = photos.len(), "photos loaded");

        self.tracker.reset(&photos);
        self.carousel.set_files(photos.clone());
        self.photos = photos;

        match selection.last_dir {
            Some(dir) => self.app_state.last_photo_directory = Some(dir),
            None => {
                if let Some(first) = self.photos.first() {
                    let path = Path::new(first.id().as_str()).to_path_buf();
                    self.app_state.set_last_photo_directory_from_file(&path);
                }
            }
        }
        self.persist_state();
    }

    fn handle_output_selected(&mut self, result: Result<PathBuf, BackendError>) {
        match result {
            Ok(dir) => {
                self.set_output_dir(dir);
                self.persist_state();
            }
            Err(err) => self.report_backend_error(&err),
        }
    }

    fn handle_export_requested(&mut self) -> Effect {
        if let Some(running) = self.busy.current() {
            tracing::debug!(%running, "export ignored while busy");
            return Effect::None;
        }
        match self.prepare_export() {
            Ok(plan) => {
                tracing::info!(
                    output_dir = %plan.output_dir().display(),
                    summary = %plan.summary(),
                    "export requested"
                );
                self.begin(Operation::Export, Command::Export(plan))
            }
            Err(Error::State(err)) if err.is_invariant_violation() => {
                self.report_state_error(&err);
                Effect::None
            }
            Err(err) => {
                tracing::warn!(error = %err, "export refused");
                self.notify(Severity::Error, err.to_string());
                Effect::None
            }
        }
    }

    fn handle_export_completed(&mut self, result: Result<ExportSummary, BackendError>) {
        match result {
            Ok(summary) => {
                tracing::info!(exported = summary.exported, "export finished");
                self.notify(Severity::Success, summary.message);
            }
            Err(err) => self.report_backend_error(&err),
        }
    }

    fn handle_open_preview(&mut self, key: &HalfKey) {
        let rotation = self.tracker.rotation(key);
        if let Err(err) = self.carousel.open(key.photo(), key.side(), rotation) {
            self.report_state_error(&err);
        }
    }

    fn handle_preview_key(&mut self, key: PreviewKey) {
        match self.carousel.handle_key(key, &self.tracker) {
            KeyOutcome::Moved(view) => {
                tracing::trace!(position = view.position, half = %view.key, "preview moved");
            }
            KeyOutcome::Dismissed | KeyOutcome::Unchanged => {}
        }
    }

    fn report_backend_error(&mut self, err: &BackendError) {
        match err {
            BackendError::Cancelled(_) => {
                tracing::debug!(%err, "backend call cancelled");
                self.notify(Severity::Info, err.user_message());
            }
            BackendError::Failed(_) | BackendError::TimedOut(_) => {
                tracing::warn!(%err, "backend call failed");
                self.notify(Severity::Error, err.user_message());
            }
        }
    }

    fn report_state_error(&mut self, err: &StateError) {
        if err.is_invariant_violation() {
            tracing::error!(%err, "edit state invariant violated");
        } else {
            self.notify(Severity::Error, err.to_string());
        }
    }
}

/// Drops repeated paths, keeping the first occurrence.
fn dedupe_photos(photos: impl IntoIterator<Item = Photo>) -> Vec<Photo> {
    let mut seen: HashSet<PhotoId> = HashSet::new();
    photos
        .into_iter()
        .filter(|photo| {
            let fresh = seen.insert(photo.id().clone());
            if !fresh {
                tracing::warn!(path = %photo.id(), "duplicate photo dropped from selection");
            }
            fresh
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::notifications::Notification;
    use crate::application::port::PhotoRecord;
    use crate::application::query::Direction;
    use crate::domain::photo::Side;
    use std::time::{Duration, Instant};

    fn record(path: &str) -> PhotoRecord {
        PhotoRecord {
            path: path.into(),
            left_preview_url: format!("{path}#left"),
            right_preview_url: format!("{path}#right"),
            ..PhotoRecord::default()
        }
    }

    fn loaded_app(paths: &[&str]) -> App {
        let mut app = App::default();
        assert!(matches!(app.update(Message::SelectPhotos), Effect::Run(_)));
        app.update(Message::PhotosSelected(Ok(Selection {
            files: paths.iter().map(|path| record(path)).collect(),
            last_dir: None,
        })));
        app
    }

    fn key(app: &App, index: usize, side: Side) -> HalfKey {
        app.key_at(index, side).expect("photo loaded")
    }

    fn messages(app: &App) -> Vec<&str> {
        app.notifications().visible().map(Notification::message).collect()
    }

    #[test]
    fn select_photos_starts_from_last_directory() {
        let mut app = App::default();
        app.app_state.last_photo_directory = Some(PathBuf::from("/scans"));
        assert_eq!(
            app.update(Message::SelectPhotos),
            Effect::Run(Command::SelectPhotos {
                start_dir: Some(PathBuf::from("/scans"))
            })
        );
        assert!(app.is_busy());
    }

    #[test]
    fn reentrant_selection_is_ignored_while_busy() {
        let mut app = App::default();
        assert!(!app.update(Message::SelectPhotos).is_none());
        assert!(app.update(Message::SelectPhotos).is_none());
        assert!(app.update(Message::SelectOutputDirectory).is_none());
        assert!(app.update(Message::Export).is_none());
    }

    #[test]
    fn loading_registers_photos_and_records_directory() {
        let app = loaded_app(&["/roll/a.jpg", "/roll/b.jpg"]);
        assert!(!app.is_busy());
        assert_eq!(app.photos().len(), 2);
        assert_eq!(app.tracker().len(), 2);
        assert_eq!(app.carousel().total_positions(), 4);
        assert_eq!(
            app.app_state().last_photo_directory,
            Some(PathBuf::from("/roll"))
        );
    }

    #[test]
    fn duplicate_paths_are_dropped_on_load() {
        let app = loaded_app(&["a.jpg", "b.jpg", "a.jpg"]);
        let ids: Vec<&str> = app.photos().iter().map(|p| p.id().as_str()).collect();
        assert_eq!(ids, ["a.jpg", "b.jpg"]);
    }

    #[test]
    fn new_selection_resets_edits_and_closes_preview() {
        let mut app = loaded_app(&["a.jpg", "b.jpg"]);
        let left = key(&app, 0, Side::Left);
        app.update(Message::ToggleDelete(left.clone()));
        app.update(Message::OpenPreview(left.clone()));
        assert!(app.preview().is_some());

        app.update(Message::SelectPhotos);
        app.update(Message::PhotosSelected(Ok(Selection {
            files: vec![record("a.jpg")],
            last_dir: Some(PathBuf::from("/elsewhere")),
        })));

        assert!(!app.tracker().is_deleted(&left));
        assert!(app.preview().is_none());
        assert_eq!(
            app.app_state().last_photo_directory,
            Some(PathBuf::from("/elsewhere"))
        );
    }

    #[test]
    fn empty_or_failed_selection_keeps_current_photos() {
        let mut app = loaded_app(&["a.jpg"]);

        app.update(Message::SelectPhotos);
        app.update(Message::PhotosSelected(Ok(Selection::default())));
        assert_eq!(app.photos().len(), 1);

        app.update(Message::SelectPhotos);
        app.update(Message::PhotosSelected(Err(BackendError::Failed(
            "No valid images were processed".into(),
        ))));
        assert_eq!(app.photos().len(), 1);
        assert_eq!(messages(&app), ["No valid images were processed"]);
        assert!(!app.is_busy());
    }

    #[test]
    fn stale_completion_is_discarded() {
        let mut app = App::default();
        app.update(Message::PhotosSelected(Ok(Selection {
            files: vec![record("a.jpg")],
            last_dir: None,
        })));
        assert!(app.photos().is_empty());
    }

    #[test]
    fn edit_messages_update_tracker() {
        let mut app = loaded_app(&["a.jpg"]);
        let right = key(&app, 0, Side::Right);

        app.update(Message::Rotate(right.clone()));
        app.update(Message::SetBorderRemoval(right.clone(), false));
        app.update(Message::ToggleDelete(right.clone()));

        let state = app.tracker().state(&right).expect("registered");
        assert_eq!(state.rotation.degrees(), 270);
        assert!(!state.remove_border);
        assert!(state.deleted);
    }

    #[test]
    fn unknown_key_changes_nothing_and_shows_nothing() {
        let mut app = loaded_app(&["a.jpg"]);
        let unknown = PhotoId::new("ghost.jpg").half(Side::Left);

        app.update(Message::ToggleDelete(unknown.clone()));
        app.update(Message::OpenPreview(unknown));

        assert_eq!(app.tracker().active_half_count(), 2);
        assert!(app.preview().is_none());
        assert!(messages(&app).is_empty());
    }

    #[test]
    fn preview_opens_with_tracked_rotation_and_navigates() {
        let mut app = loaded_app(&["a.jpg", "b.jpg"]);
        let b_left = key(&app, 1, Side::Left);
        app.update(Message::Rotate(b_left.clone()));
        app.update(Message::Rotate(key(&app, 0, Side::Left)));

        app.update(Message::OpenPreview(b_left));
        let view = app.preview().expect("open");
        assert_eq!(view.position, 2);
        assert_eq!(view.rotation.degrees(), 270);

        app.update(Message::PreviewKey(PreviewKey::Arrow(Direction::Right)));
        app.update(Message::PreviewKey(PreviewKey::Arrow(Direction::Right)));
        let view = app.preview().expect("still open");
        assert_eq!(view.position, 0);
        assert_eq!(view.rotation.degrees(), 270);

        app.update(Message::PreviewKey(PreviewKey::Escape));
        assert!(app.preview().is_none());
        app.update(Message::ClosePreview);
        assert!(app.preview().is_none());
    }

    #[test]
    fn export_without_output_directory_is_refused() {
        let mut app = loaded_app(&["a.jpg"]);
        assert!(app.update(Message::Export).is_none());
        assert!(!app.is_busy());
        assert_eq!(messages(&app), ["Please select an output directory first"]);
    }

    #[test]
    fn export_with_everything_deleted_is_refused() {
        let mut app = loaded_app(&["a.jpg"]);
        app.set_output_dir("/out");
        app.update(Message::ToggleDelete(key(&app, 0, Side::Left)));
        app.update(Message::ToggleDelete(key(&app, 0, Side::Right)));

        assert!(app.can_export());
        assert!(app.update(Message::Export).is_none());
        assert_eq!(messages(&app), [StateError::NoActiveFiles.to_string()]);
    }

    #[test]
    fn export_runs_plan_and_reports_summary() {
        let mut app = loaded_app(&["a.jpg", "b.jpg"]);
        app.update(Message::SelectOutputDirectory);
        app.update(Message::OutputDirectorySelected(Ok(PathBuf::from("/out"))));
        app.update(Message::ToggleDelete(key(&app, 0, Side::Right)));

        let Effect::Run(Command::Export(plan)) = app.update(Message::Export) else {
            panic!("export should run");
        };
        assert_eq!(plan.items().len(), 3);
        assert!(!app.can_export());

        app.update(Message::ExportCompleted(Ok(ExportSummary {
            exported: 3,
            message: "Exported 3 halves".into(),
        })));
        assert!(app.can_export());
        assert_eq!(messages(&app), ["Exported 3 halves"]);
    }

    #[test]
    fn cancelled_directory_choice_keeps_previous_output() {
        let mut app = App::default();
        app.set_output_dir("/out");
        let Effect::Run(command) = app.update(Message::SelectOutputDirectory) else {
            panic!("dialog should open");
        };
        assert_eq!(
            command,
            Command::SelectOutputDirectory {
                start_dir: Some(PathBuf::from("/out"))
            }
        );

        app.update(Message::OutputDirectorySelected(Err(BackendError::Cancelled(
            "No directory selected".into(),
        ))));
        assert_eq!(app.output_dir(), Some(Path::new("/out")));
        assert_eq!(messages(&app), ["No directory selected"]);
    }

    #[test]
    fn error_notifications_expire_on_tick() {
        let mut app = loaded_app(&["a.jpg"]);
        app.update(Message::Export);
        assert_eq!(app.notifications().visible_count(), 1);

        app.update(Message::Tick(Instant::now() + Duration::from_secs(6)));
        assert_eq!(app.notifications().visible_count(), 0);
    }
}
