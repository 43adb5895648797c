// SPDX-License-Identifier: MPL-2.0
//! Executes backend commands for a headless host.
//!
//! Exports are bounded by the configured timeout; an expired export
//! completes with [`BackendError::TimedOut`] so the busy lock is always
//! released by a completion message. Selection dialogs wait on the user and
//! are never bounded.

use super::{App, Command, Effect, Message};
use crate::application::port::{BackendError, DirectoryPicker, Exporter, PhotoSelector};
use std::future::Future;
use std::time::Duration;

/// Runs `command` against `backend` and returns its completion message.
///
/// `timeout` applies to exports only.
pub async fn execute<B>(backend: &B, command: Command, timeout: Duration) -> Message
where
    B: PhotoSelector + DirectoryPicker + Exporter,
{
    match command {
        Command::SelectPhotos { start_dir } => {
            Message::PhotosSelected(backend.select_photos(start_dir.as_deref()).await)
        }
        Command::SelectOutputDirectory { start_dir } => Message::OutputDirectorySelected(
            backend.select_directory(start_dir.as_deref()).await,
        ),
        Command::Export(plan) => {
            Message::ExportCompleted(bounded(timeout, backend.export(&plan)).await)
        }
    }
}

/// Feeds `message` into the app and runs every resulting command to completion.
pub async fn dispatch<B>(app: &mut App, backend: &B, message: Message)
where
    B: PhotoSelector + DirectoryPicker + Exporter,
{
    let mut effect = app.update(message);
    while let Effect::Run(command) = effect {
        let completion = execute(backend, command, app.backend_timeout()).await;
        effect = app.update(completion);
    }
}

async fn bounded<T>(
    timeout: Duration,
    call: impl Future<Output = Result<T, BackendError>>,
) -> Result<T, BackendError> {
    match tokio::time::timeout(timeout, call).await {
        Ok(result) => result,
        Err(_) => {
            tracing::warn!(timeout_secs = timeout.as_secs(), "backend call timed out");
            Err(BackendError::TimedOut(timeout))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::export::ExportPlan;
    use crate::application::port::{ExportSummary, PhotoRecord, Selection};
    use std::path::{Path, PathBuf};

    /// Backend whose export never finishes.
    struct StalledExport;

    impl PhotoSelector for StalledExport {
        fn select_photos(
            &self,
            _start_dir: Option<&Path>,
        ) -> impl Future<Output = Result<Selection, BackendError>> + Send {
            async {
                Ok(Selection {
                    files: vec![PhotoRecord {
                        path: "/roll/a.jpg".into(),
                        ..PhotoRecord::default()
                    }],
                    last_dir: None,
                })
            }
        }
    }

    impl DirectoryPicker for StalledExport {
        fn select_directory(
            &self,
            start_dir: Option<&Path>,
        ) -> impl Future<Output = Result<PathBuf, BackendError>> + Send {
            let chosen = start_dir.map_or_else(|| PathBuf::from("/out"), Path::to_path_buf);
            async move { Ok(chosen) }
        }
    }

    impl Exporter for StalledExport {
        fn export(
            &self,
            _plan: &ExportPlan,
        ) -> impl Future<Output = Result<ExportSummary, BackendError>> + Send {
            std::future::pending()
        }
    }

    #[tokio::test]
    async fn execute_maps_selection_to_completion_message() {
        let message = execute(
            &StalledExport,
            Command::SelectOutputDirectory {
                start_dir: Some(PathBuf::from("/exports")),
            },
            Duration::from_secs(1),
        )
        .await;
        assert!(matches!(
            message,
            Message::OutputDirectorySelected(Ok(dir)) if dir == Path::new("/exports")
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn timeout_releases_busy_lock() {
        let mut app = App::default();
        dispatch(&mut app, &StalledExport, Message::SelectPhotos).await;
        dispatch(&mut app, &StalledExport, Message::SelectOutputDirectory).await;
        assert!(app.can_export());

        dispatch(&mut app, &StalledExport, Message::Export).await;

        assert!(!app.is_busy());
        let timeout_secs = app.backend_timeout().as_secs();
        assert_eq!(
            app.notifications().latest_error().map(|n| n.message().to_string()),
            Some(format!("Operation timed out after {timeout_secs}s"))
        );
    }

    /// Directory chooser where the user takes longer than the export timeout.
    struct SlowChooser;

    impl PhotoSelector for SlowChooser {
        fn select_photos(
            &self,
            _start_dir: Option<&Path>,
        ) -> impl Future<Output = Result<Selection, BackendError>> + Send {
            async {
                tokio::time::sleep(Duration::from_secs(150)).await;
                Ok(Selection {
                    files: vec![PhotoRecord {
                        path: "/roll/a.jpg".into(),
                        ..PhotoRecord::default()
                    }],
                    last_dir: None,
                })
            }
        }
    }

    impl DirectoryPicker for SlowChooser {
        fn select_directory(
            &self,
            _start_dir: Option<&Path>,
        ) -> impl Future<Output = Result<PathBuf, BackendError>> + Send {
            async {
                tokio::time::sleep(Duration::from_secs(150)).await;
                Ok(PathBuf::from("/chosen"))
            }
        }
    }

    impl Exporter for SlowChooser {
        fn export(
            &self,
            _plan: &ExportPlan,
        ) -> impl Future<Output = Result<ExportSummary, BackendError>> + Send {
            std::future::pending()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn slow_dialogs_are_not_timed_out() {
        let mut app = App::default();
        assert!(app.backend_timeout() < Duration::from_secs(150));

        dispatch(&mut app, &SlowChooser, Message::SelectPhotos).await;
        dispatch(&mut app, &SlowChooser, Message::SelectOutputDirectory).await;

        assert_eq!(app.photos().len(), 1);
        assert_eq!(app.output_dir(), Some(Path::new("/chosen")));
        assert!(app.notifications().latest_error().is_none());
        assert!(!app.is_busy());
    }
}
