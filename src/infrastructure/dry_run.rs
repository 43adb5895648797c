// SPDX-License-Identifier: MPL-2.0
//! Headless adapter implementing every backend port without touching pixels.
//!
//! [`DryRunBackend`] serves a fixed photo list instead of a file dialog, a
//! fixed output directory instead of a directory chooser, and reports the
//! files an export would write instead of writing them.
//!
//! # Design Notes
//!
//! - Photo paths that do not exist on disk are skipped, like unreadable
//!   images in a real backend
//! - Preview sources are `<path>#left` / `<path>#right`; no cropped variants
//!   are produced
//! - The export checks that the output directory exists, then logs every
//!   planned output path

use crate::application::export::ExportPlan;
use crate::application::port::{
    BackendError, DirectoryPicker, ExportSummary, Exporter, PhotoRecord, PhotoSelector, Selection,
};
use crate::domain::photo::Side;
use std::future::Future;
use std::path::{Path, PathBuf};

/// Backend that plans but never performs image work.
#[derive(Debug, Clone, Default)]
pub struct DryRunBackend {
    photos: Vec<PathBuf>,
    output_dir: Option<PathBuf>,
}

impl DryRunBackend {
    /// Creates a backend serving `photos` as the selection result.
    #[must_use]
    pub fn new(photos: Vec<PathBuf>) -> Self {
        Self {
            photos,
            output_dir: None,
        }
    }

    /// Sets the directory returned by the directory chooser.
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    fn selection(&self) -> Result<Selection, BackendError> {
        if self.photos.is_empty() {
            return Err(BackendError::Cancelled("No files selected".into()));
        }

        let files: Vec<PhotoRecord> = self
            .photos
            .iter()
            .filter(|path| {
                let exists = path.is_file();
                if !exists {
                    tracing::warn!(path = %path.display(), "skipping unreadable photo");
                }
                exists
            })
            .map(|path| record_for(path))
            .collect();

        if files.is_empty() {
            return Err(BackendError::Failed("No valid images were processed".into()));
        }

        let last_dir = self
            .photos
            .first()
            .and_then(|path| path.parent())
            .filter(|dir| !dir.as_os_str().is_empty())
            .map(Path::to_path_buf);
        tracing::info!(photos = files.len(), "dry-run selection");
        Ok(Selection { files, last_dir })
    }

    fn run_export(plan: &ExportPlan) -> Result<ExportSummary, BackendError> {
        if !plan.output_dir().is_dir() {
            return Err(BackendError::Failed(format!(
                "Output directory does not exist: {}",
                plan.output_dir().display()
            )));
        }

        for item in plan.items() {
            tracing::info!(
                source = %item.source,
                side = %item.side,
                rotation = %item.rotation,
                remove_border = item.remove_border,
                target = %plan.output_path(item).display(),
                "planned half"
            );
        }

        Ok(ExportSummary {
            exported: plan.items().len(),
            message: format!(
                "Exported {} to {}",
                plan.summary(),
                plan.output_dir().display()
            ),
        })
    }
}

fn record_for(path: &Path) -> PhotoRecord {
    let path = path.to_string_lossy().into_owned();
    let preview = |side: Side| format!("{path}#{side}");
    PhotoRecord {
        left_preview_url: preview(Side::Left),
        right_preview_url: preview(Side::Right),
        path,
        ..PhotoRecord::default()
    }
}

impl PhotoSelector for DryRunBackend {
    fn select_photos(
        &self,
        _start_dir: Option<&Path>,
    ) -> impl Future<Output = Result<Selection, BackendError>> + Send {
        let result = self.selection();
        async move { result }
    }
}

impl DirectoryPicker for DryRunBackend {
    fn select_directory(
        &self,
        _start_dir: Option<&Path>,
    ) -> impl Future<Output = Result<PathBuf, BackendError>> + Send {
        let result = self
            .output_dir
            .clone()
            .ok_or_else(|| BackendError::Cancelled("No directory selected".into()));
        async move { result }
    }
}

impl Exporter for DryRunBackend {
    fn export(
        &self,
        plan: &ExportPlan,
    ) -> impl Future<Output = Result<ExportSummary, BackendError>> + Send {
        let result = Self::run_export(plan);
        async move { result }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::state::{ActivePhoto, HalfExport};
    use crate::domain::editing::RotationAngle;
    use crate::domain::photo::PhotoId;
    use std::fs;
    use tempfile::tempdir;

    fn plan(output_dir: &Path) -> ExportPlan {
        let half = HalfExport {
            included: true,
            rotation: RotationAngle::ZERO,
            remove_border: true,
        };
        ExportPlan::build(
            vec![ActivePhoto {
                photo: PhotoId::new("/roll/a.jpg"),
                left: half,
                right: HalfExport {
                    included: false,
                    ..half
                },
            }],
            output_dir,
        )
        .expect("one half")
    }

    #[tokio::test]
    async fn selection_skips_missing_files() {
        let dir = tempdir().expect("temp dir");
        let present = dir.path().join("a.jpg");
        fs::write(&present, b"").expect("write photo");

        let backend = DryRunBackend::new(vec![present.clone(), dir.path().join("missing.jpg")]);
        let selection = backend.select_photos(None).await.expect("one readable photo");

        assert_eq!(selection.files.len(), 1);
        let record = &selection.files[0];
        assert_eq!(record.path, present.to_string_lossy());
        assert!(record.left_preview_url.ends_with("#left"));
        assert_eq!(selection.last_dir.as_deref(), Some(dir.path()));
    }

    #[tokio::test]
    async fn selection_without_readable_files_fails() {
        let backend = DryRunBackend::new(vec![PathBuf::from("/definitely/not/here.jpg")]);
        assert_eq!(
            backend.select_photos(None).await,
            Err(BackendError::Failed("No valid images were processed".into()))
        );
        assert!(matches!(
            DryRunBackend::default().select_photos(None).await,
            Err(BackendError::Cancelled(_))
        ));
    }

    #[tokio::test]
    async fn directory_chooser_returns_configured_output() {
        let backend = DryRunBackend::default();
        assert_eq!(
            backend.select_directory(None).await,
            Err(BackendError::Cancelled("No directory selected".into()))
        );

        let backend = backend.with_output_dir("/exports");
        assert_eq!(
            backend.select_directory(None).await,
            Ok(PathBuf::from("/exports"))
        );
    }

    #[tokio::test]
    async fn export_reports_planned_halves() {
        let dir = tempdir().expect("temp dir");
        let summary = DryRunBackend::default()
            .export(&plan(dir.path()))
            .await
            .expect("output exists");

        assert_eq!(summary.exported, 1);
        assert!(summary.message.starts_with("Exported 1 half from 1 photo to "));
        assert_eq!(fs::read_dir(dir.path()).expect("list").count(), 0);
    }

    #[tokio::test]
    async fn export_into_missing_directory_fails() {
        let dir = tempdir().expect("temp dir");
        let result = DryRunBackend::default()
            .export(&plan(&dir.path().join("gone")))
            .await;
        assert!(matches!(result, Err(BackendError::Failed(msg)) if msg.starts_with("Output directory does not exist")));
    }
}
