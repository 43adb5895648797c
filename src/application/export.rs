// SPDX-License-Identifier: MPL-2.0
//! Export request assembly.
//!
//! Turns the tracker's active set into the list of halves the backend must
//! write, with the output file name of each one. Every included half of
//! `IMG_0042.jpg` is written as `IMG_0042_l.jpg` / `IMG_0042_r.jpg` inside the
//! chosen output directory.

use crate::application::state::ActivePhoto;
use crate::domain::editing::RotationAngle;
use crate::domain::error::StateError;
use crate::domain::photo::{PhotoId, Side};
use std::path::{Path, PathBuf};

/// One half to be written by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportItem {
    pub source: PhotoId,
    pub side: Side,
    pub rotation: RotationAngle,
    pub remove_border: bool,
    /// File name of the written half, relative to the output directory.
    pub output_name: String,
}

/// Everything the export collaborator needs for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPlan {
    output_dir: PathBuf,
    photos: Vec<ActivePhoto>,
    items: Vec<ExportItem>,
}

impl ExportPlan {
    /// Builds the plan for the given active photos.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::NoActiveFiles`] when there is nothing to write.
    pub fn build(active: Vec<ActivePhoto>, output_dir: impl Into<PathBuf>) -> Result<Self, StateError> {
        let items: Vec<ExportItem> = active
            .iter()
            .flat_map(|photo| {
                Side::BOTH.into_iter().filter_map(move |side| {
                    let half = photo.half(side);
                    half.included.then(|| ExportItem {
                        source: photo.photo.clone(),
                        side,
                        rotation: half.rotation,
                        remove_border: half.remove_border,
                        output_name: output_file_name(photo.photo.as_str(), side),
                    })
                })
            })
            .collect();

        if items.is_empty() {
            return Err(StateError::NoActiveFiles);
        }

        Ok(Self {
            output_dir: output_dir.into(),
            photos: active,
            items,
        })
    }

    /// Directory the halves are written to.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Active photos with their per-half parameters.
    #[must_use]
    pub fn photos(&self) -> &[ActivePhoto] {
        &self.photos
    }

    /// Halves to write, in photo order, left before right.
    #[must_use]
    pub fn items(&self) -> &[ExportItem] {
        &self.items
    }

    /// Full output path of an item.
    #[must_use]
    pub fn output_path(&self, item: &ExportItem) -> PathBuf {
        self.output_dir.join(&item.output_name)
    }

    /// Short description such as "3 halves from 2 photos".
    #[must_use]
    pub fn summary(&self) -> String {
        let halves = self.items.len();
        let photos = self.photos.len();
        format!(
            "{halves} {} from {photos} {}",
            if halves == 1 { "half" } else { "halves" },
            if photos == 1 { "photo" } else { "photos" },
        )
    }
}

/// Output file name of one half: `<stem>_l<ext>` or `<stem>_r<ext>`.
#[must_use]
pub fn output_file_name(source: &str, side: Side) -> String {
    let path = Path::new(source);
    let stem = path
        .file_stem()
        .map_or_else(|| source.into(), |stem| stem.to_string_lossy());
    let extension = path
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default();
    format!("{stem}{}{extension}", side.file_suffix())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::state::HalfExport;

    fn half(included: bool) -> HalfExport {
        HalfExport {
            included,
            rotation: RotationAngle::ZERO,
            remove_border: true,
        }
    }

    fn active(path: &str, left: bool, right: bool) -> ActivePhoto {
        ActivePhoto {
            photo: PhotoId::new(path),
            left: half(left),
            right: half(right),
        }
    }

    #[test]
    fn output_names_follow_side_suffix() {
        assert_eq!(output_file_name("/scans/IMG_0042.jpg", Side::Left), "IMG_0042_l.jpg");
        assert_eq!(output_file_name("/scans/IMG_0042.jpg", Side::Right), "IMG_0042_r.jpg");
        assert_eq!(output_file_name("noext", Side::Left), "noext_l");
        assert_eq!(output_file_name("roll.v2.png", Side::Right), "roll.v2_r.png");
    }

    #[test]
    fn build_lists_included_halves_only() {
        let plan = ExportPlan::build(
            vec![active("a.jpg", true, false), active("b.jpg", true, true)],
            "/out",
        )
        .expect("halves to export");

        let names: Vec<&str> = plan.items().iter().map(|item| item.output_name.as_str()).collect();
        assert_eq!(names, ["a_l.jpg", "b_l.jpg", "b_r.jpg"]);
        assert_eq!(plan.output_path(&plan.items()[0]), PathBuf::from("/out/a_l.jpg"));
        assert_eq!(plan.summary(), "3 halves from 2 photos");
    }

    #[test]
    fn build_carries_rotation_and_border_flags() {
        let mut photo = active("a.jpg", true, true);
        photo.right.rotation = RotationAngle::new(270);
        photo.right.remove_border = false;

        let plan = ExportPlan::build(vec![photo], "/out").expect("halves to export");
        let right = &plan.items()[1];
        assert_eq!(right.side, Side::Right);
        assert_eq!(right.rotation.degrees(), 270);
        assert!(!right.remove_border);
        assert_eq!(plan.summary(), "2 halves from 1 photo");
    }

    #[test]
    fn empty_active_set_is_rejected() {
        assert_eq!(
            ExportPlan::build(Vec::new(), "/out"),
            Err(StateError::NoActiveFiles)
        );
    }
}
