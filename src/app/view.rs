// SPDX-License-Identifier: MPL-2.0
//! Text rendering of the application state for headless hosts.

use super::App;
use crate::domain::editing::HalfEditState;
use crate::domain::photo::{Photo, Side};
use std::fmt::Write;

/// Renders a multi-line status report of the current session.
#[must_use]
pub fn status(app: &App) -> String {
    let mut out = String::new();
    let tracker = app.tracker();

    let _ = writeln!(
        out,
        "Photos: {} ({} of {} halves kept)",
        app.photos().len(),
        tracker.active_half_count(),
        tracker.len() * 2
    );
    for (index, photo) in app.photos().iter().enumerate() {
        let _ = writeln!(out, "{}", photo_line(app, index, photo));
    }

    match app.output_dir() {
        Some(dir) => {
            let _ = writeln!(out, "Output: {}", dir.display());
        }
        None => out.push_str("Output: not selected\n"),
    }
    let _ = writeln!(
        out,
        "Export: {}",
        if app.can_export() { "enabled" } else { "disabled" }
    );

    match (app.preview(), app.carousel().current_photo()) {
        (Some(view), Some(photo)) => {
            let carousel = app.carousel();
            let _ = writeln!(
                out,
                "Preview: {} {} ({}/{}) {}{}{}",
                photo.file_name(),
                view.label(),
                view.position + 1,
                view.total_positions,
                view.rotation,
                if carousel.is_at_first() { " [first]" } else { "" },
                if carousel.is_at_last() { " [last]" } else { "" }
            );
        }
        _ => out.push_str("Preview: closed\n"),
    }

    if let Some(operation) = app.busy.current() {
        let _ = writeln!(out, "Busy: {operation}");
    }
    for notification in app.notifications().visible() {
        let _ = writeln!(out, "[{}] {}", notification.severity(), notification.message());
    }
    out
}

fn photo_line(app: &App, index: usize, photo: &Photo) -> String {
    let tracker = app.tracker();
    let half = |side: Side| {
        let state = tracker.state(&photo.key(side)).unwrap_or_default();
        format!("{}[{}]", side_letter(side), describe(&state))
    };
    let removed = tracker
        .is_photo_fully_deleted(photo.id())
        .unwrap_or(false);
    format!(
        "  {index:>3}  {}  {} {}{}",
        photo.file_name(),
        half(Side::Left),
        half(Side::Right),
        if removed { "  (removed)" } else { "" }
    )
}

fn side_letter(side: Side) -> char {
    match side {
        Side::Left => 'L',
        Side::Right => 'R',
    }
}

fn describe(state: &HalfEditState) -> String {
    format!(
        "{} {} {}",
        if state.is_included() { "kept" } else { "deleted" },
        state.rotation,
        if state.remove_border { "crop" } else { "full" }
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Message;
    use crate::application::port::{PhotoRecord, Selection};

    fn app_with(paths: &[&str]) -> App {
        let mut app = App::default();
        app.update(Message::SelectPhotos);
        app.update(Message::PhotosSelected(Ok(Selection {
            files: paths
                .iter()
                .map(|path| PhotoRecord {
                    path: (*path).into(),
                    ..PhotoRecord::default()
                })
                .collect(),
            last_dir: None,
        })));
        app
    }

    #[test]
    fn status_lists_halves_and_output() {
        let mut app = app_with(&["/roll/a.jpg", "/roll/b.jpg"]);
        let a_left = app.key_at(0, Side::Left).expect("loaded");
        let a_right = app.key_at(0, Side::Right).expect("loaded");
        app.update(Message::ToggleDelete(a_left));
        app.update(Message::ToggleDelete(a_right));
        app.update(Message::Rotate(app.key_at(1, Side::Right).expect("loaded")));
        app.set_output_dir("/out");

        let report = status(&app);
        assert!(report.starts_with("Photos: 2 (2 of 4 halves kept)\n"));
        assert!(report.contains("a.jpg  L[deleted 0° crop] R[deleted 0° crop]  (removed)"));
        assert!(report.contains("b.jpg  L[kept 0° crop] R[kept 270° crop]\n"));
        assert!(report.contains("Output: /out\nExport: enabled\n"));
        assert!(report.contains("Preview: closed\n"));
    }

    #[test]
    fn status_shows_preview_position() {
        let mut app = app_with(&["a.jpg", "b.jpg"]);
        app.update(Message::OpenPreview(app.key_at(1, Side::Right).expect("loaded")));

        let report = status(&app);
        assert!(report.contains("Preview: b.jpg Right Half (4/4) 0° [last]\n"));
        assert!(report.contains("Output: not selected\nExport: disabled\n"));
    }

    #[test]
    fn status_marks_first_half_and_busy_export() {
        let mut app = app_with(&["a.jpg", "b.jpg"]);
        app.set_output_dir("/out");
        app.update(Message::OpenPreview(app.key_at(0, Side::Left).expect("loaded")));
        assert!(status(&app).contains("Preview: a.jpg Left Half (1/4) 0° [first]\n"));

        app.update(Message::Export);
        let report = status(&app);
        assert!(report.contains("Export: disabled\n"));
        assert!(report.contains("Busy: "));
    }
}
