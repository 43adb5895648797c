// SPDX-License-Identifier: MPL-2.0
//! Full-screen preview navigation across every half of the selection.
//!
//! The halves of `N` photos are treated as one flattened sequence of `2N`
//! positions: position `2i` is the left half of photo `i` and `2i + 1` its
//! right half. Moving left or right is then a single step that wraps around
//! both ends, and moving up or down jumps a whole visual row of the grid.
//! Vertical moves never wrap because the number of rows is not known here;
//! a move that would leave the sequence is rejected.
//!
//! The carousel only reads the photo list and rotation values. Deleted halves
//! stay reachable.

use crate::domain::editing::RotationAngle;
use crate::domain::error::StateError;
use crate::domain::photo::{HalfKey, Photo, PhotoId, Side};
use std::collections::HashMap;

/// Halves per visual row of the grid (two photo cards of two halves).
pub const DEFAULT_ROW_WIDTH: usize = 4;

/// Read access to per-half rotations.
pub trait RotationSource {
    /// Current rotation of a half (0° when it has never been rotated).
    fn rotation_of(&self, key: &HalfKey) -> RotationAngle;
}

impl RotationSource for HashMap<HalfKey, RotationAngle> {
    fn rotation_of(&self, key: &HalfKey) -> RotationAngle {
        self.get(key).copied().unwrap_or_default()
    }
}

// =============================================================================
// Flattening helpers
// =============================================================================

/// Number of flattened positions for a list of `photo_count` photos.
#[must_use]
pub fn total_positions(photo_count: usize) -> usize {
    photo_count * 2
}

/// Flattened position of a half.
#[must_use]
pub fn flat_position(photo_index: usize, side: Side) -> usize {
    photo_index * 2 + side.offset()
}

/// Photo index and side stored at a flattened position.
#[must_use]
pub fn unflatten(position: usize) -> (usize, Side) {
    (position / 2, Side::from_position(position))
}

// =============================================================================
// Direction / keys
// =============================================================================

/// Navigation direction inside the preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Position delta for this direction.
    #[must_use]
    pub fn delta(self, row_width: usize) -> isize {
        let row = isize::try_from(row_width).unwrap_or(isize::MAX);
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
            Direction::Up => -row,
            Direction::Down => row,
        }
    }

    /// Returns true if leaving the sequence wraps to the other end.
    #[must_use]
    pub fn wraps(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

/// Keys the preview reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewKey {
    Escape,
    Arrow(Direction),
}

impl PreviewKey {
    /// Parses a key name as reported by the host (`Escape`, `ArrowLeft`, ...).
    ///
    /// Returns `None` for keys the preview ignores.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Escape" | "Esc" => Some(PreviewKey::Escape),
            "ArrowLeft" => Some(PreviewKey::Arrow(Direction::Left)),
            "ArrowRight" => Some(PreviewKey::Arrow(Direction::Right)),
            "ArrowUp" => Some(PreviewKey::Arrow(Direction::Up)),
            "ArrowDown" => Some(PreviewKey::Arrow(Direction::Down)),
            _ => None,
        }
    }
}

// =============================================================================
// Views / outcomes
// =============================================================================

/// What the preview currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewView {
    pub key: HalfKey,
    /// Flattened position of the half.
    pub position: usize,
    /// Number of flattened positions in the list.
    pub total_positions: usize,
    pub rotation: RotationAngle,
}

impl PreviewView {
    /// Caption for the shown half.
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.key.side().label()
    }
}

/// Result of a navigation step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The preview moved to a new half.
    Moved(PreviewView),
    /// The move would leave the sequence vertically; nothing changed.
    Rejected,
    /// The preview is closed; nothing changed.
    Closed,
}

/// Result of a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The preview moved; the host should consume the key event.
    Moved(PreviewView),
    /// Escape closed the preview.
    Dismissed,
    /// Nothing happened.
    Unchanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PreviewSession {
    position: usize,
    rotation: RotationAngle,
}

// =============================================================================
// PreviewCarousel
// =============================================================================

/// Navigator for the full-screen preview.
///
/// States are Closed (no session) and Open. `open` enters Open, `step`
/// stays in Open, `close` returns to Closed. `step` and `close` while Closed
/// do nothing.
#[derive(Debug, Clone)]
pub struct PreviewCarousel {
    files: Vec<Photo>,
    row_width: usize,
    session: Option<PreviewSession>,
}

impl Default for PreviewCarousel {
    fn default() -> Self {
        Self::new(DEFAULT_ROW_WIDTH)
    }
}

impl PreviewCarousel {
    /// Creates a closed carousel with no files.
    ///
    /// A `row_width` of zero is treated as one.
    #[must_use]
    pub fn new(row_width: usize) -> Self {
        Self {
            files: Vec::new(),
            row_width: row_width.max(1),
            session: None,
        }
    }

    /// Halves per row used for vertical moves.
    #[must_use]
    pub fn row_width(&self) -> usize {
        self.row_width
    }

    /// Replaces the photo list. Any open preview is closed.
    pub fn set_files(&mut self, files: Vec<Photo>) {
        self.files = files;
        self.session = None;
    }

    /// Photo list the carousel navigates.
    #[must_use]
    pub fn files(&self) -> &[Photo] {
        &self.files
    }

    /// Number of flattened positions.
    #[must_use]
    pub fn total_positions(&self) -> usize {
        total_positions(self.files.len())
    }

    /// Flattened position of a half, by path and side.
    #[must_use]
    pub fn position_of(&self, photo: &PhotoId, side: Side) -> Option<usize> {
        self.files
            .iter()
            .position(|file| file.id() == photo)
            .map(|index| flat_position(index, side))
    }

    /// Opens the preview on a half.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::PositionNotFound`] if the half is not in the
    /// current list. The carousel then stays in its previous state.
    pub fn open(
        &mut self,
        photo: &PhotoId,
        side: Side,
        rotation: RotationAngle,
    ) -> Result<PreviewView, StateError> {
        let Some(position) = self.position_of(photo, side) else {
            return Err(StateError::PositionNotFound(photo.half(side)));
        };
        self.session = Some(PreviewSession { position, rotation });
        tracing::debug!(%photo, %side, position, "preview opened");
        Ok(self.view(position, rotation))
    }

    /// Moves the preview one half in `direction`.
    ///
    /// Left and right wrap around; up and down are rejected when they would
    /// leave the sequence.
    pub fn step(&mut self, direction: Direction, rotations: &impl RotationSource) -> StepOutcome {
        let Some(session) = self.session else {
            return StepOutcome::Closed;
        };
        let Some(position) = self.target(session.position, direction) else {
            tracing::trace!(?direction, position = session.position, "step rejected");
            return StepOutcome::Rejected;
        };

        let (index, side) = unflatten(position);
        let rotation = rotations.rotation_of(&self.files[index].key(side));
        self.session = Some(PreviewSession { position, rotation });
        StepOutcome::Moved(self.view(position, rotation))
    }

    fn target(&self, position: usize, direction: Direction) -> Option<usize> {
        let total = isize::try_from(self.total_positions()).ok()?;
        if total == 0 {
            return None;
        }
        let current = isize::try_from(position).ok()?;
        let candidate = current.saturating_add(direction.delta(self.row_width));

        let next = if direction.wraps() {
            ((candidate % total) + total) % total
        } else if (0..total).contains(&candidate) {
            candidate
        } else {
            return None;
        };
        usize::try_from(next).ok()
    }

    /// Applies a key press.
    pub fn handle_key(&mut self, key: PreviewKey, rotations: &impl RotationSource) -> KeyOutcome {
        match key {
            PreviewKey::Escape => {
                if self.close() {
                    KeyOutcome::Dismissed
                } else {
                    KeyOutcome::Unchanged
                }
            }
            PreviewKey::Arrow(direction) => match self.step(direction, rotations) {
                StepOutcome::Moved(view) => KeyOutcome::Moved(view),
                StepOutcome::Rejected | StepOutcome::Closed => KeyOutcome::Unchanged,
            },
        }
    }

    /// Closes the preview. Returns true if it was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.session.take().is_some();
        if was_open {
            tracing::debug!("preview closed");
        }
        was_open
    }

    /// Returns true while the preview is shown.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// Flattened position of the shown half.
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        self.session.map(|session| session.position)
    }

    /// The half currently shown.
    #[must_use]
    pub fn current(&self) -> Option<PreviewView> {
        self.session
            .map(|session| self.view(session.position, session.rotation))
    }

    /// Photo owning the shown half.
    #[must_use]
    pub fn current_photo(&self) -> Option<&Photo> {
        let (index, _) = unflatten(self.position()?);
        self.files.get(index)
    }

    /// Returns true if the preview shows the first half of the list.
    #[must_use]
    pub fn is_at_first(&self) -> bool {
        matches!(self.position(), Some(0))
    }

    /// Returns true if the preview shows the last half of the list.
    #[must_use]
    pub fn is_at_last(&self) -> bool {
        let total = self.total_positions();
        total > 0 && self.position() == Some(total - 1)
    }

    fn view(&self, position: usize, rotation: RotationAngle) -> PreviewView {
        let (index, side) = unflatten(position);
        PreviewView {
            key: self.files[index].key(side),
            position,
            total_positions: self.total_positions(),
            rotation,
        }
    }
}
