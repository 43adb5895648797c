// SPDX-License-Identifier: MPL-2.0
//! Errors raised by the edit-state tracker, the preview carousel and export
//! planning.

use crate::domain::photo::HalfKey;
use std::fmt;

/// Failures of the in-memory photo state.
///
/// `InvalidKey` and `PositionNotFound` mean the caller addressed a half that
/// is not part of the current photo set; normal interaction never produces
/// them. `NoActiveFiles` is an ordinary user-facing condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    /// A mutator was called for a half that is not registered.
    InvalidKey(HalfKey),

    /// The preview was asked to show a half absent from its photo list.
    PositionNotFound(HalfKey),

    /// Export was requested while every half is deleted.
    NoActiveFiles,
}

impl StateError {
    /// Returns true for errors that indicate a caller bug rather than a
    /// user-visible condition.
    #[must_use]
    pub fn is_invariant_violation(&self) -> bool {
        matches!(
            self,
            StateError::InvalidKey(_) | StateError::PositionNotFound(_)
        )
    }
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateError::InvalidKey(key) => write!(f, "Unknown photo half: {key}"),
            StateError::PositionNotFound(key) => {
                write!(f, "Photo half not in the current list: {key}")
            }
            StateError::NoActiveFiles => write!(f, "No photos to export: every half is deleted"),
        }
    }
}

impl std::error::Error for StateError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::photo::{PhotoId, Side};

    #[test]
    fn display_names_the_half() {
        let err = StateError::InvalidKey(PhotoId::new("a.jpg").half(Side::Right));
        assert_eq!(err.to_string(), "Unknown photo half: a.jpg#right");
    }

    #[test]
    fn only_key_errors_are_invariant_violations() {
        let key = PhotoId::new("a.jpg").half(Side::Left);
        assert!(StateError::InvalidKey(key.clone()).is_invariant_violation());
        assert!(StateError::PositionNotFound(key).is_invariant_violation());
        assert!(!StateError::NoActiveFiles.is_invariant_violation());
    }
}
