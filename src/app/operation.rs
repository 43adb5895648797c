// SPDX-License-Identifier: MPL-2.0
//! Busy lock for backend calls.
//!
//! At most one backend operation (photo loading, output selection, export)
//! runs at a time. Triggers that arrive while another operation is in flight
//! are ignored, and the lock is released by the completion message of the
//! operation that took it.

use std::fmt;

/// A long-running backend operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    LoadPhotos,
    SelectOutput,
    Export,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::LoadPhotos => "load photos",
            Operation::SelectOutput => "select output directory",
            Operation::Export => "export",
        })
    }
}

/// Exclusive slot for the in-flight operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BusyState {
    current: Option<Operation>,
}

impl BusyState {
    /// Takes the slot for `operation`.
    ///
    /// Returns false, leaving the slot unchanged, if another operation holds it.
    pub fn try_begin(&mut self, operation: Operation) -> bool {
        if let Some(running) = self.current {
            tracing::debug!(%running, requested = %operation, "operation ignored while busy");
            return false;
        }
        self.current = Some(operation);
        true
    }

    /// Releases the slot if `operation` holds it.
    ///
    /// Returns false for a completion that does not match the running
    /// operation; the slot is left untouched.
    pub fn finish(&mut self, operation: Operation) -> bool {
        if self.current == Some(operation) {
            self.current = None;
            true
        } else {
            tracing::warn!(
                completed = %operation,
                running = ?self.current,
                "discarding completion of an operation that is not running"
            );
            false
        }
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.current.is_some()
    }

    #[must_use]
    pub fn current(&self) -> Option<Operation> {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_begin_is_refused_until_finish() {
        let mut busy = BusyState::default();
        assert!(busy.try_begin(Operation::Export));
        assert!(!busy.try_begin(Operation::LoadPhotos));
        assert_eq!(busy.current(), Some(Operation::Export));

        assert!(busy.finish(Operation::Export));
        assert!(!busy.is_busy());
        assert!(busy.try_begin(Operation::LoadPhotos));
    }

    #[test]
    fn mismatched_finish_keeps_lock() {
        let mut busy = BusyState::default();
        assert!(!busy.finish(Operation::Export));

        busy.try_begin(Operation::SelectOutput);
        assert!(!busy.finish(Operation::Export));
        assert_eq!(busy.current(), Some(Operation::SelectOutput));
    }
}
