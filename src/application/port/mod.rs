// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines the interfaces of the external collaborators the core
//! relies on. Adapters implement them; the application layer only sees
//! these traits and their domain-level payloads.
//!
//! # Available Ports
//!
//! - [`backend`]: Photo selection, output directory selection and export
//!
//! # Design Notes
//!
//! - Payloads carry paths and preview sources only, never pixel data
//! - Methods return futures so slow dialogs and exports can be awaited with a
//!   timeout by `app::runtime`
//! - Failures are reported as [`BackendError`] and shown to the user verbatim

pub mod backend;

pub use backend::{
    BackendError, DirectoryPicker, ExportSummary, Exporter, PhotoRecord, PhotoSelector, Selection,
};
