// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`dry_run`]: Headless backend for scripted sessions (implements
//!   [`PhotoSelector`], [`DirectoryPicker`] and [`Exporter`])
//!
//! [`PhotoSelector`]: crate::application::port::PhotoSelector
//! [`DirectoryPicker`]: crate::application::port::DirectoryPicker
//! [`Exporter`]: crate::application::port::Exporter

pub mod dry_run;

pub use dry_run::DryRunBackend;
