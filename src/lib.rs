// SPDX-License-Identifier: MPL-2.0
//! `half_frame` is the session state layer of a photo splitter for
//! half-frame cameras.
//!
//! Every source photo holds two frames side by side. The crate tracks, per
//! half, whether it is deleted, how it is rotated and whether its border is
//! cropped, navigates a full-screen preview across all halves, and plans the
//! export of the halves that are kept. Image work is delegated to a backend
//! behind the traits in [`application::port`].
//!
//! # Layers
//!
//! - [`domain`]: photo identifiers, sides, edit values and errors
//! - [`application`]: edit-state tracker, preview carousel, export planning
//!   and backend ports
//! - [`app`]: message-driven controller with config, session state and
//!   notifications
//! - [`infrastructure`]: backend adapters
//! - [`cli`]: command scripts for the headless driver

#![doc(html_root_url = "https://docs.rs/half_frame/0.1.0")]

pub mod app;
pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
