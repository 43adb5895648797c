// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`state`]: Per-half edit state (`HalfEditStateTracker`)
//! - [`query`]: Read-side services (`PreviewCarousel`)
//! - [`export`]: Export request assembly (`ExportPlan`)
//! - [`port`]: Trait definitions for the external backend
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - The `app` controller drives application services from user messages
//!
//! # Example
//!
//! ```
//! use half_frame::application::query::{Direction, PreviewCarousel, StepOutcome};
//! use half_frame::application::state::HalfEditStateTracker;
//! use half_frame::domain::editing::RotationAngle;
//! use half_frame::domain::photo::{HalfPreview, Photo, PhotoId, Side};
//!
//! let photos: Vec<Photo> = ["a.jpg", "b.jpg"]
//!     .into_iter()
//!     .map(|p| Photo::new(PhotoId::new(p), HalfPreview::new("l"), HalfPreview::new("r")))
//!     .collect();
//!
//! let mut tracker = HalfEditStateTracker::new();
//! tracker.reset(&photos);
//!
//! let mut carousel = PreviewCarousel::default();
//! carousel.set_files(photos);
//! carousel.open(&PhotoId::new("b.jpg"), Side::Right, RotationAngle::ZERO).unwrap();
//! assert!(matches!(carousel.step(Direction::Right, &tracker), StepOutcome::Moved(v) if v.position == 0));
//! ```

pub mod export;
pub mod port;
pub mod query;
pub mod state;
