// SPDX-License-Identifier: MPL-2.0
//! Photo identity and per-half addressing.
//!
//! A source photograph is identified by its path string and exposes two
//! halves. Every per-half value in the application is keyed by a
//! [`HalfKey`], which is derived from the path and the side only, so keys
//! survive edits to the rest of the photo list.

use std::fmt;
use std::str::FromStr;

// =============================================================================
// PhotoId
// =============================================================================

/// Opaque photo identifier (the source path as reported by the selector).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PhotoId(String);

impl PhotoId {
    /// Creates an identifier from a path string.
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Returns the underlying path string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the key of one half of this photo.
    #[must_use]
    pub fn half(&self, side: Side) -> HalfKey {
        HalfKey::new(self.clone(), side)
    }
}

impl fmt::Display for PhotoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PhotoId {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for PhotoId {
    fn from(path: String) -> Self {
        Self(path)
    }
}

// =============================================================================
// Side
// =============================================================================

/// One of the two halves of a photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Both sides in display order.
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    /// Returns the opposite half.
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Offset of this half inside its photo's pair of flattened positions.
    #[must_use]
    pub fn offset(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }

    /// Side stored at the given flattened position.
    #[must_use]
    pub fn from_position(position: usize) -> Self {
        if position % 2 == 0 {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// Lowercase name (`left` / `right`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }

    /// Human-readable label used by the full-screen preview.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Side::Left => "Left Half",
            Side::Right => "Right Half",
        }
    }

    /// Suffix appended to the file stem of an exported half.
    #[must_use]
    pub fn file_suffix(self) -> &'static str {
        match self {
            Side::Left => "_l",
            Side::Right => "_r",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a side name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSideError(String);

impl fmt::Display for ParseSideError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid side '{}', expected 'left' or 'right'", self.0)
    }
}

impl std::error::Error for ParseSideError {}

impl FromStr for Side {
    type Err = ParseSideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "left" | "l" => Ok(Side::Left),
            "right" | "r" => Ok(Side::Right),
            _ => Err(ParseSideError(s.to_string())),
        }
    }
}

// =============================================================================
// HalfKey
// =============================================================================

/// Stable identifier of one half: the photo path paired with a side.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HalfKey {
    photo: PhotoId,
    side: Side,
}

impl HalfKey {
    /// Creates a key for the given photo and side.
    #[must_use]
    pub fn new(photo: PhotoId, side: Side) -> Self {
        Self { photo, side }
    }

    /// Returns the owning photo.
    #[must_use]
    pub fn photo(&self) -> &PhotoId {
        &self.photo
    }

    /// Returns the side.
    #[must_use]
    pub fn side(&self) -> Side {
        self.side
    }

    /// Returns the key of the other half of the same photo.
    #[must_use]
    pub fn sibling(&self) -> Self {
        Self::new(self.photo.clone(), self.side.other())
    }
}

impl fmt::Display for HalfKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.photo, self.side)
    }
}

// =============================================================================
// Previews
// =============================================================================

/// Bounding box of the content detected inside a half, in preview pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CropCoords {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Preview sources for one half, as produced by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HalfPreview {
    /// Preview of the untouched half.
    pub original_url: String,
    /// Preview with the black border cropped away, when the backend found one.
    pub cropped_url: Option<String>,
    /// Where the cropped preview was taken from.
    pub crop_coords: Option<CropCoords>,
}

impl HalfPreview {
    /// Creates a preview with only the original source.
    pub fn new(original_url: impl Into<String>) -> Self {
        Self {
            original_url: original_url.into(),
            cropped_url: None,
            crop_coords: None,
        }
    }

    /// Adds the cropped variant.
    #[must_use]
    pub fn with_cropped(mut self, url: impl Into<String>, coords: Option<CropCoords>) -> Self {
        self.cropped_url = Some(url.into());
        self.crop_coords = coords;
        self
    }

    /// Source to display for the given border-removal choice.
    ///
    /// Falls back to the original when no cropped variant exists.
    #[must_use]
    pub fn display_url(&self, remove_border: bool) -> &str {
        match (&self.cropped_url, remove_border) {
            (Some(cropped), true) => cropped,
            _ => &self.original_url,
        }
    }
}

// =============================================================================
// Photo
// =============================================================================

/// An imported photograph and the previews of its two halves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    id: PhotoId,
    left: HalfPreview,
    right: HalfPreview,
}

impl Photo {
    /// Creates a photo from its identifier and half previews.
    #[must_use]
    pub fn new(id: PhotoId, left: HalfPreview, right: HalfPreview) -> Self {
        Self { id, left, right }
    }

    /// Returns the photo identifier.
    #[must_use]
    pub fn id(&self) -> &PhotoId {
        &self.id
    }

    /// Returns the key of one half.
    #[must_use]
    pub fn key(&self, side: Side) -> HalfKey {
        self.id.half(side)
    }

    /// Returns the previews of one half.
    #[must_use]
    pub fn half(&self, side: Side) -> &HalfPreview {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// Source to display for a half given its border-removal flag.
    #[must_use]
    pub fn display_url(&self, side: Side, remove_border: bool) -> &str {
        self.half(side).display_url(remove_border)
    }

    /// Last path component, for captions.
    #[must_use]
    pub fn file_name(&self) -> &str {
        let path = self.id.as_str();
        path.rsplit(['/', '\\']).next().unwrap_or(path)
    }
}
