// SPDX-License-Identifier: MPL-2.0
//! Document admission, decoding and page rendering.
//!
//! The pieces are deliberately small and independent:
//!
//! - [`gate`]: admits exactly one candidate file if it declares PDF content
//! - [`engine`]: boundary to the external PDF engine (decode + render page)
//! - [`render`]: issues the per-page render requests for a decoded document
//! - [`pixel_filter`]: post-processes rendered pages with the reading filter
//!
//! Every admitted file gets a [`DocumentToken`]. Asynchronous results carry the
//! token they were started for, so a completion that arrives after the user
//! dropped another file can be recognised and discarded.

pub mod engine;
pub mod gate;
pub mod media_type;
pub mod pixel_filter;
pub mod render;

pub use engine::{DecodedDocument, DocumentEngine, PdfiumEngine};
pub use gate::{Candidate, DropOutcome, DropSession, Gate};
pub use media_type::MediaType;
pub use render::{PageRequest, RenderedPage};

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

// =============================================================================
// DocumentToken
// =============================================================================

/// Generation number of an admitted document.
///
/// Tokens are handed out by the [`Gate`] in strictly increasing order, so two
/// admissions of the same file still get distinct tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DocumentToken(u64);

impl DocumentToken {
    pub(crate) fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw generation number.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for DocumentToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// =============================================================================
// DocumentRef
// =============================================================================

/// Opaque handle to the currently admitted file.
///
/// Cheap to clone and never mutated: a new upload replaces the handle
/// wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRef {
    token: DocumentToken,
    path: Arc<PathBuf>,
}

impl DocumentRef {
    pub(crate) fn new(token: DocumentToken, path: PathBuf) -> Self {
        Self {
            token,
            path: Arc::new(path),
        }
    }

    #[must_use]
    pub fn token(&self) -> DocumentToken {
        self.token
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name for window titles, falling back to the full path.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

// =============================================================================
// PageBitmap
// =============================================================================

/// A rendered page as tightly packed RGBA8 pixels.
#[derive(Clone, PartialEq, Eq)]
pub struct PageBitmap {
    /// One-based page number.
    pub page_number: u32,
    pub width: u32,
    pub height: u32,
    pub rgba: Arc<Vec<u8>>,
}

impl PageBitmap {
    #[must_use]
    pub fn new(page_number: u32, width: u32, height: u32, rgba: Vec<u8>) -> Self {
        Self {
            page_number,
            width,
            height,
            rgba: Arc::new(rgba),
        }
    }

    /// Returns a copy of this bitmap with `filter` applied.
    #[must_use]
    pub fn filtered(&self, filter: &pixel_filter::PixelFilter) -> Self {
        if filter.is_identity() {
            return self.clone();
        }
        let mut rgba = self.rgba.as_ref().clone();
        filter.apply_rgba(&mut rgba);
        Self::new(self.page_number, self.width, self.height, rgba)
    }
}

impl fmt::Debug for PageBitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageBitmap")
            .field("page_number", &self.page_number)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.rgba.len())
            .finish()
    }
}
