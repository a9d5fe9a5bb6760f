// SPDX-License-Identifier: MPL-2.0
//! Upload/drop gate.
//!
//! Admits a candidate file only if it declares PDF content. Rejected
//! candidates leave the current document untouched; whether the user hears
//! about it is decided by the caller.

use super::media_type::MediaType;
use super::{DocumentRef, DocumentToken};
use std::path::PathBuf;

/// A user-provided file waiting for admission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub path: PathBuf,
    pub media_type: MediaType,
}

impl Candidate {
    /// Builds a candidate, declaring its media type from the extension.
    #[must_use]
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let media_type = MediaType::from_path(&path);
        Self { path, media_type }
    }

    /// Builds a candidate with an explicitly declared media type.
    #[must_use]
    pub fn with_media_type(path: impl Into<PathBuf>, media_type: MediaType) -> Self {
        Self {
            path: path.into(),
            media_type,
        }
    }
}

/// Result of offering a candidate to the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// The candidate replaces the current document.
    Admitted(DocumentRef),
    /// The candidate was ignored.
    Rejected { media_type: MediaType },
}

impl DropOutcome {
    #[must_use]
    pub fn admitted(&self) -> Option<&DocumentRef> {
        match self {
            DropOutcome::Admitted(document) => Some(document),
            _ => None,
        }
    }
}

/// Hands out document tokens to admitted PDF candidates.
#[derive(Debug, Default)]
pub struct Gate {
    last_token: u64,
}

impl Gate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Offers one candidate.
    pub fn admit(&mut self, candidate: Candidate) -> DropOutcome {
        if !candidate.media_type.is_pdf() {
            tracing::debug!(
                path = %candidate.path.display(),
                media_type = %candidate.media_type,
                "ignoring non-PDF candidate"
            );
            return DropOutcome::Rejected {
                media_type: candidate.media_type,
            };
        }

        self.last_token += 1;
        let token = DocumentToken::new(self.last_token);
        tracing::info!(%token, path = %candidate.path.display(), "document admitted");
        DropOutcome::Admitted(DocumentRef::new(token, candidate.path))
    }
}

/// Groups the per-file window events of one drag-and-drop gesture.
///
/// The window reports a multi-file drop as one hover event per file followed
/// by one drop event per file. Only the first dropped file of a gesture is
/// handed to the gate; the rest are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropSession {
    #[default]
    Idle,
    Hovering {
        first_taken: bool,
    },
}

impl DropSession {
    /// A file is being dragged over the window.
    pub fn hovered(&mut self) {
        match *self {
            DropSession::Idle | DropSession::Hovering { first_taken: true } => {
                *self = DropSession::Hovering { first_taken: false };
            }
            DropSession::Hovering { first_taken: false } => {}
        }
    }

    /// Whether files are hovering and none of them was dropped yet.
    #[must_use]
    pub fn is_hovering(self) -> bool {
        self == DropSession::Hovering { first_taken: false }
    }

    /// The drag left the window without dropping.
    pub fn left(&mut self) {
        *self = DropSession::Idle;
    }

    /// A file was dropped. Returns whether it should be offered to the gate.
    ///
    /// Drops without a preceding hover (some platforms skip it) are always
    /// offered.
    pub fn dropped(&mut self) -> bool {
        match *self {
            DropSession::Idle => true,
            DropSession::Hovering { first_taken: false } => {
                *self = DropSession::Hovering { first_taken: true };
                true
            }
            DropSession::Hovering { first_taken: true } => false,
        }
    }
}
