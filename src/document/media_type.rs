// SPDX-License-Identifier: MPL-2.0
//! Declared media types for candidate files.
//!
//! A dropped file carries no MIME type on the desktop, so the type is declared
//! from the file extension, the same way browsers fill in `File.type`. The
//! file content is not sniffed.

use std::fmt;
use std::path::Path;

/// MIME essence for PDF documents.
pub const PDF_ESSENCE: &str = "application/pdf";

/// MIME essence for plain text.
pub const PLAIN_TEXT_ESSENCE: &str = "text/plain";

/// MIME essence used when nothing better is known.
pub const OCTET_STREAM_ESSENCE: &str = "application/octet-stream";

/// Declared media type of a candidate file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MediaType {
    Pdf,
    PlainText,
    Other(String),
}

impl MediaType {
    /// Declares the media type from the file extension (case-insensitive).
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("pdf") => MediaType::Pdf,
            Some("txt" | "text" | "log") => MediaType::PlainText,
            Some("png") => MediaType::Other("image/png".to_string()),
            Some("jpg" | "jpeg") => MediaType::Other("image/jpeg".to_string()),
            Some("html" | "htm") => MediaType::Other("text/html".to_string()),
            Some("epub") => MediaType::Other("application/epub+zip".to_string()),
            _ => MediaType::Other(OCTET_STREAM_ESSENCE.to_string()),
        }
    }

    /// Returns the MIME essence string.
    #[must_use]
    pub fn essence(&self) -> &str {
        match self {
            MediaType::Pdf => PDF_ESSENCE,
            MediaType::PlainText => PLAIN_TEXT_ESSENCE,
            MediaType::Other(essence) => essence,
        }
    }

    /// Returns true if this declares PDF content.
    #[must_use]
    pub fn is_pdf(&self) -> bool {
        matches!(self, MediaType::Pdf)
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.essence())
    }
}
