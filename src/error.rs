// SPDX-License-Identifier: MPL-2.0
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),
}

/// Specific error types for document decoding and page rendering.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    /// The PDF engine library could not be loaded.
    #[error("PDF engine unavailable: {0}")]
    EngineUnavailable(String),

    /// The file could not be opened or parsed as a PDF.
    #[error("Failed to load document: {0}")]
    Load(String),

    /// A page number outside `1..=page_count` was requested.
    #[error("Invalid page number: {0}")]
    InvalidPage(u32),

    /// A single page failed to render.
    #[error("Failed to render page {page}: {message}")]
    Render { page: u32, message: String },
}

impl DocumentError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            DocumentError::EngineUnavailable(_) => "error-engine-unavailable",
            DocumentError::Load(_) => "error-load-document",
            DocumentError::InvalidPage(_) | DocumentError::Render { .. } => "error-render-page",
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
