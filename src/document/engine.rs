// SPDX-License-Identifier: MPL-2.0
//! Boundary to the external PDF engine.
//!
//! The rest of the crate only sees [`DocumentEngine`]: decode a file to learn
//! its page count, then render pages one by one. [`PdfiumEngine`] is the
//! production implementation; tests substitute their own.

use super::PageBitmap;
use crate::error::DocumentError;
use pdfium_render::prelude::{PdfRenderConfig, Pdfium};
use std::path::Path;
use std::sync::OnceLock;

/// What a successful decode reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedDocument {
    pub page_count: u32,
}

/// A PDF decoder/rasterizer.
///
/// Implementations are called from blocking worker threads, never from the
/// UI thread.
pub trait DocumentEngine: Send + Sync {
    /// Opens the document and reports its page count.
    fn decode(&self, path: &Path) -> Result<DecodedDocument, DocumentError>;

    /// Renders one page (one-based) at `scale` times its natural size.
    fn render_page(
        &self,
        path: &Path,
        page_number: u32,
        scale: f32,
    ) -> Result<PageBitmap, DocumentError>;
}

/// [`DocumentEngine`] backed by the PDFium library.
///
/// The library is bound on first use. Search order: the executable's
/// directory, the current directory, then system library paths.
#[derive(Default)]
pub struct PdfiumEngine {
    pdfium: OnceLock<Result<Pdfium, String>>,
}

impl PdfiumEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn pdfium(&self) -> Result<&Pdfium, DocumentError> {
        self.pdfium
            .get_or_init(bind_pdfium)
            .as_ref()
            .map_err(|message| DocumentError::EngineUnavailable(message.clone()))
    }
}

impl std::fmt::Debug for PdfiumEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = match self.pdfium.get() {
            None => "unbound",
            Some(Ok(_)) => "bound",
            Some(Err(_)) => "unavailable",
        };
        f.debug_struct("PdfiumEngine").field("library", &state).finish()
    }
}

fn bind_pdfium() -> Result<Pdfium, String> {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|path| path.parent().map(Path::to_path_buf));

    if let Some(dir) = exe_dir {
        if let Ok(bindings) =
            Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(&dir))
        {
            tracing::debug!(dir = %dir.display(), "bound PDFium next to executable");
            return Ok(Pdfium::new(bindings));
        }
    }

    Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
        .or_else(|_| Pdfium::bind_to_system_library())
        .map(Pdfium::new)
        .map_err(|err| {
            tracing::error!(error = %err, "unable to bind PDFium");
            err.to_string()
        })
}

impl DocumentEngine for PdfiumEngine {
    fn decode(&self, path: &Path) -> Result<DecodedDocument, DocumentError> {
        let document = self
            .pdfium()?
            .load_pdf_from_file(path, None)
            .map_err(|err| DocumentError::Load(err.to_string()))?;

        Ok(DecodedDocument {
            page_count: u32::from(document.pages().len()),
        })
    }

    fn render_page(
        &self,
        path: &Path,
        page_number: u32,
        scale: f32,
    ) -> Result<PageBitmap, DocumentError> {
        let document = self
            .pdfium()?
            .load_pdf_from_file(path, None)
            .map_err(|err| DocumentError::Load(err.to_string()))?;

        let index = page_number
            .checked_sub(1)
            .and_then(|index| u16::try_from(index).ok())
            .ok_or(DocumentError::InvalidPage(page_number))?;
        let page = document
            .pages()
            .get(index)
            .map_err(|_| DocumentError::InvalidPage(page_number))?;

        let render_error = |message: String| DocumentError::Render {
            page: page_number,
            message,
        };

        let target_width = (page.width().value * scale).round().max(1.0) as i32;
        let config = PdfRenderConfig::new().set_target_width(target_width);
        let bitmap = page
            .render_with_config(&config)
            .map_err(|err| render_error(err.to_string()))?;

        let width = u32::try_from(bitmap.width()).map_err(|err| render_error(err.to_string()))?;
        let height =
            u32::try_from(bitmap.height()).map_err(|err| render_error(err.to_string()))?;
        let rgba = bitmap.as_rgba_bytes().to_vec();

        Ok(PageBitmap::new(page_number, width, height, rgba))
    }
}
