// SPDX-License-Identifier: MPL-2.0
//! Page rendering delegate.
//!
//! For an admitted document: decode, learn the page count, then render pages
//! `1..=N` in order, filtering each one with the current reading filter.
//! Everything here is synchronous and meant to run on a blocking worker; the
//! results are pushed to a sink that can stop the run early.

use super::engine::{DecodedDocument, DocumentEngine};
use super::pixel_filter::PixelFilter;
use super::{DocumentRef, DocumentToken, PageBitmap};
use crate::domain::FilterSpec;
use crate::error::DocumentError;
use std::ops::ControlFlow;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Version counter of the reading filter.
///
/// Bumped every time a slider moves. A filtered bitmap tagged with an older
/// revision is out of date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FilterRevision(u64);

impl FilterRevision {
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// Newest filter revision, shared with refilter workers.
///
/// A worker checks it between pages and gives up once a newer revision has
/// been published.
#[derive(Debug, Clone, Default)]
pub struct LatestRevision(Arc<AtomicU64>);

impl LatestRevision {
    pub fn publish(&self, revision: FilterRevision) {
        self.0.store(revision.0, Ordering::Release);
    }

    #[must_use]
    pub fn is_current(&self, revision: FilterRevision) -> bool {
        self.0.load(Ordering::Acquire) == revision.0
    }
}

/// One page render request.
#[derive(Debug, Clone, PartialEq)]
pub struct PageRequest {
    pub token: DocumentToken,
    /// One-based.
    pub page_number: u32,
    pub filter: FilterSpec,
}

/// Builds the render requests for a decoded document, in page order.
#[must_use]
pub fn plan(token: DocumentToken, page_count: u32, filter: &FilterSpec) -> Vec<PageRequest> {
    (1..=page_count)
        .map(|page_number| PageRequest {
            token,
            page_number,
            filter: filter.clone(),
        })
        .collect()
}

/// Raw and filtered bitmaps of one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageImages {
    pub raw: PageBitmap,
    pub filtered: PageBitmap,
}

/// Outcome of one page request.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub token: DocumentToken,
    pub page_number: u32,
    pub revision: FilterRevision,
    pub result: Result<PageImages, DocumentError>,
}

/// Progress of a full document run.
#[derive(Debug, Clone)]
pub enum RenderEvent {
    Decoded {
        token: DocumentToken,
        result: Result<DecodedDocument, DocumentError>,
    },
    Page(RenderedPage),
}

/// Decodes `document` and renders all its pages.
///
/// A failed decode is reported once and ends the run. A failed page is
/// reported for that page only. The sink returning `Break` stops the run
/// before the next request is issued.
pub fn run<F>(
    engine: &dyn DocumentEngine,
    document: &DocumentRef,
    filter: &FilterSpec,
    revision: FilterRevision,
    scale: f32,
    mut sink: F,
) where
    F: FnMut(RenderEvent) -> ControlFlow<()>,
{
    let token = document.token();
    let result = engine.decode(document.path());

    match &result {
        Ok(decoded) => {
            tracing::info!(%token, pages = decoded.page_count, "document decoded");
        }
        Err(err) => tracing::warn!(%token, error = %err, "document decode failed"),
    }

    let page_count = result.as_ref().ok().map(|decoded| decoded.page_count);
    if sink(RenderEvent::Decoded { token, result }).is_break() {
        return;
    }

    if let Some(page_count) = page_count {
        render_pages(engine, document, page_count, filter, revision, scale, |page| {
            sink(RenderEvent::Page(page))
        });
    }
}

/// Renders pages `1..=page_count` of an already decoded document, in order.
pub fn render_pages<F>(
    engine: &dyn DocumentEngine,
    document: &DocumentRef,
    page_count: u32,
    filter: &FilterSpec,
    revision: FilterRevision,
    scale: f32,
    mut sink: F,
) where
    F: FnMut(RenderedPage) -> ControlFlow<()>,
{
    let pixel_filter = PixelFilter::new(filter);

    for request in plan(document.token(), page_count, filter) {
        let result = engine
            .render_page(document.path(), request.page_number, scale)
            .map(|raw| {
                let filtered = raw.filtered(&pixel_filter);
                PageImages { raw, filtered }
            });

        if let Err(err) = &result {
            tracing::warn!(
                token = %request.token,
                page = request.page_number,
                error = %err,
                "page render failed"
            );
        }

        let page = RenderedPage {
            token: request.token,
            page_number: request.page_number,
            revision,
            result,
        };
        if sink(page).is_break() {
            tracing::debug!(token = %request.token, "render run stopped by receiver");
            return;
        }
    }
}

/// Re-filtered bitmaps for already rendered pages.
#[derive(Debug, Clone)]
pub struct Refiltered {
    pub token: DocumentToken,
    pub revision: FilterRevision,
    pub pages: Vec<PageBitmap>,
}

/// Applies `filter` to cached raw bitmaps.
///
/// Returns `None` as soon as `latest` moves past `revision`; the remaining
/// pages are not filtered.
#[must_use]
pub fn refilter(
    token: DocumentToken,
    revision: FilterRevision,
    raw_pages: &[PageBitmap],
    filter: &FilterSpec,
    latest: &LatestRevision,
) -> Option<Refiltered> {
    let pixel_filter = PixelFilter::new(filter);
    let mut pages = Vec::with_capacity(raw_pages.len());
    for raw in raw_pages {
        if !latest.is_current(revision) {
            tracing::trace!(?revision, done = pages.len(), "refilter superseded");
            return None;
        }
        pages.push(raw.filtered(&pixel_filter));
    }
    Some(Refiltered {
        token,
        revision,
        pages,
    })
}
