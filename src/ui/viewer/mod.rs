// SPDX-License-Identifier: MPL-2.0
//! Viewer component: drop zone, loading and error states, and the page list.
//!
//! The viewer owns the currently admitted document and everything derived
//! from it. Every asynchronous result is checked against the current
//! [`DocumentToken`] before it touches the state; results for a document the
//! user already replaced are logged and dropped.

mod drop_zone;
mod pages;

use crate::document::render::{
    FilterRevision, LatestRevision, PageImages, Refiltered, RenderEvent,
};
use crate::document::{DocumentRef, DocumentToken, PageBitmap, RenderedPage};
use crate::error::DocumentError;
use crate::i18n::fluent::I18n;
use iced::task;
use iced::widget::image;
use iced::Element;
use std::sync::Arc;

/// Load progress of the current document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// Nothing admitted yet.
    #[default]
    Empty,
    Decoding,
    Ready {
        page_count: u32,
    },
    /// Decode failed. Terminal until another file is admitted.
    Failed,
}

/// Display state of one page.
#[derive(Debug, Clone)]
pub enum PageSlot {
    Loading,
    Rendered(RenderedSlot),
    Failed,
}

/// A rendered page ready for display.
#[derive(Debug, Clone)]
pub struct RenderedSlot {
    raw: PageBitmap,
    handle: image::Handle,
    revision: FilterRevision,
}

impl RenderedSlot {
    fn new(raw: PageBitmap, filtered: PageBitmap, revision: FilterRevision) -> Self {
        Self {
            raw,
            handle: to_handle(filtered),
            revision,
        }
    }

    #[must_use]
    pub fn handle(&self) -> &image::Handle {
        &self.handle
    }

    #[must_use]
    pub fn revision(&self) -> FilterRevision {
        self.revision
    }
}

fn to_handle(bitmap: PageBitmap) -> image::Handle {
    let pixels = Arc::unwrap_or_clone(bitmap.rgba);
    image::Handle::from_rgba(bitmap.width, bitmap.height, pixels)
}

/// What applying an asynchronous result did to the state.
#[derive(Debug, Clone, PartialEq)]
pub enum Applied {
    /// Result belonged to another document or an older filter.
    Stale,
    Updated,
    /// A page arrived filtered with an older revision and needs a refilter.
    NeedsRefilter(PageBitmap),
    /// The result carried an error the user should hear about.
    Failed(DocumentError),
}

#[derive(Debug, Clone)]
pub enum Message {
    OpenPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    OpenFileRequested,
}

#[derive(Default)]
pub struct State {
    document: Option<DocumentRef>,
    status: LoadStatus,
    pages: Vec<PageSlot>,
    revision: FilterRevision,
    latest: LatestRevision,
    in_flight: Option<task::Handle>,
    /// Refilter jobs started for the current revision.
    refilters: Vec<task::Handle>,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn document(&self) -> Option<&DocumentRef> {
        self.document.as_ref()
    }

    #[must_use]
    pub fn status(&self) -> LoadStatus {
        self.status
    }

    /// Page count of the current document, known only once it decoded.
    #[must_use]
    pub fn page_count(&self) -> Option<u32> {
        match self.status {
            LoadStatus::Ready { page_count } => Some(page_count),
            _ => None,
        }
    }

    #[must_use]
    pub fn pages(&self) -> &[PageSlot] {
        &self.pages
    }

    #[must_use]
    pub fn revision(&self) -> FilterRevision {
        self.revision
    }

    /// Whether decode or page rendering is still running.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        match self.status {
            LoadStatus::Decoding => true,
            LoadStatus::Ready { .. } => self
                .pages
                .iter()
                .any(|slot| matches!(slot, PageSlot::Loading)),
            LoadStatus::Empty | LoadStatus::Failed => false,
        }
    }

    /// Replaces the current document, aborting whatever ran for the old one.
    pub fn begin(&mut self, document: DocumentRef) {
        self.cancel_in_flight();
        self.cancel_refilters();
        tracing::debug!(token = %document.token(), "viewer switched document");
        self.document = Some(document);
        self.status = LoadStatus::Decoding;
        self.pages.clear();
    }

    /// Keeps the abort handle of the task rendering the current document.
    pub fn track(&mut self, handle: task::Handle) {
        self.cancel_in_flight();
        self.in_flight = Some(handle);
    }

    fn cancel_in_flight(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }

    /// Keeps the abort handle of a refilter job for the current revision.
    pub fn track_refilter(&mut self, handle: task::Handle) {
        self.refilters.push(handle);
    }

    fn cancel_refilters(&mut self) {
        for handle in self.refilters.drain(..) {
            handle.abort();
        }
    }

    /// Shared view of the newest revision, for refilter workers.
    #[must_use]
    pub fn latest_revision(&self) -> LatestRevision {
        self.latest.clone()
    }

    /// Starts a new filter revision. Pages already on screen become stale
    /// and refilters for older revisions are abandoned.
    pub fn bump_revision(&mut self) -> FilterRevision {
        self.revision = self.revision.next();
        self.latest.publish(self.revision);
        self.cancel_refilters();
        self.revision
    }

    fn is_current(&self, token: DocumentToken) -> bool {
        self.document.as_ref().map(DocumentRef::token) == Some(token)
    }

    /// Applies one event of a render run.
    pub fn apply_render_event(&mut self, event: RenderEvent) -> Applied {
        match event {
            RenderEvent::Decoded { token, result } => {
                if !self.is_current(token) {
                    tracing::debug!(%token, "discarding stale decode result");
                    return Applied::Stale;
                }
                match result {
                    Ok(decoded) => {
                        self.status = LoadStatus::Ready {
                            page_count: decoded.page_count,
                        };
                        self.pages = vec![PageSlot::Loading; decoded.page_count as usize];
                        Applied::Updated
                    }
                    Err(err) => {
                        self.status = LoadStatus::Failed;
                        self.pages.clear();
                        self.in_flight = None;
                        Applied::Failed(err)
                    }
                }
            }
            RenderEvent::Page(page) => self.apply_page(page),
        }
    }

    fn apply_page(&mut self, page: RenderedPage) -> Applied {
        if !self.is_current(page.token) {
            tracing::debug!(token = %page.token, page = page.page_number, "discarding stale page");
            return Applied::Stale;
        }
        let Some(index) = slot_index(page.page_number, self.pages.len()) else {
            tracing::warn!(page = page.page_number, "page outside decoded range");
            return Applied::Stale;
        };

        let applied = match page.result {
            Ok(PageImages { raw, filtered }) => {
                let applied = if page.revision == self.revision {
                    Applied::Updated
                } else {
                    Applied::NeedsRefilter(raw.clone())
                };
                self.pages[index] = PageSlot::Rendered(RenderedSlot::new(raw, filtered, page.revision));
                applied
            }
            Err(err) => {
                self.pages[index] = PageSlot::Failed;
                Applied::Failed(err)
            }
        };

        if !self.is_loading() {
            self.in_flight = None;
        }
        applied
    }

    /// Swaps in re-filtered pages if they match the current document and
    /// are newer than what is displayed.
    pub fn apply_refiltered(&mut self, refiltered: Refiltered) -> Applied {
        if !self.is_current(refiltered.token) || refiltered.revision != self.revision {
            tracing::trace!(revision = ?refiltered.revision, "discarding stale refilter");
            return Applied::Stale;
        }

        let page_count = self.pages.len();
        for filtered in refiltered.pages {
            let Some(index) = slot_index(filtered.page_number, page_count) else {
                continue;
            };
            if let PageSlot::Rendered(slot) = &mut self.pages[index] {
                if slot.revision < refiltered.revision {
                    slot.handle = to_handle(filtered);
                    slot.revision = refiltered.revision;
                }
            }
        }
        Applied::Updated
    }

    /// Raw bitmaps of every page rendered so far, in page order.
    #[must_use]
    pub fn raw_pages(&self) -> Vec<PageBitmap> {
        self.pages
            .iter()
            .filter_map(|slot| match slot {
                PageSlot::Rendered(rendered) => Some(rendered.raw.clone()),
                PageSlot::Loading | PageSlot::Failed => None,
            })
            .collect()
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::OpenPressed => Event::OpenFileRequested,
        }
    }

    /// `drop_active` is true while a file is dragged over the window.
    pub fn view<'a>(&'a self, i18n: &'a I18n, drop_active: bool) -> Element<'a, Message> {
        match self.status {
            LoadStatus::Empty => drop_zone::view(i18n, drop_active),
            LoadStatus::Decoding => drop_zone::loading(i18n),
            LoadStatus::Failed => drop_zone::failed(i18n),
            LoadStatus::Ready { .. } => pages::view(&self.pages, i18n),
        }
    }
}

fn slot_index(page_number: u32, page_count: usize) -> Option<usize> {
    let index = usize::try_from(page_number.checked_sub(1)?).ok()?;
    (index < page_count).then_some(index)
}
