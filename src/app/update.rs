// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application root.
//!
//! Handlers borrow the pieces of `App` they need through [`UpdateContext`] and
//! return the follow-up [`Task`].

use super::config::Config;
use super::persistence::LevelPersistence;
use super::Message;
use crate::document::render::{self, Refiltered, RenderEvent};
use crate::document::{
    Candidate, DocumentEngine, DocumentRef, DropOutcome, DropSession, Gate, PageBitmap,
};
use crate::domain::FilterSettings;
use crate::error::{DocumentError, Error};
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{self, Notification};
use crate::ui::panel;
use crate::ui::viewer::{self, Applied};
use iced::futures::channel::mpsc;
use iced::futures::{future, stream, StreamExt};
use iced::Task;
use std::ops::ControlFlow;
use std::path::PathBuf;
use std::sync::Arc;

/// Mutable view of the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub config: &'a mut Config,
    pub persistence: &'a mut LevelPersistence,
    pub gate: &'a mut Gate,
    pub drop_session: &'a mut DropSession,
    pub engine: &'a Arc<dyn DocumentEngine>,
    pub viewer: &'a mut viewer::State,
    pub panel: &'a mut panel::State,
    pub notifications: &'a mut notifications::Manager,
}

pub fn handle_viewer_message(
    ctx: &mut UpdateContext<'_>,
    message: viewer::Message,
) -> Task<Message> {
    match ctx.viewer.update(message) {
        viewer::Event::None => Task::none(),
        viewer::Event::OpenFileRequested => {
            handle_open_file_dialog(ctx.i18n.tr("dialog-pdf-filter"))
        }
    }
}

pub fn handle_panel_message(ctx: &mut UpdateContext<'_>, message: panel::Message) -> Task<Message> {
    match ctx.panel.update(message) {
        panel::Event::None => Task::none(),
        panel::Event::LevelsChanged(levels) => {
            let save = if ctx.config.reading.remember_levels {
                persist_levels(ctx, levels)
            } else {
                Task::none()
            };
            Task::batch([save, refilter_displayed_pages(ctx)])
        }
    }
}

/// Stores `levels` and schedules a deferred write of the settings file.
fn persist_levels(ctx: &mut UpdateContext<'_>, levels: FilterSettings) -> Task<Message> {
    ctx.config.reading.set_levels(levels);
    ctx.persistence.schedule(ctx.config.clone())
}

pub fn handle_levels_saved(ctx: &mut UpdateContext<'_>, result: Result<(), Error>) -> Task<Message> {
    if ctx.persistence.finished(result) {
        ctx.notifications
            .push(Notification::warning("notification-config-save-error"));
    }
    Task::none()
}

/// Opens the system file picker restricted to PDF files.
pub fn handle_open_file_dialog(filter_name: String) -> Task<Message> {
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .add_filter(filter_name, &["pdf", "PDF"])
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::OpenFileDialogResult,
    )
}

pub fn handle_open_file_dialog_result(
    ctx: &mut UpdateContext<'_>,
    path: Option<PathBuf>,
) -> Task<Message> {
    let Some(path) = path else {
        // User cancelled the dialog
        return Task::none();
    };
    offer_candidate(ctx, Candidate::from_path(path))
}

/// Handles a file dropped on the window.
///
/// Only the first file of a multi-file drop reaches the gate.
pub fn handle_file_dropped(ctx: &mut UpdateContext<'_>, path: PathBuf) -> Task<Message> {
    if !ctx.drop_session.dropped() {
        tracing::debug!(path = %path.display(), "ignoring extra file of a multi-file drop");
        return Task::none();
    }
    offer_candidate(ctx, Candidate::from_path(path))
}

/// Offers a candidate to the gate and, if admitted, starts rendering it.
pub fn offer_candidate(ctx: &mut UpdateContext<'_>, candidate: Candidate) -> Task<Message> {
    match ctx.gate.admit(candidate) {
        DropOutcome::Admitted(document) => {
            ctx.notifications.clear_document_errors();
            ctx.viewer.begin(document.clone());
            start_render(ctx, document)
        }
        DropOutcome::Rejected { media_type } => {
            if ctx.config.general.notify_rejected_drops {
                ctx.notifications.push(
                    Notification::info("notification-rejected-drop")
                        .with_arg("type", media_type.to_string()),
                );
            }
            Task::none()
        }
    }
}

/// Decodes and renders `document` on a blocking worker.
///
/// Events are streamed back through a channel. Aborting the returned task
/// drops the receiver; the worker notices on its next send and stops.
fn start_render(ctx: &mut UpdateContext<'_>, document: DocumentRef) -> Task<Message> {
    let engine = Arc::clone(ctx.engine);
    let filter = ctx.panel.levels().filter();
    let revision = ctx.viewer.revision();
    let scale = ctx.config.reading.effective_render_scale();
    let (sender, receiver) = mpsc::unbounded::<RenderEvent>();

    let worker = async move {
        let joined = tokio::task::spawn_blocking(move || {
            render::run(engine.as_ref(), &document, &filter, revision, scale, |event| {
                match sender.unbounded_send(event) {
                    Ok(()) => ControlFlow::Continue(()),
                    Err(_) => ControlFlow::Break(()),
                }
            });
        })
        .await;
        if let Err(err) = joined {
            tracing::error!(error = %err, "render worker failed");
        }
    };

    let events = stream::select(
        receiver,
        stream::once(worker).filter_map(|()| future::ready(None)),
    );

    let (task, handle) = Task::stream(events).map(Message::Render).abortable();
    ctx.viewer.track(handle);
    task
}

pub fn handle_render_event(ctx: &mut UpdateContext<'_>, event: RenderEvent) -> Task<Message> {
    match ctx.viewer.apply_render_event(event) {
        Applied::Stale | Applied::Updated => Task::none(),
        Applied::NeedsRefilter(raw) => refilter_task(ctx, vec![raw]),
        Applied::Failed(err) => {
            report_document_error(ctx, &err);
            Task::none()
        }
    }
}

/// Page failures get a toast. A failed decode already shows its static error
/// text, so only a missing engine is worth an extra notice.
fn report_document_error(ctx: &mut UpdateContext<'_>, err: &DocumentError) {
    match err {
        DocumentError::InvalidPage(_)
        | DocumentError::Render { .. }
        | DocumentError::EngineUnavailable(_) => {
            ctx.notifications
                .push(Notification::from_document_error(err));
        }
        DocumentError::Load(_) => {}
    }
}

pub fn handle_refiltered(
    ctx: &mut UpdateContext<'_>,
    refiltered: Option<Refiltered>,
) -> Task<Message> {
    if let Some(refiltered) = refiltered {
        ctx.viewer.apply_refiltered(refiltered);
    }
    Task::none()
}

/// Starts a new filter revision and re-filters every page on screen.
fn refilter_displayed_pages(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.viewer.bump_revision();
    let raw_pages = ctx.viewer.raw_pages();
    if raw_pages.is_empty() {
        return Task::none();
    }
    refilter_task(ctx, raw_pages)
}

/// Re-filters `raw_pages` with the current levels on a blocking worker.
///
/// The job is aborted when the revision moves on, and the worker itself stops
/// between pages once it sees a newer revision.
fn refilter_task(ctx: &mut UpdateContext<'_>, raw_pages: Vec<PageBitmap>) -> Task<Message> {
    let Some(token) = ctx.viewer.document().map(DocumentRef::token) else {
        return Task::none();
    };
    let revision = ctx.viewer.revision();
    let latest = ctx.viewer.latest_revision();
    let filter = ctx.panel.levels().filter();

    let (task, handle) = Task::perform(
        async move {
            tokio::task::spawn_blocking(move || {
                render::refilter(token, revision, &raw_pages, &filter, &latest)
            })
            .await
            .inspect_err(|err| tracing::error!(error = %err, "refilter worker failed"))
            .ok()
            .flatten()
        },
        Message::Refiltered,
    )
    .abortable();
    ctx.viewer.track_refilter(handle);
    task
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::PdfiumEngine;
    use iced::Size;

    struct Fixture {
        i18n: I18n,
        config: Config,
        persistence: LevelPersistence,
        gate: Gate,
        drop_session: DropSession,
        engine: Arc<dyn DocumentEngine>,
        viewer: viewer::State,
        panel: panel::State,
        notifications: notifications::Manager,
    }

    impl Fixture {
        fn new() -> Self {
            let config = Config::default();
            Self {
                i18n: I18n::new(Some("en-US".to_string()), &config),
                panel: panel::State::new(config.reading.levels(), Size::new(1000.0, 800.0)),
                config,
                persistence: LevelPersistence::new(),
                gate: Gate::new(),
                drop_session: DropSession::default(),
                engine: Arc::new(PdfiumEngine::new()),
                viewer: viewer::State::new(),
                notifications: notifications::Manager::new(),
            }
        }

        fn ctx(&mut self) -> UpdateContext<'_> {
            UpdateContext {
                i18n: &self.i18n,
                config: &mut self.config,
                persistence: &mut self.persistence,
                gate: &mut self.gate,
                drop_session: &mut self.drop_session,
                engine: &self.engine,
                viewer: &mut self.viewer,
                panel: &mut self.panel,
                notifications: &mut self.notifications,
            }
        }
    }

    #[test]
    fn slider_drag_updates_levels_without_touching_notifications() {
        let mut fixture = Fixture::new();
        for coffee in 0..=100 {
            let _ = handle_panel_message(
                &mut fixture.ctx(),
                panel::Message::CoffeeChanged(coffee as f32),
            );
        }
        assert_eq!(fixture.config.reading.coffee, Some(100));
        assert!(!fixture.notifications.has_notifications());
    }

    #[test]
    fn repeated_save_failures_raise_a_single_toast() {
        let mut fixture = Fixture::new();
        for _ in 0..50 {
            let _ = handle_levels_saved(&mut fixture.ctx(), Err(Error::Io("denied".into())));
        }
        assert_eq!(fixture.notifications.visible_count(), 1);
        assert_eq!(fixture.notifications.queued_count(), 0);
    }

    #[test]
    fn remember_levels_off_keeps_config_untouched() {
        let mut fixture = Fixture::new();
        fixture.config.reading.remember_levels = false;
        let _ = handle_panel_message(&mut fixture.ctx(), panel::Message::DarknessChanged(10.0));
        assert_eq!(fixture.config.reading.levels(), Config::default().reading.levels());
        assert_eq!(fixture.panel.levels().darkness.value(), 10);
    }

    #[test]
    fn slider_change_supersedes_running_refilters() {
        let mut fixture = Fixture::new();
        let latest = fixture.viewer.latest_revision();
        let before = fixture.viewer.revision();
        let _ = handle_panel_message(&mut fixture.ctx(), panel::Message::DarknessChanged(20.0));
        assert!(!latest.is_current(before));
        assert!(latest.is_current(fixture.viewer.revision()));
    }
}
