// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the viewer and the
//! reading controller.
//!
//! The `App` struct wires together the document gate, the viewer, the floating
//! controller and the notification toasts, and translates messages into side
//! effects like starting a render run or scheduling a save of the slider
//! levels.

pub mod config;
mod message;
pub mod paths;
mod persistence;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::document::{Candidate, DocumentEngine, DropSession, Gate, PdfiumEngine};
use crate::i18n::fluent::I18n;
use crate::ui::notifications;
use crate::ui::panel;
use crate::ui::viewer;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: config::Config,
    level_persistence: persistence::LevelPersistence,
    /// Resolved once at startup; `System` queries the desktop.
    theme: Theme,
    gate: Gate,
    drop_session: DropSession,
    engine: Arc<dyn DocumentEngine>,
    viewer: viewer::State,
    panel: panel::State,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("document", &self.viewer.document())
            .field("status", &self.viewer.status())
            .field("levels", &self.panel.levels())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 1000;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 420;
pub const MIN_WINDOW_HEIGHT: u32 = 360;

fn default_window_size() -> Size {
    Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32)
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: default_window_size(),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot function; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and, when a file was given on the command
    /// line, offers it to the gate like a drop.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        let levels = config.reading.levels();

        let mut app = App {
            i18n,
            theme: config.general.theme_mode.iced_theme(),
            config,
            level_persistence: persistence::LevelPersistence::new(),
            gate: Gate::new(),
            drop_session: DropSession::default(),
            engine: Arc::new(PdfiumEngine::new()),
            viewer: viewer::State::new(),
            panel: panel::State::new(levels, default_window_size()),
            notifications: notifications::Manager::new(),
        };

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(&key));
        }

        let task = match flags.file_path {
            Some(path) => {
                let mut ctx = app.update_context();
                update::offer_candidate(&mut ctx, Candidate::from_path(path))
            }
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        match self.viewer.document() {
            Some(document) => self.i18n.tr_with_args(
                "window-title-document",
                &[("file", &document.display_name())],
            ),
            None => self.i18n.tr("app-title"),
        }
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_panel_subscription(&self.panel),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ])
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            i18n: &self.i18n,
            config: &mut self.config,
            persistence: &mut self.level_persistence,
            gate: &mut self.gate,
            drop_session: &mut self.drop_session,
            engine: &self.engine,
            viewer: &mut self.viewer,
            panel: &mut self.panel,
            notifications: &mut self.notifications,
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.update_context();

        match message {
            Message::Viewer(viewer_message) => {
                update::handle_viewer_message(&mut ctx, viewer_message)
            }
            Message::Panel(panel_message) => update::handle_panel_message(&mut ctx, panel_message),
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::FileHovered => {
                ctx.drop_session.hovered();
                Task::none()
            }
            Message::FilesHoveredLeft => {
                ctx.drop_session.left();
                Task::none()
            }
            Message::FileDropped(path) => update::handle_file_dropped(&mut ctx, path),
            Message::OpenFileDialogResult(path) => {
                update::handle_open_file_dialog_result(&mut ctx, path)
            }
            Message::Render(event) => update::handle_render_event(&mut ctx, event),
            Message::Refiltered(refiltered) => update::handle_refiltered(&mut ctx, refiltered),
            Message::LevelsSaved(result) => update::handle_levels_saved(&mut ctx, result),
            Message::Tick(_) => {
                ctx.notifications
                    .handle_message(&notifications::NotificationMessage::Tick);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            viewer: &self.viewer,
            drop_active: self.drop_session.is_hovering(),
            panel: &self.panel,
            notifications: &self.notifications,
        })
    }
}
