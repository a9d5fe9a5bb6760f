// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::document::render::{Refiltered, RenderEvent};
use crate::error::Error;
use crate::ui::notifications;
use crate::ui::panel;
use crate::ui::viewer;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Viewer(viewer::Message),
    Panel(panel::Message),
    Notification(notifications::NotificationMessage),
    /// A file is dragged over the window.
    FileHovered,
    /// The drag left the window without dropping.
    FilesHoveredLeft,
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// Result from the open file dialog.
    OpenFileDialogResult(Option<PathBuf>),
    /// Progress of a decode and render run.
    Render(RenderEvent),
    /// Pages re-filtered after a slider change. `None` if the worker died or
    /// a newer slider value superseded it.
    Refiltered(Option<Refiltered>),
    /// Slider levels were written to `settings.toml`, or failed to be.
    LevelsSaved(Result<(), Error>),
    /// Periodic tick for notification auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional PDF to open on startup. Goes through the same gate as a drop.
    pub file_path: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `NIGHTREAD_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
