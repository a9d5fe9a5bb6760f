// SPDX-License-Identifier: MPL-2.0
//! Deferred saving of the slider levels.
//!
//! Dragging a slider emits one change per step. Each change schedules a save
//! that waits for [`SAVE_DELAY`] and aborts the save scheduled before it, so
//! a drag ends up writing `settings.toml` once, off the UI thread.

use super::config::{self, Config};
use super::Message;
use crate::error::Error;
use iced::{task, Task};
use std::time::Duration;

/// Quiet period after the last slider change before the file is written.
pub const SAVE_DELAY: Duration = Duration::from_millis(400);

#[derive(Default)]
pub struct LevelPersistence {
    pending: Option<task::Handle>,
    /// The last save failed; the user was already told.
    failing: bool,
}

impl LevelPersistence {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules a save of `config`, superseding a save still waiting.
    pub fn schedule(&mut self, config: Config) -> Task<Message> {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        let (task, handle) = Task::perform(save_later(config), Message::LevelsSaved).abortable();
        self.pending = Some(handle);
        task
    }

    /// Records how a save ended.
    ///
    /// Returns true when a failure should be shown, which is only for the
    /// first failure after a success.
    pub fn finished(&mut self, result: Result<(), Error>) -> bool {
        match result {
            Ok(()) => {
                tracing::debug!("slider levels saved");
                self.failing = false;
                false
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to persist slider levels");
                !std::mem::replace(&mut self.failing, true)
            }
        }
    }
}

async fn save_later(config: Config) -> Result<(), Error> {
    tokio::time::sleep(SAVE_DELAY).await;
    tokio::task::spawn_blocking(move || config::save(&config))
        .await
        .map_err(|err| Error::Io(err.to_string()))?
}
