// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! File drops are routed to the gate. Pointer and window events needed by the
//! reading controller are owned by the panel itself.

use super::Message;
use crate::ui::panel;
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Routes window drag-and-drop events, whatever the widget under the cursor.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(window::Event::FileHovered(_)) => Some(Message::FileHovered),
        event::Event::Window(window::Event::FilesHoveredLeft) => Some(Message::FilesHoveredLeft),
        event::Event::Window(window::Event::FileDropped(path)) => {
            Some(Message::FileDropped(path))
        }
        _ => None,
    })
}

/// Window tracking plus the outside-press listener while the panel is open.
pub fn create_panel_subscription(panel: &panel::State) -> Subscription<Message> {
    Subscription::batch([panel::State::window_subscription(), panel.subscription()])
        .map(Message::Panel)
}

/// Creates a periodic tick subscription for notification auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
