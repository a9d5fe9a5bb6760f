// SPDX-License-Identifier: MPL-2.0
//! Floating reading controller: a round toggle button in the bottom-right
//! corner and, above it, a panel holding the darkness and coffee sliders.
//!
//! Visibility is a two-state machine. The toggle flips it; a pointer press
//! or touch anywhere outside both the panel and the toggle hides it. The
//! outside-press listener is a subscription that only exists while the panel
//! is visible.

mod view;

pub use view::{view, ViewContext};

use crate::domain::{FilterSettings, Level};
use crate::ui::design_tokens::{sizing, spacing};
use iced::{event, mouse, touch, Point, Rectangle, Size, Subscription};

// =============================================================================
// Visibility state machine
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelVisibility {
    #[default]
    Hidden,
    Visible,
}

impl PanelVisibility {
    #[must_use]
    pub fn is_visible(self) -> bool {
        self == PanelVisibility::Visible
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            PanelVisibility::Hidden => PanelVisibility::Visible,
            PanelVisibility::Visible => PanelVisibility::Hidden,
        }
    }

    /// State after a pointer press at `position`.
    ///
    /// Presses inside the panel or on the toggle leave the state unchanged;
    /// the toggle's own click is handled separately.
    #[must_use]
    pub fn after_pointer_down(self, position: Point, layout: &PanelLayout) -> Self {
        match self {
            PanelVisibility::Visible if !layout.contains(position) => PanelVisibility::Hidden,
            other => other,
        }
    }
}

// =============================================================================
// Layout
// =============================================================================

/// Screen rectangles of the floating controller for a given window size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelLayout {
    pub panel: Rectangle,
    pub toggle: Rectangle,
}

/// Distance from the window's right and bottom edges.
pub const CONTROLLER_MARGIN: f32 = spacing::XL;

/// Vertical gap between the panel and the toggle.
pub const PANEL_GAP: f32 = spacing::SM;

impl PanelLayout {
    #[must_use]
    pub fn for_window(window: Size) -> Self {
        let toggle = Rectangle {
            x: window.width - CONTROLLER_MARGIN - sizing::TOGGLE_BUTTON,
            y: window.height - CONTROLLER_MARGIN - sizing::TOGGLE_BUTTON,
            width: sizing::TOGGLE_BUTTON,
            height: sizing::TOGGLE_BUTTON,
        };
        let panel = Rectangle {
            x: window.width - CONTROLLER_MARGIN - sizing::PANEL_MIN_WIDTH,
            y: toggle.y - PANEL_GAP - sizing::PANEL_HEIGHT,
            width: sizing::PANEL_MIN_WIDTH,
            height: sizing::PANEL_HEIGHT,
        };
        Self { panel, toggle }
    }

    /// Whether `position` hits the panel or the toggle.
    #[must_use]
    pub fn contains(&self, position: Point) -> bool {
        self.panel.contains(position) || self.toggle.contains(position)
    }
}

// =============================================================================
// Component
// =============================================================================

#[derive(Debug, Clone)]
pub enum Message {
    TogglePressed,
    CursorMoved(Point),
    /// Mouse press at the last known cursor position.
    PointerPressed,
    /// Touch press, which carries its own position.
    TouchPressed(Point),
    WindowResized(Size),
    DarknessChanged(f32),
    CoffeeChanged(f32),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    LevelsChanged(FilterSettings),
}

#[derive(Debug, Clone)]
pub struct State {
    visibility: PanelVisibility,
    levels: FilterSettings,
    window: Size,
    cursor: Option<Point>,
}

impl State {
    #[must_use]
    pub fn new(levels: FilterSettings, window: Size) -> Self {
        Self {
            visibility: PanelVisibility::Hidden,
            levels,
            window,
            cursor: None,
        }
    }

    #[must_use]
    pub fn visibility(&self) -> PanelVisibility {
        self.visibility
    }

    #[must_use]
    pub fn levels(&self) -> FilterSettings {
        self.levels
    }

    #[must_use]
    pub fn layout(&self) -> PanelLayout {
        PanelLayout::for_window(self.window)
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::TogglePressed => {
                self.visibility = self.visibility.toggled();
                self.cursor = None;
                tracing::trace!(visibility = ?self.visibility, "panel toggled");
                Event::None
            }
            Message::CursorMoved(position) => {
                self.cursor = Some(position);
                Event::None
            }
            Message::PointerPressed => {
                // Without a cursor move since opening, the pointer is still
                // on the toggle.
                if let Some(position) = self.cursor {
                    self.press_at(position);
                }
                Event::None
            }
            Message::TouchPressed(position) => {
                self.press_at(position);
                Event::None
            }
            Message::WindowResized(size) => {
                self.window = size;
                Event::None
            }
            Message::DarknessChanged(value) => self.set_levels(FilterSettings {
                darkness: Level::from_slider(value),
                ..self.levels
            }),
            Message::CoffeeChanged(value) => self.set_levels(FilterSettings {
                coffee: Level::from_slider(value),
                ..self.levels
            }),
        }
    }

    fn press_at(&mut self, position: Point) {
        self.visibility = self
            .visibility
            .after_pointer_down(position, &self.layout());
        if !self.visibility.is_visible() {
            self.cursor = None;
        }
    }

    fn set_levels(&mut self, levels: FilterSettings) -> Event {
        if levels == self.levels {
            return Event::None;
        }
        self.levels = levels;
        Event::LevelsChanged(levels)
    }

    /// Window size tracking, always active.
    pub fn window_subscription() -> Subscription<Message> {
        event::listen_with(|event, _status, _window| match event {
            event::Event::Window(
                iced::window::Event::Opened { size, .. } | iced::window::Event::Resized(size),
            ) => Some(Message::WindowResized(size)),
            _ => None,
        })
    }

    /// Outside-press listener, attached only while the panel is visible.
    ///
    /// Captured events count too: a press on the page list or a toast still
    /// closes the panel.
    pub fn subscription(&self) -> Subscription<Message> {
        if !self.visibility.is_visible() {
            return Subscription::none();
        }
        event::listen_with(|event, _status, _window| match event {
            event::Event::Mouse(mouse::Event::CursorMoved { position }) => {
                Some(Message::CursorMoved(position))
            }
            event::Event::Mouse(mouse::Event::ButtonPressed(_)) => Some(Message::PointerPressed),
            event::Event::Touch(touch::Event::FingerPressed { position, .. }) => {
                Some(Message::TouchPressed(position))
            }
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Size = Size {
        width: 1000.0,
        height: 800.0,
    };

    fn state() -> State {
        State::new(FilterSettings::new(Level::new(90), Level::MIN), WINDOW)
    }

    #[test]
    fn panel_starts_hidden_and_toggles() {
        let mut state = state();
        assert_eq!(state.visibility(), PanelVisibility::Hidden);
        state.update(Message::TogglePressed);
        assert_eq!(state.visibility(), PanelVisibility::Visible);
        state.update(Message::TogglePressed);
        assert_eq!(state.visibility(), PanelVisibility::Hidden);
    }

    #[test]
    fn layout_anchors_controller_bottom_right() {
        let layout = PanelLayout::for_window(WINDOW);
        assert_eq!(
            layout.toggle.x + layout.toggle.width,
            WINDOW.width - CONTROLLER_MARGIN
        );
        assert_eq!(
            layout.toggle.y + layout.toggle.height,
            WINDOW.height - CONTROLLER_MARGIN
        );
        assert_eq!(layout.panel.y + layout.panel.height + PANEL_GAP, layout.toggle.y);
        assert!(layout.panel.width >= sizing::PANEL_MIN_WIDTH);
    }

    #[test]
    fn press_outside_hides_visible_panel() {
        let layout = PanelLayout::for_window(WINDOW);
        let outside = Point::new(10.0, 10.0);
        assert_eq!(
            PanelVisibility::Visible.after_pointer_down(outside, &layout),
            PanelVisibility::Hidden
        );
    }

    #[test]
    fn press_inside_panel_or_toggle_keeps_it_visible() {
        let layout = PanelLayout::for_window(WINDOW);
        for point in [layout.panel.center(), layout.toggle.center()] {
            assert_eq!(
                PanelVisibility::Visible.after_pointer_down(point, &layout),
                PanelVisibility::Visible
            );
        }
    }

    #[test]
    fn press_while_hidden_is_a_no_op() {
        let layout = PanelLayout::for_window(WINDOW);
        assert_eq!(
            PanelVisibility::Hidden.after_pointer_down(Point::ORIGIN, &layout),
            PanelVisibility::Hidden
        );
    }

    #[test]
    fn outside_press_through_messages() {
        let mut state = state();
        state.update(Message::TogglePressed);
        state.update(Message::CursorMoved(Point::new(5.0, 5.0)));
        state.update(Message::PointerPressed);
        assert_eq!(state.visibility(), PanelVisibility::Hidden);
    }

    #[test]
    fn touch_outside_hides_panel_without_cursor_moves() {
        let mut state = state();
        state.update(Message::TogglePressed);
        state.update(Message::TouchPressed(Point::new(5.0, 5.0)));
        assert_eq!(state.visibility(), PanelVisibility::Hidden);
    }

    #[test]
    fn touch_on_panel_keeps_it_visible() {
        let mut state = state();
        state.update(Message::TogglePressed);
        state.update(Message::TouchPressed(state.layout().panel.center()));
        assert!(state.visibility().is_visible());
    }

    #[test]
    fn resize_moves_hit_regions() {
        let mut state = state();
        state.update(Message::TogglePressed);
        state.update(Message::WindowResized(Size::new(400.0, 300.0)));
        let toggle_center = state.layout().toggle.center();
        state.update(Message::CursorMoved(toggle_center));
        state.update(Message::PointerPressed);
        assert!(state.visibility().is_visible());
    }

    #[test]
    fn slider_messages_emit_clamped_levels() {
        let mut state = state();
        let event = state.update(Message::CoffeeChanged(140.0));
        assert_eq!(
            event,
            Event::LevelsChanged(FilterSettings::new(Level::new(90), Level::MAX))
        );
        assert_eq!(state.update(Message::CoffeeChanged(100.0)), Event::None);
    }

    #[test]
    fn slider_changes_do_not_affect_visibility() {
        let mut state = state();
        state.update(Message::TogglePressed);
        state.update(Message::DarknessChanged(10.0));
        assert!(state.visibility().is_visible());
        assert_eq!(state.levels().darkness, Level::new(10));
    }
}
