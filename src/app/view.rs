// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layers, bottom to top: the reading surface with the viewer, the header,
//! the toasts and the floating controller.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::notifications::{self, Toast};
use crate::ui::panel;
use crate::ui::styles;
use crate::ui::viewer;
use iced::widget::{Container, Stack, Text};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub viewer: &'a viewer::State,
    /// A file is being dragged over the window.
    pub drop_active: bool,
    pub panel: &'a panel::State,
    pub notifications: &'a notifications::Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let background = ctx.panel.levels().background();

    let viewer = ctx.viewer.view(ctx.i18n, ctx.drop_active).map(Message::Viewer);
    let reading_surface = Container::new(viewer)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::reading_background(background));

    let controller = panel::view(panel::ViewContext {
        i18n: ctx.i18n,
        state: ctx.panel,
    })
    .map(Message::Panel);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(reading_surface)
        .push(view_header(ctx.i18n))
        .push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification))
        .push(controller)
        .into()
}

/// Translucent title box in the top-left corner.
fn view_header(i18n: &I18n) -> Element<'_, Message> {
    let title = Container::new(Text::new(i18n.tr("header-title")).size(typography::TITLE_MD))
        .padding([spacing::XS, spacing::MD])
        .style(styles::container::header);

    Container::new(title)
        .width(Length::Fill)
        .height(Length::Shrink)
        .align_x(alignment::Horizontal::Left)
        .padding(spacing::MD)
        .into()
}
