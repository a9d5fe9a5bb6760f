// SPDX-License-Identifier: MPL-2.0
use super::{Message, State, CONTROLLER_MARGIN, PANEL_GAP};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, slider, Column, Container, Row, Space, Text};
use iced::{alignment, Color, Element, Length};

/// Contextual data needed to render the controller.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Renders the controller anchored to the bottom-right corner.
///
/// The returned element fills the window and is meant to be stacked above
/// the page list.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let visible = ctx.state.visibility().is_visible();
    let mut column = Column::new().align_x(alignment::Horizontal::Right);

    if visible {
        column = column
            .push(build_panel(&ctx))
            .push(Space::new().height(Length::Fixed(PANEL_GAP)));
    }
    column = column.push(build_toggle(visible));

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .padding(CONTROLLER_MARGIN)
        .into()
}

fn build_toggle<'a>(open: bool) -> Element<'a, Message> {
    let glyph = Container::new(Text::new("◐").size(sizing::ICON_LG))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    button(glyph)
        .width(Length::Fixed(sizing::TOGGLE_BUTTON))
        .height(Length::Fixed(sizing::TOGGLE_BUTTON))
        .padding(0)
        .on_press(Message::TogglePressed)
        .style(styles::button::controller_toggle(open))
        .into()
}

fn build_panel<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let levels = ctx.state.levels();

    let darkness = slider_group(
        "◐",
        ctx.i18n.tr("panel-darkness"),
        levels.darkness.value(),
        palette::PRIMARY_400,
        Message::DarknessChanged,
    );
    let coffee = slider_group(
        "☕",
        ctx.i18n.tr("panel-coffee"),
        levels.coffee.value(),
        styles::slider::coffee_accent(levels.coffee.value()),
        Message::CoffeeChanged,
    );

    Container::new(Column::new().spacing(spacing::LG).push(darkness).push(coffee))
        .width(Length::Fixed(sizing::PANEL_MIN_WIDTH))
        .height(Length::Fixed(sizing::PANEL_HEIGHT))
        .padding([spacing::MD, spacing::LG - spacing::XXS])
        .align_y(alignment::Vertical::Center)
        .style(styles::container::controller_panel)
        .into()
}

fn slider_group<'a>(
    glyph: &'a str,
    label: String,
    value: u8,
    accent: Color,
    on_change: fn(f32) -> Message,
) -> Element<'a, Message> {
    let heading = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(Text::new(glyph).size(typography::LABEL))
        .push(Text::new(label).size(typography::LABEL));

    let control = slider(0.0..=100.0, f32::from(value), on_change)
        .step(1.0)
        .style(styles::slider::reading(accent));

    Column::new()
        .spacing(spacing::XS)
        .push(heading)
        .push(control)
        .into()
}
