// SPDX-License-Identifier: MPL-2.0
//! Full-window states shown instead of the page list: the drop target, the
//! decode indicator and the decode error.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Text};
use iced::{alignment, Color, Element, Length};

/// Message key of the drop target hint.
pub(super) fn hint_key(drop_active: bool) -> &'static str {
    if drop_active {
        "viewer-drop-active"
    } else {
        "viewer-drop-hint"
    }
}

/// Drop target with an "Open PDF…" button for the system file dialog.
pub fn view(i18n: &I18n, drop_active: bool) -> Element<'_, Message> {
    let glyph = Text::new("⇩").size(sizing::ICON_LG * 2.0);

    let hint = Text::new(i18n.tr(hint_key(drop_active))).size(typography::BODY_LG);

    let open_button = button(Text::new(i18n.tr("viewer-open-button")))
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::primary)
        .on_press(Message::OpenPressed);

    let target = Container::new(
        Column::new()
            .spacing(spacing::LG)
            .align_x(alignment::Horizontal::Center)
            .push(glyph)
            .push(hint)
            .push(open_button),
    )
    .padding(spacing::XL)
    .align_x(alignment::Horizontal::Center)
    .style(if drop_active {
        styles::container::drop_zone_active
    } else {
        styles::container::drop_zone
    });

    centered(target.into())
}

pub fn loading(i18n: &I18n) -> Element<'_, Message> {
    centered(
        Text::new(i18n.tr("viewer-loading-document"))
            .size(typography::BODY_LG)
            .color(palette::GRAY_400)
            .into(),
    )
}

/// Static error text; the user recovers by dropping another file.
pub fn failed(i18n: &I18n) -> Element<'_, Message> {
    centered(
        Text::new(i18n.tr("viewer-error-document"))
            .size(typography::BODY_LG)
            .color(Color {
                a: 0.9,
                ..palette::ERROR_500
            })
            .into(),
    )
}

fn centered(content: Element<'_, Message>) -> Element<'_, Message> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::Config;

    #[test]
    fn hint_switches_while_a_file_hovers() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        assert_eq!(i18n.tr(hint_key(false)), "Drop a PDF file here");
        assert_eq!(i18n.tr(hint_key(true)), "Drop the PDF file here...");
    }

    #[test]
    fn active_hint_is_translated() {
        let i18n = I18n::new(Some("fr".to_string()), &Config::default());
        assert!(!i18n.tr(hint_key(true)).starts_with("MISSING"));
    }
}
