// SPDX-License-Identifier: MPL-2.0
//! Vertically scrolling list of pages.

use super::{Message, PageSlot};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{image, scrollable, Column, Container, Text};
use iced::{alignment, ContentFit, Element, Length};

pub fn view<'a>(pages: &'a [PageSlot], i18n: &'a I18n) -> Element<'a, Message> {
    let column = pages
        .iter()
        .zip(1u32..)
        .fold(
            Column::new()
                .spacing(spacing::LG)
                .padding([spacing::XL * 2.0, spacing::LG])
                .align_x(alignment::Horizontal::Center)
                .width(Length::Fill),
            |column, (slot, page_number)| column.push(page(slot, page_number, i18n)),
        );

    scrollable(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn page<'a>(slot: &'a PageSlot, page_number: u32, i18n: &'a I18n) -> Element<'a, Message> {
    let body: Element<'a, Message> = match slot {
        PageSlot::Rendered(rendered) => image(rendered.handle().clone())
            .width(Length::Fill)
            .content_fit(ContentFit::Contain)
            .into(),
        PageSlot::Loading => placeholder(i18n.tr("viewer-loading-page")),
        PageSlot::Failed => placeholder(
            i18n.tr_with_args("error-render-page", &[("page", &page_number.to_string())]),
        ),
    };

    let label = Text::new(i18n.tr_with_args(
        "viewer-page-label",
        &[("page", &page_number.to_string())],
    ))
    .size(typography::CAPTION)
    .color(palette::GRAY_400);

    Column::new()
        .spacing(spacing::XXS)
        .align_x(alignment::Horizontal::Center)
        .max_width(sizing::PAGE_MAX_WIDTH)
        .push(body)
        .push(label)
        .into()
}

fn placeholder<'a>(text: String) -> Element<'a, Message> {
    Container::new(Text::new(text).size(typography::BODY))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::PAGE_PLACEHOLDER_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::page_placeholder)
        .into()
}
