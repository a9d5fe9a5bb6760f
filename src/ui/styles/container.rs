// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::domain::Rgb;
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Converts a domain color into an iced color.
#[must_use]
pub fn to_color(rgb: Rgb) -> Color {
    Color::from_rgb8(rgb.r, rgb.g, rgb.b)
}

/// Full-window background that follows the darkness slider.
pub fn reading_background(rgb: Rgb) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(to_color(rgb))),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Translucent box behind the app name in the top-left corner.
pub fn header(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::HEADER,
            ..Color::from_rgb8(30, 30, 30)
        })),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Floating reading panel above the toggle button.
pub fn controller_panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::CONTROLLER,
            ..palette::CONTROLLER_SURFACE
        })),
        text_color: Some(palette::GRAY_200),
        border: Border {
            radius: radius::XL.into(),
            ..Default::default()
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Dashed-looking drop target shown when no document is loaded.
pub fn drop_zone(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::GRAY_700
        })),
        text_color: Some(palette::GRAY_200),
        border: Border {
            color: palette::GRAY_400,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Drop target while a file hovers over the window.
pub fn drop_zone_active(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::INFO_500
        })),
        text_color: Some(palette::WHITE),
        border: Border {
            color: palette::INFO_500,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Placeholder frame for a page that is still rendering or failed.
pub fn page_placeholder(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::GRAY_400
        })),
        text_color: Some(palette::GRAY_200),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Toast card with a severity-colored border.
pub fn toast(accent_color: Color) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| container::Style {
        background: Some(Background::Color(
            theme.extended_palette().background.base.color,
        )),
        border: Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}
