// SPDX-License-Identifier: MPL-2.0
//! Slider-specific style definitions.

use crate::ui::design_tokens::{opacity, palette, sizing};
use iced::widget::slider;
use iced::{Background, Border, Color, Theme};

/// Reading slider with the filled part of the rail in `accent`.
pub fn reading(accent: Color) -> impl Fn(&Theme, slider::Status) -> slider::Style {
    move |_theme: &Theme, status: slider::Status| {
        let handle_border = match status {
            slider::Status::Hovered | slider::Status::Dragged => palette::WHITE,
            slider::Status::Active => accent,
        };

        slider::Style {
            rail: slider::Rail {
                backgrounds: (
                    Background::Color(accent),
                    Background::Color(Color {
                        a: opacity::OVERLAY_MEDIUM,
                        ..palette::GRAY_400
                    }),
                ),
                width: sizing::SLIDER_RAIL,
                border: Border {
                    color: Color::TRANSPARENT,
                    width: 0.0,
                    radius: (sizing::SLIDER_RAIL / 2.0).into(),
                },
            },
            handle: slider::Handle {
                shape: slider::HandleShape::Circle {
                    radius: sizing::SLIDER_HANDLE / 2.0,
                },
                background: Background::Color(accent),
                border_width: 1.0,
                border_color: handle_border,
            },
        }
    }
}

/// Coffee slider accent: the coffee color once any tint is applied.
#[must_use]
pub fn coffee_accent(coffee: u8) -> Color {
    if coffee > 0 {
        palette::COFFEE_500
    } else {
        palette::PRIMARY_400
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coffee_accent_switches_above_zero() {
        assert_eq!(coffee_accent(0), palette::PRIMARY_400);
        assert_eq!(coffee_accent(1), palette::COFFEE_500);
        assert_eq!(coffee_accent(100), palette::COFFEE_500);
    }

    #[test]
    fn reading_slider_fills_rail_with_accent() {
        let style = reading(palette::COFFEE_500)(&Theme::Dark, slider::Status::Active);
        assert_eq!(style.rail.backgrounds.0, Background::Color(palette::COFFEE_500));
    }
}
