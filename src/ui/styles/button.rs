// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Style for the primary action (the submit control).
///
/// A button built without `on_press` renders the `Disabled` arm, which is
/// how the control is parked while an upload is in flight.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_600)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: border::WIDTH_SM,
                radius: radius::MD.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: border::WIDTH_SM,
                radius: radius::MD.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(palette::GRAY_700)),
            text_color: palette::GRAY_400,
            border: Border {
                color: palette::GRAY_700,
                width: border::WIDTH_SM,
                radius: radius::MD.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Style for the drop-zone surface.
///
/// `hovering` is the window-level drag state; the zone also lights up on
/// plain mouse hover since the whole surface doubles as the browse button.
pub fn drop_zone(hovering: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let highlighted = hovering || matches!(status, button::Status::Hovered);
        let (border_color, background) = if highlighted {
            (
                palette::PRIMARY_400,
                Color {
                    a: opacity::TINT_SUBTLE,
                    ..palette::PRIMARY_400
                },
            )
        } else {
            (palette::GRAY_700, palette::GRAY_800)
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: palette::GRAY_100,
            border: Border {
                color: border_color,
                width: border::WIDTH_MD,
                radius: radius::LG.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Style for the small clear control on the selected-file card.
pub fn clear(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => WHITE,
        button::Status::Disabled => Color {
            a: opacity::DISABLED,
            ..palette::GRAY_400
        },
        button::Status::Active => palette::GRAY_400,
    };

    button::Style {
        background: None,
        text_color,
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
