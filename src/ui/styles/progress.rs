// SPDX-License-Identifier: MPL-2.0
//! Progress bar and slider styles of the generation form.

use crate::ui::design_tokens::{palette, radius};
use crate::ui::theming::is_light;
use iced::widget::progress_bar;
use iced::widget::slider as iced_slider;
use iced::{Background, Border, Color, Theme};

fn track(theme: &Theme) -> Color {
    if is_light(theme) {
        palette::SLATE_200
    } else {
        palette::SLATE_700
    }
}

/// Linear generation progress.
pub fn bar(theme: &Theme) -> progress_bar::Style {
    progress_bar::Style {
        background: Background::Color(track(theme)),
        bar: Background::Color(palette::PRIMARY_500),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
    }
}

/// Steps and guidance sliders.
pub fn slider(theme: &Theme, status: iced_slider::Status) -> iced_slider::Style {
    let handle = match status {
        iced_slider::Status::Active => palette::PRIMARY_500,
        iced_slider::Status::Hovered | iced_slider::Status::Dragged => palette::PRIMARY_600,
    };

    iced_slider::Style {
        rail: iced_slider::Rail {
            backgrounds: (
                Background::Color(palette::PRIMARY_500),
                Background::Color(track(theme)),
            ),
            width: 6.0,
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: 3.0.into(),
            },
        },
        handle: iced_slider::Handle {
            shape: iced_slider::HandleShape::Circle { radius: 8.0 },
            background: Background::Color(handle),
            border_width: 2.0,
            border_color: palette::WHITE,
        },
    }
}
