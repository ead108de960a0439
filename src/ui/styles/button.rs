// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use crate::ui::theming::is_light;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

fn faded(color: Color) -> Color {
    Color {
        a: opacity::DISABLED,
        ..color
    }
}

/// Main call to action (Generate, Start Creating).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, shadow) = match status {
        button::Status::Active => (palette::PRIMARY_600, shadow::SM),
        button::Status::Hovered => (palette::PRIMARY_500, shadow::BRAND),
        button::Status::Pressed => (palette::PRIMARY_700, shadow::SM),
        button::Status::Disabled => (faded(palette::PRIMARY_600), shadow::NONE),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: if status == button::Status::Disabled {
            faded(WHITE)
        } else {
            WHITE
        },
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow,
        snap: true,
    }
}

/// Active tab in the header.
pub fn tab_selected(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::PRIMARY_400,
        _ => palette::PRIMARY_500,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::BRAND,
        snap: true,
    }
}

/// Inactive tab, links and other low-emphasis actions.
pub fn ghost(theme: &Theme, status: button::Status) -> button::Style {
    let light = is_light(theme);
    let text_color = if light {
        palette::SLATE_700
    } else {
        palette::SLATE_200
    };
    let hover = if light {
        palette::SLATE_100
    } else {
        palette::SLATE_800
    };

    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(Background::Color(hover)),
        _ => None,
    };

    button::Style {
        background,
        text_color: match status {
            button::Status::Hovered => palette::PRIMARY_500,
            button::Status::Disabled => faded(text_color),
            _ => text_color,
        },
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Small white action buttons laid over images (View, Download, Delete).
///
/// `destructive` tints the hover state red.
pub fn image_action(destructive: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let (background, text_color) = match status {
            button::Status::Hovered | button::Status::Pressed if destructive => {
                (Color::from_rgb(1.0, 0.94, 0.94), palette::ERROR_500)
            }
            button::Status::Hovered | button::Status::Pressed => {
                (palette::PRIMARY_100, palette::PRIMARY_700)
            }
            _ if destructive => (WHITE, palette::ERROR_500),
            _ => (WHITE, palette::SLATE_700),
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Header health badge. Clickable to re-check the backend.
pub fn badge(theme: &Theme, status: button::Status) -> button::Style {
    let light = is_light(theme);
    let base = if light {
        palette::SLATE_100
    } else {
        palette::SLATE_800
    };
    let background = match status {
        button::Status::Hovered => {
            if light {
                palette::SLATE_200
            } else {
                palette::SLATE_700
            }
        }
        _ => base,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: if light {
            palette::SLATE_700
        } else {
            palette::SLATE_200
        },
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_primary_is_faded() {
        let active = primary(&Theme::Light, button::Status::Active);
        let disabled = primary(&Theme::Light, button::Status::Disabled);
        assert_eq!(active.text_color, WHITE);
        assert!(disabled.text_color.a < 1.0);
        assert_eq!(disabled.shadow, shadow::NONE);
    }

    #[test]
    fn destructive_action_uses_error_color() {
        let style = image_action(true)(&Theme::Light, button::Status::Active);
        assert_eq!(style.text_color, palette::ERROR_500);
        let style = image_action(false)(&Theme::Light, button::Status::Active);
        assert_eq!(style.text_color, palette::SLATE_700);
    }

    #[test]
    fn ghost_has_no_background_at_rest() {
        let style = ghost(&Theme::Dark, button::Status::Active);
        assert!(style.background.is_none());
        let hovered = ghost(&Theme::Dark, button::Status::Hovered);
        assert!(hovered.background.is_some());
    }
}
