// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use crate::ui::theming::is_light;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Window background behind every screen.
pub fn window(theme: &Theme) -> container::Style {
    let background = if is_light(theme) {
        palette::SLATE_50
    } else {
        palette::SLATE_900
    };
    container::Style {
        background: Some(Background::Color(background)),
        ..Default::default()
    }
}

/// Top bar holding the logo, the tabs and the health badge.
pub fn header(theme: &Theme) -> container::Style {
    let light = is_light(theme);
    let (background, line) = if light {
        (palette::WHITE, palette::SLATE_200)
    } else {
        (palette::SLATE_800, palette::SLATE_700)
    };
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..background
        })),
        border: Border {
            color: line,
            width: border::WIDTH_SM,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

/// Rounded card used for the form panels and the gallery.
pub fn card(theme: &Theme) -> container::Style {
    let light = is_light(theme);
    let background = if light {
        palette::WHITE
    } else {
        palette::SLATE_800
    };
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..background
        })),
        border: Border {
            color: if light {
                palette::WHITE
            } else {
                palette::SLATE_700
            },
            width: border::WIDTH_SM,
            radius: radius::XL.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Frame around an image (result area, gallery thumbnails).
pub fn image_frame(theme: &Theme) -> container::Style {
    let light = is_light(theme);
    container::Style {
        background: Some(Background::Color(if light {
            palette::SLATE_100
        } else {
            palette::SLATE_900
        })),
        border: Border {
            color: if light {
                palette::SLATE_200
            } else {
                palette::SLATE_700
            },
            width: border::WIDTH_MD,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

/// Square logo tile in the header.
pub fn logo(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::PRIMARY_700)),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::BRAND,
        ..Default::default()
    }
}

/// Colored dot inside the health badge.
pub fn status_dot(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Dimmed layer behind a modal dialog.
pub fn modal_backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Modal dialog surface.
pub fn dialog(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        text_color: Some(palette.background.base.text),
        border: Border {
            color: palette::ERROR_500,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Empty-gallery illustration tile.
pub fn illustration(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(if is_light(theme) {
            palette::PRIMARY_100
        } else {
            palette::SLATE_700
        })),
        text_color: Some(palette::PRIMARY_400),
        border: Border {
            radius: radius::XL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
