// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Every color, spacing, size and radius used by the studio widgets.

## Organization

- **Palette**: Base colors (slate grays, indigo brand, semantic colors)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use gixio::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let backdrop = Color {
    a: opacity::OVERLAY_MEDIUM,
    ..palette::BLACK
};
let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale (slate)
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const SLATE_900: Color = Color::from_rgb(0.059, 0.090, 0.165);
    pub const SLATE_800: Color = Color::from_rgb(0.118, 0.161, 0.231);
    pub const SLATE_700: Color = Color::from_rgb(0.200, 0.255, 0.333);
    pub const SLATE_500: Color = Color::from_rgb(0.392, 0.455, 0.545);
    pub const SLATE_400: Color = Color::from_rgb(0.580, 0.639, 0.722);
    pub const SLATE_200: Color = Color::from_rgb(0.886, 0.910, 0.941);
    pub const SLATE_100: Color = Color::from_rgb(0.945, 0.961, 0.976);
    pub const SLATE_50: Color = Color::from_rgb(0.973, 0.980, 0.988);

    // Brand colors (indigo scale)
    pub const PRIMARY_100: Color = Color::from_rgb(0.878, 0.906, 1.0);
    pub const PRIMARY_400: Color = Color::from_rgb(0.506, 0.549, 0.973);
    pub const PRIMARY_500: Color = Color::from_rgb(0.388, 0.400, 0.945);
    pub const PRIMARY_600: Color = Color::from_rgb(0.310, 0.275, 0.898);
    pub const PRIMARY_700: Color = Color::from_rgb(0.263, 0.220, 0.792);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;

    /// Card surfaces over the window background
    pub const SURFACE: f32 = 0.9;

    /// Disabled controls
    pub const DISABLED: f32 = 0.5;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Interactive element heights
    pub const GENERATE_BUTTON_HEIGHT: f32 = 52.0;
    pub const PROMPT_HEIGHT: f32 = 144.0;

    // Header
    pub const LOGO: f32 = 40.0;
    pub const STATUS_DOT: f32 = 8.0;

    // Create screen
    pub const FORM_WIDTH: f32 = 420.0;
    pub const PROGRESS_RING: f32 = 128.0;
    pub const PROGRESS_RING_STROKE: f32 = 8.0;
    pub const PROGRESS_BAR_HEIGHT: f32 = 8.0;
    pub const PROGRESS_WIDTH: f32 = 360.0;

    // Gallery
    pub const GALLERY_CARD: f32 = 220.0;
    pub const EMPTY_ILLUSTRATION: f32 = 96.0;

    // Overlays
    pub const MODAL_WIDTH: f32 = 420.0;
    pub const TOAST_WIDTH: f32 = 320.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Progress percentage in the ring
    pub const DISPLAY: f32 = 30.0;

    /// Section headings (Your Collection)
    pub const TITLE_LG: f32 = 24.0;

    /// App name, dialog titles
    pub const TITLE_MD: f32 = 20.0;

    /// Large body - Empty state headline
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Caption - Hints, badges, timestamps
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Cards, inputs
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Image frames, toast accents
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const XL: f32 = 16.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: Color {
            a: 0.15,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: Color {
            a: 0.2,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 12.0,
    };

    /// Glow under the active tab and the generate button.
    pub const BRAND: Shadow = Shadow {
        color: Color {
            a: 0.3,
            ..palette::PRIMARY_500
        },
        offset: Vector { x: 0.0, y: 6.0 },
        blur_radius: 16.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    assert!(sizing::PROGRESS_RING > sizing::PROGRESS_RING_STROKE * 2.0);

    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn brand_scale_darkens() {
        assert!(palette::PRIMARY_400.b >= palette::PRIMARY_500.b);
        assert!(palette::PRIMARY_500.g > palette::PRIMARY_600.g);
        assert!(palette::PRIMARY_600.g > palette::PRIMARY_700.g);
    }
}
