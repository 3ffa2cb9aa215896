// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines the application's design tokens, following the W3C Design
Tokens standard. The UI is a fixed dark surface, so the palette is tuned for
dark backgrounds throughout.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Modification

Tokens are designed to be consistent. Before modifying:
1. Check the impact on all components
2. Maintain ratios (e.g., MD = XS * 2)
3. Run validation tests
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale (dark-surface scale)
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.067, 0.094, 0.153); // Page background
    pub const GRAY_800: Color = Color::from_rgb(0.122, 0.161, 0.216); // Card background
    pub const GRAY_700: Color = Color::from_rgb(0.216, 0.255, 0.318); // Borders
    pub const GRAY_400: Color = Color::from_rgb(0.612, 0.639, 0.686); // Secondary text
    pub const GRAY_100: Color = Color::from_rgb(0.953, 0.957, 0.965); // Primary text

    // Brand colors (blue scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.376, 0.647, 0.980); // Accents, headings
    pub const PRIMARY_500: Color = Color::from_rgb(0.231, 0.510, 0.965); // Hover
    pub const PRIMARY_600: Color = Color::from_rgb(0.145, 0.388, 0.922); // Primary actions

    // Semantic colors (lightened for dark backgrounds)
    pub const ERROR_500: Color = Color::from_rgb(0.973, 0.443, 0.443);
    pub const SUCCESS_500: Color = Color::from_rgb(0.290, 0.871, 0.502);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    /// Faint fill behind a highlighted drop zone
    pub const TINT_SUBTLE: f32 = 0.08;
    /// Stronger fill behind alert panels
    pub const TINT_STRONG: f32 = 0.18;
    /// Idle track behind the spinner arc
    pub const TRACK: f32 = 0.2;
    /// Muted graticule lines on the map canvas
    pub const GRID_LINE: f32 = 0.35;
    /// Dimmed text on disabled controls
    pub const DISABLED: f32 = 0.4;
    /// Halo ring around the map marker
    pub const HALO: f32 = 0.6;
    /// Emphasized equator and prime meridian lines
    pub const GRID_AXIS: f32 = 0.8;
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
    /// Width of the centered content column
    pub const CONTENT_WIDTH: f32 = 560.0;

    /// Height of the drag-and-drop target area
    pub const DROP_ZONE_HEIGHT: f32 = 180.0;

    /// Edge length of the square preview thumbnail
    pub const PREVIEW_THUMB: f32 = 72.0;

    /// Diameter of the progress spinner
    pub const SPINNER: f32 = 48.0;

    /// Height of the map canvas on the result card
    pub const MAP_HEIGHT: f32 = 220.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale following Material Design 3 type scale principles.

    /// Large title - Application heading
    pub const TITLE_LG: f32 = 30.0;

    /// Small title - Outcome panel headers
    pub const TITLE_SM: f32 = 18.0;

    /// Large body - Prominent labels, submit control
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Small body - Hints, secondary labels
    pub const BODY_SM: f32 = 13.0;

    /// Caption - File sizes, link lines
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Card outlines
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Drop zone outline
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TINT_SUBTLE > 0.0 && opacity::TINT_SUBTLE < 1.0);
    assert!(opacity::GRID_AXIS > opacity::GRID_LINE);

    // Typography validation
    assert!(typography::TITLE_LG > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);

    // Color validation
    assert!(palette::PRIMARY_500.r >= 0.0 && palette::PRIMARY_500.r <= 1.0);
};
