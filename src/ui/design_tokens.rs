// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens following the W3C Design Tokens standard.
//!
//! - **Palette**: Base colors
//! - **Opacity**: Standardized opacity levels
//! - **Spacing**: Spacing scale
//! - **Sizing**: Component sizes
//! - **Typography**: Font size scale
//! - **Radius**: Border radii

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    /// Medium gray used for pressed (highlighted) glyph tinting.
    pub const GRAY_500: Color = Color::from_rgb(0.557, 0.557, 0.576);
    /// Light-medium gray used for the check button label text.
    pub const GRAY_400: Color = Color::from_rgb(0.682, 0.682, 0.698);
    /// Light gray used for the unselected check glyph.
    pub const GRAY_300: Color = Color::from_rgb(0.78, 0.78, 0.8);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand colors
    pub const PRIMARY_500: Color = Color::from_rgb(0.0, 0.478, 1.0);

    // Semantic colors
    pub const SUCCESS_500: Color = Color::from_rgb(0.204, 0.78, 0.349);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Faint wash used for persistent background tints.
    pub const TINT_FAINT: f32 = 0.3;
    /// Softened foreground tint for glyphs and accent text.
    pub const TINT_SOFT: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Render size of button glyphs. Every glyph raster is resized to exactly
    /// this many pixels on both axes, whatever the source asset's native size.
    pub const GLYPH: f32 = 20.0;

    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Standard body - play button labels.
    pub const BODY: f32 = 14.0;

    /// Caption - check button labels.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::TINT_FAINT < opacity::TINT_SOFT);

    // Sizing validation
    assert!(sizing::GLYPH > 0.0);
    assert!(sizing::ICON_LG > sizing::ICON_MD);
    assert!(sizing::ICON_MD > sizing::ICON_SM);

    // Typography validation
    assert!(typography::BODY > typography::CAPTION);

    // Color validation
    assert!(palette::PRIMARY_500.b >= 0.0 && palette::PRIMARY_500.b <= 1.0);
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
    fn gray_scale_is_ordered_light_to_dark() {
        assert!(palette::GRAY_300.r > palette::GRAY_400.r);
        assert!(palette::GRAY_400.r > palette::GRAY_500.r);
        assert!(palette::GRAY_500.r > palette::GRAY_700.r);
    }
}
