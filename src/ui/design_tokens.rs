// SPDX-License-Identifier: MPL-2.0
//! Design tokens for toast rendering.
//!
//! Palette, opacity, spacing, sizing, typography, radius and shadow scales.
//! The renderer reads sizes from here; the Iced adapter reads colors and
//! shadows.
//!
//! ```
//! use iced_toast::ui::design_tokens::{opacity, palette};
//! use iced::Color;
//!
//! let surface = Color {
//!     a: opacity::SURFACE,
//!     ..palette::GRAY_900
//! };
//! assert!(surface.a < 1.0);
//! ```

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
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    /// Hairline border around blur surfaces
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    /// Spinner track behind the rotating arc
    pub const TRACK: f32 = 0.25;

    /// Fallback for the blur material
    pub const SURFACE: f32 = 0.92;
}

// ============================================================================
// Spacing Scale (4px steps)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_XXL: f32 = 64.0;

    pub const GLYPH_STROKE: f32 = 4.0;
    pub const SPINNER_STROKE: f32 = 3.0;

    /// Widest a top-drop capsule grows before wrapping text.
    pub const TOAST_WIDTH: f32 = 320.0;
    /// Centered alerts with a glyph fit in a square of this side.
    pub const ALERT_MAX_SIZE: f32 = 176.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Centered alert title
    pub const TITLE_MD: f32 = 20.0;

    /// Top-drop title
    pub const BODY_LG: f32 = 16.0;

    /// Subtitles
    pub const BODY: f32 = 14.0;

    /// Line height relative to font size, matching Iced's default.
    pub const LINE_HEIGHT: f32 = 1.3;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Hairline around blur surfaces
    pub const WIDTH_SM: f32 = 1.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const MD: Shadow = Shadow {
        color: Color {
            a: 0.25,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 12.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    assert!(sizing::ICON_XXL > sizing::ICON_MD);
    assert!(sizing::ALERT_MAX_SIZE > sizing::ICON_XXL);
    assert!(sizing::GLYPH_STROKE > 0.0);

    assert!(typography::TITLE_MD > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_fits_glyph_and_padding() {
        assert!(sizing::ALERT_MAX_SIZE >= sizing::ICON_XXL + 2.0 * spacing::LG);
    }

    #[test]
    fn semantic_colors_are_distinct() {
        assert_ne!(palette::SUCCESS_500, palette::ERROR_500);
        assert_ne!(palette::ERROR_500, palette::WARNING_500);
    }
}
