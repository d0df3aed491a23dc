// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::Theme;
    use iced_toast::toast::Surface;
    use iced_toast::ui::design_tokens::{palette, radius, sizing, spacing, typography};
    use iced_toast::ui::styles::container::toast_surface;

    #[test]
    fn toast_surfaces_work_in_both_themes() {
        for theme in [Theme::Light, Theme::Dark] {
            let _ = toast_surface(&theme, Surface::Blur, radius::LG);
            let _ = toast_surface(&theme, Surface::Solid(palette::SUCCESS_500), radius::FULL);
        }
    }

    #[test]
    fn design_tokens_are_accessible() {
        let _ = palette::ERROR_500;
        let _ = spacing::MD;
        let _ = sizing::ICON_XXL;
        let _ = typography::TITLE_MD;
    }

    #[test]
    fn top_drop_glyph_is_smaller_than_alert_glyph() {
        assert!(sizing::ICON_MD < sizing::ICON_XXL);
        assert!(sizing::TOAST_WIDTH > sizing::ALERT_MAX_SIZE);
    }
}
