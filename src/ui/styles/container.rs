// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::toast::Surface;
use crate::ui::design_tokens::{border, opacity, palette, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Toast panel surface.
///
/// [`Surface::Blur`] has no real material in Iced, so it falls back to the
/// theme's background at [`opacity::SURFACE`] with a faint hairline.
pub fn toast_surface(theme: &Theme, surface: Surface, corner_radius: f32) -> container::Style {
    let extended = theme.extended_palette();

    let (background, border_color) = match surface {
        Surface::Blur => {
            let base = extended.background.base.color;
            (
                Color { a: opacity::SURFACE, ..base },
                Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..palette::GRAY_400
                },
            )
        }
        Surface::Solid(color) => (color, Color::TRANSPARENT),
    };

    container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            color: border_color,
            width: border::WIDTH_SM,
            radius: corner_radius.into(),
        },
        shadow: shadow::MD,
        text_color: Some(extended.background.base.text),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::design_tokens::radius;

    #[test]
    fn solid_surface_uses_given_color() {
        let style = toast_surface(&Theme::Dark, Surface::Solid(palette::WARNING_500), radius::LG);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::WARNING_500))
        );
        assert_eq!(style.border.color, Color::TRANSPARENT);
    }

    #[test]
    fn blur_surface_is_translucent() {
        let style = toast_surface(&Theme::Light, Surface::Blur, radius::FULL);
        match style.background {
            Some(Background::Color(color)) => assert!(color.a < 1.0),
            other => panic!("unexpected background {other:?}"),
        }
    }
}
