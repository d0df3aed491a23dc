// SPDX-License-Identifier: MPL-2.0
//! What a toast shows and where.
//!
//! A [`ToastDescriptor`] is built by the caller for one presentation and read
//! by the renderer. Builder methods consume `self`, so a descriptor never
//! changes once it is handed to the controller.

use crate::ui::design_tokens::palette;
use iced::Color;
use serde::{Deserialize, Serialize};

/// Where the toast appears relative to the host view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Placement {
    /// Centered over the host, alert style.
    #[default]
    Centered,
    /// Capsule dropped from the top edge, HUD style.
    TopDrop,
}

/// The glyph shown next to (or above) the text.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    /// Animated checkmark.
    Complete(Color),
    /// Animated xmark.
    Error(Color),
    /// Named vector icon, tinted with `color`.
    SystemIcon { name: String, color: Color },
    /// Raster image loaded by name.
    Image(String),
    /// Spinning loading indicator. Never auto-dismisses.
    Loading,
    /// No glyph, text only.
    TextOnly,
}

impl Content {
    /// Success checkmark in the palette's success color.
    #[must_use]
    pub fn complete() -> Self {
        Content::Complete(palette::SUCCESS_500)
    }

    /// Failure xmark in the palette's error color.
    #[must_use]
    pub fn error() -> Self {
        Content::Error(palette::ERROR_500)
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Content::Loading)
    }

    /// Whether the glyph strokes itself in on first display.
    #[must_use]
    pub fn has_trim_animation(&self) -> bool {
        matches!(self, Content::Complete(_) | Content::Error(_))
    }
}

/// Optional overrides for a text line. Unset values use design tokens.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextStyle {
    pub color: Option<Color>,
    pub size: Option<f32>,
}

impl TextStyle {
    #[must_use]
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }
}

/// Immutable description of one toast.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastDescriptor {
    placement: Placement,
    content: Content,
    title: Option<String>,
    subtitle: Option<String>,
    title_style: TextStyle,
    subtitle_style: TextStyle,
    bold_title: bool,
    /// `None` renders the translucent blur surface.
    background: Option<Color>,
}

impl ToastDescriptor {
    /// Creates a descriptor with the given placement and content and no text.
    pub fn new(placement: Placement, content: Content) -> Self {
        Self {
            placement,
            content,
            title: None,
            subtitle: None,
            title_style: TextStyle::default(),
            subtitle_style: TextStyle::default(),
            bold_title: false,
            background: None,
        }
    }

    /// Centered checkmark toast.
    pub fn complete(title: impl Into<String>) -> Self {
        Self::new(Placement::Centered, Content::complete()).title(title)
    }

    /// Centered xmark toast.
    pub fn error(title: impl Into<String>) -> Self {
        Self::new(Placement::Centered, Content::error()).title(title)
    }

    /// Centered spinner toast. The title is optional for loading toasts.
    pub fn loading() -> Self {
        Self::new(Placement::Centered, Content::Loading)
    }

    /// Centered text-only toast.
    pub fn text(title: impl Into<String>) -> Self {
        Self::new(Placement::Centered, Content::TextOnly).title(title)
    }

    #[must_use]
    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    #[must_use]
    pub fn title_style(mut self, style: TextStyle) -> Self {
        self.title_style = style;
        self
    }

    #[must_use]
    pub fn subtitle_style(mut self, style: TextStyle) -> Self {
        self.subtitle_style = style;
        self
    }

    #[must_use]
    pub fn bold_title(mut self, bold: bool) -> Self {
        self.bold_title = bold;
        self
    }

    #[must_use]
    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    #[must_use]
    pub fn get_placement(&self) -> Placement {
        self.placement
    }

    #[must_use]
    pub fn content(&self) -> &Content {
        &self.content
    }

    #[must_use]
    pub fn get_title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn get_subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    #[must_use]
    pub fn get_title_style(&self) -> TextStyle {
        self.title_style
    }

    #[must_use]
    pub fn get_subtitle_style(&self) -> TextStyle {
        self.subtitle_style
    }

    #[must_use]
    pub fn is_bold_title(&self) -> bool {
        self.bold_title
    }

    #[must_use]
    pub fn get_background(&self) -> Option<Color> {
        self.background
    }

    /// Whether there is any text to lay out.
    #[must_use]
    pub fn has_text(&self) -> bool {
        self.title.is_some() || self.subtitle.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_pattern_sets_all_fields() {
        let descriptor = ToastDescriptor::new(Placement::TopDrop, Content::TextOnly)
            .title("Saved")
            .subtitle("photo.png")
            .bold_title(true)
            .title_style(TextStyle::default().size(18.0))
            .background(palette::GRAY_900);

        assert_eq!(descriptor.get_placement(), Placement::TopDrop);
        assert_eq!(descriptor.get_title(), Some("Saved"));
        assert_eq!(descriptor.get_subtitle(), Some("photo.png"));
        assert!(descriptor.is_bold_title());
        assert_eq!(descriptor.get_title_style().size, Some(18.0));
        assert_eq!(descriptor.get_subtitle_style(), TextStyle::default());
        assert_eq!(descriptor.get_background(), Some(palette::GRAY_900));
    }

    #[test]
    fn constructors_pick_content() {
        assert!(matches!(
            ToastDescriptor::complete("ok").content(),
            Content::Complete(_)
        ));
        assert!(matches!(
            ToastDescriptor::error("ko").content(),
            Content::Error(_)
        ));
        assert!(ToastDescriptor::loading().content().is_loading());
        assert_eq!(ToastDescriptor::text("hi").content(), &Content::TextOnly);
    }

    #[test]
    fn default_background_is_blur() {
        assert!(ToastDescriptor::text("hi").get_background().is_none());
    }

    #[test]
    fn only_check_and_xmark_trim() {
        assert!(Content::complete().has_trim_animation());
        assert!(Content::error().has_trim_animation());
        assert!(!Content::Loading.has_trim_animation());
        assert!(!Content::TextOnly.has_trim_animation());
        assert!(!Content::Image("logo.png".into()).has_trim_animation());
    }

    #[test]
    fn has_text_checks_title_and_subtitle() {
        let bare = ToastDescriptor::new(Placement::Centered, Content::complete());
        assert!(!bare.has_text());
        assert!(bare.clone().subtitle("only").has_text());
    }

    #[test]
    fn placement_uses_kebab_case_in_toml() {
        #[derive(Serialize)]
        struct Wrapper {
            placement: Placement,
        }
        let out = toml::to_string(&Wrapper {
            placement: Placement::TopDrop,
        })
        .expect("serialize");
        assert_eq!(out.trim(), "placement = \"top-drop\"");
    }
}
