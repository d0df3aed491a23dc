// SPDX-License-Identifier: MPL-2.0
//! Positioning of top-drop toasts.
//!
//! The host supplies the bounds of the view the toast decorates, the screen
//! size, the toast's measured size and the safe-area insets. From these the
//! toast's vertical offset is computed.
//!
//! The offset moves the toast's center relative to the host's center:
//!
//! - touch layout: `-host_mid_y + toast_height - screen_height * 0.01`
//! - desktop layout: `-host_mid_y + toast_height`
//!
//! The result is then clamped so the toast stays inside both the host and
//! the safe area. `offset` and `top` always describe the same final position.

use crate::config::defaults::TOP_DROP_SCREEN_MARGIN_RATIO;
use iced::{Padding, Rectangle, Size};
use serde::{Deserialize, Serialize};

/// Which offset formula to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlatformLayout {
    /// Phones and tablets: keeps a small margin below the status bar.
    Touch,
    #[default]
    Desktop,
}

/// Geometry read from the host layout. Read-only input to the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToastFrame {
    pub host: Rectangle,
    pub screen: Size,
    /// Size of the toast. Zero until known.
    ///
    /// Iced does not report a widget's laid-out size back to `update`, so
    /// callers that cannot measure pass an estimate such as
    /// [`estimated_toast_size`](crate::toast::render::estimated_toast_size).
    pub toast: Size,
    pub safe_area: Padding,
    pub platform: PlatformLayout,
}

/// Where a top-drop toast ends up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TopDropLayout {
    /// Vertical translation of the toast center from the host center.
    pub offset: f32,
    /// Distance from the host's top edge to the toast's top edge.
    pub top: f32,
    /// Largest height the toast may take.
    pub max_height: f32,
}

impl ToastFrame {
    /// Frame for a host covering the whole screen, without insets.
    #[must_use]
    pub fn fullscreen(screen: Size) -> Self {
        Self::new(Rectangle::new(iced::Point::ORIGIN, screen), screen)
    }

    #[must_use]
    pub fn new(host: Rectangle, screen: Size) -> Self {
        Self {
            host,
            screen,
            toast: Size::new(0.0, 0.0),
            safe_area: Padding::ZERO,
            platform: PlatformLayout::default(),
        }
    }

    #[must_use]
    pub fn with_toast_size(mut self, toast: Size) -> Self {
        self.toast = toast;
        self
    }

    #[must_use]
    pub fn with_safe_area(mut self, safe_area: Padding) -> Self {
        self.safe_area = safe_area;
        self
    }

    #[must_use]
    pub fn with_platform(mut self, platform: PlatformLayout) -> Self {
        self.platform = platform;
        self
    }

    fn host_mid_y(&self) -> f32 {
        self.host.y + self.host.height / 2.0
    }

    /// Top and bottom insets; non-finite or negative values count as zero.
    fn vertical_insets(&self) -> (f32, f32) {
        (inset(self.safe_area.top), inset(self.safe_area.bottom))
    }

    /// Height available between the safe-area insets.
    #[must_use]
    pub fn max_toast_height(&self) -> f32 {
        let (top, bottom) = self.vertical_insets();
        (self.screen.height - top - bottom).max(0.0)
    }

    /// Offset before safe-area clamping.
    #[must_use]
    pub fn raw_top_drop_offset(&self) -> f32 {
        let base = -self.host_mid_y() + self.toast.height;
        match self.platform {
            PlatformLayout::Touch => base - self.screen.height * TOP_DROP_SCREEN_MARGIN_RATIO,
            PlatformLayout::Desktop => base,
        }
    }

    /// Final top-drop position, kept inside the host and the safe area.
    #[must_use]
    pub fn top_drop_layout(&self) -> TopDropLayout {
        let max_height = self.max_toast_height();
        let height = self.toast.height.min(max_height);
        let half = height / 2.0;
        let mid_y = self.host_mid_y();

        let (inset_top, inset_bottom) = self.vertical_insets();
        let min_top = inset_top.max(self.host.y);
        let max_top = (self.screen.height - inset_bottom - height).max(min_top);
        // Not `clamp`: NaN bounds must not panic.
        let top_on_screen = (mid_y + self.raw_top_drop_offset() - half)
            .max(min_top)
            .min(max_top);
        let top = (top_on_screen - self.host.y).max(0.0);

        TopDropLayout {
            offset: self.host.y + top + half - mid_y,
            top,
            max_height,
        }
    }
}

fn inset(value: f32) -> f32 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn phone_frame() -> ToastFrame {
        ToastFrame::fullscreen(Size::new(400.0, 800.0)).with_toast_size(Size::new(240.0, 60.0))
    }

    #[test]
    fn touch_offset_follows_formula() {
        let frame = phone_frame().with_platform(PlatformLayout::Touch);
        // -400 + 60 - 8
        assert_relative_eq!(frame.raw_top_drop_offset(), -348.0);

        let layout = frame.top_drop_layout();
        assert_relative_eq!(layout.offset, -348.0);
        assert_relative_eq!(layout.top, 22.0);
        assert_relative_eq!(layout.max_height, 800.0);
    }

    #[test]
    fn desktop_offset_has_no_screen_margin() {
        let frame = phone_frame().with_platform(PlatformLayout::Desktop);
        assert_relative_eq!(frame.raw_top_drop_offset(), -340.0);
        assert_relative_eq!(frame.top_drop_layout().top, 30.0);
    }

    #[test]
    fn safe_area_pushes_toast_below_notch() {
        let frame = phone_frame()
            .with_platform(PlatformLayout::Touch)
            .with_safe_area(Padding {
                top: 47.0,
                right: 0.0,
                bottom: 34.0,
                left: 0.0,
            });

        let layout = frame.top_drop_layout();
        assert_relative_eq!(layout.top, 47.0);
        assert_relative_eq!(layout.offset, 47.0 + 30.0 - 400.0);
        assert_relative_eq!(layout.max_height, 800.0 - 47.0 - 34.0);
    }

    #[test]
    fn toast_never_exceeds_screen_height() {
        let frame = ToastFrame::fullscreen(Size::new(400.0, 300.0))
            .with_toast_size(Size::new(240.0, 900.0))
            .with_safe_area(Padding {
                top: 20.0,
                right: 0.0,
                bottom: 20.0,
                left: 0.0,
            });

        let layout = frame.top_drop_layout();
        assert_relative_eq!(layout.max_height, 260.0);
        assert_relative_eq!(layout.top, 20.0);
    }

    #[test]
    fn top_is_relative_to_offset_host() {
        let host = Rectangle::new(iced::Point::new(0.0, 100.0), Size::new(400.0, 600.0));
        let frame = ToastFrame::new(host, Size::new(400.0, 800.0))
            .with_toast_size(Size::new(200.0, 50.0));

        // Unclamped top on screen would be 25, above the host; pinned to 100.
        let layout = frame.top_drop_layout();
        assert_relative_eq!(layout.top, 0.0);
        assert_relative_eq!(layout.offset, -275.0);
    }

    #[test]
    fn offset_and_top_agree_on_drawn_center() {
        let hosts = [
            Rectangle::new(iced::Point::new(0.0, 100.0), Size::new(400.0, 600.0)),
            Rectangle::new(iced::Point::new(0.0, 0.0), Size::new(400.0, 800.0)),
            Rectangle::new(iced::Point::new(0.0, 300.0), Size::new(400.0, 200.0)),
        ];
        for host in hosts {
            for platform in [PlatformLayout::Touch, PlatformLayout::Desktop] {
                let frame = ToastFrame::new(host, Size::new(400.0, 800.0))
                    .with_toast_size(Size::new(200.0, 50.0))
                    .with_platform(platform);
                let layout = frame.top_drop_layout();

                let mid_y = host.y + host.height / 2.0;
                let drawn_center = host.y + layout.top + 25.0;
                assert_relative_eq!(mid_y + layout.offset, drawn_center, epsilon = 1e-3);
            }
        }
    }

    #[test]
    fn non_finite_insets_are_ignored() {
        let frame = phone_frame().with_safe_area(Padding {
            top: f32::NAN,
            right: 0.0,
            bottom: f32::INFINITY,
            left: 0.0,
        });

        let layout = frame.top_drop_layout();
        assert_relative_eq!(layout.top, 30.0);
        assert_relative_eq!(layout.max_height, 800.0);
    }

    #[test]
    fn nan_screen_does_not_panic() {
        let frame = ToastFrame::fullscreen(Size::new(400.0, f32::NAN))
            .with_toast_size(Size::new(200.0, 50.0));
        let _ = frame.top_drop_layout();
    }

    #[test]
    fn zero_screen_does_not_panic() {
        let layout = ToastFrame::fullscreen(Size::new(0.0, 0.0)).top_drop_layout();
        assert_relative_eq!(layout.max_height, 0.0);
        assert_relative_eq!(layout.top, 0.0);
    }
}
