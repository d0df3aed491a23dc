// SPDX-License-Identifier: MPL-2.0
//! Iced adapter for the toast visual tree.
//!
//! [`present_toast`] decorates any element with the controller's toast:
//! when visible, the rendered toast is stacked above `base` and taps on the
//! toast panel produce the caller's message.
//!
//! # Usage
//!
//! ```ignore
//! use iced_toast::toast::{self, TaskScheduler};
//! use iced_toast::ui::overlay;
//!
//! fn view(&self) -> Element<'_, Message> {
//!     overlay::present_toast(self.content(), &self.toast, &self.frame, Message::Toast(toast::Message::Tap))
//! }
//!
//! fn subscription(&self) -> Subscription<Message> {
//!     overlay::subscription(&self.toast).map(Message::Toast)
//! }
//! ```

use crate::config::defaults::FRAME_INTERVAL_MS;
use crate::toast::{
    self, render, Align, Glyph, Node, PresentationController, Scheduler, TextLine, ToastFrame,
};
use crate::ui::design_tokens::palette;
use crate::ui::styles::container::toast_surface;
use crate::ui::widgets::{AnimatedSpinner, TrimGlyph, TrimShape};
use iced::font::Weight;
use iced::widget::{image, mouse_area, svg, text, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Font, Length, Padding, Subscription, Theme};
use std::time::Duration;

/// Stacks the controller's toast over `base` while it is visible.
pub fn present_toast<'a, S, Message>(
    base: impl Into<Element<'a, Message>>,
    controller: &PresentationController<S>,
    frame: &ToastFrame,
    on_tap: Message,
) -> Element<'a, Message>
where
    S: Scheduler,
    Message: Clone + 'static,
{
    let base = base.into();
    let Some(descriptor) = controller.descriptor().filter(|_| controller.is_visible()) else {
        return base;
    };

    let node = render(descriptor, frame, controller.animation());
    Stack::new()
        .push(base)
        .push(view(&node, Some(&on_tap)))
        .into()
}

/// Converts a visual tree into widgets, without tap handling.
pub fn view_node<'a, Message: Clone + 'static>(node: &Node) -> Element<'a, Message> {
    view(node, None)
}

/// Animation frames while the entrance animation or spinner is running.
pub fn subscription<S: Scheduler>(
    controller: &PresentationController<S>,
) -> Subscription<toast::Message> {
    if controller.needs_frames() {
        iced::time::every(Duration::from_millis(FRAME_INTERVAL_MS)).map(toast::Message::Frame)
    } else {
        Subscription::none()
    }
}

fn horizontal(align: Align) -> alignment::Horizontal {
    match align {
        Align::Start => alignment::Horizontal::Left,
        Align::Center => alignment::Horizontal::Center,
    }
}

fn view<'a, Message: Clone + 'static>(node: &Node, on_tap: Option<&Message>) -> Element<'a, Message> {
    match node {
        Node::Column {
            spacing,
            align,
            children,
        } => Column::with_children(children.iter().map(|child| view(child, on_tap)))
            .spacing(*spacing)
            .align_x(horizontal(*align))
            .into(),
        Node::Row { spacing, children } => {
            Row::with_children(children.iter().map(|child| view(child, on_tap)))
                .spacing(*spacing)
                .align_y(alignment::Vertical::Center)
                .into()
        }
        Node::Glyph(glyph) => view_glyph(glyph),
        Node::Text(line) => view_text(line),
        Node::Panel {
            surface,
            padding,
            radius,
            max_width,
            max_height,
            child,
        } => {
            let (surface, radius) = (*surface, *radius);
            let mut panel = Container::new(view(child, on_tap))
                .padding(*padding)
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center)
                .style(move |theme: &Theme| toast_surface(theme, surface, radius));
            if let Some(width) = max_width {
                panel = panel.max_width(*width);
            }
            if let Some(height) = max_height {
                panel = panel.max_height(*height);
            }

            match on_tap {
                Some(message) => mouse_area(panel).on_press(message.clone()).into(),
                None => panel.into(),
            }
        }
        Node::TopAnchored { top, child } => Container::new(view(child, on_tap))
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(Padding {
                top: *top,
                right: 0.0,
                bottom: 0.0,
                left: 0.0,
            })
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Top)
            .into(),
        Node::Centered { child } => Container::new(view(child, on_tap))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .into(),
    }
}

fn view_glyph<'a, Message: 'static>(glyph: &Glyph) -> Element<'a, Message> {
    match glyph {
        Glyph::Checkmark { color, trim, size } => {
            TrimGlyph::new(TrimShape::Checkmark, *color, *trim, *size).into_element()
        }
        Glyph::Xmark { color, trim, size } => {
            TrimGlyph::new(TrimShape::Xmark, *color, *trim, *size).into_element()
        }
        Glyph::Icon { name, color, size } => {
            let color = *color;
            svg(svg::Handle::from_path(name))
                .width(Length::Fixed(*size))
                .height(Length::Fixed(*size))
                .style(move |_theme: &Theme, _status: svg::Status| svg::Style {
                    color: Some(color),
                })
                .into()
        }
        Glyph::Image { name, size } => image(image::Handle::from_path(name))
            .width(Length::Fixed(*size))
            .height(Length::Fixed(*size))
            .into(),
        Glyph::Spinner { rotation, size } => {
            AnimatedSpinner::new(palette::GRAY_400, *rotation, *size).into_element()
        }
    }
}

fn view_text<'a, Message: 'a>(line: &TextLine) -> Element<'a, Message> {
    let color = line.color;
    let font = if line.bold {
        Font {
            weight: Weight::Bold,
            ..Font::default()
        }
    } else {
        Font::default()
    };

    Text::new(line.content.clone())
        .size(line.size)
        .font(font)
        .style(move |theme: &Theme| text::Style {
            color: Some(color.unwrap_or(theme.palette().text)),
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::{ManualScheduler, ToastDescriptor};
    use iced::advanced::Widget;
    use iced::Size;

    #[derive(Debug, Clone)]
    enum TestMessage {
        Tap,
    }

    fn frame() -> ToastFrame {
        ToastFrame::fullscreen(Size::new(800.0, 600.0))
    }

    fn stacked_layers<Message>(element: &Element<'_, Message>) -> usize {
        element.as_widget().children().len()
    }

    #[test]
    fn hidden_controller_returns_base_only() {
        let controller = PresentationController::new(ManualScheduler::new());
        let element: Element<'_, TestMessage> =
            present_toast(Text::new("content"), &controller, &frame(), TestMessage::Tap);
        assert_eq!(stacked_layers(&element), 0);
    }

    #[test]
    fn visible_toast_is_stacked_over_base() {
        for placement in [toast::Placement::Centered, toast::Placement::TopDrop] {
            let mut controller = PresentationController::new(ManualScheduler::new());
            controller.show(ToastDescriptor::complete("Saved").placement(placement), 2.0, true);

            let element: Element<'_, TestMessage> =
                present_toast(Text::new("content"), &controller, &frame(), TestMessage::Tap);
            assert_eq!(stacked_layers(&element), 2, "{placement:?}");
        }
    }

    #[test]
    fn tap_message_dismisses_the_presented_toast() {
        for placement in [toast::Placement::Centered, toast::Placement::TopDrop] {
            let mut controller = PresentationController::new(ManualScheduler::new());
            controller.show(ToastDescriptor::text("Copied").placement(placement), 0.0, true);

            let on_tap = toast::Message::Tap;
            let element: Element<'_, toast::Message> =
                present_toast(Text::new("content"), &controller, &frame(), on_tap.clone());
            assert_eq!(stacked_layers(&element), 2);

            assert!(controller.update(on_tap));
            assert!(!controller.is_visible());

            let element: Element<'_, toast::Message> =
                present_toast(Text::new("content"), &controller, &frame(), toast::Message::Tap);
            assert_eq!(stacked_layers(&element), 0);
        }
    }

    #[test]
    fn every_node_kind_converts() {
        let descriptors = [
            ToastDescriptor::complete("ok").subtitle("details"),
            ToastDescriptor::error("ko").placement(toast::Placement::TopDrop),
            ToastDescriptor::loading().title("Loading"),
            ToastDescriptor::text("plain").bold_title(true),
        ];
        for descriptor in descriptors {
            let animation = toast::EntranceAnimation::for_content(descriptor.content());
            let node = render(&descriptor, &frame(), &animation);
            let _element: Element<'_, TestMessage> = view_node(&node);
        }
    }

    #[test]
    fn subscription_is_idle_when_nothing_animates() {
        let mut controller = PresentationController::new(ManualScheduler::new());
        controller.show(ToastDescriptor::text("still"), 0.0, true);
        assert!(!controller.needs_frames());
        let _subscription = subscription(&controller);
    }
}
