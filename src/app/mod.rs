// SPDX-License-Identifier: MPL-2.0
//! Demo application presenting every toast variant.
//!
//! Each button shows one sample toast with the configured duration and
//! tap-to-dismiss setting. Timers scheduled by the controller are turned into
//! tasks after every update so Iced delivers them back as messages.

mod message;

pub use message::{Flags, Message, Sample};

use crate::config::{self, ToastConfig};
use crate::toast::{
    self, estimated_toast_size, Content, Placement, PresentationController, TaskScheduler,
    TextStyle, ToastDescriptor, ToastFrame,
};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::overlay;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, window, Element, Length, Size, Subscription, Task};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: f32 = 800.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 600.0;

const ICON_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/icons/bell.svg");
const IMAGE_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/icons/badge.png");

pub struct App {
    config: ToastConfig,
    placement: Placement,
    toast: PresentationController<TaskScheduler>,
    frame: ToastFrame,
    dismissed: u32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("placement", &self.placement)
            .field("toast_visible", &self.toast.is_visible())
            .field("dismissed", &self.dismissed)
            .finish()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    iced::application(move || App::new(flags.clone()), App::update, App::view)
        .title(App::title)
        .window(window::Settings {
            size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
            ..window::Settings::default()
        })
        .subscription(App::subscription)
        .run()
}

fn load_config(flags: &Flags) -> ToastConfig {
    let loaded = match &flags.config_path {
        Some(path) => config::load_from_path(path),
        None => config::load(),
    };
    loaded.unwrap_or_else(|err| {
        tracing::warn!(error = %err, "failed to load toast config, using defaults");
        ToastConfig::default()
    })
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = load_config(&flags);
        let placement = flags.placement.unwrap_or_else(|| config.placement());

        let mut toast = PresentationController::new(TaskScheduler::new());
        toast.on_hidden(|completed| tracing::info!(completed, "toast dismissed"));

        let frame = Self::frame_for(&config, Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT));

        let app = App {
            config,
            placement,
            toast,
            frame,
            dismissed: 0,
        };
        (app, Task::none())
    }

    /// Frame for a window of `window` size. The toast size is filled in on
    /// show, from the descriptor being presented.
    fn frame_for(config: &ToastConfig, window: Size) -> ToastFrame {
        ToastFrame::fullscreen(window).with_platform(config.platform())
    }

    fn title(&self) -> String {
        String::from("iced_toast demo")
    }

    fn descriptor_for(&self, sample: Sample) -> ToastDescriptor {
        let descriptor = match sample {
            Sample::Complete => ToastDescriptor::complete("Saved").subtitle("All changes stored"),
            Sample::Error => ToastDescriptor::error("Upload failed").subtitle("Check your connection"),
            Sample::Icon => ToastDescriptor::new(
                self.placement,
                Content::SystemIcon {
                    name: ICON_PATH.to_owned(),
                    color: palette::WARNING_500,
                },
            )
            .title("Reminder"),
            Sample::Image => ToastDescriptor::new(self.placement, Content::Image(IMAGE_PATH.to_owned()))
                .title("Badge unlocked"),
            Sample::Loading => ToastDescriptor::loading().title("Loading"),
            Sample::Text => ToastDescriptor::text("Copied to clipboard")
                .background(palette::GRAY_900)
                .title_style(TextStyle::default().color(palette::WHITE)),
        };
        descriptor
            .placement(self.placement)
            .bold_title(self.config.bold_title())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Show(sample) => {
                let descriptor = self.descriptor_for(sample);
                self.frame = self
                    .frame
                    .with_toast_size(estimated_toast_size(&descriptor));
                self.toast.show(
                    descriptor,
                    self.config.duration_secs(),
                    self.config.tap_to_dismiss(),
                );
            }
            Message::Toast(toast_message) => {
                if self.toast.update(toast_message) {
                    self.dismissed += 1;
                }
            }
            Message::TogglePlacement => {
                self.placement = match self.placement {
                    Placement::Centered => Placement::TopDrop,
                    Placement::TopDrop => Placement::Centered,
                };
            }
            Message::WindowResized(size) => {
                self.frame = Self::frame_for(&self.config, size).with_toast_size(self.frame.toast);
            }
        }

        self.toast
            .scheduler_mut()
            .take_task(|token| Message::Toast(toast::Message::TimerFired(token)))
    }

    fn view(&self) -> Element<'_, Message> {
        let buttons = Row::with_children(Sample::ALL.iter().map(|&sample| {
            button(Text::new(sample.label()).size(typography::BODY))
                .on_press(Message::Show(sample))
                .into()
        }))
        .spacing(spacing::XS);

        let placement_label = match self.placement {
            Placement::Centered => "Placement: centered",
            Placement::TopDrop => "Placement: top drop",
        };

        let controls = Column::new()
            .spacing(spacing::MD)
            .align_x(alignment::Horizontal::Center)
            .push(buttons)
            .push(button(Text::new(placement_label)).on_press(Message::TogglePlacement))
            .push(
                Row::new()
                    .spacing(spacing::XS)
                    .push(
                        button(Text::new("Dismiss"))
                            .on_press(Message::Toast(toast::Message::Dismiss)),
                    )
                    .push(Text::new(format!("Dismissed: {}", self.dismissed)).size(typography::BODY)),
            );

        let content = Container::new(controls)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Bottom)
            .padding(spacing::LG);

        overlay::present_toast(
            content,
            &self.toast,
            &self.frame,
            Message::Toast(toast::Message::Tap),
        )
    }

    fn subscription(&self) -> Subscription<Message> {
        let frames = overlay::subscription(&self.toast).map(Message::Toast);
        let resizes = window::resize_events().map(|(_id, size)| Message::WindowResized(size));

        Subscription::batch([frames, resizes])
    }
}
