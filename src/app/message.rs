// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::toast::{self, Placement};
use iced::Size;
use std::path::PathBuf;

/// Which sample toast a button presents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample {
    Complete,
    Error,
    Icon,
    Image,
    Loading,
    Text,
}

impl Sample {
    pub const ALL: [Sample; 6] = [
        Sample::Complete,
        Sample::Error,
        Sample::Icon,
        Sample::Image,
        Sample::Loading,
        Sample::Text,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Sample::Complete => "Complete",
            Sample::Error => "Error",
            Sample::Icon => "System icon",
            Sample::Image => "Image",
            Sample::Loading => "Loading",
            Sample::Text => "Text only",
        }
    }
}

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Show(Sample),
    Toast(toast::Message),
    TogglePlacement,
    WindowResized(Size),
}

/// Runtime flags passed from `main.rs` into `App::new`.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Config file to read instead of the per-user default.
    pub config_path: Option<PathBuf>,
    /// Overrides the placement from the config file.
    pub placement: Option<Placement>,
}
