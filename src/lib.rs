// SPDX-License-Identifier: MPL-2.0
//! `iced_toast` presents toast and HUD alerts over Iced views.
//!
//! A toast is described by a [`toast::ToastDescriptor`], shown and hidden by a
//! [`toast::PresentationController`], rendered to a plain visual tree by
//! [`toast::render`], and turned into widgets by [`ui::overlay`].

pub mod app;
pub mod config;
pub mod error;
pub mod toast;
pub mod ui;
