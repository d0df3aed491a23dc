// SPDX-License-Identifier: MPL-2.0
//! Toast and HUD alert presentation.
//!
//! # Components
//!
//! - [`descriptor`] - What to show: content glyph, text, colors, placement
//! - [`controller`] - Show/hide state machine with auto-dismiss and tap-to-dismiss
//! - [`scheduler`] - Deferred timer delivery (Iced tasks or a manual clock)
//! - [`geometry`] - Top-drop offset from host and screen geometry
//! - [`animation`] - Checkmark/xmark trim progress and spinner rotation
//! - [`render`] - Pure descriptor → visual tree mapping
//!
//! # Usage
//!
//! ```
//! use iced_toast::toast::{ManualScheduler, PresentationController, ToastDescriptor};
//! use std::time::Duration;
//!
//! let mut controller = PresentationController::new(ManualScheduler::new());
//! controller.show(ToastDescriptor::complete("Saved"), 2.0, true);
//! assert!(controller.is_visible());
//!
//! for token in controller.scheduler_mut().advance(Duration::from_secs(2)) {
//!     controller.handle_timer(token);
//! }
//! assert!(!controller.is_visible());
//! ```

pub mod animation;
pub mod controller;
pub mod descriptor;
pub mod geometry;
pub mod render;
pub mod scheduler;

pub use animation::EntranceAnimation;
pub use controller::{Message, PresentationController, PresentationState};
pub use descriptor::{Content, Placement, TextStyle, ToastDescriptor};
pub use geometry::{PlatformLayout, ToastFrame, TopDropLayout};
pub use render::{estimated_toast_size, render, Align, Glyph, Node, Surface, TextLine};
pub use scheduler::{ManualScheduler, Scheduler, TaskScheduler, TimerToken};
