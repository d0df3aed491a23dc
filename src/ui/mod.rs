// SPDX-License-Identifier: MPL-2.0
//! Iced side of the toast: widgets, styles and the overlay decorator.
//!
//! - [`overlay`] - Turns the visual tree into elements and stacks it over a view
//! - [`widgets`] - Canvas glyphs (checkmark/xmark trim, spinner)
//! - [`styles`] - Toast surface styling
//! - [`design_tokens`] - Colors, spacing, sizing and typography constants

pub mod design_tokens;
pub mod overlay;
pub mod styles;
pub mod widgets;
