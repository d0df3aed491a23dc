// SPDX-License-Identifier: MPL-2.0
pub mod animated_spinner;
pub mod trim_glyph;

pub use animated_spinner::AnimatedSpinner;
pub use trim_glyph::{TrimGlyph, TrimShape};
