// SPDX-License-Identifier: MPL-2.0
//! Entrance animation state for the toast glyph.
//!
//! Checkmarks and xmarks are stroked in once per presentation: trim progress
//! runs from 0 to 1 and then stays at 1 until the next presentation resets
//! it. The loading spinner rotates for as long as the toast is visible.

use super::descriptor::Content;
use crate::config::defaults::{SPINNER_RADIANS_PER_SEC, TRIM_ANIMATION_MS};
use std::f32::consts::TAU;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq)]
pub struct EntranceAnimation {
    trims: bool,
    spins: bool,
    elapsed: Duration,
    rotation: f32,
    last_frame: Option<Instant>,
}

impl Default for EntranceAnimation {
    fn default() -> Self {
        Self {
            trims: false,
            spins: false,
            elapsed: Duration::ZERO,
            rotation: 0.0,
            last_frame: None,
        }
    }
}

impl EntranceAnimation {
    /// Fresh animation state for a new presentation of `content`.
    #[must_use]
    pub fn for_content(content: &Content) -> Self {
        Self {
            trims: content.has_trim_animation(),
            spins: content.is_loading(),
            ..Self::default()
        }
    }

    /// Stroked fraction of the checkmark or xmark path, in `0.0..=1.0`.
    ///
    /// Content without a trim animation is always fully drawn.
    #[must_use]
    pub fn trim_progress(&self) -> f32 {
        if !self.trims {
            return 1.0;
        }
        let total = Duration::from_millis(TRIM_ANIMATION_MS).as_secs_f32();
        (self.elapsed.as_secs_f32() / total).clamp(0.0, 1.0)
    }

    /// Spinner angle in radians, in `0.0..TAU`.
    #[must_use]
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Whether another frame would change what is drawn.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.spins || (self.trims && self.trim_progress() < 1.0)
    }

    pub fn advance(&mut self, dt: Duration) {
        if self.trims {
            self.elapsed = self.elapsed.saturating_add(dt);
        }
        if self.spins {
            self.rotation = (self.rotation + SPINNER_RADIANS_PER_SEC * dt.as_secs_f32()) % TAU;
        }
    }

    /// Advances by the time since the previous frame. The first frame only
    /// records its timestamp.
    pub fn tick(&mut self, now: Instant) {
        if let Some(last) = self.last_frame {
            self.advance(now.saturating_duration_since(last));
        }
        self.last_frame = Some(now);
    }
}
