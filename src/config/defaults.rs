// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for toast configuration.
//!
//! This module is the single source of truth for default values used by
//! [`ToastConfig`](super::ToastConfig) and the presentation controller.

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Default time a toast stays on screen before hiding itself (in seconds).
pub const DEFAULT_DURATION_SECS: f64 = 2.0;

/// Minimum auto-dismiss duration. Zero disables auto-dismiss.
pub const MIN_DURATION_SECS: f64 = 0.0;

/// Maximum auto-dismiss duration accepted from the config file.
pub const MAX_DURATION_SECS: f64 = 60.0;

/// Whether tapping a toast dismisses it by default.
pub const DEFAULT_TAP_TO_DISMISS: bool = true;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Time for a checkmark or xmark to be fully stroked (in milliseconds).
pub const TRIM_ANIMATION_MS: u64 = 240;

/// Spinner rotation speed (radians per second).
pub const SPINNER_RADIANS_PER_SEC: f32 = 2.0 * std::f32::consts::PI;

/// Frame interval used while an animation is running (60 FPS).
pub const FRAME_INTERVAL_MS: u64 = 16;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Fraction of the screen height kept above a top-drop toast on touch layouts.
pub const TOP_DROP_SCREEN_MARGIN_RATIO: f32 = 0.01;

const _: () = {
    assert!(MIN_DURATION_SECS == 0.0);
    assert!(MAX_DURATION_SECS > DEFAULT_DURATION_SECS);
    assert!(DEFAULT_DURATION_SECS > MIN_DURATION_SECS);
    assert!(FRAME_INTERVAL_MS < TRIM_ANIMATION_MS);
};
