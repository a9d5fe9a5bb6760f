// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Reading levels**: Initial darkness and coffee slider positions
//! - **Render scale**: Page rasterization scale and its bounds
//! - **Notifications**: Whether ignored drops are announced

use crate::domain::level::level_bounds;

// ==========================================================================
// Reading Level Defaults
// ==========================================================================

/// Darkness slider position on first launch (0-100).
pub const DEFAULT_DARKNESS: u8 = 90;

/// Coffee slider position on first launch (0-100).
pub const DEFAULT_COFFEE: u8 = 0;

/// Whether slider positions are written back to `settings.toml`.
pub const DEFAULT_REMEMBER_LEVELS: bool = true;

// ==========================================================================
// Render Scale Defaults
// ==========================================================================

/// Pages are rendered at 1.2x their natural size.
pub const DEFAULT_RENDER_SCALE: f32 = 1.2;

/// Minimum render scale.
pub const MIN_RENDER_SCALE: f32 = 0.5;

/// Maximum render scale.
pub const MAX_RENDER_SCALE: f32 = 4.0;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Non-PDF drops are ignored without a toast unless enabled.
pub const DEFAULT_NOTIFY_REJECTED_DROPS: bool = false;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_DARKNESS <= level_bounds::MAX);
    assert!(DEFAULT_COFFEE <= level_bounds::MAX);

    assert!(MIN_RENDER_SCALE > 0.0);
    assert!(MAX_RENDER_SCALE > MIN_RENDER_SCALE);
    assert!(DEFAULT_RENDER_SCALE >= MIN_RENDER_SCALE);
    assert!(DEFAULT_RENDER_SCALE <= MAX_RENDER_SCALE);
};

/// Clamps a configured render scale, falling back to the default on NaN.
#[must_use]
pub fn clamp_render_scale(scale: f32) -> f32 {
    if scale.is_nan() {
        DEFAULT_RENDER_SCALE
    } else {
        scale.clamp(MIN_RENDER_SCALE, MAX_RENDER_SCALE)
    }
}
