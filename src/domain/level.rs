// SPDX-License-Identifier: MPL-2.0
//! Slider level newtype.
//!
//! Both reading sliders (darkness and coffee) share the same 0–100 integer
//! domain, so a single clamped type backs them.

// =============================================================================
// Level Bounds
// =============================================================================

/// Level bounds (0 to 100, integer step 1).
pub mod level_bounds {
    /// Minimum slider value.
    pub const MIN: u8 = 0;
    /// Maximum slider value.
    pub const MAX: u8 = 100;
}

// =============================================================================
// Level
// =============================================================================

/// Slider level, guaranteed to be within the valid range (0–100).
///
/// Every constructor clamps, so downstream filter math never has to
/// re-validate its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Level(u8);

impl Level {
    /// The lowest level (no effect).
    pub const MIN: Self = Self(level_bounds::MIN);

    /// The highest level (full effect).
    pub const MAX: Self = Self(level_bounds::MAX);

    /// Creates a new level, clamping the value to the valid range.
    #[must_use]
    pub fn new(value: i32) -> Self {
        let clamped = value.clamp(i32::from(level_bounds::MIN), i32::from(level_bounds::MAX));
        // Clamped above, always fits in u8.
        Self(u8::try_from(clamped).unwrap_or(level_bounds::MAX))
    }

    /// Creates a level from a slider position, rounding to the nearest step.
    #[must_use]
    pub fn from_slider(value: f32) -> Self {
        if value.is_nan() {
            return Self::MIN;
        }
        // Saturating float-to-int cast, then clamp.
        Self::new(value.round() as i32)
    }

    /// Returns the raw level value.
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Returns the level as a fraction of the full range (0.0–1.0).
    #[must_use]
    pub fn fraction(self) -> f64 {
        f64::from(self.0) / f64::from(level_bounds::MAX)
    }
}

impl From<u8> for Level {
    fn from(value: u8) -> Self {
        Self::new(i32::from(value))
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.0
    }
}
