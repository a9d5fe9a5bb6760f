// SPDX-License-Identifier: MPL-2.0
//! Reading filter composition.
//!
//! Maps the two slider levels to visual effect parameters:
//!
//! - [`background_color`]: window background, white at darkness 0 and
//!   near-black at darkness 100
//! - [`night_filter`]: partial inversion followed by a half-turn hue rotation,
//!   so inverted pages keep their original hues
//! - [`coffee_filter`]: linked sepia, hue and brightness warm tint
//! - [`combined_filter`]: night filter first, coffee tint on top
//!
//! All functions are total and pure. The [`FilterSpec`] they produce renders
//! to CSS filter syntax through `Display`, which keeps the values easy to log
//! and to compare in tests.

use super::level::Level;
use std::fmt;

/// Background channel values at darkness 0.
const LIGHT_BACKGROUND: Rgb = Rgb::new(255, 255, 255);

/// Background channel values at darkness 100.
const DARK_BACKGROUND: Rgb = Rgb::new(18, 18, 18);

/// Hue rotation paired with inversion to restore the original hues.
pub const NIGHT_HUE_ROTATION_DEG: f64 = 180.0;

/// Sepia amount at full coffee.
pub const COFFEE_MAX_SEPIA: f64 = 0.8;

/// Hue rotation at full coffee, in degrees.
pub const COFFEE_MAX_HUE_DEG: f64 = -20.0;

/// Brightness floor at full coffee.
pub const COFFEE_MIN_BRIGHTNESS: f64 = 0.92;

// =============================================================================
// Rgb
// =============================================================================

/// An opaque 8-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// Interpolates one channel and rounds to the nearest integer.
fn lerp_channel(start: u8, end: u8, ratio: f64) -> u8 {
    let value = f64::from(start) + (f64::from(end) - f64::from(start)) * ratio;
    // Both endpoints are u8 and ratio is in [0, 1].
    value.round().clamp(0.0, 255.0) as u8
}

/// Computes the window background for a darkness level.
///
/// Each channel is linearly interpolated between white (darkness 0) and
/// `rgb(18,18,18)` (darkness 100), then rounded.
#[must_use]
pub fn background_color(darkness: Level) -> Rgb {
    let ratio = darkness.fraction();
    Rgb::new(
        lerp_channel(LIGHT_BACKGROUND.r, DARK_BACKGROUND.r, ratio),
        lerp_channel(LIGHT_BACKGROUND.g, DARK_BACKGROUND.g, ratio),
        lerp_channel(LIGHT_BACKGROUND.b, DARK_BACKGROUND.b, ratio),
    )
}

// =============================================================================
// Filter Functions
// =============================================================================

/// A single filter primitive, in CSS filter-effects terms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilterFunction {
    /// Inversion amount, 0.0 (none) to 1.0 (full).
    Invert(f64),
    /// Hue rotation in degrees.
    HueRotate(f64),
    /// Sepia amount, 0.0 (none) to 1.0 (full).
    Sepia(f64),
    /// Brightness multiplier, 1.0 is unchanged.
    Brightness(f64),
}

impl FilterFunction {
    /// Returns true if this function leaves every color unchanged.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        match *self {
            Self::Invert(amount) | Self::Sepia(amount) => amount == 0.0,
            Self::HueRotate(degrees) => degrees % 360.0 == 0.0,
            Self::Brightness(factor) => factor == 1.0,
        }
    }

    /// Returns true if this function leaves neutral greys unchanged.
    ///
    /// Hue rotation maps every grey onto itself, whatever the angle.
    #[must_use]
    pub fn preserves_greys(&self) -> bool {
        matches!(self, Self::HueRotate(_)) || self.is_noop()
    }
}

/// Avoids printing `-0` for a zero parameter.
fn normalize_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

impl fmt::Display for FilterFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Invert(amount) => write!(f, "invert({})", normalize_zero(amount)),
            Self::HueRotate(degrees) => write!(f, "hue-rotate({}deg)", normalize_zero(degrees)),
            Self::Sepia(amount) => write!(f, "sepia({})", normalize_zero(amount)),
            Self::Brightness(factor) => write!(f, "brightness({})", normalize_zero(factor)),
        }
    }
}

// =============================================================================
// FilterSpec
// =============================================================================

/// An ordered chain of filter functions, applied first to last.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterSpec(Vec<FilterFunction>);

impl FilterSpec {
    /// Creates a filter chain from its functions.
    #[must_use]
    pub fn new(functions: Vec<FilterFunction>) -> Self {
        Self(functions)
    }

    /// Returns the functions in application order.
    #[must_use]
    pub fn functions(&self) -> &[FilterFunction] {
        &self.0
    }

    /// Appends `other` after this chain.
    #[must_use]
    pub fn then(mut self, other: FilterSpec) -> Self {
        self.0.extend(other.0);
        self
    }

    /// Returns true if the chain changes no color at all.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.0.iter().all(FilterFunction::is_noop)
    }

    /// Returns true if the chain applies no inversion, no sepia and no
    /// brightness change. Only hue rotations may remain, which leave
    /// black-on-white page content untouched.
    #[must_use]
    pub fn preserves_greys(&self) -> bool {
        self.0.iter().all(FilterFunction::preserves_greys)
    }

    /// Total inversion amount requested by the chain.
    #[must_use]
    pub fn inversion(&self) -> f64 {
        self.0
            .iter()
            .map(|function| match function {
                FilterFunction::Invert(amount) => *amount,
                _ => 0.0,
            })
            .sum()
    }

    /// Total sepia amount requested by the chain.
    #[must_use]
    pub fn sepia(&self) -> f64 {
        self.0
            .iter()
            .map(|function| match function {
                FilterFunction::Sepia(amount) => *amount,
                _ => 0.0,
            })
            .sum()
    }
}

impl fmt::Display for FilterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, function) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{function}")?;
        }
        Ok(())
    }
}

// =============================================================================
// Composition
// =============================================================================

/// Night-mode filter: inversion by `darkness / 100`, then a fixed 180° hue
/// rotation.
#[must_use]
pub fn night_filter(darkness: Level) -> FilterSpec {
    FilterSpec::new(vec![
        FilterFunction::Invert(darkness.fraction()),
        FilterFunction::HueRotate(NIGHT_HUE_ROTATION_DEG),
    ])
}

/// Coffee tint: sepia up to 0.8, hue rotation down to -20°, brightness down
/// to 0.92. All three follow the same slider linearly.
#[must_use]
pub fn coffee_filter(coffee: Level) -> FilterSpec {
    let ratio = coffee.fraction();
    FilterSpec::new(vec![
        FilterFunction::Sepia(ratio * COFFEE_MAX_SEPIA),
        FilterFunction::HueRotate(COFFEE_MAX_HUE_DEG * ratio),
        FilterFunction::Brightness(1.0 - ratio * (1.0 - COFFEE_MIN_BRIGHTNESS)),
    ])
}

/// Night filter followed by the coffee tint.
///
/// Inversion is computed on the original page colors and the tint is layered
/// on the inverted result.
#[must_use]
pub fn combined_filter(darkness: Level, coffee: Level) -> FilterSpec {
    night_filter(darkness).then(coffee_filter(coffee))
}

// =============================================================================
// FilterSettings
// =============================================================================

/// The two slider levels that drive every reading effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterSettings {
    pub darkness: Level,
    pub coffee: Level,
}

impl FilterSettings {
    #[must_use]
    pub fn new(darkness: Level, coffee: Level) -> Self {
        Self { darkness, coffee }
    }

    /// Window background for the current darkness.
    #[must_use]
    pub fn background(&self) -> Rgb {
        background_color(self.darkness)
    }

    /// Filter chain applied to every rendered page.
    #[must_use]
    pub fn filter(&self) -> FilterSpec {
        combined_filter(self.darkness, self.coffee)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn background_endpoints_match_light_and_dark() {
        assert_eq!(background_color(Level::MIN), Rgb::new(255, 255, 255));
        assert_eq!(background_color(Level::MAX), Rgb::new(18, 18, 18));
    }

    #[test]
    fn background_rounds_to_nearest_channel() {
        // 255 + (18 - 255) * 0.5 = 136.5, rounded away from zero.
        assert_eq!(background_color(Level::new(50)), Rgb::new(137, 137, 137));
        // 255 - 237 * 0.9 = 41.7
        assert_eq!(background_color(Level::new(90)), Rgb::new(42, 42, 42));
    }

    #[test]
    fn background_displays_as_css_rgb() {
        assert_eq!(background_color(Level::MAX).to_string(), "rgb(18,18,18)");
    }

    #[test]
    fn night_filter_at_full_darkness() {
        assert_eq!(
            night_filter(Level::MAX).to_string(),
            "invert(1) hue-rotate(180deg)"
        );
    }

    #[test]
    fn coffee_filter_at_zero_is_neutral() {
        let spec = coffee_filter(Level::MIN);
        assert!(spec.is_identity());
        assert_eq!(spec.to_string(), "sepia(0) hue-rotate(0deg) brightness(1)");
    }

    #[test]
    fn coffee_filter_at_full_strength() {
        assert_eq!(
            coffee_filter(Level::MAX).functions(),
            &[
                FilterFunction::Sepia(0.8),
                FilterFunction::HueRotate(-20.0),
                FilterFunction::Brightness(0.92),
            ]
        );
    }

    #[test]
    fn combined_filter_puts_night_before_coffee() {
        let spec = combined_filter(Level::MAX, Level::MAX);
        assert_eq!(
            spec.to_string(),
            "invert(1) hue-rotate(180deg) sepia(0.8) hue-rotate(-20deg) brightness(0.92)"
        );
    }

    #[test]
    fn combined_filter_at_rest_has_no_inversion_or_sepia() {
        let spec = combined_filter(Level::MIN, Level::MIN);
        assert_eq!(spec.inversion(), 0.0);
        assert_eq!(spec.sepia(), 0.0);
        assert!(spec.preserves_greys());
        // The night hue rotation is always present.
        assert!(!spec.is_identity());
    }

    #[test]
    fn noop_detection_per_function() {
        assert!(FilterFunction::HueRotate(360.0).is_noop());
        assert!(!FilterFunction::HueRotate(180.0).is_noop());
        assert!(FilterFunction::HueRotate(180.0).preserves_greys());
        assert!(!FilterFunction::Invert(0.1).preserves_greys());
        assert!(FilterFunction::Brightness(1.0).is_noop());
    }

    #[test]
    fn settings_forward_to_composers() {
        let settings = FilterSettings::new(Level::new(30), Level::new(60));
        assert_eq!(settings.background(), background_color(Level::new(30)));
        assert_eq!(
            settings.filter(),
            combined_filter(Level::new(30), Level::new(60))
        );
    }
}
