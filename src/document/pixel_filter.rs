// SPDX-License-Identifier: MPL-2.0
//! Applies a [`FilterSpec`] to rendered page pixels.
//!
//! The color math follows the Filter Effects Module Level 1 shorthand
//! definitions, so a page filtered here matches what a browser shows for the
//! same `filter:` value. Each function works on linear 0–1 channel values and
//! the result is clamped before the next function runs. Alpha is never
//! touched.

use crate::domain::{FilterFunction, FilterSpec};

/// A 3x3 color matrix, row-major, acting on `[r, g, b]`.
type ColorMatrix = [[f32; 3]; 3];

/// Per-function transform ready to run on pixels.
#[derive(Debug, Clone, Copy)]
enum Stage {
    /// `c' = offset + c * scale` for every channel.
    Affine { offset: f32, scale: f32 },
    Matrix(ColorMatrix),
}

impl Stage {
    fn from_function(function: &FilterFunction) -> Self {
        match *function {
            FilterFunction::Invert(amount) => {
                let amount = amount.clamp(0.0, 1.0) as f32;
                Stage::Affine {
                    offset: amount,
                    scale: 1.0 - 2.0 * amount,
                }
            }
            FilterFunction::Brightness(factor) => Stage::Affine {
                offset: 0.0,
                scale: factor.max(0.0) as f32,
            },
            FilterFunction::Sepia(amount) => Stage::Matrix(sepia_matrix(amount)),
            FilterFunction::HueRotate(degrees) => Stage::Matrix(hue_rotate_matrix(degrees)),
        }
    }

    fn apply(&self, rgb: [f32; 3]) -> [f32; 3] {
        match self {
            Stage::Affine { offset, scale } => rgb.map(|c| (offset + c * scale).clamp(0.0, 1.0)),
            Stage::Matrix(m) => {
                let [r, g, b] = rgb;
                [
                    (m[0][0] * r + m[0][1] * g + m[0][2] * b).clamp(0.0, 1.0),
                    (m[1][0] * r + m[1][1] * g + m[1][2] * b).clamp(0.0, 1.0),
                    (m[2][0] * r + m[2][1] * g + m[2][2] * b).clamp(0.0, 1.0),
                ]
            }
        }
    }
}

fn sepia_matrix(amount: f64) -> ColorMatrix {
    let k = 1.0 - amount.clamp(0.0, 1.0) as f32;
    [
        [0.393 + 0.607 * k, 0.769 - 0.769 * k, 0.189 - 0.189 * k],
        [0.349 - 0.349 * k, 0.686 + 0.314 * k, 0.168 - 0.168 * k],
        [0.272 - 0.272 * k, 0.534 - 0.534 * k, 0.131 + 0.869 * k],
    ]
}

fn hue_rotate_matrix(degrees: f64) -> ColorMatrix {
    let radians = degrees.to_radians();
    let (sin, cos) = (radians.sin() as f32, radians.cos() as f32);
    [
        [
            0.213 + cos * 0.787 - sin * 0.213,
            0.715 - cos * 0.715 - sin * 0.715,
            0.072 - cos * 0.072 + sin * 0.928,
        ],
        [
            0.213 - cos * 0.213 + sin * 0.143,
            0.715 + cos * 0.285 + sin * 0.140,
            0.072 - cos * 0.072 - sin * 0.283,
        ],
        [
            0.213 - cos * 0.213 - sin * 0.787,
            0.715 - cos * 0.715 + sin * 0.715,
            0.072 + cos * 0.928 + sin * 0.072,
        ],
    ]
}

/// Compiled filter chain, reusable across pages.
#[derive(Debug, Clone)]
pub struct PixelFilter {
    stages: Vec<Stage>,
}

impl PixelFilter {
    /// Compiles a filter chain, dropping functions that change nothing.
    #[must_use]
    pub fn new(spec: &FilterSpec) -> Self {
        let stages = spec
            .functions()
            .iter()
            .filter(|function| !function.is_noop())
            .map(Stage::from_function)
            .collect();
        Self { stages }
    }

    /// Returns true if applying this filter would leave pixels unchanged.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.stages.is_empty()
    }

    /// Filters a single RGB triple (8-bit channels).
    #[must_use]
    pub fn apply_rgb(&self, rgb: [u8; 3]) -> [u8; 3] {
        let mut channels = rgb.map(|c| f32::from(c) / 255.0);
        for stage in &self.stages {
            channels = stage.apply(channels);
        }
        // Clamped to [0, 1] by every stage.
        channels.map(|c| (c * 255.0).round() as u8)
    }

    /// Filters a tightly packed RGBA buffer in place.
    ///
    /// A trailing partial pixel (length not a multiple of 4) is left as is.
    pub fn apply_rgba(&self, rgba: &mut [u8]) {
        if self.is_identity() {
            return;
        }
        for pixel in rgba.chunks_exact_mut(4) {
            let [r, g, b] = self.apply_rgb([pixel[0], pixel[1], pixel[2]]);
            pixel[0] = r;
            pixel[1] = g;
            pixel[2] = b;
        }
    }
}
