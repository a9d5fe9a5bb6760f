// SPDX-License-Identifier: MPL-2.0
//! Domain layer - reading-comfort rules with ZERO external dependencies.
//!
//! This module contains the pure value objects behind the two sliders and the
//! arithmetic that turns them into a page background and a filter chain.
//! Nothing here touches the filesystem, the rendering engine or the GUI.
//!
//! # Modules
//!
//! - [`level`]: Slider values ([`Level`](level::Level))
//! - [`filter`]: Filter composition ([`FilterSpec`](filter::FilterSpec),
//!   [`FilterSettings`](filter::FilterSettings), [`background_color`](filter::background_color))

pub mod filter;
pub mod level;

pub use filter::{
    background_color, coffee_filter, combined_filter, night_filter, FilterFunction,
    FilterSettings, FilterSpec, Rgb,
};
pub use level::Level;
