// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Components
//!
//! - [`viewer`] - Drop zone, load states and the scrolling page list
//! - [`panel`] - Floating reading controller with the darkness and coffee sliders
//! - [`notifications`] - Toast notification system for user feedback
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers, sliders)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod notifications;
pub mod panel;
pub mod styles;
pub mod theming;
pub mod viewer;
