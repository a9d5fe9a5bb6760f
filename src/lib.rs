// SPDX-License-Identifier: MPL-2.0
//! `nightread` is a lightweight PDF reader built with the Iced GUI framework.
//!
//! Drop a PDF on the window and tune two sliders: darkness inverts the pages
//! and darkens the background, coffee layers a warm sepia tint on top.
//!
//! # Layers
//!
//! - [`domain`]: slider levels and filter composition, no I/O
//! - [`document`]: admission gate, PDF engine boundary, page rendering
//! - [`ui`]: viewer, reading controller, toasts and styling
//! - [`app`]: the Iced application, configuration and paths

pub mod app;
pub mod document;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;
