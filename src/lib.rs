// SPDX-License-Identifier: MPL-2.0
//! `iced_button_gallery` is a single-screen demonstration app built with the
//! Iced GUI framework.
//!
//! It renders the same six buttons twice over two styling approaches — legacy
//! imperative per-state property setters and a declarative configuration
//! object resolved through a pure `render` function — and demonstrates
//! internationalization with Fluent and modular UI design.

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod styling;
pub mod ui;
