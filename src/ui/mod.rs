// SPDX-License-Identifier: MPL-2.0
//! UI layer: design tokens, centralized styles, theming, and the gallery
//! screen.

pub mod design_tokens;
pub mod gallery;
pub mod styles;
pub mod theming;
