// SPDX-License-Identifier: MPL-2.0
//! Styles for the gallery's tappable control surfaces.

use crate::ui::design_tokens::radius;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Background surface behind a gallery control. `None` keeps the surface
/// transparent so only title and glyph are visible.
pub fn surface(background: Option<Color>) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: background.map(Background::Color),
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}
