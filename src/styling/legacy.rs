// SPDX-License-Identifier: MPL-2.0
//! Imperative per-state styling, the older of the two approaches the gallery
//! compares.
//!
//! Callers register title and glyph per interaction state through individual
//! setters and mutate the remaining properties one at a time. The control
//! resolves the registered properties into the same [`StyleSnapshot`] the
//! declarative path produces, so both styles of buttons draw through one code
//! path.

use crate::styling::configuration::{
    ContentAlignment, ImagePlacement, Insets, StyleSnapshot, TextAttributes,
};
use crate::styling::glyphs::TintedGlyph;
use crate::styling::interaction::Interaction;
use crate::ui::design_tokens::{palette, typography};
use iced::font::Weight;
use iced::Color;

/// Property store filled by individual setters.
///
/// Unregistered states fall back to the `Normal` entry, mirroring how
/// per-state property APIs behave in retained-mode toolkits.
#[derive(Debug, Clone, PartialEq)]
pub struct LegacyButtonStyle {
    titles: [Option<&'static str>; Interaction::COUNT],
    glyphs: [Option<TintedGlyph>; Interaction::COUNT],
    text_color: Color,
    text: TextAttributes,
    alignment: ContentAlignment,
    placement: ImagePlacement,
    title_insets: Insets,
    image_insets: Insets,
    background: Option<Color>,
}

impl Default for LegacyButtonStyle {
    fn default() -> Self {
        Self {
            titles: [None; Interaction::COUNT],
            glyphs: [None; Interaction::COUNT],
            text_color: palette::GRAY_400,
            text: TextAttributes {
                size: typography::BODY,
                weight: Weight::Normal,
            },
            alignment: ContentAlignment::Center,
            placement: ImagePlacement::Leading,
            title_insets: Insets::ZERO,
            image_insets: Insets::ZERO,
            background: None,
        }
    }
}

impl LegacyButtonStyle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the title (a Fluent key) shown for one interaction state.
    pub fn set_title(&mut self, state: Interaction, title: &'static str) {
        self.titles[state.index()] = Some(title);
    }

    /// Register the glyph shown for one interaction state.
    pub fn set_glyph(&mut self, state: Interaction, glyph: TintedGlyph) {
        self.glyphs[state.index()] = Some(glyph);
    }

    /// Title color, applied to every state.
    pub fn set_text_color(&mut self, color: Color) {
        self.text_color = color;
    }

    /// Title font attributes, applied to every state.
    pub fn set_font(&mut self, text: TextAttributes) {
        self.text = text;
    }

    pub fn set_alignment(&mut self, alignment: ContentAlignment) {
        self.alignment = alignment;
    }

    pub fn set_placement(&mut self, placement: ImagePlacement) {
        self.placement = placement;
    }

    /// Extra padding around the title. The inset on the side adjacent to the
    /// glyph becomes the gap between the two.
    pub fn set_title_insets(&mut self, insets: Insets) {
        self.title_insets = insets;
    }

    /// Padding between the control bounds and its content.
    pub fn set_image_insets(&mut self, insets: Insets) {
        self.image_insets = insets;
    }

    pub fn set_background(&mut self, background: Option<Color>) {
        self.background = background;
    }

    fn title_for(&self, interaction: Interaction) -> &'static str {
        self.titles[interaction.index()]
            .or(self.titles[Interaction::Normal.index()])
            .unwrap_or("")
    }

    fn glyph_for(&self, interaction: Interaction) -> Option<TintedGlyph> {
        self.glyphs[interaction.index()].or(self.glyphs[Interaction::Normal.index()])
    }

    /// Resolve the registered properties for an interaction state into the
    /// shared snapshot shape.
    #[must_use]
    pub fn snapshot(&self, interaction: Interaction) -> StyleSnapshot {
        let image_padding = match self.placement {
            ImagePlacement::Leading => self.title_insets.leading,
            ImagePlacement::Trailing => self.title_insets.trailing,
        };

        StyleSnapshot {
            title: self.title_for(interaction),
            glyph: self
                .glyph_for(interaction)
                .unwrap_or(crate::styling::glyphs::CHECK_NORMAL),
            placement: self.placement,
            image_padding,
            content_insets: self.image_insets,
            alignment: self.alignment,
            foreground: self.text_color,
            background: self.background,
            text: self.text,
        }
    }
}
