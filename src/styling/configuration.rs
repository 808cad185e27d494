// SPDX-License-Identifier: MPL-2.0
//! Declarative button configuration.
//!
//! A [`ButtonConfiguration`] bundles every style attribute of a control into
//! one value that is assigned wholesale, instead of being registered property
//! by property. The visible content for a given interaction state is resolved
//! through [`render`], a pure function over the configuration's per-state
//! content table. Widget code receives the result as a [`StyleSnapshot`] and
//! never inspects interaction state itself.

use crate::styling::glyphs::TintedGlyph;
use crate::styling::interaction::Interaction;
use iced::font::Weight;
use iced::Color;

/// Placement of the glyph relative to the title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImagePlacement {
    /// Glyph before the title.
    Leading,
    /// Glyph after the title (mirrored layout).
    Trailing,
}

/// Horizontal alignment of the title/glyph group inside the control bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentAlignment {
    Leading,
    Center,
}

/// Padding between a control's bounds and its internal content.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Insets {
    pub top: f32,
    pub leading: f32,
    pub bottom: f32,
    pub trailing: f32,
}

impl Insets {
    pub const ZERO: Insets = Insets::new(0.0, 0.0, 0.0, 0.0);

    #[must_use]
    pub const fn new(top: f32, leading: f32, bottom: f32, trailing: f32) -> Self {
        Self {
            top,
            leading,
            bottom,
            trailing,
        }
    }
}

impl From<Insets> for iced::Padding {
    fn from(insets: Insets) -> Self {
        iced::Padding {
            top: insets.top,
            right: insets.trailing,
            bottom: insets.bottom,
            left: insets.leading,
        }
    }
}

/// Title font attributes, pinned across interaction states.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextAttributes {
    pub size: f32,
    pub weight: Weight,
}

/// Title and glyph shown for one interaction state. Titles are Fluent keys,
/// resolved at draw time against the active locale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentStyle {
    pub title: &'static str,
    pub glyph: TintedGlyph,
}

/// Per-state content lookup table. States without an entry fall back to the
/// normal content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateContent {
    pub normal: ContentStyle,
    pub highlighted: Option<ContentStyle>,
    pub selected: Option<ContentStyle>,
}

impl StateContent {
    /// Content with no per-state overrides.
    #[must_use]
    pub const fn uniform(normal: ContentStyle) -> Self {
        Self {
            normal,
            highlighted: None,
            selected: None,
        }
    }

    #[must_use]
    pub fn resolve(&self, interaction: Interaction) -> ContentStyle {
        match interaction {
            Interaction::Normal => self.normal,
            Interaction::Highlighted => self.highlighted.unwrap_or(self.normal),
            Interaction::Selected => self.selected.unwrap_or(self.normal),
        }
    }
}

/// Declarative bundle of every style attribute of a control.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonConfiguration {
    pub content: StateContent,
    pub placement: ImagePlacement,
    /// Gap between glyph and title.
    pub image_padding: f32,
    pub content_insets: Insets,
    pub alignment: ContentAlignment,
    /// Title color, pinned across interaction states.
    pub foreground: Color,
    /// `None` draws the control on a transparent surface.
    pub background: Option<Color>,
    pub text: TextAttributes,
}

/// Fully resolved visible content of a control for one interaction state.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleSnapshot {
    pub title: &'static str,
    pub glyph: TintedGlyph,
    pub placement: ImagePlacement,
    pub image_padding: f32,
    pub content_insets: Insets,
    pub alignment: ContentAlignment,
    pub foreground: Color,
    pub background: Option<Color>,
    pub text: TextAttributes,
}

/// Resolve the visible content of a configured control for an interaction
/// state. Pure: same configuration and state, same snapshot.
#[must_use]
pub fn render(config: &ButtonConfiguration, interaction: Interaction) -> StyleSnapshot {
    let content = config.content.resolve(interaction);

    StyleSnapshot {
        title: content.title,
        glyph: content.glyph,
        placement: config.placement,
        image_padding: config.image_padding,
        content_insets: config.content_insets,
        alignment: config.alignment,
        foreground: config.foreground,
        background: config.background,
        text: config.text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::styling::glyphs;
    use crate::ui::design_tokens::{palette, typography};

    fn sample_config() -> ButtonConfiguration {
        ButtonConfiguration {
            content: StateContent {
                normal: ContentStyle {
                    title: "check-button-title",
                    glyph: glyphs::CHECK_NORMAL,
                },
                highlighted: Some(ContentStyle {
                    title: "check-button-title",
                    glyph: glyphs::CHECK_HIGHLIGHTED,
                }),
                selected: Some(ContentStyle {
                    title: "check-button-selected",
                    glyph: glyphs::CHECK_SELECTED,
                }),
            },
            placement: ImagePlacement::Leading,
            image_padding: 10.0,
            content_insets: Insets::new(5.0, 5.0, 5.0, 0.0),
            alignment: ContentAlignment::Leading,
            foreground: palette::GRAY_400,
            background: None,
            text: TextAttributes {
                size: typography::CAPTION,
                weight: Weight::Semibold,
            },
        }
    }

    #[test]
    fn render_is_pure() {
        let config = sample_config();
        assert_eq!(
            render(&config, Interaction::Selected),
            render(&config, Interaction::Selected)
        );
    }

    #[test]
    fn render_swaps_content_per_state() {
        let config = sample_config();

        let normal = render(&config, Interaction::Normal);
        assert_eq!(normal.title, "check-button-title");
        assert_eq!(normal.glyph, glyphs::CHECK_NORMAL);

        let highlighted = render(&config, Interaction::Highlighted);
        assert_eq!(highlighted.title, "check-button-title");
        assert_eq!(highlighted.glyph, glyphs::CHECK_HIGHLIGHTED);

        let selected = render(&config, Interaction::Selected);
        assert_eq!(selected.title, "check-button-selected");
        assert_eq!(selected.glyph, glyphs::CHECK_SELECTED);
    }

    #[test]
    fn render_keeps_text_attributes_across_states() {
        let config = sample_config();
        let normal = render(&config, Interaction::Normal);
        let selected = render(&config, Interaction::Selected);

        assert_eq!(normal.foreground, selected.foreground);
        assert_eq!(normal.text, selected.text);
    }

    #[test]
    fn missing_state_entries_fall_back_to_normal() {
        let uniform = ButtonConfiguration {
            content: StateContent::uniform(ContentStyle {
                title: "play-button-title",
                glyph: glyphs::PLAY,
            }),
            ..sample_config()
        };

        for interaction in [
            Interaction::Normal,
            Interaction::Highlighted,
            Interaction::Selected,
        ] {
            let snapshot = render(&uniform, interaction);
            assert_eq!(snapshot.title, "play-button-title");
            assert_eq!(snapshot.glyph, glyphs::PLAY);
        }
    }

    #[test]
    fn insets_convert_to_padding() {
        let padding: iced::Padding = Insets::new(5.0, 6.0, 7.0, 8.0).into();
        assert_eq!(padding.top, 5.0);
        assert_eq!(padding.left, 6.0);
        assert_eq!(padding.bottom, 7.0);
        assert_eq!(padding.right, 8.0);
    }
}
