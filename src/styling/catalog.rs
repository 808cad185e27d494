// SPDX-License-Identifier: MPL-2.0
//! The six button specifications shown by the gallery.
//!
//! Three check-style toggles and three play-style controls, each built once
//! with the legacy setter API and twice with [`ButtonConfiguration`]. The
//! configured variants carry the same inset numbers as their legacy sibling
//! (or a slightly adjusted set for the third variant), which is the point of
//! the comparison.

use crate::styling::configuration::{
    ButtonConfiguration, ContentAlignment, ContentStyle, ImagePlacement, Insets, StateContent,
    TextAttributes,
};
use crate::styling::glyphs;
use crate::styling::interaction::Interaction;
use crate::styling::legacy::LegacyButtonStyle;
use crate::ui::design_tokens::{opacity, palette, typography};
use iced::font::Weight;
use iced::Color;

/// Fluent key for the unselected check button title.
pub const CHECK_TITLE: &str = "check-button-title";
/// Fluent key for the selected check button title.
pub const CHECK_SELECTED_TITLE: &str = "check-button-selected";
/// Fluent key for the play button title.
pub const PLAY_TITLE: &str = "play-button-title";

/// Check button label color, identical in every state.
pub const CHECK_TEXT_COLOR: Color = palette::GRAY_400;

/// Play button tint, shared by label and glyph.
pub const PLAY_TINT: Color = Color {
    a: opacity::TINT_SOFT,
    ..palette::PRIMARY_500
};

/// Background wash applied to the configured check variants once they have
/// been selected for the first time.
pub const SELECTED_BACKGROUND: Color = Color {
    a: opacity::TINT_FAINT,
    ..palette::SUCCESS_500
};

const CHECK_TEXT: TextAttributes = TextAttributes {
    size: typography::CAPTION,
    weight: Weight::Semibold,
};

const PLAY_TEXT: TextAttributes = TextAttributes {
    size: typography::BODY,
    weight: Weight::Semibold,
};

/// Check variant 1: per-state properties registered through setters.
/// No highlighted entry is registered, so holding the pointer down keeps the
/// normal glyph.
#[must_use]
pub fn legacy_check() -> LegacyButtonStyle {
    let mut style = LegacyButtonStyle::new();
    style.set_title(Interaction::Normal, CHECK_TITLE);
    style.set_title(Interaction::Selected, CHECK_SELECTED_TITLE);
    style.set_glyph(Interaction::Normal, glyphs::CHECK_NORMAL);
    style.set_glyph(Interaction::Selected, glyphs::CHECK_SELECTED);
    style.set_text_color(CHECK_TEXT_COLOR);
    style.set_font(CHECK_TEXT);
    style.set_alignment(ContentAlignment::Leading);
    style.set_title_insets(Insets::new(0.0, 10.0, 0.0, 0.0));
    style.set_image_insets(Insets::new(5.0, 5.0, 5.0, 0.0));
    style
}

fn check_content() -> StateContent {
    StateContent {
        normal: ContentStyle {
            title: CHECK_TITLE,
            glyph: glyphs::CHECK_NORMAL,
        },
        highlighted: Some(ContentStyle {
            title: CHECK_TITLE,
            glyph: glyphs::CHECK_HIGHLIGHTED,
        }),
        selected: Some(ContentStyle {
            title: CHECK_SELECTED_TITLE,
            glyph: glyphs::CHECK_SELECTED,
        }),
    }
}

/// Check variant 2: the legacy variant's numbers carried over into a
/// configuration object unchanged.
#[must_use]
pub fn configured_check() -> ButtonConfiguration {
    ButtonConfiguration {
        content: check_content(),
        placement: ImagePlacement::Leading,
        image_padding: 10.0,
        content_insets: Insets::new(5.0, 5.0, 5.0, 0.0),
        alignment: ContentAlignment::Leading,
        foreground: CHECK_TEXT_COLOR,
        background: None,
        text: CHECK_TEXT,
    }
}

/// Check variant 3: like variant 2 with a tighter glyph gap.
#[must_use]
pub fn adjusted_check() -> ButtonConfiguration {
    ButtonConfiguration {
        image_padding: 5.0,
        ..configured_check()
    }
}

/// Play variant 1: per-state setters, glyph after the title.
#[must_use]
pub fn legacy_play() -> LegacyButtonStyle {
    let mut style = LegacyButtonStyle::new();
    style.set_title(Interaction::Normal, PLAY_TITLE);
    style.set_glyph(Interaction::Normal, glyphs::PLAY);
    style.set_text_color(PLAY_TINT);
    style.set_font(PLAY_TEXT);
    style.set_placement(ImagePlacement::Trailing);
    style.set_title_insets(Insets::new(0.0, 0.0, 0.0, 10.0));
    style
}

fn play_content() -> StateContent {
    StateContent::uniform(ContentStyle {
        title: PLAY_TITLE,
        glyph: glyphs::PLAY,
    })
}

/// Play variant 2: the legacy numbers carried into a configuration object.
#[must_use]
pub fn configured_play() -> ButtonConfiguration {
    ButtonConfiguration {
        content: play_content(),
        placement: ImagePlacement::Trailing,
        image_padding: 10.0,
        content_insets: Insets::ZERO,
        alignment: ContentAlignment::Center,
        foreground: PLAY_TINT,
        background: None,
        text: PLAY_TEXT,
    }
}

/// Play variant 3: tighter glyph gap, trailing content inset instead.
#[must_use]
pub fn adjusted_play() -> ButtonConfiguration {
    ButtonConfiguration {
        image_padding: 5.0,
        content_insets: Insets::new(0.0, 0.0, 0.0, 5.0),
        ..configured_play()
    }
}
