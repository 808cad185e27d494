// SPDX-License-Identifier: MPL-2.0
//! Gallery screen: three check-style toggles above three play-style controls.
//!
//! Every control draws through the same snapshot-based surface; what differs
//! per control is how the snapshot is produced (legacy setters vs. a
//! configuration object) and whether taps mutate interaction state at all.

use crate::i18n::fluent::I18n;
use crate::styling::configuration::{self, ContentAlignment, ImagePlacement, StyleSnapshot};
use crate::styling::{catalog, glyphs, ButtonConfiguration, ControlState, Interaction, LegacyButtonStyle};
use crate::ui::design_tokens::sizing;
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::image::Image;
use iced::widget::{mouse_area, Column, Container, Row, Text};
use iced::{Color, Element, Font, Length, Padding};

/// Distance from the window top to the first control.
const TOP_OFFSET: f32 = 150.0;
/// Vertical gap between controls.
const BUTTON_SPACING: f32 = 20.0;
/// Check button dimensions.
const CHECK_WIDTH: f32 = 150.0;
const CHECK_HEIGHT: f32 = 50.0;
/// Play button dimensions.
const PLAY_WIDTH: f32 = 100.0;
const PLAY_HEIGHT: f32 = 30.0;

const _: () = {
    assert!(CHECK_WIDTH > PLAY_WIDTH);
    assert!(CHECK_HEIGHT > PLAY_HEIGHT);
    assert!(TOP_OFFSET > BUTTON_SPACING);
};

/// Identifies one of the three check-style toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckId {
    Legacy,
    Configured,
    Adjusted,
}

impl CheckId {
    pub const ALL: [CheckId; 3] = [CheckId::Legacy, CheckId::Configured, CheckId::Adjusted];

    const fn index(self) -> usize {
        match self {
            CheckId::Legacy => 0,
            CheckId::Configured => 1,
            CheckId::Adjusted => 2,
        }
    }
}

/// Identifies one of the three play-style controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayId {
    Legacy,
    Configured,
    Adjusted,
}

impl PlayId {
    pub const ALL: [PlayId; 3] = [PlayId::Legacy, PlayId::Configured, PlayId::Adjusted];

    const fn index(self) -> usize {
        match self {
            PlayId::Legacy => 0,
            PlayId::Configured => 1,
            PlayId::Adjusted => 2,
        }
    }
}

/// Messages emitted by the gallery screen.
#[derive(Debug, Clone)]
pub enum Message {
    CheckPressed(CheckId),
    CheckReleased(CheckId),
    /// Pointer left a check control while held down; the press is abandoned.
    CheckCancelled(CheckId),
    PlayTapped(PlayId),
}

/// How a check control's snapshot is produced.
#[derive(Debug, Clone, PartialEq)]
enum CheckStyle {
    Legacy(LegacyButtonStyle),
    Configured(ButtonConfiguration),
}

#[derive(Debug, Clone)]
struct CheckControl {
    id: CheckId,
    state: ControlState,
    style: CheckStyle,
}

impl CheckControl {
    fn snapshot(&self) -> StyleSnapshot {
        let interaction = self.state.interaction();
        match &self.style {
            CheckStyle::Legacy(style) => style.snapshot(interaction),
            CheckStyle::Configured(config) => configuration::render(config, interaction),
        }
    }
}

/// Play controls are display-only; their content is resolved once.
#[derive(Debug, Clone)]
struct PlayControl {
    id: PlayId,
    snapshot: StyleSnapshot,
}

/// Screen state owning all six controls. Ownership runs strictly screen →
/// controls; controls report back through [`Message`] values only.
#[derive(Debug, Clone)]
pub struct State {
    checks: [CheckControl; 3],
    plays: [PlayControl; 3],
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self {
            checks: [
                CheckControl {
                    id: CheckId::Legacy,
                    state: ControlState::new(),
                    style: CheckStyle::Legacy(catalog::legacy_check()),
                },
                CheckControl {
                    id: CheckId::Configured,
                    state: ControlState::new(),
                    style: CheckStyle::Configured(catalog::configured_check()),
                },
                CheckControl {
                    id: CheckId::Adjusted,
                    state: ControlState::new(),
                    style: CheckStyle::Configured(catalog::adjusted_check()),
                },
            ],
            plays: [
                PlayControl {
                    id: PlayId::Legacy,
                    snapshot: catalog::legacy_play().snapshot(Interaction::Normal),
                },
                PlayControl {
                    id: PlayId::Configured,
                    snapshot: configuration::render(
                        &catalog::configured_play(),
                        Interaction::Normal,
                    ),
                },
                PlayControl {
                    id: PlayId::Adjusted,
                    snapshot: configuration::render(&catalog::adjusted_play(), Interaction::Normal),
                },
            ],
        }
    }

    /// Resolved snapshot of a check control in its current interaction state.
    #[must_use]
    pub fn check_snapshot(&self, id: CheckId) -> StyleSnapshot {
        self.checks[id.index()].snapshot()
    }

    /// Resolved snapshot of a play control.
    #[must_use]
    pub fn play_snapshot(&self, id: PlayId) -> StyleSnapshot {
        self.plays[id.index()].snapshot.clone()
    }

    #[must_use]
    pub fn is_check_selected(&self, id: CheckId) -> bool {
        self.checks[id.index()].state.is_selected()
    }

    /// Background currently carried by a check control's style source.
    #[must_use]
    pub fn check_background(&self, id: CheckId) -> Option<Color> {
        self.checks[id.index()].snapshot().background
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::CheckPressed(id) => {
                self.checks[id.index()].state.press();
            }
            Message::CheckReleased(id) => {
                let control = &mut self.checks[id.index()];
                if control.state.release() {
                    // The wash sticks from the first selection on; deselecting
                    // restores only the title and glyph.
                    if let CheckStyle::Configured(config) = &mut control.style {
                        config.background = Some(catalog::SELECTED_BACKGROUND);
                    }
                }
            }
            Message::CheckCancelled(id) => {
                self.checks[id.index()].state.cancel();
            }
            Message::PlayTapped(PlayId::Legacy) => self.legacy_play_tapped(),
            Message::PlayTapped(PlayId::Configured) => self.configured_play_tapped(),
            Message::PlayTapped(PlayId::Adjusted) => self.adjusted_play_tapped(),
        }
    }

    // The play row is display-only; its tap targets are wired but do nothing.
    fn legacy_play_tapped(&mut self) {}
    fn configured_play_tapped(&mut self) {}
    fn adjusted_play_tapped(&mut self) {}

    pub fn view(&self, i18n: &I18n) -> Element<'_, Message> {
        let mut column = Column::new()
            .spacing(BUTTON_SPACING)
            .align_x(Horizontal::Center);

        for control in &self.checks {
            column = column.push(check_button(control, i18n));
        }
        for control in &self.plays {
            column = column.push(play_button(control, i18n));
        }

        Container::new(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .padding(Padding {
                top: TOP_OFFSET,
                right: 0.0,
                bottom: 0.0,
                left: 0.0,
            })
            .into()
    }
}

fn check_button(control: &CheckControl, i18n: &I18n) -> Element<'static, Message> {
    let id = control.id;
    let snapshot = control.snapshot();

    mouse_area(surface(&snapshot, i18n, CHECK_WIDTH, CHECK_HEIGHT))
        .on_press(Message::CheckPressed(id))
        .on_release(Message::CheckReleased(id))
        .on_exit(Message::CheckCancelled(id))
        .into()
}

fn play_button(control: &PlayControl, i18n: &I18n) -> Element<'static, Message> {
    mouse_area(surface(&control.snapshot, i18n, PLAY_WIDTH, PLAY_HEIGHT))
        .on_release(Message::PlayTapped(control.id))
        .into()
}

/// Shared control surface: glyph and title laid out per the snapshot, on an
/// optionally tinted background.
fn surface(
    snapshot: &StyleSnapshot,
    i18n: &I18n,
    width: f32,
    height: f32,
) -> Container<'static, Message> {
    let glyph = Image::new(glyphs::handle_for(snapshot.glyph))
        .width(sizing::GLYPH)
        .height(sizing::GLYPH);

    let label = Text::new(i18n.tr(snapshot.title))
        .size(snapshot.text.size)
        .font(Font {
            weight: snapshot.text.weight,
            ..Font::default()
        })
        .color(snapshot.foreground);

    let content = match snapshot.placement {
        ImagePlacement::Leading => Row::new().push(glyph).push(label),
        ImagePlacement::Trailing => Row::new().push(label).push(glyph),
    }
    .spacing(snapshot.image_padding)
    .align_y(Vertical::Center);

    let align_x = match snapshot.alignment {
        ContentAlignment::Leading => Horizontal::Left,
        ContentAlignment::Center => Horizontal::Center,
    };

    Container::new(content)
        .width(width)
        .height(height)
        .padding(Padding::from(snapshot.content_insets))
        .align_x(align_x)
        .align_y(Vertical::Center)
        .style(styles::control::surface(snapshot.background))
}
