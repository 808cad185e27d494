// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::{App, Message};
use iced::Element;

impl App {
    pub(crate) fn view(&self) -> Element<'_, Message> {
        self.gallery.view(&self.i18n).map(Message::Gallery)
    }
}
