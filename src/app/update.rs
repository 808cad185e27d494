// SPDX-License-Identifier: MPL-2.0
//! Update logic for the application.

use super::{App, Message};
use iced::Task;

impl App {
    pub(crate) fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Gallery(message) => {
                self.gallery.update(message);
                Task::none()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::gallery::{self, CheckId};

    #[test]
    fn gallery_messages_reach_the_screen() {
        let mut app = App::default();
        let _ = app.update(Message::Gallery(gallery::Message::CheckPressed(
            CheckId::Legacy,
        )));
        let _ = app.update(Message::Gallery(gallery::Message::CheckReleased(
            CheckId::Legacy,
        )));
        assert!(app.gallery.is_check_selected(CheckId::Legacy));
    }
}
