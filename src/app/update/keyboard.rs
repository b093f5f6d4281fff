// src/app/update/keyboard.rs
//! Keyboard shortcut handlers

use iced::Task;
use iced::keyboard::Key;
use iced::keyboard::key::Named;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::Page;

impl App {
    /// Handle keyboard-related messages
    pub fn handle_keyboard(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::KeyPressed(Key::Named(Named::Escape), _) if self.ui.lightbox.is_open() => {
                self.ui.lightbox.close();
                tracing::debug!("Lightbox closed from keyboard");
                Some(Task::none())
            }

            // Backspace acts as the back button on product pages
            Message::KeyPressed(Key::Named(Named::Backspace), modifiers)
                if modifiers.is_empty() && self.ui.page != Page::Home =>
            {
                Some(self.navigate(Page::Home))
            }

            Message::KeyPressed(..) => Some(Task::none()),

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use iced::keyboard::key::Named;
    use iced::keyboard::{Key, Modifiers};

    use crate::app::{App, Message};
    use crate::features::{Page, Screenshot};

    fn press(app: &mut App, named: Named) {
        let _ = app.update(Message::KeyPressed(Key::Named(named), Modifiers::empty()));
    }

    #[test]
    fn escape_closes_lightbox() {
        let mut app = App::default();
        let _ = app.update(Message::Navigate(Page::SkinGenie));
        let _ = app.update(Message::OpenLightbox(Screenshot::SkinGenieHero));
        press(&mut app, Named::Escape);
        assert!(!app.ui.lightbox.is_open());
        assert_eq!(app.ui.page, Page::SkinGenie);
    }

    #[test]
    fn escape_without_lightbox_keeps_page() {
        let mut app = App::default();
        let _ = app.update(Message::Navigate(Page::Mallorn));
        press(&mut app, Named::Escape);
        assert_eq!(app.ui.page, Page::Mallorn);
        assert!(!app.ui.lightbox.is_open());
    }

    #[test]
    fn backspace_goes_home() {
        let mut app = App::default();
        let _ = app.update(Message::Navigate(Page::Mallorn));
        press(&mut app, Named::Backspace);
        assert_eq!(app.ui.page, Page::Home);
    }

    #[test]
    fn backspace_with_modifiers_is_ignored() {
        let mut app = App::default();
        let _ = app.update(Message::Navigate(Page::Mallorn));
        let _ = app.update(Message::KeyPressed(
            Key::Named(Named::Backspace),
            Modifiers::CTRL,
        ));
        assert_eq!(app.ui.page, Page::Mallorn);
    }
}
