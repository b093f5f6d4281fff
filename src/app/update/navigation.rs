// src/app/update/navigation.rs
//! Navigation message handlers

use iced::Task;

use crate::app::PAGE_SCROLL;
use crate::app::message::Message;
use crate::app::state::App;
use crate::features::Page;

impl App {
    /// Handle navigation messages
    pub fn handle_navigation(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::Navigate(page) => Some(self.navigate(*page)),
            _ => None,
        }
    }

    /// Switch pages. Page-scoped state (lightbox, hover, fade, gallery on the
    /// Mallorn page) starts over and the headline scrambles to the new title.
    pub(crate) fn navigate(&mut self, page: Page) -> Task<Message> {
        tracing::info!("Navigate {:?} -> {:?}", self.ui.page, page);

        self.ui.page = page;
        self.ui.lightbox.close();
        self.ui.card_hover.clear();
        if page == Page::Mallorn {
            self.ui.gallery.reset();
        }

        let reduced_motion = self.core.reduced_motion();
        self.ui.fade.reset();
        if reduced_motion {
            self.ui.fade.mount(true);
        }

        self.ui.title.set_target(page.headline());
        if reduced_motion {
            self.ui.title.finish();
        }

        iced::widget::operation::snap_to(
            iced::widget::Id::new(PAGE_SCROLL),
            iced::widget::scrollable::RelativeOffset { x: 0.0, y: 0.0 },
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::app::{App, Message};
    use crate::features::{MallornTheme, Page, Screenshot};

    fn app() -> App {
        App::default()
    }

    #[test]
    fn last_navigation_wins() {
        let mut app = app();
        let sequence = [
            Page::Mallorn,
            Page::Home,
            Page::SkinGenie,
            Page::SkinGenie,
            Page::Mallorn,
        ];
        for page in sequence {
            let _ = app.update(Message::Navigate(page));
            assert_eq!(app.ui.page, page);
        }
    }

    #[test]
    fn every_navigation_resets_the_scroll() {
        let mut app = app();
        for page in [Page::Mallorn, Page::Mallorn, Page::Home, Page::SkinGenie] {
            let task = app.update(Message::Navigate(page));
            assert!(task.units() > 0, "navigating to {page:?} left the scroll alone");
        }
    }

    #[test]
    fn navigation_retargets_the_headline() {
        let mut app = app();
        let _ = app.update(Message::Navigate(Page::SkinGenie));
        assert!(app.ui.title.is_running());
        assert_eq!(app.ui.title.target(), Page::SkinGenie.headline());
        assert_eq!(app.title(), "Lightspire - SkinGenie");
    }

    #[test]
    fn navigation_restarts_the_fade() {
        let mut app = app();
        app.ui.fade.mount(true);
        let _ = app.update(Message::Navigate(Page::Mallorn));
        assert!(!app.ui.fade.is_mounted());
        assert_eq!(app.ui.fade.progress(), 0.0);
    }

    #[test]
    fn navigation_closes_the_lightbox() {
        let mut app = app();
        let _ = app.update(Message::Navigate(Page::Mallorn));
        let _ = app.update(Message::OpenLightbox(Screenshot::Mallorn(
            MallornTheme::Obsidian,
        )));
        assert!(app.ui.lightbox.is_open());

        let _ = app.update(Message::Navigate(Page::Home));
        assert!(!app.ui.lightbox.is_open());
    }

    #[test]
    fn returning_to_mallorn_resets_gallery() {
        let mut app = app();
        let _ = app.update(Message::Navigate(Page::Mallorn));
        let _ = app.update(Message::SelectTheme(MallornTheme::Paper));
        assert_eq!(app.ui.gallery.selected(), MallornTheme::Paper);

        let _ = app.update(Message::Navigate(Page::SkinGenie));
        let _ = app.update(Message::Navigate(Page::Mallorn));
        assert_eq!(app.ui.gallery.selected(), MallornTheme::default());
        assert!(app.ui.gallery.is_active(MallornTheme::default()));
    }
}
