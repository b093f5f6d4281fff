// src/app/update/showcase.rs
//! Gallery, lightbox, card hover and outbound link handlers

use iced::Task;

use crate::app::helpers::open_url;
use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle showcase interaction messages
    pub fn handle_showcase(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::CardHovered(product) => {
                self.ui.card_hover.set_hovered(*product);
                Some(Task::none())
            }

            Message::SelectTheme(theme) => {
                tracing::debug!("Theme selected: {}", theme);
                self.ui.gallery.select(*theme);
                Some(Task::none())
            }

            Message::OpenLightbox(shot) => {
                if self.ui.page.renders(*shot) {
                    self.ui.lightbox.open(*shot);
                } else {
                    tracing::warn!("Ignoring lightbox for {:?} on {:?}", shot, self.ui.page);
                }
                Some(Task::none())
            }

            Message::CloseLightbox => {
                self.ui.lightbox.close();
                Some(Task::none())
            }

            Message::OpenLink(link) => {
                let link = *link;
                let url = link.url(&self.core.settings.links).to_string();
                Some(Task::perform(open_url(url), move |result| {
                    Message::LinkOpened(link, result.map_err(|e| e.to_string()))
                }))
            }

            Message::LinkOpened(link, result) => {
                match result {
                    Ok(()) => tracing::debug!("Opened {:?}", link),
                    Err(e) => tracing::error!("Failed to open {:?}: {}", link, e),
                }
                Some(Task::none())
            }

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::app::{App, Message};
    use crate::features::{MallornTheme, Page, Product, Screenshot};

    fn on_mallorn() -> App {
        let mut app = App::default();
        let _ = app.update(Message::Navigate(Page::Mallorn));
        app
    }

    #[test]
    fn selecting_marks_exactly_one_thumbnail() {
        let mut app = on_mallorn();
        let _ = app.update(Message::SelectTheme(MallornTheme::Aurora));

        let active: Vec<_> = MallornTheme::ALL
            .into_iter()
            .filter(|theme| app.ui.gallery.is_active(*theme))
            .collect();
        assert_eq!(active, vec![MallornTheme::Aurora]);
    }

    #[test]
    fn second_open_replaces_first() {
        let mut app = on_mallorn();
        let a = Screenshot::Mallorn(MallornTheme::Mallorn);
        let b = Screenshot::Mallorn(MallornTheme::Obsidian);
        let _ = app.update(Message::OpenLightbox(a));
        let _ = app.update(Message::OpenLightbox(b));
        assert_eq!(app.ui.lightbox.current(), Some(b));
    }

    #[test]
    fn close_after_open_leaves_nothing_open() {
        let mut app = on_mallorn();
        let _ = app.update(Message::OpenLightbox(Screenshot::Mallorn(
            MallornTheme::Paper,
        )));
        let _ = app.update(Message::CloseLightbox);
        assert!(!app.ui.lightbox.is_open());
    }

    #[test]
    fn screenshots_from_other_pages_are_ignored() {
        let mut app = on_mallorn();
        let _ = app.update(Message::OpenLightbox(Screenshot::SkinGenieHero));
        assert!(!app.ui.lightbox.is_open());
    }

    #[test]
    fn hover_tracks_one_card() {
        let mut app = App::default();
        let _ = app.update(Message::CardHovered(Some(Product::Mallorn)));
        let _ = app.update(Message::CardHovered(Some(Product::SkinGenie)));
        assert_eq!(app.ui.card_hover.hovered(), Some(Product::SkinGenie));
    }
}
