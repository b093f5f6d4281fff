// src/app/view.rs
//! Application view rendering

use iced::widget::{Id, column, container, scrollable, stack};
use iced::{Element, Fill, Padding};

use super::message::Message;
use super::{App, PAGE_SCROLL};
use crate::ui::effects::waves;
use crate::ui::pages::product::ProductPageData;
use crate::ui::{components, pages, theme, widgets};

const CONTENT_WIDTH: f32 = 1152.0;

/// Distance the page slides up while fading in
const FADE_OFFSET: f32 = 20.0;

impl App {
    /// Build the window: wave backdrop, scrolling page, nav pill, lightbox
    pub fn view(&self) -> Element<'_, Message> {
        let reveal = self.ui.fade.progress();
        let assets_dir = self.core.settings.assets_dir.as_path();

        // Exactly one page is built per frame
        let page = match self.ui.page.product() {
            None => pages::home::view(
                self.ui.title.display(),
                reveal,
                widgets::ping_dot::phase(self.ui.background.frame()),
                &self.ui.card_hover,
            ),
            Some(product) => pages::product::view(ProductPageData {
                product,
                headline: self.ui.title.display(),
                reveal,
                gallery: &self.ui.gallery,
                assets_dir,
            }),
        };

        let slide = FADE_OFFSET * (1.0 - reveal);
        let body = column![
            container(page)
                .max_width(CONTENT_WIDTH)
                .padding(Padding::new(24.0).top(128.0 + slide).bottom(96.0 - slide)),
            container(components::footer::view())
                .max_width(CONTENT_WIDTH)
                .padding(Padding::new(24.0).top(0.0).bottom(0.0)),
        ]
        .width(Fill)
        .align_x(iced::Alignment::Center);

        let content = scrollable(body)
            .width(Fill)
            .height(Fill)
            .id(Id::new(PAGE_SCROLL))
            .style(theme::page_scrollable);

        let layers = stack![
            waves::view(&self.ui.background),
            content,
            components::nav_bar::view(),
            components::lightbox::view(self.ui.lightbox.current(), assets_dir),
        ]
        .width(Fill)
        .height(Fill);

        container(layers)
            .width(Fill)
            .height(Fill)
            .style(theme::app_background)
            .into()
    }
}
