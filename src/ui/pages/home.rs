//! Home page - hero with scramble title and the product cards

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Fill};

use crate::app::Message;
use crate::features::{Page, Product};
use crate::ui::animation::CardHover;
use crate::ui::components;
use crate::ui::theme;
use crate::ui::{icons, widgets};

const HERO_WIDTH: f32 = 896.0;

const SUBTITLE: &str =
    "Open source utilities, privacy-focused apps, and AI-driven insights. Built for the modern age.";

/// Build the home page. `title` is the current scramble frame, `reveal`
/// the page fade progress and `ping` the status dot phase.
pub fn view<'a>(
    title: &'a str,
    reveal: f32,
    ping: f32,
    card_hover: &CardHover,
) -> Element<'a, Message> {
    let status = widgets::badge::with_leading(
        widgets::ping_dot::view(theme::PRIMARY, ping),
        "SYSTEM_ONLINE".to_string(),
        theme::PRIMARY,
        theme::with_alpha(theme::VIOLET_LIGHT, reveal),
    );

    let cta = button(
        row![
            text("View Latest Project").size(16).font(theme::BOLD),
            widgets::icon::view(icons::ARROW_RIGHT, 18.0, theme::TEXT_PRIMARY),
        ]
        .spacing(8)
        .align_y(Alignment::Center),
    )
    .padding([14, 28])
    .style(theme::primary_button)
    .on_press(Message::Navigate(Page::Mallorn));

    let hero = column![
        status,
        Space::new().height(24),
        widgets::scramble_title::view(title, 64.0, reveal),
        text(SUBTITLE)
            .size(20)
            .line_height(1.6)
            .color(theme::with_alpha(theme::TEXT_SECONDARY, reveal)),
        Space::new().height(32),
        cta,
    ]
    .max_width(HERO_WIDTH);

    let cards = row(Product::ALL.into_iter().map(|product| {
        components::product_card::view(product, card_hover.progress(product))
    }))
    .spacing(24);

    container(
        column![
            hero,
            Space::new().height(80),
            cards,
        ]
        .width(Fill),
    )
    .width(Fill)
    .into()
}
