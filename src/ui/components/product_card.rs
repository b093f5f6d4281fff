//! Product card on the home page
//!
//! Clicking anywhere on the card opens the product page. Hover progress
//! lifts the card and tints its border, title and footer.

use iced::widget::{Space, button, column, container, mouse_area, row, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::features::Product;
use crate::ui::theme;
use crate::ui::{icons, widgets};

/// Vertical lift at full hover
const HOVER_LIFT: f32 = 5.0;

fn product_icon(product: Product) -> &'static str {
    match product {
        Product::Mallorn => icons::HARD_DRIVE,
        Product::SkinGenie => icons::SCAN_FACE,
    }
}

/// Build a product card. `hover` is the highlight progress (0.0 to 1.0).
pub fn view(product: Product, hover: f32) -> Element<'static, Message> {
    let accent = theme::accent(product);
    let accent_text = theme::accent_text(product);

    let icon_tile = container(widgets::icon::view(
        product_icon(product),
        32.0,
        theme::mix(accent, accent_text, hover),
    ))
    .padding(12)
    .style(theme::icon_tile(accent));

    let header = row![
        icon_tile,
        Space::new().width(Fill),
        widgets::badge::view(product.platform().to_string(), accent, accent_text),
    ]
    .align_y(Alignment::Start);

    let title = text(product.name())
        .size(24)
        .font(theme::BOLD)
        .color(theme::mix(theme::TEXT_PRIMARY, accent_text, hover));

    let blurb = text(product.blurb())
        .size(14)
        .line_height(1.6)
        .color(theme::TEXT_SECONDARY);

    let footer = row![
        text(">>>").size(12).font(theme::MONO).color(accent),
        text("VIEW_MODULE")
            .size(12)
            .font(theme::MONO)
            .color(theme::mix(theme::TEXT_MUTED, theme::TEXT_PRIMARY, hover)),
    ]
    .spacing(8);

    let card = container(column![
        header,
        Space::new().height(32),
        title,
        Space::new().height(8),
        blurb,
        Space::new().height(24),
        footer,
    ])
    .padding(32)
    .width(Fill)
    .style(theme::product_card(hover));

    let lifted = container(card).padding(
        Padding::new(0.0)
            .top(HOVER_LIFT * (1.0 - hover))
            .bottom(HOVER_LIFT * hover),
    );

    let page = product.page();
    mouse_area(
        button(lifted)
            .padding(0)
            .width(Fill)
            .style(theme::bare_button)
            .on_press(Message::Navigate(page)),
    )
    .on_enter(Message::CardHovered(Some(product)))
    .on_exit(Message::CardHovered(None))
    .into()
}
