//! "Support Indie Development" banner at the bottom of product pages

use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Fill};

use crate::app::Message;
use crate::features::Link;
use crate::ui::theme;
use crate::ui::{icons, widgets};

const BANNER_WIDTH: f32 = 576.0;

pub fn view() -> Element<'static, Message> {
    let donate = button(
        row![
            widgets::icon::view(icons::COFFEE, 18.0, theme::GREEN),
            text(Link::Donate.label()).size(15).font(theme::BOLD),
        ]
        .spacing(8)
        .align_y(Alignment::Center),
    )
    .padding(4)
    .style(theme::donate_link)
    .on_press(Message::OpenLink(Link::Donate));

    let content = column![
        text("Support Indie Development")
            .size(18)
            .font(theme::BOLD)
            .color(theme::TEXT_PRIMARY),
        text("Both apps are free to use. If they help you, consider supporting future updates.")
            .size(14)
            .color(theme::TEXT_SECONDARY)
            .align_x(iced::alignment::Horizontal::Center),
        donate,
    ]
    .spacing(10)
    .align_x(Alignment::Center);

    container(
        container(content)
            .padding(24)
            .max_width(BANNER_WIDTH)
            .width(Fill)
            .style(theme::donation_banner),
    )
    .center_x(Fill)
    .into()
}
