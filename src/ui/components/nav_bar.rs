//! Floating navigation pill
//! Logo (back to home) and the author's GitHub profile

use iced::widget::{Space, button, container, row, text};
use iced::{Alignment, Color, Element, Fill, Padding};

use crate::app::Message;
use crate::features::{Link, Page};
use crate::ui::theme;
use crate::ui::{icons, widgets};

const LOGO_SIZE: f32 = 32.0;

/// Build the navigation bar
pub fn view() -> Element<'static, Message> {
    let logo_tile = container(widgets::icon::view(icons::CPU, 18.0, Color::WHITE))
        .center_x(LOGO_SIZE)
        .center_y(LOGO_SIZE)
        .style(theme::logo_tile);

    let wordmark = row![
        text("LIGHT").size(18).font(theme::BOLD).color(theme::TEXT_PRIMARY),
        text("SPIRE")
            .size(18)
            .font(theme::BOLD)
            .color(theme::VIOLET_LIGHT),
    ];

    let logo = button(row![logo_tile, wordmark].spacing(8).align_y(Alignment::Center))
        .padding(0)
        .style(theme::bare_button)
        .on_press(Message::Navigate(Page::Home));

    let divider = container(Space::new().width(1).height(16)).style(theme::nav_divider);

    let github = button(widgets::icon::view(icons::GITHUB, 18.0, theme::TEXT_SECONDARY))
        .padding(8)
        .style(theme::ghost_button)
        .on_press(Message::OpenLink(Link::AuthorProfile));

    let pill = container(
        row![logo, divider, github]
            .spacing(24)
            .align_y(Alignment::Center),
    )
    .padding([12, 24])
    .style(theme::nav_pill);

    container(pill)
        .center_x(Fill)
        .padding(Padding::new(24.0).bottom(0.0))
        .into()
}
