//! Page footer

use iced::widget::{Space, column, container, text};
use iced::{Element, Fill, Padding};

use crate::app::Message;
use crate::ui::theme;

pub fn view() -> Element<'static, Message> {
    column![
        container(Space::new().width(Fill).height(1)).style(theme::footer_rule),
        container(text("© 2026 LIGHTSPIRE.GG").size(14).color(theme::TEXT_MUTED))
            .padding(Padding::new(48.0).left(0.0).right(0.0)),
    ]
    .width(Fill)
    .into()
}
