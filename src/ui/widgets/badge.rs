//! Small monospace pill used for tags and status lines

use iced::widget::{container, row, text};
use iced::{Alignment, Color, Element, Padding};

use crate::ui::theme;

fn pill<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    accent: Color,
) -> Element<'a, Message> {
    container(content)
        .padding(Padding::new(4.0).left(10.0).right(10.0))
        .style(theme::badge(accent))
        .into()
}

/// Badge with accent-tinted background and border
pub fn view<'a, Message: 'a>(
    label: String,
    accent: Color,
    text_color: Color,
) -> Element<'a, Message> {
    pill(text(label).size(11).font(theme::MONO).color(text_color), accent)
}

/// Badge with a marker (status dot, icon) before the label
pub fn with_leading<'a, Message: 'a>(
    leading: Element<'a, Message>,
    label: String,
    accent: Color,
    text_color: Color,
) -> Element<'a, Message> {
    pill(
        row![
            leading,
            text(label).size(11).font(theme::MONO).color(text_color)
        ]
        .spacing(6)
        .align_y(Alignment::Center),
        accent,
    )
}
