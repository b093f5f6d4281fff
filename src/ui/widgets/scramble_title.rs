//! Large headline rendering the current scramble frame

use iced::widget::{container, text};
use iced::{Element, Fill, Padding};

use crate::ui::theme;

/// Headline for `frame`. `reveal` (0.0 to 1.0) fades the text in with the page.
pub fn view<'a, Message: 'a>(frame: &'a str, size: f32, reveal: f32) -> Element<'a, Message> {
    container(
        text(frame)
            .size(size)
            .font(theme::HEAVY)
            .color(theme::with_alpha(theme::TEXT_PRIMARY, reveal))
            .wrapping(text::Wrapping::Word),
    )
    .width(Fill)
    .padding(Padding::new(0.0).bottom(16.0))
    .into()
}
