//! Tinted SVG icon

use iced::widget::svg;
use iced::{Color, Element};

pub fn view<'a, Message: 'a>(source: &'static str, size: f32, color: Color) -> Element<'a, Message> {
    svg(svg::Handle::from_memory(source.as_bytes()))
        .width(size)
        .height(size)
        .style(move |_theme, _status| svg::Style { color: Some(color) })
        .into()
}
