//! Clickable framed screenshot

use std::path::PathBuf;

use iced::mouse::Interaction;
use iced::widget::{container, image, mouse_area};
use iced::{Color, ContentFit, Element, Fill};

use crate::ui::theme;

/// Framed screenshot that emits `on_press` when clicked.
/// A missing file leaves the frame empty.
pub fn view<'a, Message: Clone + 'a>(
    path: PathBuf,
    accent: Color,
    on_press: Message,
) -> Element<'a, Message> {
    let picture = image(image::Handle::from_path(path))
        .width(Fill)
        .content_fit(ContentFit::Contain);

    mouse_area(
        container(picture)
            .padding(8)
            .width(Fill)
            .style(theme::screenshot_frame(accent)),
    )
    .interaction(Interaction::Pointer)
    .on_press(on_press)
    .into()
}
