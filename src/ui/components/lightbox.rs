//! Full-window screenshot overlay
//!
//! Clicking the backdrop closes the overlay. Clicks on the image itself are
//! swallowed with `Message::Noop` so they never reach the backdrop.

use std::path::Path;

use iced::widget::{Space, container, image, mouse_area, opaque, stack};
use iced::{ContentFit, Element, Fill};

use crate::app::Message;
use crate::features::Screenshot;
use crate::ui::theme;

const LIGHTBOX_MARGIN: u16 = 48;

/// Build the overlay, or an empty element when nothing is open
pub fn view<'a>(open: Option<Screenshot>, assets_dir: &Path) -> Element<'a, Message> {
    let Some(shot) = open else {
        return Space::new().width(0).height(0).into();
    };

    overlay(image::Handle::from_path(shot.path(assets_dir)))
}

/// Backdrop and centered picture for an open screenshot
fn overlay<'a>(picture: image::Handle) -> Element<'a, Message> {
    let picture = mouse_area(image(picture).content_fit(ContentFit::Contain)).on_press(Message::Noop);

    let backdrop = mouse_area(
        container(Space::new().width(Fill).height(Fill))
            .width(Fill)
            .height(Fill)
            .style(theme::lightbox_backdrop),
    )
    .on_press(Message::CloseLightbox);

    let centered = container(picture)
        .center_x(Fill)
        .center_y(Fill)
        .padding(LIGHTBOX_MARGIN);

    // opaque keeps clicks and hovers from reaching the page underneath
    opaque(stack![backdrop, centered].width(Fill).height(Fill)).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::{Event, Point, mouse};

    fn click(ui: &mut iced_test::Simulator<'_, Message>, position: Point) {
        ui.point_at(position);
        let _ = ui.simulate([
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)),
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)),
        ]);
    }

    #[test]
    fn closed_lightbox_draws_nothing() {
        let mut ui = iced_test::simulator(view(None, Path::new("assets")));
        click(&mut ui, Point::new(512.0, 384.0));
        assert_eq!(ui.into_messages().count(), 0);
    }

    #[test]
    fn image_swallows_clicks_and_backdrop_closes() {
        // 200x100 picture centered in the default 1024x768 viewport
        let picture = image::Handle::from_rgba(200, 100, vec![255; 200 * 100 * 4]);
        let mut ui = iced_test::simulator(overlay(picture));

        click(&mut ui, Point::new(512.0, 384.0));
        click(&mut ui, Point::new(10.0, 10.0));

        let messages: Vec<Message> = ui.into_messages().collect();
        assert!(
            matches!(messages.as_slice(), [Message::Noop, Message::CloseLightbox]),
            "unexpected messages: {messages:?}"
        );
    }
}
