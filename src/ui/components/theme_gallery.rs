//! Mallorn theme picker shown under the hero screenshot

use std::path::Path;

use iced::widget::{button, column, image, row, text};
use iced::{Alignment, ContentFit, Element, Fill};

use crate::app::Message;
use crate::features::{MallornTheme, Screenshot, ThemeGallery};
use crate::ui::theme;

const THUMBNAIL_HEIGHT: f32 = 72.0;

/// Row of theme thumbnails; exactly one is marked active
pub fn view<'a>(gallery: &ThemeGallery, assets_dir: &Path) -> Element<'a, Message> {
    let thumbnails = MallornTheme::ALL.into_iter().map(|choice| -> Element<'a, Message> {
        let preview = image(image::Handle::from_path(
            Screenshot::Mallorn(choice).path(assets_dir),
        ))
        .width(Fill)
        .height(THUMBNAIL_HEIGHT)
        .content_fit(ContentFit::Cover);

        button(
            column![preview, text(choice.display_name()).size(12).font(theme::MONO)]
                .spacing(6)
                .align_x(Alignment::Center),
        )
        .padding(6)
        .width(Fill)
        .style(theme::thumbnail(gallery.is_active(choice)))
        .on_press(Message::SelectTheme(choice))
        .into()
    });

    column![
        text("THEMES")
            .size(11)
            .font(theme::MONO)
            .color(theme::TEXT_MUTED),
        row(thumbnails).spacing(12),
    ]
    .spacing(10)
    .into()
}
