//! Product detail page
//!
//! Both products share this layout: text column beside the hero screenshot,
//! then (Mallorn only) the theme gallery, then the donation banner.

use std::path::Path;

use iced::widget::{Space, button, column, row, text};
use iced::{Alignment, Element, Fill};

use crate::app::Message;
use crate::features::{Link, Page, Product, ThemeGallery};
use crate::ui::components;
use crate::ui::theme;
use crate::ui::{icons, widgets};

/// Everything a detail page reads from app state
pub struct ProductPageData<'a> {
    pub product: Product,
    /// Current scramble frame of the headline
    pub headline: &'a str,
    /// Page fade progress (0.0 to 1.0)
    pub reveal: f32,
    pub gallery: &'a ThemeGallery,
    pub assets_dir: &'a Path,
}

fn feature_list<'a>(product: Product, reveal: f32) -> Element<'a, Message> {
    let accent_text = theme::accent_text(product);
    column(product.features().into_iter().map(|feature| -> Element<'a, Message> {
        row![
            widgets::icon::view(icons::CHECK_CIRCLE, 20.0, accent_text),
            text(feature)
                .size(16)
                .color(theme::with_alpha(theme::TEXT_BODY, reveal)),
        ]
        .spacing(12)
        .align_y(Alignment::Center)
        .into()
    }))
    .spacing(16)
    .into()
}

fn link_button<'a>(link: Link, icon: &'static str, primary: bool) -> Element<'a, Message> {
    let content = row![
        widgets::icon::view(icon, 18.0, theme::TEXT_PRIMARY),
        text(link.label()).size(16).font(theme::BOLD),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let style = if primary {
        theme::primary_button
    } else {
        theme::outline_button
    };

    button(content)
        .padding([14, 24])
        .style(style)
        .on_press(Message::OpenLink(link))
        .into()
}

fn primary_icon(product: Product) -> &'static str {
    match product {
        Product::Mallorn => icons::MONITOR,
        Product::SkinGenie => icons::PLAY,
    }
}

pub fn view<'a>(data: ProductPageData<'a>) -> Element<'a, Message> {
    let ProductPageData {
        product,
        headline,
        reveal,
        gallery,
        assets_dir,
    } = data;
    let accent = theme::accent(product);

    let back = button(
        row![
            widgets::icon::view(icons::ARROW_LEFT, 16.0, theme::TEXT_SECONDARY),
            text("BACK_TO_ROOT").size(13).font(theme::MONO),
        ]
        .spacing(8)
        .align_y(Alignment::Center),
    )
    .padding([8, 14])
    .style(theme::ghost_button)
    .on_press(Message::Navigate(Page::Home));

    let mut actions = row![link_button(
        product.primary_link(),
        primary_icon(product),
        true
    )]
    .spacing(16);
    if let Some(source) = product.source_link() {
        actions = actions.push(link_button(source, icons::GITHUB, false));
    }

    let details = column![
        widgets::badge::view(
            format!("MODULE: {}", product.module_tag()),
            accent,
            theme::accent_text(product),
        ),
        Space::new().height(24),
        widgets::scramble_title::view(headline, 48.0, reveal),
        text(product.summary())
            .size(18)
            .line_height(1.6)
            .color(theme::with_alpha(theme::TEXT_SECONDARY, reveal)),
        Space::new().height(32),
        feature_list(product, reveal),
        Space::new().height(40),
        actions,
    ]
    .width(Fill);

    let hero = product.hero(gallery.selected());
    let mut showcase = column![
        widgets::screenshot::view(hero.path(assets_dir), accent, Message::OpenLightbox(hero)),
        row![
            widgets::icon::view(icons::EXPAND, 14.0, theme::TEXT_MUTED),
            text("Click to enlarge")
                .size(12)
                .font(theme::MONO)
                .color(theme::TEXT_MUTED),
        ]
        .spacing(6)
        .align_y(Alignment::Center),
    ]
    .spacing(12)
    .width(Fill);
    if product == Product::Mallorn {
        showcase = showcase.push(components::theme_gallery::view(gallery, assets_dir));
    }

    column![
        back,
        Space::new().height(32),
        row![details, showcase].spacing(48),
        Space::new().height(96),
        components::donation_banner::view(),
    ]
    .width(Fill)
    .into()
}
