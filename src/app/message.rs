//! Application messages

use iced::Size;
use iced::keyboard::{Key, Modifiers};

use crate::features::{Link, MallornTheme, Page, Product, Screenshot};

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    /// No-op message for event interception (lightbox image clicks)
    Noop,

    // ============ Navigation ============
    /// Switch to a page
    Navigate(Page),

    // ============ Showcase ============
    /// Cursor entered a product card (`None` when it left)
    CardHovered(Option<Product>),
    /// Theme thumbnail clicked
    SelectTheme(MallornTheme),
    /// Screenshot clicked
    OpenLightbox(Screenshot),
    /// Lightbox backdrop clicked
    CloseLightbox,
    /// Outbound link clicked
    OpenLink(Link),
    /// System opener finished
    LinkOpened(Link, Result<(), String>),

    // ============ Animation ============
    /// Window frame (waves, page fade, card hover)
    AnimationTick,
    /// Scramble timer fired
    ScrambleTick,

    // ============ Window ============
    WindowResized(Size),
    KeyPressed(Key, Modifiers),
    /// Window close button pressed
    RequestClose,
}
