//! Feature modules - showcase logic separated from UI
//!
//! Each feature module holds the state and rules for one piece of the
//! showcase. Features do not depend on UI components.

pub mod gallery;
pub mod lightbox;
pub mod scramble;
pub mod settings;
pub mod showcase;

pub use gallery::{MallornTheme, ThemeGallery};
pub use lightbox::Lightbox;
pub use scramble::ScrambleText;
pub use settings::Settings;
pub use showcase::{Link, Page, Product, Screenshot};
