//! UI Components module - showcase-specific composite components
//!
//! Components combine widgets with application logic. They are the only
//! layer besides pages that imports from `crate::app`.

pub mod donation_banner;
pub mod footer;
pub mod lightbox;
pub mod nav_bar;
pub mod product_card;
pub mod theme_gallery;
