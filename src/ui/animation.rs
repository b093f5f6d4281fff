//! Animation state for the showcase
//!
//! Transitions are driven by `iced_anim` and advanced from the frame
//! subscription in `App::update`.

mod fade;
mod hover;

pub use fade::PageFade;
pub use hover::CardHover;
