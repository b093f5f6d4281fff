//! Widgets module - reusable UI building blocks
//!
//! Widgets are generic over the message type and carry no showcase state.
//! Components compose them into application-specific views.

pub mod badge;
pub mod icon;
pub mod ping_dot;
pub mod scramble_title;
pub mod screenshot;
