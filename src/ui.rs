//! UI module for the Lightspire showcase
//! Near-black canvas, drifting waves and violet accents
//!
//! # Architecture
//!
//! The UI is organized into three layers:
//!
//! - **Widgets** (`widgets`): Composable UI patterns without business logic
//! - **Components** (`components`): Showcase-specific UI with Message handling
//! - **Pages** (`pages`): One view per page, composed from components
//!
//! `effects` holds the canvas backdrop and `animation` the transitions.

pub mod animation;
pub mod components;
pub mod effects;
pub mod icons;
pub mod pages;
pub mod theme;
pub mod widgets;
