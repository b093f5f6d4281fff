//! Canvas effects
//!
//! - Animated sine-wave backdrop drawn behind every page

pub mod waves;
