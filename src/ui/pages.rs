//! Pages module - one view per `Page`

pub mod home;
pub mod product;
