//! Bolden
pub mod core;
pub mod font_source;
pub mod geometry;
pub mod logging;
pub mod outline;
pub mod rendering;
