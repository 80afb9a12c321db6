//! Geometric Primitives and Operations

pub mod utilities;

// Re-export commonly used items
pub use utilities::{cross, distance, lerp};
