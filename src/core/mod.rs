//! Core application functionality
//!
//! This module contains the core application logic, including:
//! - Settings and CLI handling
//! - Error types
//! - Platform glue and the application runner

pub mod config;
pub mod errors;
pub mod platform;
pub mod runner;

// Re-export commonly used items
pub use config::{CliArgs, ConfigFile};
pub use errors::RenderError;
pub use runner::run_app;
