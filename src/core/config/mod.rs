//! Application configuration management
//!
//! This module handles all configuration aspects:
//! - CLI arguments parsing
//! - User configuration files

pub mod cli;
pub mod user_config;

// Simple, clear re-exports
pub use cli::{CliArgs, OutputFormat, Settings};
pub use user_config::ConfigFile;
