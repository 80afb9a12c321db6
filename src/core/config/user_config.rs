//! User configuration file handling
//!
//! Manages settings from ~/.config/bolden/settings.json

use crate::logging;
use crate::outline::SeamJoin;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// User configuration from ~/.config/bolden/settings.json
///
/// These settings override built-in defaults but are overridden by CLI arguments
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ConfigFile {
    /// UFO font source used when --font is not given
    pub font: Option<PathBuf>,
    /// Text rendered when --text is not given
    pub text: Option<String>,
    pub boldness: Option<f64>,
    pub sampling: Option<f64>,
    pub font_size: Option<f64>,
    pub baseline: Option<f64>,
    pub seam_join: Option<SeamJoin>,
    /// SVG fill colour for solid outlines
    pub fill: Option<String>,
}

impl ConfigFile {
    /// Get the path to the user config file
    pub fn config_path() -> PathBuf {
        logging::config_dir().join("settings.json")
    }

    /// Load configuration from the user config file
    pub fn load() -> Option<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }

        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    debug!("Loaded user settings from {:?}", path);
                    Some(config)
                }
                Err(e) => {
                    warn!("Failed to parse settings.json: {}", e);
                    None
                }
            },
            Err(e) => {
                warn!("Failed to read settings.json: {}", e);
                None
            }
        }
    }

    /// Save configuration to the user config file
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;

        debug!("Saved settings to {:?}", path);
        Ok(())
    }

    /// Settings written by --new-config
    pub fn example() -> Self {
        Self {
            font: None,
            text: Some("Hello".to_string()),
            boldness: Some(1.0),
            sampling: Some(1.0),
            font_size: Some(72.0),
            baseline: Some(100.0),
            seam_join: Some(SeamJoin::FirstEdge),
            fill: Some("black".to_string()),
        }
    }

    /// Initialize the user configuration directory
    ///
    /// This creates:
    /// 1. The ~/.config/bolden directory structure
    /// 2. A settings.json file with default values
    /// 3. A logs/ directory for application logs
    pub fn initialize_config_directory() -> anyhow::Result<()> {
        let config_dir = logging::config_dir();

        // Create the main config directory
        fs::create_dir_all(&config_dir)?;
        println!("Created config directory: {:?}", config_dir);

        logging::initialize_logs_directory()?;
        println!("Created logs directory: {:?}", logging::logs_dir());

        // Create settings.json
        let settings_path = Self::config_path();
        if !settings_path.exists() {
            Self::example().save()?;
            println!("Created settings file: {:?}", settings_path);
        } else {
            println!("Settings file already exists: {:?}", settings_path);
        }

        println!("\nConfiguration initialized successfully!");
        println!("You can now:");
        println!("  - Edit settings at: {:?}", settings_path);
        println!("  - View application logs in: {:?}", logging::logs_dir());

        Ok(())
    }
}
