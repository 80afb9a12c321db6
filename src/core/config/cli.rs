//! Command line interface for bolden
//!
//! Handles parsing command line arguments, validating them, and merging
//! them with the user settings file into the values a render pass uses.

use super::user_config::ConfigFile;
use crate::font_source::is_compiled_font;
use crate::outline::SeamJoin;
use crate::rendering::pipeline::{
    RenderParams, DEFAULT_BASELINE, DEFAULT_BOLDNESS, DEFAULT_FONT_SIZE, DEFAULT_SAMPLING,
};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::debug;

/// Text rendered when neither the CLI nor the settings file give any
pub const DEFAULT_TEXT: &str = "Hello";

/// Output document format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// SVG image with holes composited as masks
    #[default]
    Svg,
    /// Recorded fills as JSON
    Json,
}

/// bolden CLI arguments
///
/// Examples:
///   bolden --font Roboto-Regular.ttf --text "O" --boldness 2
///   bolden --font MyFont.ufo --boldness -1 --output thin.svg
///   bolden --font MyFont.ufo --sampling 4 --format json
///   bolden --new-config
#[derive(Parser, Debug, Clone, Default)]
#[clap(
    name = "bolden",
    version,
    about = "Artificially embolden glyph outlines",
    long_about = "bolden flattens the glyph outlines of a UFO font source or a TrueType/OpenType font, classifies solid contours and holes, and offsets every contour along its vertex normals to make the text heavier or lighter."
)]
pub struct CliArgs {
    /// Path to a UFO font source or compiled font file
    #[clap(
        long = "font",
        short = 'f',
        help = "UFO source or .ttf/.otf font to render",
        long_help = "Path to a UFO (Unified Font Object) directory or a compiled .ttf/.otf/.ttc font file. Falls back to the `font` entry of ~/.config/bolden/settings.json."
    )]
    pub font: Option<PathBuf>,

    /// Text to render
    #[clap(long = "text", short = 't', help = "Text to render")]
    pub text: Option<String>,

    /// Offset distance along vertex normals
    #[clap(
        long = "boldness",
        short = 'b',
        allow_negative_numbers = true,
        help = "Offset distance; negative values thin the glyphs"
    )]
    pub boldness: Option<f64>,

    /// Sampling resolution used to merge nearby vertices
    #[clap(
        long = "sampling",
        short = 's',
        help = "Grid size for merging nearby vertices (must be > 0)",
        long_help = "Grid size used to merge nearby vertices before offsetting. Larger values merge more aggressively; a contour that collapses to a single cell is skipped."
    )]
    pub sampling: Option<f64>,

    /// Font size in output units
    #[clap(long = "size", help = "Font size in output units per em")]
    pub font_size: Option<f64>,

    /// Baseline position on the output canvas
    #[clap(
        long = "baseline",
        allow_negative_numbers = true,
        help = "Vertical baseline position on the output canvas"
    )]
    pub baseline: Option<f64>,

    /// Use a true miter at the first vertex of each contour
    #[clap(
        long = "seam-miter",
        help = "Miter the seam vertex instead of reusing the first edge normal"
    )]
    pub seam_miter: bool,

    /// Output format
    #[clap(long = "format", value_enum, default_value_t = OutputFormat::Svg)]
    pub format: OutputFormat,

    /// Output file, stdout when omitted
    #[clap(long = "output", short = 'o', help = "Output file (default: stdout)")]
    pub output: Option<PathBuf>,

    /// Initialize user configuration directory with default settings
    #[clap(
        long = "new-config",
        help = "Initialize user config directory with settings",
        long_help = "Initialize the ~/.config/bolden directory with a settings.json file and a logs directory."
    )]
    pub new_config: bool,

    /// Write logs to ~/.config/bolden/logs instead of stderr
    #[clap(long = "log-file", help = "Write logs to ~/.config/bolden/logs")]
    pub log_file: bool,

    /// Enable debug logging
    #[clap(long = "verbose", short = 'v', help = "Enable debug logging")]
    pub verbose: bool,
}

/// Fully resolved settings for one run
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub font: Option<PathBuf>,
    pub text: String,
    pub params: RenderParams,
    pub fill: String,
}

impl CliArgs {
    /// Validate the CLI arguments after parsing
    ///
    /// This ensures that paths exist and numbers are in range before any
    /// work starts, providing clear error messages for common mistakes.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(path) = &self.font {
            if !path.exists() {
                return Err(format!(
                    "Font source does not exist: {}\nMake sure the path is correct and the file exists.",
                    path.display()
                ));
            }
            if is_compiled_font(path) {
                if !path.is_file() {
                    return Err(format!("Font file is not a regular file: {}", path.display()));
                }
            } else if !path.is_dir() || !path.join("metainfo.plist").exists() {
                return Err(format!(
                    "Not a valid UFO directory: missing metainfo.plist in {}\nMake sure this is a valid UFO directory.",
                    path.display()
                ));
            }
        }

        if let Some(sampling) = self.sampling {
            if !(sampling.is_finite() && sampling > 0.0) {
                return Err(format!(
                    "Invalid sampling resolution: {sampling}\nThe sampling resolution must be greater than zero."
                ));
            }
        }

        if let Some(size) = self.font_size {
            if !(size.is_finite() && size > 0.0) {
                return Err(format!(
                    "Invalid font size: {size}\nThe font size must be greater than zero."
                ));
            }
        }

        if let Some(boldness) = self.boldness {
            if !boldness.is_finite() {
                return Err(format!("Invalid boldness: {boldness}"));
            }
        }

        Ok(())
    }

    /// Merge arguments with the settings file
    ///
    /// Priority order:
    /// 1. CLI argument
    /// 2. Config file setting (~/.config/bolden/settings.json)
    /// 3. Built-in default
    pub fn resolve(&self, config: Option<&ConfigFile>) -> Settings {
        let config = config.cloned().unwrap_or_default();

        let seam_join = if self.seam_miter {
            SeamJoin::Miter
        } else {
            config.seam_join.unwrap_or_default()
        };

        let settings = Settings {
            font: self.font.clone().or(config.font),
            text: self
                .text
                .clone()
                .or(config.text)
                .unwrap_or_else(|| DEFAULT_TEXT.to_string()),
            params: RenderParams {
                boldness: self.boldness.or(config.boldness).unwrap_or(DEFAULT_BOLDNESS),
                sampling: self.sampling.or(config.sampling).unwrap_or(DEFAULT_SAMPLING),
                font_size: self.font_size.or(config.font_size).unwrap_or(DEFAULT_FONT_SIZE),
                baseline: self.baseline.or(config.baseline).unwrap_or(DEFAULT_BASELINE),
                seam_join,
            },
            fill: config.fill.unwrap_or_else(|| "black".to_string()),
        };
        debug!("Resolved settings: {:?}", settings);
        settings
    }
}
