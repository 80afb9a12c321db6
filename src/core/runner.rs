//! Application runner logic
//!
//! Handles the different ways to run bolden: initializing the config
//! directory, or loading a font and writing one rendered document.

use super::config::{CliArgs, ConfigFile, OutputFormat, Settings};
use crate::font_source::{is_compiled_font, OpenTypePathProvider, PathProvider, UfoPathProvider};
use crate::rendering::{PaintList, RenderSession, SvgPainter};
use anyhow::{Context, Result};
use kurbo::{Point, Rect};
use std::fs;
use std::io::Write;
use tracing::{info, warn};

/// Margin around the rendered text, as a fraction of the font size
const CANVAS_MARGIN: f64 = 0.25;

/// Run the application with the given CLI arguments.
/// Handles special CLI flags and delegates to the render pass.
pub fn run_app(cli_args: CliArgs) -> Result<()> {
    // Handle --new-config flag specially
    if cli_args.new_config {
        return ConfigFile::initialize_config_directory()
            .context("Failed to initialize config directory");
    }

    cli_args
        .validate()
        .map_err(|e| anyhow::anyhow!("CLI validation failed: {}", e))?;

    let config = ConfigFile::load();
    let settings = cli_args.resolve(config.as_ref());
    let document = render_document(&settings, cli_args.format)?;

    match &cli_args.output {
        Some(path) => {
            fs::write(path, &document)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => std::io::stdout().write_all(document.as_bytes())?,
    }
    Ok(())
}

/// Load the font, run one render pass and serialize the result
///
/// Paths ending in a compiled font extension are read with skrifa,
/// anything else as a UFO source.
pub fn render_document(settings: &Settings, format: OutputFormat) -> Result<String> {
    let font = settings.font.as_ref().ok_or_else(|| {
        anyhow::anyhow!(
            "No font source given\nPass --font <UFO or TTF> or set \"font\" in {}",
            ConfigFile::config_path().display()
        )
    })?;

    if is_compiled_font(font) {
        render_with(OpenTypePathProvider::load(font)?, settings, format)
    } else {
        render_with(UfoPathProvider::load(font)?, settings, format)
    }
}

fn render_with<P: PathProvider>(
    provider: P,
    settings: &Settings,
    format: OutputFormat,
) -> Result<String> {
    let mut session = RenderSession::new(provider);
    let line_extent = session.provider().line_extent(settings.params.font_size);
    let (paint, report) = session.try_update(&settings.text, &settings.params)?;
    if report.skipped > 0 {
        warn!(
            "{} degenerate contour(s) skipped, try a smaller sampling resolution",
            report.skipped
        );
    }
    info!(
        "Rendered {:?} with boldness {} ({} fills)",
        settings.text, settings.params.boldness, report.painted
    );

    match format {
        OutputFormat::Svg => Ok(svg_document(paint, settings, line_extent)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(paint)? + "\n"),
    }
}

/// Canvas bounds covering every fill and the font's line, plus a margin
///
/// Starts from the pen origin on the baseline so the canvas never shrinks
/// away from it, then grows over the ascender/descender band and every
/// painted point, negative coordinates included.
fn canvas_bounds(
    paint: &PaintList,
    settings: &Settings,
    line_extent: Option<(f64, f64)>,
) -> Rect {
    let baseline = settings.params.baseline;
    let origin = Point::new(0.0, baseline);
    let mut bounds = Rect::from_points(origin, origin);
    if let Some((ascent, descent)) = line_extent {
        bounds = bounds
            .union_pt(Point::new(0.0, baseline - ascent))
            .union_pt(Point::new(0.0, baseline - descent));
    }
    let bounds = paint
        .commands
        .iter()
        .flat_map(|command| command.points.iter())
        .fold(bounds, |acc, p| acc.union_pt(*p));

    let margin = settings.params.font_size * CANVAS_MARGIN;
    bounds.inflate(margin, margin).expand()
}

/// Replay a paint list onto an SVG canvas
pub fn svg_document(
    paint: &PaintList,
    settings: &Settings,
    line_extent: Option<(f64, f64)>,
) -> String {
    let view_box = canvas_bounds(paint, settings, line_extent);
    let mut painter = SvgPainter::new(view_box).with_fill(settings.fill.clone());
    paint.replay(&mut painter);
    painter.finish()
}
