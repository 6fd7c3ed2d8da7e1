//! Convert command implementation.
//!
//! Rasterizes SVG drawings and writes one PNG per drawing.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::discovery::{discover, discover_paths};
use crate::error::{RgbError, Result};
use crate::output::{display_path, plural, Printer};
use crate::render::svg_to_png;

/// Convert SVG drawings to PNG images
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// SVG files or directories to convert (default: the project's sources)
    pub inputs: Vec<PathBuf>,

    /// Output directory (default: the manifest's output, or "dist")
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Project directory holding rgbsvg.yaml, used when no inputs are given
    #[arg(long, default_value = ".")]
    pub project: PathBuf,
}

/// Returns the paths of the PNGs written.
pub fn run(args: ConvertArgs, printer: &Printer) -> Result<Vec<PathBuf>> {
    let discovery = if args.inputs.is_empty() {
        discover(&args.project)?
    } else {
        discover_paths(&args.inputs)?
    };

    let output = match args.output {
        Some(dir) => dir,
        None if discovery.has_manifest => discovery.output_dir(),
        None => discovery.manifest.output.clone(),
    };

    if discovery.scan.is_empty() {
        printer.warning("Warning", "no SVG drawings found");
        return Ok(vec![]);
    }

    fs::create_dir_all(&output).map_err(|e| RgbError::Io {
        path: output.clone(),
        message: format!("Failed to create output directory: {}", e),
    })?;

    let mut written = Vec::with_capacity(discovery.scan.total());
    for svg in &discovery.scan.drawings {
        written.push(convert_one(svg, &output, printer)?);
    }

    printer.status(
        "Finished",
        &format!(
            "{} to {}",
            plural(written.len(), "drawing", "drawings"),
            display_path(&output)
        ),
    );

    Ok(written)
}

fn convert_one(svg: &Path, output: &Path, printer: &Printer) -> Result<PathBuf> {
    let display = display_path(svg);
    printer.status("Converting", &display);

    let stem = svg
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| RgbError::Io {
            path: svg.to_path_buf(),
            message: "File name is not valid UTF-8".to_string(),
        })?;
    let png = output.join(format!("{}.png", stem));

    let diagnostics = svg_to_png(svg, &png)?;
    if diagnostics > 0 {
        printer.warning(
            "Warning",
            &format!(
                "{} in {}",
                plural(diagnostics, "element skipped", "elements skipped"),
                display
            ),
        );
    }

    Ok(png)
}
