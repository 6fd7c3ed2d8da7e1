//! Inspect command implementation.
//!
//! Prints the scene built from an SVG file as JSON. Diagnostics are
//! reported on stderr through the log.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::parser::{Element, SceneBuilder};

/// Print the shapes parsed from an SVG file as JSON
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// SVG file to inspect
    pub svg: PathBuf,
}

pub fn run(args: InspectArgs, printer: &Printer) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_scene(&args, &mut out, printer)
}

fn write_scene(args: &InspectArgs, out: &mut impl Write, printer: &Printer) -> Result<()> {
    let root = Element::load(&args.svg)?;
    let mut builder = SceneBuilder::new();
    let scene = builder.build(&root)?;

    serde_json::to_writer_pretty(&mut *out, &scene).map_err(io::Error::from)?;
    writeln!(out)?;

    let diagnostics = builder.diagnostics();
    if !diagnostics.is_empty() {
        printer.warning(
            "Warning",
            &format!(
                "{} in {}",
                plural(diagnostics.len(), "element skipped", "elements skipped"),
                display_path(&args.svg)
            ),
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_inspect_json() {
        let dir = tempdir().unwrap();
        let svg = dir.path().join("dot.svg");
        fs::write(
            &svg,
            r##"<svg width="8" height="6">
  <circle cx="3" cy="2" r="1" fill="red"/>
  <line x1="0" y1="0" x2="2" y2="0" stroke="#00ff00"/>
  <foreignObject/>
</svg>"##,
        )
        .unwrap();

        let mut out = Vec::new();
        write_scene(&InspectArgs { svg }, &mut out, &Printer::plain()).unwrap();
        let value: Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(
            value,
            json!({
                "width": 8,
                "height": 6,
                "shapes": [
                    {
                        "kind": "ellipse",
                        "colour": "#FF0000",
                        "center": { "x": 3, "y": 2 },
                        "radius": { "x": 1, "y": 1 }
                    },
                    {
                        "kind": "polyline",
                        "colour": "#00FF00",
                        "points": [{ "x": 0, "y": 0 }, { "x": 2, "y": 0 }]
                    }
                ]
            })
        );
    }

    #[test]
    fn test_inspect_missing_file() {
        let dir = tempdir().unwrap();
        let args = InspectArgs {
            svg: dir.path().join("missing.svg"),
        };
        let mut out = Vec::new();

        assert!(write_scene(&args, &mut out, &Printer::plain()).is_err());
        assert!(out.is_empty());
    }
}
