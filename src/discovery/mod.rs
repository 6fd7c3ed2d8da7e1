//! Drawing discovery for rgbsvg projects.
//!
//! This module finds the SVG drawings of a project directory, either by
//! scanning the whole directory or the sources listed in an `rgbsvg.yaml`
//! manifest.
//!
//! # Example
//!
//! ```ignore
//! use rgbsvg::discovery::discover;
//!
//! let result = discover("./drawings")?;
//! println!("Found {} drawings", result.scan.total());
//! ```

mod manifest;
mod scanner;

use std::path::{Path, PathBuf};

use crate::error::Result;

pub use manifest::Manifest;
pub use scanner::{is_svg, scan_directory, scan_sources, ScanResult};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "rgbsvg.yaml";

/// Result of discovering drawings in a project.
#[derive(Debug)]
pub struct DiscoveryResult {
    /// The project root directory.
    pub root: PathBuf,

    /// The loaded manifest (default if no rgbsvg.yaml found).
    pub manifest: Manifest,

    /// Whether an rgbsvg.yaml manifest was found.
    pub has_manifest: bool,

    /// Scan results with discovered files.
    pub scan: ScanResult,
}

impl DiscoveryResult {
    /// Output directory, resolved against the project root.
    pub fn output_dir(&self) -> PathBuf {
        self.root.join(&self.manifest.output)
    }
}

/// Discover drawings in a project directory.
///
/// Uses the manifest's source paths when an `rgbsvg.yaml` is present,
/// otherwise scans the entire directory.
pub fn discover(root: impl AsRef<Path>) -> Result<DiscoveryResult> {
    let root = root.as_ref().to_path_buf();

    let (manifest, has_manifest) = match Manifest::find(&root)? {
        Some(manifest) => (manifest, true),
        None => (Manifest::default(), false),
    };

    let scan = scan_sources(&manifest.effective_sources(), &root, &manifest);

    Ok(DiscoveryResult {
        root,
        manifest,
        has_manifest,
        scan,
    })
}

/// Discover drawings from explicit files and directories (no manifest lookup).
pub fn discover_paths(paths: &[PathBuf]) -> Result<DiscoveryResult> {
    let manifest = Manifest::default();
    let mut scan = ScanResult::new();

    for path in paths {
        if path.is_dir() {
            scan.merge(scan_directory(path, &manifest));
        } else if path.is_file() && is_svg(path) {
            scan.drawings.push(path.clone());
        } else {
            log::warn!("Skipping {}: not an SVG file or directory", path.display());
        }
    }

    let root = paths
        .first()
        .and_then(|p| p.parent())
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));

    Ok(DiscoveryResult {
        root,
        manifest,
        has_manifest: false,
        scan,
    })
}
