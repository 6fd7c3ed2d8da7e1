//! Project manifest (rgbsvg.yaml) parsing.
//!
//! The manifest names the directories to scan for SVG drawings, where
//! rendered PNGs go, and the root that image scripts resolve files against.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{RgbError, Result};

/// Project manifest loaded from rgbsvg.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Source directories to scan for `.svg` files.
    /// Defaults to the project directory if empty.
    pub sources: Vec<String>,

    /// Output directory for rendered PNGs.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Directory that script file names are resolved against.
    pub root: Option<PathBuf>,

    /// Patterns to exclude from discovery.
    pub excludes: Vec<String>,
}

fn default_output() -> PathBuf {
    PathBuf::from("dist")
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            sources: vec![],
            output: default_output(),
            root: None,
            excludes: vec![],
        }
    }
}

impl Manifest {
    /// Load manifest from an rgbsvg.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| RgbError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Load the manifest from `dir`, or defaults when there is none.
    pub fn find(dir: &Path) -> Result<Option<Self>> {
        let path = dir.join(super::MANIFEST_FILENAME);
        if path.is_file() {
            log::debug!("Using manifest {}", path.display());
            Self::load(&path).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        // An empty document deserializes as null, not as an empty mapping.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| RgbError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check rgbsvg.yaml syntax".to_string()),
        })
    }

    /// Check if a path should be excluded based on exclude patterns.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        self.excludes
            .iter()
            .any(|pattern| Self::matches_pattern(&path_str, pattern))
    }

    /// Simple glob pattern matching.
    fn matches_pattern(path: &str, pattern: &str) -> bool {
        if let Some(suffix) = pattern.strip_prefix("**/") {
            // **/dir/* matches anything inside dir anywhere in the path
            if let Some(dir) = suffix.strip_suffix("/*") {
                return path.starts_with(&format!("{}/", dir))
                    || path.contains(&format!("/{}/", dir));
            }
            return path.contains(suffix);
        }

        if let Some(suffix) = pattern.strip_prefix('*') {
            if !pattern.contains('/') {
                return path.ends_with(suffix);
            }
        }

        if let Some(prefix) = pattern.strip_suffix("/*") {
            return path.starts_with(&format!("{}/", prefix))
                || path.contains(&format!("/{}/", prefix));
        }

        path.contains(pattern)
    }

    /// Get effective source paths, defaulting to the current directory.
    pub fn effective_sources(&self) -> Vec<String> {
        if self.sources.is_empty() {
            vec![".".to_string()]
        } else {
            self.sources.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_minimal_manifest() {
        let manifest = Manifest::parse("output: build").unwrap();

        assert_eq!(manifest.output, PathBuf::from("build"));
        assert!(manifest.sources.is_empty());
        assert!(manifest.root.is_none());
    }

    #[test]
    fn test_parse_full_manifest() {
        let yaml = r#"
sources:
  - drawings/
  - icons/
output: dist/png
root: scripts
excludes:
  - "*.bak.svg"
  - "**/drafts/*"
"#;
        let manifest = Manifest::parse(yaml).unwrap();

        assert_eq!(
            manifest,
            Manifest {
                sources: vec!["drawings/".to_string(), "icons/".to_string()],
                output: PathBuf::from("dist/png"),
                root: Some(PathBuf::from("scripts")),
                excludes: vec!["*.bak.svg".to_string(), "**/drafts/*".to_string()],
            }
        );
    }

    #[test]
    fn test_parse_empty_manifest() {
        let manifest = Manifest::parse("").unwrap();
        assert_eq!(manifest, Manifest::default());
    }

    #[test]
    fn test_parse_invalid_manifest() {
        let err = Manifest::parse("sources: 12").unwrap_err();
        assert!(matches!(err, RgbError::Parse { .. }));
    }

    #[test]
    fn test_effective_sources() {
        let mut manifest = Manifest::default();
        assert_eq!(manifest.effective_sources(), vec!["."]);

        manifest.sources = vec!["src/".to_string()];
        assert_eq!(manifest.effective_sources(), vec!["src/"]);
    }

    #[test]
    fn test_is_excluded_extension() {
        let manifest = Manifest {
            excludes: vec!["*.bak.svg".to_string()],
            ..Default::default()
        };

        assert!(manifest.is_excluded(Path::new("logo.bak.svg")));
        assert!(manifest.is_excluded(Path::new("path/to/logo.bak.svg")));
        assert!(!manifest.is_excluded(Path::new("logo.svg")));
    }

    #[test]
    fn test_is_excluded_directory() {
        let manifest = Manifest {
            excludes: vec!["**/drafts/*".to_string()],
            ..Default::default()
        };

        assert!(manifest.is_excluded(Path::new("drafts/foo.svg")));
        assert!(manifest.is_excluded(Path::new("path/drafts/bar.svg")));
        assert!(!manifest.is_excluded(Path::new("src/drawing.svg")));
    }

    #[test]
    fn test_is_excluded_exact() {
        let manifest = Manifest {
            excludes: vec!["temp".to_string()],
            ..Default::default()
        };

        assert!(manifest.is_excluded(Path::new("temp")));
        assert!(manifest.is_excluded(Path::new("path/temp/file.svg")));
    }

    #[test]
    fn test_find_missing_manifest() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Manifest::find(dir.path()).unwrap().is_none());
    }
}
