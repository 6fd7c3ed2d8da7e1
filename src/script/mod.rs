//! Image script interpreter.
//!
//! A script is a whitespace-separated stream of commands that operate on
//! one active image:
//!
//! ```text
//! blank 40 20 255 255 255
//! fill 0 0 10 10 255 0 0
//! open photo.png
//! mix other.png 25
//! add logo.png 255 255 255 4 4
//! rotate_right
//! save out.png
//! ```
//!
//! Colours are written as three integers `r g b`. File names are resolved
//! against the script root.

mod tokens;

use std::path::{Path, PathBuf};

use crate::error::{RgbError, Result};
use crate::raster::Image;
use crate::render::{load_png, save_png};

use tokens::Tokens;

/// Runs image scripts against a single active image.
#[derive(Debug)]
pub struct Script {
    root: PathBuf,
    image: Option<Image>,
    executed: usize,
}

impl Script {
    /// Create an interpreter that resolves file names against `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            image: None,
            executed: 0,
        }
    }

    /// The active image, if one has been opened or created.
    pub fn image(&self) -> Option<&Image> {
        self.image.as_ref()
    }

    /// Number of commands executed so far.
    pub fn executed(&self) -> usize {
        self.executed
    }

    /// Read and run a script file.
    pub fn run_file(&mut self, path: &Path) -> Result<()> {
        let source = std::fs::read_to_string(path).map_err(|e| RgbError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read script: {}", e),
        })?;
        self.process(&source)
    }

    /// Run every command in `source`.
    pub fn process(&mut self, source: &str) -> Result<()> {
        let mut tokens = Tokens::new(source);

        while let Some(command) = tokens.next_word() {
            log::info!("Executing command '{}' ...", command);
            self.execute(command, &mut tokens)?;
            self.executed += 1;
        }

        Ok(())
    }

    fn execute(&mut self, command: &str, tokens: &mut Tokens<'_>) -> Result<()> {
        match command {
            "open" => {
                let path = self.resolve(tokens.word("file name")?);
                self.image = Some(load_png(&path)?);
            }
            "blank" => {
                let w = tokens.int("width")?;
                let h = tokens.int("height")?;
                let fill = tokens.colour()?;
                self.image = Some(Image::new(w, h, fill)?);
            }
            "save" => {
                let path = self.resolve(tokens.word("file name")?);
                save_png(self.active()?, &path)?;
            }
            "fill" => {
                let (x, y) = (tokens.int("x")?, tokens.int("y")?);
                let (w, h) = (tokens.int("width")?, tokens.int("height")?);
                let colour = tokens.colour()?;
                self.active_mut()?.fill(x, y, w, h, colour);
            }
            "invert" => self.active_mut()?.invert(),
            "to_gray_scale" => self.active_mut()?.to_gray_scale(),
            "replace" => {
                let a = tokens.colour()?;
                let b = tokens.colour()?;
                self.active_mut()?.replace(a, b);
            }
            "crop" => {
                let (x, y) = (tokens.int("x")?, tokens.int("y")?);
                let (w, h) = (tokens.int("width")?, tokens.int("height")?);
                self.active_mut()?.crop(x, y, w, h)?;
            }
            "rotate_left" => self.active_mut()?.rotate_left(),
            "rotate_right" => self.active_mut()?.rotate_right(),
            "mix" => {
                let other = load_png(&self.resolve(tokens.word("file name")?))?;
                let factor = tokens.int("factor")?;
                self.active_mut()?.mix(&other, factor)?;
            }
            "add" => {
                let other = load_png(&self.resolve(tokens.word("file name")?))?;
                let neutral = tokens.colour()?;
                let (x, y) = (tokens.int("x")?, tokens.int("y")?);
                self.active_mut()?.add(&other, neutral, x, y);
            }
            other => {
                return Err(RgbError::Parse {
                    message: format!("Unknown command: {}", other),
                    help: Some(
                        "Commands: open, blank, save, fill, invert, to_gray_scale, replace, \
                         crop, rotate_left, rotate_right, mix, add"
                            .to_string(),
                    ),
                })
            }
        }
        Ok(())
    }

    fn resolve(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    fn active(&self) -> Result<&Image> {
        self.image.as_ref().ok_or_else(no_image)
    }

    fn active_mut(&mut self) -> Result<&mut Image> {
        self.image.as_mut().ok_or_else(no_image)
    }
}

fn no_image() -> RgbError {
    RgbError::Build {
        message: "No image loaded".to_string(),
        help: Some("Start the script with 'open <file>' or 'blank <w> <h> <r> <g> <b>'".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Colour;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    fn run(source: &str) -> Script {
        let mut script = Script::new(".");
        script.process(source).unwrap();
        script
    }

    #[test]
    fn test_blank_and_fill() {
        let script = run("blank 3 2 0 0 0\nfill 1 0 2 2 255 255 255\n");
        let image = script.image().unwrap();

        assert_eq!(image.size(), (3, 2));
        assert_eq!(image.at(0, 0).unwrap(), Colour::BLACK);
        assert_eq!(image.at(1, 1).unwrap(), Colour::WHITE);
        assert_eq!(script.executed(), 2);
    }

    #[test]
    fn test_transform_commands() {
        let script = run(
            "blank 4 2 255 0 0
             replace 255 0 0 0 0 255
             invert
             crop 1 0 2 2
             rotate_right
             to_gray_scale",
        );
        let image = script.image().unwrap();

        // blue, inverted to yellow, then averaged: (255 + 255 + 0) / 3 = 170.
        assert_eq!(image.size(), (2, 2));
        assert!(image.pixels().iter().all(|&c| c == Colour::rgb(170, 170, 170)));
    }

    #[test]
    fn test_rotate_left_swaps_dimensions() {
        let script = run("blank 5 2 0 0 0 rotate_left");
        assert_eq!(script.image().unwrap().size(), (2, 5));
    }

    #[test]
    fn test_command_before_image_fails() {
        let mut script = Script::new(".");
        let err = script.process("invert").unwrap_err();
        assert!(matches!(err, RgbError::Build { .. }));
    }

    #[test]
    fn test_unknown_command_fails() {
        let mut script = Script::new(".");
        let err = script.process("blank 1 1 0 0 0 sharpen").unwrap_err();
        assert!(matches!(err, RgbError::Parse { message, .. } if message.contains("sharpen")));
    }

    #[test]
    fn test_missing_argument_fails() {
        let mut script = Script::new(".");
        assert!(matches!(
            script.process("blank 2"),
            Err(RgbError::Parse { .. })
        ));
    }

    #[test]
    fn test_invalid_blank_dimensions() {
        let mut script = Script::new(".");
        assert!(matches!(
            script.process("blank 0 3 0 0 0"),
            Err(RgbError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_files_resolve_against_root() {
        let dir = tempdir().unwrap();

        let mut script = Script::new(dir.path());
        script
            .process(
                "blank 4 4 0 0 0
                 save base.png
                 blank 2 2 255 255 255
                 fill 0 0 1 1 255 0 0
                 save overlay.png
                 blank 4 4 0 0 255
                 save blue.png",
            )
            .unwrap();

        script
            .process(
                "open base.png
                 add overlay.png 255 255 255 2 2
                 mix blue.png 100
                 save result.png",
            )
            .unwrap();

        let result = load_png(&dir.path().join("result.png")).unwrap();
        assert!(result.pixels().iter().all(|&c| c == Colour::BLUE));

        script.process("open base.png add overlay.png 255 255 255 2 2").unwrap();
        let image = script.image().unwrap();
        assert_eq!(image.at(2, 2).unwrap(), Colour::RED);
        assert_eq!(image.at(3, 3).unwrap(), Colour::BLACK);
    }

    #[test]
    fn test_mix_dimension_mismatch() {
        let dir = tempdir().unwrap();
        let mut script = Script::new(dir.path());
        script.process("blank 2 2 0 0 0 save small.png").unwrap();

        let err = script.process("blank 3 3 0 0 0 mix small.png 50").unwrap_err();
        assert!(matches!(err, RgbError::DimensionMismatch { .. }));
        assert_eq!(script.image().unwrap().size(), (3, 3));
    }

    #[test]
    fn test_run_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("make.txt");
        fs::write(&path, "blank 2 1 0 255 0\nsave green.png\n").unwrap();

        let mut script = Script::new(dir.path());
        script.run_file(&path).unwrap();

        let image = load_png(&dir.path().join("green.png")).unwrap();
        assert_eq!(image.at(1, 0).unwrap(), Colour::GREEN);
    }
}
