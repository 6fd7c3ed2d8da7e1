//! Transform directive parsing.
//!
//! Supports `translate(dx[, dy])`, `scale(v)` and `rotate(deg)`. Arguments
//! may be separated by commas, spaces or both. Only the first directive of
//! an attribute is read; anything after its closing parenthesis is ignored.

use crate::error::{RgbError, Result};
use crate::types::{Point, Shape};

use super::attrs::parse_int;

/// A transform applied to a freshly built shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    Translate(Point),
    Scale(i32),
    Rotate(i32),
}

impl Transform {
    /// Parse a transform directive.
    ///
    /// Returns `Ok(None)` when the directive kind is not one of the
    /// supported ones; see [`directive_name`] for reporting it.
    pub fn parse(source: &str) -> Result<Option<Self>> {
        let first = match source.find(')') {
            Some(end) => {
                let rest = source[end + 1..].trim();
                if !rest.is_empty() {
                    log::debug!("Ignoring trailing transform directives: {}", rest);
                }
                &source[..end]
            }
            None => source,
        };

        let mut tokens = first
            .split(|c: char| c == '(' || c == ')' || c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty());

        let kind = tokens.next().unwrap_or("");
        if !matches!(kind, "translate" | "scale" | "rotate") {
            return Ok(None);
        }

        let args = tokens
            .map(|t| {
                parse_int(t).map_err(|_| RgbError::Parse {
                    message: format!("Invalid transform argument '{}' in: {}", t, source),
                    help: Some("Transform arguments must be whole numbers".to_string()),
                })
            })
            .collect::<Result<Vec<i32>>>()?;

        let transform = match kind {
            "translate" => {
                let dx = arg(&args, 0, source)?;
                let dy = args.get(1).copied().unwrap_or(0);
                Transform::Translate(Point::new(dx, dy))
            }
            "scale" => Transform::Scale(arg(&args, 0, source)?),
            "rotate" => Transform::Rotate(arg(&args, 0, source)?),
            _ => return Ok(None),
        };

        Ok(Some(transform))
    }

    /// Apply the transform to `shape`. `origin` is used by scale and rotate.
    pub fn apply(self, shape: &mut Shape, origin: Point) {
        match self {
            Transform::Translate(by) => shape.translate(by),
            Transform::Scale(factor) => shape.scale(origin, factor),
            Transform::Rotate(degrees) => shape.rotate(origin, degrees),
        }
    }
}

/// The kind named by a directive, e.g. `"skewX"` for `"skewX(30)"`.
pub fn directive_name(source: &str) -> &str {
    source
        .trim_start()
        .split(|c: char| c == '(' || c.is_whitespace())
        .next()
        .unwrap_or("")
}

fn arg(args: &[i32], index: usize, source: &str) -> Result<i32> {
    args.get(index).copied().ok_or_else(|| RgbError::Parse {
        message: format!("Missing transform argument in: {}", source),
        help: None,
    })
}
