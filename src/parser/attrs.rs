//! Attribute value parsing: integers, colours, point lists and origins.

use crate::error::{RgbError, Result};
use crate::types::{Colour, Point};

use super::Element;

/// Read an integer attribute. A missing attribute reads as 0.
pub fn int_attr(element: &Element, name: &str) -> Result<i32> {
    match element.attr(name) {
        Some(value) => parse_int(value).map_err(|_| RgbError::Parse {
            message: format!(
                "Invalid integer for '{}' on <{}>: {}",
                name, element.tag, value
            ),
            help: Some("Coordinates and sizes must be whole numbers".to_string()),
        }),
        None => Ok(0),
    }
}

/// Read a colour attribute. A missing attribute reads as black.
pub fn colour_attr(element: &Element, name: &str) -> Result<Colour> {
    match element.attr(name) {
        Some(value) => Colour::parse(value),
        None => Ok(Colour::BLACK),
    }
}

/// Parse a whitespace-separated list of `x,y` pairs.
pub fn parse_points(source: &str) -> Result<Vec<Point>> {
    source
        .split_whitespace()
        .map(|pair| {
            let invalid = || RgbError::Parse {
                message: format!("Invalid point: {}", pair),
                help: Some("Points are written as x,y pairs separated by spaces".to_string()),
            };
            let (x, y) = pair.split_once(',').ok_or_else(invalid)?;
            let x = parse_int(x).map_err(|_| invalid())?;
            let y = parse_int(y).map_err(|_| invalid())?;
            Ok(Point::new(x, y))
        })
        .collect()
}

/// Parse a `transform-origin` value: `"x y"` or `"x,y"`.
pub fn parse_origin(source: &str) -> Result<Point> {
    let values: Vec<&str> = source
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .collect();

    let invalid = || RgbError::Parse {
        message: format!("Invalid transform-origin: {}", source),
        help: Some("Use two whole numbers, e.g. transform-origin=\"10 20\"".to_string()),
    };

    match values.as_slice() {
        [x, y] => Ok(Point::new(
            parse_int(x).map_err(|_| invalid())?,
            parse_int(y).map_err(|_| invalid())?,
        )),
        _ => Err(invalid()),
    }
}

pub(crate) fn parse_int(value: &str) -> std::result::Result<i32, std::num::ParseIntError> {
    value.trim().parse::<i32>()
}
