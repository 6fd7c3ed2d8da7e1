//! Vector shapes.
//!
//! Shapes form a closed set of variants. Circles, lines and rectangles are
//! not separate variants: they are constructors that produce an ellipse, a
//! two-point polyline and a four-point polygon respectively.
//!
//! Every shape supports the same capabilities: draw onto an [`Image`],
//! translate, scale about an origin, rotate about an origin and duplicate.

use serde::Serialize;

use crate::error::{RgbError, Result};
use crate::raster::Image;

use super::{Colour, Point};

/// A drawable vector shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    /// Filled axis-aligned ellipse.
    Ellipse {
        colour: Colour,
        center: Point,
        radius: Point,
    },

    /// Open chain of line segments.
    Polyline { colour: Colour, points: Vec<Point> },

    /// Filled closed polygon (even-odd rule).
    Polygon { colour: Colour, points: Vec<Point> },

    /// Ordered children, exclusively owned.
    Group { children: Vec<Shape> },
}

impl Shape {
    /// Create an ellipse with radii `(rx, ry)`.
    pub fn ellipse(colour: Colour, center: Point, radius: Point) -> Self {
        Shape::Ellipse {
            colour,
            center,
            radius,
        }
    }

    /// Create a circle: an ellipse with equal radii.
    pub fn circle(colour: Colour, center: Point, radius: i32) -> Self {
        Self::ellipse(colour, center, Point::new(radius, radius))
    }

    /// Create a polyline. Fails if `points` is empty.
    pub fn polyline(colour: Colour, points: Vec<Point>) -> Result<Self> {
        if points.is_empty() {
            return Err(RgbError::EmptyShape { kind: "polyline" });
        }
        Ok(Shape::Polyline { colour, points })
    }

    /// Create a single line segment from `a` to `b`.
    pub fn line(colour: Colour, a: Point, b: Point) -> Self {
        Shape::Polyline {
            colour,
            points: vec![a, b],
        }
    }

    /// Create a polygon. Fails if `points` is empty.
    pub fn polygon(colour: Colour, points: Vec<Point>) -> Result<Self> {
        if points.is_empty() {
            return Err(RgbError::EmptyShape { kind: "polygon" });
        }
        Ok(Shape::Polygon { colour, points })
    }

    /// Create a rectangle covering `width` x `height` pixels from `upper_left`.
    ///
    /// The result is a plain four-corner polygon; the size is not kept.
    pub fn rect(colour: Colour, upper_left: Point, width: i32, height: i32) -> Self {
        let Point { x, y } = upper_left;
        let right = x.saturating_add(width).saturating_sub(1);
        let bottom = y.saturating_add(height).saturating_sub(1);
        Shape::Polygon {
            colour,
            points: vec![
                Point::new(x, y),
                Point::new(right, y),
                Point::new(right, bottom),
                Point::new(x, bottom),
            ],
        }
    }

    /// Create a group owning `children`.
    pub fn group(children: Vec<Shape>) -> Self {
        Shape::Group { children }
    }

    /// Short name of the variant.
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Ellipse { .. } => "ellipse",
            Shape::Polyline { .. } => "polyline",
            Shape::Polygon { .. } => "polygon",
            Shape::Group { .. } => "group",
        }
    }

    /// The shape's colour. Groups have none of their own.
    pub fn colour(&self) -> Option<Colour> {
        match self {
            Shape::Ellipse { colour, .. }
            | Shape::Polyline { colour, .. }
            | Shape::Polygon { colour, .. } => Some(*colour),
            Shape::Group { .. } => None,
        }
    }

    /// Change the colour. On a group this recolours every child.
    pub fn set_colour(&mut self, new: Colour) {
        match self {
            Shape::Ellipse { colour, .. }
            | Shape::Polyline { colour, .. }
            | Shape::Polygon { colour, .. } => *colour = new,
            Shape::Group { children } => {
                children.iter_mut().for_each(|c| c.set_colour(new));
            }
        }
    }

    /// Draw the shape onto `image`.
    pub fn draw(&self, image: &mut Image) {
        match self {
            Shape::Ellipse {
                colour,
                center,
                radius,
            } => image.draw_ellipse(*center, *radius, *colour),
            Shape::Polyline { colour, points } => {
                if let [only] = points.as_slice() {
                    image.draw_line(*only, *only, *colour);
                }
                for pair in points.windows(2) {
                    image.draw_line(pair[0], pair[1], *colour);
                }
            }
            Shape::Polygon { colour, points } => image.draw_polygon(points, *colour),
            Shape::Group { children } => {
                for child in children {
                    child.draw(image);
                }
            }
        }
    }

    /// Move the shape by `by`.
    pub fn translate(&mut self, by: Point) {
        match self {
            Shape::Ellipse { center, .. } => *center = center.translate(by),
            Shape::Polyline { points, .. } | Shape::Polygon { points, .. } => {
                for p in points {
                    *p = p.translate(by);
                }
            }
            Shape::Group { children } => {
                children.iter_mut().for_each(|c| c.translate(by));
            }
        }
    }

    /// Scale the shape about `origin` by an integer factor.
    ///
    /// Ellipse radii are multiplied by the factor as well.
    pub fn scale(&mut self, origin: Point, factor: i32) {
        match self {
            Shape::Ellipse { center, radius, .. } => {
                *radius = *radius * factor;
                *center = center.scale(origin, factor);
            }
            Shape::Polyline { points, .. } | Shape::Polygon { points, .. } => {
                for p in points {
                    *p = p.scale(origin, factor);
                }
            }
            Shape::Group { children } => {
                children.iter_mut().for_each(|c| c.scale(origin, factor));
            }
        }
    }

    /// Rotate the shape about `origin` by `degrees`.
    ///
    /// An ellipse stays axis-aligned: only its centre moves.
    pub fn rotate(&mut self, origin: Point, degrees: i32) {
        match self {
            Shape::Ellipse { center, .. } => *center = center.rotate(origin, degrees),
            Shape::Polyline { points, .. } | Shape::Polygon { points, .. } => {
                for p in points {
                    *p = p.rotate(origin, degrees);
                }
            }
            Shape::Group { children } => {
                children.iter_mut().for_each(|c| c.rotate(origin, degrees));
            }
        }
    }

    /// Produce an independent deep copy.
    ///
    /// Groups copy every child, so the copy can be transformed without
    /// touching the original.
    pub fn duplicate(&self) -> Shape {
        self.clone()
    }
}
