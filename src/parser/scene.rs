//! Scene builder: turns an element tree into an ordered list of shapes.
//!
//! The builder walks the tree in document order. Elements with an `id`
//! are remembered so that later `<use href="#id">` elements can insert an
//! independent copy. Unknown tags, unknown transform kinds and repeated
//! ids are reported as diagnostics and skipped.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::Path;

use serde::Serialize;

use crate::error::{RgbError, Result};
use crate::types::{Point, Shape};

use super::attrs::{colour_attr, int_attr, parse_origin, parse_points};
use super::diagnostic::{
    Diagnostic, Diagnostics, DUPLICATE_ID, UNRECOGNIZED_TAG, UNRECOGNIZED_TRANSFORM,
};
use super::transform::{directive_name, Transform};
use super::Element;

/// Canvas size plus top-level shapes in document order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub width: i32,
    pub height: i32,
    pub shapes: Vec<Shape>,
}

/// Builds a [`Scene`] from an element tree.
///
/// The reference table lives on the builder and is reset at the start of
/// every [`build`](SceneBuilder::build), so ids never leak between
/// documents. References must point backwards: a `use` that appears
/// before its target fails with `UnresolvedReference`.
#[derive(Debug, Default)]
pub struct SceneBuilder {
    references: HashMap<String, Shape>,
    diagnostics: Diagnostics,
}

impl SceneBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a scene from the document root.
    pub fn build(&mut self, root: &Element) -> Result<Scene> {
        self.references.clear();
        self.diagnostics.clear();

        let width = int_attr(root, "width")?;
        let height = int_attr(root, "height")?;
        let shapes = self.parse_children(root)?;

        log::debug!(
            "Built scene {}x{} with {} top-level shape(s)",
            width,
            height,
            shapes.len()
        );

        Ok(Scene {
            width,
            height,
            shapes,
        })
    }

    /// Diagnostics from the last build.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    fn parse_children(&mut self, parent: &Element) -> Result<Vec<Shape>> {
        let mut shapes = Vec::with_capacity(parent.children.len());
        for child in &parent.children {
            if let Some(shape) = self.parse_element(child)? {
                shapes.push(shape);
            }
        }
        Ok(shapes)
    }

    fn parse_element(&mut self, element: &Element) -> Result<Option<Shape>> {
        let mut shape = match element.tag.as_str() {
            "ellipse" => Shape::ellipse(
                colour_attr(element, "fill")?,
                Point::new(int_attr(element, "cx")?, int_attr(element, "cy")?),
                Point::new(int_attr(element, "rx")?, int_attr(element, "ry")?),
            ),
            "circle" => Shape::circle(
                colour_attr(element, "fill")?,
                Point::new(int_attr(element, "cx")?, int_attr(element, "cy")?),
                int_attr(element, "r")?,
            ),
            "polyline" => Shape::polyline(
                colour_attr(element, "stroke")?,
                parse_points(element.attr("points").unwrap_or(""))?,
            )?,
            "line" => Shape::line(
                colour_attr(element, "stroke")?,
                Point::new(int_attr(element, "x1")?, int_attr(element, "y1")?),
                Point::new(int_attr(element, "x2")?, int_attr(element, "y2")?),
            ),
            "polygon" => Shape::polygon(
                colour_attr(element, "fill")?,
                parse_points(element.attr("points").unwrap_or(""))?,
            )?,
            "rect" => Shape::rect(
                colour_attr(element, "fill")?,
                Point::new(int_attr(element, "x")?, int_attr(element, "y")?),
                int_attr(element, "width")?,
                int_attr(element, "height")?,
            ),
            "g" => Shape::group(self.parse_children(element)?),
            "use" => self.resolve_use(element)?,
            other => {
                self.diagnostics.push(
                    Diagnostic::new(
                        UNRECOGNIZED_TAG,
                        format!("Unrecognized shape type: {}", other),
                    )
                    .with_help("Supported: ellipse, circle, polyline, line, polygon, rect, g, use"),
                );
                return Ok(None);
            }
        };

        self.apply_transform(&mut shape, element)?;

        if let Some(id) = element.attr("id") {
            self.register(id, &shape);
        }

        Ok(Some(shape))
    }

    /// Remember `shape` under `id`. The first definition of an id wins.
    fn register(&mut self, id: &str, shape: &Shape) {
        match self.references.entry(id.to_string()) {
            Entry::Vacant(slot) => {
                slot.insert(shape.duplicate());
            }
            Entry::Occupied(_) => self.diagnostics.push(
                Diagnostic::new(DUPLICATE_ID, format!("Duplicate id: {}", id))
                    .with_help("References resolve to the first element with this id"),
            ),
        }
    }

    fn resolve_use(&self, element: &Element) -> Result<Shape> {
        let href = element.attr("href").unwrap_or("");
        let id = href.strip_prefix('#').unwrap_or(href);

        self.references
            .get(id)
            .map(Shape::duplicate)
            .ok_or_else(|| RgbError::UnresolvedReference { id: id.to_string() })
    }

    fn apply_transform(&mut self, shape: &mut Shape, element: &Element) -> Result<()> {
        let Some(directive) = element.attr("transform") else {
            return Ok(());
        };

        let origin = match element.attr("transform-origin") {
            Some(value) => parse_origin(value)?,
            None => Point::ORIGIN,
        };

        match Transform::parse(directive)? {
            Some(transform) => transform.apply(shape, origin),
            None => self.diagnostics.push(
                Diagnostic::new(
                    UNRECOGNIZED_TRANSFORM,
                    format!("Unrecognized transform type: {}", directive_name(directive)),
                )
                .with_help("Supported: translate(dx, dy), scale(v), rotate(degrees)"),
            ),
        }

        Ok(())
    }
}

/// Build a scene, logging any diagnostics.
pub fn parse_scene(root: &Element) -> Result<Scene> {
    SceneBuilder::new().build(root)
}

/// Read an SVG file and build its scene.
pub fn load_scene(path: &Path) -> Result<Scene> {
    let root = Element::load(path)?;
    parse_scene(&root)
}
