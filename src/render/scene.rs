//! Scene rasterization: canvas allocation, drawing and persistence.

use std::path::Path;

use crate::error::Result;
use crate::parser::{Element, SceneBuilder, Scene};
use crate::raster::Image;

use super::save_png;

/// Draw every shape of `scene` onto a fresh white canvas.
///
/// Shapes are drawn in order, so later shapes cover earlier ones.
pub fn rasterize(scene: &Scene) -> Result<Image> {
    let mut image = Image::blank(scene.width, scene.height)?;
    for shape in &scene.shapes {
        shape.draw(&mut image);
    }
    Ok(image)
}

/// Convert an SVG file to a PNG file.
///
/// Returns the builder's diagnostics count so callers can report it.
pub fn svg_to_png(svg_file: &Path, png_file: &Path) -> Result<usize> {
    let root = Element::load(svg_file)?;
    let mut builder = SceneBuilder::new();
    let scene = builder.build(&root)?;

    let image = rasterize(&scene)?;
    save_png(&image, png_file)?;

    Ok(builder.diagnostics().len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RgbError;
    use crate::render::load_png;
    use crate::types::{Colour, Point, Shape};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_rasterize_blank_canvas() {
        let scene = Scene {
            width: 3,
            height: 2,
            shapes: vec![],
        };
        let image = rasterize(&scene).unwrap();
        assert_eq!(image.size(), (3, 2));
        assert!(image.pixels().iter().all(|&c| c == Colour::WHITE));
    }

    #[test]
    fn test_rasterize_last_writer_wins() {
        let scene = Scene {
            width: 5,
            height: 5,
            shapes: vec![
                Shape::rect(Colour::RED, Point::ORIGIN, 5, 5),
                Shape::circle(Colour::BLUE, Point::new(2, 2), 1),
            ],
        };
        let image = rasterize(&scene).unwrap();

        assert_eq!(image.at(0, 0).unwrap(), Colour::RED);
        assert_eq!(image.at(2, 2).unwrap(), Colour::BLUE);
        assert_eq!(image.at(3, 2).unwrap(), Colour::BLUE);
        assert_eq!(image.at(3, 3).unwrap(), Colour::RED);
    }

    #[test]
    fn test_rasterize_oversized_shapes() {
        let root = Element::parse_xml(
            r##"<svg width="10" height="10">
  <circle cx="5" cy="5" r="60000" fill="red"/>
  <line x1="0" y1="0" x2="100000" y2="0" stroke="blue" transform="scale(100000)"/>
</svg>"##,
        )
        .unwrap();
        let scene = SceneBuilder::new().build(&root).unwrap();
        let image = rasterize(&scene).unwrap();

        for x in 0..10 {
            assert_eq!(image.at(x, 0).unwrap(), Colour::BLUE);
        }
        assert!(image.pixels()[10..].iter().all(|&c| c == Colour::RED));
    }

    #[test]
    fn test_rasterize_rejects_empty_canvas() {
        let scene = Scene {
            width: 0,
            height: 10,
            shapes: vec![],
        };
        assert!(matches!(
            rasterize(&scene),
            Err(RgbError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_svg_to_png() {
        let dir = tempdir().unwrap();
        let svg = dir.path().join("drawing.svg");
        let png = dir.path().join("drawing.png");

        fs::write(
            &svg,
            r##"<svg width="6" height="4" xmlns="http://www.w3.org/2000/svg">
  <rect id="r" x="0" y="0" width="2" height="2" fill="red"/>
  <use href="#r" transform="translate(3,1)"/>
  <text>ignored</text>
</svg>"##,
        )
        .unwrap();

        let warnings = svg_to_png(&svg, &png).unwrap();
        assert_eq!(warnings, 1);

        let image = load_png(&png).unwrap();
        assert_eq!(image.size(), (6, 4));
        assert_eq!(image.at(1, 1).unwrap(), Colour::RED);
        assert_eq!(image.at(2, 1).unwrap(), Colour::WHITE);
        assert_eq!(image.at(3, 1).unwrap(), Colour::RED);
        assert_eq!(image.at(4, 2).unwrap(), Colour::RED);
        assert_eq!(image.at(5, 3).unwrap(), Colour::WHITE);
    }
}
