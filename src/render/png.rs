//! PNG persistence for raster images.
//!
//! Images are written as 8-bit RGB. On load any alpha channel is dropped.

use std::path::Path;

use image::{ImageBuffer, Rgb, RgbImage};

use crate::error::{RgbError, Result};
use crate::raster::Image;
use crate::types::Colour;

/// Write an image to a PNG file.
pub fn save_png(image: &Image, path: &Path) -> Result<()> {
    let mut img: RgbImage = ImageBuffer::new(image.width(), image.height());

    for (pixel, colour) in img.pixels_mut().zip(image.pixels()) {
        *pixel = Rgb(colour.to_rgb());
    }

    img.save(path).map_err(|e| RgbError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    log::debug!(
        "Wrote {}x{} image to {}",
        image.width(),
        image.height(),
        path.display()
    );
    Ok(())
}

/// Read a PNG (or any format the `image` crate recognises) into an image.
pub fn load_png(path: &Path) -> Result<Image> {
    let img = image::open(path)
        .map_err(|e| RgbError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read image: {}", e),
        })?
        .to_rgb8();

    let (width, height) = img.dimensions();
    let pixels = img
        .pixels()
        .map(|p| Colour::rgb(p.0[0], p.0[1], p.0[2]))
        .collect();

    Image::from_pixels(width, height, pixels)
}
