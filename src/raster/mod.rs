//! Raster images and the primitives that draw into them.
//!
//! [`Image`] is the pixel-addressable canvas shared by the script runner
//! and the shape renderer.

mod draw;
mod image;

pub use image::Image;
