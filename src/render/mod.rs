//! Rendering module for rgbsvg.
//!
//! This module rasterizes scenes onto images and moves images to and
//! from PNG files.

mod png;
mod scene;

pub use png::{load_png, save_png};
pub use scene::{rasterize, svg_to_png};
