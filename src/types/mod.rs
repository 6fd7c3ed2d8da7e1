//! Core domain types for rgbsvg.
//!
//! This module contains the fundamental value types shared by the raster
//! and vector halves:
//! - `Colour` - 8-bit RGB colour values
//! - `Point` - integer 2D points and their transforms
//! - `Shape` - the closed set of drawable vector shapes

mod colour;
mod point;
mod shape;

pub use colour::Colour;
pub use point::Point;
pub use shape::Shape;
