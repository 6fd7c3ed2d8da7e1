//! rgbsvg - a small 2D graphics toolkit
//!
//! Colours, a raster buffer with pixel operations, integer geometry and a
//! set of drawable shapes, plus a builder that turns a simple SVG subset
//! into shapes and rasterizes them to PNG. An image script interpreter
//! drives the buffer operations from text files.

pub mod cli;
pub mod discovery;
pub mod error;
pub mod output;
pub mod parser;
pub mod raster;
pub mod render;
pub mod script;
pub mod types;

pub use discovery::{discover, discover_paths, DiscoveryResult, Manifest, ScanResult};
pub use error::{Result, RgbError};
pub use parser::{load_scene, parse_scene, Diagnostic, Diagnostics, Element, Scene, SceneBuilder};
pub use raster::Image;
pub use render::{load_png, rasterize, save_png, svg_to_png};
pub use script::Script;
pub use types::{Colour, Point, Shape};
