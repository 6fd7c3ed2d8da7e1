//! Parsing of SVG-subset documents into scenes.
//!
//! The markup itself is read into a small [`Element`] tree; the
//! [`SceneBuilder`] then turns that tree into shapes.
//!
//! # Usage
//!
//! ```ignore
//! use rgbsvg::parser::{Element, SceneBuilder};
//!
//! let root = Element::load("drawing.svg".as_ref())?;
//! let mut builder = SceneBuilder::new();
//! let scene = builder.build(&root)?;
//!
//! for d in builder.diagnostics().iter() {
//!     eprintln!("{}", d);
//! }
//! ```

pub mod attrs;
pub mod diagnostic;
mod element;
mod scene;
pub mod transform;

pub use diagnostic::{Diagnostic, Diagnostics};
pub use element::Element;
pub use scene::{load_scene, parse_scene, Scene, SceneBuilder};
pub use transform::Transform;
