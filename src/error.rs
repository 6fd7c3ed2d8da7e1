use miette::Diagnostic;
use thiserror::Error;

/// Main error type for rgbsvg operations
#[derive(Error, Diagnostic, Debug)]
pub enum RgbError {
    #[error("IO error: {0}")]
    #[diagnostic(code(rgbsvg::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(rgbsvg::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(rgbsvg::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Invalid image dimensions: {width}x{height}")]
    #[diagnostic(
        code(rgbsvg::image::invalid_dimensions),
        help("Width and height must both be greater than zero")
    )]
    InvalidDimensions { width: i64, height: i64 },

    #[error("Pixel ({x}, {y}) is outside a {width}x{height} image")]
    #[diagnostic(code(rgbsvg::image::out_of_bounds))]
    OutOfBounds {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },

    #[error("Image dimensions differ: expected {expected_width}x{expected_height}, got {width}x{height}")]
    #[diagnostic(code(rgbsvg::image::dimension_mismatch))]
    DimensionMismatch {
        expected_width: u32,
        expected_height: u32,
        width: u32,
        height: u32,
    },

    #[error("A {kind} needs at least one point")]
    #[diagnostic(code(rgbsvg::shape::empty))]
    EmptyShape { kind: &'static str },

    #[error("Unknown colour: {name}")]
    #[diagnostic(
        code(rgbsvg::colour::unknown),
        help("Use #RRGGBB or one of black, white, red, green, blue, yellow")
    )]
    UnknownColor { name: String },

    #[error("Unresolved reference: #{id}")]
    #[diagnostic(
        code(rgbsvg::scene::unresolved_reference),
        help("A <use> element can only reference an id declared earlier in the document")
    )]
    UnresolvedReference { id: String },

    #[error("Build error: {message}")]
    #[diagnostic(code(rgbsvg::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, RgbError>;
