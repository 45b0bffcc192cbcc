//! Error types for shape construction, transformation and loading.

use thiserror::Error;

/// Errors that can occur while building, moving or loading shapes.
///
/// A ray missing a shape is not an error; intersection routines return `Option` for that.
#[derive(Error, Debug)]
pub enum ShapeError {
    /// The defining geometry cannot describe a proper shape.
    #[error("Degenerate {shape}: {reason}")]
    DegenerateGeometry {
        /// Kind of shape being built.
        shape: &'static str,
        /// What is wrong with it.
        reason: &'static str,
    },

    /// A sphere was given a transform with shear or non-uniform scale.
    #[error("Sphere transforms must be a rotation with uniform scale and translation")]
    NonUniformScale,

    /// A sphere was given a transform that is not affine, or that collapses space.
    #[error("Unsupported sphere transform: {0}")]
    UnsupportedTransform(&'static str),

    /// Tolerance must be finite and non-negative.
    #[error("Invalid tolerance {0}: eps must be finite and non-negative")]
    InvalidTolerance(f64),

    /// Malformed shape description.
    #[error("Failed to parse shape description: {0}")]
    Config(#[from] toml::de::Error),

    /// Shape file could not be read.
    #[error("Failed to read shape file: {0}")]
    Io(#[from] std::io::Error),
}
