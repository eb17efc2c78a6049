//! Error type for precondition violations detected while building geometry.
//!
//! Nothing here is transient: every variant is a caller bug, reported instead
//! of silently producing degenerate vertices.

/// Geometry construction errors.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A polygon with no points was handed to a batch constructor.
    #[error("polygon has no points")]
    EmptyPolygon,

    /// A texture with a zero dimension; texture coordinates divide by both.
    #[error("texture has zero size ({width}x{height})")]
    EmptyTexture { width: u32, height: u32 },

    /// NaN or infinite input reached the factory.
    #[error("non-finite {0}")]
    NonFiniteInput(&'static str),
}

/// Convenience alias used across the engine.
pub type Result<T, E = GeometryError> = core::result::Result<T, E>;
