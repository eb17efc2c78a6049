//! Coordinate and geometry types shared across the factory and batches.
//!
//! Canonical CPU space:
//! - Logical pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! Quads always index their corners top-left, bottom-left, bottom-right,
//! top-right (see [`Rect::corners`]).

mod polygon;
mod rect;
mod rotation;
mod tex_coords;
mod vec2;

pub use polygon::Polygon;
pub use rect::Rect;
pub use rotation::Rotation;
pub use tex_coords::TexCoords;
pub use vec2::Vec2;
