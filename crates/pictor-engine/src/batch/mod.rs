//! Vertex batches: the unit the factory produces and the renderer draws.
//!
//! Responsibilities:
//! - own vertices plus the render state they are drawn with (texture, group,
//!   depth, shader, blend)
//! - build base geometry for rectangles and polygons
//! - in-place transform/colorize edits
//! - pack vertices and indices for upload

mod geometry;
mod handle;
mod state;
mod topology;
mod vertex;

pub use geometry::{Batch, QUAD_TEX_COORDS};
pub use handle::BatchHandle;
pub use state::{BlendMode, ShaderId};
pub use topology::Topology;
pub use vertex::{GpuVertex, Vertex};
