//! Pictor engine crate.
//!
//! Turns 2D primitives (lines, rectangles, polygons, whole or partial
//! textures) into vertex batches tagged with texture, group, depth and
//! effect state, and submits them to a [`scene::BatchRenderer`].
//!
//! GPU upload and drawing live behind that seam; [`scene::BatchList`] is the
//! retaining implementation shipped here.

pub mod batch;
pub mod coords;
pub mod effect;
pub mod error;
pub mod factory;
pub mod logging;
pub mod paint;
pub mod scene;
pub mod texture;

pub use batch::{Batch, BatchHandle};
pub use error::{GeometryError, Result};
pub use factory::{DrawFlags, FactoryState, GeometryFactory};
