//! Texture resources as seen by geometry generation.
//!
//! Loading and GPU upload live with the resource manager; this module only
//! describes what batches reference.

mod resource;

pub use resource::{Texture, TextureId, TextureRef};
