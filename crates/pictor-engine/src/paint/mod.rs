//! Color model shared between the factory and batches.
//!
//! Geometry types remain in `coords`.

pub mod color;

pub use color::Color;
