//! Submission side of the renderer contract.
//!
//! Responsibilities:
//! - the [`BatchRenderer`] seam the geometry factory submits through
//! - a retaining list with deterministic ordering (depth, group, submission)
//! - frame-scoped release of immediate batches
//!
//! Draw-call coalescing and GPU upload belong to the renderer behind the seam.

mod group;
mod key;
mod list;
mod renderer;

pub use group::GroupId;
pub use key::SortKey;
pub use list::{BatchList, ListItem};
pub use renderer::BatchRenderer;
