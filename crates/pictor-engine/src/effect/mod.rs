//! Effects: render-state modifiers applied uniformly to produced batches.
//!
//! A factory runs its [`EffectSet`] right after building base geometry and
//! before any shape-specific color or texture-coordinate edits, so shape
//! edits win over effects that touch the same vertex fields.
//!
//! Textured quads are marked immediate before effects run, so an effect can
//! retain them. Other shapes are marked immediate afterwards.

mod builtin;
mod set;

pub use builtin::{BlendEffect, ShaderEffect};
pub use set::EffectSet;

use crate::batch::Batch;

/// A render-state modifier.
pub trait Effect {
    fn apply(&self, batch: &mut Batch);

    /// Short name used in logs.
    fn name(&self) -> &str {
        "effect"
    }
}

impl<F> Effect for F
where
    F: Fn(&mut Batch),
{
    fn apply(&self, batch: &mut Batch) {
        self(batch)
    }

    fn name(&self) -> &str {
        "fn"
    }
}
