//! Geometry factory: turns shape descriptions into submitted vertex batches.
//!
//! Every draw call follows the same pipeline:
//!
//! ```text
//!  base geometry (Batch constructors, tagged with texture/group/depth)
//!        │
//!        ▼
//!  effect set (shader, blend, custom effects)
//!        │
//!        ▼
//!  shape edits (corner colors, texture coordinates, scale → rotate → translate, flips)
//!        │
//!        ▼
//!  BatchRenderer::submit  →  BatchHandle returned to the caller
//! ```
//!
//! Factory state (texture, group, depth, effects) belongs to the instance and
//! only affects batches produced after it changes.

mod flags;
mod shapes;
mod state;
mod textured;

pub use flags::DrawFlags;
pub use state::FactoryState;

use crate::batch::{Batch, BatchHandle};
use crate::effect::EffectSet;
use crate::error::{GeometryError, Result};
use crate::scene::{BatchRenderer, GroupId};
use crate::texture::TextureRef;

/// Stateful producer of vertex batches.
///
/// `R` is the renderer seam batches are submitted to; `&mut R` works too, so
/// a factory can borrow a renderer for a frame.
#[derive(Debug)]
pub struct GeometryFactory<R> {
    renderer: R,
    state: FactoryState,
}

impl<R: BatchRenderer> GeometryFactory<R> {
    pub fn new(renderer: R) -> Self {
        Self::with_state(renderer, FactoryState::default())
    }

    pub fn with_state(renderer: R, state: FactoryState) -> Self {
        Self { renderer, state }
    }

    // ── state ─────────────────────────────────────────────────────────────

    #[inline]
    pub fn state(&self) -> &FactoryState {
        &self.state
    }

    /// Texture used by untextured shape calls. `None` draws untextured.
    pub fn set_texture(&mut self, texture: Option<TextureRef>) {
        log::debug!("factory texture -> {:?}", texture.as_ref().map(|t| t.id()));
        self.state.texture = texture;
    }

    #[inline]
    pub fn clear_texture(&mut self) {
        self.set_texture(None);
    }

    #[inline]
    pub fn texture(&self) -> Option<&TextureRef> {
        self.state.texture.as_ref()
    }

    pub fn set_group(&mut self, group: GroupId) {
        log::debug!("factory group -> {:?}", group);
        self.state.group = group;
    }

    #[inline]
    pub fn reset_group(&mut self) {
        self.set_group(GroupId::DEFAULT);
    }

    #[inline]
    pub fn group(&self) -> GroupId {
        self.state.group
    }

    pub fn set_depth(&mut self, depth: f32) {
        log::debug!("factory depth -> {depth}");
        self.state.depth = depth;
    }

    #[inline]
    pub fn depth(&self) -> f32 {
        self.state.depth
    }

    pub fn set_effects(&mut self, effects: EffectSet) {
        log::debug!("factory effects -> {:?}", effects);
        self.state.effects = effects;
    }

    #[inline]
    pub fn effects(&self) -> &EffectSet {
        &self.state.effects
    }

    #[inline]
    pub fn effects_mut(&mut self) -> &mut EffectSet {
        &mut self.state.effects
    }

    // ── renderer ──────────────────────────────────────────────────────────

    #[inline]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[inline]
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    // ── pipeline ──────────────────────────────────────────────────────────

    /// Runs the effect set, then marks the batch immediate. Lines,
    /// rectangles and polygons are therefore always immediate.
    fn prepare(&self, mut batch: Batch) -> Batch {
        self.state.effects.apply(&mut batch);
        batch.set_immediate(true);
        batch
    }

    fn finish(&mut self, shape: &'static str, batch: Batch) -> BatchHandle {
        log::trace!(
            "{shape}: {} vertices, group {:?}, depth {}",
            batch.len(),
            batch.group(),
            batch.depth()
        );
        self.renderer.submit(batch)
    }
}

fn ensure_finite(ok: bool, what: &'static str) -> Result<()> {
    if ok {
        Ok(())
    } else {
        log::warn!("rejecting non-finite {what}");
        Err(GeometryError::NonFiniteInput(what))
    }
}
