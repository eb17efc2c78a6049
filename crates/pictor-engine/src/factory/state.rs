use crate::effect::EffectSet;
use crate::scene::GroupId;
use crate::texture::TextureRef;

/// Render state a factory stamps onto every batch it produces.
///
/// Owned by one factory instance; two factories never share it.
#[derive(Debug, Clone, Default)]
pub struct FactoryState {
    /// Texture for untextured shape calls (lines, rectangles, polygons).
    pub texture: Option<TextureRef>,
    pub group: GroupId,
    pub depth: f32,
    pub effects: EffectSet,
}

impl FactoryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_group(mut self, group: GroupId) -> Self {
        self.group = group;
        self
    }

    pub fn with_depth(mut self, depth: f32) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_effects(mut self, effects: EffectSet) -> Self {
        self.effects = effects;
        self
    }
}
