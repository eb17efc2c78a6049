use crate::batch::{Batch, BlendMode, ShaderId};

use super::Effect;

/// Assigns a shader program to every batch.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ShaderEffect(pub ShaderId);

impl Effect for ShaderEffect {
    fn apply(&self, batch: &mut Batch) {
        batch.set_shader(Some(self.0));
    }

    fn name(&self) -> &str {
        "shader"
    }
}

/// Assigns a blend mode to every batch.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct BlendEffect(pub BlendMode);

impl Effect for BlendEffect {
    fn apply(&self, batch: &mut Batch) {
        batch.set_blend(self.0);
    }

    fn name(&self) -> &str {
        "blend"
    }
}
