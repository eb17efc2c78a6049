use std::fmt;
use std::rc::Rc;

use crate::batch::Batch;

use super::Effect;

/// Ordered effects applied to every batch a factory produces.
///
/// Cloning is cheap and shares the effect objects.
#[derive(Clone, Default)]
pub struct EffectSet {
    effects: Vec<Rc<dyn Effect>>,
}

impl EffectSet {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an effect; it runs after the ones already present.
    pub fn push(&mut self, effect: impl Effect + 'static) {
        self.effects.push(Rc::new(effect));
    }

    /// Builder form of [`push`](Self::push).
    pub fn with(mut self, effect: impl Effect + 'static) -> Self {
        self.push(effect);
        self
    }

    #[inline]
    pub fn clear(&mut self) {
        self.effects.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Runs every effect on `batch`, in insertion order.
    pub fn apply(&self, batch: &mut Batch) {
        for effect in &self.effects {
            effect.apply(batch);
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.effects.iter().map(|e| e.name())
    }
}

impl fmt::Debug for EffectSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
