use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use super::Batch;

/// Shared handle to a submitted batch.
///
/// The caller and the renderer's retention list both hold one. The batch is
/// released when the last clone is dropped. Edits through any clone are seen
/// by every holder, so a caller may adjust a batch after submission.
#[derive(Debug, Clone)]
pub struct BatchHandle(Rc<RefCell<Batch>>);

impl BatchHandle {
    pub fn new(batch: Batch) -> Self {
        Self(Rc::new(RefCell::new(batch)))
    }

    /// Immutable view of the batch.
    ///
    /// # Panics
    /// Panics if the batch is currently borrowed mutably.
    #[inline]
    pub fn borrow(&self) -> Ref<'_, Batch> {
        self.0.borrow()
    }

    /// Mutable view of the batch.
    ///
    /// # Panics
    /// Panics if the batch is currently borrowed.
    #[inline]
    pub fn borrow_mut(&self) -> RefMut<'_, Batch> {
        self.0.borrow_mut()
    }

    /// Whether both handles refer to the same batch.
    #[inline]
    pub fn ptr_eq(&self, other: &BatchHandle) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Number of live holders.
    #[inline]
    pub fn holders(&self) -> usize {
        Rc::strong_count(&self.0)
    }

    /// Releases the batch if this is the only holder.
    pub fn try_unwrap(self) -> Result<Batch, BatchHandle> {
        Rc::try_unwrap(self.0)
            .map(RefCell::into_inner)
            .map_err(BatchHandle)
    }
}

impl From<Batch> for BatchHandle {
    fn from(batch: Batch) -> Self {
        Self::new(batch)
    }
}
