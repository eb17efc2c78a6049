use crate::batch::{Batch, BatchHandle};

/// Renderer-side seam the geometry factory hands finished batches to.
///
/// Implementations wrap the batch in a shared handle and decide whether to
/// keep it: immediate batches live for one frame, others until released.
pub trait BatchRenderer {
    fn submit(&mut self, batch: Batch) -> BatchHandle;
}

impl<R: BatchRenderer + ?Sized> BatchRenderer for &mut R {
    #[inline]
    fn submit(&mut self, batch: Batch) -> BatchHandle {
        (**self).submit(batch)
    }
}
