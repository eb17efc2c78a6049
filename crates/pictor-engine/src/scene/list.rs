use crate::batch::{Batch, BatchHandle};

use super::{BatchRenderer, SortKey};

/// A submitted batch plus its submission index.
#[derive(Debug, Clone)]
pub struct ListItem {
    pub order: u32,
    pub handle: BatchHandle,
}

/// Retention list for submitted batches.
///
/// Performance characteristics:
/// - `submit()` is O(1)
/// - draw-order iteration reuses internal key/index buffers; no per-frame
///   allocation once warmed
///
/// Sort keys are read from the live batches on every draw-order pass, so
/// edits made through a handle after submission (depth, group) are honored.
///
/// # Frames
///
/// Call [`end_frame`](Self::end_frame) after drawing. Immediate batches are
/// released there; retained batches stay until [`clear`](Self::clear) or
/// until a holder marks them immediate.
#[derive(Debug, Default)]
pub struct BatchList {
    items: Vec<ListItem>,
    next_order: u32,

    keys: Vec<SortKey>,
    sorted_indices: Vec<usize>,
}

impl BatchList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops every batch. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.keys.clear();
        self.sorted_indices.clear();
    }

    /// Items in submission order.
    #[inline]
    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of batches that will survive the next [`end_frame`](Self::end_frame).
    pub fn retained_len(&self) -> usize {
        self.items
            .iter()
            .filter(|item| !item.handle.borrow().is_immediate())
            .count()
    }

    /// Total vertices across all held batches.
    pub fn vertex_count(&self) -> usize {
        self.items.iter().map(|item| item.handle.borrow().len()).sum()
    }

    /// Adds an existing handle, e.g. one the caller re-submits for a frame.
    pub fn push(&mut self, handle: BatchHandle) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);
        self.items.push(ListItem { order, handle });
    }

    /// Iterates batches in draw order (back-to-front).
    ///
    /// # Panics
    /// Panics if any held batch is mutably borrowed while the keys are read.
    pub fn iter_in_draw_order(&mut self) -> impl Iterator<Item = &BatchHandle> {
        self.rebuild_sorted_indices();
        self.sorted_indices.iter().map(|&i| &self.items[i].handle)
    }

    /// Releases immediate batches. Returns how many were released.
    pub fn end_frame(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !item.handle.borrow().is_immediate());
        let released = before - self.items.len();

        log::debug!(
            "end_frame: released {released} immediate batches, retained {}",
            self.items.len()
        );
        released
    }

    fn rebuild_sorted_indices(&mut self) {
        self.keys.clear();
        self.keys.extend(
            self.items
                .iter()
                .map(|item| SortKey::for_batch(&item.handle.borrow(), item.order)),
        );

        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        // Stable ordering is ensured by SortKey including submission order.
        let keys = &self.keys;
        self.sorted_indices.sort_by(|&a, &b| keys[a].cmp(&keys[b]));
    }
}

impl BatchRenderer for BatchList {
    fn submit(&mut self, batch: Batch) -> BatchHandle {
        let handle = BatchHandle::new(batch);
        self.push(handle.clone());
        handle
    }
}
