use core::cmp::Ordering;

use crate::batch::Batch;

use super::GroupId;

/// Stable sort key for submitted batches.
///
/// Ordering rules:
/// 1) `depth`: ascending (back-to-front)
/// 2) `group`: ascending, so same-state batches sit together within a depth
/// 3) `order`: ascending (submission order for equal depth and group)
#[derive(Debug, Copy, Clone)]
pub struct SortKey {
    pub depth: f32,
    pub group: GroupId,
    pub order: u32,
}

impl SortKey {
    #[inline]
    pub const fn new(depth: f32, group: GroupId, order: u32) -> Self {
        Self { depth, group, order }
    }

    #[inline]
    pub fn for_batch(batch: &Batch, order: u32) -> Self {
        Self::new(batch.depth(), batch.group(), order)
    }
}

impl Ord for SortKey {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.depth
            .total_cmp(&other.depth)
            .then(self.group.cmp(&other.group))
            .then(self.order.cmp(&other.order))
    }
}

impl PartialOrd for SortKey {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SortKey {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SortKey {}
