use bitflags::bitflags;

use crate::batch::Batch;

bitflags! {
    /// Texture-coordinate flips for textured quads.
    ///
    /// Flags are independent; setting both mirrors the image on each axis.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct DrawFlags: u32 {
        /// Mirror horizontally (`u -> 1 - u`).
        const HFLIP = 1 << 0;
        /// Mirror vertically (`v -> 1 - v`).
        const VFLIP = 1 << 1;
    }
}

impl DrawFlags {
    /// Converts raw bits. Unknown bits are discarded.
    #[inline]
    pub const fn from_raw(bits: u32) -> Self {
        Self::from_bits_truncate(bits)
    }

    /// Applies the requested flips to every vertex of `batch`.
    pub(crate) fn apply(self, batch: &mut Batch) {
        if self.contains(Self::HFLIP) {
            for v in batch.vertices_mut() {
                v.tex_coords.flip_u();
            }
        }
        if self.contains(Self::VFLIP) {
            for v in batch.vertices_mut() {
                v.tex_coords.flip_v();
            }
        }
    }
}
