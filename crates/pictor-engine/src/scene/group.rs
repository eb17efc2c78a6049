/// Render group a batch belongs to.
///
/// Groups carry renderer-side state (for example a group-wide shader) and
/// are opaque to geometry generation.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct GroupId(pub i32);

impl GroupId {
    pub const DEFAULT: Self = Self(0);

    #[inline]
    pub const fn new(v: i32) -> Self {
        Self(v)
    }
}
