use super::Vec2;

/// Normalized texture coordinates. `(0, 0)` is the top-left texel corner,
/// `(1, 1)` the bottom-right.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct TexCoords {
    pub u: f32,
    pub v: f32,
}

impl TexCoords {
    #[inline]
    pub const fn new(u: f32, v: f32) -> Self {
        Self { u, v }
    }

    /// Mirrors `u` across the texture's vertical center line.
    #[inline]
    pub fn flip_u(&mut self) {
        self.u = 1.0 - self.u;
    }

    /// Mirrors `v` across the texture's horizontal center line.
    #[inline]
    pub fn flip_v(&mut self) {
        self.v = 1.0 - self.v;
    }
}

impl From<Vec2> for TexCoords {
    #[inline]
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<TexCoords> for [f32; 2] {
    #[inline]
    fn from(t: TexCoords) -> Self {
        [t.u, t.v]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flipping_twice_restores() {
        let mut t = TexCoords::new(0.25, 0.75);
        t.flip_u();
        assert_eq!(t.u, 0.75);
        t.flip_u();
        assert_eq!(t.u, 0.25);
        assert_eq!(t.v, 0.75);
    }

    #[test]
    fn flip_v_leaves_u() {
        let mut t = TexCoords::new(0.1, 0.25);
        t.flip_v();
        assert_eq!(t, TexCoords::new(0.1, 0.75));
    }
}
