use core::ops::Mul;

use super::Vec2;

/// 2x2 rotation matrix, row-major.
///
/// Positive angles rotate +X towards +Y. With the engine's +Y-down screen
/// space that reads as clockwise on screen.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rotation {
    m: [[f32; 2]; 2],
}

impl Rotation {
    pub const IDENTITY: Self = Self { m: [[1.0, 0.0], [0.0, 1.0]] };

    #[inline]
    pub fn from_radians(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self { m: [[cos, -sin], [sin, cos]] }
    }

    #[inline]
    pub fn from_degrees(angle: f32) -> Self {
        Self::from_radians(angle.to_radians())
    }

    /// Rotation angle in radians, in `(-PI, PI]`.
    #[inline]
    pub fn angle(self) -> f32 {
        self.m[1][0].atan2(self.m[0][0])
    }

    #[inline]
    pub fn apply(self, v: Vec2) -> Vec2 {
        Vec2::new(
            self.m[0][0] * v.x + self.m[0][1] * v.y,
            self.m[1][0] * v.x + self.m[1][1] * v.y,
        )
    }

    #[inline]
    pub fn is_identity(self) -> bool {
        self == Self::IDENTITY
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Rotation {
    type Output = Rotation;

    /// `a * b` applies `b` first, then `a`.
    fn mul(self, rhs: Rotation) -> Rotation {
        let a = self.m;
        let b = rhs.m;
        Rotation {
            m: [
                [
                    a[0][0] * b[0][0] + a[0][1] * b[1][0],
                    a[0][0] * b[0][1] + a[0][1] * b[1][1],
                ],
                [
                    a[1][0] * b[0][0] + a[1][1] * b[1][0],
                    a[1][0] * b[0][1] + a[1][1] * b[1][1],
                ],
            ],
        }
    }
}

impl Mul<Vec2> for Rotation {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: Vec2) -> Vec2 {
        self.apply(rhs)
    }
}
