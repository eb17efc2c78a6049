use super::{Rect, Vec2};

/// Simple polygon anchored at an object-space origin.
///
/// Points are stored relative to `position`. World-space vertices are
/// `position + point`, and object-space texture mapping measures from
/// `position`.
///
/// Points are expected to describe a convex (or at least star-shaped around
/// the first point) outline; batches fan-triangulate them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    position: Vec2,
    points: Vec<Vec2>,
}

impl Polygon {
    /// Builds a polygon from points relative to `position`.
    pub fn new(position: Vec2, points: Vec<Vec2>) -> Self {
        Self { position, points }
    }

    /// Builds a polygon from world-space points. The position becomes the
    /// vertex centroid.
    pub fn from_points(world_points: &[Vec2]) -> Self {
        if world_points.is_empty() {
            return Self::default();
        }

        let sum = world_points.iter().fold(Vec2::ZERO, |acc, &p| acc + p);
        let position = sum / world_points.len() as f32;
        let points = world_points.iter().map(|&p| p - position).collect();

        Self { position, points }
    }

    /// Regular `sides`-gon of circumradius `radius` centered on `center`.
    ///
    /// The first vertex points along +X.
    pub fn regular(center: Vec2, radius: f32, sides: usize) -> Self {
        let step = core::f32::consts::TAU / sides.max(1) as f32;
        let points = (0..sides)
            .map(|i| {
                let (sin, cos) = (step * i as f32).sin_cos();
                Vec2::new(cos * radius, sin * radius)
            })
            .collect();

        Self { position: center, points }
    }

    /// The rectangle's outline, anchored at its top-left corner.
    pub fn from_rect(rect: Rect) -> Self {
        let points = rect.corners().iter().map(|&c| c - rect.origin).collect();
        Self { position: rect.origin, points }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Points relative to [`position`](Self::position).
    #[inline]
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// World-space vertices in outline order.
    pub fn world_points(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.points.iter().map(move |&p| self.position + p)
    }

    /// Returns a copy moved to `position`; the outline is unchanged.
    pub fn with_position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn from_points_uses_centroid() {
        let p = Polygon::from_points(&[
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
        ]);
        assert_eq!(p.position(), Vec2::new(5.0, 5.0));
        assert_eq!(p.points()[0], Vec2::new(-5.0, -5.0));

        let world: Vec<Vec2> = p.world_points().collect();
        assert_eq!(world[2], Vec2::new(10.0, 10.0));
    }

    #[test]
    fn from_points_empty() {
        let p = Polygon::from_points(&[]);
        assert!(p.is_empty());
        assert_eq!(p.position(), Vec2::ZERO);
    }

    #[test]
    fn regular_has_requested_sides() {
        let p = Polygon::regular(Vec2::new(50.0, 50.0), 10.0, 6);
        assert_eq!(p.len(), 6);
        for point in p.points() {
            assert_relative_eq!(point.length(), 10.0, epsilon = 1e-4);
        }
        assert_relative_eq!(p.points()[0].x, 10.0, epsilon = 1e-6);
    }

    #[test]
    fn from_rect_anchors_top_left() {
        let p = Polygon::from_rect(Rect::new(5.0, 6.0, 2.0, 3.0));
        assert_eq!(p.position(), Vec2::new(5.0, 6.0));
        let world: Vec<Vec2> = p.world_points().collect();
        assert_eq!(world, Rect::new(5.0, 6.0, 2.0, 3.0).corners().to_vec());
    }

    #[test]
    fn with_position_moves_outline() {
        let p = Polygon::new(Vec2::ZERO, vec![Vec2::new(1.0, 1.0)]).with_position(Vec2::new(3.0, 4.0));
        assert_eq!(p.world_points().next(), Some(Vec2::new(4.0, 5.0)));
    }
}
