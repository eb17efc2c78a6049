use crate::batch::{Batch, BatchHandle};
use crate::coords::{Polygon, Rect, Rotation, TexCoords, Vec2};
use crate::error::Result;
use crate::paint::Color;
use crate::scene::BatchRenderer;
use crate::texture::TextureRef;

use super::{DrawFlags, GeometryFactory, ensure_finite};

impl<R: BatchRenderer> GeometryFactory<R> {
    /// Polygon textured by planar projection: one texel per pixel.
    ///
    /// Texture coordinates are measured from the polygon's position, or from
    /// the screen origin when `screen_space` is set. The factory texture is
    /// left at `None` afterwards, whatever it was before.
    pub fn draw_textured_polygon(
        &mut self,
        polygon: &Polygon,
        texture: &TextureRef,
        color: Color,
        screen_space: bool,
    ) -> Result<BatchHandle> {
        self.state.texture = Some(texture.clone());
        let built = self.polygon_batch(polygon, color);
        self.state.texture = None;
        let mut batch = built?;

        let s_plane = Vec2::new(1.0 / texture.width() as f32, 0.0);
        let t_plane = Vec2::new(0.0, 1.0 / texture.height() as f32);
        let origin = if screen_space {
            Vec2::ZERO
        } else {
            polygon.position()
        };

        for v in batch.vertices_mut() {
            let p = v.position - origin;
            v.tex_coords = TexCoords::new(s_plane.dot(p), t_plane.dot(p));
        }

        Ok(self.finish("textured_polygon", batch))
    }

    /// Whole texture as a quad whose top-left corner lands on `position`
    /// when unrotated and unscaled.
    ///
    /// The quad is built around its center, scaled, rotated, then moved to
    /// `position + size / 2`.
    pub fn draw_texture(
        &mut self,
        texture: &TextureRef,
        position: Vec2,
        rotation: Rotation,
        scale: Vec2,
        color: Color,
        flags: DrawFlags,
    ) -> Result<BatchHandle> {
        ensure_finite(position.is_finite() && scale.is_finite(), "texture placement")?;
        ensure_finite(color.is_finite(), "texture color")?;

        let size = texture.size();
        let mut batch = self.textured_quad(texture, size);
        place(&mut batch, position + size / 2.0, rotation, scale, color);
        flags.apply(&mut batch);

        Ok(self.finish("texture", batch))
    }

    /// Unrotated, unscaled, untinted [`draw_texture`](Self::draw_texture).
    #[inline]
    pub fn draw_texture_simple(
        &mut self,
        texture: &TextureRef,
        position: Vec2,
    ) -> Result<BatchHandle> {
        self.draw_texture(
            texture,
            position,
            Rotation::IDENTITY,
            Vec2::ONE,
            Color::WHITE,
            DrawFlags::empty(),
        )
    }

    /// Sub-rectangle `source` (in texels) of `texture`, drawn at the
    /// source's size.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_texture_part(
        &mut self,
        texture: &TextureRef,
        position: Vec2,
        source: Rect,
        rotation: Rotation,
        scale: Vec2,
        color: Color,
        flags: DrawFlags,
    ) -> Result<BatchHandle> {
        ensure_finite(
            position.is_finite() && scale.is_finite() && source.is_finite(),
            "texture part placement",
        )?;
        ensure_finite(color.is_finite(), "texture color")?;

        let size = source.size;
        let mut batch = self.textured_quad(texture, size);
        place(&mut batch, position + size / 2.0, rotation, scale, color);

        let texels = texture.size();
        let uv_rect = Rect::from_origin_size(
            source.origin.div_elem(texels),
            source.size.div_elem(texels),
        );
        for (v, corner) in batch.vertices_mut().iter_mut().zip(uv_rect.corners()) {
            v.tex_coords = corner.into();
        }
        flags.apply(&mut batch);

        Ok(self.finish("texture_part", batch))
    }

    /// Centered quad for `texture`. Marked immediate before the effects run,
    /// so an effect may retain it.
    fn textured_quad(&self, texture: &TextureRef, size: Vec2) -> Batch {
        let mut batch = Batch::rectangle(
            Rect::centered(size),
            Some(texture.clone()),
            self.state.group,
            self.state.depth,
        );
        batch.set_immediate(true);
        self.state.effects.apply(&mut batch);
        batch
    }
}

/// Scale, rotate about the quad center, move to `center`, then tint.
fn place(batch: &mut Batch, center: Vec2, rotation: Rotation, scale: Vec2, color: Color) {
    batch.scale(scale);
    batch.rotate(rotation);
    batch.translate(center);
    batch.colorize(color);
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::batch::{Batch, BatchHandle, QUAD_TEX_COORDS, Topology};
    use crate::coords::{Polygon, Rect, Rotation, TexCoords, Vec2};
    use crate::error::GeometryError;
    use crate::factory::{DrawFlags, GeometryFactory};
    use crate::paint::Color;
    use crate::scene::{BatchList, BatchRenderer};
    use crate::texture::{Texture, TextureId, TextureRef};

    fn factory() -> GeometryFactory<BatchList> {
        GeometryFactory::new(BatchList::new())
    }

    /// Records each batch's packed texture coordinates as it is submitted.
    #[derive(Default)]
    struct UploadRecorder {
        uploaded: Vec<Vec<[f32; 2]>>,
    }

    impl BatchRenderer for UploadRecorder {
        fn submit(&mut self, batch: Batch) -> BatchHandle {
            self.uploaded
                .push(batch.gpu_vertices().iter().map(|v| v.tex_coords).collect());
            BatchHandle::new(batch)
        }
    }

    fn tex_100x50() -> TextureRef {
        Texture::new(TextureId(1), 100, 50).unwrap()
    }

    fn triangle_at(position: Vec2) -> Polygon {
        Polygon::new(
            position,
            vec![Vec2::new(0.0, 0.0), Vec2::new(50.0, 0.0), Vec2::new(50.0, 25.0)],
        )
    }

    fn positions(f: &GeometryFactory<BatchList>) -> Vec<Vec2> {
        let handle = &f.renderer().items()[0].handle;
        handle.borrow().vertices().iter().map(|v| v.position).collect()
    }

    fn uvs(f: &GeometryFactory<BatchList>) -> Vec<TexCoords> {
        let handle = &f.renderer().items()[0].handle;
        handle.borrow().vertices().iter().map(|v| v.tex_coords).collect()
    }

    // ── textured polygon ──────────────────────────────────────────────────

    #[test]
    fn textured_polygon_maps_object_space() {
        let mut f = factory();
        let tex = tex_100x50();
        let h = f
            .draw_textured_polygon(&triangle_at(Vec2::new(10.0, 10.0)), &tex, Color::WHITE, false)
            .unwrap();

        assert_eq!(h.borrow().texture().map(|t| t.id()), Some(TextureId(1)));
        let expected = [(0.0, 0.0), (0.5, 0.0), (0.5, 0.5)];
        for (uv, (u, v)) in uvs(&f).into_iter().zip(expected) {
            assert_relative_eq!(uv.u, u, epsilon = 1e-6);
            assert_relative_eq!(uv.v, v, epsilon = 1e-6);
        }
    }

    #[test]
    fn textured_polygon_maps_screen_space() {
        let mut f = factory();
        let tex = tex_100x50();
        f.draw_textured_polygon(&triangle_at(Vec2::new(10.0, 10.0)), &tex, Color::WHITE, true)
            .unwrap();

        let uv = uvs(&f);
        assert_relative_eq!(uv[0].u, 0.1, epsilon = 1e-6);
        assert_relative_eq!(uv[0].v, 0.2, epsilon = 1e-6);
        assert_relative_eq!(uv[2].u, 0.6, epsilon = 1e-6);
        assert_relative_eq!(uv[2].v, 0.7, epsilon = 1e-6);
    }

    #[test]
    fn textured_polygon_is_complete_when_submitted() {
        let mut f = GeometryFactory::new(UploadRecorder::default());
        let polygon = triangle_at(Vec2::new(10.0, 10.0));
        let h = f
            .draw_textured_polygon(&polygon, &tex_100x50(), Color::WHITE, false)
            .unwrap();

        let uploaded = &f.renderer().uploaded;
        assert_eq!(uploaded.len(), 1);
        let expected = [[0.0, 0.0], [0.5, 0.0], [0.5, 0.5]];
        for (uv, want) in uploaded[0].iter().zip(expected) {
            assert_relative_eq!(uv[0], want[0], epsilon = 1e-6);
            assert_relative_eq!(uv[1], want[1], epsilon = 1e-6);
        }

        let returned: Vec<[f32; 2]> =
            h.borrow().gpu_vertices().iter().map(|v| v.tex_coords).collect();
        assert_eq!(uploaded[0], returned);
    }

    #[test]
    fn textured_polygon_clears_factory_texture() {
        let mut f = factory();
        f.set_texture(Some(Texture::new(TextureId(9), 2, 2).unwrap()));
        f.draw_textured_polygon(&triangle_at(Vec2::ZERO), &tex_100x50(), Color::WHITE, false)
            .unwrap();
        assert!(f.texture().is_none());
    }

    #[test]
    fn textured_polygon_clears_texture_on_error() {
        let mut f = factory();
        f.set_texture(Some(Texture::new(TextureId(9), 2, 2).unwrap()));
        let err = f
            .draw_textured_polygon(&Polygon::default(), &tex_100x50(), Color::WHITE, false)
            .unwrap_err();
        assert_eq!(err, GeometryError::EmptyPolygon);
        assert!(f.texture().is_none());
        assert!(f.renderer().is_empty());
    }

    // ── whole texture ─────────────────────────────────────────────────────

    #[test]
    fn texture_lands_on_position() {
        let mut f = factory();
        let h = f
            .draw_texture_simple(&tex_100x50(), Vec2::new(5.0, 7.0))
            .unwrap();

        let b = h.borrow();
        assert_eq!(b.topology(), Topology::Quads);
        assert!(b.is_immediate());
        drop(b);

        assert_eq!(
            positions(&f),
            vec![
                Vec2::new(5.0, 7.0),
                Vec2::new(5.0, 57.0),
                Vec2::new(105.0, 57.0),
                Vec2::new(105.0, 7.0),
            ]
        );
        assert_eq!(uvs(&f), QUAD_TEX_COORDS.to_vec());
    }

    #[test]
    fn texture_scales_about_its_center() {
        let mut f = factory();
        f.draw_texture(
            &tex_100x50(),
            Vec2::ZERO,
            Rotation::IDENTITY,
            Vec2::new(2.0, 2.0),
            Color::WHITE,
            DrawFlags::empty(),
        )
        .unwrap();

        let p = positions(&f);
        assert_eq!(p[0], Vec2::new(-50.0, -25.0));
        assert_eq!(p[2], Vec2::new(150.0, 75.0));
    }

    #[test]
    fn texture_rotates_about_its_center() {
        let mut f = factory();
        f.draw_texture(
            &tex_100x50(),
            Vec2::ZERO,
            Rotation::from_degrees(90.0),
            Vec2::ONE,
            Color::WHITE,
            DrawFlags::empty(),
        )
        .unwrap();

        // Top-left (-50, -25) about the center turns to (25, -50).
        let p = positions(&f);
        assert_relative_eq!(p[0].x, 75.0, epsilon = 1e-4);
        assert_relative_eq!(p[0].y, -25.0, epsilon = 1e-4);

        let sum = p.iter().fold(Vec2::ZERO, |acc, &v| acc + v);
        let center = sum / 4.0;
        assert_relative_eq!(center.x, 50.0, epsilon = 1e-4);
        assert_relative_eq!(center.y, 25.0, epsilon = 1e-4);
    }

    #[test]
    fn texture_tint_and_flip() {
        let mut f = factory();
        let tint = Color::new(1.0, 0.5, 0.5, 0.75);
        f.draw_texture(
            &tex_100x50(),
            Vec2::ZERO,
            Rotation::IDENTITY,
            Vec2::ONE,
            tint,
            DrawFlags::HFLIP,
        )
        .unwrap();

        let handle = &f.renderer().items()[0].handle;
        assert!(handle.borrow().vertices().iter().all(|v| v.color == tint));
        assert_eq!(
            uvs(&f),
            vec![
                TexCoords::new(1.0, 0.0),
                TexCoords::new(1.0, 1.0),
                TexCoords::new(0.0, 1.0),
                TexCoords::new(0.0, 0.0),
            ]
        );
    }

    #[test]
    fn texture_ignores_factory_texture() {
        let mut f = factory();
        f.set_texture(Some(Texture::new(TextureId(9), 2, 2).unwrap()));
        let h = f.draw_texture_simple(&tex_100x50(), Vec2::ZERO).unwrap();
        assert_eq!(h.borrow().texture().map(|t| t.id()), Some(TextureId(1)));
        assert_eq!(f.texture().map(|t| t.id()), Some(TextureId(9)));
    }

    #[test]
    fn texture_rejects_non_finite_scale() {
        let mut f = factory();
        let err = f
            .draw_texture(
                &tex_100x50(),
                Vec2::ZERO,
                Rotation::IDENTITY,
                Vec2::new(f32::NAN, 1.0),
                Color::WHITE,
                DrawFlags::empty(),
            )
            .unwrap_err();
        assert!(matches!(err, GeometryError::NonFiniteInput(_)));
    }

    // ── texture part ──────────────────────────────────────────────────────

    #[test]
    fn texture_part_normalizes_source() {
        let mut f = factory();
        f.draw_texture_part(
            &tex_100x50(),
            Vec2::new(1.0, 2.0),
            Rect::new(10.0, 10.0, 20.0, 10.0),
            Rotation::IDENTITY,
            Vec2::ONE,
            Color::WHITE,
            DrawFlags::empty(),
        )
        .unwrap();

        let expected = [(0.1, 0.2), (0.1, 0.4), (0.3, 0.4), (0.3, 0.2)];
        for (uv, (u, v)) in uvs(&f).into_iter().zip(expected) {
            assert_relative_eq!(uv.u, u, epsilon = 1e-6);
            assert_relative_eq!(uv.v, v, epsilon = 1e-6);
        }

        let p = positions(&f);
        assert_eq!(p[0], Vec2::new(1.0, 2.0));
        assert_eq!(p[2], Vec2::new(21.0, 12.0));
    }

    #[test]
    fn texture_part_vflip_inverts_v_only() {
        let mut f = factory();
        f.draw_texture_part(
            &tex_100x50(),
            Vec2::ZERO,
            Rect::new(0.0, 0.0, 50.0, 25.0),
            Rotation::IDENTITY,
            Vec2::ONE,
            Color::WHITE,
            DrawFlags::VFLIP,
        )
        .unwrap();

        assert_eq!(
            uvs(&f),
            vec![
                TexCoords::new(0.0, 1.0),
                TexCoords::new(0.0, 0.5),
                TexCoords::new(0.5, 0.5),
                TexCoords::new(0.5, 1.0),
            ]
        );
    }

    #[test]
    fn textured_quads_can_be_retained_by_effects() {
        let mut f = factory();
        f.effects_mut().push(|b: &mut Batch| b.set_immediate(false));

        let whole = f.draw_texture_simple(&tex_100x50(), Vec2::ZERO).unwrap();
        let part = f
            .draw_texture_part(
                &tex_100x50(),
                Vec2::ZERO,
                Rect::new(0.0, 0.0, 10.0, 10.0),
                Rotation::IDENTITY,
                Vec2::ONE,
                Color::WHITE,
                DrawFlags::empty(),
            )
            .unwrap();
        assert!(!whole.borrow().is_immediate());
        assert!(!part.borrow().is_immediate());

        let rect = f
            .draw_rectangle_solid(Rect::new(0.0, 0.0, 1.0, 1.0), Color::WHITE)
            .unwrap();
        assert!(rect.borrow().is_immediate());
        assert_eq!(f.renderer_mut().end_frame(), 1);
    }

    #[test]
    fn texture_part_covering_everything_matches_whole_texture() {
        let tex = tex_100x50();
        let mut whole = factory();
        let mut part = factory();
        whole.draw_texture_simple(&tex, Vec2::new(3.0, 4.0)).unwrap();
        part.draw_texture_part(
            &tex,
            Vec2::new(3.0, 4.0),
            Rect::new(0.0, 0.0, 100.0, 50.0),
            Rotation::IDENTITY,
            Vec2::ONE,
            Color::WHITE,
            DrawFlags::empty(),
        )
        .unwrap();

        assert_eq!(positions(&whole), positions(&part));
        assert_eq!(uvs(&whole), uvs(&part));
    }
}
