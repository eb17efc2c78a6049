use crate::batch::{Batch, BatchHandle, Topology, Vertex};
use crate::coords::{Polygon, Rect, TexCoords, Vec2};
use crate::error::Result;
use crate::paint::Color;
use crate::scene::BatchRenderer;

use super::{GeometryFactory, ensure_finite};

impl<R: BatchRenderer> GeometryFactory<R> {
    /// Two-vertex line batch with a color per endpoint.
    ///
    /// Endpoints get texture coordinates (0,0) and (1,1).
    pub fn draw_line(
        &mut self,
        from: Vec2,
        to: Vec2,
        from_color: Color,
        to_color: Color,
    ) -> Result<BatchHandle> {
        ensure_finite(from.is_finite() && to.is_finite(), "line endpoint")?;
        ensure_finite(from_color.is_finite() && to_color.is_finite(), "line color")?;

        let base = Batch::new(
            Topology::Lines,
            self.state.texture.clone(),
            self.state.group,
            self.state.depth,
        );
        let mut batch = self.prepare(base);
        batch.push_vertex(Vertex::new(from, from_color, TexCoords::new(0.0, 0.0)));
        batch.push_vertex(Vertex::new(to, to_color, TexCoords::new(1.0, 1.0)));

        Ok(self.finish("line", batch))
    }

    /// Quad over `rect` with one color per corner.
    ///
    /// Colors follow corner order: top-left, bottom-left, bottom-right,
    /// top-right.
    pub fn draw_rectangle(
        &mut self,
        rect: Rect,
        top_left: Color,
        bottom_left: Color,
        bottom_right: Color,
        top_right: Color,
    ) -> Result<BatchHandle> {
        ensure_finite(rect.is_finite(), "rectangle")?;
        let colors = [top_left, bottom_left, bottom_right, top_right];
        ensure_finite(colors.iter().all(|c| c.is_finite()), "rectangle color")?;

        let base = Batch::rectangle(
            rect,
            self.state.texture.clone(),
            self.state.group,
            self.state.depth,
        );
        let mut batch = self.prepare(base);
        for (v, color) in batch.vertices_mut().iter_mut().zip(colors) {
            v.color = color;
        }

        Ok(self.finish("rectangle", batch))
    }

    #[inline]
    pub fn draw_rectangle_solid(&mut self, rect: Rect, color: Color) -> Result<BatchHandle> {
        self.draw_rectangle(rect, color, color, color, color)
    }

    /// Filled polygon in a single color.
    pub fn draw_polygon(&mut self, polygon: &Polygon, color: Color) -> Result<BatchHandle> {
        let batch = self.polygon_batch(polygon, color)?;
        Ok(self.finish("polygon", batch))
    }

    /// Unsubmitted polygon batch: validated, tagged with the current
    /// texture, effects applied, colorized.
    pub(super) fn polygon_batch(&self, polygon: &Polygon, color: Color) -> Result<Batch> {
        ensure_finite(
            polygon.position().is_finite() && polygon.points().iter().all(|p| p.is_finite()),
            "polygon point",
        )?;
        ensure_finite(color.is_finite(), "polygon color")?;

        let base = Batch::polygon(
            polygon,
            self.state.texture.clone(),
            self.state.group,
            self.state.depth,
        )
        .inspect_err(|e| log::warn!("polygon: {e}"))?;
        let mut batch = self.prepare(base);
        batch.colorize(color);
        Ok(batch)
    }
}
