use core::ops::{Index, IndexMut};

use crate::coords::{Polygon, Rect, Rotation, TexCoords, Vec2};
use crate::error::{GeometryError, Result};
use crate::paint::Color;
use crate::scene::GroupId;
use crate::texture::TextureRef;

use super::{BlendMode, GpuVertex, ShaderId, Topology, Vertex};

/// Texture coordinates of a whole-texture quad, in corner order.
pub const QUAD_TEX_COORDS: [TexCoords; 4] = [
    TexCoords::new(0.0, 0.0),
    TexCoords::new(0.0, 1.0),
    TexCoords::new(1.0, 1.0),
    TexCoords::new(1.0, 0.0),
];

/// Renderer-ready vertex batch plus the render state it is drawn with.
///
/// Vertex order is significant: quads index their corners top-left,
/// bottom-left, bottom-right, top-right and callers address them
/// positionally.
#[derive(Debug, Clone)]
pub struct Batch {
    vertices: Vec<Vertex>,
    topology: Topology,
    texture: Option<TextureRef>,
    group: GroupId,
    depth: f32,
    immediate: bool,
    shader: Option<ShaderId>,
    blend: BlendMode,
}

impl Batch {
    /// Empty batch with the given render tags.
    pub fn new(
        topology: Topology,
        texture: Option<TextureRef>,
        group: GroupId,
        depth: f32,
    ) -> Self {
        Self {
            vertices: Vec::new(),
            topology,
            texture,
            group,
            depth,
            immediate: false,
            shader: None,
            blend: BlendMode::default(),
        }
    }

    /// White quad covering `rect` with whole-texture coordinates.
    pub fn rectangle(
        rect: Rect,
        texture: Option<TextureRef>,
        group: GroupId,
        depth: f32,
    ) -> Self {
        let mut batch = Self::new(Topology::Quads, texture, group, depth);
        batch.vertices.reserve_exact(4);
        for (corner, uv) in rect.corners().into_iter().zip(QUAD_TEX_COORDS) {
            batch.push_vertex(Vertex::new(corner, Color::WHITE, uv));
        }
        batch
    }

    /// White triangle fan over the polygon's world-space points.
    ///
    /// Fails with [`GeometryError::EmptyPolygon`] when the polygon has no
    /// points.
    pub fn polygon(
        polygon: &Polygon,
        texture: Option<TextureRef>,
        group: GroupId,
        depth: f32,
    ) -> Result<Self> {
        if polygon.is_empty() {
            return Err(GeometryError::EmptyPolygon);
        }

        let mut batch = Self::new(Topology::TriangleFan, texture, group, depth);
        batch.vertices.reserve_exact(polygon.len());
        for p in polygon.world_points() {
            batch.push_vertex(Vertex::new(p, Color::WHITE, TexCoords::default()));
        }
        Ok(batch)
    }

    #[inline]
    pub fn push_vertex(&mut self, vertex: Vertex) {
        self.vertices.push(vertex);
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[inline]
    pub fn vertices_mut(&mut self) -> &mut [Vertex] {
        &mut self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    // ── transforms ────────────────────────────────────────────────────────

    /// Moves every vertex by `offset`.
    pub fn translate(&mut self, offset: Vec2) {
        for v in &mut self.vertices {
            v.position += offset;
        }
    }

    /// Scales every vertex component-wise about the origin.
    pub fn scale(&mut self, factor: Vec2) {
        for v in &mut self.vertices {
            v.position = v.position.mul_elem(factor);
        }
    }

    /// Rotates every vertex about the origin.
    pub fn rotate(&mut self, rotation: Rotation) {
        if rotation.is_identity() {
            return;
        }
        for v in &mut self.vertices {
            v.position = rotation.apply(v.position);
        }
    }

    /// Sets every vertex to `color`.
    pub fn colorize(&mut self, color: Color) {
        for v in &mut self.vertices {
            v.color = color;
        }
    }

    /// Axis-aligned bounds of the vertex positions, `None` when empty.
    pub fn bounds(&self) -> Option<Rect> {
        let first = self.vertices.first()?.position;
        let (min, max) = self.vertices.iter().fold((first, first), |(min, max), v| {
            (
                Vec2::new(min.x.min(v.position.x), min.y.min(v.position.y)),
                Vec2::new(max.x.max(v.position.x), max.y.max(v.position.y)),
            )
        });
        Some(Rect::from_origin_size(min, max - min))
    }

    // ── render state ──────────────────────────────────────────────────────

    #[inline]
    pub fn topology(&self) -> Topology {
        self.topology
    }

    #[inline]
    pub fn texture(&self) -> Option<&TextureRef> {
        self.texture.as_ref()
    }

    #[inline]
    pub fn set_texture(&mut self, texture: Option<TextureRef>) {
        self.texture = texture;
    }

    #[inline]
    pub fn group(&self) -> GroupId {
        self.group
    }

    #[inline]
    pub fn set_group(&mut self, group: GroupId) {
        self.group = group;
    }

    #[inline]
    pub fn depth(&self) -> f32 {
        self.depth
    }

    #[inline]
    pub fn set_depth(&mut self, depth: f32) {
        self.depth = depth;
    }

    /// Immediate batches are drawn for one frame and then released.
    #[inline]
    pub fn is_immediate(&self) -> bool {
        self.immediate
    }

    #[inline]
    pub fn set_immediate(&mut self, immediate: bool) {
        self.immediate = immediate;
    }

    #[inline]
    pub fn shader(&self) -> Option<ShaderId> {
        self.shader
    }

    #[inline]
    pub fn set_shader(&mut self, shader: Option<ShaderId>) {
        self.shader = shader;
    }

    #[inline]
    pub fn blend(&self) -> BlendMode {
        self.blend
    }

    #[inline]
    pub fn set_blend(&mut self, blend: BlendMode) {
        self.blend = blend;
    }

    // ── upload ────────────────────────────────────────────────────────────

    /// Triangle-list indices for filled topologies.
    pub fn triangle_indices(&self) -> Vec<u32> {
        self.topology.triangle_indices(self.vertices.len())
    }

    /// Vertices packed for upload.
    pub fn gpu_vertices(&self) -> Vec<GpuVertex> {
        self.vertices.iter().map(|v| v.to_gpu()).collect()
    }
}

impl Index<usize> for Batch {
    type Output = Vertex;
    #[inline]
    fn index(&self, i: usize) -> &Vertex {
        &self.vertices[i]
    }
}

impl IndexMut<usize> for Batch {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut Vertex {
        &mut self.vertices[i]
    }
}
