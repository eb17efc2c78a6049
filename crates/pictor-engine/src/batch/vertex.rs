use bytemuck::{Pod, Zeroable};

use crate::coords::{TexCoords, Vec2};
use crate::paint::Color;

/// One batch vertex. Identity is its slot in the batch.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vertex {
    pub position: Vec2,
    pub color: Color,
    pub tex_coords: TexCoords,
}

impl Vertex {
    #[inline]
    pub const fn new(position: Vec2, color: Color, tex_coords: TexCoords) -> Self {
        Self { position, color, tex_coords }
    }

    #[inline]
    pub fn to_gpu(self) -> GpuVertex {
        GpuVertex {
            position: self.position.into(),
            tex_coords: self.tex_coords.into(),
            color: self.color.to_array(),
        }
    }
}

/// Packed vertex as uploaded to a vertex buffer.
///
/// ```text
/// offset 0   position   Float32x2  @location(0)
/// offset 8   tex_coords Float32x2  @location(1)
/// offset 16  color      Float32x4  @location(2)
/// ```
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct GpuVertex {
    pub position: [f32; 2],
    pub tex_coords: [f32; 2],
    pub color: [f32; 4],
}

impl GpuVertex {
    const ATTRS: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        0 => Float32x2, // position
        1 => Float32x2, // tex_coords
        2 => Float32x4  // color
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<GpuVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}
