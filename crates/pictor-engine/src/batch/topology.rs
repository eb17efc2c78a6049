/// Primitive topology of a batch.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Topology {
    Points,
    Lines,
    LineStrip,
    Triangles,
    TriangleStrip,
    /// First vertex shared by every triangle.
    TriangleFan,
    /// Four vertices per quad, in corner order.
    Quads,
}

impl Topology {
    /// GPU topology used to draw this batch.
    ///
    /// wgpu has no fans or quads; those are drawn as triangle lists through
    /// [`triangle_indices`](Self::triangle_indices).
    pub fn to_wgpu(self) -> wgpu::PrimitiveTopology {
        match self {
            Topology::Points => wgpu::PrimitiveTopology::PointList,
            Topology::Lines => wgpu::PrimitiveTopology::LineList,
            Topology::LineStrip => wgpu::PrimitiveTopology::LineStrip,
            Topology::TriangleStrip => wgpu::PrimitiveTopology::TriangleStrip,
            Topology::Triangles | Topology::TriangleFan | Topology::Quads => {
                wgpu::PrimitiveTopology::TriangleList
            }
        }
    }

    /// Whether vertices form filled triangles.
    #[inline]
    pub fn is_filled(self) -> bool {
        !matches!(self, Topology::Points | Topology::Lines | Topology::LineStrip)
    }

    /// Triangle-list indices for `vertex_count` vertices of this topology.
    ///
    /// Returns an empty list for point and line topologies. Trailing vertices
    /// that do not complete a primitive are ignored.
    pub fn triangle_indices(self, vertex_count: usize) -> Vec<u32> {
        let n = vertex_count as u32;
        match self {
            Topology::Points | Topology::Lines | Topology::LineStrip => Vec::new(),
            Topology::Triangles => (0..n - n % 3).collect(),
            Topology::TriangleStrip => (0..n.saturating_sub(2))
                .flat_map(|i| {
                    // Odd triangles swap their first two vertices to keep winding.
                    if i % 2 == 0 { [i, i + 1, i + 2] } else { [i + 1, i, i + 2] }
                })
                .collect(),
            Topology::TriangleFan => (1..n.saturating_sub(1))
                .flat_map(|i| [0, i, i + 1])
                .collect(),
            Topology::Quads => (0..n / 4)
                .flat_map(|q| {
                    let b = q * 4;
                    [b, b + 1, b + 2, b, b + 2, b + 3]
                })
                .collect(),
        }
    }
}
