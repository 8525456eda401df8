use glam::{Vec2, Vec3, Vec4};

/// Renderable buffers for one surface: positions, alpha-tagged vertex colors,
/// a triangle list, normals and UVs. All per-vertex arrays share one length.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SurfaceMesh {
    pub positions: Vec<Vec3>,
    pub colors: Vec<Vec4>,
    pub indices: Vec<u32>,
    pub normals: Vec<Vec3>,
    pub uvs: Vec<Vec2>,
}

impl SurfaceMesh {
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertex_count),
            colors: Vec::with_capacity(vertex_count),
            indices: Vec::with_capacity(triangle_count * 3),
            normals: Vec::with_capacity(vertex_count),
            uvs: Vec::with_capacity(vertex_count),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices
            .chunks_exact(3)
            .map(|triangle| [triangle[0], triangle[1], triangle[2]])
    }

    /// Raw little-endian bytes of every buffer, in declaration order
    pub fn to_bytes(&self) -> Vec<u8> {
        let floats = self
            .positions
            .iter()
            .flat_map(|v| v.to_array())
            .chain(self.colors.iter().flat_map(|v| v.to_array()))
            .chain(self.normals.iter().flat_map(|v| v.to_array()))
            .chain(self.uvs.iter().flat_map(|v| v.to_array()));

        let mut bytes: Vec<u8> = floats.flat_map(f32::to_le_bytes).collect();
        bytes.extend(self.indices.iter().flat_map(|index| index.to_le_bytes()));
        bytes
    }

    pub(crate) fn push_vertex(&mut self, position: Vec3, alpha: f32, normal: Vec3) {
        self.positions.push(position);
        self.colors.push(Vec4::new(0.0, 0.0, 0.0, alpha));
        self.normals.push(normal);
        self.uvs.push(Vec2::new(position.x, position.y));
    }

    pub(crate) fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }
}
