use glam::Vec3;
use log::warn;

use crate::{MeshConfig, SurfaceMesh, TrackedSurface, MIN_BOUNDARY_POINTS};

/// Vertex alpha of the boundary ring: fully transparent edge
pub const OUTER_ALPHA: f32 = 0.0;
/// Vertex alpha of the interior ring: fully opaque
pub const INNER_ALPHA: f32 = 1.0;

/// Turns a boundary polygon into a double-ring, edge-feathered mesh.
///
/// Vertices are interleaved: boundary point `i` lands at `2i` and its
/// feathered interior point at `2i + 1`. The interior is a triangle fan
/// anchored at the first interior vertex, which is only correct for convex
/// boundaries. Concave input still yields a valid mesh, just a wrong-looking one.
#[derive(Clone, Debug)]
pub struct MeshBuilder {
    edge_feathering_distance: f32,
}

impl MeshBuilder {
    pub fn new(edge_feathering_distance: f32) -> Self {
        Self {
            edge_feathering_distance: edge_feathering_distance.max(0.0),
        }
    }

    pub fn from_config(config: &MeshConfig) -> Self {
        Self::new(config.edge_feathering_distance)
    }

    pub fn edge_feathering_distance(&self) -> f32 {
        self.edge_feathering_distance
    }

    /// Builds the mesh for a surface, facing along its world-space up axis
    pub fn build_surface(&self, surface: &TrackedSurface) -> SurfaceMesh {
        self.build(&surface.boundary, surface.local_to_world.up_vector())
    }

    pub fn build(&self, boundary: &[Vec3], plane_normal: Vec3) -> SurfaceMesh {
        let boundary_count = boundary.len();
        if boundary_count < MIN_BOUNDARY_POINTS {
            return SurfaceMesh::empty();
        }
        let Some(indexed_count) = indexable_boundary_count(boundary_count) else {
            warn!(
                "Boundary of {} points exceeds 32-bit mesh indices, leaving mesh empty",
                boundary_count
            );
            return SurfaceMesh::empty();
        };

        let vertex_count = boundary_count * 2;
        // interior fan (n - 2) plus two per perimeter edge
        let triangle_count = boundary_count - 2 + boundary_count * 2;
        let mut mesh = SurfaceMesh::with_capacity(vertex_count, triangle_count);

        for &boundary_point in boundary {
            let interior_point = self.feather(boundary_point);
            mesh.push_vertex(boundary_point, OUTER_ALPHA, plane_normal);
            mesh.push_vertex(interior_point, INNER_ALPHA, plane_normal);
        }

        let boundary_count = indexed_count;

        // Perimeter triangles
        for i in 0..boundary_count - 1 {
            let outer = i * 2;
            mesh.push_triangle(outer, outer + 2, outer + 1);
            mesh.push_triangle(outer + 1, outer + 2, outer + 3);
        }

        let last_outer = (boundary_count - 1) * 2;
        mesh.push_triangle(last_outer, 0, last_outer + 1);
        mesh.push_triangle(last_outer + 1, 0, 1);

        // Interior triangles
        for i in 1..boundary_count - 1 {
            mesh.push_triangle(1, i * 2 + 1, i * 2 + 3);
        }

        mesh
    }

    /// Pulls a boundary point towards the local origin by at most the
    /// feathering distance, never past the origin.
    fn feather(&self, boundary_point: Vec3) -> Vec3 {
        let distance_to_center = boundary_point.length();
        let feathering = distance_to_center.min(self.edge_feathering_distance);
        boundary_point - boundary_point.normalize_or_zero() * feathering
    }
}

/// `boundary_count` as a mesh index type, if every one of its `2n` vertices
/// can be addressed by a `u32` index.
fn indexable_boundary_count(boundary_count: usize) -> Option<u32> {
    let highest_index = boundary_count.checked_mul(2)?.checked_sub(1)?;
    u32::try_from(highest_index).ok()?;
    u32::try_from(boundary_count).ok()
}

impl Default for MeshBuilder {
    fn default() -> Self {
        Self::from_config(&MeshConfig::default())
    }
}
