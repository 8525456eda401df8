use log::{info, trace};

use planesync_shared::{
    MeshMaterial, RenderBackend, RigidTransform, SurfaceId, SurfaceMesh, Vec3,
};

/// Renders by logging. Stands in for a real graphics backend.
pub struct LogRenderer {
    name: &'static str,
    next_handle: u32,
    live: u32,
}

impl LogRenderer {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            next_handle: 0,
            live: 0,
        }
    }

    pub fn live(&self) -> u32 {
        self.live
    }
}

impl RenderBackend for LogRenderer {
    type MeshHandle = u32;

    fn create_mesh(&mut self, id: &SurfaceId, material: MeshMaterial) -> u32 {
        let handle = self.next_handle;
        self.next_handle += 1;
        self.live += 1;
        info!(
            "[{}] mesh #{} created for surface {} (rotation {:.2})",
            self.name, handle, id, material.texture_rotation
        );
        handle
    }

    fn set_visible(&mut self, _handle: &u32, _visible: bool) {}

    fn update_mesh(&mut self, handle: &u32, mesh: &SurfaceMesh, world_transform: &RigidTransform) {
        let Some((min, max)) = world_bounds(mesh, world_transform) else {
            return;
        };
        trace!(
            "[{}] mesh #{} spans {:.2} .. {:.2} in world space",
            self.name,
            handle,
            min,
            max
        );
    }

    fn clear_mesh(&mut self, handle: &u32) {
        info!("[{}] mesh #{} cleared", self.name, handle);
    }

    fn release_mesh(&mut self, handle: u32) {
        self.live -= 1;
        info!("[{}] mesh #{} released", self.name, handle);
    }
}

/// Axis-aligned bounds of the mesh once placed in the world
fn world_bounds(mesh: &SurfaceMesh, world_transform: &RigidTransform) -> Option<(Vec3, Vec3)> {
    mesh.positions
        .iter()
        .map(|position| world_transform.transform_point(*position))
        .fold(None, |bounds, point| match bounds {
            None => Some((point, point)),
            Some((min, max)) => Some((min.min(point), max.max(point))),
        })
}
