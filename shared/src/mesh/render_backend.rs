use glam::Vec4;

use crate::{RigidTransform, SurfaceId, SurfaceMesh};

/// Material parameters for a surface's render resource
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshMaterial {
    /// Linear-space tint
    pub tint: Vec4,
    /// Texture rotation, in turns, within `[0, 1)`
    pub texture_rotation: f32,
}

/// The rendering collaborator. Owns the actual GPU / engine resources; the
/// mesh cache only keeps the handles it returns.
pub trait RenderBackend {
    type MeshHandle;

    fn create_mesh(&mut self, id: &SurfaceId, material: MeshMaterial) -> Self::MeshHandle;

    fn set_visible(&mut self, handle: &Self::MeshHandle, visible: bool);

    /// Replaces the handle's geometry and places it at `world_transform`
    fn update_mesh(
        &mut self,
        handle: &Self::MeshHandle,
        mesh: &SurfaceMesh,
        world_transform: &RigidTransform,
    );

    fn clear_mesh(&mut self, handle: &Self::MeshHandle);

    fn release_mesh(&mut self, handle: Self::MeshHandle);
}
