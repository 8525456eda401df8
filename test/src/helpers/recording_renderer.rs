use std::collections::BTreeMap;

use planesync_shared::{
    MeshMaterial, RenderBackend, RigidTransform, SurfaceId, SurfaceMesh, Vec3,
};

/// Render resource id handed out by the [`RecordingRenderer`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MeshResource(u64);

#[derive(Clone, Debug, PartialEq)]
pub enum RenderCall {
    Create(SurfaceId),
    SetVisible(SurfaceId, bool),
    Update(SurfaceId),
    Clear(SurfaceId),
    Release(SurfaceId),
}

/// A live resource as the renderer sees it
#[derive(Clone, Debug)]
pub struct LiveMesh {
    pub surface: SurfaceId,
    pub material: MeshMaterial,
    pub visible: bool,
    pub mesh: SurfaceMesh,
    pub world_transform: RigidTransform,
}

impl LiveMesh {
    /// Mesh vertices as they end up in the world
    pub fn world_positions(&self) -> Vec<Vec3> {
        self.mesh
            .positions
            .iter()
            .map(|position| self.world_transform.transform_point(*position))
            .collect()
    }
}

/// A render backend that only remembers what it was asked to do
#[derive(Default)]
pub struct RecordingRenderer {
    next_resource: u64,
    live: BTreeMap<MeshResource, LiveMesh>,
    calls: Vec<RenderCall>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn live_for(&self, surface: &SurfaceId) -> Option<&LiveMesh> {
        self.live.values().find(|live| live.surface == *surface)
    }

    pub fn calls(&self) -> &[RenderCall] {
        &self.calls
    }

    pub fn take_calls(&mut self) -> Vec<RenderCall> {
        std::mem::take(&mut self.calls)
    }

    pub fn count_calls(&self, matches: impl Fn(&RenderCall) -> bool) -> usize {
        self.calls.iter().filter(|call| matches(call)).count()
    }

    fn live_mut(&mut self, handle: &MeshResource) -> &mut LiveMesh {
        self.live
            .get_mut(handle)
            .unwrap_or_else(|| panic!("{:?} used after release", handle))
    }
}

impl RenderBackend for RecordingRenderer {
    type MeshHandle = MeshResource;

    fn create_mesh(&mut self, id: &SurfaceId, material: MeshMaterial) -> MeshResource {
        let handle = MeshResource(self.next_resource);
        self.next_resource += 1;
        self.live.insert(
            handle,
            LiveMesh {
                surface: *id,
                material,
                visible: false,
                mesh: SurfaceMesh::empty(),
                world_transform: RigidTransform::IDENTITY,
            },
        );
        self.calls.push(RenderCall::Create(*id));
        handle
    }

    fn set_visible(&mut self, handle: &MeshResource, visible: bool) {
        let live = self.live_mut(handle);
        live.visible = visible;
        let surface = live.surface;
        self.calls.push(RenderCall::SetVisible(surface, visible));
    }

    fn update_mesh(
        &mut self,
        handle: &MeshResource,
        mesh: &SurfaceMesh,
        world_transform: &RigidTransform,
    ) {
        let live = self.live_mut(handle);
        live.mesh = mesh.clone();
        live.world_transform = *world_transform;
        let surface = live.surface;
        self.calls.push(RenderCall::Update(surface));
    }

    fn clear_mesh(&mut self, handle: &MeshResource) {
        let live = self.live_mut(handle);
        live.mesh = SurfaceMesh::empty();
        let surface = live.surface;
        self.calls.push(RenderCall::Clear(surface));
    }

    fn release_mesh(&mut self, handle: MeshResource) {
        let live = self
            .live
            .remove(&handle)
            .unwrap_or_else(|| panic!("{:?} released twice", handle));
        self.calls.push(RenderCall::Release(live.surface));
    }
}
