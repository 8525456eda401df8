use glam::Vec3;

use crate::{Color, RigidTransform, SurfaceId};

/// Minimum boundary length for a surface to have renderable geometry
pub const MIN_BOUNDARY_POINTS: usize = 3;

/// A detected planar region: identity, boundary polygon and pose.
///
/// `boundary` is expressed in the surface's local space and is ordered: point
/// `i` connects to point `(i + 1) % len`.
#[derive(Clone, Debug, PartialEq)]
pub struct TrackedSurface {
    id: SurfaceId,
    pub boundary: Vec<Vec3>,
    pub local_to_world: RigidTransform,
    pub local_to_tracking: RigidTransform,
    pub debug_label: String,
    pub color: Color,
}

impl TrackedSurface {
    pub fn new(id: SurfaceId, color: Color, debug_label: impl Into<String>) -> Self {
        Self {
            id,
            boundary: Vec::new(),
            local_to_world: RigidTransform::IDENTITY,
            local_to_tracking: RigidTransform::IDENTITY,
            debug_label: debug_label.into(),
            color,
        }
    }

    pub fn id(&self) -> SurfaceId {
        self.id
    }

    pub fn has_geometry(&self) -> bool {
        self.boundary.len() >= MIN_BOUNDARY_POINTS
    }

    /// Overwrites the mutable geometry fields. The caller has already matched ids.
    pub fn apply_update(&mut self, update: &SurfaceUpdate) {
        self.boundary.clone_from(&update.boundary);
        self.local_to_world = update.local_to_world;
        self.local_to_tracking = update.local_to_tracking;
    }
}

/// The mutable part of a [`TrackedSurface`], as carried by update requests
#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceUpdate {
    pub id: SurfaceId,
    pub boundary: Vec<Vec3>,
    pub local_to_world: RigidTransform,
    pub local_to_tracking: RigidTransform,
}
