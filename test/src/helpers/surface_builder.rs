use planesync_shared::{
    Color, NativeHandle, NativePlane, RigidTransform, SurfaceId, SurfaceUpdate, TrackedSurface,
    TrackingState, Vec3,
};

/// Square boundary centred on the local origin, counter-clockwise from +X+Y
pub fn square_boundary(half_extent: f32) -> Vec<Vec3> {
    vec![
        Vec3::new(half_extent, half_extent, 0.0),
        Vec3::new(half_extent, -half_extent, 0.0),
        Vec3::new(-half_extent, -half_extent, 0.0),
        Vec3::new(-half_extent, half_extent, 0.0),
    ]
}

/// Regular polygon with `sides` points on a circle of `radius`
pub fn regular_boundary(sides: usize, radius: f32) -> Vec<Vec3> {
    (0..sides)
        .map(|i| {
            let angle = i as f32 / sides as f32 * std::f32::consts::TAU;
            Vec3::new(angle.cos() * radius, angle.sin() * radius, 0.0)
        })
        .collect()
}

/// A surface with a unit square boundary
pub fn surface(id: u128) -> TrackedSurface {
    let mut surface = TrackedSurface::new(
        SurfaceId::from_u128(id),
        Color::rgb(40, 160, 255),
        format!("surface-{}", id),
    );
    surface.boundary = square_boundary(1.0);
    surface
}

pub fn update(id: u128, boundary: Vec<Vec3>) -> SurfaceUpdate {
    SurfaceUpdate {
        id: SurfaceId::from_u128(id),
        boundary,
        local_to_world: RigidTransform::IDENTITY,
        local_to_tracking: RigidTransform::IDENTITY,
    }
}

/// Builder for native planes as the tracking subsystem would report them
pub struct TestPlane {
    plane: NativePlane,
}

impl TestPlane {
    pub fn new(handle: u64) -> Self {
        Self {
            plane: NativePlane {
                handle: NativeHandle::new(handle),
                boundary: square_boundary(0.5),
                local_to_world: RigidTransform::IDENTITY,
                local_to_tracking: RigidTransform::IDENTITY,
                subsumed_by: None,
                tracking_state: TrackingState::Tracking,
                debug_name: format!("plane-{}", handle),
            },
        }
    }

    pub fn boundary(mut self, boundary: Vec<Vec3>) -> Self {
        self.plane.boundary = boundary;
        self
    }

    pub fn at(mut self, translation: Vec3) -> Self {
        self.plane.local_to_world = RigidTransform::from_translation(translation);
        self.plane.local_to_tracking = RigidTransform::from_translation(translation);
        self
    }

    pub fn merged_into(mut self, handle: u64) -> Self {
        self.plane.subsumed_by = Some(NativeHandle::new(handle));
        self
    }

    pub fn state(mut self, tracking_state: TrackingState) -> Self {
        self.plane.tracking_state = tracking_state;
        self
    }

    pub fn build(self) -> NativePlane {
        self.plane
    }
}
