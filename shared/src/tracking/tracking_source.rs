use glam::Vec3;

use crate::RigidTransform;

/// Opaque identity of a geometry object inside the native tracking subsystem
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct NativeHandle(u64);

impl NativeHandle {
    pub fn new(value: u64) -> Self {
        Self(value)
    }
}

/// Overall tracking confidence reported by the device
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackingQuality {
    NotTracking,
    OrientationOnly,
    OrientationAndPosition,
}

impl TrackingQuality {
    /// Full 6-DoF confidence
    pub fn is_full(&self) -> bool {
        matches!(self, TrackingQuality::OrientationAndPosition)
    }
}

/// Per-geometry tracking state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackingState {
    Tracking,
    /// Temporarily lost; may resume
    NotTracking,
    /// Will never be tracked again
    StoppedTracking,
}

/// A detected plane as the native subsystem reports it
#[derive(Clone, Debug, PartialEq)]
pub struct NativePlane {
    pub handle: NativeHandle,
    /// Boundary polygon in the plane's local space
    pub boundary: Vec<Vec3>,
    pub local_to_world: RigidTransform,
    pub local_to_tracking: RigidTransform,
    /// Set once this plane has been merged into another
    pub subsumed_by: Option<NativeHandle>,
    pub tracking_state: TrackingState,
    pub debug_name: String,
}

impl NativePlane {
    pub fn is_merged(&self) -> bool {
        self.subsumed_by.is_some()
    }

    /// Tracked and not merged: its geometry should be refreshed
    pub fn is_active(&self) -> bool {
        self.tracking_state == TrackingState::Tracking && !self.is_merged()
    }

    /// Merged or stopped: the plane is gone for good
    pub fn is_retired(&self) -> bool {
        self.is_merged() || self.tracking_state == TrackingState::StoppedTracking
    }
}

/// Every kind of geometry the native subsystem tracks. Only planes become
/// tracked surfaces.
#[derive(Clone, Debug, PartialEq)]
pub enum TrackedGeometry {
    Plane(NativePlane),
    Image { handle: NativeHandle, name: String },
    Point { handle: NativeHandle },
}

impl TrackedGeometry {
    pub fn handle(&self) -> NativeHandle {
        match self {
            TrackedGeometry::Plane(plane) => plane.handle,
            TrackedGeometry::Image { handle, .. } | TrackedGeometry::Point { handle } => *handle,
        }
    }
}

/// The native spatial-tracking subsystem, as seen once per tick
pub trait TrackingSource {
    fn tracking_quality(&self) -> TrackingQuality;

    /// Every geometry currently known to the subsystem, in its native order
    fn geometries(&self) -> Vec<TrackedGeometry>;
}
