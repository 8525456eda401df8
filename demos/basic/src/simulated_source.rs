use std::{cell::Cell, rc::Rc};

use planesync_shared::{
    NativeHandle, NativePlane, RigidTransform, TrackedGeometry, TrackingQuality, TrackingSource,
    TrackingState, Vec3,
};

const FLOOR: u64 = 1;
const FLOOR_PATCH: u64 = 2;
const TABLE: u64 = 3;

/// A scripted room: a floor that keeps growing, a patch of floor that gets
/// merged into it, and a table top that stops being tracked. Tracking drops
/// to orientation-only for a few frames in the middle.
#[derive(Clone)]
pub struct SimulatedSource {
    frame: Rc<Cell<u32>>,
}

impl SimulatedSource {
    pub fn new() -> Self {
        Self {
            frame: Rc::new(Cell::new(0)),
        }
    }

    pub fn advance(&self) {
        self.frame.set(self.frame.get() + 1);
    }

    fn plane(&self, handle: u64, name: &str, center: Vec3, radius: f32) -> NativePlane {
        let sides = 4 + (self.frame.get() / 10).min(8) as usize;
        let boundary = (0..sides)
            .map(|i| {
                let angle = i as f32 / sides as f32 * std::f32::consts::TAU;
                Vec3::new(angle.cos() * radius, angle.sin() * radius, 0.0)
            })
            .collect();
        NativePlane {
            handle: NativeHandle::new(handle),
            boundary,
            local_to_world: RigidTransform::from_translation(center),
            local_to_tracking: RigidTransform::from_translation(center),
            subsumed_by: None,
            tracking_state: TrackingState::Tracking,
            debug_name: name.to_string(),
        }
    }
}

impl TrackingSource for SimulatedSource {
    fn tracking_quality(&self) -> TrackingQuality {
        match self.frame.get() {
            40..=45 => TrackingQuality::OrientationOnly,
            _ => TrackingQuality::OrientationAndPosition,
        }
    }

    fn geometries(&self) -> Vec<TrackedGeometry> {
        let frame = self.frame.get();
        let mut geometries = Vec::new();

        let floor_radius = 1.0 + frame as f32 * 0.02;
        geometries.push(TrackedGeometry::Plane(self.plane(
            FLOOR,
            "floor",
            Vec3::new(0.0, -1.5, 0.0),
            floor_radius,
        )));

        if frame >= 10 {
            let mut patch = self.plane(FLOOR_PATCH, "floor patch", Vec3::new(2.0, -1.5, 0.0), 0.5);
            if frame >= 60 {
                patch.subsumed_by = Some(NativeHandle::new(FLOOR));
            }
            geometries.push(TrackedGeometry::Plane(patch));
        }

        if frame >= 20 {
            let mut table = self.plane(TABLE, "table", Vec3::new(0.0, -0.8, -1.0), 0.6);
            if frame >= 90 {
                table.tracking_state = TrackingState::StoppedTracking;
            }
            geometries.push(TrackedGeometry::Plane(table));
        }

        geometries.push(TrackedGeometry::Image {
            handle: NativeHandle::new(100),
            name: "poster".to_string(),
        });

        geometries
    }
}
