use std::collections::HashMap;

use log::{debug, trace};

use crate::{
    Color, NativeHandle, NativePlane, SurfaceEvent, SurfaceId, SurfaceIdGenerator,
    SurfaceUpdate, TrackedGeometry, TrackedSurface, TrackerConfig, TrackingSource,
};

/// Polls the tracking subsystem and turns the native planes it reports into
/// add / update / remove events for tracked surfaces.
///
/// Each native plane moves through idle -> active -> retired. Retiring drops
/// the handle mapping, so a plane that keeps being reported as merged or
/// stopped produces exactly one remove.
pub struct LocalTracker {
    config: TrackerConfig,
    planes: HashMap<NativeHandle, SurfaceId>,
    id_generator: SurfaceIdGenerator,
    new_plane_index: usize,
}

impl LocalTracker {
    pub fn new(config: TrackerConfig) -> Self {
        Self::with_id_generator(config, SurfaceIdGenerator::new())
    }

    pub fn with_id_generator(config: TrackerConfig, id_generator: SurfaceIdGenerator) -> Self {
        Self {
            config,
            planes: HashMap::new(),
            id_generator,
            new_plane_index: 0,
        }
    }

    /// Number of native planes currently mapped to a surface
    pub fn tracked_count(&self) -> usize {
        self.planes.len()
    }

    pub fn surface_for(&self, handle: &NativeHandle) -> Option<SurfaceId> {
        self.planes.get(handle).copied()
    }

    /// One poll of the subsystem. Yields nothing unless tracking reports full
    /// positional and orientation confidence.
    pub fn poll(&mut self, source: &dyn TrackingSource) -> Vec<SurfaceEvent> {
        let quality = source.tracking_quality();
        if !quality.is_full() {
            trace!("Skipping tracking poll, quality is {:?}", quality);
            return Vec::new();
        }

        let mut events = Vec::new();
        for geometry in source.geometries() {
            if let TrackedGeometry::Plane(plane) = geometry {
                self.poll_plane(&plane, &mut events);
            }
        }
        events
    }

    fn poll_plane(&mut self, plane: &NativePlane, events: &mut Vec<SurfaceEvent>) {
        let id = match self.planes.get(&plane.handle) {
            Some(id) => *id,
            None => {
                if plane.is_retired() {
                    return;
                }

                let surface = self.create_surface(plane);
                let id = surface.id();
                debug!("New plane {:?} tracked as surface {}", plane.handle, id);
                self.planes.insert(plane.handle, id);
                events.push(SurfaceEvent::Added(surface));
                id
            }
        };

        if plane.is_active() {
            events.push(SurfaceEvent::Updated(SurfaceUpdate {
                id,
                boundary: plane.boundary.clone(),
                local_to_world: plane.local_to_world,
                local_to_tracking: plane.local_to_tracking,
            }));
        }

        if plane.is_retired() {
            debug!("Plane {:?} retired, removing surface {}", plane.handle, id);
            self.planes.remove(&plane.handle);
            events.push(SurfaceEvent::Removed(id));
        }
    }

    fn create_surface(&mut self, plane: &NativePlane) -> TrackedSurface {
        let color = self.next_color();
        let mut surface =
            TrackedSurface::new(self.id_generator.generate(), color, plane.debug_name.clone());
        surface.boundary = plane.boundary.clone();
        surface.local_to_world = plane.local_to_world;
        surface.local_to_tracking = plane.local_to_tracking;
        surface
    }

    fn next_color(&mut self) -> Color {
        let palette = &self.config.plane_colors;
        let color = if palette.is_empty() {
            Color::WHITE
        } else {
            palette[self.new_plane_index % palette.len()]
        };
        self.new_plane_index += 1;
        color
    }
}
