use std::time::Duration;

use crate::{
    CacheReport, LocalTracker, MeshBuilder, MeshCache, MeshConfig, RenderBackend,
    SurfaceAuthority, SyncEvent, TrackingSource,
};

/// What one [`Participant::tick`] did
#[derive(Debug, Default)]
pub struct TickReport {
    /// Everything the authority recorded during this tick, drained
    pub events: Vec<SyncEvent>,
    pub meshes: CacheReport,
}

impl TickReport {
    pub fn rejections(&self) -> impl Iterator<Item = &SyncEvent> {
        self.events.iter().filter(|event| event.is_rejection())
    }
}

struct TrackingInput {
    tracker: LocalTracker,
    source: Box<dyn TrackingSource>,
}

/// One participant's frame loop: tracking poll, then synchronization, then
/// mesh refresh, always in that order and always to completion.
///
/// Only the participant driving the tracking hardware gets a tracker; every
/// other participant just renders what its authority exposes.
pub struct Participant<A: SurfaceAuthority, R: RenderBackend> {
    tracking: Option<TrackingInput>,
    authority: A,
    renderer: R,
    mesh_builder: MeshBuilder,
    mesh_cache: MeshCache<R>,
}

impl<A: SurfaceAuthority, R: RenderBackend> Participant<A, R> {
    pub fn new(authority: A, renderer: R, mesh_config: &MeshConfig) -> Self {
        Self {
            tracking: None,
            authority,
            renderer,
            mesh_builder: MeshBuilder::from_config(mesh_config),
            mesh_cache: MeshCache::new(),
        }
    }

    /// Gives this participant device-level tracking access
    pub fn with_tracker(mut self, tracker: LocalTracker, source: Box<dyn TrackingSource>) -> Self {
        self.tracking = Some(TrackingInput { tracker, source });
        self
    }

    pub fn with_mesh_cache(mut self, mesh_cache: MeshCache<R>) -> Self {
        self.mesh_cache = mesh_cache;
        self
    }

    /// Runs one frame. The authority's events are drained every tick and
    /// handed back in the report; nothing accumulates across frames.
    pub fn tick(&mut self, dt: Duration) -> TickReport {
        if let Some(tracking) = &mut self.tracking {
            for event in tracking.tracker.poll(tracking.source.as_ref()) {
                self.authority.apply_event(event);
            }
        }

        self.authority.tick(dt);

        let meshes = self.mesh_cache.refresh(
            self.authority.surfaces(),
            &self.mesh_builder,
            &mut self.renderer,
        );

        TickReport {
            events: self.authority.take_events(),
            meshes,
        }
    }

    pub fn has_tracking_access(&self) -> bool {
        self.tracking.is_some()
    }

    pub fn tracker(&self) -> Option<&LocalTracker> {
        self.tracking.as_ref().map(|tracking| &tracking.tracker)
    }

    pub fn authority(&self) -> &A {
        &self.authority
    }

    pub fn authority_mut(&mut self) -> &mut A {
        &mut self.authority
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn mesh_cache(&self) -> &MeshCache<R> {
        &self.mesh_cache
    }

    /// Releases every render resource and hands back the parts
    pub fn shutdown(mut self) -> (A, R) {
        self.mesh_cache.clear(&mut self.renderer);
        (self.authority, self.renderer)
    }
}
