use std::time::Duration;

use crate::{SurfaceEvent, SurfaceId, SurfaceStore, SurfaceUpdate, SyncEvent, TrackedSurface};

/// The capability of accepting surface requests and exposing the resulting
/// collection. Implemented by the authority itself and by the proxy a remote
/// participant uses to reach it; picked once, at construction.
///
/// Requests are fire-and-forget. Failures are logged and recorded as
/// [`SyncEvent`]s, never returned.
pub trait SurfaceAuthority {
    /// Inserts `surface`. Its id must not already be present.
    fn request_add(&mut self, surface: TrackedSurface);

    fn request_remove(&mut self, id: &SurfaceId);

    /// Overwrites boundary and transforms of the surface with `update.id`
    fn request_update(&mut self, update: SurfaceUpdate);

    /// Drains incoming messages and sends outgoing ones
    fn tick(&mut self, dt: Duration);

    /// The collection this participant currently renders
    fn surfaces(&self) -> &SurfaceStore;

    /// Removes and returns every event recorded since the last call
    fn take_events(&mut self) -> Vec<SyncEvent>;

    fn apply_event(&mut self, event: SurfaceEvent) {
        match event {
            SurfaceEvent::Added(surface) => self.request_add(surface),
            SurfaceEvent::Updated(update) => self.request_update(update),
            SurfaceEvent::Removed(id) => self.request_remove(&id),
        }
    }
}
