use std::{mem, time::Duration};

use log::{debug, warn};

use planesync_shared::{
    transport::{MessageReceiver, MessageSender, RemoteEndpoint},
    SurfaceAuthority, SurfaceEvent, SurfaceId, SurfacePush, SurfaceStore, SurfaceUpdate,
    SyncEvent, TrackedSurface,
};

/// A remote participant's handle on the authority.
///
/// Requests are forwarded: adds and removes over the reliable link, updates
/// over the best-effort link. Each request is also applied to the local
/// mirror right away so a tracking participant sees its own surfaces before
/// the authority answers. Every push from the authority replaces the mirror
/// wholesale.
pub struct RemoteProxy {
    endpoint: RemoteEndpoint,
    surfaces: SurfaceStore,
    events: Vec<SyncEvent>,
    connected: bool,
    last_revision: Option<u64>,
}

impl RemoteProxy {
    pub fn new(endpoint: RemoteEndpoint) -> Self {
        Self {
            endpoint,
            surfaces: SurfaceStore::new(),
            events: Vec::new(),
            connected: true,
            last_revision: None,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Revision of the last push applied to the mirror
    pub fn last_revision(&self) -> Option<u64> {
        self.last_revision
    }

    fn forward(&mut self, event: SurfaceEvent) {
        if !self.connected {
            debug!("Dropping {} request for surface {}: not connected", event.name(), event.id());
            return;
        }

        let sender = if event.channel_mode().is_reliable() {
            &self.endpoint.reliable_requests
        } else {
            &self.endpoint.unreliable_requests
        };

        if sender.send(event).is_err() {
            warn!("Lost connection to the authority");
            self.connected = false;
        }
    }

    fn receive_pushes(&mut self) {
        let mut latest: Option<SurfacePush> = None;
        loop {
            match self.endpoint.pushes.receive() {
                Ok(Some(push)) => latest = Some(push),
                Ok(None) => break,
                Err(_) => {
                    if self.connected {
                        warn!("Lost connection to the authority, keeping last known surfaces");
                    }
                    self.connected = false;
                    break;
                }
            }
        }

        let Some(push) = latest else {
            return;
        };

        let revision = push.revision;
        let duplicates = self.surfaces.replace_all(push.surfaces);
        for id in duplicates {
            warn!("Push revision {} carried surface {} more than once", revision, id);
        }

        debug!(
            "Mirror replaced by revision {} ({} surfaces)",
            revision,
            self.surfaces.len()
        );
        self.last_revision = Some(revision);
        self.events.push(SyncEvent::Replaced {
            revision,
            surfaces: self.surfaces.len(),
        });
    }
}

impl SurfaceAuthority for RemoteProxy {
    fn request_add(&mut self, surface: TrackedSurface) {
        let id = surface.id();
        match self.surfaces.insert(surface.clone()) {
            Ok(()) => self.events.push(SyncEvent::Added(id)),
            Err(err) => debug!("Local mirror: {}", err),
        }
        self.forward(SurfaceEvent::Added(surface));
    }

    fn request_remove(&mut self, id: &SurfaceId) {
        match self.surfaces.remove(id) {
            Ok(_) => self.events.push(SyncEvent::Removed(*id)),
            Err(err) => debug!("Local mirror: {}", err),
        }
        self.forward(SurfaceEvent::Removed(*id));
    }

    fn request_update(&mut self, update: SurfaceUpdate) {
        match self.surfaces.update(&update) {
            Ok(()) => self.events.push(SyncEvent::Updated(update.id)),
            Err(err) => debug!("Local mirror: {}", err),
        }
        self.forward(SurfaceEvent::Updated(update));
    }

    fn tick(&mut self, _dt: Duration) {
        self.receive_pushes();
    }

    fn surfaces(&self) -> &SurfaceStore {
        &self.surfaces
    }

    fn take_events(&mut self) -> Vec<SyncEvent> {
        mem::take(&mut self.events)
    }
}
