use std::{collections::BTreeMap, mem, time::Duration};

use log::{debug, error, info, warn};

use planesync_shared::{
    transport::{AuthorityEndpoint, MessageReceiver, MessageSender, RecvError},
    SurfaceAuthority, SurfaceEvent, SurfaceId, SurfacePush, SurfaceStore, SurfaceUpdate,
    SyncError, SyncEvent, TrackedSurface,
};

use crate::{
    connection::connection::{Connection, ConnectionKey},
    PushCondition, ServerConfig,
};

/// Owns the single authoritative collection of tracked surfaces.
///
/// Requests from connected remotes are drained once per tick, reliable
/// (add / remove) before unreliable (update). Whenever the collection
/// changed during a tick the whole collection is pushed to every connection
/// the [`PushCondition`] allows.
pub struct LocalAuthority {
    config: ServerConfig,
    surfaces: SurfaceStore,
    connections: BTreeMap<ConnectionKey, Connection>,
    next_connection_key: u64,
    events: Vec<SyncEvent>,
    dirty: bool,
    revision: u64,
}

impl LocalAuthority {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            surfaces: SurfaceStore::new(),
            connections: BTreeMap::new(),
            next_connection_key: 0,
            events: Vec::new(),
            dirty: false,
            revision: 0,
        }
    }

    /// Accepts a remote participant. `is_owner` marks the remote that drives
    /// the tracking hardware.
    pub fn connect(&mut self, endpoint: AuthorityEndpoint, is_owner: bool) -> ConnectionKey {
        let key = ConnectionKey::new(self.next_connection_key);
        self.next_connection_key += 1;

        info!("Accepted {} (owner: {})", key, is_owner);
        self.connections
            .insert(key, Connection::new(endpoint, is_owner));
        key
    }

    pub fn disconnect(&mut self, key: &ConnectionKey) -> bool {
        let removed = self.connections.remove(key).is_some();
        if removed {
            info!("Closed {}", key);
        }
        removed
    }

    pub fn is_connected(&self, key: &ConnectionKey) -> bool {
        self.connections.contains_key(key)
    }

    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// Number of pushes produced so far
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn reject(&mut self, error: SyncError) {
        self.events.push(SyncEvent::Rejected(error));
    }

    fn receive_requests(&mut self) {
        let mut incoming = Vec::new();
        let mut closed = Vec::new();

        for (key, connection) in self.connections.iter_mut() {
            let reliable = drain(connection.endpoint.reliable_requests.as_mut(), &mut incoming);
            let unreliable =
                drain(connection.endpoint.unreliable_requests.as_mut(), &mut incoming);
            if reliable.is_err() || unreliable.is_err() {
                closed.push(*key);
            }
        }

        for event in incoming {
            debug!("Received {} request for surface {}", event.name(), event.id());
            self.apply_event(event);
        }

        for key in closed {
            warn!("{} disconnected", key);
            self.connections.remove(&key);
        }
    }

    fn send_pushes(&mut self) {
        let any_waiting = self
            .connections
            .values()
            .any(|connection| connection.needs_push);
        if !self.dirty && !any_waiting {
            return;
        }

        let push_condition = self.config.push_condition;
        let recipients: Vec<ConnectionKey> = self
            .connections
            .iter()
            .filter(|(_, connection)| self.dirty || connection.needs_push)
            .filter(|(_, connection)| match push_condition {
                PushCondition::Always => true,
                PushCondition::SkipOwner => !connection.is_owner,
            })
            .map(|(key, _)| *key)
            .collect();

        self.dirty = false;
        for connection in self.connections.values_mut() {
            connection.needs_push = false;
        }
        if recipients.is_empty() {
            return;
        }

        self.revision += 1;
        let push = SurfacePush::new(self.revision, self.surfaces.snapshot());
        debug!(
            "Pushing revision {} ({} surfaces) to {} connections",
            push.revision,
            push.surfaces.len(),
            recipients.len()
        );

        let mut closed = Vec::new();
        for key in recipients {
            let Some(connection) = self.connections.get(&key) else {
                continue;
            };
            if connection.endpoint.pushes.send(push.clone()).is_err() {
                closed.push(key);
            }
        }

        for key in closed {
            warn!("{} disconnected", key);
            self.connections.remove(&key);
        }
    }
}

impl SurfaceAuthority for LocalAuthority {
    fn request_add(&mut self, surface: TrackedSurface) {
        let id = surface.id();
        match self.surfaces.insert(surface) {
            Ok(()) => {
                debug!("Authority added surface {}", id);
                self.events.push(SyncEvent::Added(id));
                self.dirty = true;
            }
            Err(err) => {
                error!("{}", err);
                self.reject(err);
            }
        }
    }

    fn request_remove(&mut self, id: &SurfaceId) {
        match self.surfaces.remove(id) {
            Ok(_) => {
                debug!("Authority removed surface {}", id);
                self.events.push(SyncEvent::Removed(*id));
                self.dirty = true;
            }
            Err(err) => {
                error!("{}", err);
                self.reject(err);
            }
        }
    }

    fn request_update(&mut self, update: SurfaceUpdate) {
        match self.surfaces.update(&update) {
            Ok(()) => {
                self.events.push(SyncEvent::Updated(update.id));
                self.dirty = true;
            }
            Err(err) => {
                warn!("{}", err);
                self.reject(err);
            }
        }
    }

    fn tick(&mut self, _dt: Duration) {
        self.receive_requests();
        self.send_pushes();
    }

    fn surfaces(&self) -> &SurfaceStore {
        &self.surfaces
    }

    fn take_events(&mut self) -> Vec<SyncEvent> {
        mem::take(&mut self.events)
    }
}

fn drain(
    receiver: &mut dyn MessageReceiver<SurfaceEvent>,
    incoming: &mut Vec<SurfaceEvent>,
) -> Result<(), RecvError> {
    while let Some(event) = receiver.receive()? {
        incoming.push(event);
    }
    Ok(())
}
