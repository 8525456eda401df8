use std::time::Duration;

use log::{info, warn};

use planesync_client::RemoteProxy;
use planesync_server::{
    shared::{transport::LinkConditionerConfig, MeshConfig, SurfaceAuthority, SyncEvent},
    LocalAuthority, ServerConfig,
};
use planesync_shared::{
    transport::local_endpoints, Color, LocalTracker, Participant, TrackerConfig,
};

use crate::{log_renderer::LogRenderer, simulated_source::SimulatedSource};

const TICK: Duration = Duration::from_millis(16);

type Remote = Participant<RemoteProxy, LogRenderer>;
type Host = Participant<LocalAuthority, LogRenderer>;

/// A headset that tracks the room, a host holding the authoritative
/// collection, and a spectator that only renders what it is sent.
pub struct App {
    source: SimulatedSource,
    headset: Remote,
    host: Host,
    spectator: Remote,
    frame: u32,
}

impl Default for App {
    fn default() -> Self {
        info!("Planesync Basic Demo started");

        let mesh_config = MeshConfig::default();
        let mut authority = LocalAuthority::new(ServerConfig::default());

        let (authority_endpoint, headset_endpoint) =
            local_endpoints(Some(LinkConditionerConfig::good_condition()));
        authority.connect(authority_endpoint, true);
        let (authority_endpoint, spectator_endpoint) = local_endpoints(None);
        authority.connect(authority_endpoint, false);

        let source = SimulatedSource::new();
        let tracker = LocalTracker::new(TrackerConfig::with_palette(vec![
            Color::rgb(255, 140, 0),
            Color::rgb(0, 170, 255),
            Color::rgb(120, 220, 60),
        ]));

        Self {
            headset: Participant::new(
                RemoteProxy::new(headset_endpoint),
                LogRenderer::new("headset"),
                &mesh_config,
            )
            .with_tracker(tracker, Box::new(source.clone())),
            host: Participant::new(authority, LogRenderer::new("host"), &mesh_config),
            spectator: Participant::new(
                RemoteProxy::new(spectator_endpoint),
                LogRenderer::new("spectator"),
                &mesh_config,
            ),
            source,
            frame: 0,
        }
    }
}

impl App {
    pub fn update(&mut self) {
        self.source.advance();
        self.frame += 1;

        let headset = self.headset.tick(TICK);
        let host = self.host.tick(TICK);
        let spectator = self.spectator.tick(TICK);

        for event in host.events {
            match event {
                SyncEvent::Added(id) => info!("Host added surface {}", id),
                SyncEvent::Removed(id) => info!("Host removed surface {}", id),
                SyncEvent::Rejected(error) => info!("Host rejected request: {}", error),
                SyncEvent::Updated(_) | SyncEvent::Replaced { .. } => {}
            }
        }
        for rejection in headset.rejections() {
            warn!("Headset request failed: {:?}", rejection);
        }

        if !spectator.meshes.is_empty() {
            info!(
                "Frame {}: spectator now renders {} surfaces",
                self.frame,
                self.spectator.authority().surfaces().len()
            );
        }
    }

    pub fn shutdown(self) {
        let (_, headset) = self.headset.shutdown();
        let (_, host) = self.host.shutdown();
        let (_, spectator) = self.spectator.shutdown();
        info!(
            "Shut down, live meshes left: headset {}, host {}, spectator {}",
            headset.live(),
            host.live(),
            spectator.live()
        );
    }
}
