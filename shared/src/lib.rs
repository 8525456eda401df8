//! # Planesync Shared
//! Common functionality shared between planesync-server & planesync-client
//! crates: the tracked surface data model, boundary-to-mesh generation,
//! tracking ingestion, sync messages and the transport abstraction.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

#[macro_use]
extern crate cfg_if;

mod authority;
mod config;
mod error;
mod mesh;
mod messages;
mod participant;
mod surface;
mod tracking;

pub mod transport;

pub use glam::{Quat, Vec2, Vec3, Vec4};

pub use authority::{surface_authority::SurfaceAuthority, sync_event::SyncEvent};
pub use config::{MeshConfig, TrackerConfig, DEFAULT_EDGE_FEATHERING_DISTANCE};
pub use error::SyncError;
pub use mesh::{
    mesh_builder::{MeshBuilder, INNER_ALPHA, OUTER_ALPHA},
    mesh_cache::{CacheReport, MeshCache},
    render_backend::{MeshMaterial, RenderBackend},
    surface_mesh::SurfaceMesh,
};
pub use messages::{
    channel_mode::ChannelMode, surface_event::SurfaceEvent, surface_push::SurfacePush,
};
pub use participant::{Participant, TickReport};
pub use surface::{
    color::Color,
    rigid_transform::RigidTransform,
    surface_id::{SurfaceId, SurfaceIdGenerator},
    surface_store::SurfaceStore,
    tracked_surface::{SurfaceUpdate, TrackedSurface, MIN_BOUNDARY_POINTS},
};
pub use tracking::{
    local_tracker::LocalTracker,
    tracking_source::{
        NativeHandle, NativePlane, TrackedGeometry, TrackingQuality, TrackingSource,
        TrackingState,
    },
};
