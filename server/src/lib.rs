//! # Planesync Server
//! The authoritative participant: owns the canonical collection of tracked
//! surfaces, applies add / remove / update requests sent by remote
//! participants, and pushes the collection to observers whenever it changes.

#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unused_import_braces
)]

pub mod shared {
    pub use planesync_shared::{
        transport, Color, MeshConfig, RigidTransform, SurfaceAuthority, SurfaceEvent, SurfaceId,
        SurfacePush, SurfaceStore, SurfaceUpdate, SyncError, SyncEvent, TrackedSurface, Vec3,
    };
}

mod connection;
mod server;

pub use connection::connection::ConnectionKey;
pub use server::{LocalAuthority, PushCondition, ServerConfig};
