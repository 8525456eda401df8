//! # Planesync Client
//! A remote participant: forwards its locally detected surface changes to
//! the authority and mirrors the surface collection the authority pushes.

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

mod client;

pub use client::RemoteProxy;
