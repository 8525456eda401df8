pub mod color;
pub mod rigid_transform;
pub mod surface_id;
pub mod surface_store;
pub mod tracked_surface;
