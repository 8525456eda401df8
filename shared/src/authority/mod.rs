pub mod surface_authority;
pub mod sync_event;
