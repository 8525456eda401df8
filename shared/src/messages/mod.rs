pub mod channel_mode;
pub mod surface_event;
pub mod surface_push;
