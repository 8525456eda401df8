pub mod local_tracker;
pub mod tracking_source;
