use crate::{ChannelMode, SurfaceId, SurfaceUpdate, TrackedSurface};

/// A structural or geometric change to one tracked surface. Emitted by the
/// LocalTracker and sent to the authority as a request.
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceEvent {
    Added(TrackedSurface),
    Updated(SurfaceUpdate),
    Removed(SurfaceId),
}

impl SurfaceEvent {
    pub fn id(&self) -> SurfaceId {
        match self {
            SurfaceEvent::Added(surface) => surface.id(),
            SurfaceEvent::Updated(update) => update.id,
            SurfaceEvent::Removed(id) => *id,
        }
    }

    /// Adds and removes must arrive; a lost update is superseded by the next one
    pub fn channel_mode(&self) -> ChannelMode {
        match self {
            SurfaceEvent::Added(_) | SurfaceEvent::Removed(_) => ChannelMode::OrderedReliable,
            SurfaceEvent::Updated(_) => ChannelMode::UnorderedUnreliable,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SurfaceEvent::Added(_) => "Add",
            SurfaceEvent::Updated(_) => "Update",
            SurfaceEvent::Removed(_) => "Remove",
        }
    }
}
