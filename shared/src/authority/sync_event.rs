use crate::{SurfaceId, SyncError};

/// Something that happened to a participant's surface collection during a tick
#[derive(Clone, Debug, PartialEq)]
pub enum SyncEvent {
    Added(SurfaceId),
    Updated(SurfaceId),
    Removed(SurfaceId),
    /// A request was a no-op; see [`SyncError`]
    Rejected(SyncError),
    /// The mirrored view was replaced wholesale by an authority push
    Replaced { revision: u64, surfaces: usize },
}

impl SyncEvent {
    pub fn is_rejection(&self) -> bool {
        matches!(self, SyncEvent::Rejected(_))
    }
}
