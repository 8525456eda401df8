use thiserror::Error;

use crate::SurfaceId;

/// Failures of a single add / remove / update request.
///
/// These never abort anything: the request becomes a no-op, the failure is
/// logged, and it is recorded as a [`SyncEvent::Rejected`](crate::SyncEvent).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncError {
    /// The request referenced an id the collection does not hold. Expected
    /// under network races: a remove or update arriving before its add, a
    /// duplicate remove, or an update arriving after its remove.
    #[error("Failed to {operation} surface {id}: surface not found")]
    SurfaceNotFound {
        id: SurfaceId,
        operation: &'static str,
    },

    /// An add for an id that is already present. The sender generated a
    /// colliding id or replayed an add.
    #[error("Surface {id} is already present, duplicate add rejected")]
    DuplicateSurface { id: SurfaceId },
}

impl SyncError {
    pub fn id(&self) -> SurfaceId {
        match self {
            SyncError::SurfaceNotFound { id, .. } | SyncError::DuplicateSurface { id } => *id,
        }
    }
}
