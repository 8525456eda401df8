use crate::TrackedSurface;

/// The full authoritative collection, sent to observers whenever it changes.
/// `revision` increases by one per push from a given authority.
#[derive(Clone, Debug, PartialEq)]
pub struct SurfacePush {
    pub revision: u64,
    pub surfaces: Vec<TrackedSurface>,
}

impl SurfacePush {
    pub fn new(revision: u64, surfaces: Vec<TrackedSurface>) -> Self {
        Self { revision, surfaces }
    }
}
