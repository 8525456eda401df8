use std::{collections::HashMap, slice::Iter};

use crate::{SurfaceId, SurfaceUpdate, SyncError, TrackedSurface};

/// Dense table of tracked surfaces keyed by id.
///
/// Surfaces live contiguously; `index` maps each id to its slot. Removal
/// swaps the last surface into the vacated slot, so iteration order is not
/// insertion order once anything has been removed.
#[derive(Clone, Debug, Default)]
pub struct SurfaceStore {
    surfaces: Vec<TrackedSurface>,
    index: HashMap<SurfaceId, usize>,
}

impl SurfaceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    pub fn contains(&self, id: &SurfaceId) -> bool {
        self.index.contains_key(id)
    }

    pub fn get(&self, id: &SurfaceId) -> Option<&TrackedSurface> {
        let slot = *self.index.get(id)?;
        self.surfaces.get(slot)
    }

    pub fn get_mut(&mut self, id: &SurfaceId) -> Option<&mut TrackedSurface> {
        let slot = *self.index.get(id)?;
        self.surfaces.get_mut(slot)
    }

    pub fn iter(&self) -> Iter<'_, TrackedSurface> {
        self.surfaces.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = SurfaceId> + '_ {
        self.surfaces.iter().map(TrackedSurface::id)
    }

    pub fn insert(&mut self, surface: TrackedSurface) -> Result<(), SyncError> {
        let id = surface.id();
        if self.index.contains_key(&id) {
            return Err(SyncError::DuplicateSurface { id });
        }

        self.index.insert(id, self.surfaces.len());
        self.surfaces.push(surface);
        Ok(())
    }

    pub fn remove(&mut self, id: &SurfaceId) -> Result<TrackedSurface, SyncError> {
        let Some(slot) = self.index.remove(id) else {
            return Err(SyncError::SurfaceNotFound {
                id: *id,
                operation: "remove",
            });
        };

        let removed = self.surfaces.swap_remove(slot);
        if let Some(moved) = self.surfaces.get(slot) {
            self.index.insert(moved.id(), slot);
        }
        Ok(removed)
    }

    pub fn update(&mut self, update: &SurfaceUpdate) -> Result<(), SyncError> {
        let Some(surface) = self.get_mut(&update.id) else {
            return Err(SyncError::SurfaceNotFound {
                id: update.id,
                operation: "update",
            });
        };

        surface.apply_update(update);
        Ok(())
    }

    /// Replaces the whole table. Returns the ids that were dropped because
    /// they appeared more than once in `surfaces`; the first occurrence wins.
    pub fn replace_all(&mut self, surfaces: Vec<TrackedSurface>) -> Vec<SurfaceId> {
        self.surfaces.clear();
        self.index.clear();

        let mut duplicates = Vec::new();
        for surface in surfaces {
            let id = surface.id();
            if self.insert(surface).is_err() {
                duplicates.push(id);
            }
        }
        duplicates
    }

    pub fn snapshot(&self) -> Vec<TrackedSurface> {
        self.surfaces.clone()
    }
}
