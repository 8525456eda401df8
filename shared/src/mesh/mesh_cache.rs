use std::collections::{hash_map::Entry, HashMap, HashSet};

use log::debug;

use crate::{MeshBuilder, MeshMaterial, RenderBackend, SurfaceId, SurfaceStore};

struct MeshEntry<H> {
    handle: H,
    visible: bool,
}

/// What a single [`MeshCache::refresh`] created and released
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CacheReport {
    pub created: Vec<SurfaceId>,
    pub released: Vec<SurfaceId>,
}

impl CacheReport {
    pub fn is_empty(&self) -> bool {
        self.created.is_empty() && self.released.is_empty()
    }
}

/// Render-resource handles keyed by surface id. An entry exists exactly as
/// long as its surface is in the known set.
pub struct MeshCache<R: RenderBackend> {
    entries: HashMap<SurfaceId, MeshEntry<R::MeshHandle>>,
    rng: fastrand::Rng,
}

impl<R: RenderBackend> MeshCache<R> {
    pub fn new() -> Self {
        Self::with_rng(fastrand::Rng::new())
    }

    /// Seeds the texture rotation given to new materials
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(fastrand::Rng::with_seed(seed))
    }

    fn with_rng(rng: fastrand::Rng) -> Self {
        Self {
            entries: HashMap::new(),
            rng,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: &SurfaceId) -> bool {
        self.entries.contains_key(id)
    }

    pub fn is_visible(&self, id: &SurfaceId) -> bool {
        self.entries.get(id).is_some_and(|entry| entry.visible)
    }

    pub fn handle(&self, id: &SurfaceId) -> Option<&R::MeshHandle> {
        self.entries.get(id).map(|entry| &entry.handle)
    }

    /// Brings the cache in line with `surfaces`: creates resources for new
    /// ids, regenerates geometry for every known surface, and releases
    /// resources whose surface is gone.
    pub fn refresh(
        &mut self,
        surfaces: &SurfaceStore,
        builder: &MeshBuilder,
        renderer: &mut R,
    ) -> CacheReport {
        let mut report = CacheReport::default();
        let mut stale: HashSet<SurfaceId> = self.entries.keys().copied().collect();

        for surface in surfaces.iter() {
            let id = surface.id();
            stale.remove(&id);

            let entry = match self.entries.entry(id) {
                Entry::Occupied(entry) => entry.into_mut(),
                Entry::Vacant(entry) => {
                    let material = MeshMaterial {
                        tint: surface.color.to_linear(),
                        texture_rotation: self.rng.f32(),
                    };
                    let handle = renderer.create_mesh(&id, material);
                    report.created.push(id);
                    entry.insert(MeshEntry {
                        handle,
                        visible: false,
                    })
                }
            };

            if !entry.visible {
                renderer.set_visible(&entry.handle, true);
                entry.visible = true;
            }

            let mesh = builder.build_surface(surface);
            if mesh.is_empty() {
                renderer.clear_mesh(&entry.handle);
            } else {
                renderer.update_mesh(&entry.handle, &mesh, &surface.local_to_world);
            }
        }

        if !stale.is_empty() {
            debug!("Remove {} old surface meshes", stale.len());

            let mut stale: Vec<SurfaceId> = stale.into_iter().collect();
            stale.sort();
            for id in stale {
                if let Some(entry) = self.entries.remove(&id) {
                    renderer.release_mesh(entry.handle);
                    report.released.push(id);
                }
            }
        }

        report
    }

    /// Releases every resource, for host shutdown
    pub fn clear(&mut self, renderer: &mut R) {
        for (_, entry) in self.entries.drain() {
            renderer.release_mesh(entry.handle);
        }
    }
}

impl<R: RenderBackend> Default for MeshCache<R> {
    fn default() -> Self {
        Self::new()
    }
}
