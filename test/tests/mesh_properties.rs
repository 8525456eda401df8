/// Property-based tests for mesh generation and the surface store
/// Exercises arbitrary boundaries and feathering distances, and arbitrary
/// request sequences against the authority's collection.

use proptest::prelude::*;

use planesync_server::{
    shared::{SurfaceAuthority, SurfaceId},
    LocalAuthority, ServerConfig,
};
use planesync_shared::{MeshBuilder, Vec3, INNER_ALPHA, OUTER_ALPHA};
use planesync_test::{square_boundary, surface, update};

fn boundary_strategy() -> impl Strategy<Value = Vec<Vec3>> {
    prop::collection::vec((-5.0f32..5.0, -5.0f32..5.0), 0..40)
        .prop_map(|points| points.into_iter().map(|(x, y)| Vec3::new(x, y, 0.0)).collect())
}

#[derive(Clone, Debug)]
enum Request {
    Add(u128),
    Remove(u128),
    Update(u128, f32),
}

fn request_strategy() -> impl Strategy<Value = Request> {
    prop_oneof![
        (0u128..8).prop_map(Request::Add),
        (0u128..8).prop_map(Request::Remove),
        (0u128..8, 0.1f32..4.0).prop_map(|(id, size)| Request::Update(id, size)),
    ]
}

proptest! {
    #[test]
    fn mesh_has_two_rings_and_closed_topology(
        boundary in boundary_strategy(),
        feathering in -1.0f32..2.0,
    ) {
        let mesh = MeshBuilder::new(feathering).build(&boundary, Vec3::Z);
        let n = boundary.len();

        if n < 3 {
            prop_assert!(mesh.is_empty());
            prop_assert!(mesh.indices.is_empty());
        } else {
            prop_assert_eq!(mesh.vertex_count(), 2 * n);
            prop_assert_eq!(mesh.triangle_count(), 3 * n - 2);
            prop_assert_eq!(mesh.colors.len(), 2 * n);
            prop_assert_eq!(mesh.normals.len(), 2 * n);
            prop_assert_eq!(mesh.uvs.len(), 2 * n);
            prop_assert!(mesh.indices.iter().all(|index| (*index as usize) < 2 * n));
        }
    }

    #[test]
    fn interior_ring_is_pulled_in_by_at_most_the_feathering(
        boundary in boundary_strategy(),
        feathering in 0.0f32..2.0,
    ) {
        let mesh = MeshBuilder::new(feathering).build(&boundary, Vec3::Z);

        for i in 0..mesh.vertex_count() / 2 {
            let outer = mesh.positions[i * 2];
            let inner = mesh.positions[i * 2 + 1];
            let pulled_in = outer.length() - inner.length();

            prop_assert_eq!(outer, boundary[i]);
            prop_assert!(inner.length() <= outer.length() + 1e-4);
            prop_assert!(pulled_in <= feathering + 1e-4);
            prop_assert_eq!(mesh.colors[i * 2].w, OUTER_ALPHA);
            prop_assert_eq!(mesh.colors[i * 2 + 1].w, INNER_ALPHA);
        }
    }

    #[test]
    fn mesh_generation_is_deterministic(
        boundary in boundary_strategy(),
        feathering in 0.0f32..2.0,
    ) {
        let builder = MeshBuilder::new(feathering);

        let first = builder.build(&boundary, Vec3::Y);
        let second = builder.build(&boundary, Vec3::Y);

        prop_assert_eq!(first.to_bytes(), second.to_bytes());
    }

    #[test]
    fn collection_ids_stay_unique_under_any_request_sequence(
        requests in prop::collection::vec(request_strategy(), 0..64),
    ) {
        let mut authority = LocalAuthority::new(ServerConfig::default());
        let mut present = std::collections::BTreeSet::new();

        for request in requests {
            match request {
                Request::Add(id) => {
                    authority.request_add(surface(id));
                    present.insert(id);
                }
                Request::Remove(id) => {
                    authority.request_remove(&SurfaceId::from_u128(id));
                    present.remove(&id);
                }
                Request::Update(id, size) => {
                    authority.request_update(update(id, square_boundary(size)));
                }
            }
        }

        let mut ids: Vec<SurfaceId> = authority.surfaces().ids().collect();
        ids.sort();
        let expected: Vec<SurfaceId> = present.into_iter().map(SurfaceId::from_u128).collect();
        prop_assert_eq!(ids, expected);
        for id in authority.surfaces().ids() {
            prop_assert!(authority.surfaces().get(&id).is_some());
        }
    }
}
