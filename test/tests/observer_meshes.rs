/// Integration tests for the render side of an observing participant
/// Covers mesh resource lifetime across authority pushes: one resource per
/// known surface, created once, released in the frame the surface vanishes.

use planesync_client::RemoteProxy;
use planesync_server::{
    shared::{Color, MeshConfig, SurfaceAuthority, SurfaceId, Vec3},
    LocalAuthority, ServerConfig,
};
use planesync_shared::{MeshCache, Participant};
use planesync_test::{
    connect_remote, init_logging, regular_boundary, surface, update, RecordingRenderer,
    RenderCall, TICK,
};

type Observer = Participant<RemoteProxy, RecordingRenderer>;

fn observer(authority: &mut LocalAuthority) -> Observer {
    let (_, proxy) = connect_remote(authority, false, None);
    Participant::new(proxy, RecordingRenderer::new(), &MeshConfig::default())
        .with_mesh_cache(MeshCache::with_seed(1))
}

fn frame(authority: &mut LocalAuthority, observer: &mut Observer) -> planesync_shared::CacheReport {
    authority.tick(TICK);
    observer.tick(TICK).meshes
}

fn id(value: u128) -> SurfaceId {
    SurfaceId::from_u128(value)
}

#[test]
fn new_surface_in_push_creates_exactly_one_resource() {
    init_logging();
    let mut authority = LocalAuthority::new(ServerConfig::default());
    let mut observer = observer(&mut authority);

    authority.request_add(surface(1));
    authority.request_add(surface(2));
    let report = frame(&mut authority, &mut observer);
    let mut created = report.created.clone();
    created.sort();
    assert_eq!(created, vec![id(1), id(2)]);

    authority.request_add(surface(3));
    let report = frame(&mut authority, &mut observer);

    assert_eq!(report.created, vec![id(3)]);
    assert!(report.released.is_empty());
    assert_eq!(observer.mesh_cache().len(), 3);
    assert_eq!(
        observer
            .renderer()
            .count_calls(|call| matches!(call, RenderCall::Create(_))),
        3
    );
}

#[test]
fn removed_surface_is_released_in_the_same_frame() {
    let mut authority = LocalAuthority::new(ServerConfig::default());
    let mut observer = observer(&mut authority);
    authority.request_add(surface(1));
    authority.request_add(surface(2));
    frame(&mut authority, &mut observer);

    authority.request_remove(&id(1));
    let report = frame(&mut authority, &mut observer);

    assert_eq!(report.released, vec![id(1)]);
    assert!(!observer.mesh_cache().contains(&id(1)));
    assert_eq!(observer.renderer().live_count(), 1);
    assert!(observer.renderer().live_for(&id(1)).is_none());
}

#[test]
fn geometry_is_regenerated_every_frame() {
    let mut authority = LocalAuthority::new(ServerConfig::default());
    let mut observer = observer(&mut authority);
    authority.request_add(surface(1));
    frame(&mut authority, &mut observer);

    authority.request_update(update(1, regular_boundary(7, 1.5)));
    frame(&mut authority, &mut observer);
    frame(&mut authority, &mut observer);

    let renderer = observer.renderer();
    assert_eq!(
        renderer.count_calls(|call| *call == RenderCall::Update(id(1))),
        3
    );
    // shown once, on creation
    assert_eq!(
        renderer.count_calls(|call| *call == RenderCall::SetVisible(id(1), true)),
        1
    );

    let live = renderer.live_for(&id(1)).unwrap();
    assert!(live.visible);
    assert_eq!(live.mesh.vertex_count(), 14);
    assert_eq!(live.mesh.triangle_count(), 19);
}

#[test]
fn material_uses_surface_color_and_random_rotation() {
    let mut authority = LocalAuthority::new(ServerConfig::default());
    let mut observer = observer(&mut authority);
    let mut tinted = surface(1);
    tinted.color = Color::rgba(255, 0, 0, 128);
    authority.request_add(tinted.clone());
    frame(&mut authority, &mut observer);

    let live = observer.renderer().live_for(&id(1)).unwrap();
    assert_eq!(live.material.tint, tinted.color.to_linear());
    assert!((0.0..1.0).contains(&live.material.texture_rotation));
}

#[test]
fn mesh_is_placed_with_the_world_transform() {
    let mut authority = LocalAuthority::new(ServerConfig::default());
    let mut observer = observer(&mut authority);
    let mut placed = surface(1);
    placed.local_to_world.translation = Vec3::new(2.0, 0.0, -1.0);
    authority.request_add(placed.clone());
    frame(&mut authority, &mut observer);

    let live = observer.renderer().live_for(&id(1)).unwrap();
    assert_eq!(live.world_transform, placed.local_to_world);
    // vertices stay in plane-local space
    assert_eq!(live.mesh.positions[0], placed.boundary[0]);
    assert_eq!(
        live.world_positions()[0],
        placed.boundary[0] + Vec3::new(2.0, 0.0, -1.0)
    );
}

#[test]
fn degenerate_boundary_clears_the_mesh() {
    let mut authority = LocalAuthority::new(ServerConfig::default());
    let mut observer = observer(&mut authority);
    authority.request_add(surface(1));
    frame(&mut authority, &mut observer);

    authority.request_update(update(1, vec![Vec3::X, Vec3::Y]));
    frame(&mut authority, &mut observer);
    assert!(!observer
        .authority()
        .surfaces()
        .get(&id(1))
        .unwrap()
        .has_geometry());

    let renderer = observer.renderer();
    assert_eq!(renderer.calls().last(), Some(&RenderCall::Clear(id(1))));
    assert!(renderer.live_for(&id(1)).unwrap().mesh.is_empty());
    assert!(observer.mesh_cache().handle(&id(1)).is_some());
    assert!(observer.mesh_cache().is_visible(&id(1)));
}

#[test]
fn quiet_frames_create_and_release_nothing() {
    let mut authority = LocalAuthority::new(ServerConfig::default());
    let mut observer = observer(&mut authority);
    authority.request_add(surface(1));
    frame(&mut authority, &mut observer);

    for _ in 0..5 {
        assert!(frame(&mut authority, &mut observer).is_empty());
    }
}

#[test]
fn shutdown_releases_everything() {
    let mut authority = LocalAuthority::new(ServerConfig::default());
    let mut observer = observer(&mut authority);
    authority.request_add(surface(1));
    authority.request_add(surface(2));
    frame(&mut authority, &mut observer);

    let (_, renderer) = observer.shutdown();

    assert_eq!(renderer.live_count(), 0);
    assert_eq!(
        renderer.count_calls(|call| matches!(call, RenderCall::Release(_))),
        2
    );
}
