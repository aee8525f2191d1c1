// Host-side tests for scene composition and the readiness gate.

use anamorph_core::projector::ProjectionBasis;
use anamorph_core::{
    ambient_opacity, build_cloud, parse_obj_vertices, Asset, CloudKind, MeshError,
    OrientationController, Orientation, Readiness, RevealEvaluator, SceneComposer, SceneParams,
    Update,
};
use glam::{Vec2, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn small_params() -> SceneParams {
    let mut p = SceneParams::default();
    p.subject.sample_count = 50;
    p.target.sample_count = 30;
    p.camouflage_count = 100;
    p.fallback_count = 40;
    p
}

fn grid_mesh(n: usize) -> Vec<Vec3> {
    (0..n)
        .map(|i| Vec3::new((i % 10) as f32, (i / 10) as f32, (i % 7) as f32 * 0.3))
        .collect()
}

#[test]
fn ready_only_after_both_assets_in_either_order() {
    for order in [[Asset::Subject, Asset::Target], [Asset::Target, Asset::Subject]] {
        let mut rng = StdRng::seed_from_u64(11);
        let mut scene = SceneComposer::new(small_params());
        assert_eq!(scene.complete(order[0], Ok(grid_mesh(200)), &mut rng), Readiness::Pending);
        assert!(!scene.is_ready());
        assert!(scene.cloud(CloudKind::Camouflage).is_none());
        assert_eq!(
            scene.complete(order[1], Ok(grid_mesh(200)), &mut rng),
            Readiness::BecameReady
        );
        assert!(scene.is_ready());
        assert_eq!(scene.cloud(CloudKind::Camouflage).unwrap().positions.len(), 100);
        assert_eq!(scene.clouds().count(), 3);
    }
}

#[test]
fn failed_load_falls_back_without_blocking_readiness() {
    let mut rng = StdRng::seed_from_u64(12);
    let mut scene = SceneComposer::new(small_params());
    assert_eq!(
        scene.complete(Asset::Target, Err(MeshError::Fetch("404".into())), &mut rng),
        Readiness::Pending
    );
    let fallback = scene.cloud(CloudKind::Target).unwrap();
    assert_eq!(fallback.positions.len(), 40);
    assert!(fallback
        .positions
        .iter()
        .all(|p| (1.5 - 1e-4..=2.5 + 1e-4).contains(&p.length())));

    assert_eq!(
        scene.complete(Asset::Subject, Ok(grid_mesh(500)), &mut rng),
        Readiness::BecameReady
    );
    assert_eq!(scene.cloud(CloudKind::Subject).unwrap().positions.len(), 50);
}

#[test]
fn both_loads_failing_still_reach_ready() {
    let mut rng = StdRng::seed_from_u64(13);
    let mut scene = SceneComposer::new(small_params());
    scene.complete(Asset::Subject, Err(MeshError::Empty), &mut rng);
    assert_eq!(
        scene.complete(Asset::Target, Err(MeshError::Parse("bad".into())), &mut rng),
        Readiness::BecameReady
    );
}

#[test]
fn duplicate_completion_is_ignored() {
    let mut rng = StdRng::seed_from_u64(14);
    let mut scene = SceneComposer::new(small_params());
    scene.complete(Asset::Subject, Ok(grid_mesh(200)), &mut rng);
    let before = scene.cloud(CloudKind::Subject).unwrap().positions.clone();
    assert_eq!(
        scene.complete(Asset::Subject, Err(MeshError::Empty), &mut rng),
        Readiness::Pending
    );
    assert_eq!(scene.cloud(CloudKind::Subject).unwrap().positions, before);

    scene.complete(Asset::Target, Ok(grid_mesh(200)), &mut rng);
    assert_eq!(
        scene.complete(Asset::Target, Ok(grid_mesh(200)), &mut rng),
        Readiness::AlreadyReady
    );
}

#[test]
fn target_cloud_is_recognizable_from_secret_orientation() {
    let params = small_params();
    let mesh = grid_mesh(30);
    let mut rng = StdRng::seed_from_u64(15);
    let cloud = build_cloud(&params.target, &mesh, &mut rng);
    let basis = ProjectionBasis::for_view(params.target.orientation.view_direction());

    // stride 1, so points line up with the recentered mesh one to one
    let center = Vec3::new(4.5, 1.0, 0.9);
    let scale = params.target.target_size / 9.0;
    for (p, v) in cloud.positions.iter().zip(&mesh) {
        let want = basis.silhouette(*v - center) * scale;
        assert!((basis.silhouette(*p) - want).length() < 1e-4);
    }
}

#[test]
fn subject_cloud_is_stood_upright_before_projection() {
    let params = small_params();
    // a flat, Z-up slab becomes a vertical one
    let mesh: Vec<Vec3> = (0..50)
        .map(|i| Vec3::new((i % 5) as f32, 0.0, (i / 5) as f32))
        .collect();
    let mut rng = StdRng::seed_from_u64(16);
    let cloud = build_cloud(&params.subject, &mesh, &mut rng);
    let basis = ProjectionBasis::for_view(params.subject.orientation.view_direction());
    let heights: Vec<f32> = cloud.positions.iter().map(|p| basis.silhouette(*p).y).collect();
    let span = heights.iter().cloned().fold(f32::MIN, f32::max)
        - heights.iter().cloned().fold(f32::MAX, f32::min);
    assert!((span - params.subject.target_size).abs() < 1e-3, "span {span}");
}

#[test]
fn ambient_oscillation_only_touches_shape_clouds() {
    let mut rng = StdRng::seed_from_u64(17);
    let mut scene = SceneComposer::new(small_params());
    scene.complete(Asset::Subject, Ok(grid_mesh(100)), &mut rng);
    scene.complete(Asset::Target, Ok(grid_mesh(100)), &mut rng);
    let camo_before = scene.cloud(CloudKind::Camouflage).unwrap().style;

    scene.apply_ambient(1.0); // quarter period at 0.25 Hz: peak
    let subject = scene.cloud(CloudKind::Subject).unwrap().style;
    assert!((subject.opacity - (subject.base_opacity + 0.08)).abs() < 1e-5);
    assert_eq!(scene.cloud(CloudKind::Camouflage).unwrap().style, camo_before);

    assert_eq!(ambient_opacity(0.97, 0.08, 0.25, 1.0), 1.0);
    assert!((ambient_opacity(0.5, 0.08, 0.25, 0.0) - 0.5).abs() < 1e-6);
}

#[test]
fn interaction_is_inert_until_scene_ready() {
    let mut rng = StdRng::seed_from_u64(18);
    let mut scene = SceneComposer::new(small_params());
    let mut controller = OrientationController::new(
        Orientation::new(0.0, 90.0),
        RevealEvaluator::new(Orientation::new(142.0, 68.0), 1.0),
    );

    scene.complete(Asset::Target, Ok(grid_mesh(60)), &mut rng);
    assert_eq!(controller.go(Orientation::new(142.0, 68.0)), Update::Ignored);
    assert_eq!(controller.pointer_down(Vec2::ZERO), Update::Ignored);

    if scene.complete(Asset::Subject, Err(MeshError::Empty), &mut rng) == Readiness::BecameReady {
        controller.mark_ready();
    }
    assert_eq!(controller.go(Orientation::new(142.0, 68.0)), Update::Moved);
}

#[test]
fn every_asset_maps_to_its_own_cloud() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut scene = SceneComposer::new(small_params());
    assert_eq!(CloudKind::from(Asset::Subject), CloudKind::Subject);
    assert_eq!(CloudKind::from(Asset::Target), CloudKind::Target);

    for asset in Asset::ALL {
        assert!(!scene.has_asset(asset));
        scene.complete(asset, Ok(grid_mesh(40)), &mut rng);
        assert!(scene.has_asset(asset));
        assert!(scene.cloud(CloudKind::from(asset)).is_some());
    }
    assert!(scene.is_ready());
}

#[test]
fn obj_vertices_are_parsed_in_order() {
    let src = b"# tri\nv 0 0 0\nv 1.5 0 0\nv 0 2 -1\nf 1 2 3\n";
    let verts = parse_obj_vertices(src).unwrap();
    assert_eq!(
        verts,
        vec![Vec3::ZERO, Vec3::new(1.5, 0.0, 0.0), Vec3::new(0.0, 2.0, -1.0)]
    );
}

#[test]
fn obj_without_vertices_is_an_error() {
    assert!(matches!(parse_obj_vertices(b"# nothing here\n"), Err(MeshError::Empty)));
}
