// Host-side tests for the point-cloud projector.

use anamorph_core::projector::*;
use anamorph_core::Orientation;
use glam::{Vec2, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn sample_mesh() -> Vec<Vec3> {
    // a lopsided, non-planar shape so every axis carries information
    (0..200)
        .map(|i| {
            let t = i as f32 * 0.1;
            Vec3::new(t.cos() * (1.0 + 0.1 * t), t * 0.2 - 1.0, t.sin() * 0.5 + 0.3)
        })
        .collect()
}

fn assert_orthonormal(b: &ProjectionBasis) {
    assert!((b.view.length() - 1.0).abs() < 1e-5);
    assert!((b.plane_x.length() - 1.0).abs() < 1e-5);
    assert!((b.plane_y.length() - 1.0).abs() < 1e-5);
    assert!(b.view.dot(b.plane_x).abs() < 1e-5);
    assert!(b.view.dot(b.plane_y).abs() < 1e-5);
    assert!(b.plane_x.dot(b.plane_y).abs() < 1e-5);
}

#[test]
fn basis_is_orthonormal_for_general_views() {
    for (theta, phi) in [(0.0, 90.0), (142.0, 68.0), (271.0, 12.0), (45.0, 160.0)] {
        let b = ProjectionBasis::for_view(Orientation::new(theta, phi).view_direction());
        assert_orthonormal(&b);
    }
}

#[test]
fn basis_switches_reference_axis_near_vertical() {
    let b = ProjectionBasis::for_view(Vec3::Y);
    assert_orthonormal(&b);
    // with +X as reference, plane_x = X × Y = Z
    assert!((b.plane_x - Vec3::Z).length() < 1e-5);

    let b = ProjectionBasis::for_view(Orientation::new(30.0, 1.0).view_direction());
    assert_orthonormal(&b);
}

#[test]
fn projection_preserves_silhouette_for_any_seed() {
    let mesh = sample_mesh();
    let view = Orientation::new(142.0, 68.0).view_direction();
    let scale = 1.7;
    let projector = Projector::new(view, scale, 3.0);
    for seed in [0_u64, 1, 42, 9999] {
        let mut rng = StdRng::seed_from_u64(seed);
        let projected = projector.project(&mesh, &mut rng);
        assert_eq!(projected.len(), mesh.len());
        for (p, v) in projected.iter().zip(&mesh) {
            let got = projector.basis.silhouette(*p);
            let want = projector.basis.silhouette(*v) * scale;
            assert!((got - want).length() < 1e-4, "seed {seed}: {got} vs {want}");
        }
    }
}

#[test]
fn projection_depth_stays_within_range() {
    let mesh = sample_mesh();
    let projector = Projector::new(Vec3::new(0.3, 0.2, -0.9), 1.0, 0.75);
    let mut rng = StdRng::seed_from_u64(7);
    for p in projector.project(&mesh, &mut rng) {
        let depth = p.dot(projector.basis.view);
        assert!(depth.abs() <= 0.75 + 1e-5);
    }
}

#[test]
fn projection_scatters_shape_off_axis() {
    // Seen from a different direction the jitter shows up in the silhouette.
    let mesh = sample_mesh();
    let projector = Projector::new(Vec3::Z, 1.0, 2.0);
    let mut rng_a = StdRng::seed_from_u64(1);
    let mut rng_b = StdRng::seed_from_u64(2);
    let a = projector.project(&mesh, &mut rng_a);
    let b = projector.project(&mesh, &mut rng_b);
    let side = ProjectionBasis::for_view(Vec3::X);
    let max_diff = a
        .iter()
        .zip(&b)
        .map(|(pa, pb)| (side.silhouette(*pa) - side.silhouette(*pb)).length())
        .fold(0.0_f32, f32::max);
    assert!(max_diff > 0.5);
}

#[test]
fn subsample_uses_fixed_stride() {
    let verts: Vec<Vec3> = (0..10).map(|i| Vec3::splat(i as f32)).collect();
    let picked = subsample(&verts, 3);
    // stride = floor(10 / 3) = 3
    assert_eq!(picked, vec![Vec3::splat(0.0), Vec3::splat(3.0), Vec3::splat(6.0)]);

    assert_eq!(subsample(&verts, 100).len(), 10);
    assert!(subsample(&verts, 0).is_empty());
    assert!(subsample(&[], 5).is_empty());
}

#[test]
fn subsample_spreads_when_stride_would_be_one() {
    let verts: Vec<Vec3> = (0..7999).map(|i| Vec3::splat(i as f32)).collect();
    let picked = subsample(&verts, 4000);
    assert_eq!(picked.len(), 4000);
    assert_eq!(picked[0], Vec3::ZERO);
    // the tail of the list is represented, not just the first 4000 vertices
    assert!(picked[3999].x > 7990.0);
    assert!(picked.windows(2).all(|w| w[1].x > w[0].x));

    // from twice the target upwards the whole-number stride applies
    let verts: Vec<Vec3> = (0..8000).map(|i| Vec3::splat(i as f32)).collect();
    let picked = subsample(&verts, 4000);
    assert_eq!(picked[1], Vec3::splat(2.0));
    assert_eq!(picked[3999], Vec3::splat(7998.0));
}

#[test]
fn recenter_moves_bbox_center_to_origin() {
    let mut verts = vec![
        Vec3::new(1.0, 2.0, 3.0),
        Vec3::new(5.0, 4.0, 3.0),
        Vec3::new(3.0, 10.0, 7.0),
    ];
    recenter(&mut verts);
    let (lo, hi) = bounds(&verts).unwrap();
    assert!(((lo + hi) * 0.5).length() < 1e-6);
    assert_eq!(verts[0], Vec3::new(-2.0, -4.0, -2.0));
}

#[test]
fn fit_scale_maps_largest_dimension() {
    let verts = vec![Vec3::new(-1.0, 0.0, 0.0), Vec3::new(3.0, 1.0, 0.5)];
    assert!((fit_scale(&verts, 2.0) - 0.5).abs() < 1e-6);
    assert_eq!(fit_scale(&[Vec3::ONE, Vec3::ONE], 2.0), 1.0);
    assert_eq!(fit_scale(&[], 2.0), 1.0);
}

#[test]
fn axis_fix_stands_mesh_upright() {
    let v = Vec3::new(1.0, 2.0, 3.0);
    assert_eq!(AxisFix::None.apply(v), v);
    assert_eq!(AxisFix::StandUpright.apply(v), Vec3::new(1.0, 3.0, -2.0));
}

#[test]
fn fallback_shell_stays_in_radius_band() {
    let mut rng = StdRng::seed_from_u64(3);
    let pts = fallback_shell(500, 1.5, 2.5, &mut rng);
    assert_eq!(pts.len(), 500);
    for p in pts {
        let r = p.length();
        assert!((1.5 - 1e-4..=2.5 + 1e-4).contains(&r), "radius {r}");
    }
}

#[test]
fn camouflage_fills_cube() {
    let mut rng = StdRng::seed_from_u64(4);
    let pts = camouflage_cube(2000, 3.0, &mut rng);
    assert_eq!(pts.len(), 2000);
    assert!(pts.iter().all(|p| p.abs().max_element() <= 3.0));
    // spread across the cube rather than collapsed onto a plane
    let (lo, hi) = bounds(&pts).unwrap();
    assert!((hi - lo).min_element() > 5.0);
}

#[test]
fn silhouette_discards_depth() {
    let b = ProjectionBasis::for_view(Vec3::Z);
    let p = Vec3::new(0.4, -0.2, 0.0);
    assert_eq!(b.silhouette(p), b.silhouette(p + Vec3::Z * 9.0));
    assert!(b.silhouette(p).distance(Vec2::new(p.dot(b.plane_x), p.dot(b.plane_y))) < 1e-6);
}
