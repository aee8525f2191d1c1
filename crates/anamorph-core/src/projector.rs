//! Point-cloud projector.
//!
//! Flattens mesh vertices onto the plane perpendicular to a view direction and
//! then scatters each point along that direction. Looking down the view axis
//! the scatter is invisible and the silhouette survives; from anywhere else the
//! per-point depth breaks the shape apart.

use crate::constants::BASIS_PARALLEL_DOT;
use glam::{Vec2, Vec3};
use rand::Rng;

/// Orthonormal frame whose `view` axis is the privileged viewing direction.
#[derive(Clone, Copy, Debug)]
pub struct ProjectionBasis {
    pub view: Vec3,
    pub plane_x: Vec3,
    pub plane_y: Vec3,
}

impl ProjectionBasis {
    pub fn for_view(view_dir: Vec3) -> Self {
        let view = view_dir.normalize_or_zero();
        let view = if view == Vec3::ZERO { Vec3::Z } else { view };
        let up = if view.dot(Vec3::Y).abs() >= BASIS_PARALLEL_DOT {
            Vec3::X
        } else {
            Vec3::Y
        };
        let plane_x = up.cross(view).normalize();
        let plane_y = view.cross(plane_x);
        Self {
            view,
            plane_x,
            plane_y,
        }
    }

    /// Plane coordinates of `p`; its depth along `view` is discarded.
    #[inline]
    pub fn silhouette(&self, p: Vec3) -> Vec2 {
        Vec2::new(p.dot(self.plane_x), p.dot(self.plane_y))
    }
}

/// Orientation correction applied to a mesh before projection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AxisFix {
    #[default]
    None,
    /// Z-up authored mesh stood upright with its depth mirrored.
    StandUpright,
}

impl AxisFix {
    #[inline]
    pub fn apply(self, v: Vec3) -> Vec3 {
        match self {
            AxisFix::None => v,
            AxisFix::StandUpright => Vec3::new(v.x, v.z, -v.y),
        }
    }
}

/// Keep every `floor(total / target)`-th vertex, at most `target_count` of them.
///
/// When the mesh has fewer than twice `target_count` vertices the whole-number
/// stride would be 1 and only the head of the list survives, so the picks are
/// spaced `total / target` apart instead.
pub fn subsample(vertices: &[Vec3], target_count: usize) -> Vec<Vec3> {
    if target_count == 0 {
        return Vec::new();
    }
    let total = vertices.len();
    if total <= target_count {
        return vertices.to_vec();
    }
    let stride = total / target_count;
    if stride >= 2 {
        return vertices
            .iter()
            .step_by(stride)
            .take(target_count)
            .copied()
            .collect();
    }
    (0..target_count)
        .map(|i| vertices[i * total / target_count])
        .collect()
}

/// Axis-aligned bounds as `(min, max)`, or `None` for an empty slice.
pub fn bounds(vertices: &[Vec3]) -> Option<(Vec3, Vec3)> {
    let first = *vertices.first()?;
    Some(
        vertices
            .iter()
            .fold((first, first), |(lo, hi), v| (lo.min(*v), hi.max(*v))),
    )
}

/// Shift vertices so their bounding-box center sits at the origin.
pub fn recenter(vertices: &mut [Vec3]) {
    if let Some((lo, hi)) = bounds(vertices) {
        let center = (lo + hi) * 0.5;
        for v in vertices.iter_mut() {
            *v -= center;
        }
    }
}

/// Scale mapping the largest bounding-box dimension to `target_size`.
pub fn fit_scale(vertices: &[Vec3], target_size: f32) -> f32 {
    match bounds(vertices) {
        Some((lo, hi)) => {
            let extent = (hi - lo).max_element();
            if extent > f32::EPSILON {
                target_size / extent
            } else {
                1.0
            }
        }
        None => 1.0,
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Projector {
    pub basis: ProjectionBasis,
    pub scale: f32,
    /// Depth jitter is drawn uniformly from `[-depth_range, depth_range]`.
    pub depth_range: f32,
}

impl Projector {
    pub fn new(view_dir: Vec3, scale: f32, depth_range: f32) -> Self {
        Self {
            basis: ProjectionBasis::for_view(view_dir),
            scale,
            depth_range,
        }
    }

    pub fn project<R: Rng + ?Sized>(&self, vertices: &[Vec3], rng: &mut R) -> Vec<Vec3> {
        let b = &self.basis;
        vertices
            .iter()
            .map(|v| {
                let flat = b.silhouette(*v) * self.scale;
                let depth = self.random_depth(rng);
                b.plane_x * flat.x + b.plane_y * flat.y + b.view * depth
            })
            .collect()
    }

    #[inline]
    fn random_depth<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        if self.depth_range > 0.0 {
            rng.gen_range(-self.depth_range..=self.depth_range)
        } else {
            0.0
        }
    }
}

/// Points on a spherical shell with radius in `[radius_min, radius_max]`.
pub fn fallback_shell<R: Rng + ?Sized>(
    count: usize,
    radius_min: f32,
    radius_max: f32,
    rng: &mut R,
) -> Vec<Vec3> {
    let (r_lo, r_hi) = if radius_min <= radius_max {
        (radius_min, radius_max)
    } else {
        (radius_max, radius_min)
    };
    (0..count)
        .map(|_| {
            let theta = rng.gen_range(0.0..std::f32::consts::TAU);
            // uniform on the sphere: cos(phi) uniform in [-1, 1]
            let cos_phi: f32 = rng.gen_range(-1.0..=1.0);
            let sin_phi = (1.0 - cos_phi * cos_phi).max(0.0).sqrt();
            let r = rng.gen_range(r_lo..=r_hi);
            Vec3::new(
                r * sin_phi * theta.cos(),
                r * cos_phi,
                r * sin_phi * theta.sin(),
            )
        })
        .collect()
}

/// Uniform noise inside the cube `[-half_extent, half_extent]^3`.
pub fn camouflage_cube<R: Rng + ?Sized>(count: usize, half_extent: f32, rng: &mut R) -> Vec<Vec3> {
    let h = half_extent.abs();
    (0..count)
        .map(|_| {
            Vec3::new(
                rng.gen_range(-h..=h),
                rng.gen_range(-h..=h),
                rng.gen_range(-h..=h),
            )
        })
        .collect()
}
