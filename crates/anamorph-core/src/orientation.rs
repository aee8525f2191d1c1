//! Spherical orientation model.
//!
//! Azimuth is measured about the vertical (+Y) axis, polar angle from the top
//! pole. Both are stored in degrees; radians only appear inside the
//! Cartesian conversions.

use crate::constants::{
    DEFAULT_INPUT_AZIMUTH_DEG, DEFAULT_INPUT_POLAR_DEG, POLAR_MAX_DEG, POLAR_MIN_DEG,
};
use glam::Vec3;

/// Camera viewing direction relative to the scene origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orientation {
    pub azimuth: f32,
    pub polar: f32,
}

impl Default for Orientation {
    fn default() -> Self {
        Self {
            azimuth: DEFAULT_INPUT_AZIMUTH_DEG,
            polar: DEFAULT_INPUT_POLAR_DEG,
        }
    }
}

impl Orientation {
    /// Build a normalized orientation.
    pub fn new(azimuth: f32, polar: f32) -> Self {
        Self { azimuth, polar }.normalize()
    }

    pub fn from_degrees(deg: [f32; 2]) -> Self {
        Self::new(deg[0], deg[1])
    }

    /// Wrap azimuth into [0, 360) and clamp polar into [1, 179].
    pub fn normalize(self) -> Self {
        let fallback = Self::default();
        let azimuth = if self.azimuth.is_finite() {
            wrap_degrees(self.azimuth)
        } else {
            fallback.azimuth
        };
        let polar = if self.polar.is_finite() {
            self.polar.clamp(POLAR_MIN_DEG, POLAR_MAX_DEG)
        } else {
            fallback.polar
        };
        Self { azimuth, polar }
    }

    /// x = r·sinφ·cosθ, y = r·cosφ, z = r·sinφ·sinθ
    pub fn to_cartesian(self, radius: f32) -> Vec3 {
        let theta = self.azimuth.to_radians();
        let phi = self.polar.to_radians();
        Vec3::new(
            radius * phi.sin() * theta.cos(),
            radius * phi.cos(),
            radius * phi.sin() * theta.sin(),
        )
    }

    /// Unit vector from the origin towards a camera at this orientation.
    #[inline]
    pub fn view_direction(self) -> Vec3 {
        self.to_cartesian(1.0)
    }

    /// Inverse of [`Orientation::to_cartesian`]. A zero vector maps to the default.
    pub fn from_cartesian(v: Vec3) -> Self {
        let len = v.length();
        if !len.is_finite() || len <= f32::EPSILON {
            return Self::default();
        }
        let polar = (v.y / len).clamp(-1.0, 1.0).acos().to_degrees();
        let azimuth = v.z.atan2(v.x).to_degrees();
        Self::new(azimuth, polar)
    }

    /// Whole degrees for display surfaces.
    pub fn rounded(self) -> (i32, i32) {
        (self.azimuth.round() as i32, self.polar.round() as i32)
    }
}

#[inline]
fn wrap_degrees(deg: f32) -> f32 {
    let w = deg.rem_euclid(360.0);
    // tiny negative inputs round up to exactly 360 in f32
    if w >= 360.0 {
        0.0
    } else {
        w
    }
}

/// Wrap-aware azimuth distance, always in [0, 180].
pub fn azimuth_distance(a: f32, b: f32) -> f32 {
    let diff = (a - b).abs().rem_euclid(360.0);
    diff.min(360.0 - diff)
}

/// Signed azimuth delta from `from` to `to` that never exceeds half a turn.
pub fn shortest_azimuth_delta(from: f32, to: f32) -> f32 {
    let mut delta = to - from;
    if delta > 180.0 {
        delta -= 360.0;
    } else if delta < -180.0 {
        delta += 360.0;
    }
    delta
}
