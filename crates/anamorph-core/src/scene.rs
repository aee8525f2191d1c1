//! Scene composition and the load readiness gate.
//!
//! The two mesh-derived clouds arrive independently, in either order, and
//! possibly as failures. The composer fills a slot per asset and only once
//! both are present does it add the camouflage cloud and report readiness.

use crate::constants::*;
use crate::mesh::MeshError;
use crate::orientation::Orientation;
use crate::projector::{self, AxisFix, Projector};
use glam::Vec3;
use rand::Rng;

/// The two mesh assets the scene is built from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Asset {
    Subject,
    Target,
}

impl Asset {
    pub const ALL: [Asset; 2] = [Asset::Subject, Asset::Target];

    pub fn name(self) -> &'static str {
        match self {
            Asset::Subject => "subject",
            Asset::Target => "target",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloudKind {
    Subject,
    Target,
    Camouflage,
}

impl From<Asset> for CloudKind {
    fn from(a: Asset) -> Self {
        match a {
            Asset::Subject => CloudKind::Subject,
            Asset::Target => CloudKind::Target,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointStyle {
    pub color: [f32; 3],
    pub size: f32,
    pub base_opacity: f32,
    /// Opacity for the current frame; only the ambient oscillation changes it.
    pub opacity: f32,
}

impl PointStyle {
    pub fn new(color: [f32; 3], size: f32, opacity: f32) -> Self {
        Self {
            color,
            size,
            base_opacity: opacity,
            opacity,
        }
    }
}

#[derive(Clone, Debug)]
pub struct PointCloud {
    pub positions: Vec<Vec3>,
    pub style: PointStyle,
}

/// How one asset is turned into a cloud.
#[derive(Clone, Debug)]
pub struct AssetParams {
    pub orientation: Orientation,
    pub sample_count: usize,
    pub target_size: f32,
    pub depth_range: f32,
    pub axis_fix: AxisFix,
    pub style: PointStyle,
}

#[derive(Clone, Debug)]
pub struct SceneParams {
    pub subject: AssetParams,
    pub target: AssetParams,
    pub camouflage_count: usize,
    pub camouflage_half_extent: f32,
    pub camouflage_style: PointStyle,
    pub fallback_count: usize,
    pub fallback_radius: (f32, f32),
    pub ambient_amplitude: f32,
    pub ambient_freq_hz: f32,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            subject: AssetParams {
                orientation: Orientation::from_degrees(HOME_ORIENTATION_DEG),
                sample_count: SUBJECT_SAMPLE_COUNT,
                target_size: SUBJECT_TARGET_SIZE,
                depth_range: SUBJECT_DEPTH_RANGE,
                axis_fix: AxisFix::StandUpright,
                style: PointStyle::new(SUBJECT_COLOR, SUBJECT_POINT_SIZE, SUBJECT_OPACITY),
            },
            target: AssetParams {
                orientation: Orientation::from_degrees(SECRET_ORIENTATION_DEG),
                sample_count: TARGET_SAMPLE_COUNT,
                target_size: TARGET_TARGET_SIZE,
                depth_range: TARGET_DEPTH_RANGE,
                axis_fix: AxisFix::None,
                style: PointStyle::new(TARGET_COLOR, TARGET_POINT_SIZE, TARGET_OPACITY),
            },
            camouflage_count: CAMOUFLAGE_COUNT,
            camouflage_half_extent: CAMOUFLAGE_HALF_EXTENT,
            camouflage_style: PointStyle::new(
                CAMOUFLAGE_COLOR,
                CAMOUFLAGE_POINT_SIZE,
                CAMOUFLAGE_OPACITY,
            ),
            fallback_count: FALLBACK_COUNT,
            fallback_radius: (FALLBACK_RADIUS_MIN, FALLBACK_RADIUS_MAX),
            ambient_amplitude: AMBIENT_OPACITY_AMPLITUDE,
            ambient_freq_hz: AMBIENT_OPACITY_FREQ_HZ,
        }
    }
}

impl SceneParams {
    pub fn asset(&self, asset: Asset) -> &AssetParams {
        match asset {
            Asset::Subject => &self.subject,
            Asset::Target => &self.target,
        }
    }
}

/// Subsample, recenter, fix axes, fit and project one mesh.
pub fn build_cloud<R: Rng + ?Sized>(params: &AssetParams, raw: &[Vec3], rng: &mut R) -> PointCloud {
    let mut vertices = projector::subsample(raw, params.sample_count);
    projector::recenter(&mut vertices);
    for v in vertices.iter_mut() {
        *v = params.axis_fix.apply(*v);
    }
    let scale = projector::fit_scale(&vertices, params.target_size);
    let projector = Projector::new(
        params.orientation.view_direction(),
        scale,
        params.depth_range,
    );
    PointCloud {
        positions: projector.project(&vertices, rng),
        style: params.style,
    }
}

/// Result of reporting an asset completion to the composer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Readiness {
    Pending,
    /// Both assets are in; returned exactly once.
    BecameReady,
    AlreadyReady,
}

pub struct SceneComposer {
    pub params: SceneParams,
    subject: Option<PointCloud>,
    target: Option<PointCloud>,
    camouflage: Option<PointCloud>,
}

impl SceneComposer {
    pub fn new(params: SceneParams) -> Self {
        Self {
            params,
            subject: None,
            target: None,
            camouflage: None,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.camouflage.is_some()
    }

    pub fn has_asset(&self, asset: Asset) -> bool {
        self.cloud(CloudKind::from(asset)).is_some()
    }

    /// Record the outcome of loading `asset`. Failures degrade to a fallback shell.
    pub fn complete<R: Rng + ?Sized>(
        &mut self,
        asset: Asset,
        loaded: Result<Vec<Vec3>, MeshError>,
        rng: &mut R,
    ) -> Readiness {
        if self.has_asset(asset) {
            log::debug!("[scene] duplicate completion for {} ignored", asset.name());
            return if self.is_ready() {
                Readiness::AlreadyReady
            } else {
                Readiness::Pending
            };
        }

        let params = self.params.asset(asset).clone();
        let cloud = match loaded {
            Ok(vertices) => {
                let cloud = build_cloud(&params, &vertices, rng);
                log::info!(
                    "[scene] {} cloud: {} of {} vertices",
                    asset.name(),
                    cloud.positions.len(),
                    vertices.len()
                );
                cloud
            }
            Err(e) => {
                log::warn!("[scene] {} unavailable ({}); using fallback shell", asset.name(), e);
                let (r_min, r_max) = self.params.fallback_radius;
                PointCloud {
                    positions: projector::fallback_shell(
                        self.params.fallback_count,
                        r_min,
                        r_max,
                        rng,
                    ),
                    style: params.style,
                }
            }
        };
        match asset {
            Asset::Subject => self.subject = Some(cloud),
            Asset::Target => self.target = Some(cloud),
        }

        if self.subject.is_some() && self.target.is_some() && self.camouflage.is_none() {
            self.camouflage = Some(PointCloud {
                positions: projector::camouflage_cube(
                    self.params.camouflage_count,
                    self.params.camouflage_half_extent,
                    rng,
                ),
                style: self.params.camouflage_style,
            });
            log::info!("[scene] ready");
            Readiness::BecameReady
        } else {
            Readiness::Pending
        }
    }

    pub fn cloud(&self, kind: CloudKind) -> Option<&PointCloud> {
        match kind {
            CloudKind::Subject => self.subject.as_ref(),
            CloudKind::Target => self.target.as_ref(),
            CloudKind::Camouflage => self.camouflage.as_ref(),
        }
    }

    /// Present clouds in draw order.
    pub fn clouds(&self) -> impl Iterator<Item = (CloudKind, &PointCloud)> {
        [CloudKind::Camouflage, CloudKind::Subject, CloudKind::Target]
            .into_iter()
            .filter_map(move |k| self.cloud(k).map(|c| (k, c)))
    }

    /// Oscillate subject/target opacity; has no bearing on reveal state.
    pub fn apply_ambient(&mut self, time_sec: f32) {
        let amp = self.params.ambient_amplitude;
        let freq = self.params.ambient_freq_hz;
        for cloud in [self.subject.as_mut(), self.target.as_mut()]
            .into_iter()
            .flatten()
        {
            cloud.style.opacity = ambient_opacity(cloud.style.base_opacity, amp, freq, time_sec);
        }
    }
}

#[inline]
pub fn ambient_opacity(base: f32, amplitude: f32, freq_hz: f32, time_sec: f32) -> f32 {
    (base + amplitude * (std::f32::consts::TAU * freq_hz * time_sec).sin()).clamp(0.0, 1.0)
}
