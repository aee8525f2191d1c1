// Shared scene tuning constants. Angles are in degrees, sizes in scene units.

// Orientation domain
pub const POLAR_MIN_DEG: f32 = 1.0; // poles excluded to keep the camera basis well defined
pub const POLAR_MAX_DEG: f32 = 179.0;
pub const DEFAULT_INPUT_AZIMUTH_DEG: f32 = 0.0; // used for missing/non-numeric input
pub const DEFAULT_INPUT_POLAR_DEG: f32 = 90.0;

// Orientations the two shapes are encoded for
pub const HOME_ORIENTATION_DEG: [f32; 2] = [0.0, 90.0];
pub const SECRET_ORIENTATION_DEG: [f32; 2] = [142.0, 68.0];
pub const REVEAL_TOLERANCE_DEG: f32 = 1.0;

// Interaction
pub const DRAG_DEGREES_PER_PIXEL: f32 = 0.3;
pub const ANIMATION_DURATION_SEC: f32 = 1.5;

// Projector
pub const BASIS_PARALLEL_DOT: f32 = 0.99; // |view·up| at or above this swaps the reference axis

// Subject cloud
pub const SUBJECT_SAMPLE_COUNT: usize = 4000;
pub const SUBJECT_TARGET_SIZE: f32 = 3.0;
pub const SUBJECT_DEPTH_RANGE: f32 = 2.5; // jitter is drawn from [-range, range]
pub const SUBJECT_COLOR: [f32; 3] = [0.85, 0.9, 1.0];
pub const SUBJECT_POINT_SIZE: f32 = 2.5;
pub const SUBJECT_OPACITY: f32 = 0.85;

// Target cloud (smaller and sparser than the subject)
pub const TARGET_SAMPLE_COUNT: usize = 1500;
pub const TARGET_TARGET_SIZE: f32 = 1.6;
pub const TARGET_DEPTH_RANGE: f32 = 2.0;
pub const TARGET_COLOR: [f32; 3] = [0.85, 0.9, 1.0];
pub const TARGET_POINT_SIZE: f32 = 2.5;
pub const TARGET_OPACITY: f32 = 0.85;

// Camouflage cloud
pub const CAMOUFLAGE_COUNT: usize = 6000;
pub const CAMOUFLAGE_HALF_EXTENT: f32 = 3.0;
pub const CAMOUFLAGE_COLOR: [f32; 3] = [0.85, 0.9, 1.0];
pub const CAMOUFLAGE_POINT_SIZE: f32 = 2.0;
pub const CAMOUFLAGE_OPACITY: f32 = 0.6;

// Fallback shell used when a mesh cannot be loaded
pub const FALLBACK_COUNT: usize = 1200;
pub const FALLBACK_RADIUS_MIN: f32 = 1.5;
pub const FALLBACK_RADIUS_MAX: f32 = 2.5;

// Ambient opacity oscillation
pub const AMBIENT_OPACITY_AMPLITUDE: f32 = 0.08;
pub const AMBIENT_OPACITY_FREQ_HZ: f32 = 0.25;

// Camera
pub const CAMERA_RADIUS: f32 = 6.0;
pub const CAMERA_FOVY_DEG: f32 = 60.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;
