/// Web front-end constants: element ids, asset locations and renderer defaults.
///
/// Scene tuning (angles, counts, sizes) lives in `anamorph_core::constants`.
// Canvas and controls
pub const CANVAS_ID: &str = "app-canvas";
pub const AZIMUTH_INPUT_ID: &str = "target-azimuth";
pub const POLAR_INPUT_ID: &str = "target-polar";
pub const GO_BUTTON_ID: &str = "go-button";
pub const CONTROLS_ID: &str = "controls";
pub const LOADING_ID: &str = "loading";
pub const SECRET_MESSAGE_ID: &str = "secret-message";

// Orientation readouts: desktop panel and mobile bar
pub const AZIMUTH_DISPLAY_IDS: [&str; 2] = ["azimuth-value", "azimuth-value-mobile"];
pub const POLAR_DISPLAY_IDS: [&str; 2] = ["polar-value", "polar-value-mobile"];

// CSS classes toggled by the app
pub const REVEALED_CLASS: &str = "revealed";
pub const HIDDEN_CLASS: &str = "hidden";

// Mesh assets
pub const SUBJECT_MESH_URL: &str = "assets/subject.obj";
pub const TARGET_MESH_URL: &str = "assets/target.obj";

// Background
pub const CLEAR_COLOR: [f64; 3] = [0.0, 0.0, 0.02];

// Frame delta clamp so a backgrounded tab does not jump an animation to its end
pub const MAX_FRAME_DT_SEC: f32 = 0.1;
