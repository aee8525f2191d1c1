use anamorph_core::constants::{DEFAULT_INPUT_AZIMUTH_DEG, DEFAULT_INPUT_POLAR_DEG};
use anamorph_core::Orientation;
use glam::Vec2;
use web_sys as web;

// ---------------- Pointer helpers ----------------
/// Pointer position in CSS pixels relative to the canvas. Drag sensitivity is
/// expressed per CSS pixel so it does not change with devicePixelRatio.
#[inline]
pub fn pointer_canvas_css(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    )
}

// ---------------- Target field parsing ----------------
/// Parse a numeric angle field; blank, non-numeric or non-finite input yields `default`.
#[inline]
pub fn parse_angle_field(raw: Option<&str>, default: f32) -> f32 {
    raw.map(str::trim)
        .and_then(|s| s.parse::<f32>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(default)
}

/// Requested target orientation from the two text fields.
pub fn target_from_fields(azimuth: Option<&str>, polar: Option<&str>) -> Orientation {
    Orientation::new(
        parse_angle_field(azimuth, DEFAULT_INPUT_AZIMUTH_DEG),
        parse_angle_field(polar, DEFAULT_INPUT_POLAR_DEG),
    )
}
