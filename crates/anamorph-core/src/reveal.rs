use crate::orientation::{azimuth_distance, Orientation};

/// True when both per-axis deviations are within `tolerance` degrees.
///
/// The axes are bounded independently rather than by a combined angular
/// distance, so near the poles the accepted region is wider than it looks.
pub fn is_revealed(current: Orientation, secret: Orientation, tolerance: f32) -> bool {
    let d_azimuth = azimuth_distance(current.azimuth, secret.azimuth);
    let d_polar = (current.polar - secret.polar).abs();
    d_azimuth <= tolerance && d_polar <= tolerance
}

/// Holds the secret orientation and the last reveal decision.
#[derive(Clone, Debug)]
pub struct RevealEvaluator {
    pub secret: Orientation,
    pub tolerance: f32,
    revealed: bool,
    changed: bool,
}

impl RevealEvaluator {
    pub fn new(secret: Orientation, tolerance: f32) -> Self {
        Self {
            secret,
            tolerance,
            revealed: false,
            changed: false,
        }
    }

    pub fn evaluate(&mut self, current: Orientation) -> bool {
        let now = is_revealed(current, self.secret, self.tolerance);
        self.changed = now != self.revealed;
        self.revealed = now;
        if self.changed {
            log::info!(
                "[reveal] {} at ({:.1},{:.1})",
                if now { "revealed" } else { "hidden" },
                current.azimuth,
                current.polar
            );
        }
        now
    }

    #[inline]
    pub fn revealed(&self) -> bool {
        self.revealed
    }

    /// Whether the most recent [`RevealEvaluator::evaluate`] flipped the state.
    #[inline]
    pub fn changed(&self) -> bool {
        self.changed
    }
}
