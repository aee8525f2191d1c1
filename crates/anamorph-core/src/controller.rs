//! Orientation controller: owns the current camera orientation and the
//! interaction state machine (locked → idle ⇄ dragging / animating).

use crate::constants::{ANIMATION_DURATION_SEC, DRAG_DEGREES_PER_PIXEL};
use crate::orientation::{shortest_azimuth_delta, Orientation};
use crate::reveal::RevealEvaluator;
use glam::Vec2;
use std::time::Duration;

/// An in-flight programmatic transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Animation {
    pub start: Orientation,
    pub target: Orientation,
    /// Shortest-path delta (azimuth within ±180°).
    pub delta: Orientation,
    pub elapsed: Duration,
    pub duration: Duration,
}

impl Animation {
    pub fn new(start: Orientation, target: Orientation, duration: Duration) -> Self {
        let target = target.normalize();
        Self {
            start,
            target,
            delta: Orientation {
                azimuth: shortest_azimuth_delta(start.azimuth, target.azimuth),
                polar: target.polar - start.polar,
            },
            elapsed: Duration::ZERO,
            duration,
        }
    }

    /// Linear progress in [0, 1].
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Orientation at the current eased progress.
    pub fn sample(&self) -> Orientation {
        let e = ease_in_out_cubic(self.progress());
        Orientation {
            azimuth: self.start.azimuth + self.delta.azimuth * e,
            polar: self.start.polar + self.delta.polar * e,
        }
        .normalize()
    }
}

#[inline]
pub fn ease_in_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ControllerState {
    /// Scene not loaded yet; all input is ignored.
    Locked,
    Idle,
    Dragging { last: Vec2 },
    Animating(Animation),
}

/// What a controller call did, for the caller to mirror into the display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Update {
    Ignored,
    /// Orientation or interaction state changed; no reveal check yet.
    Moved,
    /// The orientation settled and a reveal check ran.
    Settled { revealed: bool },
}

pub struct OrientationController {
    orientation: Orientation,
    state: ControllerState,
    evaluator: RevealEvaluator,
    pub sensitivity: f32,
    pub animation_duration: Duration,
}

impl OrientationController {
    pub fn new(initial: Orientation, evaluator: RevealEvaluator) -> Self {
        Self {
            orientation: initial.normalize(),
            state: ControllerState::Locked,
            evaluator,
            sensitivity: DRAG_DEGREES_PER_PIXEL,
            animation_duration: Duration::from_secs_f32(ANIMATION_DURATION_SEC),
        }
    }

    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[inline]
    pub fn state(&self) -> ControllerState {
        self.state
    }

    #[inline]
    pub fn revealed(&self) -> bool {
        self.evaluator.revealed()
    }

    pub fn evaluator(&self) -> &RevealEvaluator {
        &self.evaluator
    }

    pub fn is_locked(&self) -> bool {
        matches!(self.state, ControllerState::Locked)
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.state, ControllerState::Animating(_))
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, ControllerState::Dragging { .. })
    }

    /// Unlock input once the scene is ready. Later calls are no-ops.
    pub fn mark_ready(&mut self) {
        if self.is_locked() {
            self.state = ControllerState::Idle;
            log::info!("[controller] input unlocked");
        }
    }

    pub fn pointer_down(&mut self, pos: Vec2) -> Update {
        match self.state {
            ControllerState::Idle => {
                self.state = ControllerState::Dragging { last: pos };
                Update::Moved
            }
            _ => Update::Ignored,
        }
    }

    /// Horizontal motion turns azimuth the opposite way; vertical motion tilts polar.
    pub fn pointer_move(&mut self, pos: Vec2) -> Update {
        let ControllerState::Dragging { last } = self.state else {
            return Update::Ignored;
        };
        let d = pos - last;
        self.state = ControllerState::Dragging { last: pos };
        if d == Vec2::ZERO {
            return Update::Ignored;
        }
        self.orientation = Orientation {
            azimuth: self.orientation.azimuth - d.x * self.sensitivity,
            polar: self.orientation.polar + d.y * self.sensitivity,
        }
        .normalize();
        Update::Moved
    }

    /// Ends a drag (pointer up, leave or cancel) and checks for the reveal.
    pub fn pointer_up(&mut self) -> Update {
        if !self.is_dragging() {
            return Update::Ignored;
        }
        self.state = ControllerState::Idle;
        self.settle()
    }

    /// Start an eased transition towards `target`. Only accepted from idle.
    pub fn go(&mut self, target: Orientation) -> Update {
        if !matches!(self.state, ControllerState::Idle) {
            log::debug!("[controller] go ignored in {:?}", self.state);
            return Update::Ignored;
        }
        let anim = Animation::new(self.orientation, target, self.animation_duration);
        log::info!(
            "[controller] animate ({:.1},{:.1}) -> ({:.1},{:.1}) via Δaz {:.1}",
            anim.start.azimuth,
            anim.start.polar,
            anim.target.azimuth,
            anim.target.polar,
            anim.delta.azimuth
        );
        self.state = ControllerState::Animating(anim);
        Update::Moved
    }

    /// Advance an active animation by `dt`. Completion settles within this call.
    pub fn tick(&mut self, dt: Duration) -> Update {
        let ControllerState::Animating(mut anim) = self.state else {
            return Update::Ignored;
        };
        anim.elapsed = anim.elapsed.saturating_add(dt);
        if anim.progress() >= 1.0 {
            // land exactly on the target so boundary reveals are not lost to rounding
            self.orientation = anim.target;
            self.state = ControllerState::Idle;
            self.settle()
        } else {
            self.orientation = anim.sample();
            self.state = ControllerState::Animating(anim);
            Update::Moved
        }
    }

    /// Programmatic orientation change; ignored while locked or animating.
    pub fn set_orientation(&mut self, o: Orientation) -> Update {
        match self.state {
            ControllerState::Locked | ControllerState::Animating(_) => Update::Ignored,
            _ => {
                self.orientation = o.normalize();
                self.settle()
            }
        }
    }

    fn settle(&mut self) -> Update {
        Update::Settled {
            revealed: self.evaluator.evaluate(self.orientation),
        }
    }
}
