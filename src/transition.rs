/*
 * Transition Module
 *
 * This module defines the easing curves and the per-item motion state that the
 * scheduler advances once per frame. Two interpolation modes are supported:
 * - Tween: fixed-duration interpolation shaped by an easing curve
 * - Drift: exponential approach toward a target, used for damped camera follow
 *
 * A single item carries exactly one Motion at a time. Assigning a new one
 * discards whatever was in flight.
 */

use nannou::prelude::*;

// Drift settles once it is this close to its target
pub const DRIFT_SNAP_EPSILON: f32 = 1.0e-4;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    #[default]
    EaseInOutQuad,
}

impl Easing {
    // Remap normalized progress in [0, 1] to eased progress in [0, 1]
    pub fn apply(self, t: f32) -> f32 {
        let t = if t.is_nan() { 1.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Easing::Linear => t,
            Easing::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u / 2.0
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub from: Vec3,
    pub to: Vec3,
    pub duration: f32,
    pub elapsed: f32,
    pub easing: Easing,
}

impl Transition {
    pub fn new(from: Vec3, to: Vec3, duration: f32, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: 0.0,
            easing,
        }
    }

    // Normalized progress; a non-positive (or NaN) duration is already complete
    pub fn progress(&self) -> f32 {
        if !(self.duration > 0.0) {
            return 1.0;
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    /// Advance by `delta` seconds and return the interpolated position together
    /// with whether the transition has settled. A settled transition returns
    /// `to` exactly, never an overshoot.
    pub fn advance(&mut self, delta: f32) -> (Vec3, bool) {
        if delta > 0.0 {
            self.elapsed += delta;
        }

        let t = self.progress();
        if t >= 1.0 {
            return (self.to, true);
        }

        let eased = self.easing.apply(t);
        (self.from.lerp(self.to, eased), false)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Motion {
    #[default]
    Idle,
    Tween(Transition),
    Drift { target: Vec3, rate: f32 },
}

impl Motion {
    pub fn is_active(&self) -> bool {
        !matches!(self, Motion::Idle)
    }

    /// Apply one tick to `current`. Returns true when the motion settled on
    /// this tick.
    pub fn step(&mut self, current: &mut Vec3, delta: f32) -> bool {
        match self {
            Motion::Idle => false,
            Motion::Tween(transition) => {
                let (position, settled) = transition.advance(delta);
                *current = position;
                if settled {
                    *self = Motion::Idle;
                }
                settled
            }
            Motion::Drift { target, rate } => {
                let target = *target;
                // Clamp so a long frame lands on the target instead of past it
                let factor = if delta > 0.0 && *rate > 0.0 {
                    (delta * *rate).min(1.0)
                } else {
                    0.0
                };
                *current += (target - *current) * factor;

                if current.distance(target) <= DRIFT_SNAP_EPSILON {
                    *current = target;
                    *self = Motion::Idle;
                    return true;
                }
                false
            }
        }
    }
}
