/*
 * Camera Module
 *
 * This module defines the camera collaborator used by the show. The
 * controller only talks to it through the CameraRig trait: read the pose,
 * animate to a pose, and tick once per frame.
 *
 * OrbitCamera is the interactive implementation. Dragging orbits the
 * camera around its look-at target and the mouse wheel moves it closer or
 * further. Both use the damped drift mode, while resets use the same eased
 * tween as agents. It also provides the perspective projection the renderer
 * uses to turn world positions into screen positions.
 */

use std::f32::consts::PI;

use nannou::prelude::*;

use crate::transition::{Easing, Motion, Transition};

pub const DEFAULT_CAMERA_POSITION: Vec3 = nannou::glam::const_vec3!([0.0, 6.0, 40.0]);
pub const DEFAULT_LOOK_AT: Vec3 = Vec3::ZERO;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_at: Vec3,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            position: DEFAULT_CAMERA_POSITION,
            look_at: DEFAULT_LOOK_AT,
        }
    }
}

/// Narrow interface the swarm controller uses to drive a camera.
pub trait CameraRig {
    fn position(&self) -> Vec3;
    fn look_at_target(&self) -> Vec3;
    fn initial_pose(&self) -> CameraPose;
    /// Ease position and look-at to `pose` over `duration` seconds, replacing
    /// any in-flight camera motion.
    fn animate_to(&mut self, pose: CameraPose, duration: f32);
    fn tick(&mut self, delta: f32);
    fn is_animating(&self) -> bool;

    fn pose(&self) -> CameraPose {
        CameraPose {
            position: self.position(),
            look_at: self.look_at_target(),
        }
    }
}

// A point that is moved by a single Motion, used for each half of the pose
#[derive(Clone, Copy, Debug)]
pub struct Tracked {
    current: Vec3,
    motion: Motion,
}

impl Tracked {
    pub fn new(current: Vec3) -> Self {
        Self {
            current,
            motion: Motion::Idle,
        }
    }

    pub fn current(&self) -> Vec3 {
        self.current
    }

    // Where the point will come to rest
    pub fn destination(&self) -> Vec3 {
        match self.motion {
            Motion::Idle => self.current,
            Motion::Tween(transition) => transition.to,
            Motion::Drift { target, .. } => target,
        }
    }

    pub fn animate_to(&mut self, to: Vec3, duration: f32) {
        self.motion = Motion::Tween(Transition::new(self.current, to, duration, Easing::EaseInOutQuad));
    }

    pub fn drift_to(&mut self, to: Vec3, rate: f32) {
        self.motion = Motion::Drift { target: to, rate };
    }

    pub fn tick(&mut self, delta: f32) {
        self.motion.step(&mut self.current, delta);
    }

    pub fn is_active(&self) -> bool {
        self.motion.is_active()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    pub screen: Vec2,
    pub depth: f32,
    // Screen pixels per world unit at this depth
    pub scale: f32,
}

pub struct OrbitCamera {
    position: Tracked,
    look_at: Tracked,
    initial: CameraPose,
    pub fov_y: f32,
    pub near: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub orbit_speed: f32,
    pub damping_rate: f32,
    pub is_dragging: bool,
    pub last_cursor_pos: Vec2,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(CameraPose::default())
    }
}

impl OrbitCamera {
    pub fn new(initial: CameraPose) -> Self {
        Self {
            position: Tracked::new(initial.position),
            look_at: Tracked::new(initial.look_at),
            initial,
            fov_y: 60.0_f32.to_radians(),
            near: 0.1,
            min_distance: 2.0,
            max_distance: 200.0,
            orbit_speed: 0.005,
            damping_rate: 8.0,
            is_dragging: false,
            last_cursor_pos: Vec2::ZERO,
        }
    }

    pub fn start_drag(&mut self, position: Vec2) {
        self.last_cursor_pos = position;
        self.is_dragging = true;
    }

    // Orbit by the cursor movement since the last drag event
    pub fn drag(&mut self, position: Vec2) {
        if !self.is_dragging {
            return;
        }
        let delta = position - self.last_cursor_pos;
        if delta.length_squared() > 0.0 {
            self.orbit(-delta.x * self.orbit_speed, delta.y * self.orbit_speed);
            self.last_cursor_pos = position;
        }
    }

    pub fn end_drag(&mut self) {
        self.is_dragging = false;
    }

    /// Rotate the destination position around the look-at target. The polar
    /// angle is kept away from the poles so the view never flips.
    pub fn orbit(&mut self, delta_azimuth: f32, delta_polar: f32) {
        let look_at = self.look_at.destination();
        let offset = self.position.destination() - look_at;
        let distance = offset.length();
        if distance <= f32::EPSILON {
            return;
        }

        let azimuth = offset.x.atan2(offset.z) + delta_azimuth;
        let polar = ((offset.y / distance).clamp(-1.0, 1.0).acos() + delta_polar).clamp(0.05, PI - 0.05);

        let orbited = vec3(
            distance * polar.sin() * azimuth.sin(),
            distance * polar.cos(),
            distance * polar.sin() * azimuth.cos(),
        );
        self.position.drift_to(look_at + orbited, self.damping_rate);
    }

    // Move toward or away from the look-at target, one wheel notch is ~10%
    pub fn zoom(&mut self, scroll: f32) {
        let look_at = self.look_at.destination();
        let offset = self.position.destination() - look_at;
        let distance = offset.length();
        if distance <= f32::EPSILON {
            return;
        }

        let factor = 1.0 - scroll * 0.1;
        let new_distance = (distance * factor).clamp(self.min_distance, self.max_distance);
        self.position
            .drift_to(look_at + offset * (new_distance / distance), self.damping_rate);
    }

    /// Perspective projection of a world point into window coordinates
    /// (origin at the window centre, y up). Points behind the near plane
    /// return None.
    pub fn project(&self, point: Vec3, viewport: Vec2) -> Option<Projected> {
        let eye = self.position.current();
        let forward = (self.look_at.current() - eye).normalize_or_zero();
        if forward == Vec3::ZERO {
            return None;
        }

        let mut right = forward.cross(Vec3::Y);
        if right.length_squared() <= f32::EPSILON {
            // Looking straight up or down
            right = Vec3::X;
        }
        let right = right.normalize();
        let up = right.cross(forward);

        let relative = point - eye;
        let depth = relative.dot(forward);
        if depth <= self.near {
            return None;
        }

        let focal = (viewport.y / 2.0) / (self.fov_y / 2.0).tan();
        let scale = focal / depth;
        Some(Projected {
            screen: vec2(relative.dot(right) * scale, relative.dot(up) * scale),
            depth,
            scale,
        })
    }
}

impl CameraRig for OrbitCamera {
    fn position(&self) -> Vec3 {
        self.position.current()
    }

    fn look_at_target(&self) -> Vec3 {
        self.look_at.current()
    }

    fn initial_pose(&self) -> CameraPose {
        self.initial
    }

    fn animate_to(&mut self, pose: CameraPose, duration: f32) {
        self.position.animate_to(pose.position, duration);
        self.look_at.animate_to(pose.look_at, duration);
    }

    fn tick(&mut self, delta: f32) {
        self.position.tick(delta);
        self.look_at.tick(delta);
    }

    fn is_animating(&self) -> bool {
        self.position.is_active() || self.look_at.is_active()
    }
}
