/*
 * Swarm Controller Module
 *
 * The SwarmController is the single owner of the show state: the swarm,
 * the camera and the scheduler. Commands only retarget agents or the camera
 * and return immediately; the motion itself unfolds over later ticks.
 */

use tracing::{debug, info};

use crate::agent::Swarm;
use crate::camera::CameraRig;
use crate::command::ShowCommand;
use crate::formation::{Formation, HELIX_TURNS};
use crate::scheduler::{Scheduler, TickStats};

pub struct SwarmController<C: CameraRig> {
    swarm: Swarm,
    camera: C,
    scheduler: Scheduler,
}

impl<C: CameraRig> SwarmController<C> {
    pub fn new(swarm: Swarm, camera: C, scheduler: Scheduler) -> Self {
        info!(agents = swarm.len(), parallel = scheduler.parallel, "swarm controller ready");
        Self {
            swarm,
            camera,
            scheduler,
        }
    }

    pub fn swarm(&self) -> &Swarm {
        &self.swarm
    }

    // For colour overrides; positions still only move through commands and ticks
    pub fn swarm_mut(&mut self) -> &mut Swarm {
        &mut self.swarm
    }

    pub fn camera(&self) -> &C {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut C {
        &mut self.camera
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut Scheduler {
        &mut self.scheduler
    }

    /// True once neither the swarm nor the camera has motion in flight.
    pub fn is_settled(&self) -> bool {
        self.swarm.is_at_rest() && !self.camera.is_animating()
    }

    /// Retarget every agent to `formation`, starting each from its current
    /// position. In-flight transitions are replaced.
    pub fn apply_formation(&mut self, formation: &Formation, duration: f32) {
        let count = self.swarm.len();
        let targets = formation.targets(count);

        for (agent, target) in self.swarm.agents_mut().iter_mut().zip(targets) {
            agent.set_target(target, duration);
        }
        debug!(formation = formation.name(), agents = count, duration, "formation applied");
    }

    pub fn reset_formation(&mut self, duration: f32) {
        info!(duration, "resetting formation");
        for agent in self.swarm.agents_mut() {
            let initial = agent.initial_position();
            agent.set_target(initial, duration);
        }
    }

    pub fn form_sphere(&mut self, radius: f32, duration: f32) {
        info!(radius, duration, "forming sphere");
        self.apply_formation(&Formation::Sphere { radius }, duration);
    }

    pub fn form_double_helix(&mut self, radius: f32, height: f32, duration: f32) {
        info!(radius, height, duration, "forming double helix");
        self.apply_formation(
            &Formation::DoubleHelix {
                radius,
                height,
                turns: HELIX_TURNS,
            },
            duration,
        );
    }

    pub fn reset_camera(&mut self, duration: f32) {
        info!(duration, "resetting camera");
        let initial = self.camera.initial_pose();
        self.camera.animate_to(initial, duration);
    }

    // Two independent requests sharing one duration, not a transaction
    pub fn reset_all(&mut self, duration: f32) {
        self.reset_camera(duration);
        self.reset_formation(duration);
    }

    pub fn execute(&mut self, command: ShowCommand) {
        match command {
            ShowCommand::ResetCamera { duration } => self.reset_camera(duration),
            ShowCommand::ResetFormation { duration } => self.reset_formation(duration),
            ShowCommand::FormSphere { radius, duration } => self.form_sphere(radius, duration),
            ShowCommand::FormDoubleHelix {
                radius,
                height,
                duration,
            } => self.form_double_helix(radius, height, duration),
            ShowCommand::ResetAll { duration } => self.reset_all(duration),
        }
    }

    /// Advance the whole show by one frame of `delta` seconds.
    pub fn tick(&mut self, delta: f32) -> TickStats {
        self.camera.tick(delta);
        self.scheduler.tick(self.swarm.agents_mut(), delta)
    }
}
