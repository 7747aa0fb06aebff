/*
 * Agent Module
 *
 * This module defines the Agent struct (a single drone) and the Swarm that owns
 * the ordered, fixed-size collection of agents for the whole session.
 *
 * Agent order is part of the contract: formations place agent `i` by its
 * fraction i/N, so the swarm is never reordered or resized once built.
 */

use nannou::prelude::*;
use rand::Rng;

use crate::formation::grid_position;
use crate::transition::{Easing, Motion, Transition};

// Colour ramp endpoints, first agent to last
const COLOR_START: (u8, u8, u8) = (64, 200, 255);
const COLOR_END: (u8, u8, u8) = (255, 96, 200);

#[derive(Clone, Debug)]
pub struct Agent {
    index: usize,
    initial_position: Vec3,
    current_position: Vec3,
    target_position: Vec3,
    color: Rgb<u8>,
    motion: Motion,
}

impl Agent {
    pub fn new(index: usize, initial_position: Vec3, color: Rgb<u8>) -> Self {
        Self {
            index,
            initial_position,
            current_position: initial_position,
            target_position: initial_position,
            color,
            motion: Motion::Idle,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn initial_position(&self) -> Vec3 {
        self.initial_position
    }

    pub fn current_position(&self) -> Vec3 {
        self.current_position
    }

    pub fn target_position(&self) -> Vec3 {
        self.target_position
    }

    pub fn color(&self) -> Rgb<u8> {
        self.color
    }

    pub fn set_color(&mut self, color: Rgb<u8>) {
        self.color = color;
    }

    pub fn is_at_rest(&self) -> bool {
        !self.motion.is_active()
    }

    /// Retarget this agent with an ease-in-out tween from wherever it is right
    /// now. Any in-flight motion is dropped. A zero or negative duration snaps
    /// on the next tick.
    pub fn set_target(&mut self, position: Vec3, duration: f32) {
        self.target_position = position;
        self.motion = Motion::Tween(Transition::new(
            self.current_position,
            position,
            duration,
            Easing::EaseInOutQuad,
        ));
    }

    // Retarget using exponential approach instead of a fixed-duration tween
    pub fn drift_to(&mut self, position: Vec3, rate: f32) {
        self.target_position = position;
        self.motion = Motion::Drift {
            target: position,
            rate,
        };
    }

    // Advance the active motion by one frame. Only the scheduler calls this.
    pub(crate) fn step(&mut self, delta: f32) -> bool {
        self.motion.step(&mut self.current_position, delta)
    }
}

// Colour for agent `index` of `count`, a ramp across the swarm
pub fn index_color(index: usize, count: usize) -> Rgb<u8> {
    let t = if count > 1 {
        index as f32 / (count - 1) as f32
    } else {
        0.0
    };
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    rgb(
        mix(COLOR_START.0, COLOR_END.0),
        mix(COLOR_START.1, COLOR_END.1),
        mix(COLOR_START.2, COLOR_END.2),
    )
}

pub struct Swarm {
    agents: Vec<Agent>,
}

impl Swarm {
    /// Build `count` agents laid out on the seed grid. Each agent starts at
    /// rest on its initial position.
    pub fn new(count: usize, grid_spacing: f32) -> Self {
        let agents = (0..count)
            .map(|i| Agent::new(i, grid_position(i, count, grid_spacing), index_color(i, count)))
            .collect();

        Self { agents }
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn get(&self, index: usize) -> Option<&Agent> {
        self.agents.get(index)
    }

    // Mutable slice access; the length stays fixed
    pub fn agents_mut(&mut self) -> &mut [Agent] {
        &mut self.agents
    }

    pub fn iter(&self) -> impl Iterator<Item = &Agent> {
        self.agents.iter()
    }

    // Number of agents with a motion still in flight
    pub fn active_count(&self) -> usize {
        self.agents.iter().filter(|agent| !agent.is_at_rest()).count()
    }

    pub fn is_at_rest(&self) -> bool {
        self.agents.iter().all(Agent::is_at_rest)
    }

    pub fn randomize_colors<R: Rng>(&mut self, rng: &mut R) {
        for agent in &mut self.agents {
            agent.set_color(rgb(rng.gen(), rng.gen(), rng.gen()));
        }
    }

    pub fn reset_colors(&mut self) {
        let count = self.agents.len();
        for agent in &mut self.agents {
            agent.set_color(index_color(agent.index, count));
        }
    }

    // Largest distance of any agent from the origin
    pub fn bounding_radius(&self) -> f32 {
        self.agents
            .iter()
            .map(|agent| agent.current_position.length())
            .fold(0.0, f32::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn new_swarm_is_indexed_and_at_rest() {
        let swarm = Swarm::new(50, 0.5);
        assert_eq!(swarm.len(), 50);
        assert!(swarm.is_at_rest());
        for (i, agent) in swarm.iter().enumerate() {
            assert_eq!(agent.index(), i);
            assert_eq!(agent.current_position(), agent.initial_position());
            assert_eq!(agent.target_position(), agent.initial_position());
        }
    }

    #[test]
    fn set_target_keeps_current_until_ticked() {
        let mut agent = Agent::new(0, Vec3::ZERO, rgb(0, 0, 0));
        agent.set_target(vec3(1.0, 2.0, 3.0), 2.0);
        assert_eq!(agent.target_position(), vec3(1.0, 2.0, 3.0));
        assert_eq!(agent.current_position(), Vec3::ZERO);
        assert!(!agent.is_at_rest());
    }

    #[test]
    fn zero_duration_snaps_on_next_step() {
        let mut agent = Agent::new(0, Vec3::ZERO, rgb(0, 0, 0));
        agent.set_target(vec3(5.0, 0.0, 0.0), 0.0);
        assert!(agent.step(0.0));
        assert_eq!(agent.current_position(), vec3(5.0, 0.0, 0.0));
        assert!(agent.is_at_rest());
    }

    #[test]
    fn index_colors_span_the_ramp() {
        assert_eq!(index_color(0, 10), rgb(COLOR_START.0, COLOR_START.1, COLOR_START.2));
        assert_eq!(index_color(9, 10), rgb(COLOR_END.0, COLOR_END.1, COLOR_END.2));
        assert_eq!(index_color(0, 1), rgb(COLOR_START.0, COLOR_START.1, COLOR_START.2));
    }

    #[test]
    fn color_overrides_do_not_move_agents() {
        let mut swarm = Swarm::new(16, 1.0);
        let before: Vec<Vec3> = swarm.iter().map(Agent::current_position).collect();
        let mut rng = StdRng::seed_from_u64(7);
        swarm.randomize_colors(&mut rng);
        swarm.reset_colors();
        let after: Vec<Vec3> = swarm.iter().map(Agent::current_position).collect();
        assert_eq!(before, after);
        assert_eq!(swarm.get(3).map(Agent::color), Some(index_color(3, 16)));
    }
}
