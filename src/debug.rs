/*
 * Debug Information Module
 *
 * Frame statistics shown in the UI and the debug overlay:
 * - FPS and frame time
 * - Transitions still in flight and how many settled last frame
 * - Agents that projected onto the screen
 * - Parallel tick chunk size
 */

use std::cell::Cell;
use std::time::Duration;

use crate::scheduler::TickStats;

#[derive(Clone, Debug, Default)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub active_transitions: usize,
    pub settled_last_tick: usize,
    pub visible_agents: Cell<usize>,
    pub chunk_size: usize,
}

impl DebugInfo {
    pub fn record_tick(&mut self, stats: TickStats, chunk_size: usize) {
        self.active_transitions = stats.active;
        self.settled_last_tick = stats.settled;
        self.chunk_size = chunk_size;
    }

    // Text lines for the on-screen overlay, top to bottom
    pub fn overlay_lines(&self, agent_count: usize) -> Vec<String> {
        vec![
            format!("FPS: {:.1}", self.fps),
            format!("Frame time: {:.2} ms", self.frame_time.as_secs_f64() * 1000.0),
            format!("Drones: {}", agent_count),
            format!("In flight: {}", self.active_transitions),
            format!("Settled last tick: {}", self.settled_last_tick),
            format!("Visible: {}", self.visible_agents.get()),
            format!("Chunk size: {}", self.chunk_size),
        ]
    }
}
