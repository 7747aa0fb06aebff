/*
 * Scheduler Module
 *
 * Advances every agent's motion exactly once per rendered frame. Motions live
 * inline on the agents, so the swarm's agent slice doubles as a flat table of
 * transitions indexed by agent id and one pass over it updates everything.
 *
 * Optimized for performance by:
 * - Avoiding per-agent timers, all work happens in a single sweep
 * - Processing agents in parallel chunks to reduce synchronization overhead
 */

use rayon::prelude::*;
use tracing::trace;

use crate::agent::Agent;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickStats {
    // Agents still in flight after this tick
    pub active: usize,
    // Agents whose motion finished on this tick
    pub settled: usize,
}

impl TickStats {
    fn merge(self, other: TickStats) -> TickStats {
        TickStats {
            active: self.active + other.active,
            settled: self.settled + other.settled,
        }
    }
}

pub struct Scheduler {
    pub parallel: bool,
    chunk_size: usize,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Scheduler {
    pub fn new(parallel: bool) -> Self {
        Self {
            parallel,
            chunk_size: 0,
        }
    }

    // Agents per work unit on the most recent tick; a sequential tick is one chunk
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Advance all agents by `delta` seconds. Agents are independent, so
    /// the order in which they are visited does not matter.
    pub fn tick(&mut self, agents: &mut [Agent], delta: f32) -> TickStats {
        let stats = if self.parallel && agents.len() > 1 {
            // Use par_chunks_mut instead of par_iter_mut to cut per-agent task overhead
            let chunk_size = std::cmp::max(agents.len() / rayon::current_num_threads(), 1);
            self.chunk_size = chunk_size;

            agents
                .par_chunks_mut(chunk_size)
                .map(|chunk| step_chunk(chunk, delta))
                .reduce(TickStats::default, TickStats::merge)
        } else {
            self.chunk_size = agents.len();
            step_chunk(agents, delta)
        };

        if stats.settled > 0 {
            trace!(settled = stats.settled, active = stats.active, "transitions settled");
        }
        stats
    }
}

fn step_chunk(agents: &mut [Agent], delta: f32) -> TickStats {
    let mut stats = TickStats::default();
    for agent in agents {
        if agent.is_at_rest() {
            continue;
        }
        if agent.step(delta) {
            stats.settled += 1;
        } else {
            stats.active += 1;
        }
    }
    stats
}
