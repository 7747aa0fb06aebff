/*
 * Formation Module
 *
 * Pure, stateless generators mapping (agent index, agent count, shape
 * parameters) to a target position. Every function is total: degenerate
 * counts and odd parameters give a degenerate shape, never NaN.
 *
 * Shapes:
 * - Grid: the seed and reset layout, a flat square-ish grid in the XY plane
 * - Sphere: Fibonacci spiral point distribution over the sphere surface
 * - Double helix: a single continuous strand spiralling up the Y axis
 */

use std::f64::consts::PI;

use nannou::prelude::*;
use rayon::prelude::*;

pub const HELIX_TURNS: f32 = 3.0;

// Below this many agents a sequential map beats rayon's split overhead
const PARALLEL_THRESHOLD: usize = 1024;

pub fn grid_side(count: usize) -> usize {
    (count as f64).sqrt().ceil() as usize
}

/// Agent `index` on a `side x side` grid, with `side = ceil(sqrt(count))`,
/// centred on the origin. Z is always zero.
pub fn grid_position(index: usize, count: usize, spacing: f32) -> Vec3 {
    let side = grid_side(count).max(1);
    let column = index % side;
    let row = index / side;
    let half_extent = (side - 1) as f32 * spacing / 2.0;

    vec3(
        column as f32 * spacing - half_extent,
        row as f32 * spacing - half_extent,
        0.0,
    )
}

/// Fibonacci sphere point. Agent 0 sits on the north pole and agent
/// `count - 1` on the south pole. A lone agent is placed on the north pole.
pub fn sphere_position(index: usize, count: usize, radius: f32) -> Vec3 {
    if count <= 1 {
        return vec3(0.0, radius, 0.0);
    }

    let radius = radius as f64;
    let y = 1.0 - (index as f64 / (count - 1) as f64) * 2.0;
    // Clamp guards against 1 - y² dipping just below zero at the poles
    let ring = (1.0 - y * y).max(0.0).sqrt();
    let theta = index as f64 * PI * (3.0 - 5.0_f64.sqrt());

    vec3(
        (theta.cos() * ring * radius) as f32,
        (y * radius) as f32,
        (theta.sin() * ring * radius) as f32,
    )
}

// Angle travelled along the helix by agent `index`
pub fn helix_angle(index: usize, count: usize, turns: f32) -> f32 {
    if count == 0 {
        return 0.0;
    }
    (index as f64 / count as f64 * 2.0 * PI * turns as f64) as f32
}

/// Helix point. Known limitation: despite the name this is one continuous
/// strand across the whole swarm, not two interleaved strands.
pub fn double_helix_position(index: usize, count: usize, radius: f32, height: f32, turns: f32) -> Vec3 {
    if count == 0 {
        return Vec3::ZERO;
    }

    let angle = helix_angle(index, count, turns);
    let fraction = index as f32 / count as f32;

    vec3(
        angle.cos() * radius,
        fraction * height - height / 2.0,
        angle.sin() * radius,
    )
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Formation {
    Grid { spacing: f32 },
    Sphere { radius: f32 },
    DoubleHelix { radius: f32, height: f32, turns: f32 },
}

impl Formation {
    pub fn name(&self) -> &'static str {
        match self {
            Formation::Grid { .. } => "grid",
            Formation::Sphere { .. } => "sphere",
            Formation::DoubleHelix { .. } => "double helix",
        }
    }

    pub fn position(&self, index: usize, count: usize) -> Vec3 {
        match *self {
            Formation::Grid { spacing } => grid_position(index, count, spacing),
            Formation::Sphere { radius } => sphere_position(index, count, radius),
            Formation::DoubleHelix {
                radius,
                height,
                turns,
            } => double_helix_position(index, count, radius, height, turns),
        }
    }

    /// Targets for every agent, in index order. Indices are independent, so
    /// large swarms are generated in parallel.
    pub fn targets(&self, count: usize) -> Vec<Vec3> {
        if count >= PARALLEL_THRESHOLD {
            (0..count)
                .into_par_iter()
                .map(|i| self.position(i, count))
                .collect()
        } else {
            (0..count).map(|i| self.position(i, count)).collect()
        }
    }
}
