/*
 * Show Parameters Module
 *
 * This module defines the ShowParams struct that contains the adjustable
 * settings for the drone show. Agent count and grid spacing are fixed once
 * the swarm is built; the command values (duration, radius, height) and the
 * toggles can be changed through the UI while the show runs.
 */

use crate::command::{ShowCommand, DEFAULT_DURATION, DEFAULT_HEIGHT, DEFAULT_RADIUS};

pub const DEFAULT_AGENT_COUNT: usize = 8000;
pub const DEFAULT_GRID_SPACING: f32 = 0.25;

#[derive(Clone, Debug, PartialEq)]
pub struct ShowParams {
    pub agent_count: usize,
    pub grid_spacing: f32,
    // Values used when the UI or keyboard issues a command
    pub duration: f32,
    pub radius: f32,
    pub height: f32,
    pub point_size: f32,
    pub orbit_damping: f32,
    pub enable_parallel: bool,
    pub show_debug: bool,
    pub pause_show: bool,
}

impl Default for ShowParams {
    fn default() -> Self {
        Self {
            agent_count: DEFAULT_AGENT_COUNT,
            grid_spacing: DEFAULT_GRID_SPACING,
            duration: DEFAULT_DURATION,
            radius: DEFAULT_RADIUS,
            height: DEFAULT_HEIGHT,
            point_size: 0.08,
            orbit_damping: 8.0,
            enable_parallel: true,
            show_debug: false,
            pause_show: false,
        }
    }
}

impl ShowParams {
    // The five commands, filled in with the current slider values
    pub fn reset_camera(&self) -> ShowCommand {
        ShowCommand::ResetCamera {
            duration: self.duration,
        }
    }

    pub fn reset_formation(&self) -> ShowCommand {
        ShowCommand::ResetFormation {
            duration: self.duration,
        }
    }

    pub fn sphere(&self) -> ShowCommand {
        ShowCommand::FormSphere {
            radius: self.radius,
            duration: self.duration,
        }
    }

    pub fn double_helix(&self) -> ShowCommand {
        ShowCommand::FormDoubleHelix {
            radius: self.radius,
            height: self.height,
            duration: self.duration,
        }
    }

    pub fn reset_all(&self) -> ShowCommand {
        ShowCommand::ResetAll {
            duration: self.duration,
        }
    }

    // Get parameter ranges for UI sliders
    pub fn get_duration_range() -> std::ops::RangeInclusive<f32> {
        0.0..=10.0
    }

    pub fn get_radius_range() -> std::ops::RangeInclusive<f32> {
        1.0..=30.0
    }

    pub fn get_height_range() -> std::ops::RangeInclusive<f32> {
        1.0..=60.0
    }

    pub fn get_point_size_range() -> std::ops::RangeInclusive<f32> {
        0.01..=0.5
    }
}
