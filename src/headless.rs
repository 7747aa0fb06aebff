/*
 * Headless Module
 *
 * Runs a scripted show without opening a window. Each command is issued,
 * then the controller is ticked at a fixed frame rate for a dwell period.
 * Progress is reported through tracing.
 */

use tracing::{info, warn};

use crate::agent::Swarm;
use crate::camera::OrbitCamera;
use crate::command::ShowCommand;
use crate::controller::SwarmController;
use crate::params::ShowParams;
use crate::scheduler::Scheduler;

const DEFAULT_FPS: f32 = 60.0;

// Upper bound on ticks per command, whatever dwell and frame rate ask for
const MAX_DWELL_FRAMES: usize = 1_000_000;

#[derive(Clone, Debug, PartialEq)]
pub struct StepReport {
    pub command: ShowCommand,
    pub frames: usize,
    // Frames until swarm and camera were both at rest, if they got there
    pub settled_after: Option<usize>,
    pub bounding_radius: f32,
}

pub fn run_headless(params: &ShowParams, script: &[ShowCommand], dwell: f32, fps: f32) -> Vec<StepReport> {
    let fps = if fps.is_finite() && fps > 0.0 { fps } else { DEFAULT_FPS };
    let dwell = if dwell.is_finite() { dwell.max(0.0) } else { 0.0 };
    let delta = 1.0 / fps;
    let frames = ((dwell * fps).ceil() as usize).min(MAX_DWELL_FRAMES);

    let swarm = Swarm::new(params.agent_count, params.grid_spacing);
    let mut camera = OrbitCamera::default();
    camera.damping_rate = params.orbit_damping;
    let mut show = SwarmController::new(swarm, camera, Scheduler::new(params.enable_parallel));

    let mut reports = Vec::with_capacity(script.len());
    for &command in script {
        show.execute(command);

        let mut settled_after = None;
        for frame in 1..=frames {
            show.tick(delta);
            if settled_after.is_none() && show.is_settled() {
                settled_after = Some(frame);
            }
        }

        let bounding_radius = show.swarm().bounding_radius();
        match settled_after {
            Some(frame) => info!(
                command = %command,
                frames = frame,
                bounding_radius,
                "show settled"
            ),
            None => warn!(
                command = %command,
                in_flight = show.swarm().active_count(),
                "show still moving at end of dwell"
            ),
        }

        reports.push(StepReport {
            command,
            frames,
            settled_after,
            bounding_radius,
        });
    }
    reports
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_show_settles_within_dwell() {
        let params = ShowParams {
            agent_count: 200,
            ..ShowParams::default()
        };
        let script = [
            ShowCommand::sphere(),
            ShowCommand::double_helix(),
            ShowCommand::ResetAll { duration: 1.0 },
        ];
        let reports = run_headless(&params, &script, 3.0, 60.0);

        assert_eq!(reports.len(), 3);
        for report in &reports {
            assert!(report.settled_after.is_some(), "{} did not settle", report.command);
        }
        assert!((reports[0].bounding_radius - 10.0).abs() < 1e-3);
    }

    #[test]
    fn short_dwell_reports_unsettled() {
        let params = ShowParams {
            agent_count: 10,
            ..ShowParams::default()
        };
        let reports = run_headless(&params, &[ShowCommand::sphere()], 0.5, 60.0);
        assert_eq!(reports[0].settled_after, None);
        assert_eq!(reports[0].frames, 30);
    }

    #[test]
    fn non_finite_frame_rate_falls_back_to_default() {
        let params = ShowParams {
            agent_count: 1,
            ..ShowParams::default()
        };
        for fps in [f32::INFINITY, f32::NAN, -30.0, 0.0] {
            let reports = run_headless(&params, &[ShowCommand::sphere()], 1.0, fps);
            assert_eq!(reports[0].frames, 60, "fps {} should run at the default rate", fps);
        }
    }

    #[test]
    fn non_finite_dwell_runs_no_frames() {
        let params = ShowParams {
            agent_count: 1,
            ..ShowParams::default()
        };
        for dwell in [f32::INFINITY, f32::NAN] {
            let reports = run_headless(&params, &[ShowCommand::sphere()], dwell, 60.0);
            assert_eq!(reports[0].frames, 0);
            assert_eq!(reports[0].settled_after, None);
        }
    }

    #[test]
    fn huge_finite_frame_rate_is_capped() {
        let params = ShowParams {
            agent_count: 1,
            enable_parallel: false,
            ..ShowParams::default()
        };
        let reports = run_headless(&params, &[ShowCommand::sphere()], 1.0, 1e30);
        assert_eq!(reports[0].frames, MAX_DWELL_FRAMES);
    }
}
