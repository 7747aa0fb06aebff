/*
 * Application Module
 *
 * This module defines the nannou Model for the drone show and wires the
 * window, UI and input handlers to the SwarmController. Each frame the UI
 * runs first, any commands it produced are executed, and then the controller
 * is ticked once with the frame's elapsed time.
 */

use std::sync::OnceLock;

use nannou::prelude::*;
use nannou_egui::Egui;
use tracing::info;

use crate::agent::Swarm;
use crate::camera::OrbitCamera;
use crate::controller::SwarmController;
use crate::debug::DebugInfo;
use crate::input;
use crate::params::ShowParams;
use crate::renderer;
use crate::scheduler::Scheduler;
use crate::ui;

// nannou builds the model from a plain fn, so launch settings are parked here
static LAUNCH_PARAMS: OnceLock<ShowParams> = OnceLock::new();

// Main model for the application
pub struct Model {
    pub show: SwarmController<OrbitCamera>,
    pub params: ShowParams,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub mouse_position: Vec2,
}

/// Open the show window and run until it is closed.
pub fn launch(params: ShowParams) {
    // A second launch in the same process keeps the first settings
    let _ = LAUNCH_PARAMS.set(params);
    nannou::app(model).update(update).run();
}

pub fn build_controller(params: &ShowParams) -> SwarmController<OrbitCamera> {
    let swarm = Swarm::new(params.agent_count, params.grid_spacing);
    let mut camera = OrbitCamera::default();
    camera.damping_rate = params.orbit_damping;
    SwarmController::new(swarm, camera, Scheduler::new(params.enable_parallel))
}

// Initialize the model
pub fn model(app: &App) -> Model {
    let params = LAUNCH_PARAMS.get().cloned().unwrap_or_default();

    // Size the window to 80% of the primary monitor when one is reported
    let (window_width, window_height) = app
        .primary_monitor()
        .map(|monitor| {
            let size = monitor.size();
            (size.width as f32 * 0.8, size.height as f32 * 0.8)
        })
        .unwrap_or((1280.0, 800.0));

    let window_id = app
        .new_window()
        .title("Drone Swarm Show")
        .size(window_width as u32, window_height as u32)
        .view(renderer::view)
        .mouse_moved(input::mouse_moved)
        .mouse_pressed(input::mouse_pressed)
        .mouse_released(input::mouse_released)
        .mouse_wheel(input::mouse_wheel)
        .key_pressed(input::key_pressed)
        .raw_event(input::raw_window_event)
        .build()
        .expect("failed to build the show window");

    let window = app.window(window_id).expect("show window closed during setup");
    let egui = Egui::from_window(&window);

    let show = build_controller(&params);
    info!(agents = params.agent_count, "drone show window opened");

    Model {
        show,
        params,
        egui,
        debug_info: DebugInfo::default(),
        mouse_position: Vec2::ZERO,
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    model.egui.set_elapsed_time(update.since_start);
    let actions = ui::update_ui(&mut model.egui, &mut model.params, &model.debug_info);

    if actions.randomize_colors {
        model.show.swarm_mut().randomize_colors(&mut rand::thread_rng());
    }
    if actions.restore_colors {
        model.show.swarm_mut().reset_colors();
    }
    for command in actions.commands {
        model.show.execute(command);
    }

    model.show.scheduler_mut().parallel = model.params.enable_parallel;
    model.show.camera_mut().damping_rate = model.params.orbit_damping;

    if !model.params.pause_show {
        let stats = model.show.tick(update.since_last.as_secs_f32());
        let chunk_size = model.show.scheduler().chunk_size();
        model.debug_info.record_tick(stats, chunk_size);
    }
}
