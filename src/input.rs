/*
 * Input Module
 *
 * This module handles user input events for the drone show.
 *
 * Features:
 * - Camera orbiting with mouse drag
 * - Camera zooming with mouse wheel
 * - Number keys 1-5 for the five show commands, Space to pause
 */

use nannou::prelude::*;
use nannou::winit::event::{MouseButton, MouseScrollDelta, TouchPhase};

use crate::app::Model;

// Mouse moved event handler
pub fn mouse_moved(_app: &App, model: &mut Model, pos: Point2) {
    model.mouse_position = pos;
    if model.show.camera().is_dragging {
        model.show.camera_mut().drag(pos);
    }
}

// Mouse pressed event handler
pub fn mouse_pressed(_app: &App, model: &mut Model, button: MouseButton) {
    if button == MouseButton::Left && !model.egui.ctx().is_pointer_over_area() {
        let position = model.mouse_position;
        model.show.camera_mut().start_drag(position);
    }
}

// Mouse released event handler
pub fn mouse_released(_app: &App, model: &mut Model, button: MouseButton) {
    if button == MouseButton::Left {
        model.show.camera_mut().end_drag();
    }
}

// Mouse wheel event handler for zooming
pub fn mouse_wheel(_app: &App, model: &mut Model, delta: MouseScrollDelta, _phase: TouchPhase) {
    if model.egui.ctx().is_pointer_over_area() {
        return;
    }
    let scroll = match delta {
        MouseScrollDelta::LineDelta(_, y) => y,
        MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
    };
    model.show.camera_mut().zoom(scroll);
}

pub fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    let command = match key {
        Key::Key1 => model.params.reset_camera(),
        Key::Key2 => model.params.reset_formation(),
        Key::Key3 => model.params.sphere(),
        Key::Key4 => model.params.double_helix(),
        Key::Key5 => model.params.reset_all(),
        Key::Space => {
            model.params.pause_show = !model.params.pause_show;
            return;
        }
        _ => return,
    };
    model.show.execute(command);
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
