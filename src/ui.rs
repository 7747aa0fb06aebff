/*
 * UI Module
 *
 * Builds the egui control panel. The panel never touches the show directly:
 * it edits the parameters and reports which buttons were clicked, and the
 * app turns those into commands.
 */

use nannou_egui::{egui, Egui};

use crate::command::ShowCommand;
use crate::debug::DebugInfo;
use crate::params::ShowParams;

#[derive(Debug, Default)]
pub struct UiActions {
    pub commands: Vec<ShowCommand>,
    pub randomize_colors: bool,
    pub restore_colors: bool,
}

pub fn update_ui(egui: &mut Egui, params: &mut ShowParams, debug_info: &DebugInfo) -> UiActions {
    let mut actions = UiActions::default();
    let ctx = egui.begin_frame();

    egui::Window::new("Show Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Formations", |ui| {
                ui.add(egui::Slider::new(&mut params.duration, ShowParams::get_duration_range()).text("Duration (s)"));
                ui.add(egui::Slider::new(&mut params.radius, ShowParams::get_radius_range()).text("Radius"));
                ui.add(egui::Slider::new(&mut params.height, ShowParams::get_height_range()).text("Helix Height"));

                ui.horizontal(|ui| {
                    if ui.button("Sphere [3]").clicked() {
                        actions.commands.push(params.sphere());
                    }
                    if ui.button("Double Helix [4]").clicked() {
                        actions.commands.push(params.double_helix());
                    }
                });
                ui.horizontal(|ui| {
                    if ui.button("Reset Formation [2]").clicked() {
                        actions.commands.push(params.reset_formation());
                    }
                    if ui.button("Reset Camera [1]").clicked() {
                        actions.commands.push(params.reset_camera());
                    }
                    if ui.button("Reset All [5]").clicked() {
                        actions.commands.push(params.reset_all());
                    }
                });
            });

            ui.collapsing("Appearance", |ui| {
                ui.add(egui::Slider::new(&mut params.point_size, ShowParams::get_point_size_range()).text("Drone Size"));
                ui.horizontal(|ui| {
                    if ui.button("Randomize Colors").clicked() {
                        actions.randomize_colors = true;
                    }
                    if ui.button("Gradient Colors").clicked() {
                        actions.restore_colors = true;
                    }
                });
            });

            ui.collapsing("Camera Controls", |ui| {
                ui.label("Orbit: click and drag");
                ui.label("Zoom: mouse wheel or trackpad pinch");
                ui.add(egui::Slider::new(&mut params.orbit_damping, 1.0..=20.0).text("Orbit Damping"));
            });

            ui.collapsing("Performance", |ui| {
                ui.checkbox(&mut params.enable_parallel, "Parallel Tick");
                ui.separator();
                ui.label(format!("FPS: {:.1}", debug_info.fps));
                ui.label(format!("Frame time: {:.2} ms", debug_info.frame_time.as_secs_f64() * 1000.0));
                ui.label(format!("Drones: {}", params.agent_count));
                ui.label(format!("In flight: {}", debug_info.active_transitions));
                ui.label(format!("Visible: {}", debug_info.visible_agents.get()));
                ui.label(format!("Chunk size: {}", debug_info.chunk_size));
            });

            ui.checkbox(&mut params.show_debug, "Show Debug Info");
            ui.checkbox(&mut params.pause_show, "Pause Show [Space]");
        });

    actions
}

// Draw debug information on the screen
pub fn draw_debug_info(draw: &nannou::Draw, debug_info: &DebugInfo, window_rect: nannou::geom::Rect, agent_count: usize) {
    let margin = 20.0;
    let line_height = 20.0;
    let panel_width = 220.0;
    let debug_texts = debug_info.overlay_lines(agent_count);
    let panel_height = line_height * debug_texts.len() as f32 + margin;

    draw.rect()
        .x_y(window_rect.right() - panel_width / 2.0, window_rect.top() - panel_height / 2.0)
        .w_h(panel_width, panel_height)
        .color(nannou::color::rgba(0.0, 0.0, 0.0, 0.7));

    let text_x = window_rect.right() - panel_width + margin;
    let text_y = window_rect.top() - margin;

    for (i, text) in debug_texts.iter().enumerate() {
        let y = text_y - (i as f32 * line_height);
        draw.text(text)
            .x_y(text_x + 80.0, y)
            .color(nannou::color::WHITE)
            .font_size(14);
    }
}
