/*
 * Renderer Module
 *
 * Draws the swarm each frame. Every agent's current position is projected
 * through the orbit camera and drawn as a dot of its colour, far agents
 * first so nearer ones paint over them. The renderer only reads the show.
 */

use nannou::prelude::*;
use tracing::warn;

use crate::app::Model;
use crate::ui;

const BACKGROUND: (u8, u8, u8) = (6, 8, 20);
// Dots never shrink below this many pixels
const MIN_DOT_RADIUS: f32 = 0.75;

struct Dot {
    screen: Vec2,
    depth: f32,
    radius: f32,
    color: Rgb<u8>,
}

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(rgb(BACKGROUND.0, BACKGROUND.1, BACKGROUND.2));

    let window_rect = app.window_rect();
    let viewport = window_rect.wh();
    let camera = model.show.camera();

    let mut dots: Vec<Dot> = model
        .show
        .swarm()
        .iter()
        .filter_map(|agent| {
            let projected = camera.project(agent.current_position(), viewport)?;
            let radius = (model.params.point_size * projected.scale).max(MIN_DOT_RADIUS);
            let pad = -radius;
            if !window_rect.pad(pad).contains(projected.screen) {
                return None;
            }
            Some(Dot {
                screen: projected.screen,
                depth: projected.depth,
                radius,
                color: agent.color(),
            })
        })
        .collect();

    // Painter's order, far to near
    dots.sort_unstable_by(|a, b| b.depth.total_cmp(&a.depth));
    model.debug_info.visible_agents.set(dots.len());

    for dot in &dots {
        draw.ellipse()
            .xy(dot.screen)
            .radius(dot.radius)
            .resolution(8.0)
            .color(dot.color);
    }

    if model.params.show_debug {
        ui::draw_debug_info(&draw, &model.debug_info, window_rect, model.show.swarm().len());
    }

    if let Err(err) = draw.to_frame(app, &frame) {
        warn!(?err, "failed to draw swarm to frame");
    }
    if let Err(err) = model.egui.draw_to_frame(&frame) {
        warn!(?err, "failed to draw controls to frame");
    }
}
