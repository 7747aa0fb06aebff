use drone_show::formation::{
    double_helix_position, grid_position, grid_side, helix_angle, sphere_position, Formation, HELIX_TURNS,
};
use nannou::prelude::*;
use std::f32::consts::PI;

const AGENTS: usize = 8000;
const RADIUS: f32 = 10.0;
const HEIGHT: f32 = 20.0;

fn approx_eq(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() <= epsilon
}

#[test]
fn every_sphere_point_lies_on_the_sphere() {
    for i in 0..AGENTS {
        let p = sphere_position(i, AGENTS, RADIUS);
        assert!(
            approx_eq(p.length(), RADIUS, 1e-4),
            "agent {} at distance {}",
            i,
            p.length()
        );
    }
}

#[test]
fn sphere_poles_are_first_and_last_agents() {
    let north = sphere_position(0, AGENTS, RADIUS);
    let south = sphere_position(AGENTS - 1, AGENTS, RADIUS);
    assert!(approx_eq(north.y, RADIUS, 1e-5), "expected y≈10, got {}", north.y);
    assert!(approx_eq(south.y, -RADIUS, 1e-5), "expected y≈-10, got {}", south.y);
}

#[test]
fn single_agent_sphere_is_well_defined() {
    let p = sphere_position(0, 1, RADIUS);
    assert!(p.is_finite());
    assert_eq!(p, vec3(0.0, RADIUS, 0.0));
}

#[test]
fn sphere_spreads_agents_around_the_equator() {
    // Golden-angle spacing puts neighbouring agents far apart in longitude
    let a = sphere_position(AGENTS / 2, AGENTS, RADIUS);
    let b = sphere_position(AGENTS / 2 + 1, AGENTS, RADIUS);
    let longitude = |p: Vec3| p.z.atan2(p.x);
    let gap = (longitude(a) - longitude(b)).abs();
    assert!(gap > 1.0, "expected a wide longitude gap, got {}", gap);
}

#[test]
fn helix_makes_three_full_turns() {
    let last = helix_angle(AGENTS - 1, AGENTS, HELIX_TURNS);
    // The angle is i/N of the full sweep, so the last agent stops one angular
    // step (6π/N) short of 6π. Only index N lands exactly on it, so keep this
    // tolerance step-sized rather than a plain epsilon.
    let step = 2.0 * PI * HELIX_TURNS / AGENTS as f32;
    assert!(
        approx_eq(last, 6.0 * PI, step + 1e-4),
        "expected angle≈6π, got {}",
        last
    );
    assert!(approx_eq(helix_angle(AGENTS, AGENTS, HELIX_TURNS), 6.0 * PI, 1e-4));
}

#[test]
fn helix_spans_height_and_keeps_radius() {
    let first = double_helix_position(0, AGENTS, RADIUS, HEIGHT, HELIX_TURNS);
    let last = double_helix_position(AGENTS - 1, AGENTS, RADIUS, HEIGHT, HELIX_TURNS);
    assert!(approx_eq(first.y, -HEIGHT / 2.0, 1e-5));
    assert!(last.y < HEIGHT / 2.0 && last.y > HEIGHT / 2.0 - 0.01);

    for i in (0..AGENTS).step_by(97) {
        let p = double_helix_position(i, AGENTS, RADIUS, HEIGHT, HELIX_TURNS);
        let horizontal = vec2(p.x, p.z).length();
        assert!(approx_eq(horizontal, RADIUS, 1e-3), "agent {} off radius: {}", i, horizontal);
    }
}

#[test]
fn grid_is_square_centered_and_flat() {
    let spacing = 0.25;
    let side = grid_side(AGENTS);
    assert_eq!(side, 90);

    let targets = Formation::Grid { spacing }.targets(AGENTS);
    assert!(targets.iter().all(|p| p.z == 0.0));

    let first = grid_position(0, AGENTS, spacing);
    let last_in_row = grid_position(side - 1, AGENTS, spacing);
    assert!(approx_eq(first.x, -last_in_row.x, 1e-4));
    assert!(approx_eq(first.x, first.y, 1e-6));

    // Agent i sits at column i mod side, row i / side
    let p = grid_position(side * 3 + 7, AGENTS, spacing);
    assert!(approx_eq(p.x - first.x, 7.0 * spacing, 1e-4));
    assert!(approx_eq(p.y - first.y, 3.0 * spacing, 1e-4));
}

#[test]
fn generation_is_order_independent() {
    let formation = Formation::DoubleHelix {
        radius: RADIUS,
        height: HEIGHT,
        turns: HELIX_TURNS,
    };
    let all = formation.targets(AGENTS);
    for i in [AGENTS - 1, 0, 4321, 17] {
        assert_eq!(all[i], formation.position(i, AGENTS));
    }
}
