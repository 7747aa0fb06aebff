use drone_show::agent::Swarm;
use drone_show::camera::OrbitCamera;
use drone_show::controller::SwarmController;
use drone_show::scheduler::Scheduler;
use nannou::prelude::*;

const FRAME: f32 = 1.0 / 60.0;

fn show(count: usize) -> SwarmController<OrbitCamera> {
    SwarmController::new(Swarm::new(count, 0.25), OrbitCamera::default(), Scheduler::new(true))
}

fn distances_to_target(show: &SwarmController<OrbitCamera>) -> Vec<f32> {
    show.swarm()
        .iter()
        .map(|agent| agent.current_position().distance(agent.target_position()))
        .collect()
}

#[test]
fn agents_converge_exactly_once_duration_elapses() {
    let mut show = show(1000);
    show.form_sphere(10.0, 2.0);

    let mut elapsed = 0.0;
    while elapsed < 2.0 {
        show.tick(FRAME);
        elapsed += FRAME;
    }
    // One more frame covers any rounding in the accumulated elapsed time
    show.tick(FRAME);

    assert!(show.swarm().is_at_rest());
    for agent in show.swarm().iter() {
        assert_eq!(agent.current_position(), agent.target_position());
    }
}

#[test]
fn distance_to_target_never_increases() {
    let mut show = show(500);
    show.form_double_helix(10.0, 20.0, 1.5);

    let mut previous = distances_to_target(&show);
    for _ in 0..120 {
        show.tick(FRAME);
        let current = distances_to_target(&show);
        for (i, (before, after)) in previous.iter().zip(&current).enumerate() {
            assert!(after <= &(before + 1e-5), "agent {} moved away: {} -> {}", i, before, after);
        }
        previous = current;
    }
}

#[test]
fn newer_command_preempts_in_flight_transition() {
    let mut show = show(200);
    show.form_sphere(10.0, 10.0);
    show.form_double_helix(5.0, 8.0, 2.0);

    show.tick(1.0);
    assert!(!show.swarm().is_at_rest());
    show.tick(1.0);

    assert!(show.swarm().is_at_rest(), "should settle at 2s, not 10s");
    for agent in show.swarm().iter() {
        let p = agent.current_position();
        assert!((vec2(p.x, p.z).length() - 5.0).abs() < 1e-3);
    }
}

#[test]
fn preemption_starts_from_mid_flight_position() {
    let mut show = show(50);
    show.form_sphere(10.0, 2.0);
    show.tick(1.0);
    let mid_flight: Vec<Vec3> = show.swarm().iter().map(|a| a.current_position()).collect();

    show.reset_formation(2.0);
    show.tick(0.0);
    for (agent, before) in show.swarm().iter().zip(&mid_flight) {
        assert_eq!(agent.current_position(), *before);
    }
}

#[test]
fn reset_at_rest_produces_no_movement() {
    let mut show = show(400);
    let before: Vec<Vec3> = show.swarm().iter().map(|a| a.current_position()).collect();

    show.reset_formation(2.0);
    show.reset_formation(2.0);
    for _ in 0..180 {
        show.tick(FRAME);
        for (agent, start) in show.swarm().iter().zip(&before) {
            assert_eq!(agent.current_position(), *start);
        }
    }
    assert!(show.swarm().is_at_rest());
}

#[test]
fn zero_and_negative_durations_snap() {
    for duration in [0.0, -3.0] {
        let mut show = show(64);
        show.form_sphere(10.0, duration);
        let stats = show.tick(0.0);
        assert_eq!(stats.settled, 64);
        for agent in show.swarm().iter() {
            assert!((agent.current_position().length() - 10.0).abs() < 1e-4);
        }
    }
}

#[test]
fn huge_frame_delta_clamps_to_target() {
    let mut show = show(64);
    show.form_double_helix(10.0, 20.0, 2.0);
    show.tick(10_000.0);
    for agent in show.swarm().iter() {
        assert_eq!(agent.current_position(), agent.target_position());
    }
}

#[test]
fn degenerate_single_agent_sphere() {
    let mut show = show(1);
    show.form_sphere(10.0, 1.0);
    show.tick(1.0);
    let p = show.swarm().get(0).map(|a| a.current_position()).expect("one agent");
    assert_eq!(p, vec3(0.0, 10.0, 0.0));
}
