/*
 * Drone Swarm Show - Module Definitions
 *
 * The formation and animation engine (agent, formation, transition,
 * scheduler, controller) has no window dependency and can be driven
 * headless. The app, renderer, ui and input modules put it on screen with
 * nannou.
 */

// Re-export key components for easier access
pub use agent::{Agent, Swarm};
pub use camera::{CameraPose, CameraRig, OrbitCamera};
pub use command::{CommandError, ShowCommand};
pub use controller::SwarmController;
pub use debug::DebugInfo;
pub use formation::Formation;
pub use params::ShowParams;
pub use scheduler::{Scheduler, TickStats};
pub use transition::{Easing, Motion, Transition};
pub use app::Model;

// Define modules
pub mod agent;
pub mod camera;
pub mod command;
pub mod controller;
pub mod debug;
pub mod formation;
pub mod headless;
pub mod params;
pub mod scheduler;
pub mod transition;
pub mod app;
pub mod ui;
pub mod renderer;
pub mod input;
