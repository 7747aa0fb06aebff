/*
 * Drone Swarm Show
 *
 * Thousands of drones move between a grid, a sphere and a helix while the
 * camera orbits around them. Run with a window (default) or headless with a
 * scripted command sequence:
 *
 *   drone_show --headless --script "sphere; helix radius=6; reset-all"
 */

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use drone_show::command::{parse_script, DEFAULT_DURATION, DEFAULT_HEIGHT, DEFAULT_RADIUS};
use drone_show::headless::run_headless;
use drone_show::params::{ShowParams, DEFAULT_AGENT_COUNT, DEFAULT_GRID_SPACING};

#[derive(Parser, Debug)]
#[command(name = "drone_show", version, about = "Drone swarm formation show")]
struct Cli {
    /// Number of drones in the swarm
    #[arg(long, default_value_t = DEFAULT_AGENT_COUNT)]
    agents: usize,

    /// Spacing of the seed grid
    #[arg(long, default_value_t = DEFAULT_GRID_SPACING, allow_negative_numbers = true)]
    spacing: f32,

    /// Default transition duration in seconds
    #[arg(long, default_value_t = DEFAULT_DURATION, allow_negative_numbers = true)]
    duration: f32,

    /// Default sphere and helix radius
    #[arg(long, default_value_t = DEFAULT_RADIUS, allow_negative_numbers = true)]
    radius: f32,

    /// Default helix height
    #[arg(long, default_value_t = DEFAULT_HEIGHT, allow_negative_numbers = true)]
    height: f32,

    /// Tick agents on a single thread
    #[arg(long)]
    sequential: bool,

    /// Run the script without opening a window
    #[arg(long)]
    headless: bool,

    /// Commands for headless mode, separated by `;`
    #[arg(long, default_value = "sphere; helix; reset-all")]
    script: String,

    /// Seconds to run after each scripted command
    #[arg(long, default_value_t = 3.0)]
    dwell: f32,

    /// Fixed frame rate for headless ticking
    #[arg(long, default_value_t = 60.0)]
    fps: f32,
}

impl Cli {
    fn params(&self) -> ShowParams {
        ShowParams {
            agent_count: self.agents,
            grid_spacing: self.spacing,
            duration: self.duration,
            radius: self.radius,
            height: self.height,
            enable_parallel: !self.sequential,
            ..ShowParams::default()
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let params = cli.params();

    if cli.headless {
        let script = parse_script(&cli.script).with_context(|| format!("invalid script `{}`", cli.script))?;
        info!(commands = script.len(), agents = params.agent_count, "running headless show");
        let reports = run_headless(&params, &script, cli.dwell, cli.fps);
        let settled = reports.iter().filter(|report| report.settled_after.is_some()).count();
        info!(settled, total = reports.len(), "headless show finished");
        return Ok(());
    }

    drone_show::app::launch(params);
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
