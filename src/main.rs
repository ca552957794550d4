/*
 * Boid Flocking Simulation
 *
 * Each boid looks at its nearest neighbours every tick and adjusts its
 * velocity from three rules:
 * 1. Cohesion: fly toward the neighbours' centre of mass
 * 2. Separation: keep a small distance from neighbours that are too close
 * 3. Alignment: match the neighbours' average velocity
 *
 * Runs in a nannou window with interactive controls, or headless for a fixed
 * number of ticks.
 */

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use boid_flock::params::{BoundaryMode, SimulationParams, UpdateMode};
use boid_flock::{app, run_headless, FlockStats};

/// Boid flocking simulation
#[derive(Parser, Debug)]
#[command(name = "boid-flock")]
#[command(about = "Simulate a flock of boids in a window or headless")]
struct Args {
    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of boids (overrides the config file)
    #[arg(long)]
    boids: Option<usize>,

    /// Random seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// How boids read their neighbours within a tick
    #[arg(long, value_enum)]
    update_mode: Option<UpdateMode>,

    /// What happens at the world edges
    #[arg(long, value_enum)]
    boundary: Option<BoundaryMode>,

    /// Run without a window
    #[arg(long)]
    headless: bool,

    /// Ticks to run in headless mode
    #[arg(long, default_value_t = 1000)]
    ticks: u64,

    /// Log flock statistics every N ticks in headless mode (0 disables)
    #[arg(long, default_value_t = 100)]
    log_every: u64,
}

impl Args {
    fn resolve_params(&self) -> boid_flock::Result<SimulationParams> {
        let mut params = match &self.config {
            Some(path) => SimulationParams::from_toml_file(path)?,
            None => SimulationParams::default(),
        };
        if let Some(boids) = self.boids {
            params.num_boids = boids;
        }
        if self.seed.is_some() {
            params.seed = self.seed;
        }
        if let Some(mode) = self.update_mode {
            params.flock.update_mode = mode;
        }
        if let Some(boundary) = self.boundary {
            params.flock.boundary_mode = boundary;
        }
        params.validate()?;
        Ok(params)
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("boid_flock=info")),
        )
        .init();

    let args = Args::parse();
    let params = match args.resolve_params() {
        Ok(params) => params,
        Err(err) => {
            tracing::error!(%err, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    if args.headless {
        match run_headless(&params, args.ticks, args.log_every) {
            Ok(boids) => {
                println!("{}", FlockStats::measure(&boids));
                ExitCode::SUCCESS
            }
            Err(err) => {
                tracing::error!(%err, "headless run failed");
                ExitCode::FAILURE
            }
        }
    } else {
        tracing::info!(boids = params.num_boids, "opening simulation window");
        app::run(params);
        ExitCode::SUCCESS
    }
}
