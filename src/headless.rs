/*
 * Headless Runner Module
 *
 * Runs the simulation without a window for a fixed number of ticks,
 * logging flock statistics as it goes. The inter-tick delay is not applied.
 */

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::boid::Boid;
use crate::debug::FlockStats;
use crate::error::Result;
use crate::params::SimulationParams;
use crate::physics::{initialize_population, step_simulation};

/// RNG for population setup: seeded when a seed is configured, otherwise
/// drawn from OS entropy.
pub fn make_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

// Run `ticks` ticks and return the final population
pub fn run_headless(params: &SimulationParams, ticks: u64, log_every: u64) -> Result<Vec<Boid>> {
    params.validate()?;

    let mut rng = make_rng(params.seed);
    let flock = &params.flock;
    let mut boids = initialize_population(params.num_boids, flock.world_width, flock.world_height, &mut rng);
    tracing::info!(
        boids = boids.len(),
        ticks,
        seed = ?params.seed,
        mode = ?flock.update_mode,
        boundary = ?flock.boundary_mode,
        "starting headless run"
    );

    for tick in 1..=ticks {
        step_simulation(&mut boids, flock);
        if log_every > 0 && tick % log_every == 0 {
            tracing::info!(tick, "{}", FlockStats::measure(&boids));
        }
    }

    Ok(boids)
}
