/*
 * Physics Module
 *
 * This module builds the initial population and advances it one tick at a
 * time. For every boid, in index order:
 * 1. Select its k nearest neighbours (itself included)
 * 2. Add the cohesion, separation and alignment nudges to its velocity
 * 3. Clamp the speed
 * 4. Move along the velocity
 * 5. Bring the position back inside the world
 *
 * In `UpdateMode::Sequential` neighbours are read from the live population,
 * so boid i sees boids 0..i already moved this tick. In
 * `UpdateMode::Simultaneous` every boid reads from a copy taken before the
 * tick starts.
 */

use rand::Rng;

use crate::boid::Boid;
use crate::neighbors::nearest_neighbours;
use crate::params::{FlockConfig, UpdateMode};
use crate::rules::combined_nudge;
use crate::vector::Vector2;

/// Initial speed components are integers drawn from `[-INITIAL_SPEED, INITIAL_SPEED)`.
pub const INITIAL_SPEED: i32 = 5;

// Create `count` boids spread uniformly over `[0, width) x [0, height)`
pub fn initialize_population<R: Rng + ?Sized>(
    count: usize,
    width: f64,
    height: f64,
    rng: &mut R,
) -> Vec<Boid> {
    let population: Vec<Boid> = (0..count).map(|_| random_boid(width, height, rng)).collect();
    tracing::debug!(count, width, height, "initialized population");
    population
}

fn random_boid<R: Rng + ?Sized>(width: f64, height: f64, rng: &mut R) -> Boid {
    let position = Vector2::new(rng.gen_range(0.0..width), rng.gen_range(0.0..height));
    let velocity = Vector2::new(
        rng.gen_range(-INITIAL_SPEED..INITIAL_SPEED) as f64,
        rng.gen_range(-INITIAL_SPEED..INITIAL_SPEED) as f64,
    );
    Boid::new(position, velocity)
}

// Advance every boid by one tick, in place
pub fn step_simulation(population: &mut [Boid], config: &FlockConfig) {
    match config.update_mode {
        UpdateMode::Sequential => {
            for i in 0..population.len() {
                let current = population[i];
                let neighbours = nearest_neighbours(&current, population, config.neighbor_count);
                integrate(&mut population[i], &neighbours, config);
            }
        }
        UpdateMode::Simultaneous => {
            let snapshot = population.to_vec();
            for (boid, before) in population.iter_mut().zip(&snapshot) {
                let neighbours = nearest_neighbours(before, &snapshot, config.neighbor_count);
                integrate(boid, &neighbours, config);
            }
        }
    }
    tracing::trace!(boids = population.len(), mode = ?config.update_mode, "tick complete");
}

// Apply the rules to one boid and move it
fn integrate(boid: &mut Boid, neighbours: &[Boid], config: &FlockConfig) {
    let nudge = combined_nudge(neighbours, boid, config);
    boid.apply_nudge(nudge);
    boid.limit_speed(config.max_speed);
    boid.advance();
    boid.wrap_edges(config);
}
