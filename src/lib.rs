/*
 * Boid Flocking Simulation - Module Definitions
 *
 * This file defines the module structure for the flocking simulation.
 * The core (vector, boid, neighbors, rules, physics, params, error) has no
 * graphics dependency; app, renderer, ui and input drive it through nannou.
 */

// Re-export key components for easier access
pub use app::Model;
pub use boid::Boid;
pub use debug::{DebugInfo, FlockStats};
pub use error::{FlockError, Result};
pub use headless::run_headless;
pub use neighbors::{nearest_indices, nearest_neighbours, Neighbor};
pub use params::{BoundaryMode, FlockConfig, SimulationParams, UpdateMode};
pub use physics::{initialize_population, step_simulation};
pub use vector::Vector2;

// Define modules
pub mod app;
pub mod boid;
pub mod debug;
pub mod error;
pub mod headless;
pub mod input;
pub mod neighbors;
pub mod params;
pub mod physics;
pub mod renderer;
pub mod rules;
pub mod ui;
pub mod vector;

// Constants
/// Half-width of the drawn triangle, in world units. The triangle is four
/// times as long.
pub const BOID_SIZE: f32 = 5.0;
