/*
 * Debug Information Module
 *
 * This module defines the diagnostics shown in the UI and logged by the
 * headless runner.
 *
 * Includes metrics for:
 * - FPS (frames per second) and frame time
 * - Total ticks and ticks run in the last frame
 * - Flock statistics: mean/max speed, centroid and polarization
 */

use std::fmt;
use std::time::Duration;

use crate::boid::Boid;
use crate::vector::Vector2;

/// Aggregate measurements over a population.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FlockStats {
    pub count: usize,
    pub mean_speed: f64,
    pub max_speed: f64,
    pub centroid: Vector2,
    /// Length of the mean unit heading: 1.0 when every moving boid points
    /// the same way, near 0.0 for a disordered flock. Still boids are skipped.
    pub polarization: f64,
}

impl FlockStats {
    pub fn measure(population: &[Boid]) -> Self {
        if population.is_empty() {
            return Self::default();
        }
        let n = population.len() as f64;

        let speeds = population.iter().map(|b| b.velocity.length());
        let total_speed: f64 = speeds.clone().sum();
        let max_speed = speeds.fold(0.0, f64::max);

        let centroid = population.iter().map(|b| b.position).sum::<Vector2>() / n;

        let headings: Vec<Vector2> = population
            .iter()
            .filter_map(|b| b.velocity.normalize().ok())
            .collect();
        let polarization = if headings.is_empty() {
            0.0
        } else {
            (headings.iter().copied().sum::<Vector2>() / headings.len() as f64).length()
        };

        Self {
            count: population.len(),
            mean_speed: total_speed / n,
            max_speed,
            centroid,
            polarization,
        }
    }
}

impl fmt::Display for FlockStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "boids={} mean_speed={:.3} max_speed={:.3} centroid=({:.1}, {:.1}) polarization={:.3}",
            self.count,
            self.mean_speed,
            self.max_speed,
            self.centroid.x,
            self.centroid.y,
            self.polarization
        )
    }
}

// Debug information to display
#[derive(Debug, Clone, Default)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub total_ticks: u64,
    pub ticks_per_frame: usize,
    pub stats: FlockStats,
}
