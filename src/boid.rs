/*
 * Boid Module
 *
 * This module defines the Boid struct: a position and a velocity, both in
 * world units (origin top-left, y pointing down). A boid's identity is its
 * slot in the population; the integrator mutates it in place every tick.
 *
 * The per-boid pieces of the integrator live here: speed limiting and
 * keeping the boid inside the world.
 */

use serde::{Deserialize, Serialize};

use crate::params::{BoundaryMode, FlockConfig};
use crate::vector::Vector2;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Boid {
    pub position: Vector2,
    pub velocity: Vector2,
}

impl Boid {
    pub fn new(position: Vector2, velocity: Vector2) -> Self {
        Self { position, velocity }
    }

    /// Direction of travel in radians, `atan2(vy, vx)`.
    pub fn heading(&self) -> f64 {
        self.velocity.heading()
    }

    // Add a velocity adjustment
    pub fn apply_nudge(&mut self, nudge: Vector2) {
        self.velocity += nudge;
    }

    // Limits the speed without changing the direction of travel
    pub fn limit_speed(&mut self, max_speed: f64) {
        let speed = self.velocity.length();
        // A zero velocity can never exceed a positive limit, so `speed` is
        // non-zero whenever we divide by it.
        if speed > max_speed {
            self.velocity = self.velocity / speed * max_speed;
        }
    }

    // Advance one tick along the current velocity
    pub fn advance(&mut self) {
        self.position += self.velocity;
    }

    // If the boid goes outside the world it pops out on the other side
    pub fn wrap_edges(&mut self, config: &FlockConfig) {
        self.position.x = wrap_coordinate(self.position.x, config.world_width, config.boundary_mode);
        self.position.y = wrap_coordinate(self.position.y, config.world_height, config.boundary_mode);
    }
}

/// Bring a single coordinate back toward `[0, size]`.
pub fn wrap_coordinate(c: f64, size: f64, mode: BoundaryMode) -> f64 {
    match mode {
        BoundaryMode::Reflect => {
            if c < 0.0 {
                size + c
            } else if c > size {
                size - c
            } else {
                c
            }
        }
        BoundaryMode::Torus => {
            // rem_euclid can round up to exactly `size` for tiny negatives
            let wrapped = c.rem_euclid(size);
            if wrapped >= size {
                0.0
            } else {
                wrapped
            }
        }
    }
}
