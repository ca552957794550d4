/*
 * Simulation Parameters Module
 *
 * This module defines the configuration for the flock. `FlockConfig` holds
 * everything a tick needs (neighbour count, thresholds, damping divisors,
 * world size and the update/boundary policies). `SimulationParams` wraps it
 * with driver settings such as the population size, the RNG seed and the
 * inter-tick delay, and provides change detection for the UI.
 *
 * Both structs load from TOML; missing keys fall back to the defaults below.
 */

use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{FlockError, Result};

pub const DEFAULT_NEIGHBOR_COUNT: usize = 7;
pub const DEFAULT_PROXIMITY_THRESHOLD: f64 = 25.0;
pub const DEFAULT_MAX_SPEED: f64 = 5.0;
pub const DEFAULT_COHESION_DAMPING: f64 = 100.0;
pub const DEFAULT_ALIGNMENT_DAMPING: f64 = 20.0;
pub const DEFAULT_WORLD_WIDTH: f64 = 1280.0;
pub const DEFAULT_WORLD_HEIGHT: f64 = 760.0;
pub const DEFAULT_NUM_BOIDS: usize = 50;
pub const DEFAULT_TICK_DELAY_MS: u64 = 5;

/// How agents observe each other within one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum UpdateMode {
    /// Agents are updated in place in index order; later agents see the
    /// already-updated state of earlier ones.
    #[default]
    Sequential,
    /// Every agent reads from a copy of the population taken at the start
    /// of the tick.
    Simultaneous,
}

/// What happens to a coordinate that leaves the world.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryMode {
    /// `S + c` below zero, `S - c` above `S`. Only one correction per axis
    /// per tick, so a large excursion can stay out of range.
    #[default]
    Reflect,
    /// Euclidean modulo onto `[0, S)`.
    Torus,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlockConfig {
    /// Size of each agent's neighbour set (the agent itself included).
    pub neighbor_count: usize,
    /// Neighbours strictly closer than this push the agent away.
    pub proximity_threshold: f64,
    /// Velocity magnitude cap, in units per tick.
    pub max_speed: f64,
    /// Divisor applied to the pull toward the neighbour centroid.
    pub cohesion_damping: f64,
    /// Divisor applied to the pull toward the neighbour mean velocity.
    pub alignment_damping: f64,
    pub world_width: f64,
    pub world_height: f64,
    pub update_mode: UpdateMode,
    pub boundary_mode: BoundaryMode,
}

impl Default for FlockConfig {
    fn default() -> Self {
        Self {
            neighbor_count: DEFAULT_NEIGHBOR_COUNT,
            proximity_threshold: DEFAULT_PROXIMITY_THRESHOLD,
            max_speed: DEFAULT_MAX_SPEED,
            cohesion_damping: DEFAULT_COHESION_DAMPING,
            alignment_damping: DEFAULT_ALIGNMENT_DAMPING,
            world_width: DEFAULT_WORLD_WIDTH,
            world_height: DEFAULT_WORLD_HEIGHT,
            update_mode: UpdateMode::default(),
            boundary_mode: BoundaryMode::default(),
        }
    }
}

impl FlockConfig {
    pub fn validate(&self) -> Result<()> {
        if self.neighbor_count == 0 {
            return Err(FlockError::invalid(
                "neighbor_count",
                "must be at least 1",
            ));
        }
        positive_finite("proximity_threshold", self.proximity_threshold)?;
        positive_finite("max_speed", self.max_speed)?;
        positive_finite("cohesion_damping", self.cohesion_damping)?;
        positive_finite("alignment_damping", self.alignment_damping)?;
        positive_finite("world_width", self.world_width)?;
        positive_finite("world_height", self.world_height)?;
        Ok(())
    }
}

fn positive_finite(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(FlockError::invalid(
            field,
            format!("must be positive and finite, got {value}"),
        ))
    }
}

// Parameters for the simulation that can be adjusted via CLI, TOML or UI
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParams {
    pub num_boids: usize,
    /// Fixed seed for reproducible populations; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Minimum wall-clock delay between ticks in the windowed driver.
    pub tick_delay_ms: u64,
    pub flock: FlockConfig,
    #[serde(skip)]
    pub show_debug: bool,
    #[serde(skip)]
    pub pause_simulation: bool,

    // Internal state for tracking changes
    #[serde(skip)]
    pub(crate) previous_values: Option<ParamSnapshot>,
}

// A snapshot of parameter values used for change detection
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ParamSnapshot {
    num_boids: usize,
    tick_delay_ms: u64,
    flock: FlockConfig,
    show_debug: bool,
    pause_simulation: bool,
}

/// Outcome of comparing the live parameters against the last snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParamChanges {
    /// Population must be rebuilt (boid count or world size changed).
    pub population_changed: bool,
    /// Anything at all changed.
    pub any_changed: bool,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            num_boids: DEFAULT_NUM_BOIDS,
            seed: None,
            tick_delay_ms: DEFAULT_TICK_DELAY_MS,
            flock: FlockConfig::default(),
            show_debug: false,
            pause_simulation: false,
            previous_values: None,
        }
    }
}

impl SimulationParams {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let params: SimulationParams = toml::from_str(content)?;
        params.validate()?;
        Ok(params)
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if self.num_boids == 0 {
            return Err(FlockError::invalid("num_boids", "must be at least 1"));
        }
        self.flock.validate()
    }

    // Take a snapshot of current parameter values for change detection
    pub fn take_snapshot(&mut self) {
        self.previous_values = Some(self.current_snapshot());
    }

    // Compare against the last snapshot; nothing has changed without one
    pub fn detect_changes(&self) -> ParamChanges {
        let Some(prev) = &self.previous_values else {
            return ParamChanges::default();
        };
        let current = self.current_snapshot();

        let population_changed = current.num_boids != prev.num_boids
            || current.flock.world_width != prev.flock.world_width
            || current.flock.world_height != prev.flock.world_height;

        ParamChanges {
            population_changed,
            any_changed: current != *prev,
        }
    }

    fn current_snapshot(&self) -> ParamSnapshot {
        ParamSnapshot {
            num_boids: self.num_boids,
            tick_delay_ms: self.tick_delay_ms,
            flock: self.flock.clone(),
            show_debug: self.show_debug,
            pause_simulation: self.pause_simulation,
        }
    }

    // Get parameter ranges for UI sliders
    pub fn get_num_boids_range() -> std::ops::RangeInclusive<usize> {
        1..=1000
    }

    pub fn get_neighbor_count_range() -> std::ops::RangeInclusive<usize> {
        1..=50
    }

    pub fn get_max_speed_range() -> std::ops::RangeInclusive<f64> {
        0.5..=20.0
    }

    pub fn get_threshold_range() -> std::ops::RangeInclusive<f64> {
        1.0..=100.0
    }

    pub fn get_damping_range() -> std::ops::RangeInclusive<f64> {
        1.0..=500.0
    }

    pub fn get_tick_delay_range() -> std::ops::RangeInclusive<u64> {
        0..=100
    }
}
