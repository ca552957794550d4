/*
 * Application Module
 *
 * This module defines the nannou application model and the driver loop:
 * draw, tick, wait. Ticks are paced by an accumulator so that at most one
 * tick runs per `tick_delay_ms` of wall-clock time, with a per-frame cap so a
 * slow frame cannot trigger an unbounded catch-up burst.
 */

use std::sync::OnceLock;
use std::time::Duration;

use nannou::prelude::*;
use nannou_egui::Egui;
use rand_chacha::ChaCha8Rng;

use crate::boid::Boid;
use crate::debug::{DebugInfo, FlockStats};
use crate::headless::make_rng;
use crate::input::{key_pressed, raw_window_event};
use crate::params::SimulationParams;
use crate::physics::{initialize_population, step_simulation};
use crate::renderer::view;
use crate::ui;

/// Upper bound on ticks run inside one frame.
pub const MAX_TICKS_PER_FRAME: usize = 8;

// nannou builds the model from a plain fn pointer, so launch parameters are
// handed over through this cell.
static LAUNCH_PARAMS: OnceLock<SimulationParams> = OnceLock::new();

// Main model for the application
pub struct Model {
    pub boids: Vec<Boid>,
    pub params: SimulationParams,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub rng: ChaCha8Rng,
    pub tick_accumulator: Duration,
    /// Set by the UI or keyboard to run exactly one tick while paused.
    pub step_requested: bool,
}

// Open the window and run until it is closed
pub fn run(params: SimulationParams) {
    if LAUNCH_PARAMS.set(params).is_err() {
        tracing::warn!("launch parameters already set; keeping the first ones");
    }
    nannou::app(model).update(update).run();
}

// Initialize the model
pub fn model(app: &App) -> Model {
    let params = LAUNCH_PARAMS.get().cloned().unwrap_or_default();

    // The window matches the world so one world unit is one pixel
    let window_id = app
        .new_window()
        .title("Boid Flocking Simulation")
        .size(params.flock.world_width as u32, params.flock.world_height as u32)
        .view(view)
        .key_pressed(key_pressed)
        .raw_event(raw_window_event)
        .build()
        .expect("failed to build the simulation window");

    let window = app
        .window(window_id)
        .expect("window disappeared right after creation");
    let egui = Egui::from_window(&window);

    let mut rng = make_rng(params.seed);
    let boids = initialize_population(
        params.num_boids,
        params.flock.world_width,
        params.flock.world_height,
        &mut rng,
    );
    tracing::info!(boids = boids.len(), "initialized boids");

    let debug_info = DebugInfo {
        stats: FlockStats::measure(&boids),
        ..DebugInfo::default()
    };

    Model {
        boids,
        params,
        egui,
        debug_info,
        rng,
        tick_accumulator: Duration::ZERO,
        step_requested: false,
    }
}

// Rebuild the population from the current parameters
pub fn reset_boids(model: &mut Model) {
    model.boids = initialize_population(
        model.params.num_boids,
        model.params.flock.world_width,
        model.params.flock.world_height,
        &mut model.rng,
    );
    model.tick_accumulator = Duration::ZERO;
    tracing::debug!(boids = model.boids.len(), "population reset");
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    model.egui.set_elapsed_time(update.since_start);
    let actions = ui::update_ui(&mut model.egui, &mut model.params, &model.debug_info);

    if actions.changes.any_changed {
        tracing::debug!(params = ?model.params.flock, "parameters changed");
    }
    if actions.reset || actions.changes.population_changed {
        reset_boids(model);
    }
    if actions.step_once {
        model.step_requested = true;
    }

    let ticks = advance(model, update.since_last);
    model.debug_info.ticks_per_frame = ticks;
    model.debug_info.total_ticks += ticks as u64;
    if ticks > 0 {
        model.debug_info.stats = FlockStats::measure(&model.boids);
    }
}

// Run however many ticks the elapsed time allows; returns the count
pub fn advance(model: &mut Model, elapsed: Duration) -> usize {
    if model.params.pause_simulation {
        model.tick_accumulator = Duration::ZERO;
        if std::mem::take(&mut model.step_requested) {
            step_simulation(&mut model.boids, &model.params.flock);
            return 1;
        }
        return 0;
    }
    model.step_requested = false;

    let delay = Duration::from_millis(model.params.tick_delay_ms);
    if delay.is_zero() {
        step_simulation(&mut model.boids, &model.params.flock);
        return 1;
    }

    model.tick_accumulator += elapsed;
    let mut ticks = 0;
    while model.tick_accumulator >= delay && ticks < MAX_TICKS_PER_FRAME {
        step_simulation(&mut model.boids, &model.params.flock);
        model.tick_accumulator -= delay;
        ticks += 1;
    }
    if ticks == MAX_TICKS_PER_FRAME {
        // Drop the backlog rather than spiral
        model.tick_accumulator = Duration::ZERO;
    }
    ticks
}
