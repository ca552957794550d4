/*
 * Input Module
 *
 * This module handles user input events for the simulation.
 *
 * Keys:
 * - Space: pause / resume
 * - S: run a single tick while paused
 * - R: re-initialize the population
 * - D: toggle the debug overlay
 */

use nannou::prelude::*;

use crate::app::{reset_boids, Model};

// Keyboard handler
pub fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    // Typing into an egui widget should not drive the simulation
    if model.egui.ctx().wants_keyboard_input() {
        return;
    }

    match key {
        Key::Space => {
            model.params.pause_simulation = !model.params.pause_simulation;
            tracing::debug!(paused = model.params.pause_simulation, "toggled pause");
        }
        Key::S => {
            if model.params.pause_simulation {
                model.step_requested = true;
            }
        }
        Key::R => reset_boids(model),
        Key::D => model.params.show_debug = !model.params.show_debug,
        _ => {}
    }
}

// Pass raw window events to egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
