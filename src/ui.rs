/*
 * UI Module
 *
 * This module contains functions for creating and updating the user interface
 * using nannou_egui. It provides controls for every flocking parameter and
 * the driver settings. Change detection is handled by SimulationParams.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::params::{BoundaryMode, ParamChanges, SimulationParams, UpdateMode};

/// What the user asked for during this frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct UiActions {
    pub reset: bool,
    pub step_once: bool,
    pub changes: ParamChanges,
}

// Update the UI and report the requested actions
pub fn update_ui(egui: &mut Egui, params: &mut SimulationParams, debug_info: &DebugInfo) -> UiActions {
    let mut actions = UiActions::default();

    // Take a snapshot of current parameter values for change detection
    params.take_snapshot();

    let ctx = egui.begin_frame();

    egui::Window::new("Simulation Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Population", |ui| {
                ui.add(egui::Slider::new(&mut params.num_boids, SimulationParams::get_num_boids_range()).text("Number of Boids"));
                if ui.button("Reset Boids").clicked() {
                    actions.reset = true;
                }
                ui.add(egui::Slider::new(&mut params.tick_delay_ms, SimulationParams::get_tick_delay_range()).text("Tick Delay (ms)"));
            });

            ui.collapsing("Flocking Behavior", |ui| {
                let flock = &mut params.flock;
                ui.add(egui::Slider::new(&mut flock.neighbor_count, SimulationParams::get_neighbor_count_range()).text("Neighbours"));
                ui.add(egui::Slider::new(&mut flock.proximity_threshold, SimulationParams::get_threshold_range()).text("Proximity Threshold"));
                ui.add(egui::Slider::new(&mut flock.max_speed, SimulationParams::get_max_speed_range()).text("Max Speed"));
                ui.add(egui::Slider::new(&mut flock.cohesion_damping, SimulationParams::get_damping_range()).text("Cohesion Damping"));
                ui.add(egui::Slider::new(&mut flock.alignment_damping, SimulationParams::get_damping_range()).text("Alignment Damping"));
            });

            ui.collapsing("Update Model", |ui| {
                let flock = &mut params.flock;
                ui.label("Neighbour reads");
                ui.radio_value(&mut flock.update_mode, UpdateMode::Sequential, "Sequential (in place)");
                ui.radio_value(&mut flock.update_mode, UpdateMode::Simultaneous, "Simultaneous (snapshot)");
                ui.separator();
                ui.label("Boundary");
                ui.radio_value(&mut flock.boundary_mode, BoundaryMode::Reflect, "Reflect");
                ui.radio_value(&mut flock.boundary_mode, BoundaryMode::Torus, "Torus");
            });

            ui.collapsing("Statistics", |ui| {
                ui.label(format!("FPS: {:.1}", debug_info.fps));
                ui.label(format!("Frame time: {:.2} ms", debug_info.frame_time.as_secs_f64() * 1000.0));
                ui.label(format!("Ticks: {} ({} this frame)", debug_info.total_ticks, debug_info.ticks_per_frame));
                ui.label(format!("Mean speed: {:.2}", debug_info.stats.mean_speed));
                ui.label(format!("Polarization: {:.3}", debug_info.stats.polarization));
            });

            ui.checkbox(&mut params.show_debug, "Show Debug Info");
            ui.horizontal(|ui| {
                ui.checkbox(&mut params.pause_simulation, "Pause Simulation");
                if ui
                    .add_enabled(params.pause_simulation, egui::Button::new("Step"))
                    .clicked()
                {
                    actions.step_once = true;
                }
            });
        });

    actions.changes = params.detect_changes();
    actions
}

// Draw debug information on the screen
pub fn draw_debug_info(draw: &nannou::Draw, debug_info: &DebugInfo, window_rect: nannou::geom::Rect) {
    let margin = 20.0;
    let line_height = 20.0;
    let panel_width = 260.0;
    let panel_height = line_height * 5.0 + margin;
    let panel_x = window_rect.right() - panel_width / 2.0;
    let panel_y = window_rect.top() - panel_height / 2.0;

    draw.rect()
        .x_y(panel_x, panel_y)
        .w_h(panel_width, panel_height)
        .color(nannou::color::rgba(0.0, 0.0, 0.0, 0.6));

    let text_x = window_rect.right() - panel_width / 2.0;
    let text_y = window_rect.top() - margin;
    let stats = &debug_info.stats;

    let debug_texts = [
        format!("FPS: {:.1}", debug_info.fps),
        format!("Ticks: {}", debug_info.total_ticks),
        format!("Boids: {}", stats.count),
        format!("Speed: mean {:.2} / max {:.2}", stats.mean_speed, stats.max_speed),
        format!("Centroid: ({:.0}, {:.0})", stats.centroid.x, stats.centroid.y),
    ];

    let (r, g, b) = crate::renderer::HIGHLIGHT_COLOR;
    for (i, text) in debug_texts.iter().enumerate() {
        let y = text_y - (i as f32 * line_height);
        draw.text(text)
            .x_y(text_x, y)
            .w(panel_width - margin)
            .left_justify()
            .color(nannou::color::rgb(r, g, b))
            .font_size(14);
    }
}
