/*
 * Renderer Module
 *
 * This module draws the population. Each boid is a filled triangle whose
 * apex sits on the boid's position and points along its heading.
 *
 * The simulation uses canvas-style coordinates (origin top-left, y down);
 * nannou's frame is centred with y up, so positions are mapped through the
 * window rectangle and headings are mirrored vertically.
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::ui;
use crate::vector::Vector2;
use crate::BOID_SIZE;

// Palette
pub const BACKGROUND_COLOR: (u8, u8, u8) = (0x2C, 0x3F, 0x6B);
pub const BOID_COLOR: (u8, u8, u8) = (0x74, 0x73, 0xBD);
pub const HIGHLIGHT_COLOR: (u8, u8, u8) = (0xFF, 0xAC, 0xAC);

// Map a world position into the window's frame coordinates
pub fn world_to_frame(position: Vector2, world_width: f64, world_height: f64, window_rect: Rect) -> Point2 {
    let sx = window_rect.w() / world_width as f32;
    let sy = window_rect.h() / world_height as f32;
    pt2(
        window_rect.left() + position.x as f32 * sx,
        window_rect.top() - position.y as f32 * sy,
    )
}

// Heading in frame space (y flipped)
pub fn frame_heading(velocity: Vector2) -> f32 {
    (-velocity.y).atan2(velocity.x) as f32
}

// Triangle with its apex at the local origin, pointing along +x
fn boid_points() -> [Point2; 3] {
    [
        pt2(0.0, 0.0),
        pt2(-BOID_SIZE * 4.0, BOID_SIZE),
        pt2(-BOID_SIZE * 4.0, -BOID_SIZE),
    ]
}

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let (r, g, b) = BACKGROUND_COLOR;
    draw.background().color(rgb(r, g, b));

    let window_rect = app.window_rect();
    let flock = &model.params.flock;
    let (r, g, b) = BOID_COLOR;
    let boid_color = rgb(r, g, b);

    for boid in &model.boids {
        let xy = world_to_frame(boid.position, flock.world_width, flock.world_height, window_rect);
        draw.polygon()
            .color(boid_color)
            .points(boid_points())
            .xy(xy)
            .rotate(frame_heading(boid.velocity));
    }

    if model.params.show_debug {
        // Separation range and velocity of the first boid
        if let Some(first_boid) = model.boids.first() {
            let (r, g, b) = HIGHLIGHT_COLOR;
            let highlight = rgb(r, g, b);
            let xy = world_to_frame(first_boid.position, flock.world_width, flock.world_height, window_rect);
            let scale = window_rect.w() / flock.world_width as f32;

            draw.ellipse()
                .xy(xy)
                .radius(flock.proximity_threshold as f32 * scale)
                .no_fill()
                .stroke(highlight)
                .stroke_weight(1.0);

            let tip = world_to_frame(
                first_boid.position + first_boid.velocity * 5.0,
                flock.world_width,
                flock.world_height,
                window_rect,
            );
            draw.arrow()
                .start(xy)
                .end(tip)
                .color(highlight)
                .stroke_weight(2.0);
        }

        ui::draw_debug_info(&draw, &model.debug_info, window_rect);
    }

    if let Err(err) = draw.to_frame(app, &frame) {
        tracing::error!(?err, "failed to draw frame");
    }
    if let Err(err) = model.egui.draw_to_frame(&frame) {
        tracing::error!(?err, "failed to draw UI");
    }
}
