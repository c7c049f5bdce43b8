/*
 * Input Module
 *
 * This module handles user input events for the mesh simulation.
 * Pressing the left button grabs the particle nearest to the cursor; while
 * the button is held the particle is pinned to the cursor between physics
 * steps, and releasing it hands the particle back to the springs.
 */

use nannou::prelude::*;
use nannou::winit::event::MouseButton;

use crate::app::Model;

// Mouse moved event handler
pub fn mouse_moved(_app: &App, model: &mut Model, pos: Point2) {
    // The drag override in the update loop reads this every physics step
    model.mouse_position = vec2(pos.x, pos.y);
}

// Mouse pressed event handler
pub fn mouse_pressed(_app: &App, model: &mut Model, button: MouseButton) {
    if button == MouseButton::Left {
        // Check if the click is on the UI before grabbing a particle
        if !model.egui.ctx().is_pointer_over_area() {
            model.dragged_particle = model.mesh.nearest_particle(model.mouse_position);
        }
    }
}

// Mouse released event handler
pub fn mouse_released(_app: &App, model: &mut Model, button: MouseButton) {
    if button == MouseButton::Left {
        model.dragged_particle = None;
    }
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
