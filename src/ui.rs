/*
 * UI Module
 *
 * This module contains functions for creating and updating the user interface
 * using nannou_egui. It provides the topology selector and controls for
 * adjusting simulation parameters. Parameter change detection is handled by
 * the SimulationParams struct.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::mesh::Topology;
use crate::params::SimulationParams;

// Update the UI. Returns whether the mesh should be rebuilt, whether the
// particles should be scattered, and whether any UI value changed.
pub fn update_ui(
    egui: &mut Egui,
    params: &mut SimulationParams,
    debug_info: &DebugInfo,
    particle_count: usize,
    spring_count: usize,
) -> (bool, bool, bool) {
    let mut should_rebuild = false;
    let mut should_scatter = false;

    // Take a snapshot of current parameter values for change detection
    params.take_snapshot();

    let ctx = egui.begin_frame();

    egui::Window::new("Mesh Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Topology", |ui| {
                egui::ComboBox::from_label("Layout")
                    .selected_text(params.topology.label())
                    .show_ui(ui, |ui| {
                        for topology in Topology::ALL {
                            ui.selectable_value(&mut params.topology, topology, topology.label());
                        }
                    });

                ui.add(egui::Slider::new(&mut params.rows, SimulationParams::get_rows_range()).text("Rows"));
                ui.add(egui::Slider::new(&mut params.cols, SimulationParams::get_cols_range()).text("Columns"));
                ui.add(egui::Slider::new(&mut params.spacing, SimulationParams::get_spacing_range()).text("Spacing"));
                ui.add(egui::Slider::new(&mut params.max_dist, SimulationParams::get_max_dist_range()).text("Max Connection Distance"));

                if ui.button("Rebuild Mesh").clicked() {
                    should_rebuild = true;
                }
            });

            ui.collapsing("Physics", |ui| {
                ui.add(egui::Slider::new(&mut params.damping, SimulationParams::get_damping_range()).text("Damping"));
                ui.add(egui::Slider::new(&mut params.max_vel, SimulationParams::get_max_vel_range()).text("Max Velocity"));
                ui.add(egui::Slider::new(&mut params.fixed_physics_fps, SimulationParams::get_physics_fps_range()).text("Physics Steps / s"));

                ui.separator();

                ui.add(egui::Slider::new(&mut params.scatter_speed, SimulationParams::get_scatter_speed_range()).text("Scatter Speed"));
                if ui.button("Scatter Particles").clicked() {
                    should_scatter = true;
                }
            });

            ui.collapsing("Mesh Info", |ui| {
                ui.label(format!("Particles: {}", particle_count));
                ui.label(format!("Springs: {}", spring_count));
                ui.label(format!("FPS: {:.1}", debug_info.fps));
                ui.label(format!(
                    "Frame time: {:.2} ms",
                    debug_info.frame_time.as_secs_f64() * 1000.0
                ));
            });

            ui.checkbox(&mut params.show_springs, "Draw Springs");
            ui.checkbox(&mut params.show_debug, "Show Debug Info");
            ui.checkbox(&mut params.pause_simulation, "Pause Simulation");
        });

    // Detect parameter changes
    let (mesh_changed, ui_changed) = params.detect_changes();

    (should_rebuild || mesh_changed, should_scatter, ui_changed)
}

// Draw debug information on the screen
pub fn draw_debug_info(
    draw: &nannou::Draw,
    debug_info: &DebugInfo,
    window_rect: nannou::geom::Rect,
    particle_count: usize,
    spring_count: usize,
) {
    // Create a background panel in the top-left corner
    let margin = 20.0;
    let line_height = 20.0;
    let panel_width = 220.0;
    let panel_height = line_height * 5.0 + margin;
    let panel_x = window_rect.left() + panel_width / 2.0;
    let panel_y = window_rect.top() - panel_height / 2.0;

    // Draw the background panel
    draw.rect()
        .x_y(panel_x, panel_y)
        .w_h(panel_width, panel_height)
        .color(nannou::color::rgba(0.0, 0.0, 0.0, 0.7));

    let text_x = window_rect.left() + margin;
    let text_y = window_rect.top() - margin;

    // Draw each line of text
    let debug_texts = [
        format!("FPS: {:.1}", debug_info.fps),
        format!(
            "Frame time: {:.2} ms",
            debug_info.frame_time.as_secs_f64() * 1000.0
        ),
        format!("Physics steps/frame: {}", debug_info.physics_updates_per_frame),
        format!("Particles: {}", particle_count),
        format!("Springs: {}", spring_count),
    ];

    for (i, text) in debug_texts.iter().enumerate() {
        let y = text_y - (i as f32 * line_height);

        // Position the text with a fixed offset from the left edge
        draw.text(text)
            .x_y(text_x + 70.0, y)
            .color(nannou::color::WHITE)
            .font_size(14);
    }
}
