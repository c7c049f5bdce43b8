/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct that contains all the
 * adjustable parameters for the mesh simulation. These parameters can be
 * modified through the UI. It also provides methods for parameter change
 * detection so the app knows when the mesh has to be rebuilt.
 */

use crate::mesh::{Topology, DEFAULT_DAMPING, DEFAULT_MAX_VEL};

// Parameters for the simulation that can be adjusted via UI
pub struct SimulationParams {
    pub topology: Topology,
    pub rows: usize,
    pub cols: usize,
    pub spacing: f32,
    // Maximum connection distance for the fully-connected topologies
    pub max_dist: f32,
    pub damping: f32,
    pub max_vel: f32,
    pub fixed_physics_fps: f32,
    // Speed of the random velocity kick applied by the Scatter button
    pub scatter_speed: f32,
    pub show_springs: bool,
    pub show_debug: bool,
    pub pause_simulation: bool,

    // Internal state for tracking changes
    previous_values: Option<ParamSnapshot>,
}

// A snapshot of parameter values used for change detection
struct ParamSnapshot {
    topology: Topology,
    rows: usize,
    cols: usize,
    spacing: f32,
    max_dist: f32,
    damping: f32,
    max_vel: f32,
    fixed_physics_fps: f32,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            topology: Topology::FullyConnectedEdge,
            rows: 13,
            cols: 13,
            spacing: 30.0,
            max_dist: 100.0,
            damping: DEFAULT_DAMPING,
            max_vel: DEFAULT_MAX_VEL,
            fixed_physics_fps: 24.0,
            scatter_speed: 150.0,
            show_springs: false,
            show_debug: false,
            pause_simulation: false,
            previous_values: None,
        }
    }
}

impl SimulationParams {
    // Take a snapshot of current parameter values for change detection
    pub fn take_snapshot(&mut self) {
        self.previous_values = Some(ParamSnapshot {
            topology: self.topology,
            rows: self.rows,
            cols: self.cols,
            spacing: self.spacing,
            max_dist: self.max_dist,
            damping: self.damping,
            max_vel: self.max_vel,
            fixed_physics_fps: self.fixed_physics_fps,
        });
    }

    // Check which parameters have changed since the last snapshot.
    // Returns a tuple of (mesh_shape_changed, any_ui_changed).
    // A mesh-shape change means the current mesh has to be discarded and
    // rebuilt; the remaining parameters apply to the live mesh directly.
    pub fn detect_changes(&self) -> (bool, bool) {
        let mut mesh_changed = false;
        let mut ui_changed = false;

        if let Some(prev) = &self.previous_values {
            if self.topology != prev.topology
                || self.rows != prev.rows
                || self.cols != prev.cols
                || self.spacing != prev.spacing
                || self.max_dist != prev.max_dist
            {
                mesh_changed = true;
                ui_changed = true;
            }

            if self.damping != prev.damping
                || self.max_vel != prev.max_vel
                || self.fixed_physics_fps != prev.fixed_physics_fps
            {
                ui_changed = true;
            }
        }

        (mesh_changed, ui_changed)
    }

    // Get parameter ranges for UI sliders
    pub fn get_rows_range() -> std::ops::RangeInclusive<usize> {
        2..=40
    }

    pub fn get_cols_range() -> std::ops::RangeInclusive<usize> {
        2..=40
    }

    pub fn get_spacing_range() -> std::ops::RangeInclusive<f32> {
        5.0..=60.0
    }

    pub fn get_max_dist_range() -> std::ops::RangeInclusive<f32> {
        30.0..=300.0
    }

    pub fn get_damping_range() -> std::ops::RangeInclusive<f32> {
        0.0..=1.0
    }

    pub fn get_max_vel_range() -> std::ops::RangeInclusive<f32> {
        10.0..=2000.0
    }

    pub fn get_physics_fps_range() -> std::ops::RangeInclusive<f32> {
        1.0..=120.0
    }

    pub fn get_scatter_speed_range() -> std::ops::RangeInclusive<f32> {
        0.0..=500.0
    }
}
