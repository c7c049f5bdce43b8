/*
 * Application Module
 *
 * This module defines the main application model and logic for the mesh
 * simulation. It owns the mesh, runs the physics on a fixed timestep, applies
 * the drag override after each step, and renders the particles and springs.
 */

use nannou::prelude::*;
use nannou_egui::Egui;
use rand::Rng;
use std::time::{Duration, Instant};

use crate::debug::DebugInfo;
use crate::input;
use crate::mesh::Mesh;
use crate::params::SimulationParams;
use crate::physics;
use crate::ui;
use crate::{EDGE_PARTICLE_RADIUS, PARTICLE_RADIUS};

// Main model for the application
pub struct Model {
    pub mesh: Mesh,
    pub params: SimulationParams,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub mouse_position: Vec2,
    // Index of the particle currently pinned to the cursor, if any
    pub dragged_particle: Option<usize>,
    // Fixed timestep physics variables
    pub physics_accumulator: Duration,
    pub physics_step_size: Duration,
    pub last_update_time: Instant,
}

// Initialize the model
pub fn model(app: &App) -> Model {
    // Create the main window
    let window_id = app
        .new_window()
        .title("Mesh")
        .size(640, 700)
        .view(view)
        .mouse_moved(input::mouse_moved)
        .mouse_pressed(input::mouse_pressed)
        .mouse_released(input::mouse_released)
        .raw_event(input::raw_window_event)
        .build()
        .unwrap();

    // Get the window
    let window = app.window(window_id).unwrap();

    // Create the UI
    let egui = Egui::from_window(&window);

    // Create simulation parameters and the initial mesh
    let params = SimulationParams::default();
    let mesh = build_mesh(&params);
    log::info!(
        "built {} mesh: {} particles, {} springs",
        params.topology.label(),
        mesh.particle_count(),
        mesh.spring_count()
    );

    // Calculate physics step size from the default step rate
    let physics_step_size = Duration::from_secs_f32(1.0 / params.fixed_physics_fps);
    let now = Instant::now();

    Model {
        mesh,
        params,
        egui,
        debug_info: DebugInfo::default(),
        mouse_position: Vec2::ZERO,
        dragged_particle: None,
        physics_accumulator: Duration::ZERO,
        physics_step_size,
        last_update_time: now,
    }
}

// Build a mesh from the current parameters, centered in the window
fn build_mesh(params: &SimulationParams) -> Mesh {
    let width = (params.cols - 1) as f32 * params.spacing;
    let height = (params.rows - 1) as f32 * params.spacing;
    let mut mesh = Mesh::build(
        params.topology,
        params.spacing,
        -width / 2.0,
        -height / 2.0,
        params.rows,
        params.cols,
        params.max_dist,
    );
    mesh.damping = params.damping;
    mesh.max_vel = params.max_vel;
    mesh
}

// Give every particle a random velocity kick and let the springs pull the
// mesh back together
fn scatter(mesh: &mut Mesh, speed: f32) {
    let mut rng = rand::thread_rng();
    for p in &mut mesh.particles {
        let angle = rng.gen_range(0.0..std::f32::consts::TAU);
        p.state.vel += speed * vec2(angle.cos(), angle.sin());
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    // Update debug info
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    // Update UI and check whether the mesh needs to be rebuilt
    let (should_rebuild, should_scatter, _ui_changed) = ui::update_ui(
        &mut model.egui,
        &mut model.params,
        &model.debug_info,
        model.mesh.particle_count(),
        model.mesh.spring_count(),
    );

    // Update physics step size in case the step rate changed
    model.physics_step_size = Duration::from_secs_f32(1.0 / model.params.fixed_physics_fps);

    // A topology or lattice change discards the whole mesh; there is no
    // partial reuse
    if should_rebuild {
        model.mesh = build_mesh(&model.params);
        model.dragged_particle = None;
        log::info!(
            "rebuilt {} mesh: {} particles, {} springs",
            model.params.topology.label(),
            model.mesh.particle_count(),
            model.mesh.spring_count()
        );
    }

    // Damping and velocity clamp edits apply to the live mesh directly
    model.mesh.damping = model.params.damping;
    model.mesh.max_vel = model.params.max_vel;

    if should_scatter {
        scatter(&mut model.mesh, model.params.scatter_speed);
    }

    // Get current time and add the frame time to the accumulator
    let current_time = Instant::now();
    let frame_time = current_time.duration_since(model.last_update_time);
    model.last_update_time = current_time;
    model.physics_accumulator += frame_time;

    // Only step the mesh if the simulation is not paused
    if !model.params.pause_simulation {
        let dt = model.physics_step_size.as_secs_f32();
        let mut physics_updates_this_frame = 0;

        // Run fixed timestep updates
        while model.physics_accumulator >= model.physics_step_size {
            physics::step(&mut model.mesh, dt);

            // The drag override is written after the step; the stepper keeps
            // applying spring forces to the dragged particle, which is what
            // pulls its neighbors along
            if let Some(index) = model.dragged_particle {
                model.mesh.move_particle(index, model.mouse_position);
            }

            model.physics_accumulator -= model.physics_step_size;
            physics_updates_this_frame += 1;
        }

        model.debug_info.physics_updates_per_frame = physics_updates_this_frame;
    }
}

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    // Begin drawing
    let draw = app.draw();

    // Clear the background
    draw.background().color(WHITE);

    // Draw the springs first so the particles sit on top of them
    if model.params.show_springs {
        for s in &model.mesh.springs {
            let a = model.mesh.particles[s.a].position();
            let b = model.mesh.particles[s.b].position();
            draw.line()
                .start(a)
                .end(b)
                .weight(1.0)
                .color(rgba(0.5, 0.5, 0.5, 1.0));
        }
    }

    // Edge particles are drawn larger for emphasis
    for p in &model.mesh.particles {
        let radius = if p.is_edge {
            EDGE_PARTICLE_RADIUS
        } else {
            PARTICLE_RADIUS
        };
        draw.ellipse().xy(p.position()).radius(radius).color(BLACK);
    }

    // Draw debug information if enabled
    if model.params.show_debug {
        ui::draw_debug_info(
            &draw,
            &model.debug_info,
            app.window_rect(),
            model.mesh.particle_count(),
            model.mesh.spring_count(),
        );
    }

    // Finish drawing
    draw.to_frame(app, &frame).unwrap();

    // Draw the egui UI
    model.egui.draw_to_frame(&frame).unwrap();
}
