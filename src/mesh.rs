/*
 * Mesh Module
 *
 * This module builds the particle and spring sets for the four mesh
 * topologies. Particles are laid out on a regular row-major lattice; the
 * topology decides which pairs get springs and with what stiffness law.
 *
 * A mesh is always built in one shot and fully discarded on rebuild.
 * Individual particles and springs are never added to or removed from a
 * live mesh.
 */

use nannou::prelude::*;

use crate::particle::Particle;
use crate::spring::Spring;

// Velocity magnitude ceiling applied every sub-step
pub const DEFAULT_MAX_VEL: f32 = 1000.0;
// Per-second multiplicative velocity decay
pub const DEFAULT_DAMPING: f32 = 0.5;

// Which particle pairs receive springs when a mesh is built.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Topology {
    // Immediate row/column neighbors only, k = 1
    Grid,
    // Every pair within max_dist, k = 10 / base_len
    FullyConnected,
    // Union of FullyConnected and EdgeConnected
    FullyConnectedEdge,
    // Every edge particle to every other particle, k = 100 / base_len^2
    EdgeConnected,
}

impl Topology {
    pub const ALL: [Topology; 4] = [
        Topology::Grid,
        Topology::FullyConnected,
        Topology::FullyConnectedEdge,
        Topology::EdgeConnected,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Topology::Grid => "Grid",
            Topology::FullyConnected => "FC",
            Topology::FullyConnectedEdge => "FC + EdgeConn",
            Topology::EdgeConnected => "EdgeConn",
        }
    }
}

pub struct Mesh {
    pub particles: Vec<Particle>,
    pub springs: Vec<Spring>,
    pub max_vel: f32,
    pub damping: f32,
}

impl Mesh {
    // Build a mesh for the given topology. `max_dist` is only consulted by
    // the fully-connected variants.
    pub fn build(
        topology: Topology,
        spacing: f32,
        x: f32,
        y: f32,
        rows: usize,
        cols: usize,
        max_dist: f32,
    ) -> Self {
        match topology {
            Topology::Grid => Self::new_grid(spacing, x, y, rows, cols),
            Topology::FullyConnected => {
                Self::new_fully_connected(spacing, x, y, rows, cols, max_dist, false)
            }
            Topology::FullyConnectedEdge => {
                Self::new_fully_connected(spacing, x, y, rows, cols, max_dist, true)
            }
            Topology::EdgeConnected => Self::new_edge_connected(spacing, x, y, rows, cols),
        }
    }

    // A rows x cols lattice with springs between immediate row/column
    // neighbors. Exactly 2*rows*cols - (rows + cols) springs.
    pub fn new_grid(spacing: f32, x: f32, y: f32, rows: usize, cols: usize) -> Self {
        let mut mesh = Self::with_grid_particles(spacing, x, y, rows, cols);
        mesh.add_grid_springs(rows, cols);
        mesh
    }

    // The same lattice with a spring for every particle pair whose initial
    // distance is within max_dist. Optionally unioned with the
    // edge-connected spring set.
    pub fn new_fully_connected(
        spacing: f32,
        x: f32,
        y: f32,
        rows: usize,
        cols: usize,
        max_dist: f32,
        add_edge_springs: bool,
    ) -> Self {
        let mut mesh = Self::with_grid_particles(spacing, x, y, rows, cols);
        mesh.add_fully_connected_springs(max_dist);
        if add_edge_springs {
            mesh.add_edge_connected_springs();
        }
        mesh
    }

    // The same lattice where every edge particle is tied to every other
    // particle in the mesh.
    pub fn new_edge_connected(spacing: f32, x: f32, y: f32, rows: usize, cols: usize) -> Self {
        let mut mesh = Self::with_grid_particles(spacing, x, y, rows, cols);
        mesh.add_edge_connected_springs();
        mesh
    }

    // Place rows x cols particles in row-major order (index = row*cols + col)
    // so callers can map a grid coordinate to a particle without a search.
    fn with_grid_particles(spacing: f32, x: f32, y: f32, rows: usize, cols: usize) -> Self {
        debug_assert!(rows >= 2 && cols >= 2, "a mesh needs at least a 2x2 grid");
        debug_assert!(spacing > 0.0, "particle spacing must be positive");

        let mut particles = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                let pos = pt2(x + col as f32 * spacing, y + row as f32 * spacing);
                let is_edge = row == 0 || row == rows - 1 || col == 0 || col == cols - 1;
                particles.push(Particle::new(pos, is_edge));
            }
        }

        Self {
            particles,
            springs: Vec::new(),
            max_vel: DEFAULT_MAX_VEL,
            damping: DEFAULT_DAMPING,
        }
    }

    fn add_grid_springs(&mut self, rows: usize, cols: usize) {
        for row in 0..rows {
            for col in 0..cols {
                let here = row * cols + col;
                if col > 0 {
                    self.push_spring(here - 1, here, 1.0);
                }
                if row > 0 {
                    self.push_spring(here - cols, here, 1.0);
                }
            }
        }
    }

    fn add_fully_connected_springs(&mut self, max_dist: f32) {
        for i in 0..self.particles.len() {
            for j in 0..i {
                let d = self.particles[i].distance_to(&self.particles[j]);
                if d <= max_dist {
                    // Shorter springs are stiffer; the inverse law keeps
                    // near-neighbor coupling strong without exploding the
                    // stiffness of long-range links.
                    self.springs.push(Spring::new(j, i, d, 10.0 / d));
                }
            }
        }
    }

    fn add_edge_connected_springs(&mut self) {
        for i in 0..self.particles.len() {
            if !self.particles[i].is_edge {
                continue;
            }
            for j in 0..self.particles.len() {
                if i == j {
                    continue;
                }
                let d = self.particles[i].distance_to(&self.particles[j]);
                // Without squaring base_len the whole boundary snaps into
                // shape almost at once instead of deforming.
                self.springs.push(Spring::new(i, j, d, 100.0 / (d * d)));
            }
        }
    }

    // Append a spring with rest length taken from the endpoints' current
    // distance.
    fn push_spring(&mut self, a: usize, b: usize, k: f32) {
        let base_len = self.particles[a].distance_to(&self.particles[b]);
        self.springs.push(Spring::new(a, b, base_len, k));
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn spring_count(&self) -> usize {
        self.springs.len()
    }

    // Direct position override for one particle, used by the drag handler
    // between steps. The stepper has no notion of a pinned particle; spring
    // forces keep acting on the overridden particle on the next step.
    pub fn move_particle(&mut self, index: usize, pos: Point2) {
        self.particles[index].state.pos = pos;
    }

    // Index of the particle closest to `pos`. Linear scan; meshes are small.
    pub fn nearest_particle(&self, pos: Point2) -> Option<usize> {
        let mut best = None;
        let mut best_dist = f32::MAX;
        for (i, p) in self.particles.iter().enumerate() {
            let d = p.position().distance(pos);
            if d < best_dist {
                best_dist = d;
                best = Some(i);
            }
        }
        best
    }
}
