/*
 * Particle Module
 *
 * This module defines the Particle struct for the mass-spring mesh.
 * A particle carries its authoritative position/velocity state plus two
 * scratch states written by the integrator sub-steps in physics.rs.
 */

use nannou::prelude::*;

// A position/velocity snapshot. The stepper keeps three of these per
// particle: the authoritative state and one per integrator sub-step.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PhysicsState {
    pub pos: Point2,
    pub vel: Vec2,
}

impl PhysicsState {
    pub fn new(pos: Point2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
        }
    }

    // Euclidean distance between two states' positions
    pub fn distance(&self, other: &PhysicsState) -> f32 {
        self.pos.distance(other.pos)
    }
}

#[derive(Clone, Debug)]
pub struct Particle {
    pub state: PhysicsState,
    // Fixed at construction: true when the particle lies on the outermost
    // row or column of the generating grid. Never recomputed.
    pub is_edge: bool,
    // Sub-step scratch states, only meaningful during a physics::step call
    pub(crate) scratch: [PhysicsState; 2],
}

impl Particle {
    pub fn new(pos: Point2, is_edge: bool) -> Self {
        let state = PhysicsState::new(pos);
        Self {
            state,
            is_edge,
            scratch: [state; 2],
        }
    }

    pub fn position(&self) -> Point2 {
        self.state.pos
    }

    pub fn velocity(&self) -> Vec2 {
        self.state.vel
    }

    pub fn distance_to(&self, other: &Particle) -> f32 {
        self.state.distance(&other.state)
    }

    // Stage 0 is the authoritative state, stages 1 and 2 are the scratch
    // states of the two integrator sub-steps.
    pub(crate) fn stage(&self, idx: usize) -> &PhysicsState {
        match idx {
            0 => &self.state,
            1 => &self.scratch[0],
            _ => &self.scratch[1],
        }
    }

    pub(crate) fn stage_mut(&mut self, idx: usize) -> &mut PhysicsState {
        match idx {
            0 => &mut self.state,
            1 => &mut self.scratch[0],
            _ => &mut self.scratch[1],
        }
    }
}
