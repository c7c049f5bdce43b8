/*
 * Physics Module
 *
 * This module advances the mass-spring mesh by one time step. Each step runs
 * the same sub-step procedure twice (spring impulses, damping, velocity
 * clamp, position advance) into per-particle scratch states, then folds the
 * difference of the two scratch states back into the authoritative state.
 */

use crate::mesh::Mesh;

// Advance every particle in the mesh by `dt` seconds, in place.
//
// Total for any valid mesh and dt >= 0: no error states, no allocation.
// Degenerate inputs (negative dt, NaN positions, zero-length springs) yield
// garbage numbers rather than a panic.
pub fn step(mesh: &mut Mesh, dt: f32) {
    substep(mesh, dt, 0);
    substep(mesh, dt, 1);
    combine(mesh);
}

// One sub-step: read stage `stage`, write stage `stage + 1`.
fn substep(mesh: &mut Mesh, dt: f32, stage: usize) {
    let src = stage;
    let dst = stage + 1;

    // Damping is applied as damping^dt so the decay per unit time is
    // independent of the step size.
    let damp = mesh.damping.powf(dt);
    let max_vel = mesh.max_vel;
    let Mesh {
        particles, springs, ..
    } = mesh;

    for p in particles.iter_mut() {
        let copy = *p.stage(src);
        *p.stage_mut(dst) = copy;
    }

    // Hooke impulses, mass normalized to 1. The displacement vector is not
    // normalized: the impulse scales with both the extension and the current
    // endpoint distance.
    for s in springs.iter() {
        let pa = *particles[s.a].stage(dst);
        let pb = *particles[s.b].stage(dst);
        let dist = pa.distance(&pb);
        let force = s.k * (dist - s.base_len);
        let impulse = dt * force * (pb.pos - pa.pos);
        particles[s.a].stage_mut(dst).vel += impulse;
        particles[s.b].stage_mut(dst).vel -= impulse;
    }

    for p in particles.iter_mut() {
        // The position advances with the pre-sub-step velocity, not the one
        // the spring impulses just produced.
        let old_vel = p.stage(src).vel;
        let state = p.stage_mut(dst);

        state.vel *= damp;

        let speed = state.vel.length();
        if speed > max_vel {
            state.vel *= max_vel / speed;
        }

        state.pos += dt * old_vel;
    }
}

// Fold the two sub-steps back into the authoritative state as a delta.
//
// state += scratch2 - scratch1 is what keeps the stiff edge-connected
// topologies stable. Taking scratch1 directly (forward Euler) and averaging
// the two sub-step deltas (RK2) both diverge for k = 100 / base_len^2
// springs at the default step size.
fn combine(mesh: &mut Mesh) {
    for p in &mut mesh.particles {
        let d_pos = p.scratch[1].pos - p.scratch[0].pos;
        let d_vel = p.scratch[1].vel - p.scratch[0].vel;
        p.state.pos += d_pos;
        p.state.vel += d_vel;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nannou::prelude::*;

    #[test]
    fn zero_dt_is_a_no_op() {
        let mut mesh = Mesh::new_grid(30.0, 0.0, 0.0, 3, 3);
        mesh.particles[4].state.vel = vec2(5.0, -2.0);
        let before: Vec<_> = mesh.particles.iter().map(|p| p.state).collect();

        step(&mut mesh, 0.0);

        for (p, prev) in mesh.particles.iter().zip(&before) {
            assert_eq!(p.state.pos, prev.pos);
            assert_eq!(p.state.vel, prev.vel);
        }
    }

    #[test]
    fn step_leaves_springs_and_edge_flags_alone() {
        let mut mesh = Mesh::new_fully_connected(30.0, 0.0, 0.0, 3, 3, 100.0, true);
        let springs_before = mesh.springs.clone();
        let edges_before: Vec<bool> = mesh.particles.iter().map(|p| p.is_edge).collect();

        mesh.move_particle(0, pt2(-50.0, -50.0));
        for _ in 0..10 {
            step(&mut mesh, 1.0 / 24.0);
        }

        assert_eq!(mesh.springs, springs_before);
        let edges_after: Vec<bool> = mesh.particles.iter().map(|p| p.is_edge).collect();
        assert_eq!(edges_after, edges_before);
    }

    #[test]
    fn mesh_at_rest_stays_at_rest() {
        let mut mesh = Mesh::new_grid(10.0, 0.0, 0.0, 2, 2);
        for _ in 0..50 {
            step(&mut mesh, 1.0 / 24.0);
        }
        for (i, p) in mesh.particles.iter().enumerate() {
            assert!(
                p.velocity().length() < 1e-6,
                "particle {} drifted from rest: vel {:?}",
                i,
                p.velocity()
            );
        }
    }
}
