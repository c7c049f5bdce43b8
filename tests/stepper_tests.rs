use nannou::prelude::*;
use springmesh::{physics, Mesh};

const DT: f32 = 1.0 / 24.0;

#[test]
fn zero_dt_step_changes_nothing() {
    let mut mesh = Mesh::new_fully_connected(30.0, 0.0, 0.0, 4, 4, 100.0, true);
    // Put the mesh in a non-trivial state first.
    mesh.move_particle(5, pt2(17.0, -3.0));
    mesh.particles[9].state.vel = vec2(25.0, 40.0);

    let before: Vec<_> = mesh.particles.iter().map(|p| p.state).collect();
    physics::step(&mut mesh, 0.0);

    for (p, prev) in mesh.particles.iter().zip(&before) {
        assert_eq!(p.state.pos, prev.pos);
        assert_eq!(p.state.vel, prev.vel);
    }
}

#[test]
fn damping_strictly_decreases_speed_without_springs() {
    let mut mesh = Mesh::new_grid(10.0, 0.0, 0.0, 2, 2);
    // With the springs gone the stepper reduces to damping plus drift.
    mesh.springs.clear();
    mesh.particles[0].state.vel = vec2(40.0, -30.0);

    let mut last_speed = mesh.particles[0].velocity().length();
    for _ in 0..100 {
        physics::step(&mut mesh, DT);
        let speed = mesh.particles[0].velocity().length();
        assert!(
            speed < last_speed,
            "speed went up from {} to {}",
            last_speed,
            speed
        );
        last_speed = speed;
    }
    // Half-life damping has bled off most of the initial speed by now.
    assert!(last_speed < 5.0);
}

#[test]
fn first_step_speeds_stay_under_the_clamp() {
    let mut mesh = Mesh::new_fully_connected(30.0, 0.0, 0.0, 5, 5, 100.0, true);
    mesh.max_vel = 50.0;
    // Stretch the center particle's springs absurdly far so the raw
    // impulses would dwarf the clamp.
    mesh.move_particle(12, pt2(5000.0, 5000.0));

    physics::step(&mut mesh, DT);

    for (i, p) in mesh.particles.iter().enumerate() {
        let speed = p.velocity().length();
        assert!(
            speed <= mesh.max_vel * 1.001,
            "particle {} exceeds the clamp: {} > {}",
            i,
            speed,
            mesh.max_vel
        );
    }
}

#[test]
fn perturbed_2x2_grid_relaxes_back_to_spacing() {
    let mut mesh = Mesh::new_grid(10.0, 0.0, 0.0, 2, 2);
    assert_eq!(mesh.spring_count(), 4);

    mesh.move_particle(0, pt2(1.0, 0.5));

    for _ in 0..100 {
        physics::step(&mut mesh, DT);
    }
    for s in &mesh.springs {
        let len = s.current_len(&mesh.particles);
        assert!(
            (len - 10.0).abs() < 0.5,
            "spring {}-{} still {} long after 100 steps",
            s.a,
            s.b,
            len
        );
    }

    // A few more seconds of settling brings the lattice much closer still.
    for _ in 0..200 {
        physics::step(&mut mesh, DT);
    }
    for s in &mesh.springs {
        let len = s.current_len(&mesh.particles);
        assert!((len - 10.0).abs() < 0.1);
    }
}

#[test]
fn dragging_a_particle_pulls_its_neighbors_along() {
    let mut mesh = Mesh::new_grid(30.0, 0.0, 0.0, 3, 3);
    let target = pt2(200.0, 200.0);
    let neighbor_start = mesh.particles[1].position();

    // One simulated second of holding the corner particle at the target,
    // overriding its position after every step the way the drag handler does.
    for _ in 0..24 {
        physics::step(&mut mesh, DT);
        mesh.move_particle(0, target);
    }

    assert_eq!(mesh.particles[0].position(), target);
    let neighbor_end = mesh.particles[1].position();
    assert!(
        neighbor_end.distance(target) < neighbor_start.distance(target),
        "neighbor did not move toward the dragged particle"
    );
}

#[test]
fn stepping_preserves_spring_parameters() {
    let mut mesh = Mesh::new_edge_connected(30.0, 0.0, 0.0, 3, 3);
    let springs_before = mesh.springs.clone();

    mesh.move_particle(4, pt2(100.0, -80.0));
    for _ in 0..48 {
        physics::step(&mut mesh, DT);
    }

    assert_eq!(mesh.springs, springs_before);
}
