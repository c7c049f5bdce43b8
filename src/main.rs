/*
 * Mass-Spring Mesh Simulation
 *
 * An interactive 2D mass-spring mesh: pick a topology, drag particles around
 * with the mouse, and watch the spring network pull itself back into shape.
 * The controls window selects between four layouts (Grid, FC, FC + EdgeConn,
 * EdgeConn) and exposes the physics parameters.
 */

use log::LevelFilter;
use simple_logger::SimpleLogger;

fn main() {
    SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .init()
        .expect("failed to initialize logging");

    nannou::app(springmesh::app::model)
        .update(springmesh::app::update)
        .run();
}
