// demos/headless_flight.rs
//
// Flies the default projectile with both integrators on a simulated 60 Hz
// clock and reports how far the Euler flight drifts from the closed form.
// Run with `RUST_LOG=info` (or `debug`) to see the simulation's own logging.

use log::info;
use projectile_motion::models::{RenderMode, RunState, SimulationMode};
use projectile_motion::simulation::Simulation;
use projectile_motion::utils::{ProjectileConstants, ProjectileError};

const FRAME: f64 = 1.0 / 60.0;

fn fly(constants: ProjectileConstants, mode: SimulationMode) -> Result<Simulation, ProjectileError> {
    let mut sim = Simulation::new(constants)?;
    sim.set_simulation_mode(mode);
    sim.set_render_mode(RenderMode::Cartesian);
    sim.launch(0.0);

    let mut now = 0.0;
    // the analytical integrator never grounds, so bound it by the ideal flight time
    let flight_time = -2.0 * constants.initial_velocity.y / constants.gravity;
    while sim.run_state() == RunState::Running && now < flight_time {
        now += FRAME;
        sim.tick(now);
        sim.record_frame();
    }
    Ok(sim)
}

fn main() -> Result<(), ProjectileError> {
    env_logger::init();

    let constants = ProjectileConstants::from_env();
    let analytical = fly(constants, SimulationMode::Analytical)?;
    let numerical = fly(constants, SimulationMode::Numerical)?;

    let a = analytical.state().position;
    let n = numerical.state().position;
    println!("Analytical landing: ({:.4}, {:.4})", a.x, a.y);
    println!("Numerical landing:  ({:.4}, {:.4}) [{:?}]", n.x, n.y, numerical.run_state());
    println!("Drift: {:.4}", a.distance(n));

    let parabola = numerical.parabola();
    let marker = numerical.marker();
    info!("Parabola has {} points, marker has {} points", parabola.len(), marker.len());

    if let Some([rate, time]) = numerical.overlay_text() {
        println!("{}\n{}", rate, time);
    }

    Ok(())
}
