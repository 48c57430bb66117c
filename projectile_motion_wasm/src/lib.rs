// projectile_motion_wasm/src/lib.rs
// This is the public API for the wasm wrapper of the projectile simulation.
// The JavaScript host owns the canvas and the animation frame loop, it passes
// `performance.now() / 1000` into `tick` and draws the returned point buffers.

use wasm_bindgen::prelude::*;
use projectile_motion::integration::StepOutcome;
use projectile_motion::models::{RunState, SimulationMode, Vec2};
use projectile_motion::simulation::{Command, Simulation};
use projectile_motion::utils::ProjectileConstants;

/// Flattens points into `[x0, y0, x1, y1, ...]` for a `Float64Array`.
pub fn flatten(points: &[Vec2]) -> Vec<f64> {
    points.iter().flat_map(|p| [p.x, p.y]).collect()
}

#[cfg(target_arch = "wasm32")]
fn console_log(message: &str) {
    web_sys::console::log_1(&JsValue::from_str(message));
}

#[cfg(not(target_arch = "wasm32"))]
fn console_log(_message: &str) {}

#[wasm_bindgen]
pub struct WasmSimulation {
    simulation: Simulation,
}

impl Default for WasmSimulation {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl WasmSimulation {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            simulation: Simulation::default(),
        }
    }

    /// A simulation with a custom launch and gravity.
    #[wasm_bindgen]
    pub fn with_launch(x: f64, y: f64, vx: f64, vy: f64, gravity: f64) -> Result<WasmSimulation, JsValue> {
        let constants = ProjectileConstants::new(
            Some(gravity),
            None,
            None,
            Some(Vec2::new(x, y)),
            Some(Vec2::new(vx, vy)),
        );
        Simulation::new(constants)
            .map(|simulation| WasmSimulation { simulation })
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Advances the flight for a clock reading in seconds. Returns `true` if the projectile moved.
    #[wasm_bindgen]
    pub fn tick(&mut self, now: f64) -> bool {
        let outcome = self.simulation.tick(now);
        self.simulation.record_frame();
        if outcome == StepOutcome::Grounded && self.simulation.is_debug() {
            let position = self.simulation.state().position;
            console_log(&format!("Projectile grounded at x = {:.3}", position.x));
        }
        matches!(outcome, StepOutcome::Advanced | StepOutcome::Grounded)
    }

    #[wasm_bindgen]
    pub fn parabola(&self) -> js_sys::Float64Array {
        js_sys::Float64Array::from(&flatten(&self.simulation.parabola())[..])
    }

    #[wasm_bindgen]
    pub fn marker(&self) -> js_sys::Float64Array {
        js_sys::Float64Array::from(&flatten(&self.simulation.marker())[..])
    }

    #[wasm_bindgen]
    pub fn launch(&mut self, now: f64) -> bool {
        self.simulation.launch(now)
    }

    #[wasm_bindgen]
    pub fn restart(&mut self, now: f64) {
        self.simulation.handle(Command::Restart, now);
    }

    #[wasm_bindgen]
    pub fn pause(&mut self, now: f64) -> bool {
        self.simulation.pause(now)
    }

    #[wasm_bindgen]
    pub fn resume(&mut self, now: f64) -> bool {
        self.simulation.resume(now)
    }

    /// Returns `true` when the analytical integrator is now active.
    #[wasm_bindgen]
    pub fn toggle_integration(&mut self) -> bool {
        self.simulation.handle(Command::ToggleSimulationMode, 0.0);
        self.simulation.simulation_mode() == SimulationMode::Analytical
    }

    /// Returns `true` when cartesian curves are now active.
    #[wasm_bindgen]
    pub fn toggle_render_mode(&mut self) -> bool {
        self.simulation.handle(Command::ToggleRenderMode, 0.0);
        self.simulation.render_mode().is_cartesian()
    }

    #[wasm_bindgen]
    pub fn toggle_debug(&mut self) -> bool {
        self.simulation.toggle_debug()
    }

    #[wasm_bindgen]
    pub fn toggle_overlay(&mut self) -> bool {
        self.simulation.toggle_overlay()
    }

    #[wasm_bindgen]
    pub fn increase_segments(&mut self) -> usize {
        self.simulation.increase_segments()
    }

    #[wasm_bindgen]
    pub fn decrease_segments(&mut self) -> bool {
        self.simulation.decrease_segments()
    }

    /// Overlay lines joined by a newline, `undefined` while the overlay is off.
    #[wasm_bindgen]
    pub fn overlay_text(&self) -> Option<String> {
        self.simulation.overlay_text().map(|lines| lines.join("\n"))
    }

    #[wasm_bindgen(getter)]
    pub fn segments(&self) -> usize {
        self.simulation.segment_count()
    }

    #[wasm_bindgen(getter)]
    pub fn position_x(&self) -> f64 {
        self.simulation.state().position.x
    }

    #[wasm_bindgen(getter)]
    pub fn position_y(&self) -> f64 {
        self.simulation.state().position.y
    }

    #[wasm_bindgen(getter)]
    pub fn grounded(&self) -> bool {
        self.simulation.run_state() == RunState::Grounded
    }
}
