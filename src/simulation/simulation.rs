//! The owned context that drives one projectile flight.
//!
//! A host loop (window toolkit, browser animation frame, test harness) owns a
//! [`Simulation`], feeds it monotonic clock readings through [`Simulation::tick`]
//! and draws whatever [`Simulation::parabola`] and [`Simulation::marker`] return.
//! Input handling maps the host's events onto [`Command`]s.
//!
//! # Example
//!
//! ```
//! use projectile_motion::models::{RunState, SimulationMode};
//! use projectile_motion::simulation::Simulation;
//!
//! let mut sim = Simulation::default();
//! sim.set_simulation_mode(SimulationMode::Numerical);
//! sim.launch(0.0);
//!
//! let mut now = 0.0;
//! while sim.run_state() == RunState::Running {
//!     now += 1.0 / 60.0;
//!     sim.tick(now);
//! }
//! assert_eq!(sim.run_state(), RunState::Grounded);
//! assert_eq!(sim.state().position.y, 0.0);
//! ```
use log::{debug, info, warn};
use crate::curves::{generate_circle, generate_parabola};
use crate::integration::{self, StepOutcome};
use crate::models::{ProjectileState, RenderMode, RunState, SegmentCount, SimulationMode, Vec2};
use crate::utils::{ProjectileConstants, ProjectileError, DEFAULT_PROJECTILE_CONSTANTS};
use crate::simulation::SimulationClock;
#[cfg(feature = "overlay")]
use crate::simulation::FrameRateCounter;

/// Control signals an input layer can send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ToggleDebug,
    ToggleSimulationMode,
    ToggleRenderMode,
    #[cfg(feature = "overlay")]
    ToggleOverlay,
    /// Start a flight unless one is already running.
    Launch,
    Restart,
    Pause,
    Resume,
    IncreaseSegments,
    DecreaseSegments,
}

#[derive(Debug, Clone)]
pub struct Simulation {
    state: ProjectileState,
    constants: ProjectileConstants,
    simulation_mode: SimulationMode,
    render_mode: RenderMode,
    segments: SegmentCount,
    run_state: RunState,
    clock: SimulationClock,
    /// Flight time of the most recent step, used to derive the analytical velocity.
    flight_time: f64,
    debug: bool,
    #[cfg(feature = "overlay")]
    overlay: bool,
    #[cfg(feature = "overlay")]
    frame_rate: FrameRateCounter,
}

impl Default for Simulation {
    fn default() -> Self {
        let constants = DEFAULT_PROJECTILE_CONSTANTS;
        let segments = SegmentCount::clamped(constants.default_segments, constants.min_segments, constants.max_segments);
        Simulation::build(constants, segments)
    }
}

impl Simulation {
    /// Creates a simulation from validated constants.
    ///
    /// Clock readings are taken as seconds, with `0.0` as the launch instant
    /// when `start_running` is set.
    ///
    /// # Errors
    /// Returns the first problem [`ProjectileConstants::validate`] finds.
    pub fn new(constants: ProjectileConstants) -> Result<Self, ProjectileError> {
        constants.validate()?;
        let segments = SegmentCount::new(constants.default_segments, constants.min_segments, constants.max_segments)?;
        Ok(Simulation::build(constants, segments))
    }

    fn build(constants: ProjectileConstants, segments: SegmentCount) -> Self {
        Simulation {
            state: ProjectileState::new(constants.initial_position, constants.initial_velocity),
            constants,
            simulation_mode: SimulationMode::default(),
            render_mode: RenderMode::default(),
            segments,
            run_state: if constants.start_running { RunState::Running } else { RunState::Paused },
            clock: SimulationClock::new(0.0),
            flight_time: 0.0,
            debug: true,
            #[cfg(feature = "overlay")]
            overlay: true,
            #[cfg(feature = "overlay")]
            frame_rate: FrameRateCounter::new(constants.frame_rate_interval),
        }
    }

    pub fn state(&self) -> &ProjectileState {
        &self.state
    }

    pub fn constants(&self) -> &ProjectileConstants {
        &self.constants
    }

    pub fn simulation_mode(&self) -> SimulationMode {
        self.simulation_mode
    }

    pub fn render_mode(&self) -> RenderMode {
        self.render_mode
    }

    pub fn segment_count(&self) -> usize {
        self.segments.get()
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    /// Current velocity of the projectile.
    ///
    /// The analytical integrator never writes `state().velocity`, so in that
    /// mode the velocity is derived from the launch and the last flight time.
    pub fn velocity(&self) -> Vec2 {
        match self.simulation_mode {
            SimulationMode::Analytical => self.state.velocity_at(self.flight_time, self.constants.gravity),
            SimulationMode::Numerical => self.state.velocity,
        }
    }

    /// Advances the projectile by one step with the current integration mode.
    ///
    /// Nothing happens unless the flight is running. A step that hits the
    /// ground moves the run state to [`RunState::Grounded`].
    pub fn step(&mut self, t: f64, dt: f64) -> StepOutcome {
        if !self.run_state.is_running() {
            return StepOutcome::Skipped;
        }
        if self.debug {
            debug!("integration mode: {:?}, t = {:.4}, dt = {:.4}", self.simulation_mode, t, dt);
        }

        let outcome = integration::step(&mut self.state, t, dt, self.simulation_mode, &self.constants);
        if outcome != StepOutcome::Skipped {
            self.flight_time = t;
        }
        if outcome == StepOutcome::Grounded {
            self.run_state = RunState::Grounded;
            info!("Projectile grounded at x = {:.3} after {:.3}s", self.state.position.x, t);
        }
        outcome
    }

    /// Feeds one host clock reading, in seconds, through the integrator.
    ///
    /// The first reading after a launch, restart or resume only sets the
    /// baseline for `dt` and does not move the projectile.
    pub fn tick(&mut self, now: f64) -> StepOutcome {
        if !self.run_state.is_running() {
            return StepOutcome::Skipped;
        }
        let Some((t, dt)) = self.clock.tick(now) else {
            return StepOutcome::Skipped;
        };

        let outcome = self.step(t, dt);

        #[cfg(feature = "overlay")]
        if let Some(rate) = self.frame_rate.update(t) {
            if self.debug {
                debug!("frame rate: {:.1} f/s", rate);
            }
        }

        outcome
    }

    /// The trajectory curve for the current state and render mode.
    pub fn parabola(&self) -> Vec<Vec2> {
        let state = ProjectileState { velocity: self.velocity(), ..self.state };
        generate_parabola(&state, self.render_mode, self.segments.get(), &self.constants)
    }

    /// The marker circle around the current position.
    pub fn marker(&self) -> Vec<Vec2> {
        generate_circle(&self.state, self.render_mode, self.segments.get(), &self.constants)
    }

    /// Switches integrators. Leaving analytical mode writes the derived
    /// velocity into the state so Euler steps continue the same trajectory.
    pub fn set_simulation_mode(&mut self, mode: SimulationMode) {
        if self.simulation_mode == SimulationMode::Analytical && mode == SimulationMode::Numerical {
            self.state.velocity = self.velocity();
        }
        self.simulation_mode = mode;
    }

    pub fn toggle_simulation_mode(&mut self) -> SimulationMode {
        self.set_simulation_mode(self.simulation_mode.toggled());
        self.simulation_mode
    }

    pub fn set_render_mode(&mut self, mode: RenderMode) {
        self.render_mode = mode;
    }

    pub fn toggle_render_mode(&mut self) -> RenderMode {
        self.render_mode = self.render_mode.toggled();
        self.render_mode
    }

    /// Sets the segment count, pulling it into the allowed range if needed. Returns the value in effect.
    pub fn set_segment_count(&mut self, segments: usize) -> usize {
        let (minimum, maximum) = (self.segments.minimum(), self.segments.maximum());
        self.segments = match SegmentCount::new(segments, minimum, maximum) {
            Ok(count) => count,
            Err(e) => {
                let count = SegmentCount::clamped(segments, minimum, maximum);
                warn!("{}, using {} segments", e, count.get());
                count
            }
        };
        self.segments.get()
    }

    /// Doubles the segment count up to the configured maximum. Returns the value in effect.
    pub fn increase_segments(&mut self) -> usize {
        if !self.segments.double() {
            warn!("Segment count is already at its maximum of {}", self.segments.maximum());
        }
        self.segments.get()
    }

    /// Halves the segment count. Returns `false` when already at the minimum.
    pub fn decrease_segments(&mut self) -> bool {
        let halved = self.segments.halve();
        if !halved {
            warn!("Can't draw a reasonable circle with fewer than {} segments", self.segments.minimum());
        }
        halved
    }

    /// Starts a flight unless one is already running. Returns whether it started.
    pub fn launch(&mut self, now: f64) -> bool {
        if self.run_state.is_running() {
            return false;
        }
        self.restart(now);
        true
    }

    /// Puts the projectile back at its launch state and starts the flight clock at `now`.
    pub fn restart(&mut self, now: f64) {
        self.state.reset();
        self.clock.restart(now);
        self.flight_time = 0.0;
        #[cfg(feature = "overlay")]
        self.frame_rate.reset(0.0);
        self.run_state = RunState::Running;
        info!("Launching from {:?} with velocity {:?}", self.state.initial_position, self.state.initial_velocity);
    }

    /// Freezes a running flight. Returns whether anything changed.
    pub fn pause(&mut self, now: f64) -> bool {
        if !self.run_state.is_running() {
            return false;
        }
        self.clock.pause(now);
        self.run_state = RunState::Paused;
        true
    }

    /// Continues a paused flight, or launches one if none was started yet.
    /// A grounded flight is left alone, it needs a restart.
    pub fn resume(&mut self, now: f64) -> bool {
        match self.run_state {
            RunState::Paused if self.clock.is_paused() => {
                self.clock.resume(now);
                self.run_state = RunState::Running;
                true
            }
            RunState::Paused => self.launch(now),
            RunState::Running | RunState::Grounded => false,
        }
    }

    pub fn toggle_debug(&mut self) -> bool {
        self.debug = !self.debug;
        self.debug
    }

    #[cfg(feature = "overlay")]
    pub fn toggle_overlay(&mut self) -> bool {
        self.overlay = !self.overlay;
        self.overlay
    }

    /// Counts a presented frame for the frame rate overlay.
    #[cfg(feature = "overlay")]
    pub fn record_frame(&mut self) {
        self.frame_rate.record_frame();
    }

    #[cfg(feature = "overlay")]
    pub fn frame_rate(&self) -> &FrameRateCounter {
        &self.frame_rate
    }

    /// Overlay text lines, `None` while the overlay is switched off.
    #[cfg(feature = "overlay")]
    pub fn overlay_text(&self) -> Option<[String; 2]> {
        self.overlay.then(|| self.frame_rate.overlay_lines())
    }

    /// Applies a control signal received at clock reading `now`.
    pub fn handle(&mut self, command: Command, now: f64) {
        match command {
            Command::ToggleDebug => {
                self.toggle_debug();
            }
            Command::ToggleSimulationMode => {
                let mode = self.toggle_simulation_mode();
                info!("Integration mode: {:?}", mode);
            }
            Command::ToggleRenderMode => {
                let mode = self.toggle_render_mode();
                info!("Render mode: {:?}", mode);
            }
            #[cfg(feature = "overlay")]
            Command::ToggleOverlay => {
                self.toggle_overlay();
            }
            Command::Launch => {
                self.launch(now);
            }
            Command::Restart => self.restart(now),
            Command::Pause => {
                self.pause(now);
            }
            Command::Resume => {
                self.resume(now);
            }
            Command::IncreaseSegments => {
                self.increase_segments();
            }
            Command::DecreaseSegments => {
                self.decrease_segments();
            }
        }
    }
}
