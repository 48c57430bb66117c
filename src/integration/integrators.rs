//! Time integration for a single projectile under constant gravity.
//!
//! Two algorithms are available:
//! - [`AnalyticalIntegrator`] evaluates the closed-form kinematic equations at the
//!   elapsed flight time, so it carries no accumulated error.
//! - [`EulerIntegrator`] advances position then velocity by the frame delta and
//!   clamps at the ground, reporting [`StepOutcome::Grounded`] when it does.
//!
//! [`step`] dispatches on [`SimulationMode`] so exactly one of them runs per call.
//!
//! # Example
//!
//! ```
//! use projectile_motion::integration::{step, StepOutcome};
//! use projectile_motion::models::{ProjectileState, SimulationMode};
//! use projectile_motion::utils::ProjectileConstants;
//!
//! let constants = ProjectileConstants::default();
//! let mut state = ProjectileState::default();
//!
//! let outcome = step(&mut state, 0.1, 0.1, SimulationMode::Numerical, &constants);
//! assert_eq!(outcome, StepOutcome::Advanced);
//! assert!((state.position.y - 0.2).abs() < 1e-12);
//! ```
use crate::models::{ProjectileState, SimulationMode};
use crate::utils::ProjectileConstants;

/// What a single integration step did to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The state was moved forward.
    Advanced,
    /// The state was moved forward and clamped to the ground.
    Grounded,
    /// Nothing changed.
    Skipped,
}

pub trait Integrator {
    fn mode(&self) -> SimulationMode;

    /// Advances `state`. `t` is the time since launch and `dt` the time since the previous step.
    fn advance(&self, state: &mut ProjectileState, t: f64, dt: f64, constants: &ProjectileConstants) -> StepOutcome;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticalIntegrator;

#[derive(Debug, Clone, Copy, Default)]
pub struct EulerIntegrator;

impl Integrator for AnalyticalIntegrator {
    fn mode(&self) -> SimulationMode {
        SimulationMode::Analytical
    }

    fn advance(&self, state: &mut ProjectileState, t: f64, _dt: f64, constants: &ProjectileConstants) -> StepOutcome {
        advance_analytical(state, t, constants.gravity);
        StepOutcome::Advanced
    }
}

impl Integrator for EulerIntegrator {
    fn mode(&self) -> SimulationMode {
        SimulationMode::Numerical
    }

    fn advance(&self, state: &mut ProjectileState, _t: f64, dt: f64, constants: &ProjectileConstants) -> StepOutcome {
        advance_numerical(state, dt, constants.gravity, constants.ground_level)
    }
}

impl SimulationMode {
    pub fn integrator(self) -> &'static dyn Integrator {
        match self {
            SimulationMode::Analytical => &AnalyticalIntegrator,
            SimulationMode::Numerical => &EulerIntegrator,
        }
    }
}

/// Sets the position from the closed-form equations at time `t`.
///
/// `x = v0.x * t + x0`, `y = g * t^2 / 2 + v0.y * t + y0`.
/// Velocity is left untouched; see [`ProjectileState::velocity_at`].
/// No ground clamp is applied here.
///
/// # Example
/// ```
/// use projectile_motion::integration::advance_analytical;
/// use projectile_motion::models::ProjectileState;
///
/// let mut state = ProjectileState::default();
/// advance_analytical(&mut state, 0.2, -9.8);
/// assert!((state.position.x - 0.2).abs() < 1e-12);
/// assert!((state.position.y - 0.204).abs() < 1e-12);
/// ```
pub fn advance_analytical(state: &mut ProjectileState, t: f64, gravity: f64) {
    let r0 = state.initial_position;
    let v0 = state.initial_velocity;

    state.position.x = v0.x * t + r0.x;
    state.position.y = 0.5 * gravity * t * t + v0.y * t + r0.y;
}

/// One explicit Euler step of length `dt`.
///
/// Position is advanced with the velocity from before this step's gravity
/// update. A position below `ground_level` is clamped to it and reported as
/// [`StepOutcome::Grounded`]. Non-positive or non-finite `dt` does nothing.
pub fn advance_numerical(state: &mut ProjectileState, dt: f64, gravity: f64, ground_level: f64) -> StepOutcome {
    if !(dt.is_finite() && dt > 0.0) {
        return StepOutcome::Skipped;
    }

    state.position += state.velocity * dt;

    let mut outcome = StepOutcome::Advanced;
    if state.position.y < ground_level {
        state.position.y = ground_level;
        outcome = StepOutcome::Grounded;
    }

    // no horizontal drag, x velocity stays constant
    state.velocity.y += gravity * dt;

    outcome
}

/// Advances `state` with the integrator selected by `mode`.
pub fn step(state: &mut ProjectileState, t: f64, dt: f64, mode: SimulationMode, constants: &ProjectileConstants) -> StepOutcome {
    mode.integrator().advance(state, t, dt, constants)
}
