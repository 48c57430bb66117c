use crate::models::Vec2;
use crate::utils::DEFAULT_PROJECTILE_CONSTANTS;

/// Kinematic state of a single projectile.
///
/// `initial_position` and `initial_velocity` describe the launch and stay fixed
/// for the whole flight. `position` and `velocity` are what the integrators write.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectileState {
    pub initial_position: Vec2,
    pub initial_velocity: Vec2,
    pub position: Vec2,
    pub velocity: Vec2,
}

impl Default for ProjectileState {
    /// Launch from the origin with the default velocity.
    /// # Example
    /// ```
    /// use projectile_motion::models::{ProjectileState, Vec2};
    ///
    /// let state = ProjectileState::default();
    /// assert_eq!(state.position, Vec2::new(0.0, 0.0));
    /// assert_eq!(state.velocity, Vec2::new(1.0, 2.0));
    /// ```
    fn default() -> Self {
        ProjectileState::new(
            DEFAULT_PROJECTILE_CONSTANTS.initial_position,
            DEFAULT_PROJECTILE_CONSTANTS.initial_velocity,
        )
    }
}

impl ProjectileState {
    pub fn new(initial_position: Vec2, initial_velocity: Vec2) -> Self {
        ProjectileState {
            initial_position,
            initial_velocity,
            position: initial_position,
            velocity: initial_velocity,
        }
    }

    /// Puts the projectile back at its launch position and velocity.
    /// # Example
    /// ```
    /// use projectile_motion::models::{ProjectileState, Vec2};
    ///
    /// let mut state = ProjectileState::default();
    /// state.position = Vec2::new(3.0, 0.5);
    /// state.velocity = Vec2::new(1.0, -4.0);
    /// state.reset();
    /// assert_eq!(state.position, state.initial_position);
    /// assert_eq!(state.velocity, state.initial_velocity);
    /// ```
    pub fn reset(&mut self) {
        self.position = self.initial_position;
        self.velocity = self.initial_velocity;
    }

    /// Velocity of the ideal trajectory at `t` seconds after launch.
    ///
    /// The analytical integrator never writes `velocity`, so this is how
    /// callers recover it in that mode.
    pub fn velocity_at(&self, t: f64, gravity: f64) -> Vec2 {
        Vec2::new(self.initial_velocity.x, self.initial_velocity.y + gravity * t)
    }
}
