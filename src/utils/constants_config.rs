// src/utils/constants_config.rs
use std::str::FromStr;
use log::warn;
use crate::models::Vec2;
use crate::utils::{DEFAULT_PROJECTILE_CONSTANTS, ProjectileError};

pub const ENV_GRAVITY: &str = "PROJECTILE_GRAVITY";
pub const ENV_SEGMENTS: &str = "PROJECTILE_SEGMENTS";
pub const ENV_VELOCITY_X: &str = "PROJECTILE_VELOCITY_X";
pub const ENV_VELOCITY_Y: &str = "PROJECTILE_VELOCITY_Y";
pub const ENV_START_RUNNING: &str = "PROJECTILE_START_RUNNING";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectileConstants {
    pub gravity: f64,
    pub ground_level: f64,
    pub marker_radius: f64,
    pub min_segments: usize,
    pub default_segments: usize,
    pub max_segments: usize,
    pub initial_position: Vec2,
    pub initial_velocity: Vec2,
    pub frame_rate_interval: f64,
    pub start_running: bool,
}

impl Default for ProjectileConstants {
    fn default() -> Self {
        DEFAULT_PROJECTILE_CONSTANTS
    }
}

impl ProjectileConstants {
    /// Creates a set of constants, using the defaults for any value left as `None`.
    /// # Example
    /// ```
    /// use projectile_motion::models::Vec2;
    /// use projectile_motion::utils::ProjectileConstants;
    ///
    /// let moon = ProjectileConstants::new(Some(-1.62), None, None, None, Some(Vec2::new(1.0, 5.0)));
    /// assert_eq!(moon.gravity, -1.62);
    /// assert_eq!(moon.ground_level, 0.0);
    /// assert_eq!(moon.initial_velocity, Vec2::new(1.0, 5.0));
    /// ```
    pub fn new(
        gravity: Option<f64>,
        ground_level: Option<f64>,
        marker_radius: Option<f64>,
        initial_position: Option<Vec2>,
        initial_velocity: Option<Vec2>,
    ) -> Self {
        let default = DEFAULT_PROJECTILE_CONSTANTS;
        Self {
            gravity: gravity.unwrap_or(default.gravity),
            ground_level: ground_level.unwrap_or(default.ground_level),
            marker_radius: marker_radius.unwrap_or(default.marker_radius),
            initial_position: initial_position.unwrap_or(default.initial_position),
            initial_velocity: initial_velocity.unwrap_or(default.initial_velocity),
            ..default
        }
    }

    /// Reads overrides from the process environment.
    /// Values that fail to parse are logged and ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ProjectileConstants::from_env`] with a caller supplied lookup.
    /// # Example
    /// ```
    /// use projectile_motion::utils::ProjectileConstants;
    ///
    /// let constants = ProjectileConstants::from_lookup(|key| match key {
    ///     "PROJECTILE_GRAVITY" => Some("-3.7".to_string()),
    ///     "PROJECTILE_SEGMENTS" => Some("not a number".to_string()),
    ///     _ => None,
    /// });
    /// assert_eq!(constants.gravity, -3.7);
    /// assert_eq!(constants.default_segments, 8);
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let default = DEFAULT_PROJECTILE_CONSTANTS;
        let velocity = Vec2::new(
            parse_override(ENV_VELOCITY_X, lookup(ENV_VELOCITY_X)).unwrap_or(default.initial_velocity.x),
            parse_override(ENV_VELOCITY_Y, lookup(ENV_VELOCITY_Y)).unwrap_or(default.initial_velocity.y),
        );

        Self {
            gravity: parse_override(ENV_GRAVITY, lookup(ENV_GRAVITY)).unwrap_or(default.gravity),
            default_segments: parse_override(ENV_SEGMENTS, lookup(ENV_SEGMENTS)).unwrap_or(default.default_segments),
            initial_velocity: velocity,
            start_running: parse_override(ENV_START_RUNNING, lookup(ENV_START_RUNNING)).unwrap_or(default.start_running),
            ..default
        }
    }

    /// Checks that every value can drive a simulation.
    /// # Errors
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ProjectileError> {
        if !self.gravity.is_finite() { return Err(ProjectileError::InvalidGravity); }
        if !(self.marker_radius.is_finite() && self.marker_radius > 0.0) { return Err(ProjectileError::InvalidRadius); }
        if self.min_segments == 0 {
            return Err(ProjectileError::InvalidSegmentCount { requested: 0, minimum: 1 });
        }
        if self.default_segments < self.min_segments {
            return Err(ProjectileError::InvalidSegmentCount {
                requested: self.default_segments,
                minimum: self.min_segments,
            });
        }
        if self.default_segments > self.max_segments {
            return Err(ProjectileError::SegmentCountTooLarge {
                requested: self.default_segments,
                maximum: self.max_segments,
            });
        }
        if !(self.frame_rate_interval.is_finite() && self.frame_rate_interval > 0.0) {
            return Err(ProjectileError::InvalidInterval);
        }
        if !(self.ground_level.is_finite() && self.initial_position.is_finite() && self.initial_velocity.is_finite()) {
            return Err(ProjectileError::NonFiniteLaunch);
        }
        if self.initial_position.y < self.ground_level { return Err(ProjectileError::LaunchBelowGround); }
        Ok(())
    }
}

/// Parses an optional raw override, warning when it is present but unusable.
pub fn parse_override<T: FromStr>(key: &str, raw: Option<String>) -> Option<T> {
    let raw = raw?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring {}={:?}: could not parse value, using default", key, raw);
            None
        }
    }
}
