use crate::models::Vec2;
use crate::utils::ProjectileConstants;

/// Gravitational acceleration along y. Negative because y points up.
pub const GRAVITY: f64 = -9.8;

/// Smallest segment count that still approximates a circle.
pub const MIN_SEGMENTS: usize = 4;

pub const DEFAULT_SEGMENTS: usize = 8;

/// Ceiling for doubling, keeps the point buffers a bounded size.
pub const MAX_SEGMENTS: usize = 1 << 16;

/// Radius of the marker drawn around the projectile.
pub const MARKER_RADIUS: f64 = 0.1;

/// Seconds between frame rate samples.
pub const FRAME_RATE_INTERVAL: f64 = 0.2;

pub const DEFAULT_PROJECTILE_CONSTANTS: ProjectileConstants = ProjectileConstants {
    gravity: GRAVITY,
    ground_level: 0.0,
    marker_radius: MARKER_RADIUS,
    min_segments: MIN_SEGMENTS,
    default_segments: DEFAULT_SEGMENTS,
    max_segments: MAX_SEGMENTS,
    initial_position: Vec2::new(0.0, 0.0),
    initial_velocity: Vec2::new(1.0, 2.0),
    frame_rate_interval: FRAME_RATE_INTERVAL,
    start_running: false,
};
