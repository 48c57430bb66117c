use std::fmt;
use std::error::Error;

/// Represents errors that can occur while configuring a projectile simulation.
#[derive(Debug, Clone, PartialEq)]
pub enum ProjectileError {
    /// Indicates a gravitational acceleration that is not a finite number.
    InvalidGravity,
    /// Indicates a marker radius that is not strictly positive.
    InvalidRadius,
    /// Indicates a segment count below the smallest usable circle approximation.
    InvalidSegmentCount { requested: usize, minimum: usize },
    /// Indicates a segment count above the configured ceiling.
    SegmentCountTooLarge { requested: usize, maximum: usize },
    /// Indicates a frame-rate sampling interval that is not strictly positive.
    InvalidInterval,
    /// Indicates a launch position or velocity with a NaN or infinite component.
    NonFiniteLaunch,
    /// Indicates a launch position below the ground plane.
    LaunchBelowGround,
}

impl fmt::Display for ProjectileError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ProjectileError::InvalidGravity => write!(f, "Invalid gravity value"),
            ProjectileError::InvalidRadius => write!(f, "Invalid marker radius"),
            ProjectileError::InvalidSegmentCount { requested, minimum } => write!(
                f,
                "Invalid segment count {} (a circle needs at least {} segments)",
                requested, minimum
            ),
            ProjectileError::SegmentCountTooLarge { requested, maximum } => write!(
                f,
                "Invalid segment count {} (at most {} segments are allowed)",
                requested, maximum
            ),
            ProjectileError::InvalidInterval => write!(f, "Invalid frame rate interval"),
            ProjectileError::NonFiniteLaunch => write!(f, "Launch position and velocity must be finite"),
            ProjectileError::LaunchBelowGround => write!(f, "Launch position is below the ground"),
        }
    }
}

impl Error for ProjectileError {}
