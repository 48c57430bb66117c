use crate::assert_float_eq;
use crate::models::Vec2;
use crate::utils::{parse_override, ProjectileConstants, ProjectileError, ENV_GRAVITY, ENV_START_RUNNING};

#[test]
fn test_default_constants() {
    let constants = ProjectileConstants::default();
    assert_float_eq(constants.gravity, -9.8, 1e-12, None);
    assert_float_eq(constants.ground_level, 0.0, 1e-12, None);
    assert_float_eq(constants.marker_radius, 0.1, 1e-12, None);
    assert_eq!(constants.min_segments, 4);
    assert_eq!(constants.default_segments, 8);
    assert_eq!(constants.max_segments, 1 << 16);
    assert_eq!(constants.initial_position, Vec2::new(0.0, 0.0));
    assert_eq!(constants.initial_velocity, Vec2::new(1.0, 2.0));
    assert!(!constants.start_running);
    assert!(constants.validate().is_ok());
}

#[test]
fn test_new_with_partial_overrides() {
    let constants = ProjectileConstants::new(Some(-3.7), None, Some(0.25), None, None);
    assert_float_eq(constants.gravity, -3.7, 1e-12, None);
    assert_float_eq(constants.marker_radius, 0.25, 1e-12, None);
    assert_eq!(constants.initial_velocity, ProjectileConstants::default().initial_velocity);
}

#[test]
fn test_validate_rejects_bad_values() {
    let mut constants = ProjectileConstants::default();
    constants.gravity = f64::NAN;
    assert_eq!(constants.validate(), Err(ProjectileError::InvalidGravity));

    let mut constants = ProjectileConstants::default();
    constants.marker_radius = 0.0;
    assert_eq!(constants.validate(), Err(ProjectileError::InvalidRadius));

    let mut constants = ProjectileConstants::default();
    constants.default_segments = 2;
    assert_eq!(
        constants.validate(),
        Err(ProjectileError::InvalidSegmentCount { requested: 2, minimum: 4 })
    );

    let mut constants = ProjectileConstants::default();
    constants.max_segments = 6;
    assert_eq!(
        constants.validate(),
        Err(ProjectileError::SegmentCountTooLarge { requested: 8, maximum: 6 })
    );

    let mut constants = ProjectileConstants::default();
    constants.frame_rate_interval = -1.0;
    assert_eq!(constants.validate(), Err(ProjectileError::InvalidInterval));

    let mut constants = ProjectileConstants::default();
    constants.initial_velocity = Vec2::new(f64::INFINITY, 0.0);
    assert_eq!(constants.validate(), Err(ProjectileError::NonFiniteLaunch));

    let mut constants = ProjectileConstants::default();
    constants.initial_position = Vec2::new(0.0, -1.0);
    assert_eq!(constants.validate(), Err(ProjectileError::LaunchBelowGround));
}

#[test]
fn test_zero_gravity_is_valid() {
    let constants = ProjectileConstants::new(Some(0.0), None, None, None, None);
    assert!(constants.validate().is_ok());
}

#[test]
fn test_from_lookup_applies_overrides() {
    let constants = ProjectileConstants::from_lookup(|key| match key {
        "PROJECTILE_GRAVITY" => Some("-1.62".to_string()),
        "PROJECTILE_SEGMENTS" => Some(" 32 ".to_string()),
        "PROJECTILE_VELOCITY_X" => Some("3".to_string()),
        "PROJECTILE_VELOCITY_Y" => Some("4.5".to_string()),
        "PROJECTILE_START_RUNNING" => Some("true".to_string()),
        _ => None,
    });
    assert_float_eq(constants.gravity, -1.62, 1e-12, None);
    assert_eq!(constants.default_segments, 32);
    assert_eq!(constants.initial_velocity, Vec2::new(3.0, 4.5));
    assert!(constants.start_running);
}

#[test]
fn test_from_lookup_without_overrides_matches_default() {
    let constants = ProjectileConstants::from_lookup(|_| None);
    assert_eq!(constants, ProjectileConstants::default());
}

#[test]
fn test_parse_override_ignores_garbage() {
    assert_eq!(parse_override::<f64>(ENV_GRAVITY, Some("heavy".to_string())), None);
    assert_eq!(parse_override::<bool>(ENV_START_RUNNING, Some("yes".to_string())), None);
    assert_eq!(parse_override::<f64>(ENV_GRAVITY, None), None);
    assert_eq!(parse_override::<f64>(ENV_GRAVITY, Some("-9.81".to_string())), Some(-9.81));
}

#[test]
fn test_error_display() {
    let err = ProjectileError::InvalidSegmentCount { requested: 2, minimum: 4 };
    assert_eq!(err.to_string(), "Invalid segment count 2 (a circle needs at least 4 segments)");
    let err = ProjectileError::SegmentCountTooLarge { requested: 128, maximum: 64 };
    assert_eq!(err.to_string(), "Invalid segment count 128 (at most 64 segments are allowed)");
    assert_eq!(ProjectileError::InvalidGravity.to_string(), "Invalid gravity value");
}
