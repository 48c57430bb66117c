use approx::{assert_abs_diff_eq, assert_relative_eq};
use crate::assert_float_eq;
use crate::models::{ProjectileState, RenderMode, RunState, SegmentCount, SimulationMode, Vec2};
use crate::utils::ProjectileError;

#[test]
fn test_vec2_arithmetic() {
    let a = Vec2::new(1.0, 2.0);
    let b = Vec2::new(0.5, -1.0);
    assert_eq!(a + b, Vec2::new(1.5, 1.0));
    assert_eq!(a - b, Vec2::new(0.5, 3.0));
    assert_eq!(a * 2.0, Vec2::new(2.0, 4.0));

    let mut c = a;
    c += b;
    assert_eq!(c, Vec2::new(1.5, 1.0));
}

#[test]
fn test_vec2_length_and_distance() {
    assert_float_eq(Vec2::new(3.0, 4.0).length(), 5.0, 1e-12, None);
    assert_float_eq(Vec2::new(1.0, 1.0).distance(Vec2::new(4.0, 5.0)), 5.0, 1e-12, None);
    assert_float_eq(Vec2::ZERO.length(), 0.0, 1e-12, None);
}

#[test]
fn test_vec2_finiteness() {
    assert!(Vec2::new(1.0, -2.0).is_finite());
    assert!(!Vec2::new(f64::NAN, 0.0).is_finite());
    assert!(!Vec2::new(0.0, f64::NEG_INFINITY).is_finite());
}

#[test]
fn test_vec2_approx_traits() {
    let a = Vec2::new(0.1 + 0.2, 1.0);
    let b = Vec2::new(0.3, 1.0);
    assert_ne!(a, b);
    assert_abs_diff_eq!(a, b, epsilon = 1e-12);
    assert_relative_eq!(a, b);
}

#[test]
fn test_state_new_starts_at_launch() {
    let state = ProjectileState::new(Vec2::new(0.5, 1.0), Vec2::new(2.0, 3.0));
    assert_eq!(state.position, state.initial_position);
    assert_eq!(state.velocity, state.initial_velocity);
}

#[test]
fn test_state_velocity_at() {
    let state = ProjectileState::default();
    let velocity = state.velocity_at(0.5, -9.8);
    assert_float_eq(velocity.x, 1.0, 1e-12, None);
    assert_float_eq(velocity.y, 2.0 - 4.9, 1e-12, None);
    assert_eq!(state.velocity_at(0.0, -9.8), state.initial_velocity);
}

#[test]
fn test_mode_toggles() {
    assert_eq!(SimulationMode::Analytical.toggled(), SimulationMode::Numerical);
    assert_eq!(SimulationMode::Numerical.toggled(), SimulationMode::Analytical);
    assert_eq!(RenderMode::Cartesian.toggled(), RenderMode::Parametric);
    assert_eq!(RenderMode::Parametric.toggled(), RenderMode::Cartesian);
    assert_eq!(SimulationMode::default(), SimulationMode::Numerical);
    assert_eq!(RenderMode::default(), RenderMode::Cartesian);
    assert_eq!(RunState::default(), RunState::Paused);
    assert!(RunState::Running.is_running());
    assert!(!RunState::Grounded.is_running());
}

#[test]
fn test_segment_count_doubles() {
    let mut segments = SegmentCount::new(8, 4, 64).unwrap();
    assert!(segments.double());
    assert_eq!(segments.get(), 16);
}

#[test]
fn test_segment_count_halving_is_floored() {
    let mut segments = SegmentCount::new(4, 4, 64).unwrap();
    assert!(!segments.halve());
    assert_eq!(segments.get(), 4);

    let mut segments = SegmentCount::new(6, 4, 64).unwrap();
    assert!(segments.halve());
    assert_eq!(segments.get(), 4);

    let mut segments = SegmentCount::new(64, 4, 64).unwrap();
    assert!(segments.halve());
    assert_eq!(segments.get(), 32);
}

#[test]
fn test_segment_count_rejects_out_of_range() {
    assert_eq!(
        SegmentCount::new(3, 4, 64),
        Err(ProjectileError::InvalidSegmentCount { requested: 3, minimum: 4 })
    );
    assert!(SegmentCount::new(3, 0, 64).is_err());
    assert_eq!(
        SegmentCount::new(65, 4, 64),
        Err(ProjectileError::SegmentCountTooLarge { requested: 65, maximum: 64 })
    );
}

#[test]
fn test_segment_count_clamped() {
    let segments = SegmentCount::clamped(1, 4, 64);
    assert_eq!(segments.get(), 4);
    assert_eq!(segments.minimum(), 4);
    assert_eq!(SegmentCount::clamped(12, 4, 64).get(), 12);
    assert_eq!(SegmentCount::clamped(100, 4, 64).get(), 64);
    assert_eq!(SegmentCount::clamped(0, 0, 0).get(), 1);
}

#[test]
fn test_segment_count_doubling_is_capped() {
    let mut segments = SegmentCount::new(48, 4, 64).unwrap();
    assert!(segments.double());
    assert_eq!(segments.get(), 64);
    assert!(!segments.double());
    assert_eq!(segments.get(), 64);

    let mut segments = SegmentCount::new(usize::MAX / 2 + 1, 4, usize::MAX).unwrap();
    assert!(segments.double());
    assert_eq!(segments.get(), usize::MAX);
    assert!(!segments.double());
}
