//! Mode dispatch for the curve strategies.
//!
//! Each [`RenderMode`] maps to a [`CurveGenerator`] producing both the
//! trajectory parabola and the marker circle. The free functions read the
//! state they are given every time, nothing is cached between frames.
use crate::curves::{cartesian_circle, cartesian_parabola, parametric_circle, parametric_parabola};
use crate::models::{ProjectileState, RenderMode, Vec2};
use crate::utils::ProjectileConstants;

pub trait CurveGenerator {
    fn mode(&self) -> RenderMode;

    fn parabola(&self, state: &ProjectileState, constants: &ProjectileConstants, segments: usize) -> Vec<Vec2>;

    fn circle(&self, center: Vec2, radius: f64, segments: usize) -> Vec<Vec2>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ParametricCurves;

#[derive(Debug, Clone, Copy, Default)]
pub struct CartesianCurves;

impl CurveGenerator for ParametricCurves {
    fn mode(&self) -> RenderMode {
        RenderMode::Parametric
    }

    fn parabola(&self, _state: &ProjectileState, _constants: &ProjectileConstants, segments: usize) -> Vec<Vec2> {
        parametric_parabola(segments)
    }

    fn circle(&self, center: Vec2, radius: f64, segments: usize) -> Vec<Vec2> {
        parametric_circle(center, radius, segments)
    }
}

impl CurveGenerator for CartesianCurves {
    fn mode(&self) -> RenderMode {
        RenderMode::Cartesian
    }

    fn parabola(&self, state: &ProjectileState, constants: &ProjectileConstants, segments: usize) -> Vec<Vec2> {
        cartesian_parabola(state, constants.gravity, segments)
    }

    fn circle(&self, center: Vec2, radius: f64, segments: usize) -> Vec<Vec2> {
        cartesian_circle(center, radius, segments)
    }
}

impl RenderMode {
    pub fn generator(self) -> &'static dyn CurveGenerator {
        match self {
            RenderMode::Parametric => &ParametricCurves,
            RenderMode::Cartesian => &CartesianCurves,
        }
    }
}

/// Trajectory curve for the current state.
pub fn generate_parabola(state: &ProjectileState, mode: RenderMode, segments: usize, constants: &ProjectileConstants) -> Vec<Vec2> {
    mode.generator().parabola(state, constants, segments)
}

/// Marker circle centred on the current position.
/// # Example
/// ```
/// use projectile_motion::curves::generate_circle;
/// use projectile_motion::models::{ProjectileState, RenderMode};
/// use projectile_motion::utils::ProjectileConstants;
///
/// let constants = ProjectileConstants::default();
/// let state = ProjectileState::default();
/// for mode in [RenderMode::Parametric, RenderMode::Cartesian] {
///     let points = generate_circle(&state, mode, 8, &constants);
///     assert_eq!(points.len(), 9);
/// }
/// ```
pub fn generate_circle(state: &ProjectileState, mode: RenderMode, segments: usize, constants: &ProjectileConstants) -> Vec<Vec2> {
    mode.generator().circle(state.position, constants.marker_radius, segments)
}
