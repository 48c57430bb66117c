use std::f64::consts::FRAC_PI_2;
use log::debug;
use crate::models::{ProjectileState, Vec2};

/// Start of the decorative parametric path.
pub const PARAMETRIC_PARABOLA_ORIGIN: Vec2 = Vec2::new(2.0, 4.0);

/// Launch angles swept by the cartesian parabola, in radians.
pub const PARABOLA_SWEEP_START: f64 = -1.0;
pub const PARABOLA_SWEEP_END: f64 = 1.0;

/// Below this the vertical speed is treated as zero.
const MIN_VERTICAL_SPEED: f64 = 1e-12;

/// Index driven placeholder path: `(2 + i, 4 + i)` for `i` in `0..=segments`.
///
/// This is a schematic stand-in, it does not follow the ballistic equation.
/// # Example
/// ```
/// use projectile_motion::curves::parametric_parabola;
/// use projectile_motion::models::Vec2;
///
/// let points = parametric_parabola(4);
/// assert_eq!(points.len(), 5);
/// assert_eq!(points[0], Vec2::new(2.0, 4.0));
/// assert_eq!(points[4], Vec2::new(6.0, 8.0));
/// ```
pub fn parametric_parabola(segments: usize) -> Vec<Vec2> {
    (0..=segments)
        .map(|i| {
            let step = i as f64;
            Vec2::new(PARAMETRIC_PARABOLA_ORIGIN.x + step, PARAMETRIC_PARABOLA_ORIGIN.y + step)
        })
        .collect()
}

/// Range-equation parabola built from the current vertical speed.
///
/// For each swept angle `θ`:
/// `x = sin²θ · v_y² / g` and `y = tanθ · x − g / (2 v_y² cos²θ) · x²`.
///
/// A zero vertical speed or zero gravity has no arc to draw, so the current
/// position is returned on its own. Samples that overflow are dropped.
pub fn cartesian_parabola(state: &ProjectileState, gravity: f64, segments: usize) -> Vec<Vec2> {
    let v_y = state.velocity.y;
    if segments == 0 || v_y.abs() < MIN_VERTICAL_SPEED || gravity == 0.0 {
        debug!("Degenerate parabola (v_y = {}, g = {}), emitting projectile position only", v_y, gravity);
        return vec![state.position];
    }

    let v_y_sq = v_y * v_y;
    let step_size = (PARABOLA_SWEEP_END - PARABOLA_SWEEP_START) / segments as f64;

    let points: Vec<Vec2> = (0..=segments)
        .map(|i| PARABOLA_SWEEP_START + step_size * i as f64)
        .filter(|angle| angle.abs() < FRAC_PI_2)
        .map(|angle| {
            let (sin, cos) = angle.sin_cos();
            let x = sin * sin * v_y_sq / gravity;
            let y = angle.tan() * x - gravity / (2.0 * v_y_sq * cos * cos) * x * x;
            Vec2::new(x, y)
        })
        .filter(Vec2::is_finite)
        .collect();

    if points.is_empty() {
        debug!("Parabola samples were all non-finite (v_y = {})", v_y);
        return vec![state.position];
    }
    points
}
