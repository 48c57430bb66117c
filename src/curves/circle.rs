use std::f64::consts::TAU;
use crate::models::Vec2;

/// Closed polygon around `center` from `cos`/`sin` sampling.
///
/// Returns `segments + 1` points, the last one repeating the first.
/// # Example
/// ```
/// use projectile_motion::curves::parametric_circle;
/// use projectile_motion::models::Vec2;
///
/// let points = parametric_circle(Vec2::new(1.0, 1.0), 0.1, 8);
/// assert_eq!(points.len(), 9);
/// assert!((points[0].x - 1.1).abs() < 1e-12);
/// assert!(points[0].distance(points[8]) < 1e-12);
/// ```
pub fn parametric_circle(center: Vec2, radius: f64, segments: usize) -> Vec<Vec2> {
    if segments == 0 {
        return vec![center];
    }

    (0..=segments)
        .map(|i| {
            let angle = i as f64 / segments as f64 * TAU;
            center + Vec2::new(angle.cos(), angle.sin()) * radius
        })
        .collect()
}

/// Closed polygon around `center` from the implicit equation `(x-a)² + (y-b)² = r²`.
///
/// `y` starts at the top of the circle and moves in steps of `r / (segments / 4)`.
/// The right half is walked downwards, an odd segment count adds one more
/// right-hand point at the bottom of the walk, then the left half is walked back
/// up to the top. Returns `segments + 1` points with the first and last at the top.
///
/// The height is derived from an integer level rather than accumulated, so the
/// top and bottom of the walk land exactly on `b ± r`.
pub fn cartesian_circle(center: Vec2, radius: f64, segments: usize) -> Vec<Vec2> {
    if segments == 0 {
        return vec![center];
    }

    let half = segments / 2;
    let mut points = Vec::with_capacity(segments + 1);
    let mut level: usize = 0;

    for i in 0..=segments {
        let dy = radius * (1.0 - 4.0 * level as f64 / segments as f64);
        let y = center.y + dy;
        if i < half {
            points.push(Vec2::new(center.x + half_chord(radius, dy), y));
            level += 1;
        } else if 2 * i + 1 == segments {
            points.push(Vec2::new(center.x + half_chord(radius, dy), y));
        } else {
            points.push(Vec2::new(center.x - half_chord(radius, dy), y));
            level = level.saturating_sub(1);
        }
    }
    points
}

/// Horizontal distance from the vertical diameter to the circle at height offset `dy`.
/// Rounding can leave `|dy|` a hair above `radius`, so the radicand is clamped at zero.
fn half_chord(radius: f64, dy: f64) -> f64 {
    (radius * radius - dy * dy).max(0.0).sqrt()
}
