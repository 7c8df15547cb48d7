//! Affine transforms of control points.
//!
//! Each transform maps a point list to a new one of the same length and
//! order. Results are rounded back onto the integer grid, so repeated
//! transforms accumulate rounding. Coordinates that leave the `i32` range
//! saturate at its ends.

use crate::geometry::{round_coord, Pixel};

/// Shift every point by `(dx, dy)`.
///
/// Coordinates saturate at the ends of the `i32` range.
#[must_use]
pub fn translate(points: &[Pixel], dx: i32, dy: i32) -> Vec<Pixel> {
    points
        .iter()
        .map(|p| Pixel::new(p.x.saturating_add(dx), p.y.saturating_add(dy)))
        .collect()
}

/// Rotate every point about `(cx, cy)` by `degrees`.
///
/// Applies
///
/// ```text
/// x' = cx + (x - cx) cos θ - (y - cy) sin θ
/// y' = cy + (x - cx) sin θ + (y - cy) cos θ
/// ```
///
/// which is clockwise on a canvas whose y axis points down. The formula is
/// kept as is regardless of how a caller orients its y axis.
#[must_use]
pub fn rotate(points: &[Pixel], cx: i32, cy: i32, degrees: f64) -> Vec<Pixel> {
    let (sin, cos) = degrees.to_radians().sin_cos();
    let (cx_f, cy_f) = (f64::from(cx), f64::from(cy));

    points
        .iter()
        .map(|p| {
            let dx = f64::from(p.x) - cx_f;
            let dy = f64::from(p.y) - cy_f;
            Pixel::new(
                round_coord(cx_f + dx * cos - dy * sin),
                round_coord(cy_f + dx * sin + dy * cos),
            )
        })
        .collect()
}

/// Scale every point about `(cx, cy)` by `factor`.
#[must_use]
pub fn scale(points: &[Pixel], cx: i32, cy: i32, factor: f64) -> Vec<Pixel> {
    let (cx_f, cy_f) = (f64::from(cx), f64::from(cy));

    points
        .iter()
        .map(|p| {
            Pixel::new(
                round_coord(cx_f + (f64::from(p.x) - cx_f) * factor),
                round_coord(cy_f + (f64::from(p.y) - cy_f) * factor),
            )
        })
        .collect()
}
