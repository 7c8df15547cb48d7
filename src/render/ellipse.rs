//! Midpoint ellipse scan conversion.
//!
//! The algorithm walks the first quadrant of an axis-aligned ellipse centred
//! at the origin in two regions:
//!
//! - **Region 1** (slope magnitude at most 1): `x` advances every step and
//!   `y` drops when the midpoint falls outside the ellipse.
//! - **Region 2**: `y` drops every step and `x` advances when the midpoint
//!   falls inside.
//!
//! Each quadrant offset is mirrored into the other three quadrants around the
//! centre of the bounding box.

use crate::geometry::{Pixel, Point};

/// Rasterize the axis-aligned ellipse inscribed in the box spanned by two
/// opposite corners.
///
/// The centre is the midpoint of the corners and may be fractional, so the
/// returned points are not rounded; round them (see [`Point::round`]) before
/// addressing pixels. Mirror images that coincide (offsets on an axis) are
/// emitted once.
#[must_use]
pub fn draw_ellipse(corner0: Pixel, corner1: Pixel) -> Vec<Point> {
    let (c0, c1) = (corner0.to_point(), corner1.to_point());
    let a = (c1.x - c0.x).abs() / 2.0;
    let b = (c0.y - c1.y).abs() / 2.0;
    let center = Point::new((c0.x + c1.x) / 2.0, (c0.y + c1.y) / 2.0);

    if a == 0.0 && b == 0.0 {
        return vec![center];
    }

    let a2 = a * a;
    let b2 = b * b;
    let mut points = Vec::new();

    let mut x = 0.0_f64;
    let mut y = b;

    // Region 1
    let mut p1 = b2 * (x + 1.0).powi(2) + a2 * (y - 0.5).powi(2) - a2 * b2;
    while b2 * x <= a2 * y {
        push_mirrored(&mut points, center, x, y);
        if p1 >= 0.0 {
            p1 += 2.0 * b2 * x - 2.0 * a2 * y + 2.0 * a2 + 3.0 * b2;
            y -= 1.0;
        } else {
            p1 += 2.0 * b2 * x + 3.0 * b2;
        }
        x += 1.0;
    }

    // Region 2
    let mut p2 = b2 * (x + 0.5).powi(2) + a2 * (y - 1.0).powi(2) - a2 * b2;
    while y >= 0.0 {
        push_mirrored(&mut points, center, x, y);
        if p2 >= 0.0 {
            p2 += -2.0 * a2 * y + 3.0 * a2;
        } else {
            p2 += 2.0 * b2 * x - 2.0 * a2 * y + 2.0 * b2 + 3.0 * a2;
            x += 1.0;
        }
        y -= 1.0;
    }

    points
}

/// Push `(xc ± x, yc ± y)`, skipping mirrors that land on the same point.
fn push_mirrored(points: &mut Vec<Point>, center: Point, x: f64, y: f64) {
    points.push(Point::new(center.x + x, center.y + y));
    if y != 0.0 {
        points.push(Point::new(center.x + x, center.y - y));
    }
    if x != 0.0 {
        points.push(Point::new(center.x - x, center.y + y));
        if y != 0.0 {
            points.push(Point::new(center.x - x, center.y - y));
        }
    }
}
