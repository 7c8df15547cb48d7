//! Line clipping against a rectangular window.
//!
//! Both algorithms return either nothing (segment fully outside) or the two
//! endpoints of the visible part, rounded to pixels, in the direction of the
//! input segment.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::geometry::{ClipWindow, Pixel, Point};

/// Line clipping algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClipAlgorithm {
    /// Outcode based iterative clipping.
    CohenSutherland,
    /// Parametric interval clipping.
    LiangBarsky,
}

impl FromStr for ClipAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Cohen-Sutherland" => Ok(Self::CohenSutherland),
            "Liang-Barsky" => Ok(Self::LiangBarsky),
            _ => Err(Error::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for ClipAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::CohenSutherland => "Cohen-Sutherland",
            Self::LiangBarsky => "Liang-Barsky",
        })
    }
}

/// Clip the segment `p0`-`p1` to `window`.
///
/// Returns an empty vector when the segment misses the window, otherwise
/// exactly two pixels.
///
/// # Example
///
/// ```
/// use rasterkit::clip::{clip, ClipAlgorithm};
/// use rasterkit::geometry::{ClipWindow, Pixel};
///
/// let window = ClipWindow::new(0, 0, 10, 10);
/// let clipped = clip(Pixel::new(-5, 5), Pixel::new(15, 5), &window, ClipAlgorithm::LiangBarsky);
/// assert_eq!(clipped, vec![Pixel::new(0, 5), Pixel::new(10, 5)]);
/// ```
#[must_use]
pub fn clip(p0: Pixel, p1: Pixel, window: &ClipWindow, algorithm: ClipAlgorithm) -> Vec<Pixel> {
    match algorithm {
        ClipAlgorithm::CohenSutherland => cohen_sutherland(p0, p1, window),
        ClipAlgorithm::LiangBarsky => liang_barsky(p0, p1, window),
    }
}

// ============================================================================
// Cohen-Sutherland
// ============================================================================

const OUT_TOP: u8 = 0b1000;
const OUT_BOTTOM: u8 = 0b0100;
const OUT_RIGHT: u8 = 0b0010;
const OUT_LEFT: u8 = 0b0001;

/// Cohen-Sutherland outcode of `p` against `window`.
///
/// ```text
///  1001 | 1000 | 1010
/// ------+------+------ y_max
///  0001 | 0000 | 0010
/// ------+------+------ y_min
///  0101 | 0100 | 0110
///     x_min  x_max
/// ```
#[inline]
fn outcode(p: Point, window: &ClipWindow) -> u8 {
    let mut code = 0;
    if p.y > f64::from(window.y_max()) {
        code |= OUT_TOP;
    } else if p.y < f64::from(window.y_min()) {
        code |= OUT_BOTTOM;
    }
    if p.x > f64::from(window.x_max()) {
        code |= OUT_RIGHT;
    } else if p.x < f64::from(window.x_min()) {
        code |= OUT_LEFT;
    }
    code
}

/// Move `p` along the segment towards `other` onto the first boundary set in
/// `code`, in priority order top, bottom, right, left.
fn clip_to_boundary(p: Point, other: Point, code: u8, window: &ClipWindow) -> Point {
    // The boundary-crossing axis always differs between the endpoints here:
    // a shared outside bit would have been trivially rejected.
    if code & OUT_TOP != 0 {
        let y = f64::from(window.y_max());
        Point::new(p.x + (y - p.y) * (other.x - p.x) / (other.y - p.y), y)
    } else if code & OUT_BOTTOM != 0 {
        let y = f64::from(window.y_min());
        Point::new(p.x + (y - p.y) * (other.x - p.x) / (other.y - p.y), y)
    } else if code & OUT_RIGHT != 0 {
        let x = f64::from(window.x_max());
        Point::new(x, p.y + (other.y - p.y) * (x - p.x) / (other.x - p.x))
    } else {
        let x = f64::from(window.x_min());
        Point::new(x, p.y + (other.y - p.y) * (x - p.x) / (other.x - p.x))
    }
}

fn cohen_sutherland(p0: Pixel, p1: Pixel, window: &ClipWindow) -> Vec<Pixel> {
    let mut a = p0.to_point();
    let mut b = p1.to_point();
    let mut code_a = outcode(a, window);
    let mut code_b = outcode(b, window);

    loop {
        if code_a & code_b != 0 {
            return Vec::new();
        }
        if code_a == 0 && code_b == 0 {
            return vec![a.round(), b.round()];
        }

        // Clip whichever endpoint is outside; `a` first.
        if code_a != 0 {
            a = clip_to_boundary(a, b, code_a, window);
            code_a = outcode(a, window);
        } else {
            b = clip_to_boundary(b, a, code_b, window);
            code_b = outcode(b, window);
        }
    }
}

// ============================================================================
// Liang-Barsky
// ============================================================================

fn liang_barsky(p0: Pixel, p1: Pixel, window: &ClipWindow) -> Vec<Pixel> {
    let (x1, y1) = (f64::from(p0.x), f64::from(p0.y));
    let dx = f64::from(p1.x) - x1;
    let dy = f64::from(p1.y) - y1;

    let p = [-dx, dx, -dy, dy];
    let q = [
        x1 - f64::from(window.x_min()),
        f64::from(window.x_max()) - x1,
        y1 - f64::from(window.y_min()),
        f64::from(window.y_max()) - y1,
    ];

    let mut u1 = 0.0_f64;
    let mut u2 = 1.0_f64;
    for (&pk, &qk) in p.iter().zip(&q) {
        if pk == 0.0 {
            // Parallel to this boundary: inside or entirely outside.
            if qk < 0.0 {
                return Vec::new();
            }
        } else if pk < 0.0 {
            u1 = u1.max(qk / pk);
        } else {
            u2 = u2.min(qk / pk);
        }
    }

    if u1 > u2 {
        return Vec::new();
    }

    let start = Point::new(x1 + u1 * dx, y1 + u1 * dy);
    let end = Point::new(x1 + u2 * dx, y1 + u2 * dy);
    vec![start.round(), end.round()]
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOTH: [ClipAlgorithm; 2] = [ClipAlgorithm::CohenSutherland, ClipAlgorithm::LiangBarsky];

    fn window() -> ClipWindow {
        ClipWindow::new(0, 0, 10, 10)
    }

    #[test]
    fn test_outcodes() {
        let w = window();
        assert_eq!(outcode(Point::new(5.0, 5.0), &w), 0);
        assert_eq!(outcode(Point::new(5.0, 11.0), &w), OUT_TOP);
        assert_eq!(outcode(Point::new(-1.0, -1.0), &w), OUT_BOTTOM | OUT_LEFT);
        assert_eq!(outcode(Point::new(11.0, 11.0), &w), OUT_TOP | OUT_RIGHT);
        assert_eq!(outcode(Point::new(10.0, 0.0), &w), 0);
    }

    #[test]
    fn test_inside_is_kept() {
        for algorithm in BOTH {
            let clipped = clip(Pixel::new(1, 2), Pixel::new(8, 9), &window(), algorithm);
            assert_eq!(clipped, vec![Pixel::new(1, 2), Pixel::new(8, 9)]);
        }
    }

    #[test]
    fn test_outside_is_rejected() {
        for algorithm in BOTH {
            // Same side
            assert!(clip(Pixel::new(-5, 1), Pixel::new(-1, 9), &window(), algorithm).is_empty());
            // Crosses the corner region without touching the window
            assert!(clip(Pixel::new(-5, 8), Pixel::new(5, 18), &window(), algorithm).is_empty());
        }
    }

    #[test]
    fn test_crossing_keeps_direction() {
        for algorithm in BOTH {
            let clipped = clip(Pixel::new(5, 5), Pixel::new(20, 5), &window(), algorithm);
            assert_eq!(clipped, vec![Pixel::new(5, 5), Pixel::new(10, 5)]);

            let clipped = clip(Pixel::new(20, 5), Pixel::new(5, 5), &window(), algorithm);
            assert_eq!(clipped, vec![Pixel::new(10, 5), Pixel::new(5, 5)]);
        }
    }

    #[test]
    fn test_diagonal_through_window() {
        for algorithm in BOTH {
            let clipped = clip(Pixel::new(-5, -5), Pixel::new(15, 15), &window(), algorithm);
            assert_eq!(clipped, vec![Pixel::new(0, 0), Pixel::new(10, 10)]);
        }
    }

    #[test]
    fn test_oblique_clip() {
        // y = x / 2 + 2: enters through the left edge at (0, 2), leaves
        // through the right edge at (10, 7).
        for algorithm in BOTH {
            let clipped = clip(Pixel::new(-4, 0), Pixel::new(16, 10), &window(), algorithm);
            assert_eq!(clipped, vec![Pixel::new(0, 2), Pixel::new(10, 7)]);
        }
    }

    #[test]
    fn test_inverted_window() {
        let inverted = ClipWindow::new(0, 10, 10, 0);
        for algorithm in BOTH {
            let clipped = clip(Pixel::new(5, -5), Pixel::new(5, 15), &inverted, algorithm);
            assert_eq!(clipped, vec![Pixel::new(5, 0), Pixel::new(5, 10)]);
        }
    }

    #[test]
    fn test_far_endpoints() {
        let p0 = Pixel::new(-2_000_000_000, 5);
        let p1 = Pixel::new(2_000_000_000, 5);
        for algorithm in BOTH {
            assert_eq!(
                clip(p0, p1, &window(), algorithm),
                vec![Pixel::new(0, 5), Pixel::new(10, 5)]
            );
            let full = ClipWindow::new(i32::MIN, i32::MIN, i32::MAX, i32::MAX);
            assert_eq!(clip(p0, p1, &full, algorithm), vec![p0, p1]);
        }
    }

    #[test]
    fn test_degenerate_segment() {
        for algorithm in BOTH {
            let inside = clip(Pixel::new(3, 3), Pixel::new(3, 3), &window(), algorithm);
            assert_eq!(inside, vec![Pixel::new(3, 3), Pixel::new(3, 3)]);
            assert!(clip(Pixel::new(30, 3), Pixel::new(30, 3), &window(), algorithm).is_empty());
        }
    }

    #[test]
    fn test_clip_tags() {
        assert_eq!(
            "Cohen-Sutherland".parse::<ClipAlgorithm>().unwrap(),
            ClipAlgorithm::CohenSutherland
        );
        assert_eq!(ClipAlgorithm::LiangBarsky.to_string(), "Liang-Barsky");
        assert!("Sutherland-Hodgman".parse::<ClipAlgorithm>().is_err());
    }
}
