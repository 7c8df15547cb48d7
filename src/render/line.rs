//! Line scan conversion.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::geometry::{round_coord, Pixel};

/// Scan-conversion algorithm for line segments and polygon edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineAlgorithm {
    /// Slope evaluation per column with truncation toward zero.
    Naive,
    /// Digital differential analyzer with per-step rounding.
    Dda,
    /// Integer midpoint algorithm.
    Bresenham,
}

impl FromStr for LineAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Naive" => Ok(Self::Naive),
            "DDA" => Ok(Self::Dda),
            "Bresenham" => Ok(Self::Bresenham),
            _ => Err(Error::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for LineAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Naive => "Naive",
            Self::Dda => "DDA",
            Self::Bresenham => "Bresenham",
        })
    }
}

/// Rasterize the segment `p0`-`p1`.
///
/// Axis-aligned segments are emitted directly as a run from the smaller to
/// the larger coordinate. Otherwise the pixels come out in the direction the
/// algorithm iterates, which is not necessarily `p0` first.
///
/// # Example
///
/// ```
/// use rasterkit::geometry::Pixel;
/// use rasterkit::render::{draw_line, LineAlgorithm};
///
/// let pixels = draw_line(Pixel::new(0, 0), Pixel::new(5, 2), LineAlgorithm::Bresenham);
/// assert_eq!(pixels.len(), 6);
/// assert_eq!(pixels[2], Pixel::new(2, 1));
/// ```
#[must_use]
pub fn draw_line(p0: Pixel, p1: Pixel, algorithm: LineAlgorithm) -> Vec<Pixel> {
    if p0.x == p1.x {
        return vertical_run(p0.x, p0.y, p1.y);
    }
    match algorithm {
        LineAlgorithm::Naive => naive(p0, p1),
        LineAlgorithm::Dda if p0.y == p1.y => horizontal_run(p0.y, p0.x, p1.x),
        LineAlgorithm::Dda => dda(p0, p1),
        LineAlgorithm::Bresenham if p0.y == p1.y => horizontal_run(p0.y, p0.x, p1.x),
        LineAlgorithm::Bresenham => bresenham(p0, p1),
    }
}

fn vertical_run(x: i32, y0: i32, y1: i32) -> Vec<Pixel> {
    (y0.min(y1)..=y0.max(y1)).map(|y| Pixel::new(x, y)).collect()
}

fn horizontal_run(y: i32, x0: i32, x1: i32) -> Vec<Pixel> {
    (x0.min(x1)..=x0.max(x1)).map(|x| Pixel::new(x, y)).collect()
}

/// Slope of a non-vertical segment, taken in `f64` so that endpoints at the
/// ends of the `i32` range cannot overflow.
#[inline]
fn slope(p0: Pixel, p1: Pixel) -> f64 {
    (f64::from(p1.y) - f64::from(p0.y)) / (f64::from(p1.x) - f64::from(p0.x))
}

/// Orders the endpoints so that `x` increases.
#[inline]
fn x_ascending(p0: Pixel, p1: Pixel) -> (Pixel, Pixel) {
    if p0.x > p1.x {
        (p1, p0)
    } else {
        (p0, p1)
    }
}

// ============================================================================
// Naive
// ============================================================================

fn naive(p0: Pixel, p1: Pixel) -> Vec<Pixel> {
    let (p0, p1) = x_ascending(p0, p1);
    let k = slope(p0, p1);

    (p0.x..=p1.x)
        .map(|x| {
            // Truncation, unlike DDA and Bresenham which round.
            let y = (f64::from(p0.y) + k * (f64::from(x) - f64::from(p0.x))).trunc() as i32;
            Pixel::new(x, y)
        })
        .collect()
}

// ============================================================================
// DDA
// ============================================================================

fn dda(p0: Pixel, p1: Pixel) -> Vec<Pixel> {
    let k = slope(p0, p1);

    if k.abs() <= 1.0 {
        let (p0, p1) = x_ascending(p0, p1);
        let mut yi = f64::from(p0.y);
        (p0.x..=p1.x)
            .map(|x| {
                let pixel = Pixel::new(x, round_coord(yi));
                yi += k;
                pixel
            })
            .collect()
    } else {
        let (p0, p1) = if p0.y > p1.y { (p1, p0) } else { (p0, p1) };
        let step = 1.0 / k;
        let mut xi = f64::from(p0.x);
        (p0.y..=p1.y)
            .map(|y| {
                let pixel = Pixel::new(round_coord(xi), y);
                xi += step;
                pixel
            })
            .collect()
    }
}

// ============================================================================
// Bresenham
// ============================================================================

fn bresenham(p0: Pixel, p1: Pixel) -> Vec<Pixel> {
    // i64: spans and the decision variable exceed i32 for far-apart endpoints.
    let mut dx = (i64::from(p1.x) - i64::from(p0.x)).abs();
    let mut dy = (i64::from(p1.y) - i64::from(p0.y)).abs();

    // Steep lines iterate over y: run the algorithm on the transposed
    // segment and transpose each pixel back on output.
    let steep = dy > dx;
    let (p0, p1) = if steep {
        std::mem::swap(&mut dx, &mut dy);
        (p0.transposed(), p1.transposed())
    } else {
        (p0, p1)
    };
    let (p0, p1) = x_ascending(p0, p1);

    let s = if p0.y < p1.y { 1 } else { -1 };
    let mut p = 2 * dy - dx;
    let mut y = p0.y;
    let mut pixels = Vec::with_capacity(usize::try_from(dx + 1).unwrap_or(0));

    for x in p0.x..=p1.x {
        let pixel = Pixel::new(x, y);
        pixels.push(if steep { pixel.transposed() } else { pixel });

        if p > 0 {
            p += 2 * dy - 2 * dx;
            y += s;
        } else {
            p += 2 * dy;
        }
    }

    pixels
}
