//! Parametric curve sampling.
//!
//! Both curve types are sampled at 101 uniformly spaced parameter values
//! `u = v / 100` and each sample is rounded to a pixel, which yields a dense
//! polyline approximation of the curve.
//!
//! # References
//!
//! - de Casteljau, P. (1959). Recursive subdivision of Bézier curves.
//! - de Boor, C. (1978). *A Practical Guide to Splines*. Springer.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::geometry::{Pixel, Point};

/// Samples taken per curve (or per B-spline segment).
pub const SAMPLES_PER_SEGMENT: usize = 101;

/// Curve type selected for a set of control points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveAlgorithm {
    /// Bézier curve of degree `controls - 1`.
    Bezier,
    /// Uniform cubic B-spline.
    BSpline,
}

impl FromStr for CurveAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Bezier" => Ok(Self::Bezier),
            "B-spline" => Ok(Self::BSpline),
            _ => Err(Error::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for CurveAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Bezier => "Bezier",
            Self::BSpline => "B-spline",
        })
    }
}

/// Sample the curve defined by `controls`.
#[must_use]
pub fn draw_curve(controls: &[Pixel], algorithm: CurveAlgorithm) -> Vec<Pixel> {
    match algorithm {
        CurveAlgorithm::Bezier => bezier(controls),
        CurveAlgorithm::BSpline => b_spline(controls),
    }
}

#[inline]
fn parameters() -> impl Iterator<Item = f64> {
    (0..SAMPLES_PER_SEGMENT).map(|v| v as f64 / (SAMPLES_PER_SEGMENT - 1) as f64)
}

// ============================================================================
// Bézier (de Casteljau)
// ============================================================================

/// Triangular de Casteljau table stored in a square `(n + 1) x (n + 1)`
/// buffer; row `r` holds the `n + 1 - r` points of blending level `r`.
struct CasteljauTable {
    side: usize,
    cells: Vec<Point>,
}

impl CasteljauTable {
    fn new(controls: &[Pixel]) -> Self {
        let side = controls.len();
        let mut cells = vec![Point::ORIGIN; side * side];
        for (cell, &control) in cells.iter_mut().zip(controls) {
            *cell = control.to_point();
        }
        Self { side, cells }
    }

    #[inline]
    fn at(&self, r: usize, i: usize) -> Point {
        self.cells[r * self.side + i]
    }

    /// Blend every level for parameter `u` and return the point on the curve.
    fn evaluate(&mut self, u: f64) -> Point {
        let n = self.side - 1;
        for r in 1..=n {
            for i in 0..=(n - r) {
                let blended = self.at(r - 1, i).lerp(self.at(r - 1, i + 1), u);
                self.cells[r * self.side + i] = blended;
            }
        }
        self.at(n, 0)
    }
}

fn bezier(controls: &[Pixel]) -> Vec<Pixel> {
    if controls.is_empty() {
        return Vec::new();
    }

    let mut table = CasteljauTable::new(controls);
    parameters().map(|u| table.evaluate(u).round()).collect()
}

// ============================================================================
// Uniform cubic B-spline
// ============================================================================

/// Uniform cubic B-spline basis at `u`, already divided by 6.
#[inline]
fn b_spline_basis(u: f64) -> [f64; 4] {
    let u2 = u * u;
    let u3 = u2 * u;
    [
        (-u3 + 3.0 * u2 - 3.0 * u + 1.0) / 6.0,
        (3.0 * u3 - 6.0 * u2 + 4.0) / 6.0,
        (-3.0 * u3 + 3.0 * u2 + 3.0 * u + 1.0) / 6.0,
        u3 / 6.0,
    ]
}

fn b_spline(controls: &[Pixel]) -> Vec<Pixel> {
    // Each segment is governed by four consecutive control points.
    let segments = controls.windows(4);
    let mut pixels = Vec::with_capacity(segments.len() * SAMPLES_PER_SEGMENT);

    for window in segments {
        for u in parameters() {
            let weights = b_spline_basis(u);
            let (x, y) = weights
                .iter()
                .zip(window)
                .fold((0.0, 0.0), |(x, y), (w, p)| {
                    (x + w * f64::from(p.x), y + w * f64::from(p.y))
                });
            pixels.push(Point::new(x, y).round());
        }
    }

    pixels
}
