//! Scan conversion of 2-D primitives.
//!
//! Converts continuous primitives into the discrete pixel coordinates that
//! approximate them.
//!
//! # Algorithms
//!
//! - **Naive / DDA / Bresenham lines**: per-column slope evaluation, floating
//!   point accumulation, and the integer midpoint decision variable
//! - **Polygon outlines**: one line per edge, closing edge first
//! - **Midpoint ellipse**: two-region decision variable walk with four-way
//!   symmetry
//! - **Bézier / uniform cubic B-spline curves**: 101 samples per curve segment
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Foley, J. D., et al. (1990). *Computer Graphics: Principles and Practice*, ch. 3.

mod curve;
mod ellipse;
mod line;
mod polygon;
mod primitives;

pub use curve::{draw_curve, CurveAlgorithm, SAMPLES_PER_SEGMENT};
pub use ellipse::draw_ellipse;
pub use line::{draw_line, LineAlgorithm};
pub use polygon::draw_polygon;
pub use primitives::{Drawable, Primitive, PrimitiveKind};
