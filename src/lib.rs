//! # Rasterkit
//!
//! Scan conversion, affine transforms and line clipping for 2-D primitives.
//!
//! Rasterkit turns line segments, polygons, ellipses and parametric curves
//! into the discrete pixel coordinates that approximate them, using the
//! classic incremental algorithms with their exact tie-breaking behavior.
//!
//! ## Features
//!
//! - **Lines**: Naive, DDA and Bresenham scan conversion
//! - **Polygons**: closed outlines built from line edges
//! - **Ellipses**: midpoint algorithm with four-way symmetry
//! - **Curves**: Bézier (de Casteljau) and uniform cubic B-spline sampling
//! - **Transforms**: translate, rotate and scale about a pivot
//! - **Clipping**: Cohen-Sutherland and Liang-Barsky against a window
//! - **Scripts**: a line-oriented command language that renders to BMP/PNG
//!
//! ## Quick Start
//!
//! ```rust
//! use rasterkit::prelude::*;
//!
//! let pixels = draw_line(Pixel::new(0, 0), Pixel::new(5, 2), LineAlgorithm::Bresenham);
//! assert_eq!(pixels.first(), Some(&Pixel::new(0, 0)));
//! assert_eq!(pixels.last(), Some(&Pixel::new(5, 2)));
//!
//! let window = ClipWindow::new(0, 0, 10, 10);
//! let visible = clip(Pixel::new(-5, -5), Pixel::new(15, 15), &window, ClipAlgorithm::CohenSutherland);
//! assert_eq!(visible, vec![Pixel::new(0, 0), Pixel::new(10, 10)]);
//! ```
//!
//! ## Rounding
//!
//! Every fractional result is rounded half to even (see
//! [`geometry::round_coord`]), so `2.5` becomes `2` and `3.5` becomes `4`.
//!
//! ## Academic References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Liang, Y.-D., & Barsky, B. A. (1984). "A new concept and method for line clipping."
//!   *ACM Transactions on Graphics*, 3(1), 1-22.
//! - Foley, J. D., et al. (1990). *Computer Graphics: Principles and Practice*.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Pen and background colors.
pub mod color;

/// Core framebuffer for pixel rendering.
pub mod framebuffer;

/// Pixels, fractional points and clip windows.
pub mod geometry;

// ============================================================================
// Algorithm Modules
// ============================================================================

/// Scan conversion of lines, polygons, ellipses and curves.
pub mod render;

/// Affine transforms of control points.
pub mod transform;

/// Line clipping against a rectangular window.
pub mod clip;

// ============================================================================
// Output and Scripting
// ============================================================================

/// Output encoders (BMP, PNG).
pub mod output;

/// Text command interface for batch drawing.
pub mod script;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for rasterkit operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust
/// use rasterkit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::clip::{clip, ClipAlgorithm};
    pub use crate::color::Rgba;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{ClipWindow, Pixel, Point};
    pub use crate::output::OutputFormat;
    pub use crate::render::{
        draw_curve, draw_ellipse, draw_line, draw_polygon, CurveAlgorithm, Drawable,
        LineAlgorithm, Primitive, PrimitiveKind,
    };
    pub use crate::script::{Session, SessionConfig};
    pub use crate::transform::{rotate, scale, translate};
}
