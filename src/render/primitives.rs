//! Stored primitives and their rendering onto a framebuffer.

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use crate::geometry::Pixel;
use crate::render::curve::{draw_curve, CurveAlgorithm};
use crate::render::ellipse::draw_ellipse;
use crate::render::line::{draw_line, LineAlgorithm};
use crate::render::polygon::draw_polygon;

/// Trait for drawable primitives.
pub trait Drawable {
    /// Scan-convert this primitive into canvas pixels (y axis pointing up).
    fn pixels(&self) -> Vec<Pixel>;

    /// Draw this primitive to a framebuffer.
    ///
    /// Canvas row `0` is the bottom of the image, so `y` is flipped to
    /// framebuffer row `height - 1 - y`. Pixels off the canvas are skipped.
    fn draw(&self, fb: &mut Framebuffer, color: Rgba) {
        let width = i64::from(fb.width());
        let height = i64::from(fb.height());
        for p in self.pixels() {
            let (x, row) = (i64::from(p.x), height - 1 - i64::from(p.y));
            if (0..width).contains(&x) && (0..height).contains(&row) {
                fb.set_pixel(x as u32, row as u32, color);
            }
        }
    }
}

/// The kind of a primitive together with the algorithm that rasterizes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    /// Segment between two endpoints.
    Line(LineAlgorithm),
    /// Closed outline through its vertices.
    Polygon(LineAlgorithm),
    /// Axis-aligned ellipse inside the box of two corners.
    Ellipse,
    /// Parametric curve over its control points.
    Curve(CurveAlgorithm),
}

impl PrimitiveKind {
    /// Short lowercase name of the kind.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Line(_) => "line",
            Self::Polygon(_) => "polygon",
            Self::Ellipse => "ellipse",
            Self::Curve(_) => "curve",
        }
    }
}

/// A primitive described by its kind and control points.
///
/// Control points are what transforms edit; pixels are recomputed from them
/// on every draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Primitive {
    /// Kind and rasterization algorithm.
    pub kind: PrimitiveKind,
    /// Endpoints, vertices, box corners or control points.
    pub points: Vec<Pixel>,
}

impl Primitive {
    /// Create a new primitive.
    #[must_use]
    pub fn new(kind: PrimitiveKind, points: Vec<Pixel>) -> Self {
        Self { kind, points }
    }
}

impl Drawable for Primitive {
    fn pixels(&self) -> Vec<Pixel> {
        match (self.kind, self.points.as_slice()) {
            (PrimitiveKind::Line(algorithm), &[p0, p1]) => draw_line(p0, p1, algorithm),
            (PrimitiveKind::Line(_), _) => Vec::new(),
            (PrimitiveKind::Polygon(algorithm), vertices) => draw_polygon(vertices, algorithm),
            (PrimitiveKind::Ellipse, &[c0, c1]) => draw_ellipse(c0, c1)
                .into_iter()
                .map(|p| p.round())
                .collect(),
            (PrimitiveKind::Ellipse, _) => Vec::new(),
            (PrimitiveKind::Curve(algorithm), controls) => draw_curve(controls, algorithm),
        }
    }
}
