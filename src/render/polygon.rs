//! Polygon outline scan conversion.

use crate::geometry::Pixel;
use crate::render::line::{draw_line, LineAlgorithm};

/// Rasterize the closed outline through `vertices`.
///
/// Edges are visited starting with the closing edge (last vertex to the
/// first), then `0 -> 1`, `1 -> 2`, and so on. Each edge is rasterized on its
/// own, so a vertex shared by two edges appears once per edge.
#[must_use]
pub fn draw_polygon(vertices: &[Pixel], algorithm: LineAlgorithm) -> Vec<Pixel> {
    let Some(&last) = vertices.last() else {
        return Vec::new();
    };

    let mut pixels = Vec::new();
    let mut prev = last;
    for &vertex in vertices {
        pixels.extend(draw_line(prev, vertex, algorithm));
        prev = vertex;
    }
    pixels
}
