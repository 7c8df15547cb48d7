//! Geometric primitives for rasterization.
//!
//! Provides the integer pixel coordinates that rasterizers consume and
//! emit, the fractional points used by intermediate results, and the
//! rectangular clip window.

/// Round a coordinate to the nearest integer, ties to even.
///
/// Every rasterizer and transform in this crate rounds through here so that
/// `x.5` values land on the same pixel regardless of platform. Values outside
/// the `i32` range saturate.
///
/// ```
/// use rasterkit::geometry::round_coord;
///
/// assert_eq!(round_coord(2.5), 2);
/// assert_eq!(round_coord(3.5), 4);
/// assert_eq!(round_coord(-2.5), -2);
/// ```
#[must_use]
#[inline]
pub fn round_coord(v: f64) -> i32 {
    v.round_ties_even() as i32
}

/// A pixel coordinate on the integer grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Pixel {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Pixel {
    /// Create a new pixel.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Same pixel with the axes exchanged.
    #[must_use]
    pub const fn transposed(self) -> Self {
        Self::new(self.y, self.x)
    }

    /// Convert to a fractional point.
    #[must_use]
    pub fn to_point(self) -> Point {
        Point::new(f64::from(self.x), f64::from(self.y))
    }
}

impl From<(i32, i32)> for Pixel {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<[i32; 2]> for Pixel {
    fn from([x, y]: [i32; 2]) -> Self {
        Self::new(x, y)
    }
}

/// A 2D point with fractional coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Linear interpolation between two points.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self::new(
            (1.0 - t) * self.x + t * other.x,
            (1.0 - t) * self.y + t * other.y,
        )
    }

    /// Round both coordinates to the nearest pixel.
    #[must_use]
    pub fn round(self) -> Pixel {
        Pixel::new(round_coord(self.x), round_coord(self.y))
    }
}

impl From<Pixel> for Point {
    fn from(p: Pixel) -> Self {
        p.to_point()
    }
}

/// Rectangular clip window with inclusive bounds.
///
/// Construction normalizes the bounds so that `x_min <= x_max` and
/// `y_min <= y_max` always hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipWindow {
    x_min: i32,
    y_min: i32,
    x_max: i32,
    y_max: i32,
}

impl ClipWindow {
    /// Create a window from two opposite corners given in any order.
    #[must_use]
    pub fn new(x_min: i32, y_min: i32, x_max: i32, y_max: i32) -> Self {
        Self {
            x_min: x_min.min(x_max),
            y_min: y_min.min(y_max),
            x_max: x_min.max(x_max),
            y_max: y_min.max(y_max),
        }
    }

    /// Left bound.
    #[must_use]
    pub const fn x_min(&self) -> i32 {
        self.x_min
    }

    /// Lower bound.
    #[must_use]
    pub const fn y_min(&self) -> i32 {
        self.y_min
    }

    /// Right bound.
    #[must_use]
    pub const fn x_max(&self) -> i32 {
        self.x_max
    }

    /// Upper bound.
    #[must_use]
    pub const fn y_max(&self) -> i32 {
        self.y_max
    }

    /// Check if a pixel lies inside the window, boundaries included.
    #[must_use]
    pub fn contains(&self, p: Pixel) -> bool {
        p.x >= self.x_min && p.x <= self.x_max && p.y >= self.y_min && p.y <= self.y_max
    }
}
